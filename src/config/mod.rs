pub mod cli;
pub mod site_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "folio-render")]
#[command(about = "Render a static portfolio page from JSON data")]
pub struct CliConfig {
    /// Base URL serving the JSON data documents
    #[arg(long, default_value = "http://localhost:8080/data")]
    pub data_url: String,

    /// Page path used for locale detection (an /en/ segment selects English)
    #[arg(long, default_value = "/")]
    pub page_path: String,

    /// Explicit locale; takes precedence over page-path detection
    #[arg(long)]
    pub locale: Option<String>,

    /// Directory the template and output paths are relative to
    #[arg(long, default_value = ".")]
    pub site_root: String,

    /// HTML page template with the containers the renderer fills
    #[arg(long, default_value = "site/index.html")]
    pub template: String,

    /// Where the finished page is written
    #[arg(long, default_value = "dist/index.html")]
    pub output: String,

    /// Load settings from a TOML file instead of the flags above
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn data_url(&self) -> &str {
        &self.data_url
    }

    fn page_path(&self) -> &str {
        &self.page_path
    }

    fn locale_override(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    fn template_path(&self) -> &str {
        &self.template
    }

    fn output_path(&self) -> &str {
        &self.output
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("data_url", &self.data_url)?;
        validation::validate_path("site_root", &self.site_root)?;
        validation::validate_path("template", &self.template)?;
        validation::validate_path("output", &self.output)?;
        if let Some(locale) = &self.locale {
            validation::validate_locale_code("locale", locale)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> CliConfig {
        CliConfig {
            data_url: "https://example.com/data".to_string(),
            page_path: "/".to_string(),
            locale: None,
            site_root: ".".to_string(),
            template: "site/index.html".to_string(),
            output: "dist/index.html".to_string(),
            config: None,
            verbose: false,
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_bad_data_url_fails() {
        let mut config = base_config();
        config.data_url = "not-a-url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_locale_fails() {
        let mut config = base_config();
        config.locale = Some("fr".to_string());
        assert!(config.validate().is_err());
    }
}
