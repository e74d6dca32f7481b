use crate::core::ConfigProvider;
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// TOML configuration, the flag-free way to run the renderer:
///
/// ```toml
/// [source]
/// data_url = "https://someone.github.io/portfolio/data"
/// locale = "en"
///
/// [page]
/// template = "site/index.html"
/// output = "dist/en/index.html"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub source: SourceConfig,
    pub page: PageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub data_url: String,
    pub page_path: Option<String>,
    pub locale: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    pub site_root: Option<String>,
    pub template: Option<String>,
    pub output: Option<String>,
}

impl SiteConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SiteError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| SiteError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` references with the environment value, leaving
    /// unset variables as-is.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    pub fn site_root(&self) -> &str {
        self.page.site_root.as_deref().unwrap_or(".")
    }
}

impl ConfigProvider for SiteConfig {
    fn data_url(&self) -> &str {
        &self.source.data_url
    }

    fn page_path(&self) -> &str {
        self.source.page_path.as_deref().unwrap_or("/")
    }

    fn locale_override(&self) -> Option<&str> {
        self.source.locale.as_deref()
    }

    fn template_path(&self) -> &str {
        self.page.template.as_deref().unwrap_or("site/index.html")
    }

    fn output_path(&self) -> &str {
        self.page.output.as_deref().unwrap_or("dist/index.html")
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("source.data_url", &self.source.data_url)?;
        validation::validate_path("page.site_root", self.site_root())?;
        validation::validate_path("page.template", self.template_path())?;
        validation::validate_path("page.output", self.output_path())?;
        if let Some(locale) = self.locale_override() {
            validation::validate_locale_code("source.locale", locale)?;
        }
        Ok(())
    }
}
