use std::fmt;

/// Supported page languages. `ZhTw` is the default when nothing selects a
/// language explicitly, matching the published site layout where the English
/// variant lives under an `/en/` path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    ZhTw,
    En,
}

impl Locale {
    pub fn code(&self) -> &'static str {
        match self {
            Locale::ZhTw => "zh-TW",
            Locale::En => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Locale> {
        match code {
            "zh-TW" => Some(Locale::ZhTw),
            "en" => Some(Locale::En),
            _ => None,
        }
    }

    pub fn supported_codes() -> Vec<&'static str> {
        vec!["zh-TW", "en"]
    }

    /// Pure function of the page path: an `/en/` segment selects English,
    /// anything else the default language.
    pub fn from_page_path(path: &str) -> Locale {
        if path.contains("/en/") {
            Locale::En
        } else {
            Locale::ZhTw
        }
    }

    /// Explicit locale wins over path sniffing. The path heuristic is only a
    /// fallback for deployments that encode the language in the URL.
    pub fn resolve(explicit: Option<&str>, page_path: &str) -> Locale {
        explicit
            .and_then(Locale::from_code)
            .unwrap_or_else(|| Locale::from_page_path(page_path))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Resolved URLs of the three data documents for one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub strings: String,
    pub projects: String,
    pub resume: String,
}

impl DataPaths {
    pub fn for_locale(base_url: &str, locale: Locale) -> Self {
        let base = base_url.trim_end_matches('/');
        let code = locale.code();
        Self {
            strings: format!("{}/i18n.{}.json", base, code),
            projects: format!("{}/projects.{}.json", base, code),
            resume: format!("{}/resume.{}.json", base, code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_from_page_path() {
        assert_eq!(Locale::from_page_path("/portfolio/en/index.html"), Locale::En);
        assert_eq!(Locale::from_page_path("/portfolio/"), Locale::ZhTw);
        assert_eq!(Locale::from_page_path("/"), Locale::ZhTw);
        // "en" must be its own segment
        assert_eq!(Locale::from_page_path("/engineering/"), Locale::ZhTw);
    }

    #[test]
    fn test_explicit_locale_wins_over_path() {
        assert_eq!(Locale::resolve(Some("en"), "/"), Locale::En);
        assert_eq!(Locale::resolve(Some("zh-TW"), "/en/"), Locale::ZhTw);
        assert_eq!(Locale::resolve(None, "/en/"), Locale::En);
        assert_eq!(Locale::resolve(None, "/"), Locale::ZhTw);
        // unknown explicit code falls back to the path heuristic
        assert_eq!(Locale::resolve(Some("fr"), "/en/"), Locale::En);
    }

    #[test]
    fn test_data_paths_for_locale() {
        let paths = DataPaths::for_locale("https://example.com/data/", Locale::En);

        assert_eq!(paths.strings, "https://example.com/data/i18n.en.json");
        assert_eq!(paths.projects, "https://example.com/data/projects.en.json");
        assert_eq!(paths.resume, "https://example.com/data/resume.en.json");
    }

    #[test]
    fn test_data_paths_default_locale() {
        let paths = DataPaths::for_locale("https://example.com/data", Locale::ZhTw);

        assert_eq!(paths.projects, "https://example.com/data/projects.zh-TW.json");
    }
}
