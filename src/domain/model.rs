use serde::{Deserialize, Serialize};

/// One portfolio entry from `projects.<locale>.json`. Order in the source
/// list is the render order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub screenshot: Option<String>,
    pub url: Option<String>,
    pub repo: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Resume {
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub links: Vec<ContactLink>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Experience {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub period: String,
    pub location: Option<String>,
    #[serde(default)]
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Education {
    #[serde(default)]
    pub school: String,
    #[serde(default)]
    pub degree: String,
    pub period: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactLink {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub url: String,
}

/// Nested string table from `i18n.<locale>.json`. Keys are resolved by
/// walking the nesting with a dotted path, e.g. `project.live`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StringTable(pub serde_json::Value);

impl StringTable {
    /// Resolve a dotted key path. Returns `Some` only for non-empty string
    /// leaves; anything else leaves the caller's default in force.
    pub fn lookup(&self, dotted_key: &str) -> Option<&str> {
        let mut current = &self.0;
        for part in dotted_key.split('.') {
            current = current.get(part)?;
        }
        match current.as_str() {
            Some(s) if !s.trim().is_empty() => Some(s),
            _ => None,
        }
    }

    /// Label helper: table value when present, hardcoded fallback otherwise.
    pub fn label<'a>(&'a self, dotted_key: &str, default: &'a str) -> &'a str {
        self.lookup(dotted_key).unwrap_or(default)
    }
}

/// Joined result of one fetch pass, consumed by a single render.
#[derive(Debug, Clone)]
pub struct PageData {
    pub strings: StringTable,
    pub projects: Vec<Project>,
    pub resume: Resume,
}
