use crate::domain::model::StringTable;
use crate::render::escape::escape_html;
use regex::Regex;
use std::sync::OnceLock;

fn i18n_attr_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"<\w+[^>]*\bdata-i18n="([^"]+)"[^>]*>"#).unwrap())
}

/// Replaces the text content of every `data-i18n`-tagged element whose key
/// resolves to a non-empty string in the table. Elements with unresolvable
/// keys keep their default text, so every label fails open to the markup's
/// hardcoded fallback.
///
/// Contract: tagged elements contain text only, no child elements.
pub fn apply_strings(html: &str, strings: &StringTable) -> String {
    let mut out = String::with_capacity(html.len());
    let mut cursor = 0;

    for caps in i18n_attr_regex().captures_iter(html) {
        let open_tag = caps.get(0).unwrap();
        let key = &caps[1];

        // text content runs from the end of the open tag to the next tag
        let text_start = open_tag.end();
        let text_end = html[text_start..]
            .find('<')
            .map(|i| text_start + i)
            .unwrap_or(html.len());

        out.push_str(&html[cursor..text_start]);
        match strings.lookup(key) {
            Some(value) => out.push_str(&escape_html(value)),
            None => out.push_str(&html[text_start..text_end]),
        }
        cursor = text_end;
    }

    out.push_str(&html[cursor..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> StringTable {
        StringTable(serde_json::json!({
            "project": { "live": "線上" },
            "nav": { "contact": "聯絡" }
        }))
    }

    #[test]
    fn test_resolvable_key_replaces_text() {
        let html = r#"<a class="action" data-i18n="project.live">Live</a>"#;
        let out = apply_strings(html, &table());

        assert_eq!(out, r#"<a class="action" data-i18n="project.live">線上</a>"#);
    }

    #[test]
    fn test_unresolvable_key_keeps_default_text() {
        let html = r#"<span data-i18n="project.missing">Live</span>"#;
        let out = apply_strings(html, &table());

        assert_eq!(out, html);
    }

    #[test]
    fn test_multiple_elements_in_one_pass() {
        let html = concat!(
            r#"<h3 data-i18n="nav.contact">Contact</h3>"#,
            r#"<p>untouched</p>"#,
            r#"<a data-i18n="project.live">Live</a>"#,
        );
        let out = apply_strings(html, &table());

        assert!(out.contains(">聯絡</h3>"));
        assert!(out.contains("<p>untouched</p>"));
        assert!(out.contains(">線上</a>"));
    }

    #[test]
    fn test_replacement_text_is_escaped() {
        let strings = StringTable(serde_json::json!({
            "nav": { "contact": "<b>Contact</b>" }
        }));
        let html = r#"<span data-i18n="nav.contact">Contact</span>"#;
        let out = apply_strings(html, &strings);

        assert_eq!(
            out,
            r#"<span data-i18n="nav.contact">&lt;b&gt;Contact&lt;/b&gt;</span>"#
        );
    }

    #[test]
    fn test_empty_table_leaves_page_untouched() {
        let html = r#"<div><span data-i18n="a.b">Default</span></div>"#;
        assert_eq!(apply_strings(html, &StringTable::default()), html);
    }
}
