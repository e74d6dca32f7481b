/// HTML-escapes untrusted text before interpolation. Every user-supplied
/// field, including `href`/`src` attribute values, goes through here.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
