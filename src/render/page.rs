use crate::core::lightbox::{Lightbox, LightboxState};
use crate::render::escape::escape_html;
use crate::utils::error::{Result, SiteError};
use regex::Regex;

/// Replaces the content of the template element carrying the given `id`.
/// The page markup owns its containers; the renderer only writes into them.
///
/// Contract: containers are empty in the template (the element's first
/// matching close tag ends it), which holds for the shipped `site/index.html`.
pub fn fill_container(html: &str, id: &str, content: &str) -> Result<String> {
    let open_re = Regex::new(&format!(
        r#"<(\w+)[^>]*\bid="{}"[^>]*>"#,
        regex::escape(id)
    ))
    .map_err(|e| SiteError::ConfigError {
        message: format!("Invalid container id {:?}: {}", id, e),
    })?;

    let caps = open_re
        .captures(html)
        .ok_or_else(|| SiteError::TemplateError { id: id.to_string() })?;
    let open_tag = caps.get(0).unwrap();
    let tag_name = &caps[1];

    let close_tag = format!("</{}>", tag_name);
    let close_start = html[open_tag.end()..]
        .find(&close_tag)
        .map(|i| open_tag.end() + i)
        .ok_or_else(|| SiteError::TemplateError { id: id.to_string() })?;

    let mut out = String::with_capacity(html.len() + content.len());
    out.push_str(&html[..open_tag.end()]);
    out.push_str(content);
    out.push_str(&html[close_start..]);
    Ok(out)
}

/// Writes the current year into the `#year` element.
pub fn set_year(html: &str) -> Result<String> {
    let year = chrono::Local::now().format("%Y").to_string();
    fill_container(html, "year", &year)
}

/// Renders the lightbox dialog's inner markup from the controller state. The
/// published page carries the initial closed state; the thumbnail attributes
/// emitted by the project grid feed later transitions.
pub fn render_lightbox(lightbox: &Lightbox) -> String {
    let (src, caption) = match lightbox.state() {
        LightboxState::Open { src, caption } => (src.as_str(), caption.as_str()),
        LightboxState::Closed => ("", ""),
    };

    format!(
        r#"<img id="lightboxImg" src="{src}" alt="">
<div id="lightboxCaption">{caption}</div>
<button id="lightboxClose" type="button" aria-label="Close">✕</button>
"#,
        src = escape_html(src),
        caption = escape_html(caption),
    )
}
