use crate::domain::model::{Project, StringTable};
use crate::render::escape::escape_html;

/// Thumbnail used when a project carries no screenshot.
pub const PLACEHOLDER_IMAGE: &str = "./assets/placeholder.svg";

/// Grid content when the data load fails. The error itself only goes to the
/// log; the page shows this generic message.
pub const FALLBACK_ERROR_HTML: &str = r#"<div class="muted">Failed to load data.</div>"#;

/// Renders the project grid content: one card per project, in source order.
/// Thumbnails are lazy-loaded and carry `data-lightbox-*` attributes the
/// lightbox dialog reads; the Live/Repo actions appear only when the project
/// has the corresponding URL.
pub fn render_project_grid(projects: &[Project], strings: &StringTable) -> String {
    let label_live = strings.label("project.live", "Live");
    let label_repo = strings.label("project.repo", "Repo");

    let mut html = String::new();
    for project in projects {
        html.push_str(&render_card(project, label_live, label_repo));
    }
    html
}

fn render_card(project: &Project, label_live: &str, label_repo: &str) -> String {
    let src = project.screenshot.as_deref().unwrap_or(PLACEHOLDER_IMAGE);
    let alt = if project.title.is_empty() {
        "Project screenshot".to_string()
    } else {
        format!("{} screenshot", project.title)
    };

    let tags = project
        .tags
        .iter()
        .map(|t| format!(r#"<span class="tag">{}</span>"#, escape_html(t)))
        .collect::<String>();

    let mut actions = String::new();
    if let Some(url) = &project.url {
        actions.push_str(&render_action(url, label_live));
    }
    if let Some(repo) = &project.repo {
        actions.push_str(&render_action(repo, label_repo));
    }

    format!(
        r#"<article class="card">
  <img class="thumb" alt="{alt}" loading="lazy" src="{src}" data-lightbox-src="{src}" data-lightbox-caption="{caption}">
  <div class="body">
    <h4>{title}</h4>
    <p>{summary}</p>
    <div class="tags">{tags}</div>
    <div class="actions">{actions}</div>
  </div>
</article>
"#,
        alt = escape_html(&alt),
        src = escape_html(src),
        caption = escape_html(&project.title),
        title = escape_html(&project.title),
        summary = escape_html(&project.summary),
        tags = tags,
        actions = actions,
    )
}

fn render_action(href: &str, label: &str) -> String {
    format!(
        r#"<a class="action" target="_blank" rel="noreferrer" href="{}">{}</a>"#,
        escape_html(href),
        escape_html(label)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(title: &str) -> Project {
        Project {
            title: title.to_string(),
            summary: "A demo project".to_string(),
            tags: vec!["rust".to_string(), "web".to_string()],
            screenshot: Some("shots/demo.png".to_string()),
            url: Some("https://demo.example.com".to_string()),
            repo: Some("https://github.com/x/demo".to_string()),
        }
    }

    #[test]
    fn test_card_contains_escaped_fields() {
        let mut p = project("<b>Evil</b>");
        p.summary = r#"say "hi" & 'bye'"#.to_string();
        p.tags = vec!["<tag>".to_string()];

        let html = render_project_grid(&[p], &StringTable::default());

        assert!(html.contains("&lt;b&gt;Evil&lt;/b&gt;"));
        assert!(html.contains("say &quot;hi&quot; &amp; &#39;bye&#39;"));
        assert!(html.contains(r#"<span class="tag">&lt;tag&gt;</span>"#));
        assert!(!html.contains("<b>Evil</b>"));
        assert!(!html.contains("<tag>"));
    }

    #[test]
    fn test_missing_screenshot_uses_placeholder() {
        let mut p = project("Demo");
        p.screenshot = None;

        let html = render_project_grid(&[p], &StringTable::default());

        assert!(html.contains(&format!(r#"src="{}""#, PLACEHOLDER_IMAGE)));
    }

    #[test]
    fn test_no_links_renders_no_actions() {
        let mut p = project("Demo");
        p.url = None;
        p.repo = None;

        let html = render_project_grid(&[p], &StringTable::default());

        assert!(html.contains(r#"<div class="actions"></div>"#));
        assert!(!html.contains(r#"class="action""#));
    }

    #[test]
    fn test_both_links_render_live_then_repo() {
        let html = render_project_grid(&[project("Demo")], &StringTable::default());

        assert_eq!(html.matches(r#"class="action""#).count(), 2);
        let live_pos = html.find(">Live</a>").unwrap();
        let repo_pos = html.find(">Repo</a>").unwrap();
        assert!(live_pos < repo_pos);
    }

    #[test]
    fn test_action_labels_come_from_string_table() {
        let strings = StringTable(serde_json::json!({
            "project": { "live": "線上", "repo": "程式庫" }
        }));

        let html = render_project_grid(&[project("Demo")], &strings);

        assert!(html.contains(">線上</a>"));
        assert!(html.contains(">程式庫</a>"));
    }

    #[test]
    fn test_thumbnail_carries_lightbox_attributes() {
        let html = render_project_grid(&[project("Demo")], &StringTable::default());

        assert!(html.contains(r#"data-lightbox-src="shots/demo.png""#));
        assert!(html.contains(r#"data-lightbox-caption="Demo""#));
        assert!(html.contains(r#"loading="lazy""#));
    }

    #[test]
    fn test_untitled_project_gets_generic_alt_text() {
        let mut p = project("");
        p.screenshot = None;

        let html = render_project_grid(&[p], &StringTable::default());

        assert!(html.contains(r#"alt="Project screenshot""#));
    }

    #[test]
    fn test_empty_list_renders_nothing() {
        assert_eq!(render_project_grid(&[], &StringTable::default()), "");
    }
}
