use crate::domain::model::{Resume, StringTable};
use crate::render::escape::escape_html;

/// Renders the three resume blocks. An empty collection renders its
/// placeholder hint instead of an empty list.
pub fn render_resume(resume: &Resume, strings: &StringTable) -> String {
    let label_exp = strings.label("resume.experience", "Experience");
    let label_skills = strings.label("resume.skills", "Skills");
    let label_edu = strings.label("resume.education", "Education");

    let experience = resume
        .experience
        .iter()
        .map(|e| {
            let bullets = e
                .bullets
                .iter()
                .map(|b| format!("<li>{}</li>", escape_html(b)))
                .collect::<String>();
            let bullets = if bullets.is_empty() {
                String::new()
            } else {
                format!("<ul>{}</ul>", bullets)
            };
            let location = e
                .location
                .as_deref()
                .map(|l| format!(" · {}", escape_html(l)))
                .unwrap_or_default();

            format!(
                r#"<div class="block">
  <h4>{role} · <span class="muted">{company}</span></h4>
  <div class="muted small">{period}{location}</div>
  {bullets}
</div>
"#,
                role = escape_html(&e.role),
                company = escape_html(&e.company),
                period = escape_html(&e.period),
                location = location,
                bullets = bullets,
            )
        })
        .collect::<String>();

    let skills = resume
        .skills
        .iter()
        .map(|s| format!(r#"<span class="tag">{}</span>"#, escape_html(s)))
        .collect::<String>();

    let education = resume
        .education
        .iter()
        .map(|e| {
            let period = e
                .period
                .as_deref()
                .map(|p| format!(" · {}", escape_html(p)))
                .unwrap_or_default();
            format!(
                r#"<div class="block">
  <h4>{school}</h4>
  <div class="muted small">{degree}{period}</div>
</div>
"#,
                school = escape_html(&e.school),
                degree = escape_html(&e.degree),
                period = period,
            )
        })
        .collect::<String>();

    format!(
        r#"<div class="block">
  <h4>{label_exp}</h4>
  {experience}
</div>
<div class="block">
  <h4>{label_skills}</h4>
  <div class="tags">{skills}</div>
</div>
<div class="block">
  <h4>{label_edu}</h4>
  {education}
</div>
"#,
        label_exp = escape_html(label_exp),
        experience = non_empty_or(
            &experience,
            r#"<div class="muted">(add items in resume.json)</div>"#
        ),
        label_skills = escape_html(label_skills),
        skills = non_empty_or(
            &skills,
            r#"<span class="muted">(add skills in resume.json)</span>"#
        ),
        label_edu = escape_html(label_edu),
        education = non_empty_or(
            &education,
            r#"<div class="muted">(add education in resume.json)</div>"#
        ),
    )
}

/// Renders the contact block: one external-opening pill per link.
pub fn render_contact(resume: &Resume) -> String {
    resume
        .links
        .iter()
        .map(|l| {
            format!(
                r#"<a class="pill" target="_blank" rel="noreferrer" href="{href}"><strong>{label}</strong><span>{url}</span></a>
"#,
                href = escape_html(&l.url),
                label = escape_html(&l.label),
                url = escape_html(&l.url),
            )
        })
        .collect()
}

fn non_empty_or<'a>(content: &'a str, placeholder: &'a str) -> &'a str {
    if content.is_empty() {
        placeholder
    } else {
        content
    }
}
