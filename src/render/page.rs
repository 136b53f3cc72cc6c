use crate::profile::{ProfileDocument, Section};
use crate::render::html::{escape_html, render_aef_profiles_from};
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct PageOptions {
    pub title: String,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            title: "CAPIF API Profiles".to_string(),
        }
    }
}

/// Table rows for every profile in the document, ids unique across sections.
pub fn render_rows(doc: &ProfileDocument) -> String {
    let mut next_index = 0;
    let mut out = String::new();
    for section in doc.sections() {
        out.push_str(&render_aef_profiles_from(section.profiles, next_index));
        next_index += section.profiles.len();
    }
    out
}

/// Render a self-contained HTML page with one profile table per service API.
///
/// Like the rows themselves, the template is filled by plain replacement
/// since the embedded markup is full of braces.
pub fn render_page(doc: &ProfileDocument, options: &PageOptions) -> String {
    let mut next_index = 0;
    let mut sections = String::new();
    for section in doc.sections() {
        sections.push_str(&render_section(&section, next_index));
        next_index += section.profiles.len();
    }

    const TEMPLATE: &str = r#"<!doctype html>
<html>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>__TITLE__</title>
<link href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/css/bootstrap.min.css" rel="stylesheet">
<style>
  body { margin: 0; }
  header { padding: 12px 16px; border-bottom: 1px solid #ddd; }
  section { padding: 12px 16px; }
  tr[data-bs-toggle] { cursor: pointer; }
</style>
</head>
<body>
<header>
  <h1 class="h4">__TITLE__</h1>
</header>
__SECTIONS__
<script src="https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/js/bootstrap.bundle.min.js"></script>
</body>
</html>
"#;

    TEMPLATE
        .replace("__TITLE__", &escape_html(&options.title))
        .replace("__SECTIONS__", &sections)
}

fn render_section(section: &Section<'_>, first_index: usize) -> String {
    let name = section.api_name.unwrap_or("AEF profiles");
    if section.profiles.is_empty() {
        warn!("service API {:?} has no AEF profiles", name);
    } else {
        debug!(
            "rendering {} AEF profile(s) for {:?} from row id {}",
            section.profiles.len(),
            name,
            first_index
        );
    }

    let mut meta = Vec::new();
    if let Some(id) = section.api_id.filter(|t| !t.is_empty()) {
        meta.push(format!("apiId: {}", escape_html(id.as_str())));
    }
    if let Some(desc) = section.description.filter(|t| !t.is_empty()) {
        meta.push(escape_html(desc.as_str()).into_owned());
    }
    let meta = if meta.is_empty() {
        String::new()
    } else {
        format!("<p class=\"text-muted\">{}</p>\n", meta.join(" | "))
    };

    format!(
        concat!(
            "<section>\n",
            "<h2 class=\"h5\">{name}</h2>\n",
            "{meta}",
            "<table class=\"table\">\n",
            "<thead><tr><th>AEF Id</th><th>Location</th><th>Domain</th><th>Protocol</th><th>Security Methods</th></tr></thead>\n",
            "<tbody>\n{rows}</tbody>\n",
            "</table>\n",
            "</section>\n",
        ),
        name = escape_html(name),
        meta = meta,
        rows = render_aef_profiles_from(section.profiles, first_index),
    )
}
