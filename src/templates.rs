use std::collections::HashMap;

use pulldown_cmark::{html, Event, Options, Parser, Tag, TagEnd};
use tera::Tera;

use crate::error::AppError;

/// Panel page template name
pub const PANELS_TEMPLATE: &str = "panels.html";

/// Initialize the Tera template engine with the built-in templates
pub fn init_templates() -> Result<Tera, AppError> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        ("base.html", include_str!("../templates/base.html")),
        (PANELS_TEMPLATE, include_str!("../templates/panels.html")),
    ])?;

    tera.register_filter("markdown", markdown_filter);

    Ok(tera)
}

/// Render markdown to HTML.
///
/// Responder output echoes user input, so raw HTML in the source is emitted as
/// escaped text and links and images are reduced to their text.
pub fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(source, options).filter_map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Some(Event::Text(raw)),
        Event::Start(Tag::Link { .. } | Tag::Image { .. }) => None,
        Event::End(TagEnd::Link | TagEnd::Image) => None,
        other => Some(other),
    });

    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

fn markdown_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("markdown filter expects a string"))?;
    Ok(tera::Value::String(render_markdown(s)))
}
