use html2text::render::text_renderer::TrivialDecorator;
use roxmltree::Node;

use super::types::JobEntry;

pub const DESCRIPTION_WIDTH: usize = 78;

#[derive(Debug, thiserror::Error)]
pub enum FeedParseError {
    #[error("xml feed parse error: {0}")]
    Xml(#[from] roxmltree::Error),
    #[error("feed has no channel element")]
    MissingChannel,
    #[error("description html could not be rendered: {0}")]
    Html(String),
}

pub fn parse_feed_str(xml: &str) -> Result<Vec<JobEntry>, FeedParseError> {
    let doc = roxmltree::Document::parse(xml)?;
    let channel = doc
        .root_element()
        .first_element_child()
        .ok_or(FeedParseError::MissingChannel)?;

    let entries = channel
        .descendants()
        .filter(|node| node.has_tag_name("item"))
        .map(entry_from_item)
        .collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(count = entries.len(), "parsed feed items");
    Ok(entries)
}

pub fn html_to_text(html: &str) -> Result<String, FeedParseError> {
    html2text::config::with_decorator(TrivialDecorator::new())
        .string_from_read(html.as_bytes(), DESCRIPTION_WIDTH)
        .map_err(|error| FeedParseError::Html(error.to_string()))
}

pub fn strip_newlines(text: &str) -> String {
    text.replace('\n', "")
}

fn entry_from_item(item: Node<'_, '_>) -> Result<JobEntry, FeedParseError> {
    let mut entry = JobEntry {
        guid: field_text(item, "guid"),
        title: field_text(item, "title"),
        company: field_text(item, "company"),
        location: field_text(item, "location"),
        description: field_text(item, "description"),
        first_line_description: String::new(),
    };
    if !entry.description.is_empty() {
        entry.description = html_to_text(&entry.description)?;
        entry.first_line_description = strip_newlines(&entry.description);
    }
    Ok(entry)
}

fn field_text(item: Node<'_, '_>, field: &str) -> String {
    item.descendants()
        .find(|node| node.is_element() && node.has_tag_name(field))
        .and_then(|node| node.text())
        .map(str::trim)
        .unwrap_or_default()
        .to_string()
}
