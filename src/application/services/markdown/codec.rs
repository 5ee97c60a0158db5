use once_cell::sync::Lazy;
use regex::Regex;

/// Marker that opens a subject heading. Only this exact level is recognised;
/// other heading levels are treated as prose.
pub const HEADER_MARKER: &str = "### ";

static LINK_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[(.*?)\]\((.*?)\)").unwrap());

/// `- [title](url)`. Brackets and parentheses are not escaped.
pub fn encode_link(title: &str, url: &str) -> String {
    format!("- {}", encode_link_pattern(title, url))
}

/// `[title](url)`, the text that identifies a link inside a line.
pub fn encode_link_pattern(title: &str, url: &str) -> String {
    format!("[{}]({})", title, url)
}

pub fn encode_header(subject: &str) -> String {
    format!("{}{}", HEADER_MARKER, subject)
}

pub fn is_bullet_line(line: &str) -> bool {
    line.trim().starts_with('-')
}

pub fn decode_link_line(line: &str) -> Option<(String, String)> {
    let line = line.trim();
    if !line.starts_with('-') {
        return None;
    }
    let caps = LINK_REGEX.captures(line)?;
    let title = caps.get(1)?.as_str().to_string();
    let url = caps.get(2)?.as_str().to_string();
    Some((title, url))
}

pub fn decode_header_line(line: &str) -> Option<String> {
    let line = line.trim();
    line.strip_prefix(HEADER_MARKER)
        .map(|rest| rest.trim().to_string())
}
