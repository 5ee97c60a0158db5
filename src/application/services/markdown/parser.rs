use crate::domain::links::link::{Link, OTHERS_SUBJECT, Subject};

use super::codec::{decode_header_line, decode_link_line, is_bullet_line};

/// Builds the subject view of a document.
///
/// Headers open a new subject (flushing the open one), bullets before any
/// header land in [`OTHERS_SUBJECT`], and everything else is ignored. Order is
/// preserved and nothing is deduplicated. Parsing never fails; bullets that do
/// not carry a `[title](url)` are dropped.
pub fn parse(text: &str) -> Vec<Subject> {
    let mut subjects = Vec::new();
    let mut current: Option<Subject> = None;

    for line in text.lines() {
        if let Some(name) = decode_header_line(line) {
            if let Some(done) = current.take() {
                subjects.push(done);
            }
            current = Some(Subject::new(name));
        } else if is_bullet_line(line) {
            let subject = current.get_or_insert_with(|| Subject::new(OTHERS_SUBJECT));
            if let Some((title, url)) = decode_link_line(line) {
                subject.links.push(Link::new(title, url));
            }
        }
    }

    if let Some(done) = current {
        subjects.push(done);
    }
    subjects
}
