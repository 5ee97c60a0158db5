use std::collections::HashSet;

use crate::domain::links::link::Link;

use super::codec::{encode_header, encode_link, encode_link_pattern};

/// Appends a subject section to `text`.
///
/// The input is always a prefix of the output. A blank line separates the new
/// section from existing content. The subject is trimmed the way the parser
/// reads headers back; a blank `subject` writes the links without a header.
pub fn append(text: &str, subject: &str, links: &[Link]) -> String {
    let subject = subject.trim();
    let mut out = String::with_capacity(text.len() + 64 + links.len() * 48);
    out.push_str(text);

    if !text.is_empty() && !ends_with_blank_line(text) {
        if !text.ends_with('\n') {
            out.push('\n');
        }
        out.push('\n');
    }

    if !subject.is_empty() {
        out.push_str(&encode_header(subject));
        out.push_str("\n\n");
    }

    for link in links {
        out.push_str(&encode_link(&link.title, &link.url));
        out.push('\n');
    }
    out.push('\n');
    out
}

fn ends_with_blank_line(text: &str) -> bool {
    text.ends_with("\n\n") || text.ends_with("\n\r\n")
}

/// Drops every line containing the `[title](url)` form of any given link.
///
/// Matching is substring containment on raw lines, so a prose line quoting a
/// link is removed too. Links absent from the text leave it byte-identical.
pub fn delete_links(text: &str, links: &[Link]) -> String {
    let patterns: HashSet<String> = links
        .iter()
        .map(|l| {
            let (title, url) = l.identity();
            encode_link_pattern(title, url)
        })
        .collect();
    if patterns.is_empty() {
        return text.to_string();
    }

    text.split('\n')
        .filter(|line| !patterns.iter().any(|p| line.contains(p.as_str())))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Removes the zero-based line `index`; `None` when out of range.
pub fn delete_line(text: &str, index: usize) -> Option<String> {
    let mut lines: Vec<&str> = text.split('\n').collect();
    if index >= lines.len() {
        return None;
    }
    lines.remove(index);
    Some(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::markdown::parser::parse;

    #[test]
    fn append_to_empty_document() {
        let out = append("", "Reading", &[Link::new("A", "http://a")]);
        assert_eq!(out, "### Reading\n\n- [A](http://a)\n\n");

        let subjects = parse(&out);
        assert_eq!(subjects.len(), 1);
        assert_eq!(subjects[0].name, "Reading");
        assert_eq!(subjects[0].links, vec![Link::new("A", "http://a")]);
    }

    #[test]
    fn append_separates_with_single_blank_line() {
        assert_eq!(append("x", "S", &[]), "x\n\n### S\n\n\n");
        assert_eq!(append("x\n", "S", &[]), "x\n\n### S\n\n\n");
        assert_eq!(append("x\n\n", "S", &[]), "x\n\n### S\n\n\n");
    }

    #[test]
    fn append_keeps_crlf_blank_line() {
        assert_eq!(append("x\r\n\r\n", "S", &[]), "x\r\n\r\n### S\n\n\n");
        assert_eq!(append("x\r\n", "S", &[]), "x\r\n\n### S\n\n\n");
    }

    #[test]
    fn blank_subject_writes_no_header() {
        let first = append("", "Work", &[Link::new("a", "1")]);
        let out = append(&first, "   ", &[Link::new("b", "2")]);
        assert_eq!(out, append(&first, "", &[Link::new("b", "2")]));
        assert!(!out.contains("###    "));
    }

    #[test]
    fn padded_subject_round_trips_trimmed() {
        let out = append("", " Work ", &[Link::new("a", "1")]);
        assert_eq!(out, "### Work\n\n- [a](1)\n\n");

        let out = append(&out, "\tReading ", &[Link::new("b", "2")]);
        let subjects = parse(&out);
        let names: Vec<&str> = subjects.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Work", "Reading"]);
        assert_eq!(subjects[1].links, vec![Link::new("b", "2")]);
    }

    #[test]
    fn append_without_subject_writes_only_links() {
        let out = append("### Old\n", "", &[Link::new("a", "1"), Link::new("b", "2")]);
        assert_eq!(out, "### Old\n\n- [a](1)\n- [b](2)\n\n");
    }

    #[test]
    fn append_is_additive() {
        let original = "intro line\n- [keep](me)";
        let out = append(original, "New", &[Link::new("n", "u")]);
        assert!(out.starts_with(original));
        assert!(out.len() >= original.len());
    }

    #[test]
    fn repeated_append_produces_distinct_sections() {
        let links = [Link::new("A", "http://a")];
        let once = append("", "S", &links);
        let twice = append(&once, "S", &links);
        let subjects = parse(&twice);
        assert_eq!(subjects.len(), 2);
        assert!(subjects.iter().all(|s| s.name == "S" && s.links == links));
    }

    #[test]
    fn appended_sections_round_trip_through_parser() {
        let sections = vec![
            ("Work", vec![Link::new("Go docs", "https://go.dev"), Link::new("Rust", "https://rust-lang.org")]),
            ("Empty", vec![]),
            ("Reading", vec![Link::new("A", "http://a")]),
        ];
        let mut text = String::new();
        for (name, links) in &sections {
            text = append(&text, name, links);
        }

        let subjects = parse(&text);
        assert_eq!(subjects.len(), sections.len());
        for (subject, (name, links)) in subjects.iter().zip(&sections) {
            assert_eq!(subject.name, *name);
            assert_eq!(&subject.links, links);
        }
    }

    #[test]
    fn delete_removes_matching_lines() {
        let out = delete_links("- [A](http://a)\n- [B](http://b)\n", &[Link::new("A", "http://a")]);
        assert_eq!(out, "- [B](http://b)\n");
    }

    #[test]
    fn delete_ignores_id_and_collapses_duplicates() {
        let mut with_id = Link::new("A", "http://a");
        with_id.id = Some("client-1".into());
        let out = delete_links(
            "### S\n- [A](http://a)\n- [A](http://a)\n- [B](http://b)",
            &[with_id, Link::new("A", "http://a")],
        );
        assert_eq!(out, "### S\n- [B](http://b)");
    }

    #[test]
    fn delete_of_absent_link_is_byte_identical() {
        let text = "### S\r\n\n- [A](http://a)\n\n\n";
        assert_eq!(delete_links(text, &[Link::new("Z", "http://z")]), text);
        assert_eq!(delete_links(text, &[]), text);
    }

    #[test]
    fn delete_matches_substrings_in_any_line() {
        let text = "see [A](http://a) above\n- [A](http://a)\n- [AB](http://a)\nkeep";
        let out = delete_links(text, &[Link::new("A", "http://a")]);
        assert_eq!(out, "- [AB](http://a)\nkeep");
    }

    #[test]
    fn delete_is_monotonic() {
        let text = "### S\n- [a](1)\n- [b](2)\nnote\n- [c](3)\n";
        let out = delete_links(text, &[Link::new("b", "2"), Link::new("c", "3")]);
        let before: Vec<&str> = text.split('\n').collect();
        let after: Vec<&str> = out.split('\n').collect();
        assert!(after.len() <= before.len());
        let mut it = before.iter();
        assert!(after.iter().all(|line| it.any(|b| b == line)));
    }

    #[test]
    fn delete_line_by_index() {
        assert_eq!(delete_line("a\nb\nc", 1).as_deref(), Some("a\nc"));
        assert_eq!(delete_line("a\nb\n", 2).as_deref(), Some("a\nb"));
        assert_eq!(delete_line("a\nb", 2), None);
        assert_eq!(delete_line("", 0).as_deref(), Some(""));
    }
}
