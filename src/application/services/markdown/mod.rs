//! Markdown link collections: a document is a sequence of `### Subject`
//! headers, each followed by `- [title](url)` bullets.

pub mod codec;
pub mod mutator;
pub mod parser;

pub use mutator::{append, delete_line, delete_links};
pub use parser::parse;
