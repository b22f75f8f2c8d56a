//! Content module - markdown files, front-matter, and the directory scanner

mod error;
mod frontmatter;
mod markdown;
mod post;
pub mod scanner;

pub use error::CatalogError;
pub use frontmatter::FrontMatter;
pub use markdown::MarkdownRenderer;
pub use post::{Post, PostSummary};
pub use scanner::ContentScanner;
