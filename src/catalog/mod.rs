//! Post catalog - the read API the rendering layer consumes

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::content::{CatalogError, ContentScanner, Post, PostSummary};

/// In-memory view over a content directory.
///
/// Holds only the directory path; every operation re-reads the directory so
/// content edits are visible on the next call without a restart. Operations
/// are stateless, idempotent reads, safe to run from concurrent callers, with
/// no snapshot guarantee across two separate calls if files change in
/// between.
#[derive(Debug, Clone)]
pub struct PostCatalog {
    content_dir: PathBuf,
}

impl PostCatalog {
    /// Create a catalog over an explicit content directory.
    pub fn new<P: AsRef<Path>>(content_dir: P) -> Self {
        Self {
            content_dir: content_dir.as_ref().to_path_buf(),
        }
    }

    pub fn content_dir(&self) -> &Path {
        &self.content_dir
    }

    /// Metadata for every post, in directory-listing order.
    pub fn list_summaries(&self) -> Result<Vec<PostSummary>, CatalogError> {
        ContentScanner::list_metadata(&self.content_dir)
    }

    /// One post with its body, by slug.
    pub fn get_by_slug(&self, slug: &str) -> Result<Post, CatalogError> {
        ContentScanner::load_one(&self.content_dir, slug)
    }

    /// The set of slugs with a detail page, consistent with
    /// [`list_summaries`](Self::list_summaries) at the same point in time.
    pub fn list_slugs(&self) -> Result<BTreeSet<String>, CatalogError> {
        Ok(self
            .list_summaries()?
            .into_iter()
            .map(|s| s.slug)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn fixture_dir(files: &[(&str, &str)]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for (name, content) in files {
            fs::write(dir.path().join(name), content).unwrap();
        }
        dir
    }

    #[test]
    fn test_end_to_end_hello_world() {
        let dir = fixture_dir(&[(
            "hello-world.md",
            "---\ntitle: Hello\ndescription: First post\ndate: 2026-01-01\ntags: intro, demo\n---\n# Hi\n",
        )]);
        let catalog = PostCatalog::new(dir.path());

        let summaries = catalog.list_summaries().unwrap();
        assert_eq!(summaries.len(), 1);
        let s = &summaries[0];
        assert_eq!(s.slug, "hello-world");
        assert_eq!(s.title, Some("Hello".to_string()));
        assert_eq!(s.description, Some("First post".to_string()));
        assert_eq!(s.date, Some("2026-01-01".to_string()));
        assert_eq!(s.tags, vec!["intro", "demo"]);

        let post = catalog.get_by_slug("hello-world").unwrap();
        assert_eq!(post.slug, "hello-world");
        assert!(post.body.contains("# Hi"));
    }

    #[test]
    fn test_get_by_slug_not_found() {
        let dir = fixture_dir(&[]);
        let catalog = PostCatalog::new(dir.path());
        let err = catalog.get_by_slug("nonexistent").unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(_)));
    }

    #[test]
    fn test_list_slugs_matches_summaries() {
        let dir = fixture_dir(&[
            ("alpha.md", "---\ntitle: A\n---\n"),
            ("beta.md", "---\ntitle: B\n---\n"),
        ]);
        let catalog = PostCatalog::new(dir.path());

        let slugs = catalog.list_slugs().unwrap();
        let from_summaries: BTreeSet<String> = catalog
            .list_summaries()
            .unwrap()
            .into_iter()
            .map(|s| s.slug)
            .collect();
        assert_eq!(slugs, from_summaries);
    }

    #[test]
    fn test_list_summaries_is_idempotent() {
        let dir = fixture_dir(&[("only.md", "---\ntitle: Only\ntags: one, two\n---\nbody")]);
        let catalog = PostCatalog::new(dir.path());

        let first = catalog.list_summaries().unwrap();
        let second = catalog.list_summaries().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_changes_visible_on_next_call() {
        let dir = fixture_dir(&[("one.md", "---\ntitle: One\n---\n")]);
        let catalog = PostCatalog::new(dir.path());
        assert_eq!(catalog.list_slugs().unwrap().len(), 1);

        fs::write(dir.path().join("two.md"), "---\ntitle: Two\n---\n").unwrap();
        assert_eq!(catalog.list_slugs().unwrap().len(), 2);
    }
}
