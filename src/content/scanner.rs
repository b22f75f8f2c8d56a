//! Content scanner - enumerates and parses markdown files in a content directory

use std::fs;
use std::path::Path;

use super::{CatalogError, FrontMatter, Post, PostSummary};

/// Markdown file extension recognized by the scanner, matched exactly
const MD_SUFFIX: &str = ".md";

/// Scans a flat content directory for markdown posts.
///
/// Every call reads the directory fresh; nothing is cached between calls.
pub struct ContentScanner;

impl ContentScanner {
    /// List metadata for every `.md` file in `dir`.
    ///
    /// Records come back in directory-listing order; sorting is the caller's
    /// concern. Files whose front-matter is malformed still produce a record,
    /// with empty metadata. Subdirectories and non-`.md` entries are skipped.
    pub fn list_metadata(dir: &Path) -> Result<Vec<PostSummary>, CatalogError> {
        let entries = fs::read_dir(dir).map_err(|e| CatalogError::FileSystem {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let mut summaries = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| CatalogError::FileSystem {
                path: dir.to_path_buf(),
                source: e,
            })?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let Some(slug) = slug_for(&path) else {
                continue;
            };
            let post = read_post(&path, slug)?;
            summaries.push(post.into_summary());
        }

        Ok(summaries)
    }

    /// Load a single post, body included, by slug.
    ///
    /// The filename is exactly `slug + ".md"`. The slug is untrusted input:
    /// values that could escape the content directory are rejected before any
    /// path is built.
    pub fn load_one(dir: &Path, slug: &str) -> Result<Post, CatalogError> {
        validate_slug(slug)?;

        let path = dir.join(format!("{}{}", slug, MD_SUFFIX));
        if !path.is_file() {
            return Err(CatalogError::NotFound(slug.to_string()));
        }

        read_post(&path, slug.to_string())
    }
}

/// Read and parse one markdown file into a full post record.
fn read_post(path: &Path, slug: String) -> Result<Post, CatalogError> {
    let content =
        fs::read_to_string(path).map_err(|e| CatalogError::from_io(path.to_path_buf(), e))?;
    let (fm, body) = FrontMatter::parse(&content);

    Ok(Post {
        slug,
        title: fm.title,
        description: fm.description,
        date: fm.date,
        tags: fm.tags,
        body: body.to_string(),
    })
}

/// Derive the slug from a file path, or `None` for non-`.md` files.
///
/// The `.md` suffix match is case-sensitive and exact; `.markdown` and `.MD`
/// are not recognized.
fn slug_for(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_str()?;
    name.strip_suffix(MD_SUFFIX).map(str::to_string)
}

/// Reject slugs that could escape the content directory.
fn validate_slug(slug: &str) -> Result<(), CatalogError> {
    let escapes = slug.is_empty()
        || slug.contains('/')
        || slug.contains('\\')
        || slug.contains("..")
        || slug.contains('\0');
    if escapes {
        return Err(CatalogError::InvalidSlug(slug.to_string()));
    }
    Ok(())
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
    fn test_list_metadata_one_record_per_md_file() {
        let dir = fixture_dir(&[
            ("first.md", "---\ntitle: First\n---\nbody"),
            ("second.md", "---\ntitle: Second\n---\nbody"),
            ("notes.txt", "not a post"),
        ]);

        let mut summaries = ContentScanner::list_metadata(dir.path()).unwrap();
        summaries.sort_by(|a, b| a.slug.cmp(&b.slug));

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].slug, "first");
        assert_eq!(summaries[1].slug, "second");
    }

    #[test]
    fn test_list_metadata_skips_subdirectories() {
        let dir = fixture_dir(&[("post.md", "---\ntitle: Post\n---\nbody")]);
        fs::create_dir(dir.path().join("nested.md")).unwrap();

        let summaries = ContentScanner::list_metadata(dir.path()).unwrap();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].slug, "post");
    }

    #[test]
    fn test_list_metadata_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        let err = ContentScanner::list_metadata(&missing).unwrap_err();
        assert!(matches!(err, CatalogError::FileSystem { .. }));
    }

    #[test]
    fn test_list_metadata_malformed_frontmatter_degrades() {
        let dir = fixture_dir(&[("broken.md", "---\ntitle: [oops\n---\nstill here")]);
        let summaries = ContentScanner::list_metadata(dir.path()).unwrap();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].slug, "broken");
        assert_eq!(summaries[0].title, None);
        assert!(summaries[0].tags.is_empty());
    }

    #[test]
    fn test_load_one_returns_body_without_frontmatter() {
        let dir = fixture_dir(&[(
            "hello-world.md",
            "---\ntitle: Hello\ndate: 2026-01-01\n---\n# Hi\n",
        )]);

        let post = ContentScanner::load_one(dir.path(), "hello-world").unwrap();
        assert_eq!(post.slug, "hello-world");
        assert_eq!(post.title, Some("Hello".to_string()));
        assert_eq!(post.body, "# Hi\n");
    }

    #[test]
    fn test_load_one_unknown_slug_is_not_found() {
        let dir = fixture_dir(&[]);
        let err = ContentScanner::load_one(dir.path(), "nonexistent").unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(_)));
    }

    #[test]
    fn test_load_one_rejects_traversal_slugs() {
        let dir = fixture_dir(&[]);
        for slug in ["../secrets", "a/b", "a\\b", "..", ""] {
            let err = ContentScanner::load_one(dir.path(), slug).unwrap_err();
            assert!(matches!(err, CatalogError::InvalidSlug(_)), "slug: {slug:?}");
        }
    }

    #[test]
    fn test_non_utf8_file_is_a_decode_error() {
        let dir = fixture_dir(&[]);
        fs::write(dir.path().join("binary.md"), [0xff, 0xfe, 0x00]).unwrap();
        let err = ContentScanner::load_one(dir.path(), "binary").unwrap_err();
        assert!(matches!(err, CatalogError::Decode { .. }));
    }

    #[test]
    fn test_markdown_suffix_is_not_recognized() {
        let dir = fixture_dir(&[("other.markdown", "---\ntitle: Other\n---\nbody")]);
        let summaries = ContentScanner::list_metadata(dir.path()).unwrap();
        assert!(summaries.is_empty());
    }
}
