//! Create a new post

use anyhow::Result;
use std::fs;

use crate::Solivar;

/// Scaffold `content_dir/<slug>.md` with front-matter for the given title
pub fn run(app: &Solivar, title: &str) -> Result<()> {
    let now = chrono::Local::now();
    let slug = slug::slugify(title);

    fs::create_dir_all(&app.content_dir)?;
    let file_path = app.content_dir.join(format!("{}.md", slug));

    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let content = format!(
        r#"---
title: {}
description:
date: {}
tags:
---
"#,
        title,
        now.format("%Y-%m-%d")
    );

    fs::write(&file_path, content)?;

    println!("Created: {:?}", file_path);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_post_is_scannable() {
        let dir = TempDir::new().unwrap();
        let app = Solivar::new(dir.path()).unwrap();

        run(&app, "My First Post").unwrap();

        let post = app.catalog().get_by_slug("my-first-post").unwrap();
        assert_eq!(post.title, Some("My First Post".to_string()));
        assert!(post.tags.is_empty());
    }

    #[test]
    fn test_new_post_refuses_overwrite() {
        let dir = TempDir::new().unwrap();
        let app = Solivar::new(dir.path()).unwrap();

        run(&app, "Once").unwrap();
        assert!(run(&app, "Once").is_err());
    }
}
