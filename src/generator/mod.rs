//! Static site generation from the post catalog

use anyhow::Result;
use std::fs;
use walkdir::WalkDir;

use crate::content::{MarkdownRenderer, PostSummary};
use crate::templates::{TemplateRenderer, STYLESHEET};
use crate::Solivar;

/// Writes the site into the public directory: the index, one page per slug,
/// the stylesheet, and a verbatim copy of the static assets directory.
pub struct Generator {
    app: Solivar,
    templates: TemplateRenderer,
    markdown: MarkdownRenderer,
}

impl Generator {
    pub fn new(app: &Solivar) -> Result<Self> {
        let templates = TemplateRenderer::new()?;
        let markdown = MarkdownRenderer::with_theme(&app.config.highlight.theme);
        Ok(Self {
            app: app.clone(),
            templates,
            markdown,
        })
    }

    /// Generate the entire site
    pub fn generate(&self) -> Result<()> {
        fs::create_dir_all(&self.app.public_dir)?;

        let catalog = self.app.catalog();
        let mut summaries = catalog.list_summaries()?;
        sort_for_index(&mut summaries);
        tracing::info!("Loaded {} posts", summaries.len());

        // Index page
        let index_html = self.templates.render_index(&self.app.config, &summaries)?;
        fs::write(self.app.public_dir.join("index.html"), index_html)?;

        // Stylesheet
        fs::write(self.app.public_dir.join("style.css"), STYLESHEET)?;

        // One page per slug, re-read with body through the catalog
        for slug in catalog.list_slugs()? {
            let post = catalog.get_by_slug(&slug)?;
            let content_html = self.markdown.render(&post.body)?;
            let summary = post.into_summary();
            let page_html = self
                .templates
                .render_post(&self.app.config, &summary, &content_html)?;

            let page_dir = self.app.public_dir.join("posts").join(&slug);
            fs::create_dir_all(&page_dir)?;
            fs::write(page_dir.join("index.html"), page_html)?;
            tracing::debug!("Generated posts/{}/index.html", slug);
        }

        self.copy_static_assets()?;

        Ok(())
    }

    /// Copy the static assets directory into the output, preserving layout
    fn copy_static_assets(&self) -> Result<()> {
        if !self.app.static_dir.exists() {
            return Ok(());
        }

        for entry in WalkDir::new(&self.app.static_dir)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let relative = path.strip_prefix(&self.app.static_dir)?;
            let target = self.app.public_dir.join(relative);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(path, &target)?;
            tracing::debug!("Copied asset {:?}", relative);
        }

        Ok(())
    }
}

/// Index ordering: newest first by raw date string (ISO dates compare
/// correctly as strings; dates are opaque, so nothing smarter is possible).
/// Posts without a date sort last.
pub fn sort_for_index(summaries: &mut [PostSummary]) {
    summaries.sort_by(|a, b| b.date.cmp(&a.date));
}

/// One-shot generation for callers that don't need to hold a `Generator`.
pub fn generate_site(app: &Solivar) -> Result<()> {
    Generator::new(app)?.generate()
}
