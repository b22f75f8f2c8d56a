//! Built-in page templates using the Tera template engine
//!
//! All templates are embedded directly in the binary: a shared layout with
//! the site header and footer, the index of post cards, and the single-post
//! page. The rendering layer fills these from the catalog's read APIs.

use anyhow::Result;
use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::config::SiteConfig;
use crate::content::PostSummary;

/// Global stylesheet, written to the output as `style.css`
pub const STYLESHEET: &str = include_str!("solivar/style.css");

/// Template renderer with the embedded page templates
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // Post bodies arrive as already-rendered HTML
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("solivar/layout.html")),
            ("index.html", include_str!("solivar/index.html")),
            ("post.html", include_str!("solivar/post.html")),
            ("not_found.html", include_str!("solivar/not_found.html")),
        ])?;

        tera.register_filter("date_format", date_format_filter);

        Ok(Self { tera })
    }

    /// Render the index page from a list of post summaries.
    pub fn render_index(&self, config: &SiteConfig, posts: &[PostSummary]) -> Result<String> {
        let items: Vec<PostItem> = posts.iter().map(PostItem::from_summary).collect();

        let mut context = Context::new();
        context.insert("config", &ConfigData::from_config(config));
        context.insert("posts", &items);
        Ok(self.tera.render("index.html", &context)?)
    }

    /// Render a single post page from its metadata and pre-rendered body HTML.
    pub fn render_post(
        &self,
        config: &SiteConfig,
        summary: &PostSummary,
        content_html: &str,
    ) -> Result<String> {
        let mut item = PostItem::from_summary(summary);
        item.content = content_html.to_string();

        let mut context = Context::new();
        context.insert("config", &ConfigData::from_config(config));
        context.insert("post", &item);
        Ok(self.tera.render("post.html", &context)?)
    }

    /// Render the "no such post" page.
    pub fn render_not_found(&self, config: &SiteConfig) -> Result<String> {
        let mut context = Context::new();
        context.insert("config", &ConfigData::from_config(config));
        Ok(self.tera.render("not_found.html", &context)?)
    }
}

/// Tera filter: pretty-print an ISO date, pass anything else through
///
/// Dates are opaque strings as far as the catalog is concerned; only strings
/// that parse as `YYYY-MM-DD` get reformatted for display.
fn date_format_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("date_format", "value", String, value);

    if let Ok(date) = chrono::NaiveDate::parse_from_str(&s, "%Y-%m-%d") {
        return Ok(tera::Value::String(date.format("%B %d, %Y").to_string()));
    }

    Ok(tera::Value::String(s))
}

/// Site fields exposed to templates
#[derive(Debug, Clone, Serialize)]
pub struct ConfigData {
    pub title: String,
    pub description: String,
    pub author: String,
    pub language: String,
    pub root: String,
    pub footer: String,
}

impl ConfigData {
    fn from_config(config: &SiteConfig) -> Self {
        let footer = if config.footer.is_empty() {
            format!("© {} {}", chrono::Local::now().format("%Y"), config.title)
        } else {
            config.footer.clone()
        };
        Self {
            title: config.title.clone(),
            description: config.description.clone(),
            author: config.author.clone(),
            language: config.language.clone(),
            root: config.root.clone(),
            footer,
        }
    }
}

/// One post as seen by the templates, with `Option` metadata already resolved
#[derive(Debug, Clone, Serialize)]
pub struct PostItem {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub date: String,
    pub tags: Vec<String>,
    pub content: String,
}

impl PostItem {
    fn from_summary(summary: &PostSummary) -> Self {
        Self {
            slug: summary.slug.clone(),
            title: summary.display_title().to_string(),
            description: summary.description.clone().unwrap_or_default(),
            date: summary.date.clone().unwrap_or_default(),
            tags: summary.tags.clone(),
            content: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(slug: &str) -> PostSummary {
        PostSummary {
            slug: slug.to_string(),
            title: Some("Hello".to_string()),
            description: Some("First post".to_string()),
            date: Some("2026-01-01".to_string()),
            tags: vec!["intro".to_string(), "demo".to_string()],
        }
    }

    #[test]
    fn test_render_index() {
        let renderer = TemplateRenderer::new().unwrap();
        let config = SiteConfig::default();
        let html = renderer
            .render_index(&config, &[summary("hello-world")])
            .unwrap();
        assert!(html.contains("Solivar Blog"));
        assert!(html.contains("/posts/hello-world/"));
        assert!(html.contains("First post"));
        assert!(html.contains("tag-badge"));
    }

    #[test]
    fn test_render_post() {
        let renderer = TemplateRenderer::new().unwrap();
        let config = SiteConfig::default();
        let html = renderer
            .render_post(&config, &summary("hello-world"), "<h1>Hi</h1>")
            .unwrap();
        assert!(html.contains("<h1>Hi</h1>"));
        assert!(html.contains("Hello"));
        assert!(html.contains("January 01, 2026"));
    }

    #[test]
    fn test_render_not_found() {
        let renderer = TemplateRenderer::new().unwrap();
        let config = SiteConfig::default();
        let html = renderer.render_not_found(&config).unwrap();
        assert!(html.contains("no post"));
    }

    #[test]
    fn test_date_filter_passes_through_non_iso() {
        let value = tera::Value::String("sometime in spring".to_string());
        let out = date_format_filter(&value, &HashMap::new()).unwrap();
        assert_eq!(out, tera::Value::String("sometime in spring".to_string()));
    }

    #[test]
    fn test_untitled_post_uses_slug() {
        let renderer = TemplateRenderer::new().unwrap();
        let config = SiteConfig::default();
        let s = PostSummary {
            slug: "mystery".to_string(),
            title: None,
            description: None,
            date: None,
            tags: Vec::new(),
        };
        let html = renderer.render_index(&config, &[s]).unwrap();
        assert!(html.contains("mystery"));
    }
}
