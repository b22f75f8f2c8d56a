//! solivar: a minimal markdown blog engine
//!
//! Posts are plain markdown files with YAML front-matter in a flat content
//! directory; the file name (minus `.md`) is the post's slug. The crate
//! scans that directory into a [`catalog::PostCatalog`] and renders it either
//! as a static site or through a per-request dev server.

pub mod catalog;
pub mod commands;
pub mod config;
pub mod content;
pub mod generator;
pub mod server;
pub mod templates;

use anyhow::Result;
use std::path::Path;

/// The main application: configuration plus resolved directories.
#[derive(Clone)]
pub struct Solivar {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Directory holding the markdown posts
    pub content_dir: std::path::PathBuf,
    /// Output directory for generated files
    pub public_dir: std::path::PathBuf,
    /// Directory of static assets copied/served verbatim
    pub static_dir: std::path::PathBuf,
}

impl Solivar {
    /// Create an instance from a base directory, reading `_config.yml` when
    /// present and falling back to defaults otherwise.
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let content_dir = base_dir.join(&config.content_dir);
        let public_dir = base_dir.join(&config.public_dir);
        let static_dir = base_dir.join(&config.static_dir);

        Ok(Self {
            config,
            base_dir,
            content_dir,
            public_dir,
            static_dir,
        })
    }

    /// Catalog over this site's content directory
    pub fn catalog(&self) -> catalog::PostCatalog {
        catalog::PostCatalog::new(&self.content_dir)
    }

    /// Generate the static site
    pub fn generate(&self) -> Result<()> {
        commands::generate::run(self)
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }

    /// Create a new post
    pub fn new_post(&self, title: &str) -> Result<()> {
        commands::new::run(self, title)
    }
}
