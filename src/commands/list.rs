//! List site content

use anyhow::Result;

use crate::generator::sort_for_index;
use crate::Solivar;

/// Print every post's slug, date, and title, plus tag usage counts
pub fn run(app: &Solivar) -> Result<()> {
    let catalog = app.catalog();
    let mut summaries = catalog.list_summaries()?;
    sort_for_index(&mut summaries);

    println!("Posts ({}):", summaries.len());
    for post in &summaries {
        println!(
            "  {} - {} [{}]",
            post.date.as_deref().unwrap_or("no date"),
            post.display_title(),
            post.slug
        );
    }

    let mut tags: std::collections::HashMap<&str, usize> = std::collections::HashMap::new();
    for post in &summaries {
        for tag in &post.tags {
            *tags.entry(tag).or_insert(0) += 1;
        }
    }

    if !tags.is_empty() {
        println!("Tags ({}):", tags.len());
        let mut tags: Vec<_> = tags.into_iter().collect();
        tags.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
        for (tag, count) in tags {
            println!("  {} ({})", tag, count);
        }
    }

    Ok(())
}
