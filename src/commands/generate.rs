//! Generate static files

use anyhow::Result;

use crate::generator::Generator;
use crate::Solivar;

/// Generate the static site into the public directory
pub fn run(app: &Solivar) -> Result<()> {
    let start = std::time::Instant::now();

    Generator::new(app)?.generate()?;

    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());

    Ok(())
}
