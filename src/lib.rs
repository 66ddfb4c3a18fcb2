pub mod builder;
pub mod config;
pub mod error;
pub mod extractors;
pub mod fetchers;
pub mod model;
pub mod pipelines;
pub mod renderer;

// Re-export main types for convenience
pub use builder::{RecipePdf, RecipePdfBuilder};
pub use config::{PipelineConfig, RenderOptions};
pub use error::RecipeError;
pub use model::{Ingredient, PhotoAsset, Recipe};

use std::path::PathBuf;

/// Convert the recipe page at `url` using the loaded configuration.
///
/// # Example
/// ```no_run
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let path = recipe2pdf::url_to_pdf("https://example.com/recipe")?;
/// println!("{}", path.display());
/// # Ok(())
/// # }
/// ```
pub fn url_to_pdf(url: &str) -> Result<PathBuf, RecipeError> {
    let config = PipelineConfig::load()?;
    pipelines::url::process(url, &config)
}
