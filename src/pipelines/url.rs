use crate::config::PipelineConfig;
use crate::error::Result;
use crate::extractors;
use crate::fetchers::RequestFetcher;
use crate::renderer::PdfRenderer;
use log::info;
use scraper::Html;
use std::fs;
use std::path::PathBuf;

/// Turn the recipe page at `url` into a PDF
///
/// This pipeline:
/// 1. Fetches the page HTML
/// 2. Extracts ingredients, instructions and the recipe name
/// 3. Downloads the recipe photo into memory (and to `photo_path`, if configured)
/// 4. Renders `<name>.pdf` into `output_dir`, titled with the recipe name
///
/// # Returns
/// * `Ok(PathBuf)` - Path of the written PDF
/// * `Err(...)` - On the first network, lookup, decode or write failure
pub fn process(url: &str, config: &PipelineConfig) -> Result<PathBuf> {
    let fetcher = RequestFetcher::new()?;

    // 1. Fetch HTML
    info!("Fetching {}", url);
    let html_content = fetcher.fetch(url)?;
    let document = Html::parse_document(&html_content);

    // 2. Extract fields
    let recipe = extractors::parse(&document)?;

    // 3. Photo
    let photo = fetcher.download_photo(&recipe.photo_url)?;
    if let Some(path) = &config.photo_path {
        fs::write(path, &photo.bytes)?;
        info!("Saved photo to {}", path.display());
    }

    // 4. Render
    let renderer = PdfRenderer::new(config.render.clone());
    renderer.render(
        &recipe.ingredients,
        &recipe.instructions,
        &recipe.name,
        &recipe.name,
        &photo,
        &config.output_dir,
    )
}
