use std::path::PathBuf;

use crate::{config::RenderOptions, pipelines, PipelineConfig, RecipeError};

/// Builder for configuring and running a recipe-to-PDF conversion
#[derive(Debug, Default)]
pub struct RecipePdfBuilder {
    url: Option<String>,
    output_dir: Option<PathBuf>,
    photo_path: Option<PathBuf>,
    render: Option<RenderOptions>,
}

impl RecipePdfBuilder {
    /// Set the recipe page to convert
    ///
    /// # Example
    /// ```
    /// use recipe2pdf::RecipePdf;
    ///
    /// let builder = RecipePdf::builder()
    ///     .url("https://example.com/recipe");
    /// ```
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Directory the PDF is written into (default: current directory)
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Also keep a copy of the downloaded photo at `path`
    pub fn photo_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.photo_path = Some(path.into());
        self
    }

    /// Override font sizes and line wrapping
    ///
    /// # Example
    /// ```
    /// use recipe2pdf::{RecipePdf, RenderOptions};
    ///
    /// let builder = RecipePdf::builder()
    ///     .url("https://example.com/recipe")
    ///     .render_options(RenderOptions {
    ///         ingredient_font_size: 9.0,
    ///         ..RenderOptions::default()
    ///     });
    /// ```
    pub fn render_options(mut self, options: RenderOptions) -> Self {
        self.render = Some(options);
        self
    }

    /// Take every setting from a loaded configuration
    pub fn config(self, config: PipelineConfig) -> Self {
        Self {
            url: Some(config.url),
            output_dir: Some(config.output_dir),
            photo_path: config.photo_path,
            render: Some(config.render),
        }
    }

    /// Run the conversion and return the path of the written PDF
    ///
    /// # Errors
    /// Returns `RecipeError` if:
    /// - No URL was specified
    /// - Fetching the page or the photo fails
    /// - A required field is missing on the page
    /// - The photo cannot be decoded or the PDF cannot be written
    ///
    /// # Example
    /// ```no_run
    /// # use recipe2pdf::RecipePdf;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let path = RecipePdf::builder()
    ///     .url("https://example.com/recipe")
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn build(self) -> Result<PathBuf, RecipeError> {
        let url = self.url.ok_or_else(|| {
            RecipeError::Builder("No recipe URL specified. Use .url() or .config()".to_string())
        })?;

        let defaults = PipelineConfig::default();
        let config = PipelineConfig {
            url,
            output_dir: self.output_dir.unwrap_or(defaults.output_dir),
            photo_path: self.photo_path,
            render: self.render.unwrap_or(defaults.render),
        };

        pipelines::url::process(&config.url, &config)
    }
}

/// Main entry point for the builder API
pub struct RecipePdf;

impl RecipePdf {
    /// Creates a new builder for converting a recipe page
    ///
    /// # Example
    /// ```
    /// use recipe2pdf::RecipePdf;
    ///
    /// let builder = RecipePdf::builder();
    /// ```
    pub fn builder() -> RecipePdfBuilder {
        RecipePdfBuilder::default()
    }
}
