use thiserror::Error;

/// Errors that can occur while turning a recipe page into a PDF
#[derive(Error, Debug)]
pub enum RecipeError {
    /// Network-level failure while fetching the page or the photo
    #[error("Failed to fetch URL: {0}")]
    Fetch(#[from] reqwest::Error),

    /// A required element was not found on the page
    #[error("Required field '{field}' missing on page (tried: {})", .selectors.join(", "))]
    MissingField {
        field: &'static str,
        selectors: Vec<String>,
    },

    /// The element was found but lacks the attribute carrying the value
    #[error("Required attribute '{attribute}' missing for field '{field}'")]
    MissingAttribute {
        field: &'static str,
        attribute: &'static str,
    },

    /// Downloaded photo could not be decoded
    #[error("Failed to decode recipe photo: {0}")]
    Image(#[from] image::ImageError),

    /// PDF serialization failed
    #[error("Failed to write PDF: {0}")]
    Pdf(#[from] printpdf::Error),

    /// Filesystem write failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    Builder(String),
}

pub type Result<T> = std::result::Result<T, RecipeError>;
