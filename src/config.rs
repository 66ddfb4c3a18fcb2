use config::{Config, ConfigError, Environment, File, Source};
use serde::Deserialize;
use std::path::PathBuf;

/// Pipeline configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PipelineConfig {
    /// Recipe page to convert
    #[serde(default = "default_url")]
    pub url: String,
    /// Directory the PDF is written into
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Also keep the downloaded photo at this path
    #[serde(default)]
    pub photo_path: Option<PathBuf>,
    /// Fonts and line wrapping for the rendered page
    #[serde(default)]
    pub render: RenderOptions,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            output_dir: default_output_dir(),
            photo_path: None,
            render: RenderOptions::default(),
        }
    }
}

/// Font sizes and wrapping used by the renderer
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RenderOptions {
    /// PDF metadata title
    #[serde(default = "default_document_title")]
    pub document_title: String,
    #[serde(default = "default_title_font_size")]
    pub title_font_size: f32,
    /// "Ingredients:" and "Instructions:" headers
    #[serde(default = "default_header_font_size")]
    pub header_font_size: f32,
    #[serde(default = "default_item_font_size")]
    pub ingredient_font_size: f32,
    #[serde(default = "default_item_font_size")]
    pub instruction_font_size: f32,
    /// Instruction segments longer than this (in characters) are split
    #[serde(default = "default_wrap_threshold")]
    pub wrap_threshold: usize,
    /// Character index of the split
    #[serde(default = "default_wrap_at")]
    pub wrap_at: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            document_title: default_document_title(),
            title_font_size: default_title_font_size(),
            header_font_size: default_header_font_size(),
            ingredient_font_size: default_item_font_size(),
            instruction_font_size: default_item_font_size(),
            wrap_threshold: default_wrap_threshold(),
            wrap_at: default_wrap_at(),
        }
    }
}

// Default value functions
fn default_url() -> String {
    "https://www.browneyedbaker.com/chipotle-cilantro-lime-rice/".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_document_title() -> String {
    "Recipe".to_string()
}

fn default_title_font_size() -> f32 {
    25.0
}

fn default_header_font_size() -> f32 {
    12.0
}

fn default_item_font_size() -> f32 {
    10.0
}

fn default_wrap_threshold() -> usize {
    100
}

fn default_wrap_at() -> usize {
    90
}

impl PipelineConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE2PDF__ prefix
    /// 2. recipe2pdf.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE2PDF__RENDER__TITLE_FONT_SIZE
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// See [`PipelineConfig::load`] for the source priority.
pub fn load_config() -> Result<PipelineConfig, ConfigError> {
    load_from(
        // Optional config file (can be missing)
        File::with_name("recipe2pdf").required(false),
        // Use double underscore for nested: RECIPE2PDF__RENDER__WRAP_AT
        env_source(),
    )
}

fn env_source() -> Environment {
    Environment::with_prefix("RECIPE2PDF")
        .separator("__")
        .try_parsing(true)
}

/// Layer `env` over `file` over the defaults.
fn load_from<F>(file: F, env: Environment) -> Result<PipelineConfig, ConfigError>
where
    F: Source + Send + Sync + 'static,
{
    let settings = Config::builder()
        .add_source(file)
        .add_source(env)
        .build()?;

    settings.try_deserialize()
}
