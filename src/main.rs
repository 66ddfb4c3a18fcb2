use log::info;
use recipe2pdf::{pipelines, PipelineConfig};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = PipelineConfig::load()?;

    // Optional URL argument overrides the configured page
    let url = env::args().nth(1).unwrap_or_else(|| config.url.clone());

    let path = pipelines::url::process(&url, &config)?;
    info!("Done");
    println!("{}", path.display());

    Ok(())
}
