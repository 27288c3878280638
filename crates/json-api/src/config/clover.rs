//! Clover Config

use clap::Args;

use bitewise_app::clover::{CloverConfig, DEFAULT_BASE_URL};

/// Clover REST API settings.
#[derive(Debug, Args)]
pub struct CloverSettings {
    /// Clover API base URL
    #[arg(long, env = "CLOVER_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub clover_base_url: String,

    /// Page size for Clover list requests
    #[arg(
        long,
        env = "CLOVER_PAGE_SIZE",
        default_value_t = 100,
        value_parser = clap::value_parser!(u16).range(1..=1000)
    )]
    pub clover_page_size: u16,
}

impl From<&CloverSettings> for CloverConfig {
    fn from(settings: &CloverSettings) -> Self {
        Self {
            base_url: settings.clover_base_url.clone(),
            page_size: usize::from(settings.clover_page_size),
        }
    }
}
