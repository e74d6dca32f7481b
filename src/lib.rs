pub mod config;
pub mod core;
pub mod domain;
pub mod render;
pub mod utils;

pub use config::{cli::LocalStorage, site_config::SiteConfig, CliConfig};
pub use core::{engine::PageEngine, pipeline::SitePipeline};
pub use utils::error::{Result, SiteError};
