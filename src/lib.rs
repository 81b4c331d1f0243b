pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::HttpDataProvider;
pub use config::{cli::LocalStorage, toml_config::TomlConfig};

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::core::{
    controller::{PageController, Portfolio, ViewState},
    render::{render_page, PageView, Section},
    site::SiteGenerator,
};
pub use utils::error::{PortfolioError, Result};
