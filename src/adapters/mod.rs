// Adapters layer: concrete implementations of the domain ports for external systems.

pub mod http_provider;

pub use http_provider::HttpDataProvider;
