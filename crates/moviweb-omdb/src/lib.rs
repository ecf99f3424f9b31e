#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// DefaultOmdbClient is used through the TitleResolverPort trait, not its
// internal generic structure
#![allow(private_interfaces)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod parsing;
mod port;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultOmdbClient;

// Configuration
pub use config::{API_KEY_VAR, BASE_URL_VAR, ConfigError, DEFAULT_BASE_URL, OmdbClientConfig};
