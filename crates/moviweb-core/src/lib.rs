#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod contracts;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;
pub mod utils;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

// Re-export commonly used types for convenience
pub use contracts::Outcome;
pub use domain::{Movie, NewMovie, NewUser, UNKNOWN_FIELD, User};
pub use error::CatalogError;
pub use ports::{
    MovieRepository, ProviderError, Repos, RepositoryError, SuggestionLookup, TitleLookup,
    TitleRecord, TitleResolverPort, UserRepository,
};
pub use services::CatalogService;
