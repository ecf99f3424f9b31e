//! Core services - the application's business logic layer.
//!
//! Services here are pure orchestrators between ports; they don't know
//! about concrete implementations.

mod catalog_service;

pub use catalog_service::CatalogService;
