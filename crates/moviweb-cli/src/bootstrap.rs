//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter. All concrete implementations are instantiated here:
//! - Database pool and repositories (via moviweb-db)
//! - OMDb title resolver (via moviweb-omdb)
//! - Catalog service (via moviweb-core)
//!
//! Command handlers receive the composed `CliContext` and delegate work to it.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use moviweb_core::ports::TitleResolverPort;
use moviweb_core::{CatalogService, Repos};
use moviweb_db::{CoreFactory, setup_database};
use moviweb_omdb::{DefaultOmdbClient, OmdbClientConfig};

use crate::error::CliError;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Location of the SQLite database file.
    pub database_path: PathBuf,
    /// OMDb client settings.
    pub omdb: OmdbClientConfig,
}

impl CliConfig {
    /// Read provider settings from the environment.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Config` if `OMDB_API_KEY` is missing.
    pub fn from_env(database_path: PathBuf) -> Result<Self, CliError> {
        Ok(Self {
            database_path,
            omdb: OmdbClientConfig::from_env()?,
        })
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// The catalog service.
    pub catalog: CatalogService,
}

impl CliContext {
    /// Access the catalog service.
    pub const fn catalog(&self) -> &CatalogService {
        &self.catalog
    }
}

/// Bootstrap the CLI application.
///
/// This is the composition root. It:
/// 1. Opens the database and applies the schema
/// 2. Builds the OMDb client
/// 3. Assembles the catalog service from repositories and resolver
///
/// # Errors
///
/// Returns `CliError::Database` if the database cannot be opened and
/// `CliError::Config` if the OMDb client cannot be built.
pub async fn bootstrap(config: CliConfig) -> Result<CliContext, CliError> {
    let pool = setup_database(&config.database_path)
        .await
        .with_context(|| {
            format!(
                "failed to open database at {}",
                config.database_path.display()
            )
        })
        .map_err(|e| CliError::Database(format!("{e:#}")))?;
    let repos = CoreFactory::build_repos(pool);

    let resolver = Arc::new(DefaultOmdbClient::new(&config.omdb)?);
    tracing::debug!(
        database = %config.database_path.display(),
        omdb = config.omdb.base_url(),
        "CLI bootstrapped"
    );

    Ok(bootstrap_with(repos, resolver))
}

/// Bootstrap with custom repositories and resolver (for testing).
pub fn bootstrap_with(repos: Repos, resolver: Arc<dyn TitleResolverPort>) -> CliContext {
    CliContext {
        catalog: CatalogService::new(repos, resolver),
    }
}
