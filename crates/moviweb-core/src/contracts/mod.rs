//! Result contract handed to presentation shells.
//!
//! Shells (CLI, web) never see `CatalogError` directly when they emit
//! machine-readable output; they serialize an [`Outcome`] instead:
//!
//! ```json
//! {"success": {"id": 1, "name": "Ada"}}
//! {"error": "Movie 'Incepshun' not found: Movie not found!", "suggestions": ["Inception"]}
//! ```

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Tagged result of a mutating catalog operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Outcome<T> {
    Success {
        success: T,
    },
    Failure {
        error: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        suggestions: Option<Vec<String>>,
    },
}

impl<T> Outcome<T> {
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

impl<T> From<Result<T, CatalogError>> for Outcome<T> {
    fn from(result: Result<T, CatalogError>) -> Self {
        match result {
            Ok(success) => Self::Success { success },
            Err(err) => Self::Failure {
                error: err.to_string(),
                suggestions: err.suggestions().map(<[String]>::to_vec),
            },
        }
    }
}
