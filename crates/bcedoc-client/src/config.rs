//! Client configuration.

#[cfg(feature = "config")]
use clap::Args;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Largest page size the service accepts for listing documents.
pub const DEFAULT_LIST_MAX_SIZE: i64 = 200;

/// Configuration for the [`DocumentClient`](crate::DocumentClient).
///
/// Holds the client-side validation policy; everything about reaching the
/// service belongs to the transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
pub struct ClientConfig {
    /// Largest page size accepted when listing documents
    #[cfg_attr(
        feature = "config",
        arg(long = "doc-list-max-size", env = "DOC_LIST_MAX_SIZE", default_value = "200")
    )]
    #[serde(default = "default_list_max_size")]
    pub list_max_size: i64,
}

fn default_list_max_size() -> i64 {
    DEFAULT_LIST_MAX_SIZE
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            list_max_size: default_list_max_size(),
        }
    }
}

impl ClientConfig {
    /// Set the largest accepted list page size.
    #[must_use]
    pub fn with_list_max_size(mut self, list_max_size: i64) -> Self {
        self.list_max_size = list_max_size;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the list page size limit is not positive.
    pub fn validate(&self) -> Result<()> {
        if self.list_max_size < 1 {
            return Err(Error::configuration().with_message(format!(
                "list max size must be at least 1, got {}",
                self.list_max_size
            )));
        }

        Ok(())
    }
}
