//! Core domain types for Opportunity Finder.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

mod ids;
mod opportunity;
mod sector;
mod stage;
pub mod ui;

pub use ids::{OpportunityId, SessionId};
pub use opportunity::{Metrics, Opportunity};
pub use sector::{QUICK_SECTOR_COUNT, Sector};
pub use stage::{LOADING_STAGES, LoadingStage};

use std::fmt;
use std::ops::Deref;

use thiserror::Error;

// ============================================================================
// Query
// ============================================================================

/// A search query, guaranteed to be non-empty after trimming.
///
/// The stored value is trimmed; screens never hand untrimmed text to the
/// controller.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Query(String);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("search query must not be empty")]
pub struct EmptyQueryError;

impl Query {
    pub fn new(value: impl Into<String>) -> Result<Self, EmptyQueryError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            Err(EmptyQueryError)
        } else if trimmed.len() == value.len() {
            Ok(Self(value))
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for Query {
    type Error = EmptyQueryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Query {
    type Error = EmptyQueryError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Sector> for Query {
    fn from(sector: Sector) -> Self {
        Self(sector.label().to_string())
    }
}

impl From<Query> for String {
    fn from(value: Query) -> Self {
        value.0
    }
}

impl Deref for Query {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for Query {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
