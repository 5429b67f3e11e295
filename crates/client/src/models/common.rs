//! Common types shared across listing models.
//!
//! This module contains the page wrapper and the lookup outcome. It does
//! NOT contain resource-specific models.

use serde::{Deserialize, Serialize};

/// One page of a continuation-token listing.
///
/// The wire shape is `{ "items": [...], "continuationToken": "..." }`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    #[serde(default)]
    pub continuation_token: Option<String>,
}

impl<T> Page<T> {
    /// The token to send for the next page, if any.
    ///
    /// An empty token marks the last page, same as a missing one.
    pub fn next_token(&self) -> Option<&str> {
        self.continuation_token
            .as_deref()
            .filter(|token| !token.is_empty())
    }

    /// Check if this is the final page.
    pub fn is_last(&self) -> bool {
        self.next_token().is_none()
    }
}

/// Outcome of a single-item lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<T> {
    Found(T),
    NotFound,
}

impl<T> Lookup<T> {
    /// Convert into an `Option`, discarding the distinction in naming.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Found(item) => Some(item),
            Self::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

impl<T> From<Option<T>> for Lookup<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::NotFound, Self::Found)
    }
}
