//! Component models.

use serde::{Deserialize, Serialize};

use crate::serde_helpers::{opt_string_lenient, vec_skip_invalid};

use super::asset::Asset;

/// A versioned package made of one or more assets.
///
/// Identified by `group`/`name`/`version`; only `name` is required since
/// formats such as raw have neither group nor version.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Component {
    pub name: String,
    #[serde(
        default,
        deserialize_with = "opt_string_lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub group: Option<String>,
    #[serde(
        default,
        deserialize_with = "opt_string_lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub version: Option<String>,
    #[serde(
        default,
        deserialize_with = "opt_string_lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    #[serde(
        default,
        deserialize_with = "opt_string_lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub repository: Option<String>,
    #[serde(
        default,
        deserialize_with = "opt_string_lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub format: Option<String>,
    #[serde(default, deserialize_with = "vec_skip_invalid")]
    pub assets: Vec<Asset>,
    #[serde(flatten)]
    pub attributes: serde_json::Map<String, serde_json::Value>,
}

impl Component {
    /// `group:name:version` coordinates, skipping absent parts.
    pub fn coordinates(&self) -> String {
        [self.group.as_deref(), Some(self.name.as_str()), self.version.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(":")
    }
}
