// SPDX-License-Identifier: MIT
// Copyright (c) 2026 dpac contributors

//! Runtime-native container representations.
//!
//! The `container` CLI has emitted at least two structured shapes across
//! releases: a flat object with top-level `id`/`labels`/timestamps, and a
//! newer one that nests everything under `configuration` and reports
//! timestamps as CFAbsoluteTime floats. Rather than guessing with one
//! struct full of options, each decoded entry is probed structurally and
//! tagged, and anything that fits neither shape is kept as a generic map
//! so discovery can still pull fields out of it opportunistically.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::{Map, Value};

/// One container as reported by the runtime, in whichever shape it arrived.
#[derive(Debug, Clone, PartialEq)]
pub enum ContainerRecord {
    /// Top-level `id`/`labels`/`state` fields (older listings, inspect).
    Flat(FlatContainer),
    /// Fields nested under `configuration`, CFAbsoluteTime timestamps.
    Nested(NestedContainer),
    /// Unrecognized object, fields extracted by name and type at use.
    Generic(Map<String, Value>),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FlatContainer {
    pub id: String,
    pub name: String,
    pub image: String,
    pub state: String,
    pub status: String,
    pub created_at: String,
    pub started_at: String,
    pub labels: Option<BTreeMap<String, String>>,
    pub config: Option<FlatConfig>,
    pub process_config: Option<ProcessConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FlatConfig {
    pub labels: Option<BTreeMap<String, String>>,
    pub user: String,
    pub image: String,
    pub working_dir: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProcessConfig {
    pub user: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NestedContainer {
    pub configuration: ContainerConfiguration,
    pub status: String,
    /// CFAbsoluteTime: seconds since 2001-01-01T00:00:00Z.
    pub started_date: Option<f64>,
    pub created_date: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContainerConfiguration {
    pub id: String,
    pub labels: Option<BTreeMap<String, String>>,
    pub image: Option<ImageRef>,
    pub init_process: Option<InitProcess>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageRef {
    pub reference: String,
    pub descriptor: Option<ImageDescriptor>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageDescriptor {
    pub media_type: String,
    pub digest: String,
    pub size: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InitProcess {
    pub executable: String,
    pub arguments: Vec<String>,
    pub working_directory: String,
    pub user: Option<InitUser>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct InitUser {
    pub raw: Option<RawUser>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawUser {
    pub user_string: String,
}

impl ContainerRecord {
    /// Probe a decoded JSON value and tag it with the shape it matches.
    ///
    /// A `configuration` key selects the nested shape, top-level `id` or
    /// `labels` the flat one. Decode failures and unrecognized objects
    /// fall through to `Generic`; non-objects yield nothing.
    pub fn from_value(value: Value) -> Option<Self> {
        let Value::Object(map) = value else {
            return None;
        };

        if map.contains_key("configuration") {
            if let Ok(nested) =
                serde_json::from_value::<NestedContainer>(Value::Object(map.clone()))
            {
                return Some(Self::Nested(nested));
            }
            return Some(Self::Generic(map));
        }

        if map.contains_key("id") || map.contains_key("labels") {
            if let Ok(flat) = serde_json::from_value::<FlatContainer>(Value::Object(map.clone())) {
                return Some(Self::Flat(flat));
            }
        }

        Some(Self::Generic(map))
    }

    /// The runtime's own identifier for this container, empty if absent.
    pub fn native_id(&self) -> &str {
        match self {
            Self::Flat(flat) => &flat.id,
            Self::Nested(nested) => &nested.configuration.id,
            Self::Generic(map) => str_field(map, "id"),
        }
    }

    /// Display name, used as an identifier stand-in when `id` is missing.
    pub fn display_name(&self) -> &str {
        match self {
            Self::Flat(flat) => &flat.name,
            Self::Nested(_) => "",
            Self::Generic(map) => str_field(map, "name"),
        }
    }

    /// Identifier used for matching and inspect calls: native id, falling
    /// back to the display name. `None` marks the record unusable.
    pub fn match_key(&self) -> Option<&str> {
        let id = self.native_id();
        if !id.is_empty() {
            return Some(id);
        }
        let name = self.display_name();
        if !name.is_empty() {
            return Some(name);
        }
        None
    }

    /// Value of one label, if the record carries labels at all.
    pub fn label(&self, key: &str) -> Option<&str> {
        match self {
            Self::Flat(flat) => flat
                .labels
                .as_ref()
                .or_else(|| flat.config.as_ref().and_then(|c| c.labels.as_ref()))
                .and_then(|labels| labels.get(key))
                .map(String::as_str),
            Self::Nested(nested) => nested
                .configuration
                .labels
                .as_ref()
                .and_then(|labels| labels.get(key))
                .map(String::as_str),
            Self::Generic(map) => map
                .get("labels")
                .and_then(Value::as_object)
                .and_then(|labels| labels.get(key))
                .and_then(Value::as_str),
        }
    }
}

pub(crate) fn str_field<'a>(map: &'a Map<String, Value>, key: &str) -> &'a str {
    map.get(key).and_then(Value::as_str).unwrap_or("")
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
