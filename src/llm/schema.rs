// ABOUTME: Typed response schema sent as generationConfig.responseSchema
// ABOUTME: Serializes to the provider's upper-case OpenAPI subset and lists required keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;

use serde::Serialize;

/// Shape the model's JSON reply must take
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum ResponseSchema {
    /// JSON object with named properties
    Object {
        /// Property schemas by name
        properties: BTreeMap<String, ResponseSchema>,
        /// Keys the reply must contain
        #[serde(skip_serializing_if = "Vec::is_empty")]
        required: Vec<String>,
        /// Order the model should emit properties in
        #[serde(rename = "propertyOrdering", skip_serializing_if = "Vec::is_empty")]
        property_ordering: Vec<String>,
    },
    /// String, optionally restricted to an enumeration
    String {
        /// Allowed values
        #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
        values: Option<Vec<String>>,
    },
    /// Homogeneous array
    Array {
        /// Element schema
        items: Box<ResponseSchema>,
    },
    /// Any JSON number
    Number,
    /// `true` or `false`
    Boolean,
}

impl ResponseSchema {
    /// Object whose declared properties are all required, in declaration order
    #[must_use]
    pub fn object<I, K>(properties: I) -> Self
    where
        I: IntoIterator<Item = (K, Self)>,
        K: Into<String>,
    {
        let mut ordering = Vec::new();
        let mut map = BTreeMap::new();
        for (name, schema) in properties {
            let name = name.into();
            ordering.push(name.clone());
            map.insert(name, schema);
        }
        Self::Object {
            properties: map,
            required: ordering.clone(),
            property_ordering: ordering,
        }
    }

    /// Unrestricted string
    #[must_use]
    pub const fn string() -> Self {
        Self::String { values: None }
    }

    /// String limited to the given values
    #[must_use]
    pub fn string_enum(values: &[&str]) -> Self {
        Self::String {
            values: Some(values.iter().map(|value| (*value).to_owned()).collect()),
        }
    }

    /// Array of `items`
    #[must_use]
    pub fn array_of(items: Self) -> Self {
        Self::Array {
            items: Box::new(items),
        }
    }

    /// Keys a reply object must contain; empty for non-object schemas
    #[must_use]
    pub fn required_keys(&self) -> &[String] {
        match self {
            Self::Object { required, .. } => required,
            _ => &[],
        }
    }
}
