//! Enum definitions: closed sets of named integer constants.
//!
//! A definition keeps its members in declaration order. Declaration order
//! matters: when two members share a value (aliases such as `FirstToken`
//! and `Unknown`), the one declared first is preferred for display.
//!
//! Definitions can be built from explicit pairs, from a JSON object
//! (`{"None": 0, "Readonly": 1}`) or from a `bitflags` type. Entries
//! that are not integers are dropped while building, so the formatter
//! only ever sees numeric members.

use std::fmt;

use bitflags::Flags;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::comparison::{compare_values, stable_sort};

/// A single named constant.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnumMember {
    pub value: i64,
    pub name: String,
}

impl EnumMember {
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        Self {
            value,
            name: name.into(),
        }
    }
}

/// Error building an `EnumDefinition` from JSON.
#[derive(Debug)]
pub enum EnumDefinitionError {
    /// The text was not valid JSON.
    Json(serde_json::Error),
    /// The JSON value was valid but not an object.
    NotAnObject { found: &'static str },
}

impl fmt::Display for EnumDefinitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnumDefinitionError::Json(err) => write!(f, "invalid enum definition JSON: {err}"),
            EnumDefinitionError::NotAnObject { found } => {
                write!(f, "enum definition must be a JSON object, found {found}")
            }
        }
    }
}

impl std::error::Error for EnumDefinitionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EnumDefinitionError::Json(err) => Some(err),
            EnumDefinitionError::NotAnObject { .. } => None,
        }
    }
}

impl From<serde_json::Error> for EnumDefinitionError {
    fn from(err: serde_json::Error) -> Self {
        EnumDefinitionError::Json(err)
    }
}

/// An ordered set of named integer constants.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnumDefinition {
    members: Vec<EnumMember>,
}

impl EnumDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a member. Duplicate names and values are allowed.
    pub fn push(&mut self, name: impl Into<String>, value: i64) {
        self.members.push(EnumMember::new(name, value));
    }

    #[must_use]
    pub fn with_member(mut self, name: impl Into<String>, value: i64) -> Self {
        self.push(name, value);
        self
    }

    /// Members in declaration order.
    pub fn members(&self) -> &[EnumMember] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members sorted ascending by value. Members sharing a value keep
    /// their declaration order.
    pub fn sorted_members(&self) -> Vec<&EnumMember> {
        stable_sort(&self.members, |a, b| {
            compare_values(Some(a.value), Some(b.value))
        })
    }

    /// Build a definition from a JSON object, keeping integer-valued
    /// entries in key order and skipping everything else.
    ///
    /// This accepts a compiled TypeScript enum object as-is: the reverse
    /// mapping entries (`"0": "None"`) have string values and are dropped.
    pub fn from_json_value(value: &Value) -> Result<Self, EnumDefinitionError> {
        let Value::Object(object) = value else {
            return Err(EnumDefinitionError::NotAnObject {
                found: json_type_name(value),
            });
        };

        let mut definition = Self::new();
        let mut skipped = 0usize;
        for (name, entry) in object {
            match numeric_value(entry) {
                Some(value) => definition.push(name.as_str(), value),
                None => skipped += 1,
            }
        }

        debug!(
            members = definition.len(),
            skipped, "built enum definition from JSON"
        );
        Ok(definition)
    }

    /// Parse JSON text and build a definition from it.
    pub fn from_json_str(text: &str) -> Result<Self, EnumDefinitionError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_json_value(&value)
    }

    /// Build a definition from every named flag of a `bitflags` type,
    /// including zero-valued and composite flags, in declaration order.
    pub fn from_flags<F>() -> Self
    where
        F: Flags,
        F::Bits: Into<i64>,
    {
        F::FLAGS
            .iter()
            .map(|flag| EnumMember::new(flag.name(), flag.value().bits().into()))
            .collect()
    }
}

impl FromIterator<EnumMember> for EnumDefinition {
    fn from_iter<I: IntoIterator<Item = EnumMember>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().collect(),
        }
    }
}

impl<S: Into<String>> FromIterator<(S, i64)> for EnumDefinition {
    fn from_iter<I: IntoIterator<Item = (S, i64)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(name, value)| EnumMember::new(name, value))
            .collect()
    }
}

/// Integer value of a JSON entry, if it has one.
///
/// Floats with no fractional part count as integers (JSON produced by a
/// JavaScript host may write `4.0`); everything else is not numeric.
fn numeric_value(value: &Value) -> Option<i64> {
    let Value::Number(number) = value else {
        return None;
    };
    if let Some(int) = number.as_i64() {
        return Some(int);
    }
    let float = number.as_f64()?;
    if float.fract() == 0.0 && float >= i64::MIN as f64 && float < i64::MAX as f64 {
        Some(float as i64)
    } else {
        None
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
#[path = "tests/definition_tests.rs"]
mod tests;
