//! Typed process variables as the engine's REST API expects them.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single process variable.
///
/// Serialized as `{"value": ..., "type": "Boolean"}`. The variant is the
/// type tag, so the two can never disagree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum VariableValue {
    Boolean(bool),
    Integer(i32),
    Long(i64),
    String(String),
}

impl VariableValue {
    pub fn boolean(value: bool) -> Self {
        VariableValue::Boolean(value)
    }

    pub fn integer(value: i32) -> Self {
        VariableValue::Integer(value)
    }

    pub fn long(value: i64) -> Self {
        VariableValue::Long(value)
    }

    pub fn string(value: impl Into<String>) -> Self {
        VariableValue::String(value.into())
    }

    /// Engine type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            VariableValue::Boolean(_) => "Boolean",
            VariableValue::Integer(_) => "Integer",
            VariableValue::Long(_) => "Long",
            VariableValue::String(_) => "String",
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            VariableValue::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            VariableValue::Integer(v) => Some(i64::from(*v)),
            VariableValue::Long(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            VariableValue::String(v) => Some(v),
            _ => None,
        }
    }
}

/// Variables attached to one process instance.
///
/// Keys can be set and overwritten while a scenario is being built but never
/// removed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariableSet {
    variables: HashMap<String, VariableValue>,
}

impl VariableSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a variable.
    pub fn set(&mut self, name: impl Into<String>, value: VariableValue) {
        self.variables.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&VariableValue> {
        self.variables.get(name)
    }

    /// Boolean value of a variable, `None` if missing or not a boolean.
    pub fn flag(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(VariableValue::as_bool)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &VariableValue)> {
        self.variables.iter().map(|(k, v)| (k.as_str(), v))
    }
}
