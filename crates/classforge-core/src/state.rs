//! State records, seeds, and the shared state handle
//!
//! A character's state is one ordered field map, owned by exactly one
//! instance. Skills never copy it: each bound ability clones the same
//! [`StateHandle`] and mutates the record behind it.

use crate::error::ForgeError;
use indexmap::IndexMap;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Reserved field holding the class label
pub const TYPE_FIELD: &str = "type";

/// Reserved field holding the instance name
pub const NAME_FIELD: &str = "name";

/// A single stat value
///
/// Untagged on the wire, so `150` reads back as `Int(150)` and `"Scorcher"`
/// as `Text`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    /// Integer stat (health, mana, stamina, ...)
    Int(i64),

    /// Fractional stat
    Float(f64),

    /// Boolean flag
    Bool(bool),

    /// Free-form text (type label, name, ...)
    Text(String),
}

impl StatValue {
    /// Integer value, if this is an [`StatValue::Int`]
    #[inline]
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Numeric value widened to `f64`, if this is numeric
    #[inline]
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Int(v) => Some(*v as f64),
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Text value, if this is a [`StatValue::Text`]
    #[inline]
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v.as_str()),
            _ => None,
        }
    }

    /// Boolean value, if this is a [`StatValue::Bool`]
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Human-readable type name, for diagnostics
    #[inline]
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::Bool(_) => "boolean",
            Self::Text(_) => "text",
        }
    }
}

impl From<i64> for StatValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for StatValue {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<f64> for StatValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for StatValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for StatValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for StatValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl std::fmt::Display for StatValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Text(v) => write!(f, "{v}"),
        }
    }
}

/// Caller-supplied initial fields for a character
///
/// Arbitrary field names, no schema. Skills may later read or write fields the
/// seed never declared; such access fails at call time, not at construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StateSeed {
    fields: IndexMap<String, StatValue>,
}

impl StateSeed {
    /// Create an empty seed
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field, builder style
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<StatValue>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Add a field in place
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<StatValue>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Build a seed from a JSON object
    ///
    /// # Errors
    /// Returns [`ForgeError::InvalidSeed`] if `value` is not an object or if a
    /// field holds anything other than a number, string, or boolean.
    pub fn from_json(value: serde_json::Value) -> Result<Self, ForgeError> {
        let serde_json::Value::Object(map) = value else {
            return Err(ForgeError::InvalidSeed("expected a JSON object".to_string()));
        };

        let mut seed = Self::new();
        for (field, value) in map {
            let stat = match value {
                serde_json::Value::Number(n) => match (n.as_i64(), n.as_f64()) {
                    (Some(i), _) => StatValue::Int(i),
                    (None, Some(f)) => StatValue::Float(f),
                    (None, None) => {
                        return Err(ForgeError::InvalidSeed(format!(
                            "field '{field}' holds an unrepresentable number"
                        )))
                    }
                },
                serde_json::Value::String(s) => StatValue::Text(s),
                serde_json::Value::Bool(b) => StatValue::Bool(b),
                other => {
                    return Err(ForgeError::InvalidSeed(format!(
                        "field '{field}' holds unsupported value {other}"
                    )))
                }
            };
            seed.fields.insert(field, stat);
        }
        Ok(seed)
    }

    /// Iterate over seeded fields in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &StatValue)> {
        self.fields.iter()
    }

    /// Number of seeded fields
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the seed is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, StatValue)> for StateSeed {
    fn from_iter<I: IntoIterator<Item = (String, StatValue)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

/// The mutable per-instance field map
///
/// Field order is significant: the status view freezes the key set (and its
/// order) as it stands at construction time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StateRecord {
    fields: IndexMap<String, StatValue>,
}

impl StateRecord {
    /// Seed a record for a new character
    ///
    /// Layout is `type`, `name`, then the caller's fields in seed order.
    /// `type` and `name` are reserved: a same-named seed field is silently
    /// dropped in favor of the values given here.
    #[must_use]
    pub fn seed(kind: &str, name: &str, initial: &StateSeed) -> Self {
        let mut fields = IndexMap::with_capacity(initial.len() + 2);
        fields.insert(TYPE_FIELD.to_string(), StatValue::from(kind));
        fields.insert(NAME_FIELD.to_string(), StatValue::from(name));
        for (field, value) in initial.iter() {
            if field == TYPE_FIELD || field == NAME_FIELD {
                continue;
            }
            fields.insert(field.clone(), value.clone());
        }
        Self { fields }
    }

    /// Read a field
    #[inline]
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&StatValue> {
        self.fields.get(field)
    }

    /// Write a field, inserting it if absent
    ///
    /// A field inserted here after construction is live in the record but
    /// invisible through any already-captured [`StatusView`].
    ///
    /// [`StatusView`]: crate::StatusView
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<StatValue>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Add `delta` to a numeric field and return the new value
    ///
    /// No floor or ceiling: stats go negative freely.
    ///
    /// # Errors
    /// [`ForgeError::MissingField`] if the field was never seeded,
    /// [`ForgeError::NotNumeric`] if it holds text or a boolean.
    #[allow(clippy::cast_precision_loss)]
    pub fn adjust(&mut self, field: &str, delta: i64) -> Result<StatValue, ForgeError> {
        let value = self
            .fields
            .get_mut(field)
            .ok_or_else(|| ForgeError::missing_field(field))?;

        match value {
            StatValue::Int(v) => {
                *v = v.saturating_add(delta);
                Ok(StatValue::Int(*v))
            }
            StatValue::Float(v) => {
                *v += delta as f64;
                Ok(StatValue::Float(*v))
            }
            other => Err(ForgeError::NotNumeric {
                field: field.to_string(),
                actual: other.type_name(),
            }),
        }
    }

    /// Check field presence
    #[inline]
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Field names in record order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Iterate fields in record order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &StatValue)> {
        self.fields.iter()
    }

    /// Number of fields
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the record is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Shared-ownership handle to one character's state
///
/// Every skill bound to an instance clones this handle; there is exactly one
/// record behind all of them. Handles are never shared across instances.
#[derive(Debug, Clone, Default)]
pub struct StateHandle {
    inner: Arc<RwLock<StateRecord>>,
}

impl StateHandle {
    /// Wrap a seeded record
    #[inline]
    #[must_use]
    pub fn new(record: StateRecord) -> Self {
        Self {
            inner: Arc::new(RwLock::new(record)),
        }
    }

    /// Acquire a read guard on the record
    #[must_use]
    pub fn read(&self) -> RwLockReadGuard<'_, StateRecord> {
        self.inner.read()
    }

    /// Acquire a write guard on the record
    #[must_use]
    pub fn write(&self) -> RwLockWriteGuard<'_, StateRecord> {
        self.inner.write()
    }

    /// The character's current name, empty if unset
    #[must_use]
    pub fn name(&self) -> String {
        self.read()
            .get(NAME_FIELD)
            .and_then(|v| v.as_text().map(str::to_string))
            .unwrap_or_default()
    }

    /// Adjust a numeric field under a write lock
    ///
    /// # Errors
    /// Propagates [`StateRecord::adjust`] failures.
    pub fn adjust(&self, field: &str, delta: i64) -> Result<StatValue, ForgeError> {
        self.write().adjust(field, delta)
    }
}
