use near_sdk::json_types::U128;
use near_sdk::serde::Serialize;
use near_sdk::{AccountId, env};
use serde_json::{Map, Value, json};

use super::{EventKind, PREFIX, STANDARD, VERSION};
use crate::randomness::RandomPurpose;
use crate::ring::Location;

/// Conversion of a payload value into its event JSON shape.
pub(crate) trait EventField {
    fn into_field(self) -> Value;
}

impl EventField for &str {
    fn into_field(self) -> Value {
        Value::from(self)
    }
}

impl EventField for String {
    fn into_field(self) -> Value {
        Value::String(self)
    }
}

impl EventField for &AccountId {
    fn into_field(self) -> Value {
        Value::from(self.as_str())
    }
}

impl EventField for u32 {
    fn into_field(self) -> Value {
        Value::from(self)
    }
}

impl EventField for i64 {
    fn into_field(self) -> Value {
        Value::from(self)
    }
}

impl EventField for bool {
    fn into_field(self) -> Value {
        Value::Bool(self)
    }
}

// Ids and amounts are strings; indexers read them without precision loss above 2^53.
impl EventField for u64 {
    fn into_field(self) -> Value {
        Value::String(self.to_string())
    }
}

impl EventField for u128 {
    fn into_field(self) -> Value {
        Value::String(self.to_string())
    }
}

impl EventField for U128 {
    fn into_field(self) -> Value {
        self.0.into_field()
    }
}

impl EventField for &[u64] {
    fn into_field(self) -> Value {
        self.iter().map(|&id| id.into_field()).collect()
    }
}

impl EventField for &Location {
    fn into_field(self) -> Value {
        json!({ "x": self.x, "y": self.y })
    }
}

impl EventField for &RandomPurpose {
    fn into_field(self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

#[derive(Serialize)]
#[serde(crate = "near_sdk::serde")]
struct Envelope<'a> {
    standard: &'static str,
    version: &'static str,
    event: EventKind,
    data: [Payload<'a>; 1],
}

#[derive(Serialize)]
#[serde(crate = "near_sdk::serde")]
struct Payload<'a> {
    operation: &'static str,
    author: &'a str,
    #[serde(flatten)]
    fields: &'a Map<String, Value>,
}

/// One realm log line under construction; `emit` writes it.
pub(crate) struct EventRecord<'a> {
    kind: EventKind,
    operation: &'static str,
    author: &'a AccountId,
    fields: Map<String, Value>,
}

pub(crate) fn record<'a>(
    kind: EventKind,
    operation: &'static str,
    author: &'a AccountId,
) -> EventRecord<'a> {
    EventRecord {
        kind,
        operation,
        author,
        fields: Map::new(),
    }
}

impl EventRecord<'_> {
    pub(crate) fn field(mut self, key: &str, value: impl EventField) -> Self {
        self.fields.insert(key.to_owned(), value.into_field());
        self
    }

    /// Absent values leave the key out entirely.
    pub(crate) fn field_opt(self, key: &str, value: Option<impl EventField>) -> Self {
        match value {
            Some(value) => self.field(key, value),
            None => self,
        }
    }

    pub(crate) fn emit(self) {
        let envelope = Envelope {
            standard: STANDARD,
            version: VERSION,
            event: self.kind,
            data: [Payload {
                operation: self.operation,
                author: self.author.as_str(),
                fields: &self.fields,
            }],
        };
        if let Ok(json) = serde_json::to_string(&envelope) {
            env::log_str(&format!("{PREFIX}{json}"));
        }
    }
}
