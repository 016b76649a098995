//! Value model shared by generators and entity fields

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;

/// Geographic point with latitude and longitude in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lon)
    }
}

/// Reference to a datastore record: an entity kind plus a numeric id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Key {
    pub kind: String,
    pub id: i64,
}

impl Key {
    pub fn new(kind: impl Into<String>, id: i64) -> Self {
        Self {
            kind: kind.into(),
            id,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.id)
    }
}

/// Account reference carrying an email address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    email: String,
}

impl UserRef {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

/// Every value shape a generator can produce and an entity field can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum FakeValue {
    Integer(i64),
    Float(f64),
    Bool(bool),
    String(String),
    DateTime(DateTime<Utc>),
    Date(NaiveDate),
    Time(NaiveTime),
    GeoPoint(GeoPoint),
    Key(Key),
    User(UserRef),
    Json(Value),
    List(Vec<FakeValue>),
}

/// Discriminant of [`FakeValue`], used for type checks and error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Integer,
    Float,
    Bool,
    String,
    DateTime,
    Date,
    Time,
    GeoPoint,
    Key,
    User,
    Json,
    List,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Integer => "integer",
            ValueKind::Float => "float",
            ValueKind::Bool => "bool",
            ValueKind::String => "string",
            ValueKind::DateTime => "datetime",
            ValueKind::Date => "date",
            ValueKind::Time => "time",
            ValueKind::GeoPoint => "geopoint",
            ValueKind::Key => "key",
            ValueKind::User => "user",
            ValueKind::Json => "json",
            ValueKind::List => "list",
        };
        f.write_str(name)
    }
}

impl FakeValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            FakeValue::Integer(_) => ValueKind::Integer,
            FakeValue::Float(_) => ValueKind::Float,
            FakeValue::Bool(_) => ValueKind::Bool,
            FakeValue::String(_) => ValueKind::String,
            FakeValue::DateTime(_) => ValueKind::DateTime,
            FakeValue::Date(_) => ValueKind::Date,
            FakeValue::Time(_) => ValueKind::Time,
            FakeValue::GeoPoint(_) => ValueKind::GeoPoint,
            FakeValue::Key(_) => ValueKind::Key,
            FakeValue::User(_) => ValueKind::User,
            FakeValue::Json(_) => ValueKind::Json,
            FakeValue::List(_) => ValueKind::List,
        }
    }

    /// Stable JSON projection. Datetimes become RFC 3339 strings, dates and
    /// times ISO strings, keys and points small objects.
    pub fn to_json(&self) -> Value {
        match self {
            FakeValue::Integer(v) => json!(v),
            FakeValue::Float(v) => json!(v),
            FakeValue::Bool(v) => json!(v),
            FakeValue::String(v) => json!(v),
            FakeValue::DateTime(v) => json!(v.to_rfc3339()),
            FakeValue::Date(v) => json!(v.format("%Y-%m-%d").to_string()),
            FakeValue::Time(v) => json!(v.format("%H:%M:%S%.f").to_string()),
            FakeValue::GeoPoint(v) => json!({ "lat": v.lat, "lon": v.lon }),
            FakeValue::Key(v) => json!({ "kind": v.kind, "id": v.id }),
            FakeValue::User(v) => json!({ "email": v.email() }),
            FakeValue::Json(v) => v.clone(),
            FakeValue::List(items) => Value::Array(items.iter().map(FakeValue::to_json).collect()),
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FakeValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FakeValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FakeValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FakeValue::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[FakeValue]> {
        match self {
            FakeValue::List(items) => Some(items),
            _ => None,
        }
    }
}

impl From<i64> for FakeValue {
    fn from(v: i64) -> Self {
        FakeValue::Integer(v)
    }
}

impl From<f64> for FakeValue {
    fn from(v: f64) -> Self {
        FakeValue::Float(v)
    }
}

impl From<bool> for FakeValue {
    fn from(v: bool) -> Self {
        FakeValue::Bool(v)
    }
}

impl From<&str> for FakeValue {
    fn from(v: &str) -> Self {
        FakeValue::String(v.to_string())
    }
}

impl From<String> for FakeValue {
    fn from(v: String) -> Self {
        FakeValue::String(v)
    }
}

impl From<DateTime<Utc>> for FakeValue {
    fn from(v: DateTime<Utc>) -> Self {
        FakeValue::DateTime(v)
    }
}

impl From<NaiveDate> for FakeValue {
    fn from(v: NaiveDate) -> Self {
        FakeValue::Date(v)
    }
}

impl From<NaiveTime> for FakeValue {
    fn from(v: NaiveTime) -> Self {
        FakeValue::Time(v)
    }
}

impl From<GeoPoint> for FakeValue {
    fn from(v: GeoPoint) -> Self {
        FakeValue::GeoPoint(v)
    }
}

impl From<Key> for FakeValue {
    fn from(v: Key) -> Self {
        FakeValue::Key(v)
    }
}

impl From<UserRef> for FakeValue {
    fn from(v: UserRef) -> Self {
        FakeValue::User(v)
    }
}

impl From<Value> for FakeValue {
    fn from(v: Value) -> Self {
        FakeValue::Json(v)
    }
}

impl From<Vec<FakeValue>> for FakeValue {
    fn from(items: Vec<FakeValue>) -> Self {
        FakeValue::List(items)
    }
}
