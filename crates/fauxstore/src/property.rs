//! Property descriptors: field type, cardinality and fill policy

use crate::error::{ModelError, ModelResult};
use crate::model::{Entity, ModelDefinition};
use fauxstore_faker::{FakeValue, Faker, ValueKind};
use std::fmt;
use std::sync::Arc;

/// Closure backing a computed property. Runs against the already-filled
/// entity and its result always overwrites the stored field.
pub type ComputeFn = Arc<dyn Fn(&Entity) -> FakeValue + Send + Sync>;

/// Declared type of a property, each carrying its fallback generator.
#[derive(Clone)]
pub enum PropertyKind {
    Integer,
    Float,
    Boolean,
    Text,
    String,
    Generic,
    DateTime,
    Date,
    Time,
    GeoPoint,
    Key,
    User,
    Json,
    Structured(ModelDefinition),
    Computed(ComputeFn),
}

impl fmt::Debug for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyKind::Structured(def) => write!(f, "Structured({})", def.kind()),
            PropertyKind::Computed(_) => f.write_str("Computed"),
            other => f.write_str(other.type_name_capitalized()),
        }
    }
}

impl PropertyKind {
    pub(crate) fn type_name(&self) -> &'static str {
        match self {
            PropertyKind::Integer => "integer",
            PropertyKind::Float => "float",
            PropertyKind::Boolean => "boolean",
            PropertyKind::Text => "text",
            PropertyKind::String => "string",
            PropertyKind::Generic => "generic",
            PropertyKind::DateTime => "datetime",
            PropertyKind::Date => "date",
            PropertyKind::Time => "time",
            PropertyKind::GeoPoint => "geopoint",
            PropertyKind::Key => "key",
            PropertyKind::User => "user",
            PropertyKind::Json => "json",
            PropertyKind::Structured(_) => "structured",
            PropertyKind::Computed(_) => "computed",
        }
    }

    fn type_name_capitalized(&self) -> &'static str {
        match self {
            PropertyKind::Integer => "Integer",
            PropertyKind::Float => "Float",
            PropertyKind::Boolean => "Boolean",
            PropertyKind::Text => "Text",
            PropertyKind::String => "String",
            PropertyKind::Generic => "Generic",
            PropertyKind::DateTime => "DateTime",
            PropertyKind::Date => "Date",
            PropertyKind::Time => "Time",
            PropertyKind::GeoPoint => "GeoPoint",
            PropertyKind::Key => "Key",
            PropertyKind::User => "User",
            PropertyKind::Json => "Json",
            PropertyKind::Structured(_) => "Structured",
            PropertyKind::Computed(_) => "Computed",
        }
    }

    /// Generator name invoked when neither an explicit binding nor a
    /// name-convention match applies. Structured and computed properties
    /// resolve through their own paths.
    pub(crate) fn fallback_generator(&self) -> Option<&'static str> {
        match self {
            PropertyKind::Integer => Some("integer"),
            PropertyKind::Float => Some("float"),
            PropertyKind::Boolean => Some("chance"),
            PropertyKind::Text => Some("lorem"),
            PropertyKind::String => Some("caption"),
            PropertyKind::Generic => Some("caption"),
            PropertyKind::DateTime => Some("now"),
            PropertyKind::Date => Some("today"),
            PropertyKind::Time => Some("timestamp"),
            PropertyKind::GeoPoint => Some("coordinates"),
            PropertyKind::Key => Some("key"),
            PropertyKind::User => Some("user"),
            PropertyKind::Json => Some("profile"),
            PropertyKind::Structured(_) | PropertyKind::Computed(_) => None,
        }
    }

    /// Check a single (non-list) value against this kind, coercing where
    /// the datastore would: integers are accepted for float properties,
    /// generic and computed accept anything.
    pub(crate) fn conform(&self, property: &str, value: FakeValue) -> ModelResult<FakeValue> {
        let expected = match self {
            PropertyKind::Generic | PropertyKind::Computed(_) => return Ok(value),
            PropertyKind::Float => {
                return match value {
                    FakeValue::Integer(v) => Ok(FakeValue::Float(v as f64)),
                    FakeValue::Float(_) => Ok(value),
                    other => Err(self.mismatch(property, &other)),
                };
            }
            PropertyKind::Integer => ValueKind::Integer,
            PropertyKind::Boolean => ValueKind::Bool,
            PropertyKind::Text | PropertyKind::String => ValueKind::String,
            PropertyKind::DateTime => ValueKind::DateTime,
            PropertyKind::Date => ValueKind::Date,
            PropertyKind::Time => ValueKind::Time,
            PropertyKind::GeoPoint => ValueKind::GeoPoint,
            PropertyKind::Key => ValueKind::Key,
            PropertyKind::User => ValueKind::User,
            PropertyKind::Json | PropertyKind::Structured(_) => ValueKind::Json,
        };

        if value.kind() == expected {
            Ok(value)
        } else {
            Err(self.mismatch(property, &value))
        }
    }

    fn mismatch(&self, property: &str, value: &FakeValue) -> ModelError {
        ModelError::TypeMismatch {
            property: property.to_string(),
            expected: self.type_name().to_string(),
            actual: value.kind().to_string(),
        }
    }
}

/// Field descriptor: name, declared kind, cardinality and fill policy.
#[derive(Debug, Clone)]
pub struct Property {
    name: String,
    kind: PropertyKind,
    repeated: bool,
    count: usize,
    required: bool,
    default: Option<FakeValue>,
    fake: Option<String>,
}

impl Property {
    fn with_kind(name: impl Into<String>, kind: PropertyKind) -> Self {
        Self {
            name: name.into(),
            kind,
            repeated: false,
            count: 1,
            required: false,
            default: None,
            fake: None,
        }
    }

    pub fn integer(name: impl Into<String>) -> Self {
        Self::with_kind(name, PropertyKind::Integer)
    }

    pub fn float(name: impl Into<String>) -> Self {
        Self::with_kind(name, PropertyKind::Float)
    }

    pub fn boolean(name: impl Into<String>) -> Self {
        Self::with_kind(name, PropertyKind::Boolean)
    }

    pub fn text(name: impl Into<String>) -> Self {
        Self::with_kind(name, PropertyKind::Text)
    }

    pub fn string(name: impl Into<String>) -> Self {
        Self::with_kind(name, PropertyKind::String)
    }

    pub fn generic(name: impl Into<String>) -> Self {
        Self::with_kind(name, PropertyKind::Generic)
    }

    pub fn datetime(name: impl Into<String>) -> Self {
        Self::with_kind(name, PropertyKind::DateTime)
    }

    pub fn date(name: impl Into<String>) -> Self {
        Self::with_kind(name, PropertyKind::Date)
    }

    pub fn time(name: impl Into<String>) -> Self {
        Self::with_kind(name, PropertyKind::Time)
    }

    pub fn geopoint(name: impl Into<String>) -> Self {
        Self::with_kind(name, PropertyKind::GeoPoint)
    }

    pub fn key(name: impl Into<String>) -> Self {
        Self::with_kind(name, PropertyKind::Key)
    }

    pub fn user(name: impl Into<String>) -> Self {
        Self::with_kind(name, PropertyKind::User)
    }

    pub fn json(name: impl Into<String>) -> Self {
        Self::with_kind(name, PropertyKind::Json)
    }

    /// Entity-valued field, filled recursively from `definition`.
    pub fn structured(name: impl Into<String>, definition: ModelDefinition) -> Self {
        Self::with_kind(name, PropertyKind::Structured(definition))
    }

    /// Field derived from the rest of the entity after it has been filled.
    pub fn computed(
        name: impl Into<String>,
        compute: impl Fn(&Entity) -> FakeValue + Send + Sync + 'static,
    ) -> Self {
        Self::with_kind(name, PropertyKind::Computed(Arc::new(compute)))
    }

    /// Blob fields have no fake representation and cannot be declared.
    pub fn blob(name: impl Into<String>) -> ModelResult<Self> {
        Err(ModelError::Definition(format!(
            "blob properties are not supported (property '{}')",
            name.into()
        )))
    }

    /// Bind an explicit generator method by name. Validated when the
    /// property is attached to a definition.
    pub fn fake(mut self, generator: impl Into<String>) -> Self {
        self.fake = Some(generator.into());
        self
    }

    pub fn repeated(mut self) -> Self {
        self.repeated = true;
        self
    }

    /// Number of values a repeated property generates (default 1).
    pub fn count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn default_value(mut self, value: impl Into<FakeValue>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &PropertyKind {
        &self.kind
    }

    pub fn is_repeated(&self) -> bool {
        self.repeated
    }

    pub fn value_count(&self) -> usize {
        self.count
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn default(&self) -> Option<&FakeValue> {
        self.default.as_ref()
    }

    pub fn fake_name(&self) -> Option<&str> {
        self.fake.as_deref()
    }

    /// Declaration-time validation, run when the property is attached to a
    /// [`ModelDefinition`].
    pub(crate) fn validate(&self) -> ModelResult<()> {
        if let Some(fake) = &self.fake {
            if matches!(self.kind, PropertyKind::Structured(_) | PropertyKind::Computed(_)) {
                return Err(ModelError::Definition(format!(
                    "property '{}' is {} and cannot bind a generator",
                    self.name,
                    self.kind.type_name()
                )));
            }
            if !Faker::knows(fake) {
                return Err(ModelError::Definition(format!(
                    "'{}' is not a known generator (property '{}')",
                    fake, self.name
                )));
            }
        }

        if self.count == 0 {
            return Err(ModelError::Definition(format!(
                "count must be at least 1 (property '{}')",
                self.name
            )));
        }
        if self.count > 1 && !self.repeated {
            return Err(ModelError::Definition(format!(
                "count requires a repeated property (property '{}')",
                self.name
            )));
        }

        if let Some(default) = &self.default {
            if self.repeated {
                return Err(ModelError::Definition(format!(
                    "a repeated property cannot declare a default (property '{}')",
                    self.name
                )));
            }
            if matches!(self.kind, PropertyKind::Computed(_)) {
                return Err(ModelError::Definition(format!(
                    "a computed property cannot declare a default (property '{}')",
                    self.name
                )));
            }
            self.kind.conform(&self.name, default.clone())?;
        }

        Ok(())
    }

    /// Check a full (possibly list) value against this property.
    pub(crate) fn conform_value(&self, value: FakeValue) -> ModelResult<FakeValue> {
        if self.repeated {
            match value {
                FakeValue::List(items) => {
                    let mut conformed = Vec::with_capacity(items.len());
                    for item in items {
                        conformed.push(self.kind.conform(&self.name, item)?);
                    }
                    Ok(FakeValue::List(conformed))
                }
                other => Err(ModelError::TypeMismatch {
                    property: self.name.clone(),
                    expected: format!("list of {}", self.kind.type_name()),
                    actual: other.kind().to_string(),
                }),
            }
        } else {
            self.kind.conform(&self.name, value)
        }
    }
}
