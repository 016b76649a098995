//! Model definitions and entity instances

use crate::datastore::Datastore;
use crate::error::{ModelError, ModelResult};
use crate::fill;
use crate::property::{Property, PropertyKind};
use fauxstore_faker::{FakeValue, Faker, Key};
use serde_json::Value;
use std::collections::HashMap;

/// A named entity kind plus its ordered property set.
///
/// Properties are validated as they are attached, so a bad declaration
/// (unknown generator binding, default on a repeated field, ...) fails at
/// definition time rather than on first write.
#[derive(Debug, Clone)]
pub struct ModelDefinition {
    kind: String,
    properties: Vec<Property>,
}

impl ModelDefinition {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            properties: Vec::new(),
        }
    }

    /// Attach a property, validating its declaration.
    pub fn property(mut self, property: Property) -> ModelResult<Self> {
        property.validate()?;
        if self.properties.iter().any(|p| p.name() == property.name()) {
            return Err(ModelError::Definition(format!(
                "duplicate property '{}' on kind '{}'",
                property.name(),
                self.kind
            )));
        }
        self.properties.push(property);
        Ok(self)
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn get_property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name() == name)
    }

    /// A blank entity of this kind, with its own fresh [`Faker`].
    pub fn entity(&self) -> Entity {
        Entity {
            definition: self.clone(),
            values: HashMap::new(),
            faker: Faker::new(),
            key: None,
        }
    }

    /// Fill a blank entity without persisting it.
    pub fn make(&self) -> ModelResult<Entity> {
        let mut entity = self.entity();
        entity.fill()?;
        Ok(entity)
    }

    /// Fill a blank entity and persist it through `store`.
    pub async fn create(&self, store: &dyn Datastore) -> ModelResult<Entity> {
        let mut entity = self.entity();
        entity.put(store).await?;
        Ok(entity)
    }

    /// Create `count` independent entities. Each gets a fresh faker, so
    /// identity memoization never leaks across records.
    pub async fn generate(&self, store: &dyn Datastore, count: usize) -> ModelResult<Vec<Entity>> {
        let mut entities = Vec::with_capacity(count);
        for _ in 0..count {
            entities.push(self.create(store).await?);
        }
        Ok(entities)
    }
}

/// One record instance: declared kind, assigned values and the per-entity
/// generator used to fill whatever the caller left unset.
#[derive(Debug)]
pub struct Entity {
    definition: ModelDefinition,
    values: HashMap<String, FakeValue>,
    faker: Faker,
    key: Option<Key>,
}

impl Entity {
    pub fn kind(&self) -> &str {
        self.definition.kind()
    }

    pub fn definition(&self) -> &ModelDefinition {
        &self.definition
    }

    /// Assign an explicit value. The field must be declared, must not be
    /// computed, and the value must conform to the declared kind.
    pub fn set(&mut self, name: &str, value: impl Into<FakeValue>) -> ModelResult<()> {
        let property = self
            .definition
            .get_property(name)
            .ok_or_else(|| ModelError::UnknownProperty(name.to_string()))?;
        if matches!(property.kind(), PropertyKind::Computed(_)) {
            return Err(ModelError::Definition(format!(
                "cannot assign to computed property '{}'",
                name
            )));
        }
        let value = property.conform_value(value.into())?;
        self.values.insert(name.to_string(), value);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&FakeValue> {
        self.values.get(name)
    }

    /// Key assigned by the datastore on put, if any.
    pub fn key(&self) -> Option<&Key> {
        self.key.as_ref()
    }

    pub fn faker(&mut self) -> &mut Faker {
        &mut self.faker
    }

    /// Run the value-resolution engine: every declared, unset field gets a
    /// value; computed fields are evaluated last from the filled entity.
    pub fn fill(&mut self) -> ModelResult<()> {
        let definition = self.definition.clone();

        for property in definition.properties() {
            if matches!(property.kind(), PropertyKind::Computed(_)) {
                continue;
            }
            if self.values.contains_key(property.name()) {
                continue;
            }
            let value = fill::resolve(property, &mut self.faker)?;
            tracing::debug!(
                "filled '{}' on kind '{}' ({})",
                property.name(),
                definition.kind(),
                value.kind()
            );
            self.values.insert(property.name().to_string(), value);
        }

        for property in definition.properties() {
            if let PropertyKind::Computed(compute) = property.kind() {
                let value = property.conform_value(compute(self))?;
                self.values.insert(property.name().to_string(), value);
            }
        }

        Ok(())
    }

    /// Fill unset fields, then hand the entity to the datastore. Returns
    /// the key the store assigned.
    pub async fn put(&mut self, store: &dyn Datastore) -> ModelResult<Key> {
        self.fill()?;
        let key = store.put(self).await?;
        self.key = Some(key.clone());
        Ok(key)
    }

    /// JSON projection of the assigned values, in declaration order.
    pub fn to_json(&self) -> Value {
        let mut map = serde_json::Map::new();
        for property in self.definition.properties() {
            if let Some(value) = self.values.get(property.name()) {
                map.insert(property.name().to_string(), value.to_json());
            }
        }
        Value::Object(map)
    }
}
