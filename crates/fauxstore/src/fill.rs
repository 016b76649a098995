//! Value resolution for unset fields at write time

use crate::error::{ModelError, ModelResult};
use crate::property::{Property, PropertyKind};
use fauxstore_faker::{FakeValue, Faker};

/// Resolve the value for an unset, non-computed property:
/// default > bound generator > name-convention match > kind fallback.
/// Repeated properties generate `count` values independently.
pub(crate) fn resolve(property: &Property, faker: &mut Faker) -> ModelResult<FakeValue> {
    if let Some(default) = property.default() {
        return property.conform_value(default.clone());
    }

    if property.is_repeated() {
        let mut items = Vec::with_capacity(property.value_count());
        for _ in 0..property.value_count() {
            items.push(generate(property, faker)?);
        }
        Ok(FakeValue::List(items))
    } else {
        generate(property, faker)
    }
}

fn generate(property: &Property, faker: &mut Faker) -> ModelResult<FakeValue> {
    if let PropertyKind::Structured(definition) = property.kind() {
        let mut inner = definition.entity();
        inner.fill()?;
        return Ok(FakeValue::Json(inner.to_json()));
    }

    let value = if let Some(fake) = property.fake_name() {
        // Bindings are validated at declaration time; stay total anyway.
        faker.invoke(fake).ok_or_else(|| {
            ModelError::Definition(format!(
                "'{}' is not a known generator (property '{}')",
                fake,
                property.name()
            ))
        })?
    } else if let Some(value) = faker.invoke(property.name()) {
        value
    } else {
        let fallback = property.kind().fallback_generator().ok_or_else(|| {
            ModelError::Definition(format!(
                "property '{}' has no fallback generator",
                property.name()
            ))
        })?;
        faker.invoke(fallback).ok_or_else(|| {
            ModelError::Definition(format!(
                "property '{}' has no fallback generator",
                property.name()
            ))
        })?
    };

    property.kind().conform(property.name(), value)
}
