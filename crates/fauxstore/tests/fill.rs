//! End-to-end coverage of the fill precedence and per-kind generation,
//! exercised through the public surface: definitions, entities and the
//! in-memory datastore.

use chrono::Utc;
use fauxstore::{
    Entity, FakeValue, GeoPoint, Key, MemoryDatastore, ModelDefinition, ModelError, ModelResult,
    Property, ValueKind,
};
use serde_json::json;

fn kind_of(entity: &Entity, name: &str) -> Option<ValueKind> {
    entity.get(name).map(FakeValue::kind)
}

//
// Model surface
//

#[tokio::test]
async fn test_create_keeps_explicit_value() -> ModelResult<()> {
    let store = MemoryDatastore::new();
    let definition = ModelDefinition::new("Contact").property(Property::string("name"))?;

    let mut entity = definition.entity();
    entity.set("name", "john")?;
    entity.put(&store).await?;

    assert_eq!(entity.get("name"), Some(&FakeValue::from("john")));
    assert!(entity.key().is_some());
    Ok(())
}

#[tokio::test]
async fn test_generate_returns_count_entities() -> ModelResult<()> {
    let store = MemoryDatastore::new();
    let definition = ModelDefinition::new("Contact").property(Property::string("name"))?;

    let entities = definition.generate(&store, 12).await?;

    assert_eq!(entities.len(), 12);
    assert_eq!(store.len(), 12);

    let mut ids: Vec<i64> = entities.iter().filter_map(|e| e.key().map(|k| k.id)).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 12);
    Ok(())
}

#[test]
fn test_entity_identity_coherence() -> ModelResult<()> {
    let definition = ModelDefinition::new("Contact")
        .property(Property::string("first_name"))?
        .property(Property::string("last_name"))?
        .property(Property::string("username"))?
        .property(Property::string("email"))?
        .property(Property::string("name"))?;

    let entity = definition.make()?;
    let get = |field: &str| entity.get(field).and_then(FakeValue::as_str).unwrap_or_default();

    assert!(get("name").contains(get("first_name")));
    assert!(get("name").contains(get("last_name")));
    assert!(get("email").contains(get("username")));
    Ok(())
}

//
// Precedence
//

#[test]
fn test_fallback_fires_for_unmatched_name() -> ModelResult<()> {
    let definition = ModelDefinition::new("Model").property(Property::integer("prop"))?;
    let entity = definition.make()?;

    assert_eq!(kind_of(&entity, "prop"), Some(ValueKind::Integer));
    Ok(())
}

#[test]
fn test_bound_generator_beats_name_match() -> ModelResult<()> {
    // the field name matches the "integer" generator, but the binding wins
    let definition =
        ModelDefinition::new("Model").property(Property::integer("integer").fake("age"))?;
    let entity = definition.make()?;

    let age = entity.get("integer").and_then(FakeValue::as_i64).unwrap();
    assert!((18..=90).contains(&age));
    Ok(())
}

#[test]
fn test_name_match_beats_fallback() -> ModelResult<()> {
    let definition = ModelDefinition::new("Model").property(Property::integer("age"))?;
    let entity = definition.make()?;

    let age = entity.get("age").and_then(FakeValue::as_i64).unwrap();
    assert!((18..=90).contains(&age));
    Ok(())
}

#[test]
fn test_default_beats_bound_generator() -> ModelResult<()> {
    let definition = ModelDefinition::new("Model")
        .property(Property::integer("prop").fake("age").default_value(1i64))?;
    let entity = definition.make()?;

    assert_eq!(entity.get("prop"), Some(&FakeValue::Integer(1)));
    Ok(())
}

#[test]
fn test_required_field_is_filled() -> ModelResult<()> {
    let definition = ModelDefinition::new("Model").property(Property::integer("prop").required())?;
    let entity = definition.make()?;

    assert_eq!(kind_of(&entity, "prop"), Some(ValueKind::Integer));
    Ok(())
}

//
// Repeated fields
//

#[test]
fn test_repeated_defaults_to_one_value() -> ModelResult<()> {
    let definition =
        ModelDefinition::new("Model").property(Property::integer("prop").fake("age").repeated())?;
    let entity = definition.make()?;

    assert_eq!(entity.get("prop").and_then(FakeValue::as_list).map(<[_]>::len), Some(1));
    Ok(())
}

#[test]
fn test_repeated_honors_count() -> ModelResult<()> {
    let definition = ModelDefinition::new("Model")
        .property(Property::integer("prop").fake("age").repeated().count(6))?;
    let entity = definition.make()?;

    let items = entity.get("prop").and_then(FakeValue::as_list).unwrap();
    assert_eq!(items.len(), 6);
    assert!(items.iter().all(|item| item.kind() == ValueKind::Integer));
    Ok(())
}

#[test]
fn test_repeated_with_default_rejected() {
    let result = ModelDefinition::new("Model")
        .property(Property::integer("prop").repeated().default_value(1i64));

    assert!(matches!(result, Err(ModelError::Definition(_))));
}

#[test]
fn test_zero_count_rejected() {
    let result =
        ModelDefinition::new("Model").property(Property::integer("prop").repeated().count(0));

    assert!(matches!(result, Err(ModelError::Definition(_))));
}

//
// Declaration-time validation
//

#[test]
fn test_unknown_generator_binding_rejected() {
    let result = ModelDefinition::new("Model").property(Property::string("prop").fake("notmethod"));

    assert!(matches!(result, Err(ModelError::Definition(_))));
}

#[test]
fn test_blob_property_unsupported() {
    assert!(matches!(Property::blob("data"), Err(ModelError::Definition(_))));
}

//
// Per-kind generation
//

#[test]
fn test_float_property() -> ModelResult<()> {
    let definition = ModelDefinition::new("Model")
        .property(Property::float("prop"))?
        .property(Property::float("latitude"))?
        .property(Property::float("coerced").fake("age"))?;
    let entity = definition.make()?;

    assert_eq!(kind_of(&entity, "prop"), Some(ValueKind::Float));

    let latitude = entity.get("latitude").and_then(FakeValue::as_f64).unwrap();
    assert!((-90.0..=90.0).contains(&latitude));

    // integer generator output coerces onto a float property
    let coerced = entity.get("coerced").and_then(FakeValue::as_f64).unwrap();
    assert!((18.0..=90.0).contains(&coerced));
    Ok(())
}

#[test]
fn test_boolean_property() -> ModelResult<()> {
    let definition = ModelDefinition::new("Model")
        .property(Property::boolean("prop"))?
        .property(Property::boolean("chance"))?
        .property(Property::boolean("accepted").default_value(true))?;
    let entity = definition.make()?;

    assert_eq!(kind_of(&entity, "prop"), Some(ValueKind::Bool));
    assert_eq!(kind_of(&entity, "chance"), Some(ValueKind::Bool));
    assert_eq!(entity.get("accepted"), Some(&FakeValue::Bool(true)));
    Ok(())
}

#[test]
fn test_string_and_text_properties() -> ModelResult<()> {
    let definition = ModelDefinition::new("Model")
        .property(Property::string("prop"))?
        .property(Property::string("named").fake("first_name"))?
        .property(Property::text("body"))?;
    let entity = definition.make()?;

    let caption = entity.get("prop").and_then(FakeValue::as_str).unwrap();
    assert!(caption.chars().count() <= 64);
    assert_eq!(kind_of(&entity, "named"), Some(ValueKind::String));
    assert_eq!(kind_of(&entity, "body"), Some(ValueKind::String));
    Ok(())
}

#[test]
fn test_generic_property_accepts_any_generator() -> ModelResult<()> {
    let definition = ModelDefinition::new("Model")
        .property(Property::generic("prop"))?
        .property(Property::generic("count").fake("age"))?;
    let entity = definition.make()?;

    assert_eq!(kind_of(&entity, "prop"), Some(ValueKind::String));
    assert_eq!(kind_of(&entity, "count"), Some(ValueKind::Integer));
    Ok(())
}

#[test]
fn test_temporal_properties() -> ModelResult<()> {
    let fixed = Utc::now();
    let definition = ModelDefinition::new("Model")
        .property(Property::datetime("prop"))?
        .property(Property::datetime("pinned").default_value(fixed))?
        .property(Property::date("today"))?
        .property(Property::time("timestamp"))?;
    let entity = definition.make()?;

    assert_eq!(kind_of(&entity, "prop"), Some(ValueKind::DateTime));
    assert_eq!(entity.get("pinned"), Some(&FakeValue::DateTime(fixed)));
    assert_eq!(kind_of(&entity, "today"), Some(ValueKind::Date));
    assert_eq!(kind_of(&entity, "timestamp"), Some(ValueKind::Time));
    Ok(())
}

#[test]
fn test_geopoint_property() -> ModelResult<()> {
    let definition = ModelDefinition::new("Model")
        .property(Property::geopoint("prop"))?
        .property(Property::geopoint("home").default_value(GeoPoint::new(54.12, -23.41)))?;
    let entity = definition.make()?;

    match entity.get("prop") {
        Some(FakeValue::GeoPoint(point)) => {
            assert!((-90.0..=90.0).contains(&point.lat));
            assert!((-180.0..=180.0).contains(&point.lon));
        }
        other => panic!("expected geopoint, got {:?}", other),
    }
    assert_eq!(
        entity.get("home"),
        Some(&FakeValue::GeoPoint(GeoPoint::new(54.12, -23.41)))
    );
    Ok(())
}

#[test]
fn test_key_property() -> ModelResult<()> {
    let definition = ModelDefinition::new("Model")
        .property(Property::key("prop"))?
        .property(Property::key("parent").default_value(Key::new("Model", 1)))?;
    let entity = definition.make()?;

    assert_eq!(kind_of(&entity, "prop"), Some(ValueKind::Key));
    assert_eq!(entity.get("parent"), Some(&FakeValue::Key(Key::new("Model", 1))));
    Ok(())
}

#[test]
fn test_user_property_shares_entity_identity() -> ModelResult<()> {
    let definition = ModelDefinition::new("Model")
        .property(Property::string("username"))?
        .property(Property::user("user"))?;
    let entity = definition.make()?;

    let username = entity.get("username").and_then(FakeValue::as_str).unwrap();
    match entity.get("user") {
        Some(FakeValue::User(user)) => {
            assert!(user.email().contains('@'));
            assert!(user.email().contains(username));
        }
        other => panic!("expected user, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_json_property() -> ModelResult<()> {
    let definition = ModelDefinition::new("Model")
        .property(Property::json("prop"))?
        .property(Property::json("profile"))?
        .property(Property::json("settings").default_value(json!({ "name": "John" })))?;
    let entity = definition.make()?;

    // profile fallback and name match both produce the structured profile map
    for field in ["prop", "profile"] {
        match entity.get(field) {
            Some(FakeValue::Json(value)) => {
                assert!(value["first_name"].is_string());
                assert!(value["email"].is_string());
            }
            other => panic!("expected json for '{}', got {:?}", field, other),
        }
    }
    assert_eq!(
        entity.get("settings"),
        Some(&FakeValue::Json(json!({ "name": "John" })))
    );
    Ok(())
}

//
// Computed and structured properties
//

#[test]
fn test_computed_property_sees_filled_entity() -> ModelResult<()> {
    let definition = ModelDefinition::new("Model")
        .property(Property::string("name"))?
        .property(Property::computed("slug", |entity| {
            let name = entity.get("name").and_then(FakeValue::as_str).unwrap_or_default();
            FakeValue::from(name.to_lowercase())
        }))?;
    let entity = definition.make()?;

    let name = entity.get("name").and_then(FakeValue::as_str).unwrap();
    let slug = entity.get("slug").and_then(FakeValue::as_str).unwrap();
    assert_eq!(slug, name.to_lowercase());
    Ok(())
}

#[test]
fn test_repeated_computed_property() -> ModelResult<()> {
    let definition = ModelDefinition::new("Model")
        .property(Property::string("name").repeated().count(3))?
        .property(Property::computed("slugs", |entity| {
            let names = entity.get("name").and_then(FakeValue::as_list).unwrap_or(&[]);
            let slugs = names
                .iter()
                .filter_map(FakeValue::as_str)
                .map(|name| FakeValue::from(name.to_lowercase()))
                .collect();
            FakeValue::List(slugs)
        }).repeated())?;
    let entity = definition.make()?;

    assert_eq!(entity.get("slugs").and_then(FakeValue::as_list).map(<[_]>::len), Some(3));
    Ok(())
}

#[test]
fn test_structured_property_fills_nested_entity() -> ModelResult<()> {
    let inner = ModelDefinition::new("Inline")
        .property(Property::string("name"))?
        .property(Property::string("username"))?;
    let definition = ModelDefinition::new("Model").property(Property::structured("inline", inner))?;
    let entity = definition.make()?;

    match entity.get("inline") {
        Some(FakeValue::Json(value)) => {
            assert!(value["name"].is_string());
            assert!(value["username"].is_string());
        }
        other => panic!("expected nested object, got {:?}", other),
    }
    Ok(())
}

//
// Persistence projection
//

#[tokio::test]
async fn test_stored_record_has_all_fields() -> ModelResult<()> {
    let store = MemoryDatastore::new();
    let definition = ModelDefinition::new("Contact")
        .property(Property::string("name"))?
        .property(Property::integer("age"))?
        .property(Property::boolean("subscribed"))?;

    let entity = definition.create(&store).await?;
    let key = entity.key().cloned().expect("key assigned on put");
    let record = store.get(&key).expect("record stored");

    assert!(record["name"].is_string());
    assert!(record["age"].is_i64());
    assert!(record["subscribed"].is_boolean());
    Ok(())
}
