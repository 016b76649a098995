//! The generator object: named fake-value methods and name dispatch

use crate::data;
use crate::value::{FakeValue, GeoPoint, Key, UserRef};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde_json::{json, Value};

thread_local! {
    static RNG: std::cell::RefCell<StdRng> = std::cell::RefCell::new(StdRng::from_entropy());
}

/// Reseed the thread-local RNG for deterministic generation.
pub fn seed(seed: u64) {
    RNG.with(|rng| {
        *rng.borrow_mut() = StdRng::seed_from_u64(seed);
    });
}

fn with_rng<T>(f: impl FnOnce(&mut StdRng) -> T) -> T {
    RNG.with(|rng| f(&mut rng.borrow_mut()))
}

fn range(min: i64, max: i64) -> i64 {
    with_rng(|rng| rng.gen_range(min..=max))
}

fn pick(items: &[&str]) -> String {
    with_rng(|rng| items.choose(rng).map(|s| s.to_string()).unwrap_or_default())
}

fn hex_digest(bytes: usize) -> String {
    let mut buf = vec![0u8; bytes];
    with_rng(|rng| rng.fill(&mut buf[..]));
    hex::encode(buf)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Every name [`Faker::invoke`] dispatches on. [`Faker::knows`] checks
/// against this list, so the two stay in agreement by construction of the
/// dispatch test in this module.
const GENERATOR_NAMES: &[&str] = &[
    "first_name",
    "last_name",
    "name",
    "username",
    "email",
    "user",
    "phone_number",
    "street_address",
    "address",
    "city",
    "state",
    "zip",
    "full_address",
    "company",
    "website",
    "ssn",
    "guid",
    "md5",
    "sha1",
    "sentence",
    "lorem",
    "caption",
    "integer",
    "age",
    "float",
    "chance",
    "latitude",
    "longitude",
    "coordinates",
    "now",
    "today",
    "timestamp",
    "key",
    "profile",
];

/// The names an explicit generator binding or a field name can resolve to.
pub fn generator_names() -> &'static [&'static str] {
    GENERATOR_NAMES
}

/// Per-entity fake value source.
///
/// The identity cluster is memoized: once `first_name` (or any method
/// derived from it) has been generated, later calls on the same instance
/// reuse it, so `name` contains `first_name`, `email` contains `username`
/// and `profile` agrees with all of them.
#[derive(Debug, Default)]
pub struct Faker {
    first_name: Option<String>,
    last_name: Option<String>,
    username: Option<String>,
    email: Option<String>,
}

impl Faker {
    pub fn new() -> Self {
        Self::default()
    }

    //
    // Identity (memoized)
    //

    pub fn first_name(&mut self) -> String {
        match &self.first_name {
            Some(name) => name.clone(),
            None => {
                let name = pick(data::FIRST_NAMES);
                self.first_name = Some(name.clone());
                name
            }
        }
    }

    pub fn last_name(&mut self) -> String {
        match &self.last_name {
            Some(name) => name.clone(),
            None => {
                let name = pick(data::LAST_NAMES);
                self.last_name = Some(name.clone());
                name
            }
        }
    }

    pub fn name(&mut self) -> String {
        format!("{} {}", self.first_name(), self.last_name())
    }

    pub fn username(&mut self) -> String {
        match &self.username {
            Some(username) => username.clone(),
            None => {
                let username = format!(
                    "{}.{}",
                    self.first_name().to_lowercase(),
                    self.last_name().to_lowercase()
                );
                self.username = Some(username.clone());
                username
            }
        }
    }

    pub fn email(&mut self) -> String {
        match &self.email {
            Some(email) => email.clone(),
            None => {
                let email = format!("{}@{}", self.username(), pick(data::EMAIL_DOMAINS));
                self.email = Some(email.clone());
                email
            }
        }
    }

    pub fn user(&mut self) -> UserRef {
        UserRef::new(self.email())
    }

    //
    // Address
    //

    pub fn phone_number(&mut self) -> String {
        format!("({}) {}-{}", range(200, 999), range(200, 999), range(1000, 9999))
    }

    pub fn street_address(&mut self) -> String {
        format!("{} {}", range(1, 9999), pick(data::STREETS))
    }

    /// Alias for [`Faker::street_address`].
    pub fn address(&mut self) -> String {
        self.street_address()
    }

    pub fn city(&mut self) -> String {
        pick(data::CITIES)
    }

    pub fn state(&mut self) -> String {
        pick(data::STATES)
    }

    pub fn zip(&mut self) -> i64 {
        range(0, 99_999)
    }

    pub fn full_address(&mut self) -> String {
        format!(
            "{}, {}, {} {:05}",
            self.street_address(),
            self.city(),
            self.state(),
            self.zip()
        )
    }

    pub fn latitude(&mut self) -> f64 {
        round2(with_rng(|rng| rng.gen_range(-180.0f64..=180.0)) / 2.0)
    }

    pub fn longitude(&mut self) -> f64 {
        round2(with_rng(|rng| rng.gen_range(-180.0f64..=180.0)))
    }

    pub fn coordinates(&mut self) -> GeoPoint {
        GeoPoint::new(self.latitude(), self.longitude())
    }

    //
    // Company and web
    //

    pub fn company(&mut self) -> String {
        format!("{} {}", pick(data::COMPANY_PREFIXES), pick(data::COMPANY_SUFFIXES))
    }

    pub fn website(&mut self) -> String {
        format!(
            "http://{}.{}",
            self.company().to_lowercase().replace(' ', "-"),
            pick(data::TLDS)
        )
    }

    //
    // Identifiers
    //

    pub fn ssn(&mut self) -> String {
        format!("{:03}-{:02}-{:04}", range(1, 899), range(1, 99), range(1, 9999))
    }

    pub fn guid(&mut self) -> String {
        uuid::Uuid::new_v4().to_string()
    }

    pub fn md5(&mut self) -> String {
        hex_digest(16)
    }

    pub fn sha1(&mut self) -> String {
        hex_digest(20)
    }

    //
    // Text
    //

    pub fn sentence(&mut self) -> String {
        let count = range(4, 9);
        let words: Vec<String> = (0..count).map(|_| pick(data::LOREM_WORDS)).collect();
        let mut text = words.join(" ");
        if let Some(first) = text.chars().next() {
            let upper = first.to_uppercase().to_string();
            text.replace_range(0..first.len_utf8(), &upper);
        }
        text.push('.');
        text
    }

    pub fn lorem(&mut self) -> String {
        let count = range(3, 6);
        let sentences: Vec<String> = (0..count).map(|_| self.sentence()).collect();
        sentences.join(" ")
    }

    /// A short text snippet: lorem truncated to at most 64 characters.
    pub fn caption(&mut self) -> String {
        let text = self.lorem();
        match text.char_indices().nth(64) {
            Some((idx, _)) => text[..idx].to_string(),
            None => text,
        }
    }

    //
    // Numbers
    //

    pub fn integer(&mut self) -> i64 {
        range(1, 1_000_000)
    }

    pub fn age(&mut self) -> i64 {
        range(18, 90)
    }

    /// Triangular sample over 1..10_000, biased toward the middle.
    pub fn float(&mut self) -> f64 {
        let sample = with_rng(|rng| (rng.gen::<f64>() + rng.gen::<f64>()) / 2.0);
        1.0 + sample * (10_000.0 - 1.0)
    }

    pub fn chance(&mut self) -> bool {
        with_rng(|rng| rng.gen_bool(0.5))
    }

    //
    // Time
    //

    pub fn now(&mut self) -> DateTime<Utc> {
        Utc::now()
    }

    pub fn today(&mut self) -> NaiveDate {
        Utc::now().date_naive()
    }

    pub fn timestamp(&mut self) -> NaiveTime {
        Utc::now().time()
    }

    //
    // Structured and references
    //

    pub fn profile(&mut self) -> Value {
        json!({
            "first_name": self.first_name(),
            "last_name": self.last_name(),
            "username": self.username(),
            "email": self.email(),
            "full_address": self.full_address(),
            "phone_number": self.phone_number(),
        })
    }

    pub fn key(&mut self) -> Key {
        Key::new("Model", range(1, 100_000))
    }

    /// Name-convention dispatch: run the generator called `name`, or `None`
    /// when no generator carries that name.
    pub fn invoke(&mut self, name: &str) -> Option<FakeValue> {
        let value = match name {
            "first_name" => FakeValue::String(self.first_name()),
            "last_name" => FakeValue::String(self.last_name()),
            "name" => FakeValue::String(self.name()),
            "username" => FakeValue::String(self.username()),
            "email" => FakeValue::String(self.email()),
            "user" => FakeValue::User(self.user()),
            "phone_number" => FakeValue::String(self.phone_number()),
            "street_address" => FakeValue::String(self.street_address()),
            "address" => FakeValue::String(self.address()),
            "city" => FakeValue::String(self.city()),
            "state" => FakeValue::String(self.state()),
            "zip" => FakeValue::Integer(self.zip()),
            "full_address" => FakeValue::String(self.full_address()),
            "company" => FakeValue::String(self.company()),
            "website" => FakeValue::String(self.website()),
            "ssn" => FakeValue::String(self.ssn()),
            "guid" => FakeValue::String(self.guid()),
            "md5" => FakeValue::String(self.md5()),
            "sha1" => FakeValue::String(self.sha1()),
            "sentence" => FakeValue::String(self.sentence()),
            "lorem" => FakeValue::String(self.lorem()),
            "caption" => FakeValue::String(self.caption()),
            "integer" => FakeValue::Integer(self.integer()),
            "age" => FakeValue::Integer(self.age()),
            "float" => FakeValue::Float(self.float()),
            "chance" => FakeValue::Bool(self.chance()),
            "latitude" => FakeValue::Float(self.latitude()),
            "longitude" => FakeValue::Float(self.longitude()),
            "coordinates" => FakeValue::GeoPoint(self.coordinates()),
            "now" => FakeValue::DateTime(self.now()),
            "today" => FakeValue::Date(self.today()),
            "timestamp" => FakeValue::Time(self.timestamp()),
            "key" => FakeValue::Key(self.key()),
            "profile" => FakeValue::Json(self.profile()),
            _ => return None,
        };
        Some(value)
    }

    /// Whether an explicit generator binding names a real generator.
    pub fn knows(name: &str) -> bool {
        GENERATOR_NAMES.contains(&name)
    }
}
