use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;
use uuid::Uuid;

/// User entity - represents a user stored in MongoDB
///
/// The wire format is camelCase JSON. The `fullName` field is derived once
/// at creation from the supplied first and last name; the raw inputs are
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// Display name, "<first> <last>" at creation time
    pub full_name: String,
    /// Optional age, passed through unchanged
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    /// Optional job title, passed through unchanged
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job: Option<String>,
    /// Additional caller-supplied attributes. Keys matching entity-owned
    /// wire names are stripped before they land here.
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: Map<String, Value>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a new user
///
/// `firstName` and `lastName` are required by deserialization and consumed
/// when the entity is built; they do not appear on the stored record.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    pub first_name: String,
    pub last_name: String,
    pub age: Option<i32>,
    pub job: Option<String>,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: Map<String, Value>,
}

/// DTO for partially updating an existing user
///
/// Absent fields leave the stored values untouched. Extra attributes are
/// merged into the stored attribute map key by key.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    pub full_name: Option<String>,
    pub age: Option<i32>,
    pub job: Option<String>,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: Map<String, Value>,
}

/// Wire names owned by the entity itself. Caller-supplied keys under
/// these names must never reach the extras map: a flattened `fullName`
/// would serialize after (and override) the derived one, and an injected
/// `_id` produces a document that no longer reads back as a `User`.
const RESERVED_KEYS: [&str; 5] = ["_id", "id", "fullName", "createdAt", "updatedAt"];

fn strip_reserved(extra: &mut Map<String, Value>) {
    for key in RESERVED_KEYS {
        extra.remove(key);
    }
}

impl User {
    /// Build a new user from the CreateUser DTO
    ///
    /// Derives `full_name` as first name, single space, last name, and
    /// discards the raw name parts.
    pub fn new(input: CreateUser) -> Self {
        let mut extra = input.extra;
        strip_reserved(&mut extra);

        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            full_name: format!("{} {}", input.first_name, input.last_name),
            age: input.age,
            job: input.job,
            extra,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update from the UpdateUser DTO
    pub fn apply_update(&mut self, update: UpdateUser) {
        if let Some(full_name) = update.full_name {
            self.full_name = full_name;
        }
        if let Some(age) = update.age {
            self.age = Some(age);
        }
        if let Some(job) = update.job {
            self.job = Some(job);
        }
        let mut incoming = update.extra;
        strip_reserved(&mut incoming);
        for (key, value) in incoming {
            self.extra.insert(key, value);
        }
        self.updated_at = Utc::now();
    }
}
