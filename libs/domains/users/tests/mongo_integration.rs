//! Integration tests against a live MongoDB instance.
//!
//! Ignored by default; run with `cargo test -- --ignored` and a MongoDB
//! reachable at `MONGODB_URL` (defaults to localhost).

use domain_users::{CreateUser, MongoUserRepository, UpdateUser, UserError, UserService};
use mongodb::Client;
use serde_json::json;
use uuid::Uuid;

async fn test_service() -> UserService<MongoUserRepository> {
    let mongo_url =
        std::env::var("MONGODB_URL").unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
    let client = Client::with_uri_str(&mongo_url)
        .await
        .expect("failed to connect to MongoDB");
    let db = client.database("domain_users_test");

    // Fresh collection per run so tests don't see each other's data
    let collection = format!("users_{}", Uuid::now_v7().simple());
    UserService::new(MongoUserRepository::with_collection(db, &collection))
}

fn create_input() -> CreateUser {
    serde_json::from_value(json!({
        "firstName": "menna",
        "lastName": "hamdy",
        "age": 3,
        "job": "developer"
    }))
    .unwrap()
}

#[tokio::test]
#[ignore] // Requires actual MongoDB
async fn test_create_and_get_round_trip() {
    let service = test_service().await;

    let created = service.create_user(create_input()).await.unwrap();
    assert_eq!(created.full_name, "menna hamdy");

    let found = service.get_user(created.id).await.unwrap();
    assert_eq!(found, created);
}

#[tokio::test]
#[ignore] // Requires actual MongoDB
async fn test_list_contains_created_users() {
    let service = test_service().await;

    service.create_user(create_input()).await.unwrap();
    service.create_user(create_input()).await.unwrap();

    let users = service.list_users().await.unwrap();
    assert_eq!(users.len(), 2);
}

#[tokio::test]
#[ignore] // Requires actual MongoDB
async fn test_delete_returns_prior_state_then_not_found() {
    let service = test_service().await;

    let created = service.create_user(create_input()).await.unwrap();
    let deleted = service.delete_user(created.id).await.unwrap();
    assert_eq!(deleted, created);

    let err = service.get_user(created.id).await.unwrap_err();
    assert!(matches!(err, UserError::NotFound(_)));
}

#[tokio::test]
#[ignore] // Requires actual MongoDB
async fn test_update_persists_changes() {
    let service = test_service().await;

    let created = service.create_user(create_input()).await.unwrap();

    let update: UpdateUser = serde_json::from_value(json!({ "age": 4 })).unwrap();
    let updated = service.update_user(created.id, update).await.unwrap();
    assert_eq!(updated.age, Some(4));
    assert_eq!(updated.full_name, "menna hamdy");

    let found = service.get_user(created.id).await.unwrap();
    assert_eq!(found.age, Some(4));
}

#[tokio::test]
#[ignore] // Requires actual MongoDB
async fn test_extra_attributes_survive_storage() {
    let service = test_service().await;

    let input: CreateUser = serde_json::from_value(json!({
        "firstName": "ahmed",
        "lastName": "ibrahim",
        "nickname": "hima"
    }))
    .unwrap();

    let created = service.create_user(input).await.unwrap();
    let found = service.get_user(created.id).await.unwrap();

    assert_eq!(
        found.extra.get("nickname"),
        Some(&serde_json::Value::String("hima".to_string()))
    );
}
