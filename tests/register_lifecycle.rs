//! Integration tests for the registration-request lifecycle
//!
//! These exercise the repository against a live database. They connect via
//! `DATABASE_URL` and skip silently when no database is reachable, so the
//! suite stays runnable without external services.

use std::time::{SystemTime, UNIX_EPOCH};

use sqlx::PgPool;

use ResidenceHub::database::repositories::{RegisterRequestRepository, ResidentRepository};
use ResidenceHub::models::NewRegisterRequest;

const PAGE_SIZE: i64 = 50;

async fn test_pool() -> Option<PgPool> {
    let url = std::env::var("DATABASE_URL").ok()?;
    let pool = PgPool::connect(&url).await.ok()?;
    sqlx::migrate!("./migrations").run(&pool).await.ok()?;
    Some(pool)
}

/// Username unique across test runs, so reruns never collide with leftover
/// rows
fn unique_username(tag: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("{tag}-{nanos}")
}

fn registration(username: &str) -> NewRegisterRequest {
    NewRegisterRequest {
        name: "Test Resident".to_string(),
        room: 101,
        birthday: None,
        phone: None,
        email: None,
        username: username.to_string(),
        hashed_password: "$argon2id$placeholder".to_string(),
    }
}

#[tokio::test]
async fn duplicate_username_is_refused() {
    let Some(pool) = test_pool().await else {
        return;
    };
    let repo = RegisterRequestRepository::new(pool, PAGE_SIZE);

    let username = unique_username("dup");
    let first = repo.create(registration(&username)).await.unwrap();
    let first = first.expect("first registration should be created");

    // Same username while the first request is still pending
    let second = repo.create(registration(&username)).await.unwrap();
    assert!(second.is_none());

    repo.decline(first.request_id).await.unwrap();
}

#[tokio::test]
async fn accepted_username_refuses_new_registrations() {
    let Some(pool) = test_pool().await else {
        return;
    };
    let repo = RegisterRequestRepository::new(pool.clone(), PAGE_SIZE);
    let residents = ResidentRepository::new(pool, PAGE_SIZE);

    let username = unique_username("accepted");
    let request = repo
        .create(registration(&username))
        .await
        .unwrap()
        .expect("registration should be created");

    let resident = repo
        .accept(request.request_id)
        .await
        .unwrap()
        .expect("pending request should be accepted");
    assert_eq!(resident.username, username);

    // The username now belongs to a resident; re-registration is refused
    let again = repo.create(registration(&username)).await.unwrap();
    assert!(again.is_none());

    residents.delete(resident.resident_id).await.unwrap();
}

#[tokio::test]
async fn accept_removes_request_and_creates_resident_atomically() {
    let Some(pool) = test_pool().await else {
        return;
    };
    let repo = RegisterRequestRepository::new(pool.clone(), PAGE_SIZE);
    let residents = ResidentRepository::new(pool, PAGE_SIZE);

    let username = unique_username("atomic");
    let request = repo
        .create(registration(&username))
        .await
        .unwrap()
        .expect("registration should be created");

    let resident = repo
        .accept(request.request_id)
        .await
        .unwrap()
        .expect("pending request should be accepted");

    // The request row is gone: a second accept finds nothing
    assert!(repo.accept(request.request_id).await.unwrap().is_none());

    // The resident row exists with the copied fields
    let found = residents.find_by_username(&username).await.unwrap();
    assert_eq!(found.unwrap().resident_id, resident.resident_id);

    residents.delete(resident.resident_id).await.unwrap();
}

#[tokio::test]
async fn accept_of_unknown_id_changes_nothing() {
    let Some(pool) = test_pool().await else {
        return;
    };
    let repo = RegisterRequestRepository::new(pool, PAGE_SIZE);

    let before = repo.count().await.unwrap();
    assert!(repo.accept(i64::MAX).await.unwrap().is_none());
    let after = repo.count().await.unwrap();

    assert_eq!(before, after);
}

#[tokio::test]
async fn decline_of_missing_id_is_a_silent_noop() {
    let Some(pool) = test_pool().await else {
        return;
    };
    let repo = RegisterRequestRepository::new(pool, PAGE_SIZE);

    let before = repo.count().await.unwrap();
    repo.decline(i64::MAX).await.unwrap();
    let after = repo.count().await.unwrap();

    assert_eq!(before, after);
}

#[tokio::test]
async fn query_pages_are_bounded_ordered_and_end_empty() {
    let Some(pool) = test_pool().await else {
        return;
    };
    let repo = RegisterRequestRepository::new(pool, PAGE_SIZE);

    let first = repo
        .create(registration(&unique_username("page-a")))
        .await
        .unwrap()
        .expect("registration should be created");
    let second = repo
        .create(registration(&unique_username("page-b")))
        .await
        .unwrap()
        .expect("registration should be created");

    let page = repo.query(0).await.unwrap();
    assert!(page.len() as i64 <= PAGE_SIZE);

    // Most recent first: ids strictly descending across the page, with the
    // two fresh rows at the top
    let ids: Vec<i64> = page.iter().map(|r| r.request_id).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(ids, sorted);
    assert_eq!(ids[0], second.request_id);
    assert_eq!(ids[1], first.request_id);

    // Paging past the end yields an empty sequence
    let total = repo.count().await.unwrap();
    let past_the_end = repo.query(total + 10).await.unwrap();
    assert!(past_the_end.is_empty());

    repo.reject_many(&[first.request_id, second.request_id])
        .await
        .unwrap();
}
