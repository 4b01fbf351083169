mod common;

use axum::{
    http::{Method, StatusCode},
    Router,
};
use common::{config, send};
use meal_sharing::{app::App, types::ToContext};
use serde_json::{json, Value};
use sqlx::PgPool;
use std::sync::Arc;

fn database_url() -> String {
    std::env::var("DATABASE_URL").expect("DATABASE_URL must be set")
}

async fn router_for(url: &str) -> Router {
    let ctx = config(url).to_context().await.expect("database context");
    App::new(Arc::new(ctx)).router()
}

async fn router() -> Router {
    router_for(&database_url()).await
}

/// Unique per call, for telling this test's rows apart from everyone else's.
fn nonce() -> String {
    format!("n{}", chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default())
}

fn with_database(url: &str, name: &str) -> String {
    let (base, params) = match url.split_once('?') {
        Some((base, params)) => (base, Some(params)),
        None => (url, None),
    };
    let server = base.rsplit_once('/').map(|(server, _)| server).unwrap_or(base);

    match params {
        Some(params) => format!("{server}/{name}?{params}"),
        None => format!("{server}/{name}"),
    }
}

/// A migrated database holding nothing but what the test inserts.
struct EmptyDatabase {
    admin: PgPool,
    name: String,
    url: String,
}

impl EmptyDatabase {
    async fn create() -> Self {
        let admin = PgPool::connect(&database_url()).await.expect("admin connection");
        let name = format!("meal_sharing_{}", nonce());
        sqlx::query(&format!("CREATE DATABASE {name}"))
            .execute(&admin)
            .await
            .expect("create database");
        let url = with_database(&database_url(), &name);

        Self { admin, name, url }
    }

    async fn remove(self) {
        let _ = sqlx::query(&format!("DROP DATABASE IF EXISTS {} WITH (FORCE)", self.name))
            .execute(&self.admin)
            .await;
    }
}

async fn post_meal(router: &Router, body: Value) -> Value {
    let (status, meal) = send(router.clone(), Method::POST, "/api/meals", Some(body), None).await;
    assert_eq!(status, StatusCode::CREATED, "{meal}");
    meal
}

fn meal_body(title: &str, when: &str, price: i32) -> Value {
    json!({
        "title": title,
        "description": "D",
        "location": "L",
        "when": when,
        "max_reservations": 5,
        "price": price
    })
}

async fn listed_ids(router: &Router, uri: &str) -> Vec<i64> {
    let (status, meals) = send(router.clone(), Method::GET, uri, None, None).await;
    assert_eq!(status, StatusCode::OK, "{uri}: {meals}");
    meals
        .as_array()
        .unwrap()
        .iter()
        .map(|meal| meal["id"].as_i64().unwrap())
        .collect()
}

async fn create_meal(router: &Router, max_reservations: i32) -> Value {
    let (status, meal) = send(
        router.clone(),
        Method::POST,
        "/api/meals",
        Some(json!({
            "title": "T",
            "description": "D",
            "location": "L",
            "when": "2025-01-01T10:00:00Z",
            "max_reservations": max_reservations,
            "price": 10,
            "created_date": "2025-01-01"
        })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    meal
}

#[tokio::test]
#[ignore = "requires a running Postgres (DATABASE_URL)"]
async fn creating_a_meal_returns_the_row() {
    let router = router().await;

    let meal = create_meal(&router, 5).await;

    assert!(meal["id"].as_i64().unwrap() > 0);
    assert_eq!(meal["title"], "T");
    assert_eq!(meal["description"], "D");
    assert_eq!(meal["location"], "L");
    assert_eq!(meal["when"], "2025-01-01T10:00:00Z");
    assert_eq!(meal["max_reservations"], 5);
    assert_eq!(meal["created_date"], "2025-01-01");
}

#[tokio::test]
#[ignore = "requires a running Postgres (DATABASE_URL)"]
async fn fully_booked_meals_are_not_available() {
    let router = router().await;
    let meal = create_meal(&router, 5).await;
    let meal_id = meal["id"].as_i64().unwrap();

    for _ in 0..5 {
        let (status, _) = send(
            router.clone(),
            Method::POST,
            "/api/reservations",
            Some(json!({
                "number_of_guests": 1,
                "meal_id": meal_id,
                "contact_phonenumber": "4512345678",
                "contact_name": "Guest"
            })),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, meals) = send(
        router.clone(),
        Method::GET,
        "/api/meals?availableReservations=true",
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(meals
        .as_array()
        .unwrap()
        .iter()
        .all(|meal| meal["id"].as_i64() != Some(meal_id)));

    let (_, meal) = send(router, Method::GET, &format!("/api/meals/{meal_id}"), None, None).await;
    assert_eq!(meal["current_reservations"], 5);
    assert_eq!(meal["available_spots"], 0);
}

#[tokio::test]
#[ignore = "requires a running Postgres (DATABASE_URL)"]
async fn average_rating_is_the_mean_of_review_stars() {
    let router = router().await;
    let meal_id = create_meal(&router, 3).await["id"].as_i64().unwrap();

    let (_, fresh) = send(router.clone(), Method::GET, &format!("/api/meals/{meal_id}"), None, None).await;
    assert_eq!(fresh["average_rating"], 0.0);
    assert_eq!(fresh["review_count"], 0);

    for stars in [4, 5] {
        let (status, _) = send(
            router.clone(),
            Method::POST,
            "/api/reviews",
            Some(json!({
                "title": "Good",
                "description": "Really good",
                "meal_id": meal_id,
                "stars": stars
            })),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, rated) = send(router, Method::GET, &format!("/api/meals/{meal_id}"), None, None).await;
    assert_eq!(rated["average_rating"], 4.5);
    assert_eq!(rated["review_count"], 2);
}

#[tokio::test]
#[ignore = "requires a running Postgres (DATABASE_URL)"]
async fn deleting_missing_rows_is_not_found() {
    let router = router().await;

    for uri in [
        "/api/meals/999999999",
        "/api/reservations/999999999",
        "/api/reviews/999999999",
    ] {
        let (status, _) = send(router.clone(), Method::DELETE, uri, None, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
    }
}

#[tokio::test]
#[ignore = "requires a running Postgres (DATABASE_URL)"]
async fn reservation_for_a_missing_meal_is_a_bad_request() {
    let (status, _) = send(
        router().await,
        Method::POST,
        "/api/reservations",
        Some(json!({
            "number_of_guests": 2,
            "meal_id": 999999999,
            "contact_phonenumber": "4512345678",
            "contact_name": "Guest"
        })),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires a running Postgres (DATABASE_URL)"]
async fn register_then_me_round_trip() {
    let router = router().await;
    let email = format!("user{}@example.com", chrono::Utc::now().timestamp_micros());

    let (status, registered) = send(
        router.clone(),
        Method::POST,
        "/api/auth/register",
        Some(json!({
            "email": email,
            "password": "Secr3t!pass",
            "firstName": "Ada",
            "lastName": "Lovelace"
        })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let token = registered["token"].as_str().unwrap();
    let (status, me) = send(router.clone(), Method::GET, "/api/auth/me", None, Some(token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["email"], email);
    assert_eq!(me["firstName"], "Ada");
    assert!(me.get("password_hash").is_none());

    let (status, _) = send(
        router,
        Method::POST,
        "/api/auth/register",
        Some(json!({
            "email": email,
            "password": "Secr3t!pass",
            "firstName": "Ada",
            "lastName": "Lovelace"
        })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
#[ignore = "requires a running Postgres (DATABASE_URL)"]
async fn listing_sorts_by_key_and_breaks_ties_by_id() {
    let router = router().await;
    let tag = nonce();
    let when = "2030-01-01T10:00:00Z";

    let cheap = post_meal(&router, meal_body(&format!("{tag} cheap"), when, 5)).await;
    let pricey = post_meal(&router, meal_body(&format!("{tag} pricey"), when, 50)).await;
    let also_cheap = post_meal(&router, meal_body(&format!("{tag} also cheap"), when, 5)).await;
    let [cheap, pricey, also_cheap] =
        [cheap, pricey, also_cheap].map(|meal| meal["id"].as_i64().unwrap());

    let ascending = listed_ids(&router, &format!("/api/meals?title={tag}&sortKey=price")).await;
    assert_eq!(ascending, vec![cheap, also_cheap, pricey]);

    let descending =
        listed_ids(&router, &format!("/api/meals?title={tag}&sortKey=price&sortDir=DESC")).await;
    assert_eq!(descending, vec![pricey, cheap, also_cheap]);

    let by_id = listed_ids(&router, &format!("/api/meals?title={tag}&sortDir=desc")).await;
    assert_eq!(by_id, vec![also_cheap, pricey, cheap]);

    let paged = listed_ids(
        &router,
        &format!("/api/meals?title={tag}&sortKey=price&limit=1&offset=1"),
    )
    .await;
    assert_eq!(paged, vec![also_cheap]);
}

#[tokio::test]
#[ignore = "requires a running Postgres (DATABASE_URL)"]
async fn listing_filters_by_title_and_date_window() {
    let router = router().await;
    let tag = nonce();

    let spring = post_meal(
        &router,
        meal_body(&format!("Spring {tag} supper"), "2031-03-01T18:00:00Z", 10),
    )
    .await["id"]
        .as_i64()
        .unwrap();
    let summer = post_meal(
        &router,
        meal_body(&format!("Summer {tag} supper"), "2031-06-01T18:00:00Z", 10),
    )
    .await["id"]
        .as_i64()
        .unwrap();

    let upper = tag.to_uppercase();
    assert_eq!(
        listed_ids(&router, &format!("/api/meals?title={upper}")).await,
        vec![spring, summer]
    );
    assert_eq!(
        listed_ids(&router, &format!("/api/meals?title=summer%20{tag}")).await,
        vec![summer]
    );
    assert_eq!(
        listed_ids(&router, &format!("/api/meals?title={tag}&dateAfter=2031-04-01")).await,
        vec![summer]
    );
    assert_eq!(
        listed_ids(
            &router,
            &format!("/api/meals?title={tag}&dateBefore=2031-04-01T00:00:00Z")
        )
        .await,
        vec![spring]
    );
    assert!(listed_ids(
        &router,
        &format!("/api/meals?title={tag}&dateAfter=2031-04-01&dateBefore=2031-05-01")
    )
    .await
    .is_empty());
}

#[tokio::test]
#[ignore = "requires a running Postgres (DATABASE_URL)"]
async fn timeline_slices_split_on_now() {
    let database = EmptyDatabase::create().await;
    let router = router_for(&database.url).await;

    for uri in ["/api/meals/first", "/api/meals/last"] {
        let (status, body) = send(router.clone(), Method::GET, uri, None, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body["error"], "Meals not found");
    }
    assert!(listed_ids(&router, "/api/meals/future").await.is_empty());

    let past = post_meal(&router, meal_body("Past", "2020-01-01T10:00:00Z", 10)).await["id"]
        .as_i64()
        .unwrap();
    let future = post_meal(&router, meal_body("Future", "2099-01-01T10:00:00Z", 10)).await["id"]
        .as_i64()
        .unwrap();

    assert_eq!(listed_ids(&router, "/api/meals/past").await, vec![past]);
    assert_eq!(listed_ids(&router, "/api/meals/future").await, vec![future]);

    let (_, first) = send(router.clone(), Method::GET, "/api/meals/first", None, None).await;
    assert_eq!(first["id"], past);
    let (_, last) = send(router.clone(), Method::GET, "/api/meals/last", None, None).await;
    assert_eq!(last["id"], future);

    database.remove().await;
}

#[tokio::test]
#[ignore = "requires a running Postgres (DATABASE_URL)"]
async fn reviews_of_a_missing_meal_are_not_found() {
    let router = router().await;

    let (status, body) = send(
        router.clone(),
        Method::GET,
        "/api/meals/999999999/reviews",
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Meal not found");

    let meal_id = create_meal(&router, 4).await["id"].as_i64().unwrap();
    let (status, reviews) = send(
        router,
        Method::GET,
        &format!("/api/meals/{meal_id}/reviews"),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(reviews, json!([]));
}

async fn create_user(router: &Router, email: &str) -> (StatusCode, Value) {
    send(
        router.clone(),
        Method::POST,
        "/api/users",
        Some(json!({
            "email": email,
            "password": "Secr3t!pass",
            "first_name": "Grace",
            "last_name": "Hopper",
            "phone_number": "4512345678",
            "profile_image": "http://img/grace.png"
        })),
        None,
    )
    .await
}

#[tokio::test]
#[ignore = "requires a running Postgres (DATABASE_URL)"]
async fn duplicate_user_email_conflicts() {
    let router = router().await;
    let email = format!("{}@example.com", nonce());

    let (status, user) = create_user(&router, &email).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(user.get("password_hash").is_none());

    let (status, body) = create_user(&router, &email.to_uppercase()).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "User with this email already exists");
}

#[tokio::test]
#[ignore = "requires a running Postgres (DATABASE_URL)"]
async fn deactivated_users_disappear_and_lose_access() {
    let router = router().await;
    let email = format!("{}@example.com", nonce());
    let (_, user) = create_user(&router, &email).await;
    let user_id = user["id"].as_i64().unwrap();

    let (status, login) = send(
        router.clone(),
        Method::POST,
        "/api/auth/login",
        Some(json!({ "email": email, "password": "Secr3t!pass" })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let token = login["token"].as_str().unwrap().to_string();

    let (status, body) = send(
        router.clone(),
        Method::DELETE,
        &format!("/api/users/{user_id}"),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "User deactivated successfully");

    let (status, _) = send(
        router.clone(),
        Method::GET,
        &format!("/api/users/{user_id}"),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(router.clone(), Method::GET, "/api/auth/me", None, Some(&token)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Account is deactivated");

    let (status, _) = send(
        router,
        Method::POST,
        "/api/auth/login",
        Some(json!({ "email": email, "password": "Secr3t!pass" })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires a running Postgres (DATABASE_URL)"]
async fn explicit_null_clears_nullable_columns() {
    let router = router().await;

    let mut body = meal_body(&nonce(), "2030-01-01T10:00:00Z", 10);
    body["image"] = json!("http://img");
    let meal_id = post_meal(&router, body).await["id"].as_i64().unwrap();

    let (status, kept) = send(
        router.clone(),
        Method::PUT,
        &format!("/api/meals/{meal_id}"),
        Some(json!({ "title": "U" })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(kept["image"], "http://img");

    let (status, cleared) = send(
        router.clone(),
        Method::PUT,
        &format!("/api/meals/{meal_id}"),
        Some(json!({ "image": null, "title": "U" })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cleared["image"], Value::Null);
    assert_eq!(cleared["title"], "U");

    let (status, reservation) = send(
        router.clone(),
        Method::POST,
        "/api/reservations",
        Some(json!({
            "number_of_guests": 1,
            "meal_id": meal_id,
            "contact_phonenumber": "4512345678",
            "contact_name": "Guest",
            "contact_email": "guest@example.com"
        })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, reservation) = send(
        router.clone(),
        Method::PUT,
        &format!("/api/reservations/{}", reservation["id"]),
        Some(json!({ "contact_email": null })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(reservation["contact_email"], Value::Null);
    assert_eq!(reservation["contact_name"], "Guest");

    let (_, user) = create_user(&router, &format!("{}@example.com", nonce())).await;
    let (status, user) = send(
        router,
        Method::PUT,
        &format!("/api/users/{}", user["id"]),
        Some(json!({ "phone_number": null, "profile_image": null })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user["phone_number"], Value::Null);
    assert_eq!(user["profile_image"], Value::Null);
    assert_eq!(user["first_name"], "Grace");
}
