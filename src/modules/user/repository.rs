use crate::utils::database::{self, Violation};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;

type Result<T> = std::result::Result<T, Error>;

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: Option<String>,
    pub profile_image: Option<String>,
    pub email_verified: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct UserReservation {
    pub id: i64,
    pub number_of_guests: i32,
    pub meal_id: i64,
    pub created_date: NaiveDate,
    pub contact_phonenumber: String,
    pub contact_name: String,
    pub contact_email: Option<String>,
    pub user_id: Option<i64>,
    pub meal_title: String,
    pub meal_image: Option<String>,
    pub meal_location: String,
    pub meal_when: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct UserReview {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub meal_id: i64,
    pub user_id: Option<i64>,
    pub stars: i32,
    pub created_date: NaiveDate,
    pub meal_title: String,
    pub meal_image: Option<String>,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
    EmailAlreadyInUse,
}

fn classify(err: sqlx::Error, context: &str) -> Error {
    match database::violation(&err) {
        Some(Violation::Unique) => Error::EmailAlreadyInUse,
        _ => {
            tracing::error!("Error occurred while trying to {}: {}", context, err);
            Error::UnexpectedError
        }
    }
}

pub struct CreateUserPayload {
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: Option<String>,
    pub profile_image: Option<String>,
    pub email_verified: bool,
    pub is_active: bool,
}

pub async fn create<'e, E>(e: E, payload: CreateUserPayload) -> Result<User>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, User>(
        "
        INSERT INTO users (
            email,
            password_hash,
            first_name,
            last_name,
            phone_number,
            profile_image,
            email_verified,
            is_active
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING *
        ",
    )
    .bind(payload.email.to_lowercase())
    .bind(payload.password_hash)
    .bind(payload.first_name)
    .bind(payload.last_name)
    .bind(payload.phone_number)
    .bind(payload.profile_image)
    .bind(payload.email_verified)
    .bind(payload.is_active)
    .fetch_one(e)
    .await
    .map_err(|err| classify(err, "create a user account"))
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: i64) -> Result<Option<User>> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching user with id {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub async fn find_by_email<'e, E: PgExecutor<'e>>(e: E, email: String) -> Result<Option<User>> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
        .bind(email.to_lowercase())
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred in find_by_email: {}", err);
            Error::UnexpectedError
        })
}

pub async fn find_many_active<'e, E: PgExecutor<'e>>(e: E) -> Result<Vec<User>> {
    sqlx::query_as::<_, User>(
        "SELECT * FROM users WHERE is_active = TRUE ORDER BY created_at DESC, id DESC",
    )
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while fetching active users: {}", err);
        Error::UnexpectedError
    })
}

/// `Some(None)` clears a nullable column.
pub struct UpdateUserPayload {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<Option<String>>,
    pub profile_image: Option<Option<String>>,
    pub email_verified: Option<bool>,
    pub is_active: Option<bool>,
}

pub async fn update_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: i64,
    payload: UpdateUserPayload,
) -> Result<Option<User>> {
    let phone_number_provided = payload.phone_number.is_some();
    let profile_image_provided = payload.profile_image.is_some();

    sqlx::query_as::<_, User>(
        "
        UPDATE users SET
            email = COALESCE($1, email),
            first_name = COALESCE($2, first_name),
            last_name = COALESCE($3, last_name),
            phone_number = CASE WHEN $5 THEN $4 ELSE phone_number END,
            profile_image = CASE WHEN $7 THEN $6 ELSE profile_image END,
            email_verified = COALESCE($8, email_verified),
            is_active = COALESCE($9, is_active),
            updated_at = NOW()
        WHERE
            id = $10
        RETURNING *
        ",
    )
    .bind(payload.email.map(|email| email.to_lowercase()))
    .bind(payload.first_name)
    .bind(payload.last_name)
    .bind(payload.phone_number.flatten())
    .bind(phone_number_provided)
    .bind(payload.profile_image.flatten())
    .bind(profile_image_provided)
    .bind(payload.email_verified)
    .bind(payload.is_active)
    .bind(id)
    .fetch_optional(e)
    .await
    .map_err(|err| classify(err, &format!("update a user by id {}", id)))
}

/// Returns whether a row was stamped.
pub async fn touch_last_login<'e, E: PgExecutor<'e>>(e: E, id: i64) -> Result<bool> {
    sqlx::query("UPDATE users SET last_login = NOW(), updated_at = NOW() WHERE id = $1")
        .bind(id)
        .execute(e)
        .await
        .map(|result| result.rows_affected() > 0)
        .map_err(|err| {
            tracing::error!("Error occurred while stamping login for user {}: {}", id, err);
            Error::UnexpectedError
        })
}

/// Soft delete. Returns whether a row was deactivated.
pub async fn deactivate_by_id<'e, E: PgExecutor<'e>>(e: E, id: i64) -> Result<bool> {
    sqlx::query("UPDATE users SET is_active = FALSE, updated_at = NOW() WHERE id = $1")
        .bind(id)
        .execute(e)
        .await
        .map(|result| result.rows_affected() > 0)
        .map_err(|err| {
            tracing::error!("Error occurred while deactivating user {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub async fn find_reservations_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: i64,
) -> Result<Vec<UserReservation>> {
    sqlx::query_as::<_, UserReservation>(
        r#"
        SELECT
            reservations.*,
            meals.title AS meal_title,
            meals.image AS meal_image,
            meals.location AS meal_location,
            meals."when" AS meal_when
        FROM
            reservations
        INNER JOIN meals ON reservations.meal_id = meals.id
        WHERE
            reservations.user_id = $1
        ORDER BY
            reservations.created_date DESC,
            reservations.id DESC
        "#,
    )
    .bind(id)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while fetching reservations of user {}: {}", id, err);
        Error::UnexpectedError
    })
}

pub async fn find_reviews_by_id<'e, E: PgExecutor<'e>>(e: E, id: i64) -> Result<Vec<UserReview>> {
    sqlx::query_as::<_, UserReview>(
        "
        SELECT
            reviews.*,
            meals.title AS meal_title,
            meals.image AS meal_image
        FROM
            reviews
        INNER JOIN meals ON reviews.meal_id = meals.id
        WHERE
            reviews.user_id = $1
        ORDER BY
            reviews.created_date DESC,
            reviews.id DESC
        ",
    )
    .bind(id)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while fetching reviews of user {}: {}", id, err);
        Error::UnexpectedError
    })
}
