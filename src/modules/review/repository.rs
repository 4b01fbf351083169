use crate::utils::database::{self, Violation};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::{PgExecutor, Postgres, QueryBuilder};

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct Review {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub meal_id: i64,
    pub user_id: Option<i64>,
    pub stars: i32,
    pub created_date: NaiveDate,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
    /// The meal or user a review points at does not exist.
    ReferenceNotFound,
    /// A CHECK constraint rejected the row.
    ConstraintViolated,
}

fn classify(err: sqlx::Error, context: &str) -> Error {
    match database::violation(&err) {
        Some(Violation::ForeignKey) => Error::ReferenceNotFound,
        Some(Violation::Check) => Error::ConstraintViolated,
        _ => {
            tracing::error!("Error occurred while trying to {}: {}", context, err);
            Error::UnexpectedError
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Filters {
    pub meal_id: Option<i64>,
    pub user_id: Option<i64>,
}

fn compose_find_many(filters: &Filters) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::<Postgres>::new("SELECT * FROM reviews WHERE TRUE");

    if let Some(meal_id) = filters.meal_id {
        query.push(" AND meal_id = ").push_bind(meal_id);
    }
    if let Some(user_id) = filters.user_id {
        query.push(" AND user_id = ").push_bind(user_id);
    }
    query.push(" ORDER BY id ASC");

    query
}

pub async fn find_many<'e, E: PgExecutor<'e>>(
    e: E,
    filters: &Filters,
) -> Result<Vec<Review>, Error> {
    compose_find_many(filters)
        .build_query_as::<Review>()
        .fetch_all(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to fetch many reviews: {}", err);
            Error::UnexpectedError
        })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: i64) -> Result<Option<Review>, Error> {
    sqlx::query_as::<_, Review>("SELECT * FROM reviews WHERE id = $1")
        .bind(id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching review with id {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub struct CreateReviewPayload {
    pub title: String,
    pub description: String,
    pub meal_id: i64,
    pub user_id: Option<i64>,
    pub stars: i32,
    pub created_date: Option<NaiveDate>,
}

pub async fn create<'e, E: PgExecutor<'e>>(
    e: E,
    payload: CreateReviewPayload,
) -> Result<Review, Error> {
    sqlx::query_as::<_, Review>(
        "
        INSERT INTO reviews (title, description, meal_id, user_id, stars, created_date)
        VALUES ($1, $2, $3, $4, $5, COALESCE($6, CURRENT_DATE))
        RETURNING *
        ",
    )
    .bind(payload.title)
    .bind(payload.description)
    .bind(payload.meal_id)
    .bind(payload.user_id)
    .bind(payload.stars)
    .bind(payload.created_date)
    .fetch_one(e)
    .await
    .map_err(|err| classify(err, "create a review"))
}

pub struct UpdateReviewPayload {
    pub title: Option<String>,
    pub description: Option<String>,
    pub meal_id: Option<i64>,
    pub user_id: Option<i64>,
    pub stars: Option<i32>,
    pub created_date: Option<NaiveDate>,
}

pub async fn update_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: i64,
    payload: UpdateReviewPayload,
) -> Result<Option<Review>, Error> {
    sqlx::query_as::<_, Review>(
        "
        UPDATE reviews SET
            title = COALESCE($1, title),
            description = COALESCE($2, description),
            meal_id = COALESCE($3, meal_id),
            user_id = COALESCE($4, user_id),
            stars = COALESCE($5, stars),
            created_date = COALESCE($6, created_date)
        WHERE
            id = $7
        RETURNING *
        ",
    )
    .bind(payload.title)
    .bind(payload.description)
    .bind(payload.meal_id)
    .bind(payload.user_id)
    .bind(payload.stars)
    .bind(payload.created_date)
    .bind(id)
    .fetch_optional(e)
    .await
    .map_err(|err| classify(err, &format!("update a review by id {}", id)))
}

pub async fn delete_by_id<'e, E: PgExecutor<'e>>(e: E, id: i64) -> Result<bool, Error> {
    sqlx::query("DELETE FROM reviews WHERE id = $1")
        .bind(id)
        .execute(e)
        .await
        .map(|result| result.rows_affected() > 0)
        .map_err(|err| {
            tracing::error!("Error occurred while deleting review {}: {}", id, err);
            Error::UnexpectedError
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_are_optional_and_bound() {
        assert_eq!(
            compose_find_many(&Filters::default()).sql(),
            "SELECT * FROM reviews WHERE TRUE ORDER BY id ASC"
        );
        assert_eq!(
            compose_find_many(&Filters {
                meal_id: Some(3),
                user_id: Some(7),
            })
            .sql(),
            "SELECT * FROM reviews WHERE TRUE AND meal_id = $1 AND user_id = $2 ORDER BY id ASC"
        );
    }
}
