use crate::utils::database::{self, Violation};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::{PgExecutor, Postgres, QueryBuilder};

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct Reservation {
    pub id: i64,
    pub number_of_guests: i32,
    pub meal_id: i64,
    pub created_date: NaiveDate,
    pub contact_phonenumber: String,
    pub contact_name: String,
    pub contact_email: Option<String>,
    pub user_id: Option<i64>,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
    /// The meal or user a reservation points at does not exist.
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
    let mut query = QueryBuilder::<Postgres>::new("SELECT * FROM reservations WHERE TRUE");

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
) -> Result<Vec<Reservation>, Error> {
    compose_find_many(filters)
        .build_query_as::<Reservation>()
        .fetch_all(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to fetch many reservations: {}",
                err
            );
            Error::UnexpectedError
        })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: i64,
) -> Result<Option<Reservation>, Error> {
    sqlx::query_as::<_, Reservation>("SELECT * FROM reservations WHERE id = $1")
        .bind(id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while fetching reservation with id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
}

pub struct CreateReservationPayload {
    pub number_of_guests: i32,
    pub meal_id: i64,
    pub created_date: Option<NaiveDate>,
    pub contact_phonenumber: String,
    pub contact_name: String,
    pub contact_email: Option<String>,
    pub user_id: Option<i64>,
}

pub async fn create<'e, E: PgExecutor<'e>>(
    e: E,
    payload: CreateReservationPayload,
) -> Result<Reservation, Error> {
    sqlx::query_as::<_, Reservation>(
        "
        INSERT INTO reservations (
            number_of_guests,
            meal_id,
            created_date,
            contact_phonenumber,
            contact_name,
            contact_email,
            user_id
        )
        VALUES ($1, $2, COALESCE($3, CURRENT_DATE), $4, $5, $6, $7)
        RETURNING *
        ",
    )
    .bind(payload.number_of_guests)
    .bind(payload.meal_id)
    .bind(payload.created_date)
    .bind(payload.contact_phonenumber)
    .bind(payload.contact_name)
    .bind(payload.contact_email)
    .bind(payload.user_id)
    .fetch_one(e)
    .await
    .map_err(|err| classify(err, "create a reservation"))
}

pub struct UpdateReservationPayload {
    pub number_of_guests: Option<i32>,
    pub meal_id: Option<i64>,
    pub created_date: Option<NaiveDate>,
    pub contact_phonenumber: Option<String>,
    pub contact_name: Option<String>,
    /// `Some(None)` clears the contact email.
    pub contact_email: Option<Option<String>>,
    pub user_id: Option<i64>,
}

pub async fn update_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: i64,
    payload: UpdateReservationPayload,
) -> Result<Option<Reservation>, Error> {
    let contact_email_provided = payload.contact_email.is_some();

    sqlx::query_as::<_, Reservation>(
        "
        UPDATE reservations SET
            number_of_guests = COALESCE($1, number_of_guests),
            meal_id = COALESCE($2, meal_id),
            created_date = COALESCE($3, created_date),
            contact_phonenumber = COALESCE($4, contact_phonenumber),
            contact_name = COALESCE($5, contact_name),
            contact_email = CASE WHEN $7 THEN $6 ELSE contact_email END,
            user_id = COALESCE($8, user_id)
        WHERE
            id = $9
        RETURNING *
        ",
    )
    .bind(payload.number_of_guests)
    .bind(payload.meal_id)
    .bind(payload.created_date)
    .bind(payload.contact_phonenumber)
    .bind(payload.contact_name)
    .bind(payload.contact_email.flatten())
    .bind(contact_email_provided)
    .bind(payload.user_id)
    .bind(id)
    .fetch_optional(e)
    .await
    .map_err(|err| classify(err, &format!("update a reservation by id {}", id)))
}

pub async fn delete_by_id<'e, E: PgExecutor<'e>>(e: E, id: i64) -> Result<bool, Error> {
    sqlx::query("DELETE FROM reservations WHERE id = $1")
        .bind(id)
        .execute(e)
        .await
        .map(|result| result.rows_affected() > 0)
        .map_err(|err| {
            tracing::error!("Error occurred while deleting reservation {}: {}", id, err);
            Error::UnexpectedError
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_by_meal_only() {
        assert_eq!(
            compose_find_many(&Filters {
                meal_id: Some(1),
                ..Default::default()
            })
            .sql(),
            "SELECT * FROM reservations WHERE TRUE AND meal_id = $1 ORDER BY id ASC"
        );
    }
}
