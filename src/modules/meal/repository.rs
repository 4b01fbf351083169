use crate::utils::database::{self, Violation};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::BigDecimal;
use sqlx::{PgExecutor, Postgres, QueryBuilder};
use std::str::FromStr;

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct Meal {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub location: String,
    #[sqlx(rename = "when")]
    pub r#when: DateTime<Utc>,
    pub max_reservations: i32,
    pub price: BigDecimal,
    pub created_date: NaiveDate,
    pub image: Option<String>,
    pub created_by: Option<i64>,
}

/// A meal plus the figures derived from its reservations and reviews.
#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct MealWithStats {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub meal: Meal,
    pub current_reservations: i64,
    pub available_spots: i64,
    pub average_rating: f64,
    pub review_count: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Id,
    When,
    Price,
    MaxReservations,
    AverageRating,
}

impl SortKey {
    fn column(&self) -> &'static str {
        match self {
            Self::Id => "meals.id",
            Self::When => r#"meals."when""#,
            Self::Price => "meals.price",
            Self::MaxReservations => "meals.max_reservations",
            Self::AverageRating => "average_rating",
        }
    }
}

/// Only the client-sortable keys parse; `id` is the implicit tie-break.
impl FromStr for SortKey {
    type Err = ();

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "when" => Ok(Self::When),
            "price" => Ok(Self::Price),
            "max_reservations" => Ok(Self::MaxReservations),
            "average_rating" => Ok(Self::AverageRating),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    fn keyword(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl FromStr for SortDirection {
    type Err = ();

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Filters {
    pub id: Option<i64>,
    pub created_by: Option<i64>,
    pub max_price: Option<BigDecimal>,
    pub title: Option<String>,
    pub date_after: Option<DateTime<Utc>>,
    pub date_before: Option<DateTime<Utc>>,
    pub available_reservations: Option<bool>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub sort_key: Option<SortKey>,
    pub sort_direction: SortDirection,
}

const MEALS_WITH_STATS: &str = r#"
        SELECT
            meals.*,
            COALESCE(reservation_totals.total_guests, 0)::BIGINT AS current_reservations,
            (meals.max_reservations - COALESCE(reservation_totals.total_guests, 0))::BIGINT
                AS available_spots,
            COALESCE(review_totals.average_rating, 0)::FLOAT8 AS average_rating,
            COALESCE(review_totals.review_count, 0)::BIGINT AS review_count
        FROM
            meals
        LEFT JOIN (
            SELECT meal_id, SUM(number_of_guests) AS total_guests
            FROM reservations
            GROUP BY meal_id
        ) AS reservation_totals ON reservation_totals.meal_id = meals.id
        LEFT JOIN (
            SELECT meal_id, AVG(stars) AS average_rating, COUNT(id) AS review_count
            FROM reviews
            GROUP BY meal_id
        ) AS review_totals ON review_totals.meal_id = meals.id
        WHERE TRUE"#;

fn escape_like(raw: &str) -> String {
    raw.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// Builds the filtered, sorted and paginated meals SELECT.
pub fn compose_find_many(filters: &Filters) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::<Postgres>::new(MEALS_WITH_STATS);

    if let Some(id) = filters.id {
        query.push(" AND meals.id = ").push_bind(id);
    }
    if let Some(created_by) = filters.created_by {
        query.push(" AND meals.created_by = ").push_bind(created_by);
    }
    if let Some(max_price) = &filters.max_price {
        query.push(" AND meals.price <= ").push_bind(max_price.clone());
    }
    if let Some(title) = &filters.title {
        query
            .push(" AND meals.title ILIKE ")
            .push_bind(format!("%{}%", escape_like(title)));
    }
    if let Some(date_after) = filters.date_after {
        query.push(r#" AND meals."when" > "#).push_bind(date_after);
    }
    if let Some(date_before) = filters.date_before {
        query.push(r#" AND meals."when" < "#).push_bind(date_before);
    }
    match filters.available_reservations {
        Some(true) => {
            query.push(
                " AND meals.max_reservations > COALESCE(reservation_totals.total_guests, 0)",
            );
        }
        Some(false) => {
            query.push(
                " AND meals.max_reservations <= COALESCE(reservation_totals.total_guests, 0)",
            );
        }
        None => {}
    }

    let sort_key = filters.sort_key.unwrap_or(SortKey::Id);
    query
        .push(" ORDER BY ")
        .push(sort_key.column())
        .push(" ")
        .push(filters.sort_direction.keyword());
    if sort_key != SortKey::Id {
        query.push(", meals.id ASC");
    }

    if let Some(limit) = filters.limit {
        query.push(" LIMIT ").push_bind(limit);
    }
    if let Some(offset) = filters.offset {
        query.push(" OFFSET ").push_bind(offset);
    }

    query
}

pub struct CreateMealPayload {
    pub title: String,
    pub description: String,
    pub location: String,
    pub r#when: DateTime<Utc>,
    pub max_reservations: i32,
    pub price: BigDecimal,
    pub created_date: Option<NaiveDate>,
    pub image: Option<String>,
    pub created_by: Option<i64>,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
    CreatorNotFound,
    /// A CHECK constraint rejected the row.
    ConstraintViolated,
}

fn classify(err: sqlx::Error, context: &str) -> Error {
    match database::violation(&err) {
        Some(Violation::ForeignKey) => Error::CreatorNotFound,
        Some(Violation::Check) => Error::ConstraintViolated,
        _ => {
            tracing::error!("Error occurred while trying to {}: {}", context, err);
            Error::UnexpectedError
        }
    }
}

pub async fn create<'e, E: PgExecutor<'e>>(
    e: E,
    payload: CreateMealPayload,
) -> Result<Meal, Error> {
    sqlx::query_as::<_, Meal>(
        r#"
        INSERT INTO meals (
            title,
            description,
            location,
            "when",
            max_reservations,
            price,
            created_date,
            image,
            created_by
        )
        VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, CURRENT_DATE), $8, $9)
        RETURNING *
        "#,
    )
    .bind(payload.title)
    .bind(payload.description)
    .bind(payload.location)
    .bind(payload.r#when)
    .bind(payload.max_reservations)
    .bind(payload.price)
    .bind(payload.created_date)
    .bind(payload.image)
    .bind(payload.created_by)
    .fetch_one(e)
    .await
    .map_err(|err| classify(err, "create a meal"))
}

pub async fn find_many<'e, E: PgExecutor<'e>>(
    e: E,
    filters: &Filters,
) -> Result<Vec<MealWithStats>, Error> {
    let mut query = compose_find_many(filters);

    query
        .build_query_as::<MealWithStats>()
        .fetch_all(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to fetch many meals: {}", err);
            Error::UnexpectedError
        })
}

pub async fn find_one<'e, E: PgExecutor<'e>>(
    e: E,
    filters: &Filters,
) -> Result<Option<MealWithStats>, Error> {
    let mut query = compose_find_many(filters);

    query
        .build_query_as::<MealWithStats>()
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to fetch a meal: {}", err);
            Error::UnexpectedError
        })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: i64,
) -> Result<Option<MealWithStats>, Error> {
    find_one(
        e,
        &Filters {
            id: Some(id),
            ..Default::default()
        },
    )
    .await
}

pub async fn exists_by_id<'e, E: PgExecutor<'e>>(e: E, id: i64) -> Result<bool, Error> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM meals WHERE id = $1)")
        .bind(id)
        .fetch_one(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while checking meal {} exists: {}", id, err);
            Error::UnexpectedError
        })
}

pub struct UpdateMealPayload {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub r#when: Option<DateTime<Utc>>,
    pub max_reservations: Option<i32>,
    pub price: Option<BigDecimal>,
    pub created_date: Option<NaiveDate>,
    /// `Some(None)` clears the image.
    pub image: Option<Option<String>>,
    pub created_by: Option<i64>,
}

pub async fn update_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: i64,
    payload: UpdateMealPayload,
) -> Result<Option<Meal>, Error> {
    let image_provided = payload.image.is_some();

    sqlx::query_as::<_, Meal>(
        r#"
        UPDATE meals SET
            title = COALESCE($1, title),
            description = COALESCE($2, description),
            location = COALESCE($3, location),
            "when" = COALESCE($4, "when"),
            max_reservations = COALESCE($5, max_reservations),
            price = COALESCE($6, price),
            created_date = COALESCE($7, created_date),
            image = CASE WHEN $9 THEN $8 ELSE image END,
            created_by = COALESCE($10, created_by)
        WHERE
            id = $11
        RETURNING *
        "#,
    )
    .bind(payload.title)
    .bind(payload.description)
    .bind(payload.location)
    .bind(payload.r#when)
    .bind(payload.max_reservations)
    .bind(payload.price)
    .bind(payload.created_date)
    .bind(payload.image.flatten())
    .bind(image_provided)
    .bind(payload.created_by)
    .bind(id)
    .fetch_optional(e)
    .await
    .map_err(|err| classify(err, &format!("update a meal by id {}", id)))
}

/// Returns whether a row was deleted.
pub async fn delete_by_id<'e, E: PgExecutor<'e>>(e: E, id: i64) -> Result<bool, Error> {
    sqlx::query("DELETE FROM meals WHERE id = $1")
        .bind(id)
        .execute(e)
        .await
        .map(|result| result.rows_affected() > 0)
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to delete a meal by id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalized(query: &QueryBuilder<'static, Postgres>) -> String {
        query.sql().split_whitespace().collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn unfiltered_listing_orders_by_id() {
        let sql = normalized(&compose_find_many(&Filters::default()));

        assert!(sql.ends_with("WHERE TRUE ORDER BY meals.id ASC"));
        assert!(!sql.contains("LIMIT"));
    }

    #[test]
    fn joins_reservation_and_review_aggregates() {
        let sql = normalized(&compose_find_many(&Filters::default()));

        assert!(sql.contains("SUM(number_of_guests) AS total_guests FROM reservations GROUP BY meal_id"));
        assert!(sql.contains("AVG(stars) AS average_rating, COUNT(id) AS review_count FROM reviews GROUP BY meal_id"));
        assert!(sql.contains("COALESCE(review_totals.average_rating, 0)::FLOAT8 AS average_rating"));
    }

    #[test]
    fn binds_every_filter_in_order() {
        let filters = Filters {
            max_price: Some(BigDecimal::from(50)),
            title: Some("soup".to_string()),
            date_after: Some(Utc::now()),
            date_before: Some(Utc::now()),
            available_reservations: Some(true),
            limit: Some(10),
            offset: Some(20),
            ..Default::default()
        };

        let sql = normalized(&compose_find_many(&filters));

        assert!(sql.ends_with(
            r#"WHERE TRUE AND meals.price <= $1 AND meals.title ILIKE $2 AND meals."when" > $3 AND meals."when" < $4 AND meals.max_reservations > COALESCE(reservation_totals.total_guests, 0) ORDER BY meals.id ASC LIMIT $5 OFFSET $6"#
        ));
    }

    #[test]
    fn fully_booked_filter_inverts_the_capacity_check() {
        let filters = Filters {
            available_reservations: Some(false),
            ..Default::default()
        };

        assert!(normalized(&compose_find_many(&filters))
            .contains("meals.max_reservations <= COALESCE(reservation_totals.total_guests, 0)"));
    }

    #[test]
    fn sorted_listing_breaks_ties_by_id() {
        let filters = Filters {
            sort_key: Some(SortKey::AverageRating),
            sort_direction: SortDirection::Desc,
            ..Default::default()
        };

        assert!(normalized(&compose_find_many(&filters))
            .ends_with("ORDER BY average_rating DESC, meals.id ASC"));
    }

    #[test]
    fn sort_key_allow_list() {
        assert_eq!("when".parse::<SortKey>(), Ok(SortKey::When));
        assert_eq!("price".parse::<SortKey>(), Ok(SortKey::Price));
        assert_eq!(
            "max_reservations".parse::<SortKey>(),
            Ok(SortKey::MaxReservations)
        );
        assert_eq!("average_rating".parse::<SortKey>(), Ok(SortKey::AverageRating));
        assert!("title".parse::<SortKey>().is_err());
        assert!("id".parse::<SortKey>().is_err());
    }

    #[test]
    fn sort_direction_is_case_insensitive() {
        assert_eq!("DESC".parse::<SortDirection>(), Ok(SortDirection::Desc));
        assert_eq!("asc".parse::<SortDirection>(), Ok(SortDirection::Asc));
        assert!("up".parse::<SortDirection>().is_err());
    }

    #[test]
    fn title_wildcards_are_escaped() {
        assert_eq!(escape_like(r"50%_off\"), r"50\%\_off\\");
    }
}
