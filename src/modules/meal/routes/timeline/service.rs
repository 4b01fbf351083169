use super::types::{request, response};
use crate::{modules::meal::repository, types::Context};
use chrono::Utc;
use std::sync::Arc;

fn to_filters(slice: &request::Slice) -> repository::Filters {
    match slice {
        request::Slice::Future => repository::Filters {
            date_after: Some(Utc::now()),
            ..Default::default()
        },
        request::Slice::Past => repository::Filters {
            date_before: Some(Utc::now()),
            ..Default::default()
        },
        request::Slice::First => repository::Filters {
            limit: Some(1),
            ..Default::default()
        },
        request::Slice::Last => repository::Filters {
            limit: Some(1),
            sort_direction: repository::SortDirection::Desc,
            ..Default::default()
        },
    }
}

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let filters = to_filters(&payload.slice);

    match payload.slice {
        request::Slice::Future | request::Slice::Past => {
            repository::find_many(&ctx.db_conn.pool, &filters)
                .await
                .map_err(|_| response::Error::FailedToFetchMeals)
                .map(response::Success::Meals)
        }
        request::Slice::First | request::Slice::Last => {
            repository::find_one(&ctx.db_conn.pool, &filters)
                .await
                .map_err(|_| response::Error::FailedToFetchMeals)?
                .ok_or(response::Error::NoMeals)
                .map(response::Success::Meal)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_meal_is_the_highest_id() {
        let sql = repository::compose_find_many(&to_filters(&request::Slice::Last))
            .sql()
            .to_string();

        assert!(sql.contains("ORDER BY meals.id DESC LIMIT $1"));
    }

    #[test]
    fn future_meals_are_strictly_after_now() {
        let sql = repository::compose_find_many(&to_filters(&request::Slice::Future))
            .sql()
            .to_string();

        assert!(sql.contains(r#"meals."when" > $1"#));
        assert!(sql.ends_with("ORDER BY meals.id ASC"));
    }
}
