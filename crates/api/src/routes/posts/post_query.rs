use litterless_config::config;
use litterless_database::Database;
use litterless_models::v0;
use litterless_result::Result;
use rocket::serde::json::Json;
use rocket::State;

use crate::feed::with_author;

/// # Query Posts
///
/// Fetch one page of posts, newest first. Pages are 1-indexed.
#[get("/?<page>")]
pub async fn query_posts(
    db: &State<Database>,
    page: Option<i64>,
) -> Result<Json<Vec<v0::FeedPost>>> {
    let config = config().await;

    let posts = db
        .fetch_posts_page(page.unwrap_or(1), config.features.limits.default.page_size)
        .await?;

    let mut joined = vec![];
    for post in posts {
        joined.push(with_author(db, post).await);
    }

    Ok(Json(joined))
}
