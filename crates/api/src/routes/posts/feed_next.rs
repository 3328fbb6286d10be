use litterless_database::Database;
use litterless_models::v0;
use litterless_result::Result;
use rocket::serde::json::Json;
use rocket::State;

use crate::feed::FeedStore;

/// # Load Next Feed Page
///
/// Advance the feed by one page, appending posts not seen before.
/// Triggers arriving while a load is in flight, or after the feed has
/// run out of posts, load nothing.
#[post("/feed/<target>/next")]
pub async fn next_feed_page(
    db: &State<Database>,
    feeds: &State<FeedStore>,
    target: String,
) -> Result<Json<v0::FeedPage>> {
    Ok(Json(feeds.next(db, &target).await?))
}
