use litterless_models::v0;
use litterless_result::Result;
use rocket::serde::json::Json;
use rocket::State;

use crate::feed::FeedStore;

/// # Fetch Feed
///
/// Everything the feed has loaded so far, in insertion order.
#[get("/feed/<target>")]
pub async fn fetch_feed(feeds: &State<FeedStore>, target: String) -> Result<Json<v0::FeedPage>> {
    Ok(Json(feeds.snapshot(&target).await?))
}
