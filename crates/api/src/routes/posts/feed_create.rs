use litterless_config::config;
use rocket::serde::json::Json;
use rocket::State;
use serde::Serialize;

use crate::feed::FeedStore;

/// # Opened Feed
#[derive(Serialize, Debug)]
pub struct FeedCreated {
    /// Id used to advance and read this feed
    #[serde(rename = "_id")]
    pub id: String,
}

/// # Open Feed
///
/// Start a new growing feed for this client.
#[post("/feed")]
pub async fn open_feed(feeds: &State<FeedStore>) -> Json<FeedCreated> {
    let config = config().await;

    Json(FeedCreated {
        id: feeds.create(config.features.limits.default.page_size).await,
    })
}
