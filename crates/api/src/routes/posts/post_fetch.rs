use litterless_database::Database;
use litterless_models::v0;
use litterless_result::Result;
use rocket::serde::json::Json;
use rocket::State;

use crate::feed::with_author;

/// # Fetch Post
///
/// Retrieve a post by its id, joined with its author's profile.
#[get("/<target>")]
pub async fn fetch_post(db: &State<Database>, target: String) -> Result<Json<v0::FeedPost>> {
    let post = db.fetch_post(&target).await?;
    Ok(Json(with_author(db, post).await))
}
