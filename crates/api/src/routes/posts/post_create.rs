use litterless_database::{Database, Post, User};
use litterless_models::v0;
use litterless_result::{create_error, Result};
use rocket::serde::json::Json;
use rocket::State;
use validator::Validate;

/// # Create Post
///
/// Share a new cleanup post to the feed.
#[post("/", data = "<data>")]
pub async fn create_post(
    db: &State<Database>,
    user: User,
    data: Json<v0::DataCreatePost>,
) -> Result<Json<v0::Post>> {
    let data = data.into_inner();
    data.validate().map_err(|error| {
        create_error!(FailedValidation {
            error: error.to_string()
        })
    })?;

    let post = Post::create(db, &user, data).await?;
    Ok(Json(post.into()))
}
