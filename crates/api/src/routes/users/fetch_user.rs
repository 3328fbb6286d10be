use litterless_database::Database;
use litterless_models::v0;
use litterless_result::Result;
use rocket::serde::json::Json;
use rocket::State;

/// # Fetch User
///
/// Retrieve a user's profile by their id.
#[get("/<target>")]
pub async fn fetch_user(db: &State<Database>, target: String) -> Result<Json<v0::User>> {
    let user = db.fetch_user(&target).await?;
    Ok(Json(user.into()))
}
