use litterless_database::User;
use litterless_models::v0;
use litterless_result::Result;
use rocket::serde::json::Json;

/// # Fetch Self
///
/// Retrieve the profile belonging to the current session.
#[get("/@me")]
pub async fn fetch_self(user: User) -> Result<Json<v0::User>> {
    Ok(Json(user.into()))
}
