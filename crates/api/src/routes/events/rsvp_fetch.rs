use litterless_database::{Database, User};
use litterless_models::v0;
use litterless_result::Result;
use rocket::serde::json::Json;
use rocket::State;

/// # Fetch Own RSVP
///
/// Retrieve the user's RSVP for an event, if any. The host sentinel
/// note distinguishes hosting from attending.
#[get("/<target>/rsvp")]
pub async fn fetch_rsvp(db: &State<Database>, user: User, target: String) -> Result<Json<v0::Rsvp>> {
    let rsvp = db.fetch_rsvp_for_user(&target, &user.id).await?;
    Ok(Json(rsvp.into()))
}
