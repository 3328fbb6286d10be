use litterless_database::Database;
use litterless_models::v0;
use litterless_result::Result;
use rocket::serde::json::Json;
use rocket::State;

/// # Fetch Event
///
/// Retrieve an event by its id, joined with its host's profile.
#[get("/<target>")]
pub async fn fetch_event(db: &State<Database>, target: String) -> Result<Json<v0::EventEntry>> {
    let event = db.fetch_event(&target).await?;
    Ok(Json(super::entry(db, event).await))
}
