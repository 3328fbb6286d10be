use iso8601_timestamp::Timestamp;
use litterless_database::Database;
use litterless_models::v0;
use litterless_result::Result;
use rocket::serde::json::Json;
use rocket::State;

/// # Query Events
///
/// Fetch all events ascending by start time. Pass `upcoming` to only
/// include events taking place today or later.
#[get("/?<upcoming>")]
pub async fn query_events(
    db: &State<Database>,
    upcoming: Option<bool>,
) -> Result<Json<Vec<v0::EventEntry>>> {
    let today = Timestamp::now_utc().date();

    let mut entries = vec![];
    for event in db.fetch_all_events().await? {
        if upcoming.unwrap_or(false) && event.is_past(today) {
            continue;
        }

        entries.push(super::entry(db, event).await);
    }

    Ok(Json(entries))
}
