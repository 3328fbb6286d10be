use iso8601_timestamp::Timestamp;
use litterless_database::Database;
use litterless_models::v0;
use litterless_result::Result;
use rocket::serde::json::Json;
use rocket::State;

use crate::calendar::build_month;

/// # Fetch Calendar
///
/// Month grid of events with previous/next navigation references.
#[get("/calendar?<year>&<month>")]
pub async fn fetch_calendar(
    db: &State<Database>,
    year: i32,
    month: u8,
) -> Result<Json<v0::CalendarMonth>> {
    let events = db.fetch_all_events().await?;
    let today = Timestamp::now_utc().date();

    Ok(Json(build_month(&events, year, month, today)?))
}
