use litterless_database::{Database, Event, User};
use litterless_models::v0;
use litterless_result::{create_error, Result};
use rocket::serde::json::Json;
use rocket::State;
use validator::Validate;

/// # Create Event
///
/// Create a volunteer event, recording the creator as its host. The
/// typed address is geocoded in the background; the event may briefly
/// exist without coordinates.
#[post("/", data = "<data>")]
pub async fn create_event(
    db: &State<Database>,
    user: User,
    data: Json<v0::DataCreateEvent>,
) -> Result<Json<v0::Event>> {
    let data = data.into_inner();
    data.validate().map_err(|error| {
        create_error!(FailedValidation {
            error: error.to_string()
        })
    })?;

    let event = Event::create(db, &user, data).await?;
    Ok(Json(event.into()))
}
