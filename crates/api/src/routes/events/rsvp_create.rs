use litterless_database::{Database, Rsvp, User};
use litterless_models::v0;
use litterless_result::{create_error, Result};
use rocket::serde::json::Json;
use rocket::State;
use validator::Validate;

use crate::flow::FlowStore;

/// # Submit RSVP
///
/// Submit the open form for an event. On success the RSVP is linked
/// to the event and the attendee and organizer notification emails
/// are queued; a failed submission discards the attempt.
#[post("/<target>/rsvp", data = "<data>")]
pub async fn create_rsvp(
    db: &State<Database>,
    flows: &State<FlowStore>,
    user: User,
    target: String,
    data: Json<v0::DataCreateRsvp>,
) -> Result<Json<v0::RsvpResponse>> {
    let data = data.into_inner();
    data.validate().map_err(|error| {
        create_error!(FailedValidation {
            error: error.to_string()
        })
    })?;

    // The form must have been opened for this exact event.
    let selected = flows.update(&user.id, |flow| flow.submit()).await?;
    if selected != target {
        flows
            .update(&user.id, |flow| {
                flow.fail();
                Ok(())
            })
            .await?;

        return Err(create_error!(InvalidOperation));
    }

    let event = match db.fetch_event(&target).await {
        Ok(event) => event,
        Err(error) => {
            flows
                .update(&user.id, |flow| {
                    flow.fail();
                    Ok(())
                })
                .await?;

            return Err(error);
        }
    };

    match Rsvp::create(
        db,
        &event,
        &user,
        data.attending,
        data.note.unwrap_or_default(),
    )
    .await
    {
        Ok(rsvp) => {
            flows.update(&user.id, |flow| flow.complete()).await?;

            Ok(Json(v0::RsvpResponse::Confirmed { rsvp: rsvp.into() }))
        }
        Err(error) => {
            flows
                .update(&user.id, |flow| {
                    flow.fail();
                    Ok(())
                })
                .await?;

            Err(error)
        }
    }
}
