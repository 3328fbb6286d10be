use litterless_database::{Database, User};
use litterless_models::v0;
use litterless_result::{create_error, Result};
use rocket::serde::json::Json;
use rocket::State;

/// # List RSVPs
///
/// Fetch the RSVPs recorded against an event, joined with the
/// participants' profiles. Only the event's host may look.
#[get("/<target>/rsvps")]
pub async fn list_rsvps(
    db: &State<Database>,
    user: User,
    target: String,
) -> Result<Json<Vec<v0::RsvpEntry>>> {
    let event = db.fetch_event(&target).await?;

    if event.owner != user.id {
        return Err(create_error!(NotEventHost));
    }

    let mut entries = vec![];
    for rsvp in db.fetch_rsvps_for_event(&event.id).await? {
        let participant: Option<v0::User> =
            db.fetch_user(&rsvp.user).await.ok().map(Into::into);

        let (participant_name, participant_photo) = match &participant {
            Some(user) => (
                user.display_name_or_blank().to_string(),
                user.photo_url_or_default().to_string(),
            ),
            None => (" ".to_string(), v0::DEFAULT_PHOTO_URL.to_string()),
        };

        entries.push(v0::RsvpEntry {
            rsvp: rsvp.into(),
            participant_name,
            participant_photo,
        });
    }

    Ok(Json(entries))
}
