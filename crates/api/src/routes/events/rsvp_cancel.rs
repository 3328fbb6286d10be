use litterless_database::{Database, User};
use litterless_result::Result;
use rocket::State;

/// # Cancel RSVP
///
/// Delete the user's RSVP for an event and issue the compensating
/// update removing it from the event's RSVP list and attendee total.
#[delete("/<target>/rsvp")]
pub async fn cancel_rsvp(db: &State<Database>, user: User, target: String) -> Result<()> {
    let rsvp = db.fetch_rsvp_for_user(&target, &user.id).await?;
    rsvp.cancel(db).await
}
