use litterless_config::config;
use litterless_database::{Database, User};
use litterless_models::v0;
use litterless_result::{create_error, Result};
use rocket::serde::json::Json;
use rocket::State;

use crate::flow::FlowStore;
use crate::util::partner;

/// # Open RSVP Form
///
/// Select an event to RSVP to. Events hosted by the partner
/// organization are delegated to its remote function and answered
/// with a redirect, whether or not the visitor is logged in; all
/// other events require a session and open the local form.
#[post("/<target>/rsvp/open")]
pub async fn open_rsvp_form(
    db: &State<Database>,
    flows: &State<FlowStore>,
    user: Option<User>,
    target: String,
) -> Result<Json<v0::RsvpResponse>> {
    let config = config().await;

    let event = db.fetch_event(&target).await?;

    if let Ok(owner) = db.fetch_user(&event.owner).await {
        if !config.api.partner.email.is_empty() && owner.email == config.api.partner.email {
            let url =
                partner::create_rsvp(&event.id, user.as_ref().map(|user| user.id.as_str())).await?;

            return Ok(Json(v0::RsvpResponse::Redirect { url }));
        }
    }

    let user = user.ok_or_else(|| create_error!(NotAuthenticated))?;

    if event.owner == user.id {
        return Err(create_error!(CannotRsvpToOwnEvent));
    }

    if db.fetch_rsvp_for_user(&event.id, &user.id).await.is_ok() {
        return Err(create_error!(AlreadyResponded));
    }

    flows
        .update(&user.id, |flow| flow.open(event.id.clone()))
        .await?;

    Ok(Json(v0::RsvpResponse::FormOpen {
        event: event.into(),
    }))
}
