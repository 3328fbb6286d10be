use litterless_database::User;
use litterless_result::{create_error, Result};
use rocket::State;

use crate::flow::FlowStore;

/// # Close RSVP Form
///
/// Discard the open form without submitting.
#[post("/<target>/rsvp/close")]
pub async fn close_rsvp_form(
    flows: &State<FlowStore>,
    user: User,
    target: String,
) -> Result<()> {
    flows
        .update(&user.id, |flow| {
            if flow.event() != Some(target.as_str()) {
                return Err(create_error!(InvalidOperation));
            }

            flow.cancel()
        })
        .await
}
