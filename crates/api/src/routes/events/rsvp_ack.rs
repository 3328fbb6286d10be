use litterless_database::User;
use litterless_result::{create_error, Result};
use rocket::State;

use crate::flow::FlowStore;

/// # Acknowledge RSVP
///
/// Dismiss the thank-you message shown after a successful RSVP.
#[post("/<target>/rsvp/ack")]
pub async fn acknowledge_rsvp(
    flows: &State<FlowStore>,
    user: User,
    target: String,
) -> Result<()> {
    flows
        .update(&user.id, |flow| {
            if flow.event() != Some(target.as_str()) {
                return Err(create_error!(InvalidOperation));
            }

            flow.acknowledge()
        })
        .await
}
