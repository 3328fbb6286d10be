use std::time::Duration;

use once_cell::sync::Lazy;
use serde_json::json;

use litterless_config::config;
use litterless_result::{create_error, Result};

static CLIENT: Lazy<reqwest::Client> = Lazy::new(|| {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .connect_timeout(Duration::from_secs(5))
        .build()
        .expect("reqwest Client")
});

/// Delegate an RSVP to the partner organization's remote function
///
/// Works for anonymous visitors too; the logged-in user id is passed
/// along when present. The response body is opaque: it is logged and
/// the caller is handed the fixed confirmation URL to redirect to.
pub async fn create_rsvp(event_id: &str, logged_in_user_id: Option<&str>) -> Result<String> {
    let config = config().await;

    if config.api.partner.function_endpoint.is_empty() {
        return Err(create_error!(PartnerUnavailable));
    }

    match CLIENT
        .post(&config.api.partner.function_endpoint)
        .json(&json!({
            "eventId": event_id,
            "loggedInUserId": logged_in_user_id,
        }))
        .send()
        .await
    {
        Ok(response) => {
            info!(
                "Partner RSVP for event {event_id} returned {}.",
                response.status()
            );

            Ok(config.api.partner.redirect_url)
        }
        Err(err) => {
            error!("Partner RSVP call for event {event_id} failed: {err:?}");
            Err(create_error!(PartnerUnavailable))
        }
    }
}
