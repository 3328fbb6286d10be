use rocket::Route;

use litterless_config::config;
use litterless_database::{Database, Event};
use litterless_models::v0;

mod calendar_month;
mod event_create;
mod event_fetch;
mod event_query;
mod rsvp_ack;
mod rsvp_cancel;
mod rsvp_close;
mod rsvp_create;
mod rsvp_fetch;
mod rsvp_list;
mod rsvp_open;

pub fn routes() -> Vec<Route> {
    routes![
        event_create::create_event,
        event_fetch::fetch_event,
        event_query::query_events,
        calendar_month::fetch_calendar,
        rsvp_open::open_rsvp_form,
        rsvp_create::create_rsvp,
        rsvp_ack::acknowledge_rsvp,
        rsvp_close::close_rsvp_form,
        rsvp_cancel::cancel_rsvp,
        rsvp_fetch::fetch_rsvp,
        rsvp_list::list_rsvps,
    ]
}

/// Join an event with its host's profile for listings
///
/// A missing host profile falls back to a blank name and the
/// placeholder photo rather than failing the listing.
pub async fn entry(db: &Database, event: Event) -> v0::EventEntry {
    let config = config().await;

    let host: Option<v0::User> = db.fetch_user(&event.owner).await.ok().map(Into::into);

    let (host_name, host_photo, partner) = match &host {
        Some(user) => (
            user.display_name_or_blank().to_string(),
            user.photo_url_or_default().to_string(),
            !config.api.partner.email.is_empty() && user.email == config.api.partner.email,
        ),
        None => (" ".to_string(), v0::DEFAULT_PHOTO_URL.to_string(), false),
    };

    v0::EventEntry {
        event: event.into(),
        host_name,
        host_photo,
        partner,
    }
}
