use serde::{Deserialize, Serialize};

use litterless_models::v0;

/// Protocol Events
///
/// Published over redis whenever the underlying data changes so that
/// standing subscriptions receive updates without polling.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(tag = "type")]
pub enum EventV1 {
    /// New post
    PostCreate(v0::Post),

    /// New event
    EventCreate(v0::Event),

    /// Event gained a geocoded coordinate
    EventGeocoded {
        id: String,
        coordinate: v0::Coordinate,
    },

    /// Event attendee total changed
    AttendanceUpdate { id: String, attendance: u32 },

    /// New RSVP
    RsvpCreate(v0::Rsvp),

    /// RSVP cancelled
    RsvpDelete { id: String, event: String },
}

impl EventV1 {
    /// Publish helper wrapper
    pub async fn p(self, channel: String) {
        #[cfg(debug_assertions)]
        info!("Publishing event to {channel}: {self:?}");

        if let Err(err) = redis_kiss::publish(channel, self).await {
            warn!("Failed to publish event: {err:?}");
        }
    }
}
