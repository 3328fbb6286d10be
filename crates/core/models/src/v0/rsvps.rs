use iso8601_timestamp::Timestamp;

use super::Event;

#[cfg(feature = "validator")]
use validator::Validate;

/// Note recorded on the RSVP automatically created for an event's host
pub static HOST_RSVP_NOTE: &str = "Auto Owner RSVP";

auto_derived!(
    /// RSVP to a volunteer event
    pub struct Rsvp {
        /// Unique Id
        #[serde(rename = "_id")]
        pub id: String,
        /// Id of the event this RSVP is for
        pub event: String,
        /// Id of the responding user
        pub user: String,
        /// Number of people attending
        ///
        /// The host's own RSVP records zero.
        #[serde(skip_serializing_if = "crate::if_zero_u32", default)]
        pub attending: u32,
        /// Note to the event organizer
        #[serde(skip_serializing_if = "String::is_empty", default)]
        pub note: String,
        /// When this RSVP was recorded
        pub time_created: Timestamp,
    }

    /// RSVP joined with the participant's profile, shown to hosts
    pub struct RsvpEntry {
        #[serde(flatten)]
        pub rsvp: Rsvp,
        /// Participant display name, blank when missing
        pub participant_name: String,
        /// Participant photo, placeholder when missing
        pub participant_photo: String,
    }
);

auto_derived!(
    /// New RSVP payload
    #[cfg_attr(feature = "validator", derive(Validate))]
    pub struct DataCreateRsvp {
        /// Number of people attending
        #[cfg_attr(feature = "validator", validate(range(min = 1)))]
        pub attending: u32,
        /// Optional note to the event organizer
        #[serde(skip_serializing_if = "Option::is_none")]
        #[cfg_attr(feature = "validator", validate(length(min = 0, max = 1000)))]
        pub note: Option<String>,
    }

    /// Outcome of an RSVP interaction
    #[serde(tag = "status")]
    pub enum RsvpResponse {
        /// Form opened for the selected event
        FormOpen { event: Event },
        /// RSVP recorded against the event
        Confirmed { rsvp: Rsvp },
        /// RSVP delegated to the partner organization
        Redirect { url: String },
    }
);

impl Rsvp {
    /// Whether this RSVP marks its user as the event's host
    pub fn is_host(&self) -> bool {
        self.note == HOST_RSVP_NOTE
    }
}
