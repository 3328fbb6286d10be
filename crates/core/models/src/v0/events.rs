use iso8601_timestamp::Timestamp;

#[cfg(feature = "validator")]
use validator::Validate;

auto_derived!(
    /// Geocoded coordinate
    pub struct Coordinate {
        /// Latitude
        pub lat: f64,
        /// Longitude
        pub lng: f64,
    }

    /// Volunteer cleanup event
    pub struct Event {
        /// Unique Id
        #[serde(rename = "_id")]
        pub id: String,
        /// Event title
        pub title: String,
        /// Free-text description
        pub description: String,
        /// Day the event takes place, at midnight
        pub date: Timestamp,
        /// When the event starts
        pub start_time: Timestamp,
        /// When the event ends, if known
        #[serde(skip_serializing_if = "Option::is_none")]
        pub end_time: Option<Timestamp>,
        /// Free-text address
        pub location: String,
        /// Geocoded coordinate, set asynchronously after creation
        #[serde(skip_serializing_if = "Option::is_none")]
        pub coordinate: Option<Coordinate>,
        /// Id of the hosting user
        pub owner: String,
        /// Ids of RSVPs recorded against this event
        #[serde(skip_serializing_if = "Vec::is_empty", default)]
        pub rsvps: Vec<String>,
        /// Total attendees across all RSVPs
        #[serde(skip_serializing_if = "crate::if_zero_u32", default)]
        pub attendance: u32,
        /// When this event was created
        pub time_created: Timestamp,
    }

    /// Event joined with host profile data for listings
    pub struct EventEntry {
        #[serde(flatten)]
        pub event: Event,
        /// Host display name, blank when missing
        pub host_name: String,
        /// Host photo, placeholder when missing
        pub host_photo: String,
        /// Whether RSVPs for this event are handled by the partner organization
        #[serde(skip_serializing_if = "crate::if_false", default)]
        pub partner: bool,
    }
);

auto_derived!(
    /// New event payload
    ///
    /// Date and times arrive in the form's wire format
    /// (`YYYY-MM-DD` and 24-hour `HH:MM`).
    #[cfg_attr(feature = "validator", derive(Validate))]
    pub struct DataCreateEvent {
        /// Day the event takes place
        #[cfg_attr(feature = "validator", validate(length(min = 10, max = 10)))]
        pub date: String,
        /// Event title
        #[cfg_attr(feature = "validator", validate(length(min = 1, max = 100)))]
        pub title: String,
        /// Free-text description
        #[cfg_attr(feature = "validator", validate(length(min = 1, max = 2000)))]
        pub description: String,
        /// Time of day the event starts
        #[cfg_attr(feature = "validator", validate(length(min = 5, max = 5)))]
        pub start_time: String,
        /// Time of day the event ends, optional
        #[serde(skip_serializing_if = "Option::is_none")]
        pub end_time: Option<String>,
        /// Free-text address
        #[cfg_attr(feature = "validator", validate(length(min = 1, max = 200)))]
        pub location: String,
    }
);
