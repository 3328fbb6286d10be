use iso8601_timestamp::Timestamp;
use litterless_config::config;
use litterless_models::v0;
use litterless_result::Result;
use serde_json::json;
use time::macros::format_description;
use ulid::Ulid;

use crate::events::client::EventV1;
use crate::{tasks, Database, Rsvp, User};

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
        /// Event Id
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
        /// Geocoded coordinate, resolved asynchronously after creation
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

    /// Partial representation of an event
    #[derive(Default)]
    pub struct PartialEvent {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub title: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub description: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub location: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub coordinate: Option<Coordinate>,
    }

    /// Optional fields on event object
    pub enum FieldsEvent {
        Coordinate,
    }
);

impl Event {
    /// Create a new event together with its host RSVP
    ///
    /// The event write, the host RSVP write, and the linking update are
    /// treated as one unit: when a later step fails, the earlier writes
    /// are rolled back so nothing partial remains.
    pub async fn create(db: &Database, owner: &User, data: v0::DataCreateEvent) -> Result<Event> {
        let date = Timestamp::parse(&format!("{}T00:00:00Z", data.date)).ok_or_else(|| {
            create_error!(FailedValidation {
                error: "invalid date".to_string()
            })
        })?;

        let start_time =
            Timestamp::parse(&format!("{}T{}:00Z", data.date, data.start_time)).ok_or_else(
                || {
                    create_error!(FailedValidation {
                        error: "invalid start time".to_string()
                    })
                },
            )?;

        let end_time = match &data.end_time {
            Some(end) => Some(
                Timestamp::parse(&format!("{}T{}:00Z", data.date, end)).ok_or_else(|| {
                    create_error!(FailedValidation {
                        error: "invalid end time".to_string()
                    })
                })?,
            ),
            None => None,
        };

        if let Some(end_time) = end_time {
            if end_time < start_time {
                return Err(create_error!(EndsBeforeStart));
            }
        }

        let mut event = Event {
            id: Ulid::new().to_string(),
            title: data.title,
            description: data.description,
            date,
            start_time,
            end_time,
            location: data.location,
            coordinate: None,
            owner: owner.id.clone(),
            rsvps: vec![],
            attendance: 0,
            time_created: Timestamp::now_utc(),
        };

        db.insert_event(&event).await?;

        let rsvp = Rsvp {
            id: Ulid::new().to_string(),
            event: event.id.clone(),
            user: owner.id.clone(),
            attending: 0,
            note: v0::HOST_RSVP_NOTE.to_string(),
            time_created: event.time_created,
        };

        if let Err(error) = db.insert_rsvp(&rsvp).await {
            if let Err(rollback) = db.delete_event(&event.id).await {
                error!(
                    "Failed to roll back event {} after host RSVP write failed: {rollback:?}",
                    event.id
                );
            }

            return Err(error);
        }

        if let Err(error) = db.add_rsvp_to_event(&event.id, &rsvp.id, 0).await {
            if let Err(rollback) = db.delete_rsvp(&rsvp.id).await {
                error!(
                    "Failed to roll back host RSVP {} after linking failed: {rollback:?}",
                    rsvp.id
                );
            }

            if let Err(rollback) = db.delete_event(&event.id).await {
                error!(
                    "Failed to roll back event {} after linking failed: {rollback:?}",
                    event.id
                );
            }

            return Err(error);
        }

        event.rsvps.push(rsvp.id);

        EventV1::EventCreate(event.clone().into())
            .p("events".to_string())
            .await;

        tasks::geocode::queue(event.id.clone(), event.location.clone()).await;

        let config = config().await;
        tasks::send_email::queue(
            owner.email.clone(),
            config.api.mail.templates.event_confirmation,
            json!({
                "eventDate": format_event_date(event.date),
                "eventStartTime": format_event_time(event.start_time),
                "eventEndTime": event
                    .end_time
                    .map(format_event_time)
                    .unwrap_or_else(|| "N/A".to_string()),
                "eventLocation": event.location,
            }),
        )
        .await;

        Ok(event)
    }

    /// Whether this event lies strictly before the given day
    pub fn is_past(&self, today: time::Date) -> bool {
        self.date.date() < today
    }
}

/// Format a day the way it appears in emails, e.g. `Monday, July 7, 2026`
pub fn format_event_date(timestamp: Timestamp) -> String {
    let format = format_description!("[weekday repr:long], [month repr:long] [day padding:none], [year]");

    timestamp
        .format(&format)
        .unwrap_or_else(|_| timestamp.to_string())
}

/// Format a time of day the way it appears in emails, e.g. `9:00 AM`
pub fn format_event_time(timestamp: Timestamp) -> String {
    let format = format_description!("[hour repr:12 padding:none]:[minute] [period]");

    timestamp
        .format(&format)
        .unwrap_or_else(|_| timestamp.to_string())
}

impl From<Event> for v0::Event {
    fn from(value: Event) -> Self {
        v0::Event {
            id: value.id,
            title: value.title,
            description: value.description,
            date: value.date,
            start_time: value.start_time,
            end_time: value.end_time,
            location: value.location,
            coordinate: value.coordinate.map(Into::into),
            owner: value.owner,
            rsvps: value.rsvps,
            attendance: value.attendance,
            time_created: value.time_created,
        }
    }
}

impl From<Coordinate> for v0::Coordinate {
    fn from(value: Coordinate) -> Self {
        v0::Coordinate {
            lat: value.lat,
            lng: value.lng,
        }
    }
}

#[cfg(test)]
mod tests {
    use litterless_models::v0;

    use crate::{Event, User};

    fn data(date: &str, start: &str, end: Option<&str>) -> v0::DataCreateEvent {
        v0::DataCreateEvent {
            date: date.to_string(),
            title: "Beach cleanup".to_string(),
            description: "Bring gloves!".to_string(),
            start_time: start.to_string(),
            end_time: end.map(|end| end.to_string()),
            location: "Willard Beach, South Portland, ME".to_string(),
        }
    }

    #[async_std::test]
    async fn create_records_host_rsvp() {
        database_test!(|db| async move {
            let owner = User::create(&db, "host@example.com".to_string(), "Host".to_string())
                .await
                .unwrap();

            let event = Event::create(&db, &owner, data("2030-06-01", "09:00", Some("11:30")))
                .await
                .unwrap();

            let fetched_event = db.fetch_event(&event.id).await.unwrap();
            assert_eq!(event, fetched_event);
            assert_eq!(fetched_event.attendance, 0);
            assert_eq!(fetched_event.rsvps.len(), 1);

            // Exactly one RSVP exists and it marks the creator as host.
            let rsvps = db.fetch_rsvps_for_event(&event.id).await.unwrap();
            assert_eq!(rsvps.len(), 1);
            assert!(rsvps[0].is_host());
            assert_eq!(rsvps[0].user, owner.id);
            assert_eq!(rsvps[0].attending, 0);
            assert_eq!(fetched_event.rsvps[0], rsvps[0].id);
        });
    }

    #[async_std::test]
    async fn reject_end_before_start() {
        database_test!(|db| async move {
            let owner = User::create(&db, "host@example.com".to_string(), None)
                .await
                .unwrap();

            assert!(
                Event::create(&db, &owner, data("2030-06-01", "09:00", Some("08:00")))
                    .await
                    .is_err()
            );

            // Nothing partial may remain after a rejected creation.
            assert!(db.fetch_all_events().await.unwrap().is_empty());
            assert!(db.fetch_all_rsvps().await.unwrap().is_empty());
        });
    }

    #[async_std::test]
    async fn reject_malformed_date() {
        database_test!(|db| async move {
            let owner = User::create(&db, "host@example.com".to_string(), None)
                .await
                .unwrap();

            assert!(Event::create(&db, &owner, data("junk", "09:00", None))
                .await
                .is_err());
        });
    }

    #[async_std::test]
    async fn list_ascending_by_start() {
        database_test!(|db| async move {
            let owner = User::create(&db, "host@example.com".to_string(), None)
                .await
                .unwrap();

            let later = Event::create(&db, &owner, data("2030-06-02", "10:00", None))
                .await
                .unwrap();
            let earlier = Event::create(&db, &owner, data("2030-06-01", "09:00", None))
                .await
                .unwrap();

            let events = db.fetch_all_events().await.unwrap();
            assert_eq!(events.len(), 2);
            assert_eq!(events[0].id, earlier.id);
            assert_eq!(events[1].id, later.id);
        });
    }
}
