use iso8601_timestamp::Timestamp;
use litterless_config::config;
use litterless_models::v0;
use litterless_result::Result;
use serde_json::json;
use ulid::Ulid;

use crate::events::client::EventV1;
use crate::{format_event_date, format_event_time, tasks, Database, Event, User};

auto_derived!(
    /// RSVP to a volunteer event
    pub struct Rsvp {
        /// RSVP Id
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
);

impl Rsvp {
    /// Whether this RSVP marks its user as the event's host
    pub fn is_host(&self) -> bool {
        self.note == v0::HOST_RSVP_NOTE
    }

    /// Record a new RSVP against an event
    ///
    /// Inserts the RSVP, links it into the event (adding its attendees
    /// to the running total) and queues the attendee and organizer
    /// notification emails. Email failures never undo the RSVP.
    pub async fn create(
        db: &Database,
        event: &Event,
        user: &User,
        attending: u32,
        note: String,
    ) -> Result<Rsvp> {
        let config = config().await;

        if event.owner == user.id {
            return Err(create_error!(CannotRsvpToOwnEvent));
        }

        if event.is_past(Timestamp::now_utc().date()) {
            return Err(create_error!(EventHasPassed));
        }

        if db.fetch_rsvp_for_user(&event.id, &user.id).await.is_ok() {
            return Err(create_error!(AlreadyResponded));
        }

        if attending == 0 {
            return Err(create_error!(FailedValidation {
                error: "at least one attendee".to_string()
            }));
        }

        let max = config.features.limits.default.event_attendees;
        if attending > max {
            return Err(create_error!(TooManyAttendees { max }));
        }

        let rsvp = Rsvp {
            id: Ulid::new().to_string(),
            event: event.id.clone(),
            user: user.id.clone(),
            attending,
            note,
            time_created: Timestamp::now_utc(),
        };

        db.insert_rsvp(&rsvp).await?;

        if let Err(error) = db.add_rsvp_to_event(&event.id, &rsvp.id, attending).await {
            if let Err(rollback) = db.delete_rsvp(&rsvp.id).await {
                error!(
                    "Failed to roll back RSVP {} after linking failed: {rollback:?}",
                    rsvp.id
                );
            }

            return Err(error);
        }

        EventV1::RsvpCreate(rsvp.clone().into())
            .p("rsvp".to_string())
            .await;

        tasks::attendance::queue(event.id.clone()).await;

        let event_date = format_event_date(event.date);
        let event_start = format_event_time(event.start_time);
        let event_end = event
            .end_time
            .map(format_event_time)
            .unwrap_or_else(|| "N/A".to_string());

        tasks::send_email::queue(
            user.email.clone(),
            config.api.mail.templates.rsvp_participant,
            json!({
                "eventDate": event_date,
                "eventStartTime": event_start,
                "eventEndTime": event_end,
                "eventLocation": event.location,
            }),
        )
        .await;

        match db.fetch_user(&event.owner).await {
            Ok(owner) => {
                tasks::send_email::queue(
                    owner.email,
                    config.api.mail.templates.rsvp_organizer,
                    json!({
                        "participantName": user
                            .display_name
                            .clone()
                            .unwrap_or_else(|| user.email.clone()),
                        "participantEmail": user.email,
                        "eventDate": event_date,
                        "eventStartTime": event_start,
                        "eventEndTime": event_end,
                        "eventLocation": event.location,
                        "numberOfAttendees": rsvp.attending,
                        "participantNote": rsvp.note,
                    }),
                )
                .await;
            }
            Err(error) => warn!(
                "No organizer profile for event {}, skipping notification: {error:?}",
                event.id
            ),
        }

        Ok(rsvp)
    }

    /// Cancel this RSVP
    ///
    /// Deletes the RSVP and issues the compensating event update,
    /// removing the link and subtracting its attendees from the total.
    pub async fn cancel(self, db: &Database) -> Result<()> {
        if self.is_host() {
            return Err(create_error!(CannotCancelHostRsvp));
        }

        db.delete_rsvp(&self.id).await?;
        db.remove_rsvp_from_event(&self.event, &self.id, self.attending)
            .await?;

        EventV1::RsvpDelete {
            id: self.id,
            event: self.event.clone(),
        }
        .p("rsvp".to_string())
        .await;

        tasks::attendance::queue(self.event).await;

        Ok(())
    }
}

impl From<Rsvp> for v0::Rsvp {
    fn from(value: Rsvp) -> Self {
        v0::Rsvp {
            id: value.id,
            event: value.event,
            user: value.user,
            attending: value.attending,
            note: value.note,
            time_created: value.time_created,
        }
    }
}

#[cfg(test)]
mod tests {
    use litterless_models::v0;

    use crate::{Event, Rsvp, User};

    async fn fixture(db: &crate::Database) -> (User, Event) {
        let owner = User::create(db, "host@example.com".to_string(), "Host".to_string())
            .await
            .unwrap();

        let event = Event::create(
            db,
            &owner,
            v0::DataCreateEvent {
                date: "2030-06-01".to_string(),
                title: "Beach cleanup".to_string(),
                description: "Bring gloves!".to_string(),
                start_time: "09:00".to_string(),
                end_time: None,
                location: "Willard Beach, South Portland, ME".to_string(),
            },
        )
        .await
        .unwrap();

        (owner, event)
    }

    #[async_std::test]
    async fn create_then_cancel_restores_attendance() {
        database_test!(|db| async move {
            let (_owner, event) = fixture(&db).await;

            let user = User::create(&db, "val@example.com".to_string(), "Val".to_string())
                .await
                .unwrap();

            let rsvp = Rsvp::create(&db, &event, &user, 3, "See you there".to_string())
                .await
                .unwrap();

            let fetched_event = db.fetch_event(&event.id).await.unwrap();
            assert_eq!(fetched_event.attendance, 3);
            assert!(fetched_event.rsvps.contains(&rsvp.id));

            rsvp.clone().cancel(&db).await.unwrap();

            // Compensating update removed the link and the attendees.
            let fetched_event = db.fetch_event(&event.id).await.unwrap();
            assert_eq!(fetched_event.attendance, 0);
            assert!(!fetched_event.rsvps.contains(&rsvp.id));
            assert!(db.fetch_rsvp(&rsvp.id).await.is_err());
        });
    }

    #[async_std::test]
    async fn reject_responding_twice() {
        database_test!(|db| async move {
            let (_owner, event) = fixture(&db).await;

            let user = User::create(&db, "val@example.com".to_string(), None)
                .await
                .unwrap();

            Rsvp::create(&db, &event, &user, 1, String::new())
                .await
                .unwrap();

            assert!(Rsvp::create(&db, &event, &user, 1, String::new())
                .await
                .is_err());
        });
    }

    #[async_std::test]
    async fn reject_own_event() {
        database_test!(|db| async move {
            let (owner, event) = fixture(&db).await;

            assert!(Rsvp::create(&db, &event, &owner, 1, String::new())
                .await
                .is_err());
        });
    }

    #[async_std::test]
    async fn host_rsvp_cannot_be_cancelled() {
        database_test!(|db| async move {
            let (_owner, event) = fixture(&db).await;

            let host_rsvp = db
                .fetch_rsvps_for_event(&event.id)
                .await
                .unwrap()
                .into_iter()
                .next()
                .unwrap();

            assert!(host_rsvp.is_host());
            assert!(host_rsvp.cancel(&db).await.is_err());
        });
    }

    #[async_std::test]
    async fn reject_zero_attendees() {
        database_test!(|db| async move {
            let (_owner, event) = fixture(&db).await;

            let user = User::create(&db, "val@example.com".to_string(), None)
                .await
                .unwrap();

            assert!(Rsvp::create(&db, &event, &user, 0, String::new())
                .await
                .is_err());
        });
    }
}
