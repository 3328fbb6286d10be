// Queue Type: Debounced
use deadqueue::limited::Queue;
use once_cell::sync::Lazy;
use std::{collections::HashMap, time::Duration};

use litterless_result::Result;

use crate::events::client::EventV1;
use crate::Database;

use super::DelayedTask;

/// Task information
struct Data {
    /// Event to reconcile
    event: String,
}

static Q: Lazy<Queue<Data>> = Lazy::new(|| Queue::new(10_000));

/// Queue a new task for a worker
pub async fn queue(event: String) {
    Q.try_push(Data { event }).ok();
    info!("Queue is using {} slots from {}.", Q.len(), Q.capacity());
}

/// Reduce the whole RSVP collection into per-event attendee totals
///
/// The running counter on each event is updated incrementally with
/// every RSVP write; this full reduction is the authoritative value
/// used to repair any drift.
pub async fn totals(db: &Database) -> Result<HashMap<String, u32>> {
    let mut totals = HashMap::new();

    for rsvp in db.fetch_all_rsvps().await? {
        *totals.entry(rsvp.event).or_insert(0) += rsvp.attending;
    }

    Ok(totals)
}

/// Start a new worker
pub async fn worker(db: Database) {
    let mut tasks = HashMap::<String, DelayedTask<()>>::new();
    let mut keys = vec![];

    loop {
        // Find due tasks.
        for (key, task) in &tasks {
            if task.should_run() {
                keys.push(key.clone());
            }
        }

        // Reconcile any due events against the full collection.
        for key in &keys {
            if tasks.remove(key).is_some() {
                match totals(&db).await {
                    Ok(totals) => {
                        let attendance = totals.get(key).copied().unwrap_or(0);

                        match db.set_event_attendance(key, attendance).await {
                            Ok(_) => {
                                info!("Reconciled attendance for {key} to {attendance}.");

                                EventV1::AttendanceUpdate {
                                    id: key.clone(),
                                    attendance,
                                }
                                .p("events".to_string())
                                .await;
                            }
                            Err(err) => {
                                error!("Failed to store attendance for {key}: {err:?}")
                            }
                        }
                    }
                    Err(err) => error!("Failed to reduce RSVP collection: {err:?}"),
                }
            }
        }

        // Clear keys
        keys.clear();

        // Queue incoming tasks.
        while let Some(Data { event }) = Q.try_pop() {
            if let Some(task) = tasks.get_mut(&event) {
                task.delay();
            } else {
                tasks.insert(event, DelayedTask::new(()));
            }
        }

        tokio::time::sleep(Duration::from_secs(1)).await;
    }
}

#[cfg(test)]
mod tests {
    use litterless_models::v0;

    use super::totals;
    use crate::{Event, Rsvp, User};

    #[async_std::test]
    async fn reduction_follows_rsvp_lifecycle() {
        database_test!(|db| async move {
            let owner = User::create(&db, "host@example.com".to_string(), None)
                .await
                .unwrap();

            let event = Event::create(
                &db,
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

            // Host RSVP contributes zero attendees.
            let sums = totals(&db).await.unwrap();
            assert_eq!(sums.get(&event.id).copied().unwrap_or(0), 0);

            let user = User::create(&db, "val@example.com".to_string(), None)
                .await
                .unwrap();
            let rsvp = Rsvp::create(&db, &event, &user, 3, String::new())
                .await
                .unwrap();

            let sums = totals(&db).await.unwrap();
            assert_eq!(sums.get(&event.id).copied(), Some(3));

            // Reduction and running counter agree.
            let fetched_event = db.fetch_event(&event.id).await.unwrap();
            assert_eq!(fetched_event.attendance, 3);

            rsvp.cancel(&db).await.unwrap();

            let sums = totals(&db).await.unwrap();
            assert_eq!(sums.get(&event.id).copied().unwrap_or(0), 0);

            let fetched_event = db.fetch_event(&event.id).await.unwrap();
            assert_eq!(fetched_event.attendance, 0);
        });
    }
}
