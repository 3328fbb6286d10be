// Queue Type: Debounced
use deadqueue::limited::Queue;
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::{collections::HashMap, time::Duration};

use litterless_config::config;
use litterless_result::Result;

use crate::events::client::EventV1;
use crate::{Coordinate, Database, PartialEvent};

use super::DelayedTask;

/// Task information
struct Data {
    /// Event to resolve an address for
    event: String,
    /// Free-text address
    address: String,
}

/// Task information
#[derive(Debug)]
struct Task {
    /// Latest address
    address: String,
}

static Q: Lazy<Queue<Data>> = Lazy::new(|| Queue::new(10_000));

static CLIENT: Lazy<reqwest::Client> = Lazy::new(|| {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .connect_timeout(Duration::from_secs(5))
        .build()
        .expect("reqwest Client")
});

/// Queue a new task for a worker
pub async fn queue(event: String, address: String) {
    Q.try_push(Data { event, address }).ok();
    info!("Queue is using {} slots from {}.", Q.len(), Q.capacity());
}

/// Fold a queued address change into the pending task set
///
/// Repeated changes for the same event collapse into one task carrying
/// the latest address, pushing its quiet window back.
fn absorb(tasks: &mut HashMap<String, DelayedTask<Task>>, data: Data) {
    if let Some(task) = tasks.get_mut(&data.event) {
        task.data.address = data.address;
        task.delay();
    } else {
        tasks.insert(
            data.event,
            DelayedTask::new(Task {
                address: data.address,
            }),
        );
    }
}

#[derive(Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Deserialize)]
struct GeocodeResult {
    #[serde(default)]
    address_components: Vec<AddressComponent>,
    geometry: Geometry,
}

#[derive(Deserialize)]
struct AddressComponent {
    long_name: String,
    short_name: String,
    types: Vec<String>,
}

#[derive(Deserialize)]
struct Geometry {
    location: Location,
}

#[derive(Deserialize)]
struct Location {
    lat: f64,
    lng: f64,
}

/// Resolved address
#[derive(Debug)]
struct Geocoded {
    coordinate: Coordinate,
    locality: Option<String>,
    administrative_area: Option<String>,
    country: Option<String>,
}

fn extract(result: GeocodeResult) -> Geocoded {
    let mut locality = None;
    let mut administrative_area = None;
    let mut country = None;

    for component in result.address_components {
        if component.types.iter().any(|t| t == "locality") {
            locality = Some(component.long_name);
        } else if component
            .types
            .iter()
            .any(|t| t == "administrative_area_level_1")
        {
            administrative_area = Some(component.short_name);
        } else if component.types.iter().any(|t| t == "country") {
            country = Some(component.long_name);
        }
    }

    Geocoded {
        coordinate: Coordinate {
            lat: result.geometry.location.lat,
            lng: result.geometry.location.lng,
        },
        locality,
        administrative_area,
        country,
    }
}

/// Resolve an address to its first candidate result
async fn resolve(address: &str) -> Result<Geocoded> {
    let config = config().await;

    let response = CLIENT
        .get(&config.api.geocoding.endpoint)
        .query(&[
            ("address", address),
            ("key", config.api.geocoding.api_key.as_str()),
        ])
        .send()
        .await
        .map_err(|_| create_error!(InternalError))?
        .json::<GeocodeResponse>()
        .await
        .map_err(|_| create_error!(InternalError))?;

    response
        .results
        .into_iter()
        .next()
        .map(extract)
        .ok_or_else(|| create_error!(NotFound))
}

/// Start a new worker
pub async fn worker(db: Database) {
    let config = config().await;
    let debounce = Duration::from_millis(config.api.geocoding.debounce_ms);

    let mut tasks = HashMap::<String, DelayedTask<Task>>::new();
    let mut keys = vec![];

    loop {
        // Find tasks whose quiet window has elapsed.
        for (key, task) in &tasks {
            if task.quiet_for(debounce) {
                keys.push(key.clone());
            }
        }

        // Resolve due addresses and store the coordinates.
        for key in &keys {
            if let Some(task) = tasks.remove(key) {
                if config.api.geocoding.endpoint.is_empty() {
                    info!("No geocoding endpoint configured, skipping event {key}.");
                    continue;
                }

                match resolve(&task.data.address).await {
                    Ok(geocoded) => {
                        let partial = PartialEvent {
                            coordinate: Some(geocoded.coordinate.clone()),
                            ..Default::default()
                        };

                        match db.update_event(key, &partial, vec![]).await {
                            Ok(_) => {
                                info!(
                                    "Resolved \"{}\" to {:?}, {:?}, {:?} for event {key}.",
                                    task.data.address,
                                    geocoded.locality,
                                    geocoded.administrative_area,
                                    geocoded.country
                                );

                                EventV1::EventGeocoded {
                                    id: key.clone(),
                                    coordinate: geocoded.coordinate.into(),
                                }
                                .p("events".to_string())
                                .await;
                            }
                            Err(err) => error!("Failed to store coordinate for {key}: {err:?}"),
                        }
                    }
                    // The event simply keeps no coordinate, the same
                    // state it has before resolution completes.
                    Err(err) => warn!(
                        "Failed to resolve \"{}\" for event {key}: {err:?}",
                        task.data.address
                    ),
                }
            }
        }

        // Clear keys
        keys.clear();

        // Queue incoming tasks.
        while let Some(data) = Q.try_pop() {
            absorb(&mut tasks, data);
        }

        tokio::time::sleep(Duration::from_millis(250)).await;
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::time::Duration;

    use super::{absorb, extract, Data, GeocodeResponse};

    #[test]
    fn repeated_changes_collapse_into_one_task() {
        let mut tasks = HashMap::new();

        absorb(
            &mut tasks,
            Data {
                event: "E1".to_string(),
                address: "123 Main St".to_string(),
            },
        );
        absorb(
            &mut tasks,
            Data {
                event: "E1".to_string(),
                address: "123 Main St, Springfield".to_string(),
            },
        );
        absorb(
            &mut tasks,
            Data {
                event: "E2".to_string(),
                address: "456 Elm St".to_string(),
            },
        );

        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks["E1"].data.address, "123 Main St, Springfield");

        // The second change restarted E1's quiet window, so only one
        // resolution happens once it elapses.
        assert!(!tasks["E1"].quiet_for(Duration::from_secs(60)));
    }

    #[test]
    fn extract_structured_components() {
        let response: GeocodeResponse = serde_json::from_str(
            r#"{
                "results": [{
                    "address_components": [
                        {"long_name": "123", "short_name": "123", "types": ["street_number"]},
                        {"long_name": "Springfield", "short_name": "Springfield", "types": ["locality", "political"]},
                        {"long_name": "Illinois", "short_name": "IL", "types": ["administrative_area_level_1", "political"]},
                        {"long_name": "United States", "short_name": "US", "types": ["country", "political"]}
                    ],
                    "geometry": {"location": {"lat": 39.78, "lng": -89.65}}
                }],
                "status": "OK"
            }"#,
        )
        .unwrap();

        let geocoded = extract(response.results.into_iter().next().unwrap());
        assert_eq!(geocoded.locality.as_deref(), Some("Springfield"));
        assert_eq!(geocoded.administrative_area.as_deref(), Some("IL"));
        assert_eq!(geocoded.country.as_deref(), Some("United States"));
        assert_eq!(geocoded.coordinate.lat, 39.78);
        assert_eq!(geocoded.coordinate.lng, -89.65);
    }
}
