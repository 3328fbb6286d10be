// Queue Type: Fire and forget
use std::time::Duration;

use deadqueue::limited::Queue;
use once_cell::sync::Lazy;
use serde_json::{json, Value};

use litterless_config::config;

/// Task information
#[derive(Debug)]
struct EmailTask {
    /// Recipient address
    email: String,
    /// Transactional template to render
    template_id: String,
    /// Substitutions for the template
    template_data: Value,
}

static Q: Lazy<Queue<EmailTask>> = Lazy::new(|| Queue::new(10_000));

static CLIENT: Lazy<reqwest::Client> = Lazy::new(|| {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .connect_timeout(Duration::from_secs(5))
        .build()
        .expect("reqwest Client")
});

/// Queue a new task for a worker
pub async fn queue(email: String, template_id: String, template_data: Value) {
    Q.try_push(EmailTask {
        email,
        template_id,
        template_data,
    })
    .ok();

    info!("Queue is using {} slots from {}.", Q.len(), Q.capacity());
}

/// Start a new worker
pub async fn worker() {
    let config = config().await;

    loop {
        let EmailTask {
            email,
            template_id,
            template_data,
        } = Q.pop().await;

        if config.api.mail.endpoint.is_empty() {
            info!("No mail endpoint configured, dropping template {template_id} for {email}.");
            continue;
        }

        // Fire and forget: the response is logged, never acted upon.
        match CLIENT
            .post(&config.api.mail.endpoint)
            .json(&json!({
                "email": email,
                "templateId": template_id,
                "templateData": template_data,
            }))
            .send()
            .await
        {
            Ok(response) => info!(
                "Delivered template {template_id} to {email} ({}).",
                response.status()
            ),
            Err(err) => warn!("Failed to deliver template {template_id} to {email}: {err:?}"),
        }
    }
}
