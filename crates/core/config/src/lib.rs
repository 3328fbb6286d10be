use std::collections::HashMap;

use cached::proc_macro::cached;
use config::{Config, File, FileFormat};
use futures_locks::RwLock;
use once_cell::sync::Lazy;
use serde::Deserialize;

static CONFIG_BUILDER: Lazy<RwLock<Config>> = Lazy::new(|| {
    RwLock::new({
        let mut builder = Config::builder().add_source(File::from_str(
            include_str!("../Litterless.toml"),
            FileFormat::Toml,
        ));

        if std::path::Path::new("Litterless.toml").exists() {
            builder = builder.add_source(File::new("Litterless.toml", FileFormat::Toml));
        }

        builder.build().unwrap()
    })
});

#[derive(Deserialize, Debug, Clone)]
pub struct Database {
    pub mongodb: String,
    pub redis: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Hosts {
    pub app: String,
    pub api: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ApiMailTemplates {
    pub event_confirmation: String,
    pub rsvp_participant: String,
    pub rsvp_organizer: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ApiMail {
    pub endpoint: String,
    pub from_address: String,
    pub templates: ApiMailTemplates,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ApiGeocoding {
    pub endpoint: String,
    pub api_key: String,
    pub debounce_ms: u64,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ApiPartner {
    pub email: String,
    pub function_endpoint: String,
    pub redirect_url: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Api {
    pub mail: ApiMail,
    pub geocoding: ApiGeocoding,
    pub partner: ApiPartner,
}

#[derive(Deserialize, Debug, Clone)]
pub struct FeaturesLimits {
    pub page_size: i64,
    pub post_photos: usize,
    pub post_description_length: usize,
    pub event_title_length: usize,
    pub event_description_length: usize,
    pub event_attendees: u32,
    pub rsvp_note_length: usize,
}

#[derive(Deserialize, Debug, Clone)]
pub struct FeaturesLimitsCollection {
    pub default: FeaturesLimits,

    #[serde(flatten)]
    pub roles: HashMap<String, FeaturesLimits>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Features {
    pub limits: FeaturesLimitsCollection,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    pub production: bool,
    pub database: Database,
    pub hosts: Hosts,
    pub api: Api,
    pub features: Features,
}

pub async fn init() {
    println!(
        ":: Litterless Configuration ::\n\x1b[32m{:?}\x1b[0m",
        config().await
    );
}

pub async fn read() -> Config {
    CONFIG_BUILDER.read().await.clone()
}

#[cached(time = 30)]
pub async fn config() -> Settings {
    read().await.try_deserialize::<Settings>().unwrap()
}

#[cfg(feature = "test")]
#[cfg(test)]
mod tests {
    use crate::init;

    #[async_std::test]
    async fn it_works() {
        init().await;
    }
}
