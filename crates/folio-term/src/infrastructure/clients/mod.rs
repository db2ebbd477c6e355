mod emailjs;
mod github;

use anyhow::Result;

pub use emailjs::*;
pub use github::*;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Clients;
use crate::domain::models::UrlOpener;

/// Opens links with the platform handler (`xdg-open`, `open`, `start`).
#[derive(Default)]
pub struct SystemOpener {}

impl UrlOpener for SystemOpener {
    fn open(&self, url: &str) -> Result<()> {
        tracing::info!(url, "opening external link");
        open::that(url)?;
        return Ok(());
    }
}

pub struct ClientManager {}

impl ClientManager {
    /// Builds the network collaborators from the loaded configuration.
    pub fn from_config() -> Result<Clients> {
        let profile = GithubApi::new(&Config::get(ConfigKey::GithubApiUrl))?;
        let relay = EmailJs::new(
            &Config::get(ConfigKey::EmailApiUrl),
            EmailJsCredentials {
                service_id: Config::get(ConfigKey::EmailServiceId),
                template_id: Config::get(ConfigKey::EmailTemplateId),
                public_key: Config::get(ConfigKey::EmailPublicKey),
            },
        )?;

        return Ok(Clients {
            profile: Box::new(profile),
            relay: Box::new(relay),
            opener: Box::<SystemOpener>::default(),
        });
    }
}
