use anyhow::Result;
use async_trait::async_trait;
use thiserror::Error;

use super::ContactForm;
use super::GithubStats;

#[async_trait]
pub trait ProfileSource: Send + Sync {
    async fn fetch_stats(&self, user: &str) -> Result<GithubStats>;
}

pub type ProfileSourceBox = Box<dyn ProfileSource>;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("email relay is not configured: missing {0}")]
    NotConfigured(&'static str),
    #[error("email relay request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("email relay rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

#[async_trait]
pub trait EmailRelay: Send + Sync {
    async fn send(&self, form: &ContactForm) -> Result<(), RelayError>;
}

pub type EmailRelayBox = Box<dyn EmailRelay>;

pub trait UrlOpener: Send + Sync {
    fn open(&self, url: &str) -> Result<()>;
}

pub type UrlOpenerBox = Box<dyn UrlOpener>;

/// Collaborators the actions service talks to.
pub struct Clients {
    pub profile: ProfileSourceBox,
    pub relay: EmailRelayBox,
    pub opener: UrlOpenerBox,
}
