#[cfg(test)]
#[path = "actions_test.rs"]
mod tests;

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;

use crate::domain::models::Action;
use crate::domain::models::Clients;
use crate::domain::models::Event;
use crate::domain::models::GithubStats;
use crate::domain::models::ProfileSource;

/// Fetches stats for `user`, substituting the fallback on any failure.
pub async fn load_github_stats(source: &dyn ProfileSource, user: &str) -> GithubStats {
    match source.fetch_stats(user).await {
        Ok(stats) => stats,
        Err(err) => {
            tracing::warn!(error = ?err, user, "GitHub stats unavailable, using fallback");
            GithubStats::fallback()
        }
    }
}

pub struct ActionsService {}

impl ActionsService {
    pub async fn start(
        clients: Clients,
        event_tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        let profile = Arc::new(clients.profile);
        let relay = Arc::new(clients.relay);
        let opener = clients.opener;

        while let Some(action) = rx.recv().await {
            let worker_event_tx = event_tx.clone();
            match action {
                Action::OpenExternal(url) => {
                    if let Err(err) = opener.open(&url) {
                        tracing::warn!(error = ?err, %url, "failed to open external link");
                    }
                }
                Action::FetchGithubStats(user) => {
                    let profile = profile.clone();
                    tokio::spawn(async move {
                        let stats = load_github_stats(&**profile, &user).await;
                        let _ = worker_event_tx.send(Event::GithubStatsLoaded(stats));
                    });
                }
                Action::SendContact(form) => {
                    let relay = relay.clone();
                    tokio::spawn(async move {
                        let event = match relay.send(&form).await {
                            Ok(()) => Event::ContactDelivered,
                            Err(err) => Event::ContactFailed(err.to_string()),
                        };
                        let _ = worker_event_tx.send(event);
                    });
                }
            }
        }

        Ok(())
    }
}
