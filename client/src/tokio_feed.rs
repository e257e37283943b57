//! Drives a session from a tokio channel of raw account updates.

use log::{info, warn};
use tokio::sync::mpsc;

use tilesync_shared::GameLayout;

use crate::{events::SessionEvents, feed::AccountUpdate, session::GameSession};

/// Feeds every update from `updates` into `session` and forwards each
/// non-empty batch of events to `events`, all on the calling task.
///
/// Updates that are already waiting are applied together as one batch.
/// Returns the session once `updates` closes or `events` is dropped.
pub async fn pump<G: GameLayout>(
    mut session: GameSession<G>,
    mut updates: mpsc::Receiver<AccountUpdate>,
    events: mpsc::Sender<SessionEvents<G>>,
) -> GameSession<G> {
    while let Some(update) = updates.recv().await {
        queue(&mut session, update);
        while let Ok(update) = updates.try_recv() {
            queue(&mut session, update);
        }

        let batch = match session.process() {
            Ok(batch) => batch,
            Err(error) => {
                warn!("Stopping update pump: {}", error);
                break;
            }
        };
        if batch.is_empty() {
            continue;
        }
        if events.send(batch).await.is_err() {
            info!("Event receiver dropped, stopping update pump");
            break;
        }
    }
    session
}

fn queue<G: GameLayout>(session: &mut GameSession<G>, update: AccountUpdate) {
    if let Err(error) = session.accept(update) {
        warn!("Ignoring update: {}", error);
    }
}
