//! Action handlers: UpdateAction dispatch and background task spawning

use tokio::sync::{mpsc, watch};
use tracing::{debug, warn};

use crate::clipboard;
use crate::message::Message;
use crate::UpdateAction;
use mailtriage_client::{ClassifyClient, ClassifyPayload};

/// Execute an action, spawning a background task for network calls
pub fn handle_action(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    client: &ClassifyClient,
    shutdown_rx: watch::Receiver<bool>,
) {
    match action {
        UpdateAction::Classify { payload } => {
            let client = client.clone();
            tokio::spawn(async move {
                spawn_classify(client, payload, msg_tx, shutdown_rx).await;
            });
        }

        UpdateAction::CheckHealth => {
            let client = client.clone();
            tokio::spawn(async move {
                let msg = match client.health().await {
                    Ok(status) => Message::HealthChecked { status },
                    Err(e) => Message::HealthCheckFailed {
                        error: e.to_string(),
                    },
                };
                let _ = msg_tx.send(msg).await;
            });
        }

        UpdateAction::CopyToClipboard { text } => {
            let msg = match clipboard::copy_to_clipboard(&text) {
                Ok(()) => Message::ResponseCopied,
                Err(e) => Message::CopyFailed {
                    error: e.to_string(),
                },
            };
            if let Err(e) = msg_tx.try_send(msg) {
                warn!("Failed to report clipboard result: {}", e);
            }
        }
    }
}

/// Run one classification request and report its outcome
async fn spawn_classify(
    client: ClassifyClient,
    payload: ClassifyPayload,
    msg_tx: mpsc::Sender<Message>,
    mut shutdown_rx: watch::Receiver<bool>,
) {
    let outcome = tokio::select! {
        result = client.classify(&payload) => result,
        _ = shutdown_rx.changed() => {
            debug!("Shutdown while classifying {}", payload.describe());
            return;
        }
    };

    let msg = match outcome {
        Ok(result) => Message::ClassificationCompleted { result },
        Err(e) => Message::ClassificationFailed {
            error: e.to_string(),
        },
    };
    let _ = msg_tx.send(msg).await;
}
