//! Backend worker that runs searches off the UI loop.

use std::sync::Arc;

use client_core::PaperSearch;
use tokio::{
    sync::mpsc::{Receiver, Sender},
    task::JoinHandle,
};
use tracing::{info, warn};

use crate::{backend_bridge::commands::BackendCommand, controller::events::UiEvent};

/// Each search runs on its own task so a slow request never holds up the
/// queue. The worker exits once every command sender is dropped.
pub fn launch(
    backend: Arc<dyn PaperSearch>,
    mut cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("backend worker started");
        while let Some(cmd) = cmd_rx.recv().await {
            match cmd {
                BackendCommand::Search { ticket, query } => {
                    let backend = Arc::clone(&backend);
                    let ui_tx = ui_tx.clone();
                    tokio::spawn(async move {
                        let outcome = backend.search(&query).await;
                        if let Err(err) = &outcome {
                            warn!(ticket, kind = ?err.kind(), "search failed: {err}");
                        }
                        if ui_tx
                            .send(UiEvent::SearchSettled { ticket, outcome })
                            .await
                            .is_err()
                        {
                            warn!(ticket, "ui event receiver dropped before settlement");
                        }
                    });
                }
            }
        }
        info!("backend worker stopped");
    })
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use shared::{domain::SearchResult, error::SearchError};
    use tokio::sync::mpsc;

    use super::*;

    struct CannedSearch;

    #[async_trait]
    impl PaperSearch for CannedSearch {
        async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
            if query.is_empty() {
                return Err(SearchError::InvalidQuery);
            }
            Ok(vec![SearchResult::new(query, "U", "A", None, 0)])
        }
    }

    #[tokio::test]
    async fn settles_each_search_with_its_ticket() {
        let (cmd_tx, cmd_rx) = mpsc::channel(8);
        let (ui_tx, mut ui_rx) = mpsc::channel(8);
        let worker = launch(Arc::new(CannedSearch), cmd_rx, ui_tx);

        cmd_tx
            .send(BackendCommand::Search {
                ticket: 7,
                query: "graphs".into(),
            })
            .await
            .expect("queue");

        let UiEvent::SearchSettled { ticket, outcome } = ui_rx.recv().await.expect("event");
        assert_eq!(ticket, 7);
        assert_eq!(outcome.expect("results")[0].title, "graphs");

        cmd_tx
            .send(BackendCommand::Search {
                ticket: 8,
                query: String::new(),
            })
            .await
            .expect("queue");
        let UiEvent::SearchSettled { ticket, outcome } = ui_rx.recv().await.expect("event");
        assert_eq!(ticket, 8);
        assert_eq!(outcome.expect_err("invalid"), SearchError::InvalidQuery);

        drop(cmd_tx);
        worker.await.expect("worker exits");
    }
}
