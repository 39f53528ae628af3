//! Command orchestration from UI actions to the backend command queue.

use tokio::sync::mpsc::{error::TrySendError, Sender};

use crate::backend_bridge::commands::BackendCommand;

/// Queues `cmd` without blocking the UI loop. On failure returns the status
/// line to show the user.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
) -> Result<(), String> {
    let cmd_name = match &cmd {
        BackendCommand::Search { .. } => "search",
    };

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            Ok(())
        }
        Err(TrySendError::Full(_)) => Err("UI command queue is full; please retry".to_string()),
        Err(TrySendError::Closed(_)) => {
            Err("Backend command processor stopped; restart the lookup".to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use tokio::sync::mpsc;

    use super::*;

    fn search(ticket: u64) -> BackendCommand {
        BackendCommand::Search {
            ticket,
            query: "graphs".into(),
        }
    }

    #[test]
    fn reports_full_queue() {
        let (tx, _rx) = mpsc::channel(1);
        assert!(dispatch_backend_command(&tx, search(1)).is_ok());
        let status = dispatch_backend_command(&tx, search(2)).expect_err("queue full");
        assert!(status.contains("full"));
    }

    #[test]
    fn reports_stopped_backend() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        let status = dispatch_backend_command(&tx, search(1)).expect_err("closed");
        assert!(status.contains("stopped"));
    }
}
