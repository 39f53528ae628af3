//! Backend commands queued from UI to backend worker.

#[derive(Debug)]
pub enum BackendCommand {
    Search { ticket: u64, query: String },
}
