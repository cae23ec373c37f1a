use std::time::Duration;

///
/// Options of a single get.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetOptions {
    /// How long queue manager waits for a message before reporting no message available
    pub wait_interval: Duration,
    /// Convert message data to the receiver's character set
    pub convert: bool,
    /// Remove message from the queue even when it doesn't fit into the buffer
    pub accept_truncated: bool,
}

impl Default for GetOptions {
    fn default() -> Self {
        Self {
            wait_interval: Duration::from_secs(3),
            convert: true,
            accept_truncated: true,
        }
    }
}
