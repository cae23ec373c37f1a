use crate::dto::{GetOptions, MqConnectionConfig};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct MqReceiverConfig {
    pub connection: MqConnectionConfig,
    pub queue_name: String,
    pub get_options: GetOptions,
    /// Sleep after get reported no message available
    pub retry_interval: Duration,
    /// Messages longer than buffer are truncated
    pub buffer_size: usize,
}
