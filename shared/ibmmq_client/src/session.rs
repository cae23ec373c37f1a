use crate::{
    dto::{GetOptions, MqConnectionConfig},
    MqError,
};
use async_trait::async_trait;

///
/// Connection to a queue manager with at most one opened queue.
///
/// Implementations wrap a concrete MQI binding.
/// Every method maps to a single MQI verb.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MqSession: Send {
    async fn connect(&mut self, config: &MqConnectionConfig) -> Result<(), MqError>;

    ///
    /// Opens queue for input using queue's default share option
    ///
    async fn open_queue(&mut self, queue_name: &str) -> Result<(), MqError>;

    ///
    /// Gets a single message into the buffer.
    ///
    /// ### Returns
    /// Length of the whole message.
    /// It can be greater than buffer length when message was truncated.
    ///
    /// ### Errors
    /// - [MqError::Call] with [crate::ReasonCode::NO_MSG_AVAILABLE]
    /// when nothing arrived during wait interval
    ///
    async fn get(&mut self, options: &GetOptions, buffer: &mut [u8]) -> Result<usize, MqError>;

    async fn close_queue(&mut self) -> Result<(), MqError>;

    async fn disconnect(&mut self) -> Result<(), MqError>;
}
