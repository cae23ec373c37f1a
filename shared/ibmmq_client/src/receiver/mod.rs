//!
//! Receive loop that keeps getting messages from a single queue.
//!

mod mq_receiver;
mod mq_receiver_config;
mod mq_receiver_delivery_callback;

pub use mq_receiver::MqReceiver;
pub use mq_receiver_config::MqReceiverConfig;
pub use mq_receiver_delivery_callback::MqReceiverDeliveryCallback;

#[cfg(test)]
pub use mq_receiver_delivery_callback::MockMqReceiverDeliveryCallback;
