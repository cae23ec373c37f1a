mod connection_name;
mod get_options;
mod mq_connection_config;
mod received_message;

pub use connection_name::ConnectionName;
pub use get_options::GetOptions;
pub use mq_connection_config::{MqConnectionConfig, MqCredentials};
pub use received_message::ReceivedMessage;
