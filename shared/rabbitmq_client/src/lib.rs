pub mod connection;
pub mod producer;

pub use connection::RabbitmqConnection;
pub use producer::{Message, RabbitmqQueueProducer};
