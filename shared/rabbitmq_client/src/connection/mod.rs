//!
//! Module that allows to establish connection with RabbitMQ server.
//!

mod connection_callback;
mod rabbitmq_connection;

pub use rabbitmq_connection::RabbitmqConnection;
