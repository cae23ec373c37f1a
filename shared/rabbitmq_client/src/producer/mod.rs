mod channel_callback;
mod dto;
mod rabbitmq_queue_producer;

pub use dto::Message;
pub use rabbitmq_queue_producer::RabbitmqQueueProducer;
