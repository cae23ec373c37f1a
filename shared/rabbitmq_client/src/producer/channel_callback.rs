use amqprs::{channel::Channel, Ack, BasicProperties, Cancel, CloseChannel, Nack, Return};
use async_trait::async_trait;

#[derive(Clone)]
pub struct ChannelCallback;

#[async_trait]
impl amqprs::callbacks::ChannelCallback for ChannelCallback {
    #[tracing::instrument(
        name = "RabbitMQ Producer Callback",
        target = "rabbitmq_client::producer_callback",
        skip_all
    )]
    async fn close(
        &mut self,
        _channel: &Channel,
        close: CloseChannel,
    ) -> Result<(), amqprs::error::Error> {
        tracing::error!(
            code = close.reply_code(),
            text = close.reply_text(),
            "received close",
        );
        Ok(())
    }

    async fn cancel(
        &mut self,
        _channel: &Channel,
        _cancel: Cancel,
    ) -> Result<(), amqprs::error::Error> {
        Ok(())
    }

    #[tracing::instrument(
        name = "RabbitMQ Producer Callback",
        target = "rabbitmq_client::producer_callback",
        skip_all
    )]
    async fn flow(
        &mut self,
        _channel: &Channel,
        active: bool,
    ) -> Result<bool, amqprs::error::Error> {
        tracing::debug!(flow = active, "received flow");

        Ok(active)
    }

    // publisher confirms are never enabled
    async fn publish_ack(&mut self, _channel: &Channel, _ack: Ack) {}

    async fn publish_nack(&mut self, _channel: &Channel, _nack: Nack) {}

    #[tracing::instrument(
        name = "RabbitMQ Producer Callback",
        target = "rabbitmq_client::producer_callback",
        skip_all
    )]
    async fn publish_return(
        &mut self,
        _channel: &Channel,
        ret: Return,
        _basic_properties: BasicProperties,
        content: Vec<u8>,
    ) {
        tracing::warn!(
            code = ret.reply_code(),
            text = ret.reply_text(),
            content_len = content.len(),
            "message returned",
        );
    }
}
