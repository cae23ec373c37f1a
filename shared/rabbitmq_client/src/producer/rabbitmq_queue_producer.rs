use super::{channel_callback::ChannelCallback, dto::Message};
use crate::RabbitmqConnection;
use amqprs::channel::{BasicPublishArguments, Channel, QueueDeclareArguments};

/// Name of the default exchange. It routes by queue name.
const DEFAULT_EXCHANGE: &str = "";

///
/// Producer that publishes directly to a single queue
/// through the default exchange.
///
pub struct RabbitmqQueueProducer {
    channel: Channel,
    queue_name: String,
}

impl RabbitmqQueueProducer {
    ///
    /// Opens channel and declares the queue.
    /// Declaring an existing queue with the same arguments is a no-op on the broker side.
    /// `queue_name` replaces any name already set in `queue_declare_args`.
    ///
    /// ### Errors
    /// Returns an error when channel cannot be opened or queue cannot be declared.
    /// Channel opened before the failure is closed.
    ///
    #[tracing::instrument(
        name = "RabbitMQ Producer",
        target = "rabbitmq_client::producer",
        skip_all
    )]
    pub async fn new(
        rabbitmq_connection: &RabbitmqConnection,
        queue_name: &str,
        mut queue_declare_args: QueueDeclareArguments,
    ) -> anyhow::Result<Self> {
        tracing::info!("starting producer");

        let channel = rabbitmq_connection.open_channel().await?;

        queue_declare_args.queue(queue_name.to_string());
        if let Err(err) = Self::prepare_channel(&channel, queue_name, &mut queue_declare_args).await
        {
            Self::close_channel(channel).await;
            return Err(err);
        }

        tracing::info!(queue = queue_name, "producer started");

        Ok(Self {
            channel,
            queue_name: queue_name.to_string(),
        })
    }

    pub fn queue_name(&self) -> &str {
        &self.queue_name
    }

    ///
    /// Publishes message to the default exchange
    /// with the queue name as routing key.
    ///
    #[tracing::instrument(
        name = "RabbitMQ Producer",
        target = "rabbitmq_client::producer",
        skip_all
    )]
    pub async fn publish(&self, message: Message) -> Result<(), amqprs::error::Error> {
        let args = BasicPublishArguments::new(DEFAULT_EXCHANGE, &self.queue_name);

        tracing::info!(
            routing_key = args.routing_key,
            content_type = message.content_type,
            content_len = message.content.len(),
            "publishing message"
        );
        let basic_properties = message.basic_properties();
        self.channel
            .basic_publish(basic_properties, message.content, args)
            .await?;

        tracing::info!("message published");

        Ok(())
    }

    #[tracing::instrument(
        name = "RabbitMQ Producer",
        target = "rabbitmq_client::producer",
        skip_all
    )]
    pub async fn close(self) {
        tracing::info!("closing producer");

        Self::close_channel(self.channel).await;

        tracing::info!("producer closed");
    }

    async fn prepare_channel(
        channel: &Channel,
        queue_name: &str,
        queue_declare_args: &mut QueueDeclareArguments,
    ) -> anyhow::Result<()> {
        tracing::info!("registering channel callback");
        channel.register_callback(ChannelCallback).await?;

        tracing::info!(queue = queue_name, "declaring queue");
        queue_declare_args.no_wait(false);
        channel.queue_declare(queue_declare_args.clone()).await?;

        Ok(())
    }

    async fn close_channel(channel: Channel) {
        tracing::info!("closing channel");
        if let Err(err) = channel.close().await {
            tracing::warn!(%err, "closing channel failed");
        }
    }
}
