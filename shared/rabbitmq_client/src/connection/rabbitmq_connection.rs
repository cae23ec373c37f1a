use super::connection_callback::ConnectionCallback;
use amqprs::{
    channel::Channel,
    connection::{Connection, OpenConnectionArguments},
};

///
/// RabbitMQ connection.
/// Unlike a long running service it never recreates itself,
/// any failure is reported to the caller.
///
pub struct RabbitmqConnection {
    connection: Connection,
}

impl RabbitmqConnection {
    #[tracing::instrument(
        name = "RabbitMQ Connection",
        target = "rabbitmq_client::connection",
        skip_all
    )]
    pub async fn new(
        open_connection_args: OpenConnectionArguments,
    ) -> Result<Self, amqprs::error::Error> {
        tracing::info!("opening connection");
        let connection = Connection::open(&open_connection_args).await?;

        tracing::info!("registering callback");
        if let Err(err) = connection.register_callback(ConnectionCallback).await {
            // connection is already opened so it has to be released
            // before reporting the error
            Self::close_connection(connection).await;
            return Err(err);
        }

        tracing::info!("connection opened");

        Ok(Self { connection })
    }

    #[tracing::instrument(
        name = "RabbitMQ Connection",
        target = "rabbitmq_client::connection",
        skip_all
    )]
    pub async fn open_channel(&self) -> Result<Channel, amqprs::error::Error> {
        tracing::info!("opening channel");
        self.connection.open_channel(None).await
    }

    #[tracing::instrument(
        name = "RabbitMQ Connection",
        target = "rabbitmq_client::connection",
        skip_all
    )]
    pub async fn close(self) {
        Self::close_connection(self.connection).await;
    }

    async fn close_connection(connection: Connection) {
        tracing::info!("closing connection");
        match connection.close().await {
            Ok(()) => tracing::info!("connection closed"),
            Err(err) => tracing::warn!(%err, "closing connection failed"),
        }
    }
}
