use super::{MqReceiverConfig, MqReceiverDeliveryCallback};
use crate::{dto::ReceivedMessage, MqError, MqSession};

///
/// Receiver that owns session for the whole receive loop.
///
/// Queue is closed and session disconnected exactly once
/// after they were successfully opened, whatever ends the loop.
///
pub struct MqReceiver<S> {
    config: MqReceiverConfig,
    session: S,
}

impl<S> MqReceiver<S>
where
    S: MqSession,
{
    pub fn new(config: MqReceiverConfig, session: S) -> Self {
        Self { config, session }
    }

    ///
    /// Connects, opens queue and delivers messages to the callback
    /// until get fails with anything else than no message available.
    ///
    /// ### Errors
    /// Returns setup errors (connect, open).
    /// Error that terminates the receive loop is only logged.
    ///
    #[tracing::instrument(
        name = "IBM MQ Receiver",
        target = "ibmmq_client::receiver",
        skip_all
    )]
    pub async fn run<C>(mut self, mut callback: C) -> Result<(), MqError>
    where
        C: MqReceiverDeliveryCallback,
    {
        let connection = &self.config.connection;
        tracing::info!(
            queue_manager = connection.queue_manager,
            channel = connection.channel,
            connection_name = %connection.connection_name,
            "connecting to queue manager"
        );
        self.session.connect(connection).await?;
        tracing::info!("connected to queue manager");

        tracing::info!(queue = self.config.queue_name, "opening queue");
        if let Err(err) = self.session.open_queue(&self.config.queue_name).await {
            self.disconnect().await;
            return Err(err);
        }
        tracing::info!(queue = self.config.queue_name, "listening for messages");

        let err = self.receive_loop(&mut callback).await;
        tracing::error!(%err, "error reading message");

        self.close_queue().await;
        self.disconnect().await;

        Ok(())
    }

    ///
    /// Infinite loop that ends with the first error
    /// that isn't no message available.
    ///
    async fn receive_loop<C>(&mut self, callback: &mut C) -> MqError
    where
        C: MqReceiverDeliveryCallback,
    {
        let mut buffer = vec![0; self.config.buffer_size];

        loop {
            match self.receive(&mut buffer).await {
                Ok(message) => {
                    if message.is_truncated() {
                        tracing::warn!(
                            data_length = message.data_length,
                            buffer_size = buffer.len(),
                            "message truncated"
                        );
                    }
                    callback.execute(message);
                }
                Err(err) => return err,
            }
        }
    }

    async fn receive(&mut self, buffer: &mut [u8]) -> Result<ReceivedMessage, MqError> {
        let mut attempt = 0;

        loop {
            attempt += 1;

            tracing::trace!(attempt, "getting message");
            match self.session.get(&self.config.get_options, buffer).await {
                Ok(data_length) => {
                    let received_len = data_length.min(buffer.len());
                    tracing::debug!(attempt, data_length, "message received");

                    return Ok(ReceivedMessage {
                        data: buffer[..received_len].to_vec(),
                        data_length,
                    });
                }
                Err(err) if err.is_no_message_available() => {
                    tracing::info!(attempt, "no messages available, waiting");
                    tokio::time::sleep(self.config.retry_interval).await;
                }
                Err(err) => return Err(err),
            }
        }
    }

    async fn close_queue(&mut self) {
        tracing::info!("closing queue");
        match self.session.close_queue().await {
            Ok(()) => tracing::info!("queue closed"),
            Err(err) => tracing::warn!(%err, "closing queue failed"),
        }
    }

    async fn disconnect(&mut self) {
        tracing::info!("disconnecting from queue manager");
        match self.session.disconnect().await {
            Ok(()) => tracing::info!("disconnected"),
            Err(err) => tracing::warn!(%err, "disconnecting failed"),
        }
    }
}
