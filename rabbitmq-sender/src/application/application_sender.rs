use super::ApplicationEnv;
use amqprs::{channel::QueueDeclareArguments, connection::OpenConnectionArguments};
use anyhow::{anyhow, Context};
use rabbitmq_client::{Message, RabbitmqConnection, RabbitmqQueueProducer};

///
/// Connects to the broker and publishes configured message once.
/// Connection is closed on every path after it was opened.
///
pub async fn send(env: &ApplicationEnv) -> anyhow::Result<()> {
    let open_connection_args =
        OpenConnectionArguments::try_from(env.rabbitmq_connection_string.as_str())
            .map_err(|err| anyhow!("invalid RabbitMQ connection string: {err}"))?;

    let rabbitmq_connection = RabbitmqConnection::new(open_connection_args)
        .await
        .context("failed to connect to RabbitMQ")?;

    let result = publish(&rabbitmq_connection, env).await;

    rabbitmq_connection.close().await;

    result
}

async fn publish(rabbitmq_connection: &RabbitmqConnection, env: &ApplicationEnv) -> anyhow::Result<()> {
    let queue_declare_args = QueueDeclareArguments::new(&env.rabbitmq_queue_name)
        .durable(true)
        .exclusive(false)
        .auto_delete(false)
        .finish();
    let producer = RabbitmqQueueProducer::new(
        rabbitmq_connection,
        &env.rabbitmq_queue_name,
        queue_declare_args,
    )
    .await
    .context("failed to open a channel and declare a queue")?;

    let result = producer
        .publish(Message::text_plain(env.message.as_str()))
        .await
        .context("failed to publish a message");

    producer.close().await;

    result?;
    println!("Sent message: {}", env.message);

    Ok(())
}
