use super::ApplicationEnv;
use anyhow::Context;
use ibmmq_client::{dto::ReceivedMessage, MqReceiver, MqReceiverDeliveryCallback, MqSession};

struct PrintMessageCallback;

impl MqReceiverDeliveryCallback for PrintMessageCallback {
    fn execute(&mut self, message: ReceivedMessage) {
        tracing::debug!(data_length = message.data_length, "message delivered");
        println!("Received Message: {}", message.text());
    }
}

#[cfg(feature = "mqi")]
pub async fn receive(env: ApplicationEnv) -> anyhow::Result<()> {
    receive_with(env, ibmmq_client::MqiSession::new()).await
}

#[cfg(not(feature = "mqi"))]
pub async fn receive(_env: ApplicationEnv) -> anyhow::Result<()> {
    anyhow::bail!("built without MQI client support, rebuild with `--features mqi`")
}

///
/// Receives messages until the receive loop stops.
///
/// ### Errors
/// Returns an error when connecting or opening queue fails
///
#[cfg_attr(not(feature = "mqi"), allow(dead_code))]
pub async fn receive_with<S>(env: ApplicationEnv, session: S) -> anyhow::Result<()>
where
    S: MqSession,
{
    let queue_manager = env.receiver_config.connection.queue_manager.clone();
    let queue_name = env.receiver_config.queue_name.clone();

    MqReceiver::new(env.receiver_config, session)
        .run(PrintMessageCallback)
        .await
        .with_context(|| {
            format!("failed to receive from queue {queue_name} on queue manager {queue_manager}")
        })
}

#[cfg(test)]
mod test {
    use super::*;
    use ibmmq_client::{
        dto::{GetOptions, MqConnectionConfig},
        MqCall, MqError, MqReceiverConfig, ReasonCode,
    };
    use std::{
        sync::{Arc, Mutex},
        time::Duration,
    };

    ///
    /// Session that records called verbs and fails on the configured one
    ///
    #[derive(Clone, Default)]
    struct RecordingSession {
        calls: Arc<Mutex<Vec<MqCall>>>,
        fail_on: Option<MqCall>,
    }

    impl RecordingSession {
        fn record(&self, call: MqCall) -> Result<(), MqError> {
            self.calls.lock().unwrap().push(call);
            match self.fail_on == Some(call) {
                true => Err(MqError::call(call, ReasonCode::HOST_NOT_AVAILABLE)),
                false => Ok(()),
            }
        }
    }

    #[async_trait::async_trait]
    impl MqSession for RecordingSession {
        async fn connect(&mut self, _config: &MqConnectionConfig) -> Result<(), MqError> {
            self.record(MqCall::Connect)
        }

        async fn open_queue(&mut self, _queue_name: &str) -> Result<(), MqError> {
            self.record(MqCall::Open)
        }

        async fn get(
            &mut self,
            _options: &GetOptions,
            _buffer: &mut [u8],
        ) -> Result<usize, MqError> {
            self.record(MqCall::Get)?;
            Err(MqError::call(MqCall::Get, ReasonCode::CONNECTION_BROKEN))
        }

        async fn close_queue(&mut self) -> Result<(), MqError> {
            self.record(MqCall::Close)
        }

        async fn disconnect(&mut self) -> Result<(), MqError> {
            self.record(MqCall::Disconnect)
        }
    }

    fn env() -> ApplicationEnv {
        ApplicationEnv {
            log_directory: None,
            log_filename: None,
            receiver_config: MqReceiverConfig {
                connection: MqConnectionConfig {
                    queue_manager: "QM1".to_string(),
                    channel: "DEV.APP.SVRCONN".to_string(),
                    connection_name: "localhost(1414)".parse().unwrap(),
                    credentials: None,
                },
                queue_name: "DEV.QUEUE.1".to_string(),
                get_options: GetOptions::default(),
                retry_interval: Duration::from_secs(1),
                buffer_size: 1024,
            },
        }
    }

    #[tokio::test]
    async fn connect_failure_returns_error_without_queue_operations() {
        let session = RecordingSession {
            fail_on: Some(MqCall::Connect),
            ..Default::default()
        };
        let calls = Arc::clone(&session.calls);

        let result = receive_with(env(), session).await;

        assert!(result.is_err());
        assert_eq!(*calls.lock().unwrap(), vec![MqCall::Connect]);
    }

    #[tokio::test]
    async fn broken_get_ends_with_cleanup() {
        let session = RecordingSession::default();
        let calls = Arc::clone(&session.calls);

        let result = receive_with(env(), session).await;

        assert!(result.is_ok());
        assert_eq!(
            *calls.lock().unwrap(),
            vec![
                MqCall::Connect,
                MqCall::Open,
                MqCall::Get,
                MqCall::Close,
                MqCall::Disconnect
            ]
        );
    }
}
