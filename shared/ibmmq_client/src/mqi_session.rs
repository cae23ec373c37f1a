use crate::{
    dto::{GetOptions, MqConnectionConfig},
    MqCall, MqError, MqSession, ReasonCode,
};
use async_trait::async_trait;
use libmqm_sys::link::LinkedMq;
use mqi::{
    connection::{Credentials, MqServer, ThreadBlock},
    constants,
    get::{GetAttr, GetConvert, GetParam, GetState, GetWait},
    prelude::*,
    result::{Error, ResultComp},
    traits::Buffer,
    types::{ProtectedSecret, QueueManagerName, QueueName},
    Connection, Object,
};
use std::sync::Arc;

type MqiConnection = Arc<Connection<LinkedMq, ThreadBlock>>;

///
/// [MqSession] over the native MQI client library.
///
/// MQI calls are blocking, they run on the current worker thread
/// with [tokio::task::block_in_place], so multi threaded runtime is required.
///
#[derive(Default)]
pub struct MqiSession {
    connection: Option<MqiConnection>,
    queue: Option<Object<MqiConnection>>,
}

impl MqiSession {
    pub fn new() -> Self {
        Self::default()
    }
}

///
/// Full length of the message, the data written into the buffer
/// is cut to the buffer size when the message is truncated.
///
struct MessageLength(usize);

impl<'b, R> GetAttr<'b, R> for MessageLength {
    fn get_extract<F, B>(param: &mut GetParam, get: F) -> ResultComp<(Self, GetState<B>)>
    where
        F: FnOnce(&mut GetParam) -> ResultComp<GetState<B>>,
        B: Buffer<'b, R>,
    {
        get(param).map_completion(|state| (Self(state.message_length), state))
    }
}

fn mq_error(call: MqCall, err: Error) -> MqError {
    let Error(_cc, _verb, rc) = err;
    MqError::call(call, ReasonCode(rc.0))
}

fn invalid_config(field: &'static str, value: &str) -> MqError {
    MqError::InvalidConfig(format!("{field} {value:?} is not a valid MQ name"))
}

#[async_trait]
impl MqSession for MqiSession {
    async fn connect(&mut self, config: &MqConnectionConfig) -> Result<(), MqError> {
        let queue_manager_name: QueueManagerName = config
            .queue_manager
            .parse()
            .map_err(|_| invalid_config("queue manager", &config.queue_manager))?;

        // MQSERVER syntax: CHANNEL/TRANSPORT/CONNECTION_NAME
        let server = format!("{}/TCP/{}", config.channel, config.connection_name);
        let server = MqServer::try_from(server.as_str())
            .map_err(|_| invalid_config("client channel", &server))?;

        let credentials = config
            .credentials
            .as_ref()
            .map(|credentials| {
                Credentials::User(
                    credentials.user.as_str(),
                    ProtectedSecret::new(credentials.password.as_str()),
                )
            });

        let connection = tokio::task::block_in_place(|| {
            mqi::connect::<ThreadBlock>(&(queue_manager_name, server, credentials))
        })
        .discard_warning()
        .map_err(|err| mq_error(MqCall::Connect, err))?;

        self.connection = Some(Arc::new(connection));

        Ok(())
    }

    async fn open_queue(&mut self, queue_name: &str) -> Result<(), MqError> {
        let connection = self.connection.as_ref().ok_or(MqError::NotConnected)?;
        let queue_name: QueueName = queue_name
            .parse()
            .map_err(|_| invalid_config("queue", queue_name))?;

        let queue = tokio::task::block_in_place(|| {
            Object::open(
                connection.clone(),
                &(
                    queue_name,
                    constants::MQOO_INPUT_AS_Q_DEF | constants::MQOO_FAIL_IF_QUIESCING,
                ),
            )
        })
        .discard_warning()
        .map_err(|err| mq_error(MqCall::Open, err))?;

        self.queue = Some(queue);

        Ok(())
    }

    async fn get(&mut self, options: &GetOptions, buffer: &mut [u8]) -> Result<usize, MqError> {
        let queue = self.queue.as_ref().ok_or(MqError::QueueNotOpened)?;

        let wait_ms = i32::try_from(options.wait_interval.as_millis()).unwrap_or(i32::MAX);
        let mut gmo = constants::MQGMO_FAIL_IF_QUIESCING;
        if options.accept_truncated {
            gmo |= constants::MQGMO_ACCEPT_TRUNCATED_MSG;
        }
        let convert = match options.convert {
            true => GetConvert::Convert,
            false => GetConvert::NoConvert,
        };

        let get_options = (GetWait::Wait(wait_ms), convert, gmo);
        let completion = tokio::task::block_in_place(|| {
            queue.get_data_with::<MessageLength, _>(&get_options, buffer)
        })
        .map_err(|err| mq_error(MqCall::Get, err))?;

        // a message that didn't fit without MQGMO_ACCEPT_TRUNCATED_MSG stays on the queue
        if let Some((rc, verb)) = completion.warning() {
            tracing::debug!("{verb} completed with warning {}", ReasonCode(rc.0));
            if rc == constants::MQRC_TRUNCATED_MSG_FAILED {
                return Err(MqError::call(MqCall::Get, ReasonCode::TRUNCATED_MSG_FAILED));
            }
        }

        // mqi reports no message available as an empty result
        match completion.discard_warning() {
            Some((_data, MessageLength(length))) => Ok(length),
            None => Err(MqError::call(MqCall::Get, ReasonCode::NO_MSG_AVAILABLE)),
        }
    }

    async fn close_queue(&mut self) -> Result<(), MqError> {
        let queue = self.queue.take().ok_or(MqError::QueueNotOpened)?;

        tokio::task::block_in_place(|| queue.close())
            .discard_warning()
            .map_err(|err| mq_error(MqCall::Close, err))
    }

    async fn disconnect(&mut self) -> Result<(), MqError> {
        // an object left open holds the other reference, dropping it closes it
        drop(self.queue.take());
        let connection = self
            .connection
            .take()
            .and_then(Arc::into_inner)
            .ok_or(MqError::NotConnected)?;

        tokio::task::block_in_place(|| connection.disconnect())
            .discard_warning()
            .map_err(|err| mq_error(MqCall::Disconnect, err))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::dto::{ConnectionName, MqCredentials};

    fn assert_mq_session<S: MqSession + 'static>() {}

    fn connection_config(queue_manager: &str) -> MqConnectionConfig {
        MqConnectionConfig {
            queue_manager: queue_manager.to_string(),
            channel: "DEV.APP.SVRCONN".to_string(),
            connection_name: ConnectionName {
                host: "localhost".to_string(),
                port: 1414,
            },
            credentials: Some(MqCredentials {
                user: "mqUser".to_string(),
                password: "mqPassword".to_string(),
            }),
        }
    }

    #[test]
    fn mqi_session_is_mq_session() {
        assert_mq_session::<MqiSession>();
    }

    #[tokio::test]
    async fn too_long_queue_manager_name_rejected_before_connecting() {
        let mut session = MqiSession::new();
        let config = connection_config(&"Q".repeat(49));

        let result = session.connect(&config).await;

        assert!(matches!(result, Err(MqError::InvalidConfig(_))));
    }

    #[tokio::test]
    async fn open_queue_without_connection_fails() {
        let mut session = MqiSession::new();

        let result = session.open_queue("DEV.QUEUE.1").await;

        assert!(matches!(result, Err(MqError::NotConnected)));
    }

    #[tokio::test]
    async fn get_without_open_queue_fails() {
        let mut session = MqiSession::new();
        let mut buffer = [0; 16];

        let result = session.get(&GetOptions::default(), &mut buffer).await;

        assert!(matches!(result, Err(MqError::QueueNotOpened)));
    }

    #[tokio::test]
    async fn disconnect_without_connection_fails() {
        let mut session = MqiSession::new();

        let result = session.disconnect().await;

        assert!(matches!(result, Err(MqError::NotConnected)));
    }
}
