use super::ConnectionName;

#[derive(Clone)]
pub struct MqCredentials {
    pub user: String,
    pub password: String,
}

impl std::fmt::Debug for MqCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MqCredentials")
            .field("user", &self.user)
            .field("password", &"***")
            .finish()
    }
}

///
/// Parameters of a client bound connection to a queue manager.
///
#[derive(Debug, Clone)]
pub struct MqConnectionConfig {
    pub queue_manager: String,
    pub channel: String,
    pub connection_name: ConnectionName,
    /// None means no MQCSP authentication
    pub credentials: Option<MqCredentials>,
}
