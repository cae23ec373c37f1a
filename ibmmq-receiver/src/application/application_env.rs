use anyhow::anyhow;
use ibmmq_client::{
    dto::{ConnectionName, GetOptions, MqConnectionConfig, MqCredentials},
    MqReceiverConfig,
};
use std::{str::FromStr, time::Duration};

const DEFAULT_QUEUE_MANAGER: &str = "QM1";
const DEFAULT_QUEUE_NAME: &str = "DEV.QUEUE.1";
const DEFAULT_CHANNEL: &str = "DEV.APP.SVRCONN";
const DEFAULT_CONNECTION_NAME: &str = "localhost(1414)";
const DEFAULT_USER: &str = "mqUser";
const DEFAULT_PASSWORD: &str = "mqPassword";
const DEFAULT_WAIT_INTERVAL_MS: u64 = 3000;
const DEFAULT_RETRY_INTERVAL_MS: u64 = 1000;
const DEFAULT_BUFFER_SIZE: usize = 1024;
/// MQ maximum message length (100 MB)
const MAX_BUFFER_SIZE: usize = 104_857_600;

pub struct ApplicationEnv {
    /// File logging is enabled only when both directory and filename are set
    pub log_directory: Option<String>,
    pub log_filename: Option<String>,

    pub receiver_config: MqReceiverConfig,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("IBMMQ_RECEIVER_LOG_DIRECTORY");
        let log_filename = Self::env_var("IBMMQ_RECEIVER_LOG_FILENAME");
        let queue_manager =
            Self::env_var_or("IBMMQ_RECEIVER_QUEUE_MANAGER", DEFAULT_QUEUE_MANAGER);
        let queue_name = Self::env_var_or("IBMMQ_RECEIVER_QUEUE_NAME", DEFAULT_QUEUE_NAME);
        let channel = Self::env_var_or("IBMMQ_RECEIVER_CHANNEL", DEFAULT_CHANNEL);
        let connection_name: ConnectionName =
            Self::env_var_or("IBMMQ_RECEIVER_CONNECTION_NAME", DEFAULT_CONNECTION_NAME)
                .parse()?;
        let user = Self::env_var_or("IBMMQ_RECEIVER_USER", DEFAULT_USER);
        let password = Self::env_var_or("IBMMQ_RECEIVER_PASSWORD", DEFAULT_PASSWORD);
        let wait_interval = Duration::from_millis(Self::parse_env_var_or(
            "IBMMQ_RECEIVER_WAIT_INTERVAL_MS",
            DEFAULT_WAIT_INTERVAL_MS,
        )?);
        let retry_interval = Duration::from_millis(Self::parse_env_var_or(
            "IBMMQ_RECEIVER_RETRY_INTERVAL_MS",
            DEFAULT_RETRY_INTERVAL_MS,
        )?);
        let buffer_size = Self::parse_env_var_or("IBMMQ_RECEIVER_BUFFER_SIZE", DEFAULT_BUFFER_SIZE)?;

        if queue_name.is_empty() {
            anyhow::bail!("IBMMQ_RECEIVER_QUEUE_NAME must not be empty");
        }
        if buffer_size == 0 {
            anyhow::bail!("IBMMQ_RECEIVER_BUFFER_SIZE must be greater than 0");
        }
        if buffer_size > MAX_BUFFER_SIZE {
            anyhow::bail!("IBMMQ_RECEIVER_BUFFER_SIZE must not exceed {MAX_BUFFER_SIZE}");
        }

        // empty user disables authentication
        let credentials = match user.is_empty() {
            true => None,
            false => Some(MqCredentials { user, password }),
        };

        let receiver_config = MqReceiverConfig {
            connection: MqConnectionConfig {
                queue_manager,
                channel,
                connection_name,
                credentials,
            },
            queue_name,
            get_options: GetOptions {
                wait_interval,
                ..GetOptions::default()
            },
            retry_interval,
            buffer_size,
        };

        Ok(Self {
            log_directory,
            log_filename,
            receiver_config,
        })
    }

    fn env_var(name: &'static str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn env_var_or(name: &'static str, default: &str) -> String {
        Self::env_var(name).unwrap_or_else(|| default.to_string())
    }

    fn parse_env_var_or<T>(name: &'static str, default: T) -> anyhow::Result<T>
    where
        T: FromStr,
    {
        match Self::env_var(name) {
            Some(value) => value
                .parse()
                .map_err(|_| anyhow!("environment variable {name} has invalid value {value:?}")),
            None => Ok(default),
        }
    }
}
