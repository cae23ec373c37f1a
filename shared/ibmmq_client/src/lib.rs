pub mod dto;
mod error;
mod reason_code;
pub mod receiver;
mod session;

#[cfg(feature = "mqi")]
mod mqi_session;

pub use error::{MqCall, MqError};
pub use reason_code::ReasonCode;
pub use receiver::{MqReceiver, MqReceiverConfig, MqReceiverDeliveryCallback};
pub use session::MqSession;

#[cfg(feature = "mqi")]
pub use mqi_session::MqiSession;
