use crate::ReasonCode;
use std::fmt;

///
/// MQI verb that produced an error.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MqCall {
    Connect,
    Open,
    Get,
    Close,
    Disconnect,
}

impl fmt::Display for MqCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            MqCall::Connect => "MQCONNX",
            MqCall::Open => "MQOPEN",
            MqCall::Get => "MQGET",
            MqCall::Close => "MQCLOSE",
            MqCall::Disconnect => "MQDISC",
        };

        f.write_str(verb)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MqError {
    #[error("{call} failed: {reason}")]
    Call { call: MqCall, reason: ReasonCode },

    #[error("not connected to queue manager")]
    NotConnected,

    #[error("queue not opened")]
    QueueNotOpened,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl MqError {
    pub fn call(call: MqCall, reason: ReasonCode) -> Self {
        Self::Call { call, reason }
    }

    pub fn reason(&self) -> Option<ReasonCode> {
        match self {
            Self::Call { reason, .. } => Some(*reason),
            _ => None,
        }
    }

    ///
    /// Get that waited the whole wait interval without receiving anything.
    /// It is the only get outcome that is not an actual failure.
    ///
    pub fn is_no_message_available(&self) -> bool {
        self.reason() == Some(ReasonCode::NO_MSG_AVAILABLE)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn no_message_available_detected() {
        let err = MqError::call(MqCall::Get, ReasonCode::NO_MSG_AVAILABLE);

        assert!(err.is_no_message_available());
    }

    #[test]
    fn other_reason_is_not_no_message_available() {
        let err = MqError::call(MqCall::Get, ReasonCode::CONNECTION_BROKEN);

        assert!(!err.is_no_message_available());
        assert!(!MqError::QueueNotOpened.is_no_message_available());
    }

    #[test]
    fn display_contains_call_and_reason() {
        let err = MqError::call(MqCall::Open, ReasonCode::UNKNOWN_OBJECT_NAME);

        assert_eq!(
            err.to_string(),
            "MQOPEN failed: MQRC_UNKNOWN_OBJECT_NAME (2085)"
        );
    }
}
