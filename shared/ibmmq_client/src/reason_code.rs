use std::fmt;

///
/// MQ reason code returned alongside a failed or warning completion code.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReasonCode(pub i32);

impl ReasonCode {
    pub const NONE: Self = Self(0);
    pub const CONNECTION_BROKEN: Self = Self(2009);
    pub const NO_MSG_AVAILABLE: Self = Self(2033);
    pub const NOT_AUTHORIZED: Self = Self(2035);
    pub const Q_MGR_NAME_ERROR: Self = Self(2058);
    pub const Q_MGR_NOT_AVAILABLE: Self = Self(2059);
    pub const TRUNCATED_MSG_ACCEPTED: Self = Self(2079);
    pub const TRUNCATED_MSG_FAILED: Self = Self(2080);
    pub const UNKNOWN_OBJECT_NAME: Self = Self(2085);
    pub const HOST_NOT_AVAILABLE: Self = Self(2538);

    pub fn name(&self) -> Option<&'static str> {
        let name = match *self {
            Self::NONE => "MQRC_NONE",
            Self::CONNECTION_BROKEN => "MQRC_CONNECTION_BROKEN",
            Self::NO_MSG_AVAILABLE => "MQRC_NO_MSG_AVAILABLE",
            Self::NOT_AUTHORIZED => "MQRC_NOT_AUTHORIZED",
            Self::Q_MGR_NAME_ERROR => "MQRC_Q_MGR_NAME_ERROR",
            Self::Q_MGR_NOT_AVAILABLE => "MQRC_Q_MGR_NOT_AVAILABLE",
            Self::TRUNCATED_MSG_ACCEPTED => "MQRC_TRUNCATED_MSG_ACCEPTED",
            Self::TRUNCATED_MSG_FAILED => "MQRC_TRUNCATED_MSG_FAILED",
            Self::UNKNOWN_OBJECT_NAME => "MQRC_UNKNOWN_OBJECT_NAME",
            Self::HOST_NOT_AVAILABLE => "MQRC_HOST_NOT_AVAILABLE",
            _ => return None,
        };

        Some(name)
    }
}

impl fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{name} ({})", self.0),
            None => write!(f, "{}", self.0),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display_known_reason_code() {
        assert_eq!(
            ReasonCode::NO_MSG_AVAILABLE.to_string(),
            "MQRC_NO_MSG_AVAILABLE (2033)"
        );
    }

    #[test]
    fn display_unknown_reason_code() {
        assert_eq!(ReasonCode(9999).to_string(), "9999");
    }
}
