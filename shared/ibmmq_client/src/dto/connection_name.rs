use crate::MqError;
use std::{fmt, str::FromStr};

///
/// Client connection name in MQ notation: `host(port)`.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionName {
    pub host: String,
    pub port: u16,
}

impl FromStr for ConnectionName {
    type Err = MqError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MqError::InvalidConfig(format!("invalid connection name {s:?}"));

        let (host, rest) = s.trim().split_once('(').ok_or_else(invalid)?;
        let port = rest.strip_suffix(')').ok_or_else(invalid)?;
        if host.is_empty() {
            return Err(invalid());
        }
        let port = port.trim().parse().map_err(|_| invalid())?;

        Ok(Self {
            host: host.to_string(),
            port,
        })
    }
}

impl fmt::Display for ConnectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.host, self.port)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_host_and_port() {
        let name: ConnectionName = "localhost(1414)".parse().unwrap();

        assert_eq!(name.host, "localhost");
        assert_eq!(name.port, 1414);
        assert_eq!(name.to_string(), "localhost(1414)");
    }

    #[test]
    fn parse_missing_parentheses_fails() {
        assert!("localhost:1414".parse::<ConnectionName>().is_err());
        assert!("localhost(1414".parse::<ConnectionName>().is_err());
    }

    #[test]
    fn parse_empty_host_fails() {
        assert!("(1414)".parse::<ConnectionName>().is_err());
    }

    #[test]
    fn parse_port_out_of_range_fails() {
        assert!("mqhost(70000)".parse::<ConnectionName>().is_err());
        assert!("mqhost()".parse::<ConnectionName>().is_err());
    }
}
