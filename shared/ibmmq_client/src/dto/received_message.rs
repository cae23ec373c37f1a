use std::borrow::Cow;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivedMessage {
    /// Bytes that fit into the receive buffer
    pub data: Vec<u8>,
    /// Length of the whole message as reported by the queue manager
    pub data_length: usize,
}

impl ReceivedMessage {
    pub fn is_truncated(&self) -> bool {
        self.data_length > self.data.len()
    }

    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.data)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn message_shorter_than_buffer_not_truncated() {
        let message = ReceivedMessage {
            data: b"hello".to_vec(),
            data_length: 5,
        };

        assert!(!message.is_truncated());
        assert_eq!(message.text(), "hello");
    }

    #[test]
    fn message_longer_than_data_truncated() {
        let message = ReceivedMessage {
            data: vec![b'a'; 1024],
            data_length: 2048,
        };

        assert!(message.is_truncated());
    }

    #[test]
    fn invalid_utf8_replaced() {
        let message = ReceivedMessage {
            data: vec![b'o', b'k', 0xff],
            data_length: 3,
        };

        assert_eq!(message.text(), "ok\u{fffd}");
    }
}
