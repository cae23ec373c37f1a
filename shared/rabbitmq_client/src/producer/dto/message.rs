use amqprs::BasicProperties;

pub struct Message {
    pub content_type: String,
    pub content: Vec<u8>,
}

impl Message {
    pub fn text_plain(content: impl Into<String>) -> Self {
        Self {
            content_type: "text/plain".to_string(),
            content: content.into().into_bytes(),
        }
    }

    pub fn basic_properties(&self) -> BasicProperties {
        BasicProperties::default()
            .with_content_type(&self.content_type)
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn text_plain_sets_content_type() {
        let message = Message::text_plain("Hello, RabbitMQ!");

        assert_eq!(message.content_type, "text/plain");
        assert_eq!(message.content, b"Hello, RabbitMQ!");
    }

    #[test]
    fn basic_properties_carry_content_type() {
        let message = Message {
            content_type: "application/octet-stream".to_string(),
            content: vec![0, 1, 2],
        };

        let properties = message.basic_properties();

        assert_eq!(
            properties.content_type().map(String::as_str),
            Some("application/octet-stream")
        );
    }
}
