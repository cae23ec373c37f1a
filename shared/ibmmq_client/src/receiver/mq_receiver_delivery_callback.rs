use crate::dto::ReceivedMessage;

#[cfg_attr(test, mockall::automock)]
pub trait MqReceiverDeliveryCallback: Send {
    fn execute(&mut self, message: ReceivedMessage);
}
