use crate::core::{Notifier, OutputSink, Result, SharedSink};

#[derive(Clone)]
pub struct EmailNotification {
    sink: SharedSink,
}

impl EmailNotification {
    pub fn new(sink: SharedSink) -> Self {
        Self { sink }
    }
}

impl Notifier for EmailNotification {
    fn send(&self, message: &str) -> Result<()> {
        tracing::debug!("email: delivering {} bytes", message.len());
        self.sink
            .write_line(&format!("Sending email notification: {}", message))
    }

    fn name(&self) -> &'static str {
        "email"
    }
}

/// SMS channel with its own entry point. It does not implement [`Notifier`];
/// see [`crate::core::adapter::SmsNotificationAdapter`].
#[derive(Clone)]
pub struct SmsNotification {
    sink: SharedSink,
}

impl SmsNotification {
    pub fn new(sink: SharedSink) -> Self {
        Self { sink }
    }

    pub fn send_sms(&self, text: &str) -> Result<()> {
        tracing::debug!("sms: delivering {} bytes", text.len());
        self.sink
            .write_line(&format!("Sending SMS notification: {}", text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemorySink;
    use std::sync::Arc;

    #[test]
    fn test_email_writes_message_verbatim() {
        let sink = Arc::new(MemorySink::new());
        let email = EmailNotification::new(sink.clone());

        email.send("hello").unwrap();
        email.send("").unwrap();

        assert_eq!(
            sink.lines().unwrap(),
            vec![
                "Sending email notification: hello",
                "Sending email notification: ",
            ]
        );
    }

    #[test]
    fn test_sms_writes_text_verbatim() {
        let sink = Arc::new(MemorySink::new());
        let sms = SmsNotification::new(sink.clone());

        sms.send_sms("Urgent! {braces} stay").unwrap();

        assert_eq!(
            sink.lines().unwrap(),
            vec!["Sending SMS notification: Urgent! {braces} stay"]
        );
    }
}
