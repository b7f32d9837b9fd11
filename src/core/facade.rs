use crate::core::{Notifier, Result};

/// Narrow entry point over one notifier. Adds no behavior of its own.
pub struct NotificationFacade<N: Notifier> {
    notifier: N,
}

impl<N: Notifier> NotificationFacade<N> {
    pub fn new(notifier: N) -> Self {
        Self { notifier }
    }

    pub fn send_notification(&self, message: &str) -> Result<()> {
        tracing::debug!("facade forwarding to {}", self.notifier.name());
        self.notifier.send(message)
    }

    pub fn inner(&self) -> &N {
        &self.notifier
    }

    pub fn into_inner(self) -> N {
        self.notifier
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemorySink;
    use crate::core::decorator::NotificationDecorator;
    use crate::core::notifiers::EmailNotification;
    use std::sync::Arc;

    #[test]
    fn test_facade_output_matches_direct_send() {
        let sink = Arc::new(MemorySink::new());
        let email = EmailNotification::new(sink.clone());
        let facade = NotificationFacade::new(&email);

        email.send("same message").unwrap();
        facade.send_notification("same message").unwrap();

        let lines = sink.lines().unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], lines[1]);
    }

    #[test]
    fn test_facade_preserves_wrapped_transform() {
        let sink = Arc::new(MemorySink::new());
        let urgent = NotificationDecorator::urgent(EmailNotification::new(sink.clone()));
        let facade = NotificationFacade::new(urgent);

        facade.send_notification("x").unwrap();

        assert_eq!(
            sink.lines().unwrap(),
            vec!["Sending email notification: Urgent! x"]
        );
        assert_eq!(facade.inner().name(), "urgent-decorator");
    }
}
