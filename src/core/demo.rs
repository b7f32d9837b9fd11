use crate::core::adapter::SmsNotificationAdapter;
use crate::core::decorator::NotificationDecorator;
use crate::core::facade::NotificationFacade;
use crate::core::notifiers::{EmailNotification, SmsNotification};
use crate::core::proxy::NotificationProxy;
use crate::core::{Notifier, Result, SharedSink};

pub const BASIC_MESSAGE: &str = "This is a basic notification.";
pub const URGENT_MESSAGE: &str = "This is an urgent notification.";
pub const PROXIED_MESSAGE: &str = "This is a proxied SMS notification.";

/// Builds the fixed notifier compositions and runs them in order.
pub struct NotificationDemo {
    sink: SharedSink,
}

impl NotificationDemo {
    pub fn new(sink: SharedSink) -> Self {
        Self { sink }
    }

    pub fn run(&self) -> Result<()> {
        tracing::info!("Starting notification demo");

        let email = EmailNotification::new(self.sink.clone());
        let sms = SmsNotification::new(self.sink.clone());
        let adapted_sms = SmsNotificationAdapter::new(sms);

        tracing::info!("Step 1: facade over email");
        let basic = NotificationFacade::new(email.clone());
        basic.send_notification(BASIC_MESSAGE)?;

        tracing::info!("Step 2: stacked urgent decorators over email");
        let urgent = NotificationDecorator::urgent(email);
        let very_urgent = NotificationDecorator::urgent(urgent);
        very_urgent.send(URGENT_MESSAGE)?;

        tracing::info!("Step 3: proxy over adapted sms");
        let proxied = NotificationProxy::new(adapted_sms, self.sink.clone());
        proxied.send(PROXIED_MESSAGE)?;

        tracing::info!("Notification demo finished");
        Ok(())
    }
}
