use crate::core::notifiers::SmsNotification;
use crate::core::{Notifier, Result};

/// Lets an [`SmsNotification`] stand in wherever a [`Notifier`] is expected.
#[derive(Clone)]
pub struct SmsNotificationAdapter {
    sms: SmsNotification,
}

impl SmsNotificationAdapter {
    pub fn new(sms: SmsNotification) -> Self {
        Self { sms }
    }

    pub fn into_inner(self) -> SmsNotification {
        self.sms
    }
}

impl Notifier for SmsNotificationAdapter {
    fn send(&self, message: &str) -> Result<()> {
        self.sms.send_sms(message)
    }

    fn name(&self) -> &'static str {
        "sms-adapter"
    }
}
