use crate::core::facade::NotificationFacade;
use crate::core::{Notifier, OutputSink, Result, SharedSink};

pub const ACCESS_CONTROL_LINE: &str = "Access control logic for sending notifications.";

/// Gatekeeper in front of a notifier.
///
/// The facade is built here from the notifier handed in. Every send writes
/// [`ACCESS_CONTROL_LINE`] first and then forwards; the check always passes.
pub struct NotificationProxy<N: Notifier> {
    facade: NotificationFacade<N>,
    sink: SharedSink,
}

impl<N: Notifier> NotificationProxy<N> {
    pub fn new(notifier: N, sink: SharedSink) -> Self {
        Self {
            facade: NotificationFacade::new(notifier),
            sink,
        }
    }
}

impl<N: Notifier> Notifier for NotificationProxy<N> {
    fn send(&self, message: &str) -> Result<()> {
        self.sink.write_line(ACCESS_CONTROL_LINE)?;
        tracing::debug!("proxy: access granted for {}", self.facade.inner().name());
        self.facade.send_notification(message)
    }

    fn name(&self) -> &'static str {
        "proxy"
    }
}
