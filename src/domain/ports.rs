use crate::utils::error::Result;
use std::sync::Arc;

/// Line-oriented destination for everything a notifier emits.
pub trait OutputSink: Send + Sync {
    fn write_line(&self, line: &str) -> Result<()>;
}

pub type SharedSink = Arc<dyn OutputSink>;

/// The common "send a message" capability.
///
/// Every wrapper in [`crate::core`] implements this by forwarding to an
/// owned inner notifier, so compositions nest freely.
pub trait Notifier: Send + Sync {
    fn send(&self, message: &str) -> Result<()>;

    /// Short identifier used in diagnostics.
    fn name(&self) -> &'static str;
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn send(&self, message: &str) -> Result<()> {
        (**self).send(message)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<N: Notifier + ?Sized> Notifier for Box<N> {
    fn send(&self, message: &str) -> Result<()> {
        (**self).send(message)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<N: Notifier + ?Sized> Notifier for Arc<N> {
    fn send(&self, message: &str) -> Result<()> {
        (**self).send(message)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
