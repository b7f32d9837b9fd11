pub mod adapters;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{MemorySink, StdoutSink};
pub use crate::core::{
    adapter::SmsNotificationAdapter,
    decorator::{Decoration, NotificationDecorator},
    demo::NotificationDemo,
    facade::NotificationFacade,
    notifiers::{EmailNotification, SmsNotification},
    proxy::NotificationProxy,
};
pub use crate::domain::ports::{Notifier, OutputSink, SharedSink};
pub use crate::utils::error::{NotifyError, Result};
