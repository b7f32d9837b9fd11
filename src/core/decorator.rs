use crate::core::{Notifier, Result};
use std::borrow::Cow;

pub const URGENT_PREFIX: &str = "Urgent! ";

/// Transform applied by a [`NotificationDecorator`] before it forwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoration {
    /// Forward unchanged.
    Passthrough,
    /// Prefix the message with [`URGENT_PREFIX`].
    Urgent,
}

impl Decoration {
    pub fn apply<'a>(&self, message: &'a str) -> Cow<'a, str> {
        match self {
            Decoration::Passthrough => Cow::Borrowed(message),
            Decoration::Urgent => Cow::Owned(format!("{}{}", URGENT_PREFIX, message)),
        }
    }
}

/// Wraps a notifier and transforms each message before forwarding it.
///
/// Decorators stack: the outermost layer transforms first and every layer
/// forwards exactly once, so `k` urgent layers yield `k` prefixes.
pub struct NotificationDecorator<N: Notifier> {
    inner: N,
    decoration: Decoration,
}

impl<N: Notifier> NotificationDecorator<N> {
    pub fn new(inner: N, decoration: Decoration) -> Self {
        Self { inner, decoration }
    }

    pub fn passthrough(inner: N) -> Self {
        Self::new(inner, Decoration::Passthrough)
    }

    pub fn urgent(inner: N) -> Self {
        Self::new(inner, Decoration::Urgent)
    }

    pub fn decoration(&self) -> Decoration {
        self.decoration
    }

    pub fn inner(&self) -> &N {
        &self.inner
    }

    pub fn into_inner(self) -> N {
        self.inner
    }
}

impl<N: Notifier> Notifier for NotificationDecorator<N> {
    fn send(&self, message: &str) -> Result<()> {
        let message = self.decoration.apply(message);
        tracing::debug!(
            "decorator({:?}) forwarding to {}",
            self.decoration,
            self.inner.name()
        );
        self.inner.send(&message)
    }

    fn name(&self) -> &'static str {
        match self.decoration {
            Decoration::Passthrough => "decorator",
            Decoration::Urgent => "urgent-decorator",
        }
    }
}
