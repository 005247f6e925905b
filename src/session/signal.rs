use std::fmt;

/// Handle returned by [`Signal::subscribe`], used to remove the subscriber
/// again.
pub type SubscriptionId = u32;

/// A synchronous observable with latest-value-replay semantics.
///
/// Subscribers are plain callbacks. A new subscriber is immediately invoked
/// with the current value, and every [`emit`](Signal::emit) notifies all
/// subscribers before returning. There is no buffering: a late subscriber
/// only ever sees the latest value, then everything emitted afterwards.
///
/// Signals are single-threaded on purpose; the session that owns them runs
/// on one logical thread of control.
pub struct Signal<T> {
    latest: T,
    subscribers: Vec<(SubscriptionId, Box<dyn FnMut(&T)>)>,
    next_subscription: SubscriptionId,
}

impl<T> Signal<T> {
    pub fn new(initial: T) -> Self {
        Self {
            latest: initial,
            subscribers: Vec::new(),
            next_subscription: 1,
        }
    }

    /// The most recently emitted value (or the initial one).
    pub fn latest(&self) -> &T {
        &self.latest
    }

    /// Registers a subscriber and immediately replays the latest value to it.
    pub fn subscribe(&mut self, mut subscriber: impl FnMut(&T) + 'static) -> SubscriptionId {
        subscriber(&self.latest);
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Removes a subscriber. Unknown ids are ignored.
    pub fn unsubscribe(&mut self, subscription: SubscriptionId) {
        self.subscribers.retain(|(id, _)| *id != subscription);
    }

    /// Stores `value` as the latest and synchronously notifies every
    /// subscriber.
    pub fn emit(&mut self, value: T) {
        self.latest = value;
        for (_, subscriber) in &mut self.subscribers {
            subscriber(&self.latest);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl<T: fmt::Debug> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("latest", &self.latest)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
