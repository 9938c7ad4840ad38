//! Toast notifications with a bounded lifetime
//!
//! The queue itself is passive: the app schedules a dismissal for every
//! enqueued message and `dismiss_expired` acts as a backstop on render.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::constants::MAX_NOTIFICATIONS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Error,
}

#[derive(Clone, Debug)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub level: NotificationLevel,
    expires_at: Instant,
}

impl Notification {
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

pub struct NotificationQueue {
    items: VecDeque<Notification>,
    ttl: Duration,
    next_id: u64,
}

impl NotificationQueue {
    pub fn new(ttl: Duration) -> Self {
        NotificationQueue {
            items: VecDeque::with_capacity(MAX_NOTIFICATIONS),
            ttl,
            next_id: 1,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Add a message and return its id
    pub fn enqueue(&mut self, message: impl Into<String>, level: NotificationLevel) -> u64 {
        self.enqueue_at(message, level, Instant::now())
    }

    fn enqueue_at(&mut self, message: impl Into<String>, level: NotificationLevel, now: Instant) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        if self.items.len() >= MAX_NOTIFICATIONS {
            self.items.pop_front();
        }
        self.items.push_back(Notification {
            id,
            message: message.into(),
            level,
            expires_at: now + self.ttl,
        });
        id
    }

    /// Remove a notification; unknown ids are ignored
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    pub fn dismiss_expired(&mut self, now: Instant) {
        self.items.retain(|n| !n.is_expired(now));
    }

    /// Oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for NotificationQueue {
    fn default() -> Self {
        use crate::constants::DEFAULT_NOTIFICATION_TTL_MS;
        Self::new(Duration::from_millis(DEFAULT_NOTIFICATION_TTL_MS))
    }
}
