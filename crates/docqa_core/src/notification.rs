use std::time::Duration;

use crate::Effect;

pub const DEFAULT_NOTIFICATION_DURATION: Duration = Duration::from_millis(3000);

/// Holds at most one visible transient message.
///
/// Each `show` supersedes the current message immediately and bumps the
/// generation. A clear request only takes effect when it carries the current
/// generation, so the timer of a superseded message never blanks a newer one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationService {
    message: Option<String>,
    generation: u64,
    default_duration: Duration,
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::with_default_duration(DEFAULT_NOTIFICATION_DURATION)
    }
}

impl NotificationService {
    pub fn with_default_duration(default_duration: Duration) -> Self {
        Self {
            message: None,
            generation: 0,
            default_duration,
        }
    }

    /// Shows `message` for the default duration.
    pub fn show(&mut self, message: impl Into<String>) -> Effect {
        self.show_for(message, self.default_duration)
    }

    /// Shows `message` and returns the timer effect that will clear it.
    pub fn show_for(&mut self, message: impl Into<String>, duration: Duration) -> Effect {
        self.generation = self.generation.wrapping_add(1);
        self.message = Some(message.into());
        Effect::ScheduleNotificationClear {
            generation: self.generation,
            after: duration,
        }
    }

    /// Clears the message if `generation` is current. Returns whether
    /// anything visible changed.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.message.is_none() {
            return false;
        }
        self.message = None;
        true
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn default_duration(&self) -> Duration {
        self.default_duration
    }
}
