//! Status events flowing from the controller to whoever draws the UI.

#[cfg(feature = "rtrb")]
use std::sync::Mutex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ToneError;

/// The two states a controller can be in
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackStatus {
    #[default]
    Idle,
    Playing,
}

impl PlaybackStatus {
    pub fn is_playing(self) -> bool {
        self == PlaybackStatus::Playing
    }
}

/// Notification emitted by a [`PlaybackController`](super::PlaybackController)
#[derive(Debug)]
pub enum PlaybackEvent {
    /// State changed. Finishing and stopping both report `Idle`.
    Status(PlaybackStatus),
    /// The worker failed; a `Status(Idle)` follows
    Failed(ToneError),
}

/// Receives controller events.
///
/// Called from both the control thread and the playback worker, sometimes
/// with the controller's state lock held. Implementations must not call back
/// into the controller.
pub trait PlaybackListener: Send + Sync {
    fn on_event(&self, event: PlaybackEvent);
}

impl<F> PlaybackListener for F
where
    F: Fn(PlaybackEvent) + Send + Sync,
{
    fn on_event(&self, event: PlaybackEvent) {
        self(event)
    }
}

/// Listener that forwards events into an `rtrb` ring for a polling UI.
///
/// The ring is single-producer, so pushes are serialized through a mutex;
/// events are rare enough that this never contends in practice.
#[cfg(feature = "rtrb")]
pub struct EventQueue {
    producer: Mutex<rtrb::Producer<PlaybackEvent>>,
}

#[cfg(feature = "rtrb")]
impl EventQueue {
    /// Create a queue and the consumer end the UI drains
    pub fn new(capacity: usize) -> (Self, rtrb::Consumer<PlaybackEvent>) {
        let (producer, consumer) = rtrb::RingBuffer::new(capacity);
        (
            Self {
                producer: Mutex::new(producer),
            },
            consumer,
        )
    }
}

#[cfg(feature = "rtrb")]
impl PlaybackListener for EventQueue {
    fn on_event(&self, event: PlaybackEvent) {
        let mut producer = self
            .producer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Err(rtrb::PushError::Full(event)) = producer.push(event) {
            tracing::warn!(?event, "event queue full, dropping event");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_listeners() {
        let seen = std::sync::Mutex::new(Vec::new());
        let listener = |event: PlaybackEvent| {
            if let PlaybackEvent::Status(status) = event {
                seen.lock().unwrap().push(status);
            }
        };
        listener.on_event(PlaybackEvent::Status(PlaybackStatus::Playing));
        listener.on_event(PlaybackEvent::Status(PlaybackStatus::Idle));
        assert_eq!(
            *seen.lock().unwrap(),
            vec![PlaybackStatus::Playing, PlaybackStatus::Idle]
        );
    }

    #[test]
    fn default_status_is_idle() {
        assert_eq!(PlaybackStatus::default(), PlaybackStatus::Idle);
        assert!(!PlaybackStatus::Idle.is_playing());
        assert!(PlaybackStatus::Playing.is_playing());
    }

    #[cfg(feature = "rtrb")]
    #[test]
    fn event_queue_delivers_in_order() {
        let (queue, mut rx) = EventQueue::new(4);
        queue.on_event(PlaybackEvent::Status(PlaybackStatus::Playing));
        queue.on_event(PlaybackEvent::Failed(ToneError::Device("gone".into())));
        queue.on_event(PlaybackEvent::Status(PlaybackStatus::Idle));

        assert!(matches!(
            rx.pop(),
            Ok(PlaybackEvent::Status(PlaybackStatus::Playing))
        ));
        assert!(matches!(rx.pop(), Ok(PlaybackEvent::Failed(ToneError::Device(_)))));
        assert!(matches!(rx.pop(), Ok(PlaybackEvent::Status(PlaybackStatus::Idle))));
        assert!(rx.pop().is_err());
    }

    #[cfg(feature = "rtrb")]
    #[test]
    fn full_event_queue_drops_newest() {
        let (queue, mut rx) = EventQueue::new(1);
        queue.on_event(PlaybackEvent::Status(PlaybackStatus::Playing));
        queue.on_event(PlaybackEvent::Status(PlaybackStatus::Idle));

        assert!(matches!(
            rx.pop(),
            Ok(PlaybackEvent::Status(PlaybackStatus::Playing))
        ));
        assert!(rx.pop().is_err());
    }
}
