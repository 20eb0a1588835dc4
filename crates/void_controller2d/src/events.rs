//! Trigger notifications
//!
//! The host reports overlaps between the actor's trigger volume and other
//! volumes. Events are forwarded as-is to registered callbacks and to any
//! channel subscribers, in the order the host delivered them.

use crossbeam_channel::{Receiver, Sender};
use serde::{Deserialize, Serialize};

/// Opaque reference to the other volume, owned by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TriggerRef(pub u64);

/// Type of trigger event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriggerEventType {
    /// Overlap began
    Enter,
    /// Overlap continues (every tick)
    Stay,
    /// Overlap ended
    Exit,
}

/// A trigger event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerEvent {
    pub event_type: TriggerEventType,
    /// The volume overlapping the actor
    pub other: TriggerRef,
}

impl TriggerEvent {
    pub fn enter(other: TriggerRef) -> Self {
        Self {
            event_type: TriggerEventType::Enter,
            other,
        }
    }

    pub fn stay(other: TriggerRef) -> Self {
        Self {
            event_type: TriggerEventType::Stay,
            other,
        }
    }

    pub fn exit(other: TriggerRef) -> Self {
        Self {
            event_type: TriggerEventType::Exit,
            other,
        }
    }
}

/// Callback type for trigger events
pub type TriggerCallback = Box<dyn Fn(&TriggerEvent) + Send + Sync>;

/// Fan-out point for trigger events
#[derive(Default)]
pub struct TriggerEvents {
    on_enter: Vec<TriggerCallback>,
    on_stay: Vec<TriggerCallback>,
    on_exit: Vec<TriggerCallback>,
    subscribers: Vec<Sender<TriggerEvent>>,
}

impl TriggerEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an enter callback
    pub fn on_enter<F>(&mut self, f: F) -> &mut Self
    where
        F: Fn(&TriggerEvent) + Send + Sync + 'static,
    {
        self.on_enter.push(Box::new(f));
        self
    }

    /// Register a stay callback
    pub fn on_stay<F>(&mut self, f: F) -> &mut Self
    where
        F: Fn(&TriggerEvent) + Send + Sync + 'static,
    {
        self.on_stay.push(Box::new(f));
        self
    }

    /// Register an exit callback
    pub fn on_exit<F>(&mut self, f: F) -> &mut Self
    where
        F: Fn(&TriggerEvent) + Send + Sync + 'static,
    {
        self.on_exit.push(Box::new(f));
        self
    }

    /// Receive every event through a channel
    pub fn subscribe(&mut self) -> Receiver<TriggerEvent> {
        let (tx, rx) = crossbeam_channel::unbounded();
        self.subscribers.push(tx);
        rx
    }

    /// Number of live channel subscribers
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Forward an event to callbacks, then to subscribers.
    ///
    /// Subscribers whose receiver has been dropped are removed.
    pub fn dispatch(&mut self, event: TriggerEvent) {
        let callbacks = match event.event_type {
            TriggerEventType::Enter => &self.on_enter,
            TriggerEventType::Stay => &self.on_stay,
            TriggerEventType::Exit => &self.on_exit,
        };
        for callback in callbacks {
            callback(&event);
        }

        self.subscribers.retain(|tx| tx.send(event).is_ok());
    }
}

impl std::fmt::Debug for TriggerEvents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TriggerEvents")
            .field("on_enter", &self.on_enter.len())
            .field("on_stay", &self.on_stay.len())
            .field("on_exit", &self.on_exit.len())
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
