// src/events/bus/event_bus.rs
//
// Core event bus implementation.
//
// DESIGN PRINCIPLES:
// 1. Synchronous - handlers execute immediately, in subscription order
// 2. Deterministic - same events, same handlers, same result
// 3. Type-safe - events are strongly typed, dispatch is keyed by TypeId
// 4. Observational only - a bus with no subscribers changes nothing

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::RwLock;

use tracing::trace;

use crate::events::types::DomainEvent;

/// Type-erased event handler function
/// Takes a reference to Any, downcast to the concrete event type inside
type EventHandler = Box<dyn Fn(&dyn Any) + Send + Sync>;

/// The central coordination point for domain events.
///
/// Services emit facts here; observers subscribe without the emitting side
/// knowing about them. Handlers run on the emitting thread, in the order
/// they were subscribed.
pub struct EventBus {
    handlers: RwLock<HashMap<TypeId, Vec<EventHandler>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            handlers: RwLock::new(HashMap::new()),
        }
    }

    /// Subscribe to a specific event type.
    ///
    /// The handler receives a reference to the concrete event. Handlers for
    /// the same event type execute in subscription order.
    pub fn subscribe<E, F>(&self, handler: F)
    where
        E: DomainEvent + 'static,
        F: Fn(&E) + Send + Sync + 'static,
    {
        let wrapped: EventHandler = Box::new(move |event_any: &dyn Any| {
            if let Some(event) = event_any.downcast_ref::<E>() {
                handler(event);
            }
        });

        let mut handlers = self.handlers.write().unwrap();
        handlers.entry(TypeId::of::<E>()).or_default().push(wrapped);
    }

    /// Emit an event, running every handler subscribed to its type.
    ///
    /// Emitting with no subscribers is a no-op.
    pub fn emit<E>(&self, event: E)
    where
        E: DomainEvent + 'static,
    {
        let handlers = self.handlers.read().unwrap();
        let event_handlers = handlers.get(&TypeId::of::<E>());

        trace!(
            event_type = event.event_type(),
            event_id = %event.event_id(),
            handler_count = event_handlers.map(|h| h.len()).unwrap_or(0),
            "emitting event"
        );

        if let Some(event_handlers) = event_handlers {
            for handler in event_handlers {
                handler(&event as &dyn Any);
            }
        }
    }

    /// Number of subscribers for a specific event type
    pub fn subscriber_count<E>(&self) -> usize
    where
        E: 'static,
    {
        let handlers = self.handlers.read().unwrap();
        handlers
            .get(&TypeId::of::<E>())
            .map(|h| h.len())
            .unwrap_or(0)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
