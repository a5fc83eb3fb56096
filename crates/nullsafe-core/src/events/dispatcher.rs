//! EventDispatcher: synchronous fan-out to registered handlers.

use std::sync::Arc;

use super::handler::GenerationEventHandler;
use super::types::*;

/// Synchronous event dispatcher wrapping a list of handlers.
#[derive(Default, Clone)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn GenerationEventHandler>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, handler: Arc<dyn GenerationEventHandler>) {
        self.handlers.push(handler);
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Handlers that panic are caught and do not prevent subsequent handlers
    /// from receiving the event.
    fn emit<F: Fn(&dyn GenerationEventHandler)>(&self, f: F) {
        for handler in &self.handlers {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                tracing::warn!("generation event handler panicked; continuing");
            }
        }
    }

    pub fn emit_pass_started(&self, event: &PassStartedEvent) {
        self.emit(|h| h.on_pass_started(event));
    }

    pub fn emit_class_generated(&self, event: &ClassGeneratedEvent) {
        self.emit(|h| h.on_class_generated(event));
    }

    pub fn emit_type_skipped(&self, event: &TypeSkippedEvent) {
        self.emit(|h| h.on_type_skipped(event));
    }

    pub fn emit_type_failed(&self, event: &TypeFailedEvent) {
        self.emit(|h| h.on_type_failed(event));
    }

    pub fn emit_emit_failed(&self, event: &EmitFailedEvent) {
        self.emit(|h| h.on_emit_failed(event));
    }

    pub fn emit_pass_complete(&self, event: &PassCompleteEvent) {
        self.emit(|h| h.on_pass_complete(event));
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
