//! GenerationEventHandler trait, all methods with no-op defaults.

use super::types::*;

/// Trait for observing a generation pass.
///
/// Handlers only override the events they care about.
pub trait GenerationEventHandler: Send + Sync {
    fn on_pass_started(&self, _event: &PassStartedEvent) {}
    fn on_class_generated(&self, _event: &ClassGeneratedEvent) {}
    fn on_type_skipped(&self, _event: &TypeSkippedEvent) {}
    fn on_type_failed(&self, _event: &TypeFailedEvent) {}
    fn on_emit_failed(&self, _event: &EmitFailedEvent) {}
    fn on_pass_complete(&self, _event: &PassCompleteEvent) {}
}
