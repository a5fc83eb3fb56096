//! Generation events: the diagnostic side channel of a pass.

pub mod dispatcher;
pub mod handler;
pub mod types;

pub use dispatcher::EventDispatcher;
pub use handler::GenerationEventHandler;
pub use types::*;
