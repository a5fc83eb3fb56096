//! Wrapper generation: eligibility, signature transcription, class assembly.

pub mod builder;
pub mod eligibility;
pub mod transcriber;

pub use builder::WrapperClassBuilder;
pub use eligibility::{is_eligible, is_eligible_method};
pub use transcriber::transcribe;
