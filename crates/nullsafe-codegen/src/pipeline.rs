//! The generation pass: provider → builder → emitter, one marked type at a time.

use std::sync::Arc;

use nullsafe_core::errors::{EmitError, NullSafeErrorCode, PipelineError, ProviderError};
use nullsafe_core::events::{
    ClassGeneratedEvent, EmitFailedEvent, EventDispatcher, GenerationEventHandler,
    PassCompleteEvent, PassStartedEvent, TypeFailedEvent, TypeSkippedEvent,
};
use nullsafe_core::{GenerationConfig, NullSafeConfig, PipelineResult};
use rustc_hash::FxHashMap;

use crate::emit::{CodeEmitter, EmittedFile, FileEmitter, JavaRenderer};
use crate::generation::WrapperClassBuilder;
use crate::provider::{MetadataProvider, SourceIndex};

/// Outcome of one pass.
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    /// Classes the emitter accepted, in marked-type order.
    pub generated: Vec<EmittedFile>,
    /// Marked types that produced no class and no error.
    pub skipped: Vec<String>,
}

/// Drives one generation pass over every marked type a provider reports.
pub struct Generator<P, E> {
    provider: P,
    emitter: E,
    builder: WrapperClassBuilder,
    events: EventDispatcher,
}

impl<P: MetadataProvider, E: CodeEmitter> Generator<P, E> {
    pub fn new(provider: P, emitter: E, config: &GenerationConfig) -> Self {
        Self {
            provider,
            emitter,
            builder: WrapperClassBuilder::new(config.clone()),
            events: EventDispatcher::new(),
        }
    }

    pub fn with_handler(mut self, handler: Arc<dyn GenerationEventHandler>) -> Self {
        self.events.register(handler);
        self
    }

    pub fn emitter(&self) -> &E {
        &self.emitter
    }

    pub fn into_emitter(self) -> E {
        self.emitter
    }

    /// Run one pass. Failures are local to a marked type and collected in
    /// the result; the pass itself always completes.
    ///
    /// Two marked types mapping to the same wrapper name (a top-level
    /// `a.Inner` and a nested `a.Outer.Inner`) are not both written: the
    /// second is rejected.
    pub fn run(&mut self) -> PipelineResult<GenerationReport> {
        let marked = self.provider.marked_types();
        tracing::info!(count = marked.len(), types = %marked.join(", "), "processing marked types");
        self.events.emit_pass_started(&PassStartedEvent {
            marked_types: marked.clone(),
        });

        let mut result = PipelineResult::<GenerationReport>::default();
        let mut failed = 0usize;
        // Wrapper qualified name -> origin it was generated from.
        let mut written: FxHashMap<String, String> = FxHashMap::default();

        for qualified_name in &marked {
            let metadata = match self.provider.resolve(qualified_name) {
                Ok(m) => m,
                Err(ProviderError::NotAClass { kind, .. }) => {
                    tracing::debug!(type_name = %qualified_name, %kind, "skipping non-class marked type");
                    self.skip(&mut result.data, qualified_name, format!("{kind} is not a class"));
                    continue;
                }
                Err(e) => {
                    tracing::warn!(type_name = %qualified_name, error = %e, "cannot resolve marked type");
                    self.events.emit_type_failed(&TypeFailedEvent {
                        qualified_name: qualified_name.clone(),
                        error_code: e.error_code(),
                        message: e.to_string(),
                    });
                    result.add_error(e);
                    failed += 1;
                    continue;
                }
            };

            let Some(class) = self.builder.build(&metadata) else {
                tracing::debug!(type_name = %qualified_name, "no members, nothing to generate");
                self.skip(&mut result.data, qualified_name, "no members".to_string());
                continue;
            };

            let wrapper_name = class.qualified_name();
            let outcome = match written.get(&wrapper_name) {
                Some(first) => Err(EmitError::Rejected {
                    class_name: class.name.clone(),
                    message: format!(
                        "{wrapper_name} was already generated from {first}; {} would overwrite it",
                        class.origin
                    ),
                }),
                None => self.emitter.emit(&class),
            };

            match outcome {
                Ok(file) => {
                    written.insert(wrapper_name, class.origin.clone());
                    self.events.emit_class_generated(&ClassGeneratedEvent {
                        class_name: class.name.clone(),
                        origin: class.origin.clone(),
                        method_count: class.methods.len(),
                        path: file.path.clone(),
                    });
                    result.data.generated.push(file);
                }
                Err(e) => {
                    tracing::error!(class = %class.name, error = %e, "failed to write wrapper class");
                    self.events.emit_emit_failed(&EmitFailedEvent {
                        class_name: class.name.clone(),
                        error_code: e.error_code(),
                        message: e.to_string(),
                    });
                    result.add_error(e);
                    failed += 1;
                }
            }
        }

        let complete = PassCompleteEvent {
            generated: result.data.generated.len(),
            skipped: result.data.skipped.len(),
            failed,
        };
        tracing::info!(
            generated = complete.generated,
            skipped = complete.skipped,
            failed = complete.failed,
            "generation pass complete"
        );
        self.events.emit_pass_complete(&complete);
        result
    }

    fn skip(&self, report: &mut GenerationReport, qualified_name: &str, reason: String) {
        self.events.emit_type_skipped(&TypeSkippedEvent {
            qualified_name: qualified_name.to_string(),
            reason,
        });
        report.skipped.push(qualified_name.to_string());
    }
}

/// Scan the configured sources and write wrappers under the configured
/// output directory. Scan and parse problems are merged into the result;
/// only a grammar load failure is fatal.
pub fn generate(config: &NullSafeConfig) -> Result<PipelineResult<GenerationReport>, PipelineError> {
    let generation = &config.generation;
    let (index, scan_errors) = SourceIndex::scan(&config.scan, generation.effective_marker())?;
    let emitter = FileEmitter::new(
        generation.effective_out_dir(),
        JavaRenderer::new(generation.effective_indent()),
    );

    let mut result = Generator::new(index, emitter, generation).run();
    if !scan_errors.is_empty() {
        let mut errors = scan_errors;
        errors.append(&mut result.errors);
        result.errors = errors;
    }
    Ok(result)
}
