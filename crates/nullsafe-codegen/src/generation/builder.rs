//! WrapperClassBuilder: assembles one wrapper class per marked type.

use nullsafe_core::model::{MarkedType, Member, WrapperClass};
use nullsafe_core::GenerationConfig;

use super::eligibility::is_eligible_method;
use super::transcriber::transcribe;

#[derive(Debug, Clone, Default)]
pub struct WrapperClassBuilder {
    config: GenerationConfig,
}

impl WrapperClassBuilder {
    pub fn new(config: GenerationConfig) -> Self {
        Self { config }
    }

    /// Name of the wrapper generated for a type with this simple name.
    pub fn class_name(&self, simple_name: &str) -> String {
        format!("{}{}", self.config.effective_prefix(), simple_name)
    }

    /// Build the wrapper class for `marked`.
    ///
    /// Returns `None` when the type has no members at all. A type whose
    /// members are all ineligible still yields a class, with no methods.
    /// Methods keep the provider's member order.
    pub fn build(&self, marked: &MarkedType) -> Option<WrapperClass> {
        if marked.members.is_empty() {
            tracing::debug!(
                type_name = %marked.qualified_name,
                "no members; skipping wrapper class"
            );
            return None;
        }

        let mut class = WrapperClass {
            name: self.class_name(&marked.simple_name),
            package: marked.package.clone(),
            origin: marked.qualified_name.clone(),
            doc: marked.doc.clone(),
            attribution: self.config.attribution_for(&marked.qualified_name),
            imports: marked.imports.clone(),
            methods: Vec::new(),
        };

        for member in &marked.members {
            let Member::Method(method) = member else {
                continue;
            };
            if !is_eligible_method(method) {
                tracing::trace!(
                    type_name = %marked.qualified_name,
                    method = %method.name,
                    "method not eligible"
                );
                continue;
            }
            class
                .methods
                .push(transcribe(&marked.qualified_name, method));
        }

        tracing::debug!(
            class = %class.name,
            methods = class.methods.len(),
            members = marked.members.len(),
            "assembled wrapper class"
        );
        Some(class)
    }
}
