//! Builder para `Transpiler`.
//!
//! El orden en que se agregan los preprocesadores es el orden en que su
//! código aparece en el programa: algunos dependen implícitamente de otros
//! (p. ej. deduplicar headers antes de limpiarlos).
//!
//! ```ignore
//! let transpiler = Transpiler::builder()
//!     .preprocessor(ConvertToDataframe)
//!     .step_performer(AddColumn)
//!     .add_comments(false)
//!     .build();
//! ```

use super::{TranspileOptions, Transpiler};
use crate::performer::{PreprocessStepPerformer, StepPerformer, StepPerformerRegistry};

#[derive(Default)]
pub struct TranspilerBuilder {
    registry: StepPerformerRegistry,
    preprocessors: Vec<Box<dyn PreprocessStepPerformer>>,
    options: TranspileOptions,
}

impl TranspilerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registra un performer de step (reemplaza al previo del mismo tipo).
    pub fn step_performer<P>(mut self, performer: P) -> Self
        where P: StepPerformer + 'static
    {
        self.registry.register(Box::new(performer));
        self
    }

    /// Reemplaza el registro completo.
    pub fn registry(mut self, registry: StepPerformerRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Agrega un preprocesador al final del orden configurado.
    pub fn preprocessor<P>(mut self, performer: P) -> Self
        where P: PreprocessStepPerformer + 'static
    {
        self.preprocessors.push(Box::new(performer));
        self
    }

    /// Agrega una lista ordenada de preprocesadores.
    pub fn preprocessors(mut self, performers: Vec<Box<dyn PreprocessStepPerformer>>) -> Self {
        self.preprocessors.extend(performers);
        self
    }

    pub fn add_comments(mut self, add_comments: bool) -> Self {
        self.options.add_comments = add_comments;
        self
    }

    pub fn options(mut self, options: TranspileOptions) -> Self {
        self.options = options;
        self
    }

    pub fn build(self) -> Transpiler {
        Transpiler::new(self.registry, self.preprocessors, self.options)
    }
}
