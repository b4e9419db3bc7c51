//! stepscript-core: transpilador determinista de historiales de steps.
//!
//! Dado un historial lineal de operaciones sobre hojas de cálculo y la
//! execution data de los preprocesadores, genera un programa que reproduce
//! las mismas transformaciones. El core no conoce las variantes concretas:
//! sólo llama a través de `StepPerformer` / `PreprocessStepPerformer`.
pub mod constants;
pub mod errors;
pub mod hashing;
pub mod history;
pub mod model;
pub mod performer;
pub mod transpiler;

pub use errors::TranspileError;
pub use history::{select_steps_to_transpile, StepHistory};
pub use model::{ColumnFormula, ColumnHeader, ColumnMeta, PreprocessExecutionData, SheetFrame, SheetState, Step};
pub use performer::{PreprocessStepPerformer, StepPerformer, StepPerformerRegistry, TypedStepPerformer};
pub use transpiler::{TranspileOptions, TranspiledCode, Transpiler, TranspilerBuilder};
