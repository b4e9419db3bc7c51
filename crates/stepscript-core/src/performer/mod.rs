//! Contratos de los performers (variantes de step y de preprocesamiento).
//!
//! El transpilador sólo conoce estas interfaces:
//! - `StepPerformer`: interfaz neutral (params como JSON) usada por el loop.
//! - `TypedStepPerformer`: interfaz de alto nivel con params tipados; un
//!   adaptador genérico la convierte a `StepPerformer`.
//! - `PreprocessStepPerformer`: transformación global previa al historial.
//! - `StepPerformerRegistry`: tabla de despacho por tipo de step.

pub mod definition;
pub mod preprocess;
pub mod registry;
pub mod typed;

pub use definition::StepPerformer;
pub use preprocess::PreprocessStepPerformer;
pub use registry::StepPerformerRegistry;
pub use typed::{decode_execution_data, decode_params, TypedStepPerformer};
