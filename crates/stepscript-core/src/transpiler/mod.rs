//! Motor de transpilación: historial + preprocesamiento -> programa.
//!
//! Provee el `Transpiler`, su builder y el registro de salida
//! `TranspiledCode`.

pub mod builder;
pub mod core;
pub mod output;

pub use builder::TranspilerBuilder;
pub use core::{TranspileOptions, Transpiler};
pub use output::TranspiledCode;
