//! StepScript Rust Library
//!
//! Fachada sobre los crates del workspace:
//! - `config`: configuración cargada desde el entorno (.env).
//! - `errors`: `AppError`, que envuelve errores de transpilación, IO y JSON.
//! - `session`: lectura de archivos de sesión y su transpilación.
//!
//! Reexporta `stepscript_core` y `stepscript_adapters` para que los clientes
//! no necesiten depender de ellos por separado.

pub mod config;
pub mod errors;
pub mod session;

pub use stepscript_adapters as adapters;
pub use stepscript_core as core;

use stepscript_core::{TranspileOptions, TranspiledCode};

use crate::errors::AppError;
use crate::session::Session;

/// Transpila una sesión con los performers por defecto.
pub fn transpile_session(session: &Session, add_comments: bool) -> Result<TranspiledCode, AppError> {
    let transpiler = stepscript_adapters::default_transpiler(TranspileOptions { add_comments });
    session.transpile(&transpiler)
}
