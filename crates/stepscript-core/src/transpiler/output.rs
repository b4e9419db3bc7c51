//! Registro de salida de una transpilación.
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::constants::{TRANSPILED_IMPORTS, TRANSPILER_VERSION};
use crate::hashing::hash_value;

/// Programa generado: preámbulo de imports + líneas de código en orden.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranspiledCode {
    pub imports: String,
    pub code: Vec<String>,
}

impl TranspiledCode {
    pub fn new(code: Vec<String>) -> Self {
        Self { imports: TRANSPILED_IMPORTS.to_string(),
               code }
    }

    /// Script completo: imports, línea en blanco y el código.
    pub fn to_script(&self) -> String {
        let mut script = self.imports.clone();
        script.push('\n');
        if !self.code.is_empty() {
            script.push('\n');
            script.push_str(&self.code.join("\n"));
            script.push('\n');
        }
        script
    }

    /// Fingerprint estable (blake3, 64 hex) del programa generado.
    pub fn fingerprint(&self) -> String {
        hash_value(&json!({
            "transpiler_version": TRANSPILER_VERSION,
            "imports": self.imports,
            "code": self.code,
        }))
    }
}
