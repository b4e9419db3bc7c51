//! Archivo de sesión: historial de steps + execution data de los
//! preprocesadores, tal como lo exporta el editor.
//!
//! ```json
//! { "steps": [...], "curr_step_idx": 2, "preprocess_execution_data": {...} }
//! ```
//! `curr_step_idx` es opcional (por defecto el último step).
use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};
use stepscript_core::{PreprocessExecutionData, StepHistory, TranspiledCode, Transpiler};

use crate::errors::AppError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    #[serde(flatten)]
    pub history: StepHistory,
    #[serde(default)]
    pub preprocess_execution_data: PreprocessExecutionData,
}

impl Session {
    pub fn new(history: StepHistory) -> Self {
        Self { history, preprocess_execution_data: PreprocessExecutionData::new() }
    }

    pub fn from_json_str(raw: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn load(path: &Path) -> Result<Self, AppError> {
        debug!("session:load path={}", path.display());
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn to_json_string(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Mueve la vista del historial; `None` deja el checkout guardado.
    pub fn checkout(&mut self, idx: Option<usize>) -> Result<(), AppError> {
        if let Some(idx) = idx {
            self.history.checkout(idx)?;
        }
        Ok(())
    }

    pub fn transpile(&self, transpiler: &Transpiler) -> Result<TranspiledCode, AppError> {
        Ok(transpiler.transpile(&self.history, &self.preprocess_execution_data)?)
    }
}
