//! Execution data de los preprocesadores, capturada una única vez al inicio
//! de la sesión y de sólo lectura desde el transpilador.
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Mapa `preprocess_step_type -> execution data`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PreprocessExecutionData(IndexMap<String, Value>);

impl PreprocessExecutionData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, preprocess_step_type: &str, execution_data: Value) -> Option<Value> {
        self.0.insert(preprocess_step_type.to_string(), execution_data)
    }

    /// Variante encadenable de `insert`.
    pub fn with(mut self, preprocess_step_type: &str, execution_data: Value) -> Self {
        self.insert(preprocess_step_type, execution_data);
        self
    }

    pub fn get(&self, preprocess_step_type: &str) -> Option<&Value> {
        self.0.get(preprocess_step_type)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
