use serde_json::Value;

use crate::errors::TranspileError;
use crate::history::StepHistory;

/// Transformación global aplicada una sola vez antes del historial.
///
/// Un preprocesador que no aplica a la sesión devuelve un vector vacío; la
/// ausencia de código es la señal de "no aplica", nunca un error.
pub trait PreprocessStepPerformer: Send + Sync {
    /// Clave con la que se busca su execution data.
    fn preprocess_step_type(&self) -> &str;

    /// `execution_data` es `None` si la sesión no registró datos para este
    /// tipo.
    fn transpile(&self, history: &StepHistory, execution_data: Option<&Value>) -> Result<Vec<String>, TranspileError>;
}
