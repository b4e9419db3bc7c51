use serde_json::Value;

use crate::errors::TranspileError;
use crate::model::SheetState;

/// Variante de step vista por el transpilador. Implementaciones deben ser
/// puras: misma entrada, mismas líneas.
pub trait StepPerformer: Send + Sync {
    /// Discriminador con el que se registran y se buscan los steps.
    fn step_type(&self) -> &str;

    /// Nombre amigable.
    fn step_display_name(&self) -> &str {
        self.step_type()
    }

    /// Descripción legible de un step con estos params (sin marcador de
    /// comentario).
    fn describe(&self, params: &Value, df_names: &[String]) -> Result<String, TranspileError>;

    /// Líneas de código que reproducen el step. Un vector vacío significa que
    /// el step no aporta nada observable.
    fn transpile(&self,
                 prev_state: &SheetState,
                 post_state: &SheetState,
                 execution_data: Option<&Value>,
                 params: &Value)
                 -> Result<Vec<String>, TranspileError>;
}
