use serde::de::DeserializeOwned;
use serde_json::Value;

use super::StepPerformer;
use crate::errors::TranspileError;
use crate::model::SheetState;

/// Interfaz de alto nivel para performers con params fuertemente tipados.
///
/// El adaptador genérico de abajo decodifica los params almacenados en el
/// step y delega; si no decodifican, el error se propaga como
/// `InvalidParams`.
pub trait TypedStepPerformer {
    type Params: DeserializeOwned;

    fn step_type(&self) -> &'static str;

    fn step_display_name(&self) -> &'static str {
        self.step_type()
    }

    fn describe_typed(&self, params: Self::Params, df_names: &[String]) -> String;

    fn transpile_typed(&self,
                       prev_state: &SheetState,
                       post_state: &SheetState,
                       execution_data: Option<&Value>,
                       params: Self::Params)
                       -> Result<Vec<String>, TranspileError>;
}

impl<T> StepPerformer for T where T: TypedStepPerformer + Send + Sync
{
    fn step_type(&self) -> &str {
        <T as TypedStepPerformer>::step_type(self)
    }

    fn step_display_name(&self) -> &str {
        <T as TypedStepPerformer>::step_display_name(self)
    }

    fn describe(&self, params: &Value, df_names: &[String]) -> Result<String, TranspileError> {
        let p = decode_params::<T::Params>(<T as TypedStepPerformer>::step_type(self), params)?;
        Ok(self.describe_typed(p, df_names))
    }

    fn transpile(&self,
                 prev_state: &SheetState,
                 post_state: &SheetState,
                 execution_data: Option<&Value>,
                 params: &Value)
                 -> Result<Vec<String>, TranspileError> {
        let p = decode_params::<T::Params>(<T as TypedStepPerformer>::step_type(self), params)?;
        self.transpile_typed(prev_state, post_state, execution_data, p)
    }
}

/// Decodifica params JSON a la estructura tipada del performer.
pub fn decode_params<P: DeserializeOwned>(step_type: &str, params: &Value) -> Result<P, TranspileError> {
    P::deserialize(params).map_err(|e| TranspileError::InvalidParams { step_type: step_type.to_string(),
                                                                       reason: e.to_string() })
}

/// Decodifica execution data opcional; `None` se mantiene como `None`.
pub fn decode_execution_data<D: DeserializeOwned>(step_type: &str,
                                                  execution_data: Option<&Value>)
                                                  -> Result<Option<D>, TranspileError> {
    execution_data.map(|v| {
                      D::deserialize(v).map_err(|e| TranspileError::InvalidExecutionData { step_type: step_type.to_string(),
                                                                                           reason: e.to_string() })
                  })
                  .transpose()
}
