//! `Step`: registro inmutable de una operación del usuario.
//!
//! Un step guarda el tipo (discriminador usado para buscar su performer),
//! los params tal como se ejecutaron, los snapshots de estado previo y
//! posterior y la execution data opaca que produjo al ejecutarse. El core
//! nunca muta un step después de crearlo.
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use super::SheetState;
use crate::constants::INITIALIZE_STEP_TYPE;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Step {
    #[serde(default = "Uuid::new_v4")]
    pub step_id: Uuid,
    pub step_type: String,
    #[serde(default)]
    pub params: Value,
    pub prev_state: Arc<SheetState>,
    pub post_state: Arc<SheetState>,
    #[serde(default)]
    pub execution_data: Option<Value>,
    /// Dataframes visibles en este punto del historial.
    #[serde(default)]
    pub df_names: Vec<String>,
    /// Metadato: no entra en el código generado ni en fingerprints.
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Step {
    /// Crea un step; los `df_names` visibles se toman del `post_state`.
    pub fn new(step_type: &str, params: Value, prev_state: Arc<SheetState>, post_state: Arc<SheetState>) -> Self {
        let df_names = post_state.df_names.clone();
        Self { step_id: Uuid::new_v4(),
               step_type: step_type.to_string(),
               params,
               prev_state,
               post_state,
               execution_data: None,
               df_names,
               created_at: Utc::now() }
    }

    /// Step de bookkeeping con el que empieza todo historial.
    pub fn initialize(state: Arc<SheetState>) -> Self {
        Self::new(INITIALIZE_STEP_TYPE, json!({}), state.clone(), state)
    }

    pub fn with_execution_data(mut self, execution_data: Value) -> Self {
        self.execution_data = Some(execution_data);
        self
    }

    pub fn is_initialize(&self) -> bool {
        self.step_type == INITIALIZE_STEP_TYPE
    }
}
