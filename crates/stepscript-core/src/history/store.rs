//! `StepHistory`: vista de sólo lectura sobre el log de steps.
//!
//! La gestión real del historial (undo/redo, truncado) es responsabilidad de
//! quien lo mantiene; aquí sólo se garantizan las invariantes que el
//! transpilador necesita:
//! - el historial nunca está vacío,
//! - el primer step es `initialize`,
//! - `0 <= curr_step_idx <= len - 1`.
use serde::{Deserialize, Serialize};

use super::select_steps_to_transpile;
use crate::errors::TranspileError;
use crate::model::Step;

#[derive(Debug, Clone, Serialize)]
pub struct StepHistory {
    steps: Vec<Step>,
    curr_step_idx: usize,
}

impl StepHistory {
    /// Historial con sólo el step `initialize`, checked out.
    pub fn new(initialize: Step) -> Result<Self, TranspileError> {
        Self::from_steps(vec![initialize], 0)
    }

    /// Valida las invariantes y construye el historial.
    pub fn from_steps(steps: Vec<Step>, curr_step_idx: usize) -> Result<Self, TranspileError> {
        let first = steps.first().ok_or(TranspileError::EmptyHistory)?;
        if !first.is_initialize() {
            return Err(TranspileError::MissingInitializeStep(first.step_type.clone()));
        }
        if curr_step_idx >= steps.len() {
            return Err(TranspileError::InvalidCheckoutIndex { index: curr_step_idx,
                                                              len: steps.len() });
        }
        Ok(Self { steps, curr_step_idx })
    }

    /// Agrega un step al final y lo deja checked out.
    pub fn push(&mut self, step: Step) {
        self.steps.push(step);
        self.curr_step_idx = self.steps.len() - 1;
    }

    /// Mueve la vista a `idx` sin descartar steps posteriores.
    pub fn checkout(&mut self, idx: usize) -> Result<(), TranspileError> {
        if idx >= self.steps.len() {
            return Err(TranspileError::InvalidCheckoutIndex { index: idx,
                                                              len: self.steps.len() });
        }
        self.curr_step_idx = idx;
        Ok(())
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn curr_step_idx(&self) -> usize {
        self.curr_step_idx
    }

    pub fn last_step_idx(&self) -> usize {
        self.steps.len() - 1
    }

    /// `true` si la vista no corresponde al último step.
    pub fn is_viewing_previous_step(&self) -> bool {
        self.curr_step_idx != self.last_step_idx()
    }

    /// Steps a transpilar según el checkout actual.
    pub fn selected_steps(&self) -> Result<&[Step], TranspileError> {
        select_steps_to_transpile(&self.steps, self.curr_step_idx)
    }

    /// Nombres de dataframes que existían al iniciar la sesión.
    pub fn initial_df_names(&self) -> &[String] {
        &self.steps[0].post_state.df_names
    }
}

#[derive(Deserialize)]
struct RawStepHistory {
    steps: Vec<Step>,
    curr_step_idx: Option<usize>,
}

impl<'de> Deserialize<'de> for StepHistory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where D: serde::Deserializer<'de>
    {
        let raw = RawStepHistory::deserialize(deserializer)?;
        let idx = raw.curr_step_idx.unwrap_or_else(|| raw.steps.len().saturating_sub(1));
        StepHistory::from_steps(raw.steps, idx).map_err(serde::de::Error::custom)
    }
}
