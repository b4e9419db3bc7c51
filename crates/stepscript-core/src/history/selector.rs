use crate::errors::TranspileError;
use crate::model::Step;

/// Prefijo del historial hasta (e incluyendo) `curr_step_idx`.
///
/// El usuario puede "volver" a un punto anterior sin descartar los steps
/// posteriores; éstos siguen en el historial pero no se renderizan.
pub fn select_steps_to_transpile(steps: &[Step], curr_step_idx: usize) -> Result<&[Step], TranspileError> {
    if steps.is_empty() {
        return Err(TranspileError::EmptyHistory);
    }
    if curr_step_idx >= steps.len() {
        return Err(TranspileError::InvalidCheckoutIndex { index: curr_step_idx,
                                                          len: steps.len() });
    }
    Ok(&steps[..=curr_step_idx])
}
