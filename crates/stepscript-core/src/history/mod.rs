//! Historial de steps y selección de los steps a transpilar.

mod selector;
mod store;

pub use selector::select_steps_to_transpile;
pub use store::StepHistory;
