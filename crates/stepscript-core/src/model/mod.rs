//! Modelos neutrales del historial (Step, SheetState, ColumnHeader, ...).

pub mod column;
pub mod preprocess_data;
pub mod state;
pub mod step;

pub use column::{quote_python_str, ColumnFormula, ColumnHeader, ColumnMeta};
pub use preprocess_data::PreprocessExecutionData;
pub use state::{SheetFrame, SheetState};
pub use step::Step;
