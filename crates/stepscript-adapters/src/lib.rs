//! stepscript-adapters: variantes concretas de steps y preprocesadores.
//!
//! Este crate provee:
//! - Un performer por tipo de step (`add_column`, `delete_column`,
//!   `rename_column`, `set_column_formula`, `change_column_dtype`,
//!   `reorder_column`, `sort`, `merge`, `bulk_old_rename`).
//! - Los preprocesadores de sesión, en su orden por defecto.
//! - `default_transpiler` para armar un `Transpiler` con todo lo anterior.
//!
//! Nota: el core sólo conoce `StepPerformer` / `PreprocessStepPerformer`;
//! cada variante decodifica sus params tipados a través de
//! `TypedStepPerformer`.

pub mod codegen;
pub mod dtype;
pub mod preprocess;
pub mod steps;

use stepscript_core::{PreprocessStepPerformer, StepPerformerRegistry, TranspileOptions, Transpiler};

pub use preprocess::{CleanColumnHeaders, ConvertToDataframe, DeduplicateColumnHeaders};
pub use steps::{AddColumn, BulkOldRename, ChangeColumnDtype, DeleteColumn, Merge, RenameColumn, ReorderColumn,
                SetColumnFormula, Sort};

/// Registro con todos los performers de step incluidos.
pub fn default_step_performers() -> StepPerformerRegistry {
    StepPerformerRegistry::new().with(AddColumn)
                                .with(DeleteColumn)
                                .with(RenameColumn)
                                .with(SetColumnFormula)
                                .with(ChangeColumnDtype)
                                .with(ReorderColumn)
                                .with(Sort)
                                .with(Merge)
                                .with(BulkOldRename)
}

/// Preprocesadores en el orden en que se ejecutan: convertir argumentos a
/// dataframes, deduplicar headers y por último limpiarlos.
pub fn default_preprocess_performers() -> Vec<Box<dyn PreprocessStepPerformer>> {
    vec![Box::new(ConvertToDataframe), Box::new(DeduplicateColumnHeaders), Box::new(CleanColumnHeaders)]
}

/// `Transpiler` con los performers y preprocesadores por defecto.
pub fn default_transpiler(options: TranspileOptions) -> Transpiler {
    Transpiler::new(default_step_performers(), default_preprocess_performers(), options)
}
