//! Performers de step.

mod add_column;
mod bulk_old_rename;
mod change_column_dtype;
mod delete_column;
mod merge;
mod rename_column;
mod reorder_column;
mod set_column_formula;
mod sort;

pub use add_column::{AddColumn, AddColumnParams};
pub use bulk_old_rename::{BulkOldRename, BulkOldRenameParams};
pub use change_column_dtype::{ChangeColumnDtype, ChangeColumnDtypeParams};
pub use delete_column::{DeleteColumn, DeleteColumnParams};
pub use merge::{Merge, MergeHow, MergeParams};
pub use rename_column::{RenameColumn, RenameColumnParams};
pub use reorder_column::{ReorderColumn, ReorderColumnParams};
pub use set_column_formula::{SetColumnFormula, SetColumnFormulaParams};
pub use sort::{Sort, SortDirection, SortParams};
