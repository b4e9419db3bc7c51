//! Snapshot inmutable del estado del sheet antes/después de un step.
//!
//! Los steps consecutivos comparten estos snapshots mediante `Arc`: el
//! `post_state` de un step es el `prev_state` del siguiente.
use serde::{Deserialize, Serialize};

use super::{ColumnHeader, ColumnMeta};
use crate::errors::TranspileError;

/// Columnas de un dataframe, en orden.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SheetFrame {
    pub columns: Vec<ColumnMeta>,
}

impl SheetFrame {
    /// Construye un frame a partir de pares `(header, dtype)`.
    pub fn from_headers(headers: &[(&str, &str)]) -> Self {
        Self { columns: headers.iter().map(|(h, d)| ColumnMeta::new(*h, d)).collect() }
    }

    pub fn column(&self, column_id: &str) -> Option<&ColumnMeta> {
        self.columns.iter().find(|c| c.column_id == column_id)
    }

    pub fn position(&self, column_id: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.column_id == column_id)
    }

    /// Columnas cuya fórmula depende, directa o transitivamente, de
    /// `column_id`. Cada columna aparece después de las que referencia; a
    /// igualdad, se respeta el orden del sheet.
    pub fn dependant_columns(&self, column_id: &str) -> Vec<&ColumnMeta> {
        let mut affected: Vec<&str> = Vec::new();
        let mut frontier: Vec<&str> = vec![column_id];
        while let Some(id) = frontier.pop() {
            for c in &self.columns {
                let cid = c.column_id.as_str();
                if cid != column_id && c.depends_on(id) && !affected.contains(&cid) {
                    affected.push(cid);
                    frontier.push(cid);
                }
            }
        }

        let mut visited: Vec<&str> = Vec::with_capacity(affected.len());
        let mut ordered: Vec<&ColumnMeta> = Vec::with_capacity(affected.len());
        for c in self.columns.iter().filter(|c| affected.contains(&c.column_id.as_str())) {
            self.visit_dependencies_first(c, &affected, &mut visited, &mut ordered);
        }
        ordered
    }

    // Post-orden DFS; `visited` corta los ciclos.
    fn visit_dependencies_first<'a>(&'a self,
                                    column: &'a ColumnMeta,
                                    affected: &[&str],
                                    visited: &mut Vec<&'a str>,
                                    ordered: &mut Vec<&'a ColumnMeta>) {
        if visited.contains(&column.column_id.as_str()) {
            return;
        }
        visited.push(column.column_id.as_str());
        if let Some(formula) = &column.formula {
            for dep in formula.dependencies.iter().filter(|d| affected.contains(&d.as_str())) {
                if let Some(dep_column) = self.column(dep) {
                    self.visit_dependencies_first(dep_column, affected, visited, ordered);
                }
            }
        }
        ordered.push(column);
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Estado completo: nombres de dataframes y sus columnas (índice = sheet).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SheetState {
    pub df_names: Vec<String>,
    pub sheets: Vec<SheetFrame>,
}

impl SheetState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Agrega un sheet al final.
    pub fn with_sheet(mut self, df_name: &str, frame: SheetFrame) -> Self {
        self.df_names.push(df_name.to_string());
        self.sheets.push(frame);
        self
    }

    pub fn df_name(&self, sheet_index: usize) -> Result<&str, TranspileError> {
        self.df_names
            .get(sheet_index)
            .map(String::as_str)
            .ok_or(TranspileError::SheetNotFound(sheet_index))
    }

    pub fn sheet(&self, sheet_index: usize) -> Result<&SheetFrame, TranspileError> {
        self.sheets.get(sheet_index).ok_or(TranspileError::SheetNotFound(sheet_index))
    }

    pub fn column(&self, sheet_index: usize, column_id: &str) -> Result<&ColumnMeta, TranspileError> {
        self.sheet(sheet_index)?
            .column(column_id)
            .ok_or_else(|| TranspileError::ColumnNotFound { sheet_index,
                                                            column_id: column_id.to_string() })
    }

    pub fn column_header(&self, sheet_index: usize, column_id: &str) -> Result<&ColumnHeader, TranspileError> {
        self.column(sheet_index, column_id).map(|c| &c.column_header)
    }
}
