//! Clasificación de dtypes textuales del runtime de dataframes.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DtypeClass {
    Bool,
    Int,
    Float,
    Str,
    Datetime,
    Timedelta,
}

impl DtypeClass {
    /// `None` si el dtype no pertenece a ninguna clase soportada.
    pub fn classify(dtype: &str) -> Option<Self> {
        let d = dtype.to_ascii_lowercase();
        if d.contains("timedelta") {
            Some(DtypeClass::Timedelta)
        } else if d.contains("datetime") {
            Some(DtypeClass::Datetime)
        } else if d == "bool" || d == "boolean" {
            Some(DtypeClass::Bool)
        } else if d.contains("int") {
            Some(DtypeClass::Int)
        } else if d.contains("float") {
            Some(DtypeClass::Float)
        } else if d == "object" || d == "str" || d == "string" {
            Some(DtypeClass::Str)
        } else {
            None
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, DtypeClass::Int | DtypeClass::Float)
    }
}
