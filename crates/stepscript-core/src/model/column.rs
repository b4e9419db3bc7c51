//! Headers y metadatos de columna.
//!
//! Un header puede ser string, entero, float o booleano (tal como los acepta
//! el runtime de dataframes). El código generado necesita el literal exacto
//! de cada header, por eso `ColumnHeader` sabe renderizarse a sí mismo.
use std::fmt;

use serde::{Deserialize, Serialize};

/// Header de columna tal como aparece en el dataframe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColumnHeader {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl ColumnHeader {
    /// Literal del lenguaje destino que referencia este header
    /// (`'A'`, `123`, `1.5`, `True`).
    pub fn to_transpiled_code(&self) -> String {
        match self {
            ColumnHeader::Str(s) => quote_python_str(s),
            ColumnHeader::Int(i) => i.to_string(),
            ColumnHeader::Float(f) => format_python_float(*f),
            ColumnHeader::Bool(true) => "True".to_string(),
            ColumnHeader::Bool(false) => "False".to_string(),
        }
    }
}

impl fmt::Display for ColumnHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnHeader::Str(s) => write!(f, "{s}"),
            ColumnHeader::Int(i) => write!(f, "{i}"),
            ColumnHeader::Float(x) => write!(f, "{}", format_python_float(*x)),
            ColumnHeader::Bool(true) => write!(f, "True"),
            ColumnHeader::Bool(false) => write!(f, "False"),
        }
    }
}

impl From<&str> for ColumnHeader {
    fn from(s: &str) -> Self {
        ColumnHeader::Str(s.to_string())
    }
}

impl From<String> for ColumnHeader {
    fn from(s: String) -> Self {
        ColumnHeader::Str(s)
    }
}

impl From<i64> for ColumnHeader {
    fn from(i: i64) -> Self {
        ColumnHeader::Int(i)
    }
}

/// Metadatos de una columna dentro de un sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnMeta {
    /// Identificador estable (no cambia con renames).
    pub column_id: String,
    pub column_header: ColumnHeader,
    /// dtype textual del runtime (`int64`, `object`, `datetime64[ns]`, ...).
    pub dtype: String,
    /// Fórmula que define la columna, si la tiene.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formula: Option<ColumnFormula>,
}

/// Fórmula de una columna calculada.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnFormula {
    /// Fórmula tal como la escribió el usuario (`=A + 1`).
    pub spreadsheet_formula: String,
    /// Expresión equivalente en el código generado (`df1['A'] + 1`).
    pub transpiled_formula: String,
    /// Ids de las columnas del mismo sheet que la fórmula referencia.
    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl ColumnMeta {
    /// Columna cuyo id coincide con su header inicial.
    pub fn new(header: impl Into<ColumnHeader>, dtype: &str) -> Self {
        let column_header = header.into();
        Self { column_id: column_header.to_string(),
               column_header,
               dtype: dtype.to_string(),
               formula: None }
    }

    pub fn with_formula(mut self, formula: ColumnFormula) -> Self {
        self.formula = Some(formula);
        self
    }

    /// `true` si la fórmula de esta columna referencia `column_id`.
    pub fn depends_on(&self, column_id: &str) -> bool {
        self.formula
            .as_ref()
            .is_some_and(|f| f.dependencies.iter().any(|d| d == column_id))
    }
}

/// Literal de string con comillas simples. Escapa `\`, `'` y todo
/// carácter de control, de modo que el literal siempre ocupa una línea.
pub fn quote_python_str(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\x{:02x}", c as u32)),
            other => out.push(other),
        }
    }
    out.push('\'');
    out
}

fn format_python_float(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 {
        format!("{f:.1}")
    } else {
        f.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_headers_are_quoted_and_escaped() {
        assert_eq!(ColumnHeader::from("ABC_HAHA-123").to_transpiled_code(), "'ABC_HAHA-123'");
        assert_eq!(ColumnHeader::from("it's").to_transpiled_code(), r"'it\'s'");
        assert_eq!(ColumnHeader::from(r"a\b").to_transpiled_code(), r"'a\\b'");
    }

    #[test]
    fn control_characters_never_leave_the_literal() {
        assert_eq!(ColumnHeader::from("x\ry").to_transpiled_code(), r"'x\ry'");
        assert_eq!(ColumnHeader::from("a\nb\tc").to_transpiled_code(), r"'a\nb\tc'");
        assert_eq!(quote_python_str("bell\u{7}\u{1b}\u{85}"), r"'bell\x07\x1b\x85'");
        assert_eq!(quote_python_str("ñandú"), "'ñandú'");
    }

    #[test]
    fn non_string_headers_render_verbatim() {
        assert_eq!(ColumnHeader::Int(123).to_transpiled_code(), "123");
        assert_eq!(ColumnHeader::Float(2.0).to_transpiled_code(), "2.0");
        assert_eq!(ColumnHeader::Float(2.5).to_transpiled_code(), "2.5");
        assert_eq!(ColumnHeader::Bool(true).to_transpiled_code(), "True");
    }

    #[test]
    fn untagged_deserialization_picks_the_narrowest_variant() {
        let h: Vec<ColumnHeader> = serde_json::from_str(r#"["A", 1, 1.5, false]"#).unwrap();
        assert_eq!(h,
                   vec![ColumnHeader::from("A"), ColumnHeader::Int(1), ColumnHeader::Float(1.5), ColumnHeader::Bool(false)]);
    }
}
