//! Helpers de formato para el código generado.
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use stepscript_core::{ColumnHeader, SheetFrame};

pub const RENAME_HEADERS_COMMENT: &str = "# Rename headers to make them work with Mito";

/// Execution data compartida por los renames masivos de headers: un mapa
/// `header viejo -> header nuevo` por dataframe, en orden de sheet.
#[derive(Debug, Clone, Deserialize)]
pub struct HeaderRenamesExecutionData {
    pub column_header_renames_list: Vec<IndexMap<String, String>>,
}

/// `df1['A']`
pub fn column_ref(df_name: &str, header: &ColumnHeader) -> String {
    format!("{df_name}[{}]", header.to_transpiled_code())
}

/// `['C', 'B']`
pub fn header_list(headers: &[&ColumnHeader]) -> String {
    let items: Vec<String> = headers.iter().map(|h| h.to_transpiled_code()).collect();
    format!("[{}]", items.join(", "))
}

/// `{'A': 'B'}`
pub fn rename_dict(renames: &[(&ColumnHeader, &ColumnHeader)]) -> String {
    let items: Vec<String> = renames.iter()
                                    .map(|(old, new)| format!("{}: {}", old.to_transpiled_code(), new.to_transpiled_code()))
                                    .collect();
    format!("{{{}}}", items.join(", "))
}

/// Diccionario con el formato de `json.dumps`: `{"A B": "A_B"}`.
pub fn json_dict(renames: &IndexMap<String, String>) -> String {
    let items: Vec<String> = renames.iter()
                                    .map(|(k, v)| format!("{}: {}", Value::from(k.as_str()), Value::from(v.as_str())))
                                    .collect();
    format!("{{{}}}", items.join(", "))
}

/// Reasigna las columnas calculadas que dependen de `column_id`, para que
/// reflejen su nuevo valor.
pub fn dependant_columns_code(df_name: &str, frame: &SheetFrame, column_id: &str) -> Vec<String> {
    frame.dependant_columns(column_id)
         .into_iter()
         .filter_map(|c| {
             c.formula
              .as_ref()
              .map(|f| format!("{} = {}", column_ref(df_name, &c.column_header), f.transpiled_formula))
         })
         .collect()
}

/// Lista legible para descripciones: `C, B`.
pub fn display_list<T: std::fmt::Display>(items: &[T]) -> String {
    items.iter().map(|i| i.to_string()).collect::<Vec<_>>().join(", ")
}

/// Un `rename` por dataframe con renames, precedido del comentario fijo. Si
/// ningún dataframe tiene renames, no hay código.
pub fn rename_headers_code(df_names: &[String], renames_list: &[IndexMap<String, String>]) -> Vec<String> {
    let mut code: Vec<String> = df_names.iter()
                                        .zip(renames_list)
                                        .filter(|(_, renames)| !renames.is_empty())
                                        .map(|(df_name, renames)| {
                                            format!("{df_name}.rename(columns={}, inplace=True)", json_dict(renames))
                                        })
                                        .collect();
    if !code.is_empty() {
        code.insert(0, RENAME_HEADERS_COMMENT.to_string());
    }
    code
}
