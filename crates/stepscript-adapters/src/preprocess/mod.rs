//! Preprocesadores de sesión.
//!
//! Cada uno corre una única vez antes del historial. Sin execution data (o
//! con execution data que no requiere código) devuelven un vector vacío.

mod clean_column_headers;
mod convert_to_dataframe;
mod deduplicate_column_headers;

pub use clean_column_headers::CleanColumnHeaders;
pub use convert_to_dataframe::ConvertToDataframe;
pub use deduplicate_column_headers::DeduplicateColumnHeaders;
