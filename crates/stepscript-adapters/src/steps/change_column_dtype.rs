//! `change_column_dtype`: convierte una columna entre bool, int, float, str,
//! datetime y timedelta.
//!
//! La tabla de conversiones replica la que se usa al ejecutar el step; las
//! combinaciones sin conversión posible son un error de la variante. Cambiar
//! entre dtypes de la misma clase no genera código. Tras la conversión se
//! reasignan las columnas cuyas fórmulas dependen de la columna convertida.

use serde::Deserialize;
use serde_json::Value;
use stepscript_core::performer::decode_execution_data;
use stepscript_core::{SheetState, TranspileError, TypedStepPerformer};

use crate::codegen::{column_ref, dependant_columns_code};
use crate::dtype::DtypeClass;

#[derive(Debug, Clone, Deserialize)]
pub struct ChangeColumnDtypeParams {
    pub sheet_index: usize,
    pub column_id: String,
    pub old_dtype: String,
    pub new_dtype: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ChangeColumnDtypeExecutionData {
    /// Formato detectado al convertir strings a datetime.
    #[serde(default)]
    datetime_format: Option<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ChangeColumnDtype;

impl TypedStepPerformer for ChangeColumnDtype {
    type Params = ChangeColumnDtypeParams;

    fn step_type(&self) -> &'static str {
        "change_column_dtype"
    }

    fn step_display_name(&self) -> &'static str {
        "Changed Column Dtype"
    }

    fn describe_typed(&self, params: ChangeColumnDtypeParams, _df_names: &[String]) -> String {
        format!("Changed {} from {} to {}", params.column_id, params.old_dtype, params.new_dtype)
    }

    fn transpile_typed(&self,
                       _prev_state: &SheetState,
                       post_state: &SheetState,
                       execution_data: Option<&Value>,
                       params: ChangeColumnDtypeParams)
                       -> Result<Vec<String>, TranspileError> {
        let df_name = post_state.df_name(params.sheet_index)?;
        let header = post_state.column_header(params.sheet_index, &params.column_id)?;
        let column = column_ref(df_name, header);
        let data = decode_execution_data::<ChangeColumnDtypeExecutionData>(TypedStepPerformer::step_type(self),
                                                                            execution_data)?.unwrap_or_default();

        let invalid = || TranspileError::InvalidDtypeChange { column_header: header.to_string(),
                                                              old_dtype: params.old_dtype.clone(),
                                                              new_dtype: params.new_dtype.clone() };
        let old = DtypeClass::classify(&params.old_dtype).ok_or_else(invalid)?;
        let new = DtypeClass::classify(&params.new_dtype).ok_or_else(invalid)?;

        let Some(conversion) = conversion_code(&column, old, new, data.datetime_format.as_deref()) else {
            return Err(invalid());
        };
        let Some(conversion) = conversion else {
            return Ok(vec![]);
        };

        let mut code = Vec::with_capacity(2);
        if conversion.contains("pd.") {
            code.push("import pandas as pd".to_string());
        }
        code.push(format!("{column} = {conversion}"));
        code.extend(dependant_columns_code(df_name,
                                           post_state.sheet(params.sheet_index)?,
                                           &params.column_id));
        Ok(code)
    }
}

/// `None` si la conversión no es posible; `Some(None)` si no hace falta
/// convertir; `Some(Some(expr))` con la expresión convertida.
fn conversion_code(column: &str, old: DtypeClass, new: DtypeClass, datetime_format: Option<&str>) -> Option<Option<String>> {
    use DtypeClass::*;

    let expr = match (old, new) {
        (Bool, Datetime) | (Bool, Timedelta) | (Datetime, Timedelta) | (Timedelta, Datetime) => return None,

        (Bool, Int) => format!("{column}.astype('int')"),
        (Bool, Float) => format!("{column}.astype('float')"),
        (Bool | Int | Float | Timedelta, Str) => format!("{column}.astype('str')"),

        (Int | Float, Bool) => format!("{column}.fillna(False).astype('bool')"),
        (Int, Float) => format!("{column}.astype('float')"),
        (Float, Int) => format!("{column}.astype('int')"),
        (Int | Float, Datetime) => format!("pd.to_datetime({column}, unit='s', errors='coerce')"),
        (Int | Float, Timedelta) => format!("pd.to_timedelta({column}, unit='s', errors='coerce')"),

        (Str, Bool) => format!("to_boolean_series({column})"),
        (Str, Int) => format!("to_int_series({column})"),
        (Str, Float) => format!("to_float_series({column})"),
        (Str, Datetime) => match datetime_format {
            Some(fmt) => format!("pd.to_datetime({column}, format='{fmt}', errors='coerce')"),
            None => format!("pd.to_datetime({column}, infer_datetime_format=True, errors='coerce')"),
        },
        (Str, Timedelta) => format!("pd.to_timedelta({column}, errors='coerce')"),

        (Datetime | Timedelta, Bool) => format!("~{column}.isnull()"),
        (Datetime, Int) => format!("{column}.astype('int') / 10**9"),
        (Datetime, Float) => format!("{column}.astype('int').astype('float') / 10**9"),
        (Datetime, Str) => format!("{column}.dt.strftime('%Y-%m-%d %X')"),
        (Timedelta, Int) => format!("{column}.dt.total_seconds().astype('int')"),
        (Timedelta, Float) => format!("{column}.dt.total_seconds()"),

        (Bool, Bool) | (Int, Int) | (Float, Float) | (Str, Str) | (Datetime, Datetime) | (Timedelta, Timedelta) => {
            return Some(None)
        }
    };
    Some(Some(expr))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_conversions() {
        let c = "df1['A']";
        assert_eq!(conversion_code(c, DtypeClass::Int, DtypeClass::Float, None),
                   Some(Some("df1['A'].astype('float')".to_string())));
        assert_eq!(conversion_code(c, DtypeClass::Float, DtypeClass::Bool, None),
                   Some(Some("df1['A'].fillna(False).astype('bool')".to_string())));
    }

    #[test]
    fn impossible_and_identity_conversions() {
        assert_eq!(conversion_code("x", DtypeClass::Bool, DtypeClass::Datetime, None), None);
        assert_eq!(conversion_code("x", DtypeClass::Timedelta, DtypeClass::Datetime, None), None);
        assert_eq!(conversion_code("x", DtypeClass::Str, DtypeClass::Str, None), Some(None));
    }

    #[test]
    fn string_to_datetime_uses_detected_format() {
        assert_eq!(conversion_code("x", DtypeClass::Str, DtypeClass::Datetime, Some("%d-%m-%Y")),
                   Some(Some("pd.to_datetime(x, format='%d-%m-%Y', errors='coerce')".to_string())));
        assert_eq!(conversion_code("x", DtypeClass::Str, DtypeClass::Datetime, None),
                   Some(Some("pd.to_datetime(x, infer_datetime_format=True, errors='coerce')".to_string())));
    }
}
