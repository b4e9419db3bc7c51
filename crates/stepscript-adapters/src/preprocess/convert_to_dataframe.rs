//! `convert_to_dataframe`: los argumentos pasados como ruta de archivo se
//! leen a un dataframe antes de cualquier step.

use log::debug;
use serde::Deserialize;
use serde_json::Value;
use stepscript_core::performer::decode_execution_data;
use stepscript_core::model::quote_python_str;
use stepscript_core::{PreprocessStepPerformer, StepHistory, TranspileError};

const PREPROCESS_STEP_TYPE: &str = "convert_to_dataframe";

#[derive(Debug, Clone, Deserialize)]
struct ConvertToDataframeExecutionData {
    /// Si viene vacío se usan los nombres del step `initialize`.
    #[serde(default)]
    df_names: Vec<String>,
    /// Una entrada por argumento; `None` si ya era un dataframe.
    file_paths: Vec<Option<String>>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConvertToDataframe;

impl PreprocessStepPerformer for ConvertToDataframe {
    fn preprocess_step_type(&self) -> &str {
        PREPROCESS_STEP_TYPE
    }

    fn transpile(&self, history: &StepHistory, execution_data: Option<&Value>) -> Result<Vec<String>, TranspileError> {
        let Some(data) = decode_execution_data::<ConvertToDataframeExecutionData>(PREPROCESS_STEP_TYPE, execution_data)? else {
            return Ok(vec![]);
        };
        let df_names = if data.df_names.is_empty() {
            history.initial_df_names()
        } else {
            data.df_names.as_slice()
        };
        if df_names.len() != data.file_paths.len() {
            debug!("convert_to_dataframe:length mismatch df_names={} file_paths={}",
                   df_names.len(),
                   data.file_paths.len());
        }

        let mut code: Vec<String> = df_names.iter()
                                            .zip(&data.file_paths)
                                            .filter_map(|(df_name, path)| {
                                                path.as_deref().map(|p| format!("{df_name} = pd.read_csv({})", quote_python_str(p)))
                                            })
                                            .collect();
        if !code.is_empty() {
            code.insert(0, "import pandas as pd".to_string());
        }
        Ok(code)
    }
}
