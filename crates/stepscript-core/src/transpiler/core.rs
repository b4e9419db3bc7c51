//! Implementación del `Transpiler`.

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use super::{TranspiledCode, TranspilerBuilder};
use crate::constants::{is_skipped_step_type, COMMENT_PREFIX, IN_PREVIOUS_STEP_COMMENT};
use crate::errors::TranspileError;
use crate::history::StepHistory;
use crate::model::{PreprocessExecutionData, Step};
use crate::performer::{PreprocessStepPerformer, StepPerformerRegistry};

/// Opciones de una transpilación.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranspileOptions {
    /// Emitir la descripción de cada step como comentario previo a su código.
    pub add_comments: bool,
}

impl Default for TranspileOptions {
    fn default() -> Self {
        Self { add_comments: true }
    }
}

/// Transpilador determinista del historial de steps.
///
/// No guarda estado entre llamadas: cada `transpile` recalcula el programa
/// completo, por lo que dos llamadas con la misma entrada producen la misma
/// salida byte a byte.
pub struct Transpiler {
    registry: StepPerformerRegistry,
    preprocessors: Vec<Box<dyn PreprocessStepPerformer>>,
    options: TranspileOptions,
}

impl Transpiler {
    #[inline]
    pub fn builder() -> TranspilerBuilder {
        TranspilerBuilder::new()
    }

    pub fn new(registry: StepPerformerRegistry,
               preprocessors: Vec<Box<dyn PreprocessStepPerformer>>,
               options: TranspileOptions)
               -> Self {
        Self { registry,
               preprocessors,
               options }
    }

    pub fn options(&self) -> TranspileOptions {
        self.options
    }

    pub fn registry(&self) -> &StepPerformerRegistry {
        &self.registry
    }

    /// Tipos de preprocesador en el orden en que se ejecutan.
    pub fn preprocess_step_types(&self) -> Vec<&str> {
        self.preprocessors.iter().map(|p| p.preprocess_step_type()).collect()
    }

    /// Transpila el historial hasta el step checked out, con las opciones
    /// configuradas.
    pub fn transpile(&self,
                     history: &StepHistory,
                     preprocess_execution_data: &PreprocessExecutionData)
                     -> Result<TranspiledCode, TranspileError> {
        self.transpile_with(history, preprocess_execution_data, self.options.add_comments)
    }

    /// Igual que `transpile` pero con `add_comments` explícito.
    pub fn transpile_with(&self,
                          history: &StepHistory,
                          preprocess_execution_data: &PreprocessExecutionData,
                          add_comments: bool)
                          -> Result<TranspiledCode, TranspileError> {
        debug!("transpile:start steps={} curr_step_idx={} add_comments={add_comments}",
               history.len(),
               history.curr_step_idx());
        let steps = history.selected_steps()?;

        let mut code = self.transpile_preprocessing(history, preprocess_execution_data)?;
        code.extend(self.render_steps(steps, add_comments)?);

        if history.is_viewing_previous_step() {
            code.push(IN_PREVIOUS_STEP_COMMENT.to_string());
        }

        debug!("transpile:done lines={}", code.len());
        Ok(TranspiledCode::new(code))
    }

    /// Código de todos los preprocesadores, en el orden configurado.
    pub fn transpile_preprocessing(&self,
                                   history: &StepHistory,
                                   preprocess_execution_data: &PreprocessExecutionData)
                                   -> Result<Vec<String>, TranspileError> {
        let mut code = Vec::new();
        for performer in &self.preprocessors {
            let kind = performer.preprocess_step_type();
            let execution_data = preprocess_execution_data.get(kind);
            if execution_data.is_none() {
                debug!("preprocess:no execution data kind={kind}");
            }
            let lines = performer.transpile(history, execution_data)?;
            if !lines.is_empty() {
                code.extend(lines);
            }
        }
        Ok(code)
    }

    /// Renderiza los steps dados, en orden.
    pub fn render_steps(&self, steps: &[Step], add_comments: bool) -> Result<Vec<String>, TranspileError> {
        let mut code = Vec::new();
        for step in steps {
            code.extend(self.render_step(step, add_comments)?);
        }
        Ok(code)
    }

    /// Comentario + código de un step, o nada si el step no genera código.
    fn render_step(&self, step: &Step, add_comments: bool) -> Result<Vec<String>, TranspileError> {
        if is_skipped_step_type(&step.step_type) {
            return Ok(Vec::new());
        }
        let performer = self.registry
                            .get(&step.step_type)
                            .ok_or_else(|| TranspileError::UnknownStepType(step.step_type.clone()))?;

        let comment = if add_comments {
            comment_lines(&performer.describe(&step.params, &step.df_names)?)
        } else {
            Vec::new()
        };

        let transpiled = performer.transpile(&step.prev_state,
                                             &step.post_state,
                                             step.execution_data.as_ref(),
                                             &step.params)?;
        if transpiled.is_empty() {
            debug!("render:empty step_type={} step_id={}", step.step_type, step.step_id);
            return Ok(Vec::new());
        }

        let mut step_code = Vec::with_capacity(transpiled.len() + comment.len());
        step_code.extend(comment);
        step_code.extend(transpiled);
        Ok(step_code)
    }
}

/// Una línea de comentario por cada línea de la descripción (`\n`, `\r\n`
/// o `\r` sueltos).
fn comment_lines(description: &str) -> Vec<String> {
    description.split(|c| c == '\n' || c == '\r')
               .filter(|line| !line.is_empty())
               .map(|line| format!("{COMMENT_PREFIX}{line}"))
               .collect()
}

impl fmt::Debug for Transpiler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transpiler")
         .field("registry", &self.registry)
         .field("preprocessors", &self.preprocess_step_types())
         .field("options", &self.options)
         .finish()
    }
}
