//! Helpers compartidos por los tests de integración: construyen historiales
//! encadenando snapshots de estado como lo haría el gestor de steps.
#![allow(dead_code)]

use std::sync::Arc;

use serde_json::Value;
use stepscript_core::{SheetFrame, SheetState, Step, StepHistory};

pub fn state(sheets: &[(&str, &[(&str, &str)])]) -> SheetState {
    sheets.iter()
          .fold(SheetState::new(), |s, (name, cols)| s.with_sheet(name, SheetFrame::from_headers(cols)))
}

pub struct Session {
    pub history: StepHistory,
    last: Arc<SheetState>,
}

impl Session {
    pub fn new(initial: SheetState) -> Self {
        let last = Arc::new(initial);
        let history = StepHistory::new(Step::initialize(last.clone())).expect("initialize history");
        Self { history, last }
    }

    /// Agrega un step cuyo estado previo es el posterior del último step.
    pub fn apply(&mut self, step_type: &str, params: Value, post: SheetState, execution_data: Option<Value>) -> &mut Self {
        let post = Arc::new(post);
        let mut step = Step::new(step_type, params, self.last.clone(), post.clone());
        step.execution_data = execution_data;
        self.history.push(step);
        self.last = post;
        self
    }

    /// Step que no cambia el estado.
    pub fn apply_same(&mut self, step_type: &str, params: Value, execution_data: Option<Value>) -> &mut Self {
        let post = (*self.last).clone();
        self.apply(step_type, params, post, execution_data)
    }
}
