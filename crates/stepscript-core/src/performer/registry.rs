//! Tabla de despacho `step_type -> StepPerformer`.
use std::fmt;

use indexmap::IndexMap;

use super::StepPerformer;

/// Registro de performers, en orden de inserción.
#[derive(Default)]
pub struct StepPerformerRegistry {
    performers: IndexMap<String, Box<dyn StepPerformer>>,
}

impl StepPerformerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registra un performer. Si ya había uno para el mismo tipo, lo
    /// reemplaza y devuelve el anterior.
    pub fn register(&mut self, performer: Box<dyn StepPerformer>) -> Option<Box<dyn StepPerformer>> {
        let key = performer.step_type().to_string();
        self.performers.insert(key, performer)
    }

    /// Variante encadenable de `register`.
    pub fn with<P>(mut self, performer: P) -> Self
        where P: StepPerformer + 'static
    {
        self.register(Box::new(performer));
        self
    }

    pub fn get(&self, step_type: &str) -> Option<&dyn StepPerformer> {
        self.performers.get(step_type).map(|p| p.as_ref())
    }

    pub fn contains(&self, step_type: &str) -> bool {
        self.performers.contains_key(step_type)
    }

    pub fn step_types(&self) -> impl Iterator<Item = &str> {
        self.performers.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.performers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.performers.is_empty()
    }
}

impl fmt::Debug for StepPerformerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepPerformerRegistry")
         .field("step_types", &self.performers.keys().collect::<Vec<_>>())
         .finish()
    }
}
