//! Constantes y políticas del transpilador.
//!
//! Las reglas de omisión de steps y los textos fijos del programa generado
//! viven aquí para poder probarlos de forma independiente del loop de
//! renderizado.

/// Versión lógica del transpilador. Forma parte del fingerprint de cada
/// `TranspiledCode`, de modo que un cambio de versión invalida fingerprints
/// previos aunque el código generado sea idéntico.
pub const TRANSPILER_VERSION: &str = "T1.0";

/// Tipo del step de bookkeeping con el que arranca todo historial.
pub const INITIALIZE_STEP_TYPE: &str = "initialize";

/// Tipos de step que nunca se renderizan (ni comentario ni código).
pub const SKIPPED_STEP_TYPES: &[&str] = &[INITIALIZE_STEP_TYPE];

/// Import fijo que precede al código: el runtime cuyas funciones llama el
/// programa generado.
pub const TRANSPILED_IMPORTS: &str = "from mitosheet import *";

/// Marcador de comentario del lenguaje destino.
pub const COMMENT_PREFIX: &str = "# ";

/// Línea que se agrega al final cuando la vista está en un step anterior al
/// último del historial.
pub const IN_PREVIOUS_STEP_COMMENT: &str =
    "# You're viewing a previous step. Click fast forward in the Mitosheet above to see the full analysis.";

/// `true` si los steps de este tipo se omiten por completo al renderizar.
pub fn is_skipped_step_type(step_type: &str) -> bool {
    SKIPPED_STEP_TYPES.contains(&step_type)
}
