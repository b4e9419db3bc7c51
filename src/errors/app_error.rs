use stepscript_core::TranspileError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Error de transpilación: {0}")]
    Transpile(#[from] TranspileError),
    #[error("Error en IO: {0}")]
    Io(#[from] std::io::Error),
    #[error("Error de JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Error de configuración: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transpile_variant_from() {
        let err: AppError = TranspileError::UnknownStepType("pivot".into()).into();
        assert_eq!(err.to_string(), "Error de transpilación: no performer registered for step type `pivot`");
    }

    #[test]
    fn test_io_variant_from() {
        let io_err = std::io::Error::other("falló IO");
        let err: AppError = io_err.into();
        assert_eq!(err.to_string(), "Error en IO: falló IO");
    }

    #[test]
    fn test_config_variant_format() {
        let err = AppError::Config("mala configuración".into());
        assert_eq!(err.to_string(), "Error de configuración: mala configuración");
    }
}
