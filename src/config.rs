//! Configuración central de la aplicación.
//! Carga variables de entorno (.env) y expone una estructura inmutable (`CONFIG`).
use std::env;

use log::warn;
use once_cell::sync::Lazy;

use crate::errors::AppError;

pub const ADD_COMMENTS_VAR: &str = "STEPSCRIPT_ADD_COMMENTS";

/// Configuración global de la aplicación.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub transpile: TranspileConfig,
}

/// Parámetros por defecto de la transpilación; los flags de la CLI los
/// sobrescriben.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranspileConfig {
    /// Anteponer un comentario descriptivo al código de cada step.
    pub add_comments: bool,
}

impl Default for TranspileConfig {
    fn default() -> Self {
        Self { add_comments: true }
    }
}

impl AppConfig {
    /// Lee la configuración del entorno del proceso.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Igual que `from_env` pero con una fuente de variables arbitraria.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
        where F: Fn(&str) -> Option<String>
    {
        let add_comments = match lookup(ADD_COMMENTS_VAR) {
            Some(raw) => parse_bool(ADD_COMMENTS_VAR, &raw)?,
            None => TranspileConfig::default().add_comments,
        };
        Ok(Self { transpile: TranspileConfig { add_comments } })
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, AppError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(AppError::Config(format!("{key}={other} no es un booleano válido"))),
    }
}

/// Instancia global perezosa de configuración, evaluada una sola vez. Un
/// valor inválido se reporta y se usan los valores por defecto.
pub static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    let _ = dotenvy::dotenv();
    AppConfig::from_env().unwrap_or_else(|e| {
                             warn!("config:invalid {e}");
                             AppConfig::default()
                         })
});

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(value: Option<&str>) -> impl Fn(&str) -> Option<String> + '_ {
        move |key| if key == ADD_COMMENTS_VAR { value.map(str::to_string) } else { None }
    }

    #[test]
    fn comments_enabled_by_default() {
        let cfg = AppConfig::from_lookup(lookup(None)).unwrap();
        assert!(cfg.transpile.add_comments);
    }

    #[test]
    fn accepts_common_boolean_spellings() {
        assert!(!AppConfig::from_lookup(lookup(Some("false"))).unwrap().transpile.add_comments);
        assert!(!AppConfig::from_lookup(lookup(Some(" 0 "))).unwrap().transpile.add_comments);
        assert!(AppConfig::from_lookup(lookup(Some("YES"))).unwrap().transpile.add_comments);
    }

    #[test]
    fn rejects_garbage() {
        let err = AppConfig::from_lookup(lookup(Some("maybe"))).unwrap_err();
        assert!(matches!(err, AppError::Config(ref msg) if msg.contains(ADD_COMMENTS_VAR)));
    }
}
