//! Configuration de l’app.
//!
//! Couches (natif) :
//! - valeurs par défaut
//! - fichier `calculatrice.toml` (répertoire courant, optionnel)
//! - variables d’environnement préfixées `CALC_`, `__` pour l’imbrication :
//!   - `CALC_AFFICHAGE__DECIMALES=4`
//!   - `CALC_LOGGING__DEFAULT=debug`
//!   - `CALC_UTILISATEUR=123e4567-e89b-12d3-a456-426614174000`
//!
//! En wasm32 : valeurs par défaut seulement.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::noyau::format::DECIMALES_MAX;

/// Fichier lu au démarrage (natif).
pub const FICHIER_CONFIG: &str = "calculatrice.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub affichage: AffichageConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// Propriétaire des calculs de cette session ; généré si absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utilisateur: Option<Uuid>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffichageConfig {
    /// Décimales affichées pour les résultats (stockage : f64 sans arrondi).
    #[serde(default = "default_decimales")]
    pub decimales: usize,
}

impl Default for AffichageConfig {
    fn default() -> Self {
        Self {
            decimales: default_decimales(),
        }
    }
}

fn default_decimales() -> usize {
    6
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Niveau par défaut (`error`, `warn`, `info`, `debug`, `trace`).
    #[serde(default = "default_log_level")]
    pub default: String,

    /// Surcharges par module, ex. `calculatrice_poly::noyau = "debug"`.
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default: default_log_level(),
            modules: HashMap::new(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Settings {
    /// Garde-fous après chargement.
    pub fn normalise(mut self) -> Self {
        self.affichage.decimales = self.affichage.decimales.min(DECIMALES_MAX);
        self
    }

    /// Utilisateur configuré, sinon un nouvel identifiant de session.
    pub fn utilisateur_ou_nouveau(&self) -> Uuid {
        self.utilisateur.unwrap_or_else(Uuid::new_v4)
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod chargement {
    use std::path::Path;

    use figment::providers::{Env, Format, Serialized, Toml};
    use figment::Figment;

    use super::{Settings, FICHIER_CONFIG};

    impl Settings {
        /// Charge depuis toutes les sources (défauts < fichier < env).
        pub fn load() -> Result<Self, Box<figment::Error>> {
            Self::load_from(FICHIER_CONFIG)
        }

        pub fn load_from(path: impl AsRef<Path>) -> Result<Self, Box<figment::Error>> {
            Figment::new()
                .merge(Serialized::defaults(Settings::default()))
                .merge(Toml::file(path))
                .merge(Env::prefixed("CALC_").split("__"))
                .extract::<Settings>()
                .map(Settings::normalise)
                .map_err(Box::new)
        }
    }
}
