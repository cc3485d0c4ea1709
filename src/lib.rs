//! Calculatrice — noyau de calcul polymorphe + app egui.
//!
//! - `noyau`   : évaluation (type, a, b), enregistrements, schémas, historique
//! - `app`     : état + vue egui (natif + web)
//! - `config`  : réglages (figment en natif)
//! - `logging` : journalisation (natif)

pub mod app;
pub mod config;
#[cfg(not(target_arch = "wasm32"))]
pub mod logging;
pub mod noyau;
