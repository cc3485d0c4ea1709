//! Noyau calculs
//!
//! Organisation interne :
//! - operation.rs  : type d’opération (étiquette) + table de dispatch
//! - erreur.rs     : erreurs classées (CalcError, SchemaError, HistoriqueError)
//! - eval.rs       : évaluation pure (type, a, b) -> résultat
//! - calcul.rs     : enregistrement Calculation (résultat toujours recalculé)
//! - schema.rs     : schémas JSON création / mise à jour / lecture
//! - historique.rs : historique en mémoire, par propriétaire
//! - format.rs     : affichage des nombres

pub mod calcul;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod historique;
pub mod operation;
pub mod schema;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use erreur::{CalcError, HistoriqueError, Operand, SchemaError};
pub use eval::{evaluate, evaluate_tag};
pub use operation::OperationKind;
