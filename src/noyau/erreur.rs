//! Noyau — erreurs classées
//!
//! Trois familles seulement, toutes locales et non ré-essayables.
//! Les messages `Display` servent au diagnostic (logs) ; le texte pour
//! l’utilisateur est produit par l’app (vue.rs).

use std::fmt;

use thiserror::Error;
use uuid::Uuid;

/// Quel opérande a été refusé.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operand {
    A,
    B,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::A => f.write_str("a"),
            Operand::B => f.write_str("b"),
        }
    }
}

/// Échec d’évaluation d’un calcul.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("operand {operand} is not a finite number: {value}")]
    InvalidOperand { operand: Operand, value: f64 },

    #[error("division by zero")]
    DivisionByZero,

    #[error("unknown operation type: {tag:?}")]
    UnknownOperationType { tag: String },
}

impl CalcError {
    pub fn invalid_operand(operand: Operand, value: f64) -> Self {
        Self::InvalidOperand { operand, value }
    }

    pub fn unknown_operation(tag: impl Into<String>) -> Self {
        Self::UnknownOperationType { tag: tag.into() }
    }
}

/// Échec de lecture/validation d’un schéma (entrée JSON ou formulaire).
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("at least one field (type, a or b) must be provided for update")]
    EmptyUpdate,

    #[error(transparent)]
    Calc(#[from] CalcError),
}

/// Échec d’une opération sur l’historique.
#[derive(Error, Debug)]
pub enum HistoriqueError {
    #[error("calculation not found: {id}")]
    NotFound { id: Uuid },

    #[error("calculation {id} belongs to another user")]
    Forbidden { id: Uuid },

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Calc(#[from] CalcError),
}

impl HistoriqueError {
    /// L’erreur arithmétique sous-jacente, si c’en est une.
    pub fn as_calc(&self) -> Option<&CalcError> {
        match self {
            HistoriqueError::Calc(e) | HistoriqueError::Schema(SchemaError::Calc(e)) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_diagnostic() {
        let e = CalcError::invalid_operand(Operand::B, f64::INFINITY);
        assert_eq!(e.to_string(), "operand b is not a finite number: inf");

        let e = CalcError::unknown_operation("Modulus");
        assert_eq!(e.to_string(), "unknown operation type: \"Modulus\"");
    }

    #[test]
    fn as_calc_traverse_schema() {
        let e = HistoriqueError::from(SchemaError::from(CalcError::DivisionByZero));
        assert_eq!(e.as_calc(), Some(&CalcError::DivisionByZero));

        let e = HistoriqueError::NotFound { id: Uuid::nil() };
        assert!(e.as_calc().is_none());
    }
}
