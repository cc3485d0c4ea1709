//! Noyau — évaluation
//!
//! (type, a, b) -> résultat | erreur classée
//!
//! Ordre des contrôles :
//! 1) étiquette reconnue (seulement via `evaluate_tag`)
//! 2) opérandes finis (a puis b)
//! 3) division : b ≠ 0
//! 4) dispatch dans la table (operation.rs)
//!
//! Aucun arrondi : f64 IEEE tel quel. Un dépassement (ex. f64::MAX * 2) donne ±∞,
//! ce n’est pas une erreur.

use tracing::debug;

use super::erreur::{CalcError, Operand};
use super::operation::OperationKind;

/// API publique : évalue une opération sur deux opérandes finis.
pub fn evaluate(kind: OperationKind, a: f64, b: f64) -> Result<f64, CalcError> {
    check_operande(Operand::A, a)?;
    check_operande(Operand::B, b)?;

    if kind == OperationKind::Division && b == 0.0 {
        return Err(CalcError::DivisionByZero);
    }

    let f = kind
        .binaire()
        .ok_or_else(|| CalcError::unknown_operation(kind.tag()))?;

    let r = f(a, b);
    debug!(%kind, a, b, r, "calcul évalué");
    Ok(r)
}

/// Variante pour une étiquette stockée ("Add", "divide", "÷"...).
pub fn evaluate_tag(tag: &str, a: f64, b: f64) -> Result<f64, CalcError> {
    let kind: OperationKind = tag.parse()?;
    evaluate(kind, a, b)
}

/// Opérande fini (ni NaN ni ±∞).
pub(super) fn check_operande(operand: Operand, v: f64) -> Result<(), CalcError> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(CalcError::invalid_operand(operand, v))
    }
}
