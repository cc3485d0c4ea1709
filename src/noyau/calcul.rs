// src/noyau/calcul.rs
//
// Enregistrement Calculation : (type, a, b) + résultat toujours recalculé.
//
// Contrats :
// - `result` n’est jamais fourni par l’appelant.
// - Toute modification de type/a/b repasse par evaluate() ; en cas d’échec,
//   l’enregistrement reste intact (commit en bloc).

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::erreur::CalcError;
use super::eval::evaluate;
use super::operation::OperationKind;

#[derive(Clone, Debug, PartialEq)]
pub struct Calculation {
    id: Uuid,
    user_id: Uuid,
    kind: OperationKind,
    a: f64,
    b: f64,
    result: f64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Changements demandés (None = garder la valeur courante).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Changements {
    pub kind: Option<OperationKind>,
    pub a: Option<f64>,
    pub b: Option<f64>,
}

impl Changements {
    pub fn is_empty(&self) -> bool {
        self.kind.is_none() && self.a.is_none() && self.b.is_none()
    }
}

impl Calculation {
    /// Fabrique : évalue d’abord, n’instancie que si le résultat est valide.
    pub fn create(kind: OperationKind, user_id: Uuid, a: f64, b: f64) -> Result<Self, CalcError> {
        let result = evaluate(kind, a, b)?;
        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            user_id,
            kind,
            a,
            b,
            result,
            created_at: now,
            updated_at: now,
        })
    }

    /// Mise à jour : recalcule à partir des NOUVELLES valeurs seulement.
    pub fn apply(&mut self, ch: Changements) -> Result<(), CalcError> {
        let kind = ch.kind.unwrap_or(self.kind);
        let a = ch.a.unwrap_or(self.a);
        let b = ch.b.unwrap_or(self.b);

        let result = evaluate(kind, a, b)?;

        self.kind = kind;
        self.a = a;
        self.b = b;
        self.result = result;
        self.updated_at = Utc::now().max(self.created_at);
        Ok(())
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn result(&self) -> f64 {
        self.result
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn belongs_to(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }
}
