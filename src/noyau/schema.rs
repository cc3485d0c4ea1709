//! Noyau — schémas d’entrée/sortie (JSON)
//!
//! - `CalculationCreate` : demande de création (type, a, b, user_id)
//! - `CalculationUpdate` : mise à jour partielle (au moins un champ)
//! - `CalculationRead`   : vue complète d’un enregistrement
//!
//! Le champ JSON `type` porte l’étiquette brute ; elle n’est interprétée
//! qu’à la validation, pour que le type inconnu reste une `CalcError`.
//!
//! `result` peut valoir ±∞ (dépassement avec opérandes finis) : JSON n’a pas
//! de nombre pour ça, il sort en texte (`"inf"`, `"-inf"`) et se relit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::calcul::{Calculation, Changements};
use super::erreur::{CalcError, Operand, SchemaError};
use super::eval::{check_operande, evaluate};
use super::operation::OperationKind;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculationCreate {
    #[serde(rename = "type")]
    pub kind: String,
    pub a: f64,
    pub b: f64,
    pub user_id: Uuid,
}

/// Tuple validé (contrat d’entrée du noyau).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntreeValidee {
    pub kind: OperationKind,
    pub a: f64,
    pub b: f64,
    pub user_id: Uuid,
}

impl CalculationCreate {
    pub fn new(kind: impl Into<String>, a: f64, b: f64, user_id: Uuid) -> Self {
        Self {
            kind: kind.into(),
            a,
            b,
            user_id,
        }
    }

    pub fn from_json(s: &str) -> Result<Self, SchemaError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Étiquette reconnue puis évaluation : les règles arithmétiques
    /// restent celles de `evaluate`.
    pub fn validate(&self) -> Result<EntreeValidee, CalcError> {
        let kind: OperationKind = self.kind.parse()?;
        evaluate(kind, self.a, self.b).map(|_| EntreeValidee {
            kind,
            a: self.a,
            b: self.b,
            user_id: self.user_id,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculationUpdate {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub b: Option<f64>,
}

impl CalculationUpdate {
    pub fn from_json(s: &str) -> Result<Self, SchemaError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Champs présents -> changements typés. Le contrôle arithmétique
    /// (division par zéro sur les valeurs fusionnées) reste à Calculation::apply.
    pub fn validate(&self) -> Result<Changements, SchemaError> {
        if self.kind.is_none() && self.a.is_none() && self.b.is_none() {
            return Err(SchemaError::EmptyUpdate);
        }

        let kind = match &self.kind {
            Some(t) => Some(t.parse::<OperationKind>()?),
            None => None,
        };
        if let Some(a) = self.a {
            check_operande(Operand::A, a)?;
        }
        if let Some(b) = self.b {
            check_operande(Operand::B, b)?;
        }

        Ok(Changements {
            kind,
            a: self.a,
            b: self.b,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculationRead {
    pub id: Uuid,
    pub user_id: Uuid,
    #[serde(rename = "type")]
    pub kind: OperationKind,
    pub a: f64,
    pub b: f64,
    #[serde(with = "resultat_json")]
    pub result: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// f64 fini -> nombre JSON ; ±∞ / NaN -> texte.
mod resultat_json {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(x: &f64, s: S) -> Result<S::Ok, S::Error> {
        if x.is_finite() {
            s.serialize_f64(*x)
        } else {
            s.serialize_str(&x.to_string())
        }
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Brut {
        Nombre(f64),
        Texte(String),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
        match Brut::deserialize(d)? {
            Brut::Nombre(x) => Ok(x),
            Brut::Texte(t) => t
                .parse::<f64>()
                .ok()
                .filter(|x| !x.is_finite())
                .ok_or_else(|| serde::de::Error::custom(format!("résultat invalide : {t:?}"))),
        }
    }
}

impl From<&Calculation> for CalculationRead {
    fn from(c: &Calculation) -> Self {
        Self {
            id: c.id(),
            user_id: c.user_id(),
            kind: c.kind(),
            a: c.a(),
            b: c.b(),
            result: c.result(),
            created_at: c.created_at(),
            updated_at: c.updated_at(),
        }
    }
}
