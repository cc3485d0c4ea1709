// src/noyau/operation.rs
//
// Type d’opération (étiquette stockée) + table de dispatch.
// Un seul enum fermé : pas de sous-types Addition/Division/etc.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::erreur::CalcError;

/// Fonction binaire pure associée à une étiquette.
pub type OpBinaire = fn(f64, f64) -> f64;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Addition,
    Subtraction,
    Multiplication,
    Division,
}

/// Table de dispatch : étiquette -> fonction.
/// La garde b ≠ 0 n’est PAS ici (voir eval.rs) : la table reste purement arithmétique.
const TABLE: [(OperationKind, OpBinaire); 4] = [
    (OperationKind::Addition, somme),
    (OperationKind::Subtraction, difference),
    (OperationKind::Multiplication, produit),
    (OperationKind::Division, quotient),
];

fn somme(a: f64, b: f64) -> f64 {
    a + b
}

fn difference(a: f64, b: f64) -> f64 {
    a - b
}

fn produit(a: f64, b: f64) -> f64 {
    a * b
}

fn quotient(a: f64, b: f64) -> f64 {
    a / b
}

impl OperationKind {
    /// Ordre d’affichage (sélecteur de l’app).
    pub const ALL: [OperationKind; 4] = [
        OperationKind::Addition,
        OperationKind::Subtraction,
        OperationKind::Multiplication,
        OperationKind::Division,
    ];

    /// Étiquette canonique (valeur stockée / JSON).
    pub fn tag(self) -> &'static str {
        match self {
            OperationKind::Addition => "Add",
            OperationKind::Subtraction => "Subtract",
            OperationKind::Multiplication => "Multiply",
            OperationKind::Division => "Divide",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            OperationKind::Addition => "+",
            OperationKind::Subtraction => "-",
            OperationKind::Multiplication => "×",
            OperationKind::Division => "÷",
        }
    }

    /// Cherche la fonction dans la table.
    pub fn binaire(self) -> Option<OpBinaire> {
        TABLE.iter().find(|(k, _)| *k == self).map(|(_, f)| *f)
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for OperationKind {
    type Err = CalcError;

    /// Insensible à la casse ; accepte étiquette, nom long ou symbole.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let kind = match t.to_lowercase().as_str() {
            "add" | "addition" | "+" => OperationKind::Addition,
            "subtract" | "subtraction" | "-" => OperationKind::Subtraction,
            "multiply" | "multiplication" | "*" | "×" => OperationKind::Multiplication,
            "divide" | "division" | "/" | "÷" => OperationKind::Division,
            _ => return Err(CalcError::unknown_operation(t)),
        };
        Ok(kind)
    }
}

impl Serialize for OperationKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

impl<'de> Deserialize<'de> for OperationKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
