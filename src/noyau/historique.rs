//! Noyau — historique des calculs (en mémoire, par propriétaire)
//!
//! Rôle : créer / lire / modifier / supprimer des `Calculation` pour un utilisateur.
//! Pas de persistance : c’est l’état de l’app.
//!
//! Contrats :
//! - Un calcul n’entre dans l’historique qu’après évaluation réussie.
//! - Lecture/modification/suppression : `Forbidden` si l’utilisateur n’est pas le propriétaire.
//! - Ordre d’insertion conservé (plus ancien d’abord).

use tracing::{info, warn};
use uuid::Uuid;

use super::calcul::Calculation;
use super::erreur::{HistoriqueError, SchemaError};
use super::schema::{CalculationCreate, CalculationRead, CalculationUpdate};

#[derive(Clone, Debug, Default)]
pub struct Historique {
    calculs: Vec<Calculation>,
}

impl Historique {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.calculs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calculs.is_empty()
    }

    pub fn create(&mut self, demande: &CalculationCreate) -> Result<&Calculation, HistoriqueError> {
        let v = demande.validate().inspect_err(|e| {
            warn!(user = %demande.user_id, tag = %demande.kind, error = %e, "création refusée");
        })?;

        let calc = Calculation::create(v.kind, v.user_id, v.a, v.b)?;
        info!(id = %calc.id(), user = %v.user_id, kind = %v.kind, "calcul créé");

        self.calculs.push(calc);
        let idx = self.calculs.len() - 1;
        Ok(&self.calculs[idx])
    }

    /// Les calculs de l’utilisateur, plus ancien d’abord.
    pub fn list(&self, user_id: Uuid) -> impl Iterator<Item = &Calculation> + '_ {
        self.calculs.iter().filter(move |c| c.belongs_to(user_id))
    }

    pub fn get(&self, user_id: Uuid, id: Uuid) -> Result<&Calculation, HistoriqueError> {
        let idx = self.position(user_id, id)?;
        Ok(&self.calculs[idx])
    }

    pub fn update(
        &mut self,
        user_id: Uuid,
        id: Uuid,
        maj: &CalculationUpdate,
    ) -> Result<&Calculation, HistoriqueError> {
        let idx = self.position(user_id, id)?;
        let ch = maj.validate()?;

        let calc = &mut self.calculs[idx];
        calc.apply(ch).inspect_err(|e| {
            warn!(%id, error = %e, "mise à jour refusée");
        })?;
        info!(%id, kind = %calc.kind(), "calcul mis à jour");
        Ok(&*calc)
    }

    pub fn delete(&mut self, user_id: Uuid, id: Uuid) -> Result<Calculation, HistoriqueError> {
        let idx = self.position(user_id, id)?;
        let calc = self.calculs.remove(idx);
        info!(%id, "calcul supprimé");
        Ok(calc)
    }

    /// Cascade : retire tous les calculs d’un utilisateur. Retourne le nombre retiré.
    pub fn purge_user(&mut self, user_id: Uuid) -> usize {
        let avant = self.calculs.len();
        self.calculs.retain(|c| !c.belongs_to(user_id));
        let n = avant - self.calculs.len();
        if n > 0 {
            info!(user = %user_id, n, "calculs purgés");
        }
        n
    }

    /// Export JSON (liste de `CalculationRead`) des calculs de l’utilisateur.
    pub fn export_json(&self, user_id: Uuid) -> Result<String, SchemaError> {
        let vues: Vec<CalculationRead> = self.list(user_id).map(CalculationRead::from).collect();
        Ok(serde_json::to_string_pretty(&vues)?)
    }

    fn position(&self, user_id: Uuid, id: Uuid) -> Result<usize, HistoriqueError> {
        let idx = self
            .calculs
            .iter()
            .position(|c| c.id() == id)
            .ok_or(HistoriqueError::NotFound { id })?;

        if !self.calculs[idx].belongs_to(user_id) {
            return Err(HistoriqueError::Forbidden { id });
        }
        Ok(idx)
    }
}
