//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’historique de la session, le formulaire (type, a, b),
//! la sélection et les messages, avec des actions simples sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici : tout passe par le noyau (voir vue.rs).
//! - `erreur` et `info` sont exclusifs (poser l’un efface l’autre).

use uuid::Uuid;

use crate::config::Settings;
use crate::noyau::calcul::Calculation;
use crate::noyau::format::DECIMALES_MAX;
use crate::noyau::historique::Historique;
use crate::noyau::OperationKind;

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- données ---
    pub historique: Historique,
    pub utilisateur: Uuid,

    // --- formulaire ---
    pub kind: OperationKind,
    pub saisie_a: String,
    pub saisie_b: String,

    // --- sélection dans l’historique ---
    pub selection: Option<Uuid>,

    // --- requête JSON (corps création / mise à jour) ---
    pub requete_json: String,

    // --- sorties ---
    pub erreur: String,
    pub info: String,

    // --- paramètres ---
    pub decimales: usize,

    // --- UX ---
    pub focus_a: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

impl AppCalc {
    pub fn new(settings: &Settings) -> Self {
        Self {
            historique: Historique::new(),
            utilisateur: settings.utilisateur_ou_nouveau(),
            kind: OperationKind::Addition,
            saisie_a: String::new(),
            saisie_b: String::new(),
            selection: None,
            requete_json: String::new(),
            erreur: String::new(),
            info: String::new(),
            decimales: settings.affichage.decimales.min(DECIMALES_MAX),
            focus_a: true,
        }
    }

    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// Vide le formulaire et la sélection (l’historique reste).
    pub fn clear_formulaire(&mut self) {
        self.saisie_a.clear();
        self.saisie_b.clear();
        self.kind = OperationKind::Addition;
        self.selection = None;
        self.clear_messages();
        self.focus_a = true;
    }

    pub fn clear_messages(&mut self) {
        self.erreur.clear();
        self.info.clear();
    }

    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.info.clear();
    }

    pub fn set_info(&mut self, msg: impl Into<String>) {
        self.info = msg.into();
        self.erreur.clear();
    }

    /// Charge un calcul dans le formulaire (clic dans l’historique).
    pub fn charger(&mut self, c: &Calculation) {
        self.selection = Some(c.id());
        self.kind = c.kind();
        self.saisie_a = c.a().to_string();
        self.saisie_b = c.b().to_string();
        self.clear_messages();
    }

    pub fn set_decimales(&mut self, decimales: usize) {
        self.decimales = decimales.min(DECIMALES_MAX);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utilisateur_de_la_config() {
        let u = Uuid::new_v4();
        let settings = Settings {
            utilisateur: Some(u),
            ..Default::default()
        };
        let app = AppCalc::new(&settings);
        assert_eq!(app.utilisateur, u);
        assert_eq!(app.decimales, 6);
    }

    #[test]
    fn messages_exclusifs() {
        let mut app = AppCalc::default();
        app.set_erreur("oups");
        app.set_info("ok");
        assert!(app.erreur.is_empty());
        app.set_erreur("oups");
        assert!(app.info.is_empty());
    }

    #[test]
    fn charger_puis_clear() {
        let mut app = AppCalc::default();
        let c = Calculation::create(OperationKind::Division, app.utilisateur, 10.5, 2.0).unwrap();
        app.charger(&c);
        assert_eq!(app.selection, Some(c.id()));
        assert_eq!(app.kind, OperationKind::Division);
        assert_eq!((app.saisie_a.as_str(), app.saisie_b.as_str()), ("10.5", "2"));

        app.clear_formulaire();
        assert!(app.selection.is_none());
        assert!(app.saisie_a.is_empty());
        assert_eq!(app.kind, OperationKind::Addition);
    }

    #[test]
    fn decimales_bornees() {
        let mut app = AppCalc::default();
        app.set_decimales(1000);
        assert_eq!(app.decimales, DECIMALES_MAX);
    }
}
