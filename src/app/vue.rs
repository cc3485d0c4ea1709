// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Formulaire : type d’opération, A, B ; Enter dans A ou B = créer
// - Boutons : Créer / Mettre à jour / Supprimer / Effacer / Copier JSON
// - Historique de l’utilisateur courant : clic = charger dans le formulaire
//
// Les erreurs du noyau sont traduites ici (message_erreur) : le noyau ne
// produit jamais de texte pour l’utilisateur.

use eframe::egui;
use tracing::{info, warn};
use uuid::Uuid;

use super::etat::AppCalc;
use crate::noyau::format::{format_calcul, DECIMALES_MAX};
use crate::noyau::schema::{CalculationCreate, CalculationUpdate};
use crate::noyau::{CalcError, HistoriqueError, Operand, OperationKind, SchemaError};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice");
                ui.add_space(6.0);

                self.ui_formulaire(ui);

                ui.add_space(8.0);
                self.ui_json(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_historique(ui);
            });
    }

    fn ui_formulaire(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("formulaire_calcul")
            .num_columns(2)
            .spacing([8.0, 6.0])
            .show(ui, |ui| {
                ui.label("Opération :");
                egui::ComboBox::from_id_salt("type_operation")
                    .selected_text(libelle(self.kind))
                    .show_ui(ui, |ui| {
                        for k in OperationKind::ALL {
                            ui.selectable_value(&mut self.kind, k, libelle(k));
                        }
                    });
                ui.end_row();

                ui.label("A :");
                let resp_a = ui.add(
                    egui::TextEdit::singleline(&mut self.saisie_a)
                        .desired_width(180.0)
                        .hint_text("ex. 10.5")
                        .id_salt("saisie_a"),
                );
                if self.focus_a {
                    resp_a.request_focus();
                    self.focus_a = false;
                }
                ui.end_row();

                ui.label("B :");
                let resp_b = ui.add(
                    egui::TextEdit::singleline(&mut self.saisie_b)
                        .desired_width(180.0)
                        .hint_text("ex. 3")
                        .id_salt("saisie_b"),
                );
                ui.end_row();

                // Enter valide seulement si un des champs vient de perdre le focus par Enter.
                let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
                if enter && (resp_a.lost_focus() || resp_b.lost_focus()) {
                    self.creer_via_noyau();
                }
            });

        ui.add_space(6.0);

        ui.horizontal_wrapped(|ui| {
            if ui.button("Créer").clicked() {
                self.creer_via_noyau();
            }

            let sel = self.selection.is_some();
            if ui
                .add_enabled(sel, egui::Button::new("Mettre à jour"))
                .on_hover_text("Recalcule le calcul sélectionné avec le formulaire")
                .clicked()
            {
                self.maj_via_noyau();
            }
            if ui.add_enabled(sel, egui::Button::new("Supprimer")).clicked() {
                self.supprimer_via_noyau();
            }

            ui.separator();

            if ui.button("Effacer").on_hover_text("Vide le formulaire").clicked() {
                self.clear_formulaire();
            }

            ui.separator();

            ui.label("Affichage :");
            let mut d = self.decimales as u32;
            let resp = ui.add(
                egui::DragValue::new(&mut d)
                    .speed(1)
                    .range(0..=DECIMALES_MAX as u32)
                    .suffix(" déc."),
            );
            if resp.changed() {
                self.set_decimales(d as usize);
            }
        });

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        } else if !self.info.is_empty() {
            ui.add_space(6.0);
            ui.monospace(&self.info);
        }
    }

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        let mut clic: Option<Uuid> = None;

        ui.horizontal(|ui| {
            ui.label("Historique");
            if ui
                .button("Tout effacer")
                .on_hover_text("Supprime tous vos calculs")
                .clicked()
            {
                self.vider_historique();
            }
            if ui.button("Copier JSON").clicked() {
                match self.historique.export_json(self.utilisateur) {
                    Ok(json) => {
                        ui.ctx().copy_text(json);
                        self.set_info("Historique copié (JSON)");
                    }
                    Err(e) => {
                        warn!(error = %e, "export JSON impossible");
                        self.set_erreur(message_schema(&e));
                    }
                }
            }
        });

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                let mut vide = true;
                for c in self.historique.list(self.utilisateur) {
                    vide = false;
                    let texte = format_calcul(c, self.decimales);
                    let choisi = self.selection == Some(c.id());
                    let resp = ui
                        .add(egui::Button::new(egui::RichText::new(texte).monospace()).selected(choisi))
                        .on_hover_text(format!(
                            "{}  créé {}  modifié {}",
                            c.kind(),
                            c.created_at().format("%Y-%m-%d %H:%M:%S"),
                            c.updated_at().format("%Y-%m-%d %H:%M:%S")
                        ));
                    if resp.clicked() {
                        clic = Some(c.id());
                    }
                }
                if vide {
                    ui.monospace("(aucun calcul)");
                }
            });

        if let Some(id) = clic {
            self.charger_par_id(id);
        }
    }

    fn ui_json(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Requête JSON")
            .default_open(false)
            .show(ui, |ui| {
                ui.add(
                    egui::TextEdit::multiline(&mut self.requete_json)
                        .desired_width(ui.available_width())
                        .desired_rows(4)
                        .hint_text(r#"{"type": "Divide", "a": 100, "b": 2, "user_id": "…"}"#)
                        .id_salt("requete_json")
                        .code_editor(),
                );
                ui.horizontal(|ui| {
                    if ui.button("Créer depuis JSON").clicked() {
                        self.creer_depuis_json();
                    }
                    let sel = self.selection.is_some();
                    if ui
                        .add_enabled(sel, egui::Button::new("Mettre à jour depuis JSON"))
                        .on_hover_text(r#"ex. {"a": 42} ou {"type": "Multiply", "b": 7}"#)
                        .clicked()
                    {
                        self.maj_depuis_json();
                    }
                });
            });
    }

    /* ------------------------ Appels au noyau ------------------------ */

    /// Lit A et B ; accepte la virgule décimale. Erreur = texte pour l’utilisateur.
    fn lire_operandes(&self) -> Result<(f64, f64), String> {
        let a = lire_nombre(&self.saisie_a).ok_or_else(|| "A : nombre attendu".to_string())?;
        let b = lire_nombre(&self.saisie_b).ok_or_else(|| "B : nombre attendu".to_string())?;
        Ok((a, b))
    }

    fn creer_via_noyau(&mut self) {
        let (a, b) = match self.lire_operandes() {
            Ok(v) => v,
            Err(msg) => return self.set_erreur(msg),
        };

        let demande = CalculationCreate::new(self.kind.tag(), a, b, self.utilisateur);
        match self.historique.create(&demande) {
            Ok(c) => {
                let id = c.id();
                let ligne = format_calcul(c, self.decimales);
                self.selection = Some(id);
                self.set_info(ligne);
            }
            Err(e) => self.set_erreur(message_erreur(&e)),
        }
        self.focus_a = true;
    }

    fn maj_via_noyau(&mut self) {
        let Some(id) = self.selection else {
            return self.set_erreur("Aucun calcul sélectionné");
        };
        let (a, b) = match self.lire_operandes() {
            Ok(v) => v,
            Err(msg) => return self.set_erreur(msg),
        };

        let maj = CalculationUpdate {
            kind: Some(self.kind.tag().to_string()),
            a: Some(a),
            b: Some(b),
        };
        match self.historique.update(self.utilisateur, id, &maj) {
            Ok(c) => {
                let ligne = format_calcul(c, self.decimales);
                self.set_info(ligne);
            }
            Err(e) => self.set_erreur(message_erreur(&e)),
        }
    }

    fn supprimer_via_noyau(&mut self) {
        let Some(id) = self.selection else {
            return self.set_erreur("Aucun calcul sélectionné");
        };

        match self.historique.delete(self.utilisateur, id) {
            Ok(c) => {
                info!(%id, "suppression depuis l’UI");
                let ligne = format!("Supprimé : {}", format_calcul(&c, self.decimales));
                self.clear_formulaire();
                self.set_info(ligne);
            }
            Err(e) => {
                self.selection = None;
                self.set_erreur(message_erreur(&e));
            }
        }
    }

    /* ------------------------ Requêtes JSON ------------------------ */

    fn creer_depuis_json(&mut self) {
        let demande = match CalculationCreate::from_json(&self.requete_json) {
            Ok(d) => d,
            Err(e) => return self.set_erreur(message_schema(&e)),
        };
        if demande.user_id != self.utilisateur {
            warn!(user = %demande.user_id, "création JSON pour un autre utilisateur");
            return self.set_erreur("user_id différent de l’utilisateur courant");
        }

        match self.historique.create(&demande) {
            Ok(c) => {
                let id = c.id();
                let ligne = format_calcul(c, self.decimales);
                self.charger_par_id(id);
                self.set_info(ligne);
            }
            Err(e) => self.set_erreur(message_erreur(&e)),
        }
    }

    fn maj_depuis_json(&mut self) {
        let Some(id) = self.selection else {
            return self.set_erreur("Aucun calcul sélectionné");
        };
        let maj = match CalculationUpdate::from_json(&self.requete_json) {
            Ok(m) => m,
            Err(e) => return self.set_erreur(message_schema(&e)),
        };

        match self.historique.update(self.utilisateur, id, &maj) {
            Ok(c) => {
                let ligne = format_calcul(c, self.decimales);
                self.charger_par_id(id);
                self.set_info(ligne);
            }
            Err(e) => self.set_erreur(message_erreur(&e)),
        }
    }

    fn vider_historique(&mut self) {
        let n = self.historique.purge_user(self.utilisateur);
        self.clear_formulaire();
        self.set_info(format!("{n} calcul(s) supprimé(s)"));
    }

    fn charger_par_id(&mut self, id: Uuid) {
        if let Ok(c) = self.historique.get(self.utilisateur, id) {
            let c = c.clone();
            self.charger(&c);
        }
    }
}

fn libelle(k: OperationKind) -> String {
    let nom = match k {
        OperationKind::Addition => "Addition",
        OperationKind::Subtraction => "Soustraction",
        OperationKind::Multiplication => "Multiplication",
        OperationKind::Division => "Division",
    };
    format!("{}  {nom}", k.symbol())
}

/// "10,5" et "10.5" acceptés ; espaces ignorés.
fn lire_nombre(s: &str) -> Option<f64> {
    let t = s.trim().replace(',', ".");
    if t.is_empty() {
        return None;
    }
    t.parse::<f64>().ok()
}

/* ------------------------ Traduction des erreurs ------------------------ */

fn message_calc(e: &CalcError) -> String {
    match e {
        CalcError::InvalidOperand { operand, .. } => {
            let nom = match operand {
                Operand::A => "A",
                Operand::B => "B",
            };
            format!("{nom} doit être un nombre fini")
        }
        CalcError::DivisionByZero => "Division par zéro impossible".to_string(),
        CalcError::UnknownOperationType { tag } => format!("Type d’opération inconnu : {tag}"),
    }
}

fn message_schema(e: &SchemaError) -> String {
    match e {
        SchemaError::Json(err) => format!("JSON invalide : {err}"),
        SchemaError::EmptyUpdate => "Rien à mettre à jour".to_string(),
        SchemaError::Calc(c) => message_calc(c),
    }
}

fn message_erreur(e: &HistoriqueError) -> String {
    match e {
        HistoriqueError::NotFound { .. } => "Calcul introuvable".to_string(),
        HistoriqueError::Forbidden { .. } => "Ce calcul appartient à un autre utilisateur".to_string(),
        HistoriqueError::Schema(s) => message_schema(s),
        HistoriqueError::Calc(c) => message_calc(c),
    }
}
