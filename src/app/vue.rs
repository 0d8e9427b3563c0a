// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter évalue (quand le champ est focus)
// - Tactile : gros boutons, focus redonné après clic (focus_entree)
// - La fiche s'affiche champ par champ (explication / formule / démarche /
//   résultat) en monospace, comme une page de cahier.

use eframe::egui;

use crate::noyau::Selection;

use super::etat::AppCalc;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice Pédago");
                ui.add_space(6.0);

                self.ui_selection(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_fiche(ui);
            });
    }

    /* ------------------------ Sélection de la variante ------------------------ */

    fn ui_selection(&mut self, ui: &mut egui::Ui) {
        for (famille, selections) in Selection::groupes() {
            ui.label(format!("{famille} :"));
            ui.horizontal_wrapped(|ui| {
                for s in selections.iter().copied() {
                    self.bouton_selection(ui, s);
                }
            });
            ui.add_space(4.0);
        }
    }

    fn bouton_selection(&mut self, ui: &mut egui::Ui, s: Selection) {
        let actif = self.selection == s;
        let resp = ui.selectable_label(actif, s.libelle());
        if resp.clicked() {
            self.choisir(s);
        }
    }

    /* ------------------------ Entrée + actions ------------------------ */

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label(format!(
            "Paramètres pour {} :",
            self.selection.libelle()
        ));

        // IMPORTANT : id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text(self.selection.indice_saisie())
                .id_source("entree_edit")
                .code_editor(),
        );

        // Si on a cliqué un bouton, on redonne le focus
        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // --- Clavier : Enter évalue (seulement si le champ est focus) ---
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.eval_via_noyau();
            self.focus_entree = true;
        }

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            // Contrat: C = entrée seulement ; CLR = résultats seulement ; AC = tout
            self.bouton_action(ui, "C", "Efface seulement l'entrée", Action::ClearEntree);
            self.bouton_action(
                ui,
                "CLR",
                "Efface fiche + erreur",
                Action::ClearResultats,
            );
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);

            ui.add_space(10.0);

            let eq = ui.add_sized([64.0, 32.0], egui::Button::new("="));
            if eq.clicked() {
                self.eval_via_noyau();
                self.focus_entree = true;
            }
        });

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ClearResultats => self.clear_resultats(),
                Action::ResetTotal => self.reset_total(),
            }
            self.focus_entree = true;
        }
    }

    /* ------------------------ Fiche ------------------------ */

    fn ui_fiche(&mut self, ui: &mut egui::Ui) {
        if !self.fiche_dispo {
            ui.monospace("aucune fiche : choisir une variante, saisir, puis =");
            return;
        }

        ui.label(&self.fiche.titre);
        ui.add_space(4.0);

        egui::CollapsingHeader::new("Explication")
            .default_open(true)
            .show(ui, |ui| {
                Self::champ_monospace(ui, "fiche_explication", &self.fiche.explication, 4);
            });

        Self::champ_fiche(ui, "Formule", "fiche_formule", &self.fiche.formule);
        Self::champ_fiche(ui, "Démarche", "fiche_demarche", &self.fiche.demarche);
        Self::champ_fiche(ui, "Résultat", "fiche_resultat", &self.fiche.resultat);
    }

    fn champ_fiche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 2);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule "stable", sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    /* ------------------------ Évaluation ------------------------ */

    /// Évalue via le noyau, puis dépose fiche ou erreur dans l'état UI.
    fn eval_via_noyau(&mut self) {
        match crate::noyau::calculer_fiche(self.selection.code(), &self.entree) {
            Ok(fiche) => {
                self.set_fiche(fiche);
            }
            Err(e) => {
                self.set_erreur(e.to_string());
            }
        }
        self.focus_entree = true;
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearResultats,
    ResetTotal,
}
