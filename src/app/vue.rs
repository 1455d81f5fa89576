// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Écran : expression en attente (petit) + entrée (grand), alignés à droite
// - Tactile : gros boutons, un clic = une action
//
// Note :
// - Pas de clavier : la saisie passe uniquement par le pavé.

use eframe::egui;

use super::etat::{AppCalc, Touche, PAVE};

/// Taille d’une touche (points egui).
const TAILLE_TOUCHE: [f32; 2] = [72.0, 52.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.vertical_centered(|ui| {
            ui.heading("Calculatrice");
            ui.add_space(8.0);

            self.ui_ecran(ui);

            ui.add_space(10.0);

            self.ui_pave(ui);
        });
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        let aff = self.affichage();

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_width(4.0 * TAILLE_TOUCHE[0] + 3.0 * 6.0);

                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    // Ligne vide gardée : l’écran ne "saute" pas quand l’expression apparaît
                    let expr = if aff.expression.is_empty() {
                        " "
                    } else {
                        aff.expression.as_str()
                    };
                    ui.label(egui::RichText::new(expr).monospace().weak());
                    ui.label(egui::RichText::new(&aff.entree).monospace().size(32.0));
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        // On collecte le clic, puis on l’applique hors de la grille (un seul par frame).
        let mut clic: Option<Touche> = None;

        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in PAVE {
                    for touche in *ligne {
                        let actif = self.est_en_attente(touche);
                        if Self::bouton(ui, touche, actif) {
                            clic = Some(*touche);
                        }
                    }
                    ui.end_row();
                }
            });

        if let Some(t) = clic {
            self.declencher(&t);
        }
    }

    fn bouton(ui: &mut egui::Ui, touche: &Touche, actif: bool) -> bool {
        let texte = egui::RichText::new(touche.libelle()).size(20.0);
        let mut b = egui::Button::new(texte);
        if actif {
            // opérateur en attente : contour marqué
            b = b.stroke(ui.visuals().selection.stroke);
        }
        if touche.operateur.is_some() || touche.action == "equal" {
            b = b.fill(ui.visuals().selection.bg_fill);
        }
        ui.add_sized(TAILLE_TOUCHE, b).clicked()
    }
}
