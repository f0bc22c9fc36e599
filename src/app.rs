// src/app.rs
//
// Calculatrice tactile - module App (racine)
// ------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Clavier : les événements de l’image sont traduits en Actions avant le rendu,
// pour que l’écran affiche déjà leur effet.

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let actions: Vec<_> =
            ctx.input(|i| i.events.iter().filter_map(etat::action_clavier).collect());
        for action in actions {
            self.presser(action);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
