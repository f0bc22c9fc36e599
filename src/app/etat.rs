//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : porter la machine à états du noyau et traduire les gestes de l’interface
//! (clic, touche clavier, redimensionnement) en actions.
//!
//! Contrats :
//! - Aucune arithmétique ici : tout passe par `Calculatrice::appliquer`.
//! - L’orientation suit la forme de la fenêtre (plus large que haute => paysage).

use eframe::egui;
use tracing::debug;

use crate::noyau::{Action, Calculatrice, Issue, Orientation};
use crate::reglages::Reglages;

#[derive(Clone, Debug)]
pub struct AppCalc {
    pub calc: Calculatrice,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(Reglages::default())
    }
}

impl AppCalc {
    pub fn new(reglages: Reglages) -> Self {
        Self {
            calc: Calculatrice::new(reglages),
        }
    }

    /// Touche (écran ou clavier) : une action, une issue.
    pub fn presser(&mut self, action: Action) -> Issue {
        let issue = self.calc.appliquer(action);
        if issue == Issue::Ignoree {
            debug!(?action, "touche sans effet");
        }
        issue
    }

    /// Recalcule l’orientation depuis la taille de la zone utile.
    pub fn suivre_orientation(&mut self, largeur: f32, hauteur: f32) {
        self.calc
            .definir_orientation(orientation_depuis(largeur, hauteur));
    }
}

/// Carré ou plus haut que large : portrait.
pub fn orientation_depuis(largeur: f32, hauteur: f32) -> Orientation {
    if largeur > hauteur {
        Orientation::Paysage
    } else {
        Orientation::Portrait
    }
}

/// Raccourcis clavier (natif + web).
/// - caractères tapés : chiffres, + - * / ^, . ou , , %, =
/// - Enter = égal, Backspace = retour, Escape = AC, Delete = C
pub fn action_clavier(ev: &egui::Event) -> Option<Action> {
    match ev {
        egui::Event::Text(t) => {
            let mut cs = t.chars();
            let c = cs.next()?;
            if cs.next().is_some() {
                return None;
            }
            Action::depuis_caractere(c)
        }
        egui::Event::Key {
            key, pressed: true, ..
        } => match key {
            egui::Key::Enter => Some(Action::Egal),
            egui::Key::Backspace => Some(Action::Retour),
            egui::Key::Escape => Some(Action::Effacer),
            egui::Key::Delete => Some(Action::EffacerEntree),
            _ => None,
        },
        _ => None,
    }
}
