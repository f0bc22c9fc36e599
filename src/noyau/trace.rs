// src/noyau/trace.rs
//
// Trace d’opération (ligne secondaire au-dessus de l’affichage)
// -------------------------------------------------------------
// Priorité :
// 1) opération terminée figée : "7 + 3 ="    (jusqu’à la prochaine saisie / opérateur)
// 2) opération en attente     : "7 +"        (masquée tant que le tampon est finalisé)
// 3) rien
//
// Texte interne ('.'), localisé par la machine au moment de l’affichage.

use super::eval::Operateur;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Trace {
    figee: String,
}

impl Trace {
    /// Fige "A op B =" après un calcul complet.
    pub fn figer(&mut self, a: &str, op: Operateur, b: &str) {
        self.figee = format!("{a} {} {b} =", op.symbole());
    }

    pub fn effacer(&mut self) {
        self.figee.clear();
    }

    pub fn est_figee(&self) -> bool {
        !self.figee.is_empty()
    }

    /// Ligne à afficher, dérivée de l’état courant.
    pub fn ligne(&self, attente: Option<(&str, Operateur)>, tampon_finalise: bool) -> String {
        if self.est_figee() {
            return self.figee.clone();
        }
        match attente {
            Some((premier, op)) if !tampon_finalise => format!("{premier} {}", op.symbole()),
            _ => String::new(),
        }
    }
}
