// src/noyau/action.rs
//
// Événements utilisateur (type fermé, filtré exhaustivement par la machine).
// La vue ne fait que traduire clic / touche -> Action.

use super::eval::Operateur;
use super::scientifique::FonctionSci;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// 0..=9 (au-delà : ignoré)
    Chiffre(u8),
    Separateur,
    /// AC : tout effacer (sauf mémoire et mode d’angle)
    Effacer,
    /// C : effacer seulement l’opérande active
    EffacerEntree,
    /// DEL : retirer le dernier caractère saisi
    Retour,
    ChangerSigne,
    Pourcent,
    Operateur(Operateur),
    Egal,
    Scientifique(FonctionSci),
    MemoireEffacer,
    MemoireAjouter,
    MemoireSoustraire,
    MemoireRappeler,
    BasculerAngle,
}

impl Action {
    /// Clavier physique -> action (caractère tapé).
    pub fn depuis_caractere(c: char) -> Option<Action> {
        let a = match c {
            '0'..='9' => Action::Chiffre(c as u8 - b'0'),
            '.' | ',' => Action::Separateur,
            '+' => Action::Operateur(Operateur::Plus),
            '-' | '−' => Action::Operateur(Operateur::Moins),
            '*' | 'x' | '×' => Action::Operateur(Operateur::Fois),
            '/' | '÷' => Action::Operateur(Operateur::Divise),
            '^' => Action::Operateur(Operateur::Puissance),
            '%' => Action::Pourcent,
            '=' => Action::Egal,
            _ => return None,
        };
        Some(a)
    }

    /// Capacité réservée au mode paysage (refusée en portrait).
    pub fn est_scientifique(self) -> bool {
        match self {
            Action::Scientifique(_) => true,
            Action::Operateur(op) => op.est_scientifique(),
            _ => false,
        }
    }
}
