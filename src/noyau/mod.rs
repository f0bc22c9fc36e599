//! Noyau de la calculatrice (sans rendu)
//!
//! Organisation interne :
//! - action.rs       : événements utilisateur (type fermé)
//! - calculatrice.rs : machine à états (appliquer -> Issue)
//! - saisie.rs       : tampon de l’opérande active (chiffres, virgule, ±, %)
//! - eval.rs         : opérations binaires (+ − × ÷ x^y y√x)
//! - scientifique.rs : fonctions unaires + constantes
//! - trig.rs         : sin/cos/tan + mode d’angle (angles droits exacts en degrés)
//! - trace.rs        : ligne “opération”
//! - memoire.rs      : registre MC/M+/M−/MR
//! - format.rs       : séparateur local + lecture des nombres
//! - lecture.rs      : arrondi décimal exact des résultats
//! - erreur.rs       : erreurs de domaine

pub mod action;
pub mod calculatrice;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod lecture;
pub mod memoire;
pub mod saisie;
pub mod scientifique;
pub mod trace;
pub mod trig;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use action::Action;
pub use calculatrice::{Calculatrice, Issue, Orientation};
