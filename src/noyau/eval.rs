//! Noyau - opérations binaires
//!
//! a op b en double précision, avec politique d’erreur explicite :
//! - ÷ 0 (ou racine d’indice 0) => DivisionParZero
//! - tout résultat NaN / ±∞     => NonFini
//!
//! L’arrondi d’affichage (10 décimales) est fait plus tard, dans format.rs.

use super::erreur::{exiger_fini, ErreurCalcul};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
    /// x^y : a puissance b
    Puissance,
    /// y√x : racine a-ième de b
    Racine,
}

impl Operateur {
    /// Symbole affiché dans la trace ("7 + 3 =") et sur la touche.
    pub const fn symbole(self) -> &'static str {
        match self {
            Operateur::Plus => "+",
            Operateur::Moins => "−",
            Operateur::Fois => "×",
            Operateur::Divise => "÷",
            Operateur::Puissance => "x^y",
            Operateur::Racine => "y√x",
        }
    }

    /// Réservé au mode paysage.
    pub fn est_scientifique(self) -> bool {
        matches!(self, Operateur::Puissance | Operateur::Racine)
    }
}

/// Évalue a op b.
pub fn calculer(a: f64, b: f64, op: Operateur) -> Result<f64, ErreurCalcul> {
    let r = match op {
        Operateur::Plus => a + b,
        Operateur::Moins => a - b,
        Operateur::Fois => a * b,
        Operateur::Divise => {
            if b == 0.0 {
                return Err(ErreurCalcul::DivisionParZero);
            }
            a / b
        }
        Operateur::Puissance => a.powf(b),
        Operateur::Racine => racine_nieme(b, a)?,
    };
    exiger_fini(r)
}

/// Racine n-ième réelle. Indice entier impair sur négatif : racine réelle négative.
fn racine_nieme(x: f64, n: f64) -> Result<f64, ErreurCalcul> {
    if n == 0.0 {
        return Err(ErreurCalcul::DivisionParZero);
    }
    let impair = n.fract() == 0.0 && (n % 2.0).abs() == 1.0;
    if x < 0.0 && impair {
        return Ok(-(-x).powf(n.recip()));
    }
    Ok(x.powf(n.recip()))
}
