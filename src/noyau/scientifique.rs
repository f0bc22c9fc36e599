// src/noyau/scientifique.rs
//
// Fonctions scientifiques unaires (mode paysage)
// ----------------------------------------------
// - unaires : x², x³, 1/x, √x, ³√x, e^x, 10^x, ln, log, trig, hyperboliques, x!
// - constantes (sans opérande) : π, e, Rand
// - tout résultat non fini => ErreurCalcul (fatale pour l’expression)
//
// La factorielle est calculée exactement (BigInt) puis convertie : 170! est le dernier fini en f64.

use num_bigint::BigInt;
use num_traits::{One, ToPrimitive};

use super::erreur::{exiger_fini, ErreurCalcul};
use super::trig::{trig, ModeAngle, TrigFn};

/// Au-delà, n! dépasse f64::MAX.
const FACTORIELLE_MAX: f64 = 170.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FonctionSci {
    Carre,
    Cube,
    Inverse,
    RacineCarree,
    RacineCubique,
    ExpNaturelle,
    DixPuissance,
    Ln,
    Log10,
    Sin,
    Cos,
    Tan,
    Sinh,
    Cosh,
    Tanh,
    Factorielle,
    Pi,
    E,
    Aleatoire,
}

impl FonctionSci {
    /// Constante : n’a pas besoin d’opérande.
    pub fn est_constante(self) -> bool {
        matches!(self, FonctionSci::Pi | FonctionSci::E | FonctionSci::Aleatoire)
    }

    /// Libellé de touche.
    pub const fn libelle(self) -> &'static str {
        match self {
            FonctionSci::Carre => "x²",
            FonctionSci::Cube => "x³",
            FonctionSci::Inverse => "1/x",
            FonctionSci::RacineCarree => "√x",
            FonctionSci::RacineCubique => "³√x",
            FonctionSci::ExpNaturelle => "e^x",
            FonctionSci::DixPuissance => "10^x",
            FonctionSci::Ln => "ln",
            FonctionSci::Log10 => "log",
            FonctionSci::Sin => "sin",
            FonctionSci::Cos => "cos",
            FonctionSci::Tan => "tan",
            FonctionSci::Sinh => "sinh",
            FonctionSci::Cosh => "cosh",
            FonctionSci::Tanh => "tanh",
            FonctionSci::Factorielle => "x!",
            FonctionSci::Pi => "π",
            FonctionSci::E => "e",
            FonctionSci::Aleatoire => "Rand",
        }
    }
}

/// Applique f à x. Pour les constantes, x est ignoré.
/// `tirage` fournit un uniforme dans [0,1) (injectable pour les tests).
pub fn appliquer(
    f: FonctionSci,
    x: f64,
    angle: ModeAngle,
    tirage: fn() -> f64,
) -> Result<f64, ErreurCalcul> {
    use FonctionSci::*;

    let r = match f {
        Carre => x * x,
        Cube => x * x * x,
        Inverse => {
            if x == 0.0 {
                return Err(ErreurCalcul::DivisionParZero);
            }
            x.recip()
        }
        RacineCarree => x.sqrt(),
        RacineCubique => x.cbrt(),
        ExpNaturelle => x.exp(),
        DixPuissance => 10f64.powf(x),
        Ln => x.ln(),
        Log10 => x.log10(),

        Sin => trig(TrigFn::Sin, x, angle)?,
        Cos => trig(TrigFn::Cos, x, angle)?,
        Tan => trig(TrigFn::Tan, x, angle)?,

        Sinh => x.sinh(),
        Cosh => x.cosh(),
        Tanh => x.tanh(),

        Factorielle => factorielle(x)?,

        Pi => std::f64::consts::PI,
        E => std::f64::consts::E,
        Aleatoire => tirage(),
    };
    exiger_fini(r)
}

fn factorielle(x: f64) -> Result<f64, ErreurCalcul> {
    if x < 0.0 || x.fract() != 0.0 {
        return Err(ErreurCalcul::Factorielle);
    }
    if x > FACTORIELLE_MAX {
        return Err(ErreurCalcul::NonFini);
    }

    let n = x as u32;
    let produit = (2..=n).fold(BigInt::one(), |acc, k| acc * k);
    produit.to_f64().ok_or(ErreurCalcul::NonFini)
}
