// src/noyau/trig.rs
//
// Trigonométrie (sin/cos/tan) selon le mode d’angle
// -------------------------------------------------
// - Radians : calcul flottant direct
// - Degrés  : les multiples exacts de 90° sont résolus exactement
//             (sin 180 = 0 et non 1.22e-16 ; tan 90 = indéfini et non 1.6e16)
// - Les hyperboliques ne dépendent PAS du mode (voir scientifique.rs)

use serde::Deserialize;

use super::erreur::{exiger_fini, ErreurCalcul};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub enum ModeAngle {
    #[default]
    #[serde(rename = "rad")]
    Radians,
    #[serde(rename = "deg")]
    Degres,
}

impl ModeAngle {
    pub fn basculer(self) -> Self {
        match self {
            ModeAngle::Radians => ModeAngle::Degres,
            ModeAngle::Degres => ModeAngle::Radians,
        }
    }

    /// Libellé de la touche de bascule.
    pub fn libelle(self) -> &'static str {
        match self {
            ModeAngle::Radians => "Rad",
            ModeAngle::Degres => "Deg",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrigFn {
    Sin,
    Cos,
    Tan,
}

pub fn trig(f: TrigFn, x: f64, mode: ModeAngle) -> Result<f64, ErreurCalcul> {
    if mode == ModeAngle::Degres {
        if let Some(exact) = angle_droit(f, x) {
            return exact;
        }
    }

    let rad = match mode {
        ModeAngle::Radians => x,
        ModeAngle::Degres => x.to_radians(),
    };

    let r = match f {
        TrigFn::Sin => rad.sin(),
        TrigFn::Cos => rad.cos(),
        TrigFn::Tan => rad.tan(),
    };
    exiger_fini(r)
}

/// Angle en degrés multiple exact de 90 => valeur exacte (ou indéfini pour tan).
/// None si l’angle n’est pas un angle droit.
fn angle_droit(f: TrigFn, deg: f64) -> Option<Result<f64, ErreurCalcul>> {
    if !deg.is_finite() || deg.rem_euclid(90.0) != 0.0 {
        return None;
    }

    // quadrant 0..=3 (0°, 90°, 180°, 270° modulo 360°)
    let quadrant = (deg / 90.0).rem_euclid(4.0) as u8;

    let v = match (f, quadrant) {
        (TrigFn::Sin, 0 | 2) => 0.0,
        (TrigFn::Sin, 1) => 1.0,
        (TrigFn::Sin, _) => -1.0,

        (TrigFn::Cos, 0) => 1.0,
        (TrigFn::Cos, 2) => -1.0,
        (TrigFn::Cos, _) => 0.0,

        (TrigFn::Tan, 0 | 2) => 0.0,
        (TrigFn::Tan, _) => return Some(Err(ErreurCalcul::Indefini)),
    };
    Some(Ok(v))
}
