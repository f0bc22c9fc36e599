// src/noyau/lecture.rs
//
// Lecture décimale arrondie d’un f64 (sans bruit binaire).
// - f64 -> rationnel EXACT (BigRational::from_float)
// - ×10^decimales, arrondi demi loin de zéro
// - texte décimal, zéros finaux retirés
//
// Ainsi 0.1 + 0.2 se lit "0.3" et non "0.30000000000000004".

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// x -> entier “scalé” = round(x * 10^decimales). None si x n’est pas fini.
pub fn arrondi_scaled(x: f64, decimales: usize) -> Option<BigInt> {
    let r = BigRational::from_float(x)?;
    let scaled = r * BigRational::from_integer(pow10(decimales));
    Some(scaled.round().to_integer())
}

/// Convertit un entier “scalé” (×10^decimales) en texte décimal, zéros finaux retirés.
pub fn scaled_to_decimal(mut scaled: BigInt, decimales: usize) -> String {
    let neg = scaled.is_negative();
    if neg {
        scaled = -scaled;
    }

    let scale = pow10(decimales);
    let int_part = &scaled / &scale;
    let frac_part = &scaled % &scale;

    let mut txt = int_part.to_str_radix(10);

    if decimales > 0 && !frac_part.is_zero() {
        let mut frac = frac_part.to_str_radix(10);
        while frac.len() < decimales {
            frac.insert(0, '0');
        }
        txt.push('.');
        txt.push_str(frac.trim_end_matches('0'));
    }

    if neg {
        txt.insert(0, '-');
    }
    txt
}

/// Lecture complète : f64 -> texte arrondi. None si NaN / ±∞.
pub fn lire_arrondi(x: f64, decimales: usize) -> Option<String> {
    arrondi_scaled(x, decimales).map(|s| scaled_to_decimal(s, decimales))
}
