// src/noyau/format.rs
//
// Format des nombres (interne <-> affichage)
// -----------------------------------------
// - Interne : texte décimal canonique avec '.' ("12.5", "-0.25", "1e21")
// - Affichage : séparateur local (',' par défaut, ou '.')
// - Lecture : accepte ',' ou '.', renvoie un f64 fini

use serde::Deserialize;

use super::lecture::lire_arrondi;

/// Sentinelle d’affichage pour l’état Erreur.
pub const SENTINELLE_ERREUR: &str = "Error";

/// Au-delà, on passe en notation exposant ("1e21"), comme la plupart des calculatrices.
const SEUIL_EXPOSANT: f64 = 1e21;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub enum Separateur {
    #[default]
    #[serde(rename = ",")]
    Virgule,
    #[serde(rename = ".")]
    Point,
}

impl Separateur {
    pub fn caractere(self) -> char {
        match self {
            Separateur::Virgule => ',',
            Separateur::Point => '.',
        }
    }
}

/// Interne -> affichage : seul le séparateur décimal change.
pub fn localiser(canon: &str, sep: Separateur) -> String {
    match sep {
        Separateur::Point => canon.to_string(),
        Separateur::Virgule => canon.replace('.', ","),
    }
}

/// Texte (interne OU affiché) -> valeur. Vide / illisible / non fini => None.
pub fn lire(texte: &str) -> Option<f64> {
    let t = texte.trim();
    if t.is_empty() {
        return None;
    }
    t.replace(',', ".").parse::<f64>().ok().filter(|x| x.is_finite())
}

/// Résultat de calcul -> texte interne canonique.
/// - |x| < 1e21 : décimal exact arrondi à `decimales`, zéros finaux retirés
/// - sinon      : notation exposant
/// None si x n’est pas fini.
pub fn formater_resultat(x: f64, decimales: usize) -> Option<String> {
    if !x.is_finite() {
        return None;
    }
    if x.abs() >= SEUIL_EXPOSANT {
        return Some(format!("{x:e}"));
    }
    lire_arrondi(x, decimales)
}

/// Nombre de chiffres d’un tampon (sans signe ni séparateur).
pub fn compter_chiffres(texte: &str) -> usize {
    texte.chars().filter(char::is_ascii_digit).count()
}
