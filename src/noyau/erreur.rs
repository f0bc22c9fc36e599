// src/noyau/erreur.rs
//
// Erreurs de domaine (fatales pour l’expression en cours).
// La machine à états les convertit en sentinelle "Error" + purge de l’opération en attente.
// Les saisies refusées (chiffre en trop, 2e virgule…) ne sont PAS des erreurs : voir Issue::Ignoree.

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ErreurCalcul {
    #[error("division par zéro")]
    DivisionParZero,

    #[error("factorielle : entier positif ou nul attendu")]
    Factorielle,

    #[error("indéfini (tan d’un multiple impair de 90°)")]
    Indefini,

    #[error("résultat non fini (NaN ou dépassement)")]
    NonFini,
}

/// Garde-fou commun : tout résultat NaN / ±∞ devient une erreur.
pub fn exiger_fini(x: f64) -> Result<f64, ErreurCalcul> {
    if x.is_finite() {
        Ok(x)
    } else {
        Err(ErreurCalcul::NonFini)
    }
}
