//! src/reglages.rs
//!
//! Réglages de la calculatrice (fichier TOML optionnel).
//!
//! Ordre de recherche :
//! 1. chemin donné par la variable d’environnement `CALCULATRICE_REGLAGES`
//! 2. `calculatrice.toml` dans le répertoire courant
//! 3. sinon : valeurs par défaut
//!
//! Exemple :
//! ```toml
//! separateur = ","
//! chiffres_max_portrait = 15
//! chiffres_max_paysage = 15
//! decimales = 10
//! angle = "deg"
//! ```
//!
//! Garde-fous : les bornes sont appliquées APRÈS lecture (un fichier ne peut pas
//! dépasser 15 chiffres saisis ni demander plus de 15 décimales).

// Le navigateur n’a pas de fichier de réglages : seul le natif charge.
#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

use std::env;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::noyau::calculatrice::Orientation;
use crate::noyau::format::Separateur;
use crate::noyau::saisie::CHIFFRES_MAX;
use crate::noyau::trig::ModeAngle;

const VAR_CHEMIN: &str = "CALCULATRICE_REGLAGES";
const FICHIER_DEFAUT: &str = "calculatrice.toml";

/// Décimales d’arrondi des résultats par défaut.
const DECIMALES_DEFAUT: usize = 10;
const DECIMALES_MAX: usize = 15;

#[derive(Debug, thiserror::Error)]
pub enum ErreurReglages {
    #[error("lecture de {chemin:?} impossible : {source}")]
    Lecture {
        chemin: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("réglages invalides : {0}")]
    Syntaxe(#[from] toml::de::Error),
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Reglages {
    pub separateur: Separateur,
    pub chiffres_max_portrait: usize,
    pub chiffres_max_paysage: usize,
    pub decimales: usize,
    pub angle: ModeAngle,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            separateur: Separateur::Virgule,
            chiffres_max_portrait: CHIFFRES_MAX,
            chiffres_max_paysage: CHIFFRES_MAX,
            decimales: DECIMALES_DEFAUT,
            angle: ModeAngle::Radians,
        }
    }
}

impl Reglages {
    pub fn depuis_toml(txt: &str) -> Result<Self, ErreurReglages> {
        let brut: Reglages = toml::from_str(txt)?;
        Ok(brut.borner())
    }

    pub fn charger_depuis(chemin: &Path) -> Result<Self, ErreurReglages> {
        let txt = std::fs::read_to_string(chemin).map_err(|source| ErreurReglages::Lecture {
            chemin: chemin.to_path_buf(),
            source,
        })?;
        Self::depuis_toml(&txt)
    }

    /// Chargement tolérant : toute erreur est journalisée puis on garde les défauts.
    pub fn charger() -> Self {
        let chemin = match env::var_os(VAR_CHEMIN) {
            Some(p) => PathBuf::from(p),
            None => {
                let p = PathBuf::from(FICHIER_DEFAUT);
                if !p.exists() {
                    tracing::debug!("aucun {FICHIER_DEFAUT} : réglages par défaut");
                    return Self::default();
                }
                p
            }
        };

        match Self::charger_depuis(&chemin) {
            Ok(r) => {
                tracing::info!(chemin = ?chemin, "réglages chargés");
                r
            }
            Err(err) => {
                tracing::warn!("réglages ignorés ({err}), valeurs par défaut");
                Self::default()
            }
        }
    }

    /// Plafond de chiffres saisis pour l’orientation donnée.
    pub fn chiffres_max(&self, orientation: Orientation) -> usize {
        match orientation {
            Orientation::Portrait => self.chiffres_max_portrait,
            Orientation::Paysage => self.chiffres_max_paysage,
        }
    }

    fn borner(mut self) -> Self {
        self.chiffres_max_portrait = self.chiffres_max_portrait.clamp(1, CHIFFRES_MAX);
        self.chiffres_max_paysage = self.chiffres_max_paysage.clamp(1, CHIFFRES_MAX);
        self.decimales = self.decimales.min(DECIMALES_MAX);
        self
    }
}
