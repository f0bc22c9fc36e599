// src/noyau/saisie.rs
//
// Tampon de saisie (opérande active)
// ----------------------------------
// États :
// - Vide      : juste après un opérateur (on attend la 2e opérande)
// - Saisie(s) : nombre en cours de frappe
// - Resultat  : nombre “finalisé” (=, %, fonction, MR) -> le prochain chiffre repart de zéro
// - Erreur    : sentinelle "Error" -> le prochain chiffre repart de zéro
//
// Texte interne canonique : '.' comme séparateur (voir format.rs).
// Contrats :
// - jamais plus de `plafond` chiffres (signe et séparateur exclus)
// - un seul séparateur par opérande
// - pas de zéro de tête ("0" puis "5" => "5")

use super::format::{compter_chiffres, formater_resultat, lire, SENTINELLE_ERREUR};

/// Plafond absolu de chiffres saisis (les réglages ne peuvent que le baisser).
pub const CHIFFRES_MAX: usize = 15;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tampon {
    Vide,
    Saisie(String),
    Resultat(String),
    Erreur,
}

impl Default for Tampon {
    fn default() -> Self {
        Tampon::Saisie("0".to_string())
    }
}

impl Tampon {
    /* ------------------------ Lecture ------------------------ */

    /// Texte interne (sentinelle incluse).
    pub fn texte(&self) -> &str {
        match self {
            Tampon::Vide => "",
            Tampon::Saisie(s) | Tampon::Resultat(s) => s,
            Tampon::Erreur => SENTINELLE_ERREUR,
        }
    }

    pub fn valeur(&self) -> Option<f64> {
        match self {
            Tampon::Saisie(s) | Tampon::Resultat(s) => lire(s),
            Tampon::Vide | Tampon::Erreur => None,
        }
    }

    /// Opérande prête à être engagée ("3." -> "3"). None si vide ou erreur.
    pub fn operande(&self) -> Option<String> {
        match self {
            Tampon::Saisie(s) => {
                let t = s.strip_suffix('.').unwrap_or(s);
                Some(t.to_string())
            }
            Tampon::Resultat(s) => Some(s.clone()),
            Tampon::Vide | Tampon::Erreur => None,
        }
    }

    pub fn est_erreur(&self) -> bool {
        matches!(self, Tampon::Erreur)
    }

    /// Finalisé : la prochaine frappe démarre un nouveau nombre.
    pub fn est_finalise(&self) -> bool {
        matches!(self, Tampon::Resultat(_) | Tampon::Erreur)
    }

    /* ------------------------ Éditions ------------------------ */

    /// Ajoute un chiffre. Retourne false si la frappe est ignorée.
    pub fn chiffre(&mut self, d: u8, plafond: usize) -> bool {
        if d > 9 {
            return false;
        }
        let c = char::from(b'0' + d);

        match self {
            Tampon::Vide | Tampon::Resultat(_) | Tampon::Erreur => {
                *self = Tampon::Saisie(c.to_string());
                true
            }
            Tampon::Saisie(s) => {
                // zéro seul, signé ou non (DEL peut laisser "-0")
                if s.as_str() == "0" || s.as_str() == "-0" {
                    if d == 0 {
                        return false;
                    }
                    s.pop();
                    s.push(c);
                    return true;
                }
                if compter_chiffres(s) >= plafond.min(CHIFFRES_MAX) {
                    return false;
                }
                s.push(c);
                true
            }
        }
    }

    /// Ajoute le séparateur décimal (une seule fois par opérande).
    pub fn separateur(&mut self) -> bool {
        match self {
            Tampon::Vide | Tampon::Resultat(_) | Tampon::Erreur => {
                *self = Tampon::Saisie("0.".to_string());
                true
            }
            Tampon::Saisie(s) => {
                if s.contains('.') {
                    return false;
                }
                s.push('.');
                true
            }
        }
    }

    /// ± : bascule textuelle du signe (garde "1.50" tel quel). Ignoré sur zéro exact.
    pub fn changer_signe(&mut self) -> bool {
        let s = match self {
            Tampon::Saisie(s) | Tampon::Resultat(s) => s,
            Tampon::Vide | Tampon::Erreur => return false,
        };
        match lire(s) {
            Some(v) if v != 0.0 => {}
            _ => return false,
        }
        if s.starts_with('-') {
            s.remove(0);
        } else {
            s.insert(0, '-');
        }
        true
    }

    /// % : divise par 100 et finalise.
    pub fn pourcent(&mut self, decimales: usize) -> bool {
        let Some(v) = self.valeur() else {
            return false;
        };
        match formater_resultat(v / 100.0, decimales) {
            Some(txt) => {
                *self = Tampon::Resultat(txt);
                true
            }
            None => false,
        }
    }

    /// Retour arrière sur un nombre en cours de frappe.
    pub fn retour(&mut self) -> bool {
        let Tampon::Saisie(s) = self else {
            return false;
        };
        if s.as_str() == "0" {
            return false;
        }
        s.pop();
        if s.is_empty() || s.as_str() == "-" {
            *s = "0".to_string();
        }
        true
    }

    /// C : remet l’opérande à "0".
    pub fn vider(&mut self) {
        *self = Tampon::default();
    }
}
