//! Noyau - machine à états de la calculatrice
//!
//! Modèle opérande / opérateur (sans évaluation de texte libre) :
//! - `tampon`  : opérande active (voir saisie.rs)
//! - `attente` : première opérande + opérateur en attente (les deux, ou rien)
//! - `trace`   : ligne “opération” figée après "="
//!
//! Une seule entrée : `appliquer(Action) -> Issue`.
//! Sorties : `affichage()`, `trace()`, `mode_angle()`.
//!
//! Enchaînement sans priorité : 4 + 3 × 2 = 14 (4 + 3 est calculé dès la pression de ×).
//! Toute ErreurCalcul => sentinelle "Error" + purge de l’opération en attente.

use super::action::Action;
use super::erreur::ErreurCalcul;
use super::eval::{calculer, Operateur};
use super::format::{formater_resultat, lire, localiser, Separateur};
use super::memoire::Memoire;
use super::saisie::Tampon;
use super::scientifique::{self, FonctionSci};
use super::trace::Trace;
use super::trig::ModeAngle;
use crate::reglages::Reglages;

/// Drapeau fourni par la vue (rapport largeur / hauteur).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Orientation {
    #[default]
    Portrait,
    Paysage,
}

/// Issue d’une action. `Ignoree` n’est pas une panne : c’est un refus volontaire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Issue {
    Appliquee,
    Ignoree,
    Erreur(ErreurCalcul),
}

impl From<bool> for Issue {
    fn from(applique: bool) -> Self {
        if applique {
            Issue::Appliquee
        } else {
            Issue::Ignoree
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Attente {
    premier: String,
    operateur: Operateur,
}

fn tirage_systeme() -> f64 {
    rand::random::<f64>()
}

#[derive(Clone, Debug)]
pub struct Calculatrice {
    tampon: Tampon,
    attente: Option<Attente>,
    trace: Trace,
    memoire: Memoire,
    angle: ModeAngle,
    orientation: Orientation,
    reglages: Reglages,
    tirage: fn() -> f64,
}

impl Default for Calculatrice {
    fn default() -> Self {
        Self::new(Reglages::default())
    }
}

impl Calculatrice {
    pub fn new(reglages: Reglages) -> Self {
        Self {
            tampon: Tampon::default(),
            attente: None,
            trace: Trace::default(),
            memoire: Memoire::default(),
            angle: reglages.angle,
            orientation: Orientation::default(),
            reglages,
            tirage: tirage_systeme,
        }
    }

    /// Remplace la source de "Rand" (tests déterministes).
    pub fn avec_tirage(mut self, tirage: fn() -> f64) -> Self {
        self.tirage = tirage;
        self
    }

    /* ------------------------ Sorties ------------------------ */

    /// Valeur affichée (séparateur local), "" en attente de 2e opérande, ou "Error".
    pub fn affichage(&self) -> String {
        localiser(self.tampon.texte(), self.reglages.separateur)
    }

    /// Ligne d’opération (séparateur local).
    pub fn trace(&self) -> String {
        let attente = self
            .attente
            .as_ref()
            .map(|a| (a.premier.as_str(), a.operateur));
        let ligne = self.trace.ligne(attente, self.tampon.est_finalise());
        localiser(&ligne, self.reglages.separateur)
    }

    pub fn mode_angle(&self) -> ModeAngle {
        self.angle
    }

    /// Séparateur décimal affiché (libellé de la touche).
    pub fn separateur(&self) -> Separateur {
        self.reglages.separateur
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Indicateur "M" pour la vue.
    pub fn memoire_active(&self) -> bool {
        self.memoire.rappeler().is_some()
    }

    /* ------------------------ Entrées ------------------------ */

    /// Lu par la vue à chaque image ; ne touche pas à l’état de calcul.
    pub fn definir_orientation(&mut self, orientation: Orientation) {
        if self.orientation != orientation {
            tracing::info!(?orientation, "changement d’orientation");
            self.orientation = orientation;
        }
    }

    pub fn appliquer(&mut self, action: Action) -> Issue {
        if self.orientation == Orientation::Portrait && action.est_scientifique() {
            tracing::trace!(?action, "action scientifique refusée en portrait");
            return Issue::Ignoree;
        }

        let issue = match action {
            Action::Chiffre(d) => self.chiffre(d),
            Action::Separateur => self.saisir_separateur(),
            Action::Effacer => self.effacer(),
            Action::EffacerEntree => self.effacer_entree(),
            Action::Retour => self.tampon.retour().into(),
            Action::ChangerSigne => self.edition_instantanee(Tampon::changer_signe),
            Action::Pourcent => {
                let decimales = self.reglages.decimales;
                self.edition_instantanee(|t| t.pourcent(decimales))
            }
            Action::Operateur(op) => self.operateur(op),
            Action::Egal => self.egal(),
            Action::Scientifique(f) => self.scientifique(f),
            Action::MemoireEffacer => {
                self.memoire.effacer();
                Issue::Appliquee
            }
            Action::MemoireAjouter => self.memoire_cumul(Memoire::ajouter),
            Action::MemoireSoustraire => self.memoire_cumul(Memoire::soustraire),
            Action::MemoireRappeler => self.memoire_rappel(),
            Action::BasculerAngle => {
                self.angle = self.angle.basculer();
                tracing::debug!(angle = ?self.angle, "mode d’angle");
                Issue::Appliquee
            }
        };

        match issue {
            Issue::Appliquee => {
                tracing::trace!(?action, affichage = %self.tampon.texte(), "action appliquée")
            }
            Issue::Ignoree => tracing::trace!(?action, "saisie ignorée"),
            Issue::Erreur(e) => tracing::debug!(?action, erreur = %e, "passage en erreur"),
        }
        issue
    }

    /* ------------------------ Saisie ------------------------ */

    fn plafond(&self) -> usize {
        self.reglages.chiffres_max(self.orientation)
    }

    fn chiffre(&mut self, d: u8) -> Issue {
        let plafond = self.plafond();
        if !self.tampon.chiffre(d, plafond) {
            return Issue::Ignoree;
        }
        self.trace.effacer();
        Issue::Appliquee
    }

    fn saisir_separateur(&mut self) -> Issue {
        if !self.tampon.separateur() {
            return Issue::Ignoree;
        }
        self.trace.effacer();
        Issue::Appliquee
    }

    /// AC
    fn effacer(&mut self) -> Issue {
        self.tampon = Tampon::default();
        self.attente = None;
        self.trace.effacer();
        Issue::Appliquee
    }

    /// C
    fn effacer_entree(&mut self) -> Issue {
        self.tampon.vider();
        self.trace.effacer();
        Issue::Appliquee
    }

    /// ±, % : édition immédiate de l’opérande, la trace figée disparaît.
    fn edition_instantanee(&mut self, edition: impl FnOnce(&mut Tampon) -> bool) -> Issue {
        if !edition(&mut self.tampon) {
            return Issue::Ignoree;
        }
        self.trace.effacer();
        Issue::Appliquee
    }

    /* ------------------------ Opérations binaires ------------------------ */

    fn operateur(&mut self, op: Operateur) -> Issue {
        if self.tampon.est_erreur() {
            return Issue::Ignoree;
        }

        let attente = self.attente.take();
        let premier = match attente {
            // nouvelle opération : l’opérande courante (ou "0") devient la première
            None => self.tampon.operande().unwrap_or_else(|| "0".to_string()),

            // résultat tout juste finalisé (%, fonction, MR) : il repart comme première
            // opérande, l’opération en attente est abandonnée
            Some(_) if self.tampon.est_finalise() => {
                self.tampon.operande().unwrap_or_else(|| "0".to_string())
            }

            Some(att) => match self.tampon.operande() {
                // pas encore de 2e opérande : simple remplacement d’opérateur
                None => att.premier,
                // enchaînement : on calcule l’opération en attente d’abord
                Some(second) => match self.evaluer(&att.premier, att.operateur, &second) {
                    Ok(res) => res,
                    Err(e) => return self.basculer_erreur(e),
                },
            },
        };

        self.attente = Some(Attente {
            premier,
            operateur: op,
        });
        self.tampon = Tampon::Vide;
        self.trace.effacer();
        Issue::Appliquee
    }

    fn egal(&mut self) -> Issue {
        if self.tampon.est_erreur() {
            return Issue::Ignoree;
        }
        let Some(att) = self.attente.take() else {
            return Issue::Ignoree;
        };

        // "5 + =" : la première opérande sert aussi de seconde
        let second = self
            .tampon
            .operande()
            .unwrap_or_else(|| att.premier.clone());

        match self.evaluer(&att.premier, att.operateur, &second) {
            Ok(res) => {
                self.trace.figer(&att.premier, att.operateur, &second);
                self.tampon = Tampon::Resultat(res);
                Issue::Appliquee
            }
            Err(e) => self.basculer_erreur(e),
        }
    }

    fn evaluer(&self, a: &str, op: Operateur, b: &str) -> Result<String, ErreurCalcul> {
        let x = lire(a).ok_or(ErreurCalcul::NonFini)?;
        let y = lire(b).ok_or(ErreurCalcul::NonFini)?;
        let r = calculer(x, y, op)?;
        formater_resultat(r, self.reglages.decimales).ok_or(ErreurCalcul::NonFini)
    }

    /* ------------------------ Fonctions scientifiques ------------------------ */

    fn scientifique(&mut self, f: FonctionSci) -> Issue {
        if self.tampon.est_erreur() {
            return Issue::Ignoree;
        }

        let x = if f.est_constante() {
            0.0
        } else {
            match self.tampon.valeur() {
                Some(x) => x,
                None => return Issue::Ignoree,
            }
        };

        let decimales = self.reglages.decimales;
        let resultat = scientifique::appliquer(f, x, self.angle, self.tirage)
            .and_then(|r| formater_resultat(r, decimales).ok_or(ErreurCalcul::NonFini));

        match resultat {
            Ok(txt) => {
                // l’opérateur en attente est conservé : "2 + 9 √x =" donne 5
                self.tampon = Tampon::Resultat(txt);
                self.trace.effacer();
                Issue::Appliquee
            }
            Err(e) => self.basculer_erreur(e),
        }
    }

    /* ------------------------ Mémoire ------------------------ */

    fn memoire_cumul(&mut self, cumul: fn(&mut Memoire, f64)) -> Issue {
        match self.tampon.valeur() {
            Some(x) => {
                cumul(&mut self.memoire, x);
                Issue::Appliquee
            }
            None => Issue::Ignoree,
        }
    }

    fn memoire_rappel(&mut self) -> Issue {
        let texte = self
            .memoire
            .rappeler()
            .and_then(|v| formater_resultat(v, self.reglages.decimales));

        match texte {
            Some(txt) => {
                self.tampon = Tampon::Resultat(txt);
                self.trace.effacer();
                Issue::Appliquee
            }
            None => Issue::Ignoree,
        }
    }

    /* ------------------------ Erreur ------------------------ */

    fn basculer_erreur(&mut self, e: ErreurCalcul) -> Issue {
        self.tampon = Tampon::Erreur;
        self.attente = None;
        self.trace.effacer();
        Issue::Erreur(e)
    }
}
