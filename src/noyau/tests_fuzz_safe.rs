//! Tests fuzz safe : robustesse + déterminisme + invariants de la machine à états.
//!
//! But : marteler `appliquer` sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - longueur de séquence bornée
//! - budget temps global
//! - invariants clés :
//!   * une frappe de chiffre ne dépasse jamais 15 chiffres
//!   * "Error" => trace vide
//!   * en portrait, une action scientifique est toujours ignorée
//!   * même seed => mêmes affichages

use std::time::{Duration, Instant};

use super::action::Action;
use super::calculatrice::{Calculatrice, Issue, Orientation};
use super::eval::Operateur;
use super::format::{compter_chiffres, SENTINELLE_ERREUR};
use super::saisie::CHIFFRES_MAX;
use super::scientifique::FonctionSci;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’actions ------------------------ */

const OPERATEURS: [Operateur; 6] = [
    Operateur::Plus,
    Operateur::Moins,
    Operateur::Fois,
    Operateur::Divise,
    Operateur::Puissance,
    Operateur::Racine,
];

const FONCTIONS: [FonctionSci; 19] = [
    FonctionSci::Carre,
    FonctionSci::Cube,
    FonctionSci::Inverse,
    FonctionSci::RacineCarree,
    FonctionSci::RacineCubique,
    FonctionSci::ExpNaturelle,
    FonctionSci::DixPuissance,
    FonctionSci::Ln,
    FonctionSci::Log10,
    FonctionSci::Sin,
    FonctionSci::Cos,
    FonctionSci::Tan,
    FonctionSci::Sinh,
    FonctionSci::Cosh,
    FonctionSci::Tanh,
    FonctionSci::Factorielle,
    FonctionSci::Pi,
    FonctionSci::E,
    FonctionSci::Aleatoire,
];

fn tirage_fixe() -> f64 {
    0.5
}

fn gen_action(rng: &mut Rng) -> Action {
    // chiffres surreprésentés : on veut des nombres longs pour tester le plafond
    match rng.pick(20) {
        0..=7 => Action::Chiffre(rng.pick(10) as u8),
        8 => Action::Separateur,
        9 => Action::Operateur(OPERATEURS[rng.pick(6) as usize]),
        10 => Action::Egal,
        11 => Action::Scientifique(FONCTIONS[rng.pick(19) as usize]),
        12 => Action::ChangerSigne,
        13 => Action::Pourcent,
        14 => match rng.pick(4) {
            0 => Action::MemoireEffacer,
            1 => Action::MemoireAjouter,
            2 => Action::MemoireSoustraire,
            _ => Action::MemoireRappeler,
        },
        15 => Action::BasculerAngle,
        16 => Action::Retour,
        17 => Action::EffacerEntree,
        18 => Action::Effacer,
        _ => Action::Operateur(OPERATEURS[rng.pick(4) as usize]),
    }
}

/// Joue une séquence et renvoie la suite des (affichage, trace).
fn jouer(seed: u64, pas: usize, t0: Instant, max: Duration) -> Vec<(String, String)> {
    let mut rng = Rng::new(seed);
    let mut c = Calculatrice::default().avec_tirage(tirage_fixe);
    let mut sorties = Vec::with_capacity(pas);

    for _ in 0..pas {
        budget(t0, max);

        if rng.pick(25) == 0 {
            let o = if rng.pick(2) == 0 {
                Orientation::Portrait
            } else {
                Orientation::Paysage
            };
            c.definir_orientation(o);
        }

        let action = gen_action(&mut rng);
        let issue = c.appliquer(action);

        check_invariants(&c, action, issue);
        sorties.push((c.affichage(), c.trace()));
    }
    sorties
}

fn check_invariants(c: &Calculatrice, action: Action, issue: Issue) {
    let affichage = c.affichage();

    if matches!(action, Action::Chiffre(_)) && issue == Issue::Appliquee {
        assert!(
            compter_chiffres(&affichage) <= CHIFFRES_MAX,
            "plafond dépassé: {affichage:?}"
        );
    }

    if affichage == SENTINELLE_ERREUR {
        assert_eq!(c.trace(), "", "Error avec trace non vide");
    }

    if let Issue::Erreur(_) = issue {
        assert_eq!(affichage, SENTINELLE_ERREUR);
    }

    if c.orientation() == Orientation::Portrait && action.est_scientifique() {
        assert_eq!(issue, Issue::Ignoree, "{action:?} accepté en portrait");
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_invariants() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    for seed in [0xC0FFEE_u64, 0xBADC0DE, 42, 7] {
        let sorties = jouer(seed, 400, t0, max);
        assert_eq!(sorties.len(), 400);
    }
}

#[test]
fn fuzz_safe_determinisme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let a = jouer(0xDEC0DE, 300, t0, max);
    let b = jouer(0xDEC0DE, 300, t0, max);
    assert_eq!(a, b);
}

#[test]
fn fuzz_safe_campagne_voit_des_erreurs() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    // Sur une longue séquence, le fuzz doit traverser l’état Error au moins une fois,
    // sinon il ne “balaye” rien.
    let sorties = jouer(0x5EED, 2000, t0, max);
    assert!(
        sorties.iter().any(|(a, _)| a == SENTINELLE_ERREUR),
        "aucune erreur vue: fuzz trop “sage”"
    );
    assert!(
        sorties.iter().any(|(_, t)| t.ends_with('=')),
        "aucun calcul complet vu"
    );
}

#[test]
fn fuzz_safe_saisie_longue() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let mut rng = Rng::new(0xFEED);
    let mut c = Calculatrice::default();
    for _ in 0..500 {
        budget(t0, max);
        c.appliquer(Action::Chiffre(1 + rng.pick(9) as u8));
        if rng.pick(40) == 0 {
            c.appliquer(Action::Separateur);
        }
    }
    assert_eq!(compter_chiffres(&c.affichage()), CHIFFRES_MAX);
}
