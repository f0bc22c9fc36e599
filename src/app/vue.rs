// src/app/vue.rs
//
// Vue (UI egui) - natif + web
// ---------------------------
// Objectifs :
// - Deux lignes d’écran : trace (petite) + valeur (grande, alignée à droite)
// - Portrait : pavé de base 5×4
// - Paysage  : pavé de base + colonnes scientifiques, mémoire, Rad/Deg
// - Tactile  : boutons qui remplissent la largeur disponible
//
// La vue ne calcule rien : chaque bouton envoie une Action à etat.rs.

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::eval::Operateur;
use crate::noyau::scientifique::FonctionSci;
use crate::noyau::{Action, Orientation};

/// Une case du pavé. `None` = case vide.
type Case = Option<Touche>;

#[derive(Clone, Copy, Debug)]
struct Touche {
    libelle: &'static str,
    action: Action,
    genre: Genre,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Genre {
    Chiffre,
    Fonction,
    Operateur,
    Scientifique,
}

const fn t(libelle: &'static str, action: Action, genre: Genre) -> Case {
    Some(Touche {
        libelle,
        action,
        genre,
    })
}

const fn ch(d: u8, libelle: &'static str) -> Case {
    t(libelle, Action::Chiffre(d), Genre::Chiffre)
}

const fn op(o: Operateur, libelle: &'static str) -> Case {
    t(libelle, Action::Operateur(o), Genre::Operateur)
}

const fn sci(f: FonctionSci) -> Case {
    t(f.libelle(), Action::Scientifique(f), Genre::Scientifique)
}

/* ------------------------ Pavés ------------------------ */

const BASE: [[Case; 4]; 5] = [
    [
        t("AC", Action::Effacer, Genre::Fonction),
        t("±", Action::ChangerSigne, Genre::Fonction),
        t("%", Action::Pourcent, Genre::Fonction),
        op(Operateur::Divise, "÷"),
    ],
    [ch(7, "7"), ch(8, "8"), ch(9, "9"), op(Operateur::Fois, "×")],
    [ch(4, "4"), ch(5, "5"), ch(6, "6"), op(Operateur::Moins, "−")],
    [ch(1, "1"), ch(2, "2"), ch(3, "3"), op(Operateur::Plus, "+")],
    [
        ch(0, "0"),
        t("", Action::Separateur, Genre::Chiffre),
        t("DEL", Action::Retour, Genre::Fonction),
        t("=", Action::Egal, Genre::Operateur),
    ],
];

/// Colonnes ajoutées à gauche du pavé de base en paysage.
/// La touche Rad/Deg est rendue à part (libellé dynamique).
const SCIENTIFIQUE: [[Case; 6]; 5] = [
    [
        t("MC", Action::MemoireEffacer, Genre::Scientifique),
        t("M+", Action::MemoireAjouter, Genre::Scientifique),
        t("M−", Action::MemoireSoustraire, Genre::Scientifique),
        t("MR", Action::MemoireRappeler, Genre::Scientifique),
        t("", Action::BasculerAngle, Genre::Scientifique),
        t("C", Action::EffacerEntree, Genre::Fonction),
    ],
    [
        sci(FonctionSci::Carre),
        sci(FonctionSci::Cube),
        t(
            Operateur::Puissance.symbole(),
            Action::Operateur(Operateur::Puissance),
            Genre::Scientifique,
        ),
        sci(FonctionSci::ExpNaturelle),
        sci(FonctionSci::DixPuissance),
        sci(FonctionSci::Factorielle),
    ],
    [
        sci(FonctionSci::Inverse),
        sci(FonctionSci::RacineCarree),
        sci(FonctionSci::RacineCubique),
        t(
            Operateur::Racine.symbole(),
            Action::Operateur(Operateur::Racine),
            Genre::Scientifique,
        ),
        sci(FonctionSci::Ln),
        sci(FonctionSci::Log10),
    ],
    [
        sci(FonctionSci::Sin),
        sci(FonctionSci::Cos),
        sci(FonctionSci::Tan),
        sci(FonctionSci::Pi),
        sci(FonctionSci::E),
        sci(FonctionSci::Aleatoire),
    ],
    [
        sci(FonctionSci::Sinh),
        sci(FonctionSci::Cosh),
        sci(FonctionSci::Tanh),
        None,
        None,
        None,
    ],
];

const ESPACEMENT: f32 = 6.0;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(ESPACEMENT, ESPACEMENT);

        let zone = ui.available_rect_before_wrap();
        self.suivre_orientation(zone.width(), zone.height());
        let paysage = self.calc.orientation() == Orientation::Paysage;

        self.ui_ecran(ui, paysage);
        ui.add_space(ESPACEMENT);
        self.ui_pave(ui, paysage);
    }

    fn ui_ecran(&self, ui: &mut egui::Ui, paysage: bool) {
        let taille_valeur = if paysage { 40.0 } else { 56.0 };

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                ui.horizontal(|ui| {
                    ui.weak(self.calc.mode_angle().libelle());
                    if self.calc.memoire_active() {
                        ui.weak("M");
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let trace = self.calc.trace();
                    ui.label(egui::RichText::new(non_vide(&trace)).size(18.0).weak());
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let valeur = self.calc.affichage();
                    ui.label(
                        egui::RichText::new(non_vide(&valeur))
                            .size(taille_valeur)
                            .monospace(),
                    );
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui, paysage: bool) {
        let colonnes = if paysage { 10 } else { 4 };
        let lignes = BASE.len();

        let largeur = ui.available_width();
        let hauteur = ui.available_height();
        let taille = egui::vec2(
            cellule(largeur, colonnes),
            cellule(hauteur, lignes).min(if paysage { 56.0 } else { 80.0 }),
        );

        let separateur = self.calc.separateur().caractere().to_string();
        let angle = self.calc.mode_angle().libelle();

        egui::Grid::new("pave_calculatrice")
            .num_columns(colonnes)
            .spacing([ESPACEMENT, ESPACEMENT])
            .show(ui, |ui| {
                for (i, base) in BASE.iter().enumerate() {
                    if paysage {
                        for case in &SCIENTIFIQUE[i] {
                            self.bouton(ui, *case, taille, angle);
                        }
                    }
                    for case in base {
                        self.bouton(ui, *case, taille, &separateur);
                    }
                    ui.end_row();
                }
            });
    }

    /// `dynamique` remplace un libellé vide (séparateur local, Rad/Deg).
    fn bouton(&mut self, ui: &mut egui::Ui, case: Case, taille: egui::Vec2, dynamique: &str) {
        let Some(touche) = case else {
            ui.allocate_space(taille);
            return;
        };

        let libelle = if touche.libelle.is_empty() {
            dynamique
        } else {
            touche.libelle
        };
        let texte = egui::RichText::new(libelle).size(if touche.genre == Genre::Scientifique {
            16.0
        } else {
            22.0
        });

        let mut bouton = egui::Button::new(texte);
        match touche.genre {
            Genre::Operateur => bouton = bouton.fill(ui.visuals().selection.bg_fill),
            Genre::Fonction => bouton = bouton.fill(ui.visuals().widgets.active.weak_bg_fill),
            Genre::Chiffre | Genre::Scientifique => {}
        }

        if ui.add_sized(taille, bouton).clicked() {
            self.presser(touche.action);
        }
    }
}

/// Largeur (ou hauteur) d’une cellule pour `n` cases séparées par ESPACEMENT.
fn cellule(total: f32, n: usize) -> f32 {
    let n = n.max(1) as f32;
    ((total - ESPACEMENT * (n - 1.0)) / n).max(24.0)
}

/// Un label vide écrase la ligne : on garde la hauteur avec une espace.
fn non_vide(s: &str) -> &str {
    if s.is_empty() {
        " "
    } else {
        s
    }
}
