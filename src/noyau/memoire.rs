// src/noyau/memoire.rs
//
// Registre mémoire unique (MC / M+ / M− / MR).
// Durée de vie : la session. Seules les touches mémoire le modifient.

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Memoire {
    valeur: f64,
}

impl Memoire {
    /// MC
    pub fn effacer(&mut self) {
        self.valeur = 0.0;
    }

    /// M+ (valeur affichée)
    pub fn ajouter(&mut self, x: f64) {
        self.valeur += x;
    }

    /// M− (valeur affichée)
    pub fn soustraire(&mut self, x: f64) {
        self.valeur -= x;
    }

    /// MR : None si le registre est vide (zéro).
    pub fn rappeler(&self) -> Option<f64> {
        (self.valeur != 0.0).then_some(self.valeur)
    }
}
