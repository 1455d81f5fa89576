// src/noyau/saisie.rs
//
// Saisie = nombre en cours de frappe (ou dernier résultat), ou marqueur d’erreur.
// Toute conversion texte <-> nombre passe par nombre.rs.

use std::fmt;

use super::nombre::{formater_nombre, lire_nombre};

/// Texte affiché pour une division par zéro.
pub const TEXTE_ERREUR: &str = "Error";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Saisie {
    /// Numéral partiel ou complet ("0", "12.", "-3.5", "1e+21"...).
    /// Contient au plus un point décimal.
    Nombre(String),
    /// Résultat d’une division par zéro.
    Erreur,
}

impl Default for Saisie {
    fn default() -> Self {
        Self::zero()
    }
}

impl Saisie {
    pub fn zero() -> Self {
        Saisie::Nombre("0".to_string())
    }

    /// Résultat de calcul -> saisie (écriture navigateur).
    pub fn depuis_valeur(x: f64) -> Self {
        Saisie::Nombre(formater_nombre(x))
    }

    pub fn texte(&self) -> &str {
        match self {
            Saisie::Nombre(s) => s,
            Saisie::Erreur => TEXTE_ERREUR,
        }
    }

    /// Valeur numérique (préfixe lisible), `None` si erreur ou illisible.
    pub fn valeur(&self) -> Option<f64> {
        match self {
            Saisie::Nombre(s) => lire_nombre(s),
            Saisie::Erreur => None,
        }
    }

    /// Exactement "0" (pas "0." ni "-0").
    pub fn est_zero(&self) -> bool {
        matches!(self, Saisie::Nombre(s) if s == "0")
    }

    pub fn est_erreur(&self) -> bool {
        matches!(self, Saisie::Erreur)
    }

    /// Ajoute un chiffre en fin de saisie (sans règle du zéro initial).
    pub fn ajouter_chiffre(&mut self, c: char) {
        if let Saisie::Nombre(s) = self {
            s.push(c);
        }
    }

    /// Ajoute le point décimal s’il est absent.
    pub fn ajouter_point(&mut self) {
        if let Saisie::Nombre(s) = self {
            if !s.contains('.') {
                s.push('.');
            }
        }
    }

    /// "-" en tête : ajouté si absent, retiré sinon.
    pub fn basculer_signe(&mut self) {
        if let Saisie::Nombre(s) = self {
            if let Some(reste) = s.strip_prefix('-') {
                *s = reste.to_string();
            } else {
                s.insert(0, '-');
            }
        }
    }
}

impl fmt::Display for Saisie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.texte())
    }
}
