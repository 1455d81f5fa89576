//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : porter la calculatrice du noyau + le pavé de touches, et router un clic
//! (descripteur de touche) vers une action du noyau.
//!
//! Contrats :
//! - Aucun calcul ici : tout passe par `Calculatrice::appliquer`.
//! - Une touche mal décrite est ignorée (trace `warn`), jamais de panique.

use crate::noyau::action::symbole_operateur;
use crate::noyau::{Action, Affichage, Calculatrice, ErreurAction};

/// Une touche du pavé, décrite comme un bouton HTML :
/// nom d’action + texte + identifiant d’opérateur optionnel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Touche {
    pub action: &'static str,
    pub texte: &'static str,
    pub operateur: Option<&'static str>,
}

impl Touche {
    const fn simple(action: &'static str, texte: &'static str) -> Self {
        Self {
            action,
            texte,
            operateur: None,
        }
    }

    const fn chiffre(texte: &'static str) -> Self {
        Self::simple("number", texte)
    }

    const fn operateur(id: &'static str) -> Self {
        Self {
            action: "operator",
            texte: "",
            operateur: Some(id),
        }
    }

    /// Texte du bouton ; pour un opérateur, son symbole.
    pub fn libelle(&self) -> &'static str {
        match self.operateur {
            Some(id) => symbole_operateur(id),
            None => self.texte,
        }
    }

    pub fn vers_action(&self) -> Result<Action, ErreurAction> {
        Action::depuis_bouton(self.action, self.libelle(), self.operateur)
    }
}

/// Pavé 4 colonnes (la dernière ligne n’en a que 3).
pub const PAVE: &[&[Touche]] = &[
    &[
        Touche::simple("clear", "AC"),
        Touche::simple("sign", "±"),
        Touche::simple("percent", "%"),
        Touche::operateur("divide"),
    ],
    &[
        Touche::chiffre("7"),
        Touche::chiffre("8"),
        Touche::chiffre("9"),
        Touche::operateur("multiply"),
    ],
    &[
        Touche::chiffre("4"),
        Touche::chiffre("5"),
        Touche::chiffre("6"),
        Touche::operateur("subtract"),
    ],
    &[
        Touche::chiffre("1"),
        Touche::chiffre("2"),
        Touche::chiffre("3"),
        Touche::operateur("add"),
    ],
    &[
        Touche::chiffre("0"),
        Touche::simple("decimal", "."),
        Touche::simple("equal", "="),
    ],
];

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    calc: Calculatrice,
}

impl AppCalc {
    pub fn affichage(&self) -> &Affichage {
        self.calc.affichage()
    }

    /// Vrai si cette touche est l’opérateur en attente (surlignage).
    pub fn est_en_attente(&self, touche: &Touche) -> bool {
        match (self.calc.operateur(), touche.operateur) {
            (Some(op), Some(id)) => op.identifiant() == id,
            _ => false,
        }
    }

    /// Clic sur une touche : descripteur -> action -> noyau.
    pub fn declencher(&mut self, touche: &Touche) {
        let action = match touche.vers_action() {
            Ok(a) => a,
            Err(e) => {
                tracing::warn!(?touche, erreur = %e, "touche ignorée");
                return;
            }
        };

        let aff = self.calc.appliquer(action);
        tracing::debug!(
            ?action,
            entree = %aff.entree,
            expression = %aff.expression,
            "touche appliquée"
        );
    }
}
