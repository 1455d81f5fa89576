// src/noyau/action.rs
//
// Actions utilisateur (typées) + lecture des descripteurs de boutons.
//
// Un bouton du pavé porte :
// - un nom d’action : number | decimal | clear | sign | percent | operator | equal
// - son texte (le chiffre pour "number")
// - un identifiant d’opérateur (pour "operator") : add | subtract | multiply | divide

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurAction {
    #[error("action inconnue: {0:?}")]
    ActionInconnue(String),

    #[error("chiffre invalide: {0:?}")]
    ChiffreInvalide(String),

    #[error("opérateur manquant pour l’action \"operator\"")]
    OperateurManquant,

    #[error("opérateur inconnu: {0:?}")]
    OperateurInconnu(String),
}

/* ------------------------ Chiffre ------------------------ */

/// Un seul chiffre ASCII 0..=9.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chiffre(char);

impl Chiffre {
    pub fn car(self) -> char {
        self.0
    }
}

impl TryFrom<char> for Chiffre {
    type Error = ErreurAction;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        if c.is_ascii_digit() {
            Ok(Chiffre(c))
        } else {
            Err(ErreurAction::ChiffreInvalide(c.to_string()))
        }
    }
}

impl FromStr for Chiffre {
    type Err = ErreurAction;

    /// Le texte du bouton, espaces autour tolérés.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut it = s.trim().chars();
        match (it.next(), it.next()) {
            (Some(c), None) => Chiffre::try_from(c),
            _ => Err(ErreurAction::ChiffreInvalide(s.to_string())),
        }
    }
}

/* ------------------------ Opérateur ------------------------ */

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operateur {
    Addition,
    Soustraction,
    Multiplication,
    Division,
}

impl Operateur {
    pub const TOUS: [Operateur; 4] = [
        Operateur::Addition,
        Operateur::Soustraction,
        Operateur::Multiplication,
        Operateur::Division,
    ];

    pub fn identifiant(self) -> &'static str {
        match self {
            Operateur::Addition => "add",
            Operateur::Soustraction => "subtract",
            Operateur::Multiplication => "multiply",
            Operateur::Division => "divide",
        }
    }

    /// Symbole d’affichage (U+2212 pour la soustraction, pas le tiret ASCII).
    pub fn symbole(self) -> &'static str {
        match self {
            Operateur::Addition => "+",
            Operateur::Soustraction => "−",
            Operateur::Multiplication => "×",
            Operateur::Division => "÷",
        }
    }
}

impl FromStr for Operateur {
    type Err = ErreurAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operateur::TOUS
            .into_iter()
            .find(|op| op.identifiant() == s)
            .ok_or_else(|| ErreurAction::OperateurInconnu(s.to_string()))
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbole())
    }
}

/// Symbole depuis un identifiant brut ; "" si inconnu.
pub fn symbole_operateur(identifiant: &str) -> &'static str {
    identifiant
        .parse::<Operateur>()
        .map(Operateur::symbole)
        .unwrap_or("")
}

/* ------------------------ Action ------------------------ */

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Chiffre(Chiffre),
    Point,
    Effacer,
    Signe,
    Pourcent,
    Operateur(Operateur),
    Egal,
}

impl Action {
    /// Descripteur de bouton -> action typée.
    ///
    /// `contenu` n’est lu que pour "number", `operateur` que pour "operator".
    pub fn depuis_bouton(
        action: &str,
        contenu: &str,
        operateur: Option<&str>,
    ) -> Result<Action, ErreurAction> {
        match action {
            "number" => Ok(Action::Chiffre(contenu.parse()?)),
            "decimal" => Ok(Action::Point),
            "clear" => Ok(Action::Effacer),
            "sign" => Ok(Action::Signe),
            "percent" => Ok(Action::Pourcent),
            "operator" => {
                let id = operateur.ok_or(ErreurAction::OperateurManquant)?;
                Ok(Action::Operateur(id.parse()?))
            }
            "equal" => Ok(Action::Egal),
            autre => Err(ErreurAction::ActionInconnue(autre.to_string())),
        }
    }
}
