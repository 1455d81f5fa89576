//! Noyau — évaluation d’une opération binaire.
//!
//! Contrats :
//! - jamais de panique, jamais d’`Err` : tout se dégrade en valeur
//! - opérande illisible => on rend `b` tel quel
//! - division par zéro exact (0 ou -0) => `Saisie::Erreur`
//! - résultat écrit en double IEEE, sans arrondi supplémentaire

use super::action::Operateur;
use super::saisie::Saisie;

/// `a op b`, sur les textes des saisies.
pub fn evaluer(a: &Saisie, b: &Saisie, op: Operateur) -> Saisie {
    let (Some(x), Some(y)) = (a.valeur(), b.valeur()) else {
        return b.clone();
    };

    let r = match op {
        Operateur::Addition => x + y,
        Operateur::Soustraction => x - y,
        Operateur::Multiplication => x * y,
        Operateur::Division => {
            if y == 0.0 {
                return Saisie::Erreur;
            }
            x / y
        }
    };

    Saisie::depuis_valeur(r)
}
