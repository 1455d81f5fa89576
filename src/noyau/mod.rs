//! Noyau quatre opérations
//!
//! Organisation interne :
//! - nombre.rs   : lecture permissive / écriture "navigateur" des f64
//! - saisie.rs   : nombre en cours de frappe (ou "Error")
//! - action.rs   : actions typées + descripteurs de boutons
//! - eval.rs     : a op b (division par zéro => Error)
//! - moteur.rs   : réducteur pur + affichage

pub mod action;
pub mod eval;
pub mod moteur;
pub mod nombre;
pub mod saisie;

#[cfg(test)]
mod tests_scenarios;


// API publique minimale
pub use action::{Action, ErreurAction};
pub use moteur::{Affichage, Calculatrice};
