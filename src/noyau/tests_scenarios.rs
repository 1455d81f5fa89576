//! Tests scénarios : séquences de boutons complètes, comme sur le pavé.
//!
//! Chaque scénario part d’une calculatrice neuve et passe par les descripteurs
//! de boutons (nom d’action + texte + opérateur), donc par le même chemin que l’UI.

use super::action::Action;
use super::moteur::{Affichage, Calculatrice};
use super::saisie::Saisie;

/// Touche courte : "0".."9", ".", "AC", "±", "%", "=", "+", "-", "*", "/".
fn action(touche: &str) -> Action {
    let (nom, contenu, op) = match touche {
        "." => ("decimal", ".", None),
        "AC" => ("clear", "AC", None),
        "±" => ("sign", "±", None),
        "%" => ("percent", "%", None),
        "=" => ("equal", "=", None),
        "+" => ("operator", "+", Some("add")),
        "-" => ("operator", "−", Some("subtract")),
        "*" => ("operator", "×", Some("multiply")),
        "/" => ("operator", "÷", Some("divide")),
        chiffre => ("number", chiffre, None),
    };
    Action::depuis_bouton(nom, contenu, op)
        .unwrap_or_else(|e| panic!("touche={touche:?} err={e}"))
}

fn taper(touches: &str) -> Calculatrice {
    let mut c = Calculatrice::new();
    for t in touches.split_whitespace() {
        c.appliquer(action(t));
    }
    c
}

fn assert_ecran(touches: &str, entree: &str, expression: &str) {
    let c = taper(touches);
    assert_eq!(c.affichage().entree, entree, "touches={touches:?}");
    assert_eq!(c.affichage().expression, expression, "touches={touches:?}");
}

/* ------------------------ Saisie ------------------------ */

#[test]
fn scn_saisie_simple() {
    assert_ecran("1 2 3", "123", "");
    assert_ecran("0 0 7", "7", "");
    assert_ecran(". 5", "0.5", "");
    assert_ecran("3 . . 1 .", "3.1", "");
}

#[test]
fn scn_signe() {
    assert_ecran("4 2 ±", "-42", "");
    assert_ecran("4 2 ± ±", "42", "");
    assert_ecran("±", "0", "");
    assert_ecran(". ±", "-0.", "");
}

#[test]
fn scn_pourcent() {
    assert_ecran("5 0 %", "0.5", "");
    assert_ecran("5 %", "0.05", "");
}

/* ------------------------ Opérations ------------------------ */

#[test]
fn scn_addition_simple() {
    assert_ecran("2 + 3 =", "5", "2 + 3 =");
}

#[test]
fn scn_soustraction_symbole_unicode() {
    assert_ecran("9 - 4", "4", "9 \u{2212}");
    assert_ecran("9 - 4 =", "5", "9 \u{2212} 4 =");
}

#[test]
fn scn_chaine() {
    let c = taper("2 + 3 + 4 =");
    assert_eq!(c.affichage().expression, "5 + 4 =");
    assert_eq!(c.courant().texte(), "9");
    assert_eq!(c.affichage().entree, "9");
}

#[test]
fn scn_chaine_ecran_intermediaire() {
    assert_ecran("2 + 3 *", "5", "5 ×");
    assert_ecran("2 + 3 * 4 =", "20", "5 × 4 =");
}

#[test]
fn scn_flottant_brut() {
    assert_ecran(". 1 + . 2 =", "0.30000000000000004", "0.1 + 0.2 =");
}

#[test]
fn scn_egal_sans_operateur_ne_fait_rien() {
    let avant = taper("7");
    let apres = taper("7 =");
    assert_eq!(apres, avant);
    assert_eq!(apres.affichage().entree, "7");
    assert_eq!(apres.affichage().expression, "");
}

#[test]
fn scn_operande_droite_implicite() {
    // aucun chiffre après l’opérateur : la droite vaut "0"
    assert_ecran("8 * =", "0", "8 × 0 =");
}

#[test]
fn scn_resultat_reutilise() {
    assert_ecran("6 / 4 = * 2 =", "3", "1.5 × 2 =");
}

#[test]
fn scn_grand_nombre_exponentiel() {
    assert_ecran(
        "1 0 0 0 0 0 0 0 0 0 0 * 1 0 0 0 0 0 0 0 0 0 0 0 =",
        "1e+21",
        "10000000000 × 100000000000 =",
    );
}

/* ------------------------ Erreur ------------------------ */

#[test]
fn scn_division_par_zero() {
    let c = taper("5 / 0 =");
    assert_eq!(c.courant(), &Saisie::Erreur);
    assert_eq!(c.affichage().entree, "Error");
    assert_eq!(c.affichage().expression, "5 ÷ 0 =");
}

#[test]
fn scn_operateur_apres_erreur() {
    let c = taper("5 / 0 = +");
    assert_eq!(c.precedent(), None);
    assert_eq!(c.operateur(), None);
    assert_eq!(c.affichage().entree, "Error");
}

#[test]
fn scn_pas_de_error5() {
    assert_ecran("5 / 0 = 5", "Error", "5 ÷ 0 =");
    assert_ecran("5 / 0 = .", "Error", "5 ÷ 0 =");
}

#[test]
fn scn_erreur_puis_ac() {
    assert_ecran("5 / 0 = AC 3 + 1 =", "4", "3 + 1 =");
}

/* ------------------------ AC ------------------------ */

#[test]
fn scn_ac_depuis_tous_les_etats() {
    for touches in [
        "",
        "1 2 .",
        "4 +",
        "4 + 5",
        "4 + 5 =",
        "4 + 5 = *",
        "5 / 0 =",
        "5 / 0 +",
        "9 ± %",
    ] {
        let mut c = taper(touches);
        let aff = c.appliquer(action("AC")).clone();
        assert_eq!(aff, Affichage::default(), "touches={touches:?}");
        assert_eq!(c, Calculatrice::new(), "touches={touches:?}");
    }
}
