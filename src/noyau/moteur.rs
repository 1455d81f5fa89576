//! Noyau — moteur de la calculatrice (réducteur pur).
//!
//! Rôle : appliquer une `Action` à un état explicite et produire les deux textes
//! à afficher (entrée + expression en attente).
//!
//! Contrats :
//! - `reduire` est pure : état en entrée, état en sortie, rien d’autre.
//! - précédent et opérateur vont ensemble (`Option<Attente>`).
//! - `vient_d_evaluer` n’est vrai que juste après un "=" réussi.
//! - État d’erreur verrouillé : tant que l’entrée vaut "Error", seule
//!   l’action Effacer change quelque chose.

use super::action::{Action, Chiffre, Operateur};
use super::eval::evaluer;
use super::saisie::Saisie;

/// Opérande gauche + opération choisie, en attente de l’opérande droite.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attente {
    pub precedent: Saisie,
    pub operateur: Operateur,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Etat {
    pub courant: Saisie,
    pub attente: Option<Attente>,
    pub vient_d_evaluer: bool,
}

/// Ce que l’interface doit écrire tel quel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Affichage {
    pub entree: String,
    pub expression: String,
}

impl Default for Affichage {
    fn default() -> Self {
        Self {
            entree: "0".to_string(),
            expression: String::new(),
        }
    }
}

/// État + dernier affichage rendu.
///
/// L’entrée affichée n’est pas toujours `courant` : après un opérateur,
/// `courant` repart de "0" mais l’écran garde l’opérande (ou le résultat
/// chaîné) jusqu’à la prochaine frappe.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Calculatrice {
    etat: Etat,
    affichage: Affichage,
}

/// Réducteur : (calculatrice, action) -> calculatrice.
pub fn reduire(mut calc: Calculatrice, action: Action) -> Calculatrice {
    if calc.etat.courant.est_erreur() && action != Action::Effacer {
        tracing::trace!(?action, "ignorée : erreur affichée, Effacer requis");
        return calc;
    }

    match action {
        Action::Chiffre(c) => calc.chiffre(c),
        Action::Point => calc.point(),
        Action::Effacer => calc.effacer(),
        Action::Signe => calc.signe(),
        Action::Pourcent => calc.pourcent(),
        Action::Operateur(op) => calc.choisir_operateur(op),
        Action::Egal => calc.egal(),
    }

    calc
}

impl Calculatrice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forme "en place" du réducteur ; renvoie l’affichage à rendre.
    pub fn appliquer(&mut self, action: Action) -> &Affichage {
        let avant = std::mem::take(self);
        *self = reduire(avant, action);
        &self.affichage
    }

    pub fn affichage(&self) -> &Affichage {
        &self.affichage
    }

    pub fn courant(&self) -> &Saisie {
        &self.etat.courant
    }

    pub fn precedent(&self) -> Option<&Saisie> {
        self.etat.attente.as_ref().map(|a| &a.precedent)
    }

    pub fn operateur(&self) -> Option<Operateur> {
        self.etat.attente.as_ref().map(|a| a.operateur)
    }

    pub fn vient_d_evaluer(&self) -> bool {
        self.etat.vient_d_evaluer
    }

    /* ------------------------ Transitions ------------------------ */

    fn rendre_entree(&mut self) {
        self.affichage.entree = self.etat.courant.texte().to_string();
    }

    fn chiffre(&mut self, c: Chiffre) {
        if self.etat.courant.est_zero() || self.etat.vient_d_evaluer {
            self.etat.courant = Saisie::Nombre(c.car().to_string());
        } else {
            self.etat.courant.ajouter_chiffre(c.car());
        }
        self.etat.vient_d_evaluer = false;
        self.rendre_entree();
    }

    fn point(&mut self) {
        if self.etat.vient_d_evaluer {
            self.etat.courant = Saisie::Nombre("0.".to_string());
            self.etat.vient_d_evaluer = false;
        } else {
            self.etat.courant.ajouter_point();
        }
        self.rendre_entree();
    }

    fn effacer(&mut self) {
        self.etat = Etat::default();
        self.affichage = Affichage::default();
    }

    fn signe(&mut self) {
        if self.etat.courant.est_zero() {
            return;
        }
        self.etat.courant.basculer_signe();
        self.rendre_entree();
    }

    fn pourcent(&mut self) {
        if let Some(v) = self.etat.courant.valeur() {
            self.etat.courant = Saisie::depuis_valeur(v / 100.0);
            self.rendre_entree();
        }
    }

    fn choisir_operateur(&mut self, op: Operateur) {
        let precedent = match self.etat.attente.take() {
            Some(attente) if !self.etat.vient_d_evaluer => {
                // calcul chaîné : l’entrée en cours sert d’opérande droite
                let droite = std::mem::take(&mut self.etat.courant);
                let resultat = evaluer(&attente.precedent, &droite, attente.operateur);
                self.etat.courant = resultat.clone();
                self.rendre_entree();

                if resultat.est_erreur() {
                    // plus d’opérande gauche : on n’arme pas de nouvelle opération
                    self.affichage.expression =
                        format!("{} {} {}", attente.precedent, attente.operateur, droite);
                    self.etat.vient_d_evaluer = false;
                    return;
                }
                resultat
            }
            _ => self.etat.courant.clone(),
        };

        self.affichage.expression = format!("{precedent} {op}");
        self.etat.attente = Some(Attente {
            precedent,
            operateur: op,
        });
        self.etat.vient_d_evaluer = false;
        self.etat.courant = Saisie::zero();
    }

    fn egal(&mut self) {
        if self.etat.vient_d_evaluer {
            return;
        }
        let Some(attente) = self.etat.attente.take() else {
            return;
        };

        self.affichage.expression = format!(
            "{} {} {} =",
            attente.precedent, attente.operateur, self.etat.courant
        );
        self.etat.courant = evaluer(&attente.precedent, &self.etat.courant, attente.operateur);
        self.rendre_entree();
        self.etat.vient_d_evaluer = true;
    }
}
