// src/noyau/integrale.rs
//
// Intégrales à une variable : capacité DÉCLARÉE, pas encore calculée.
// Le contrat exige un échec franc (NonImplementee) plutôt qu'une valeur
// devinée ou un résultat partiel.

use super::calculateur::Calculateur;
use super::erreur::ErreurCalc;
use super::format::format_nombre;
use super::lecture::exiger_compte;

const EXPLICATION_INTEGRALE: &str = r"
=========
Intégrales
=========

Les intégrales mesurent l'aire sous la courbe d'une fonction
dérivable.

Cela suppose :
    - que l'on connaît le comportement global de la fonction.
";

/// Calculateur d'intégrale 1D : bornes + pas déclarés, calcul à venir.
#[derive(Debug)]
pub struct CalculIntegrale {
    borne_inf: f64,
    borne_sup: f64,
    pas: f64,
}

impl CalculIntegrale {
    /// Attend exactement 3 paramètres : borne inférieure, borne supérieure, pas.
    pub fn new(params: &[f64]) -> Result<Self, ErreurCalc> {
        exiger_compte(params, 3)?;
        Ok(Self {
            borne_inf: params[0],
            borne_sup: params[1],
            pas: params[2],
        })
    }

}

impl Calculateur for CalculIntegrale {
    fn titre(&self) -> &'static str {
        "Intégrale (à venir)"
    }

    fn explication(&self) -> String {
        EXPLICATION_INTEGRALE.to_string()
    }

    fn formule(&self) -> String {
        "∫ f(x) dx sur [borne inf, borne sup]".to_string()
    }

    fn demarche(&self) -> String {
        format!(
            "bornes [{}, {}], pas {} : le calcul d'intégrale n'est pas implémenté",
            format_nombre(self.borne_inf),
            format_nombre(self.borne_sup),
            format_nombre(self.pas)
        )
    }

    fn valeur(&self) -> Result<f64, ErreurCalc> {
        Err(ErreurCalc::NonImplementee("calcul d'intégrale"))
    }
}
