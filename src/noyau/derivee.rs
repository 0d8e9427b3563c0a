// src/noyau/derivee.rs
//
// Différentielles à une variable.
// - difference_avant : l'estimateur générique (f(x+pas) - f(x)) / pas,
//   l'unique primitive numérique réutilisée partout (règles comprises).
// - CalculDerivee : la variante pédagogique sur la fonction échantillon
//   f(x) = x² + 7, évaluée en un point avec un pas stockés.
//
// SAFE : un pas nul est refusé à l'évaluation (jamais d'inf/NaN silencieux).

use num_traits::Float;

use super::calculateur::Calculateur;
use super::erreur::ErreurCalc;
use super::format::format_nombre;

/* ------------------------ Primitive générique ------------------------ */

/// Différence avant : estime f'(x) par (f(x + pas) - f(x)) / pas.
///
/// Erreur : `PasNul` si pas == 0 (division interdite).
pub fn difference_avant<T, F>(f: F, x: T, pas: T) -> Result<T, ErreurCalc>
where
    T: Float,
    F: Fn(T) -> T,
{
    if pas == T::zero() {
        return Err(ErreurCalc::PasNul);
    }

    let instant_avant = f(x);
    let instant_courant = f(x + pas);
    Ok((instant_courant - instant_avant) / pas)
}

/* ------------------------ Fonction échantillon ------------------------ */

/// La fonction échantillon de toute la famille différentielle.
pub fn f_echantillon(x: f64) -> f64 {
    x * x + 7.0
}

/* ------------------------ Calculateur de dérivée ------------------------ */

const EXPLICATION_DERIVEE: &str = r"
==============
Différentielles
==============

Les différentielles mesurent un taux de variation et répondent
à la question :

Quel est l'écart entre l'instant courant et l'instant d'avant ?

Cette question suppose, sous le capot :
    - que l'instant courant et l'instant d'avant sont comparables ;
    - que la même fonction s'applique aux deux instants.

Termes :
    - f(x2) : l'instant courant
    - f(x1) : l'instant d'avant
    - (x2 - x1) : la distance entre les deux instants,
      aussi petite que possible, presque 0.
";

/// Dérivée numérique de f(x) = x² + 7 en un point, avec un pas.
#[derive(Debug)]
pub struct CalculDerivee {
    point: f64,
    pas: f64,
}

impl CalculDerivee {
    /// Attend exactement 2 paramètres : point d'évaluation puis pas.
    pub fn new(params: &[f64]) -> Result<Self, ErreurCalc> {
        super::lecture::exiger_compte(params, 2)?;
        Ok(Self {
            point: params[0],
            pas: params[1],
        })
    }

    /// Applique la différence avant à f au point/pas stockés.
    pub fn derivee_de_f(&self) -> Result<f64, ErreurCalc> {
        difference_avant(f_echantillon, self.point, self.pas)
    }
}

impl Calculateur for CalculDerivee {
    fn titre(&self) -> &'static str {
        "Dérivée de f(x) = x² + 7"
    }

    fn explication(&self) -> String {
        EXPLICATION_DERIVEE.to_string()
    }

    fn formule(&self) -> String {
        "f'(x1) = (f(x2) - f(x1)) / (x2 - x1), avec (x2 - x1) qui tend vers 0".to_string()
    }

    fn demarche(&self) -> String {
        let x = self.point;
        let p = self.pas;
        format!(
            "f(x) = x² + 7\n(f({} + {}) - f({})) / {}",
            format_nombre(x),
            format_nombre(p),
            format_nombre(x),
            format_nombre(p),
        )
    }

    fn valeur(&self) -> Result<f64, ErreurCalc> {
        self.derivee_de_f()
    }
}
