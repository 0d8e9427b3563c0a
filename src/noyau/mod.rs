//! Noyau pédagogique
//!
//! Organisation interne :
//! - calculateur.rs : contrat commun (explication / formule / démarche / valeur) + Fiche
//! - erreur.rs      : taxonomie d'erreurs (ErreurCalc)
//! - lecture.rs     : lecture des paramètres (liste de nombres séparés par virgules)
//! - format.rs      : rendu décimal compact des résultats
//! - perimetre.rs   : famille des périmètres (triangle, carré/losange, rectangle, ...)
//! - derivee.rs     : différence avant + dérivée de f(x) = x² + 7
//! - regles.rs      : atelier des règles de dérivation (somme, ..., quotient, chaîne)
//! - integrale.rs   : capacité déclarée, échec franc
//! - eval.rs        : pipeline complet (code -> sélection -> lecture -> fiche)

pub mod calculateur;
pub mod derivee;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod integrale;
pub mod lecture;
pub mod perimetre;
pub mod regles;

#[cfg(test)]
mod tests_pedagogiques;

#[cfg(test)]
mod tests_robustesse;

// API publique minimale
pub use calculateur::{Calculateur, Fiche};
pub use erreur::ErreurCalc;
pub use eval::{calculer_fiche, Selection};
