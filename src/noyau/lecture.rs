// src/noyau/lecture.rs
//
// Lecture des paramètres utilisateur.
// - L'entrée brute est une liste de nombres séparés par des virgules
//   ("1.7, 5.3, 3" ou "12") ; les espaces sont tolérés partout.
// - Entrée vide => liste vide (le polygone fermé l'accepte ; les autres
//   variantes échoueront proprement sur le compte de paramètres).
// - SAFE : on refuse ici tout nombre non fini (inf/NaN) ; les calculateurs
//   en aval supposent des mesures finies et calculent littéralement.

use super::erreur::ErreurCalc;

/// Lit une liste de f64 séparés par des virgules.
///
/// Erreurs :
/// - `ParametreIllisible` si un morceau ne se lit pas comme nombre
/// - `ParametreNonFini` si un morceau se lit mais donne inf/NaN
pub fn lire_parametres(entree: &str) -> Result<Vec<f64>, ErreurCalc> {
    let s = entree.trim();
    if s.is_empty() {
        return Ok(Vec::new());
    }

    let mut valeurs = Vec::new();

    for morceau in s.split(',') {
        let m = morceau.trim();
        if m.is_empty() {
            // ",," ou virgule de fin : morceau vide => illisible
            return Err(ErreurCalc::ParametreIllisible(morceau.to_string()));
        }

        let v: f64 = m
            .parse()
            .map_err(|_| ErreurCalc::ParametreIllisible(m.to_string()))?;

        if !v.is_finite() {
            return Err(ErreurCalc::ParametreNonFini(m.to_string()));
        }

        valeurs.push(v);
    }

    Ok(valeurs)
}

/// Vérifie le compte exact de paramètres attendu par une variante.
pub fn exiger_compte(valeurs: &[f64], attendu: usize) -> Result<(), ErreurCalc> {
    if valeurs.len() != attendu {
        return Err(ErreurCalc::ParametresInsuffisants {
            attendu,
            recu: valeurs.len(),
        });
    }
    Ok(())
}
