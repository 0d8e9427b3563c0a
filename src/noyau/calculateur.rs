// src/noyau/calculateur.rs
//
// Contrat commun des calculateurs pédagogiques.
// - Chaque variante sait s'expliquer (explication + formule), dérouler sa
//   démarche (texte avec les valeurs substituées) et livrer sa valeur pure.
// - fiche() assemble le tout pour la vue ; valeur() reste interrogeable seule
//   (les tests passent par là, jamais par le texte).

use super::erreur::ErreurCalc;
use super::format::format_nombre;

/// Résultat affichable d'un calcul : ce que la vue présente, champ par champ.
#[derive(Clone, Debug, Default)]
pub struct Fiche {
    pub titre: String,
    pub explication: String,
    pub formule: String,
    pub demarche: String,
    pub resultat: String,
}

/// Contrat commun : expliquer, montrer la formule, dérouler, calculer.
pub trait Calculateur {
    /// Titre de la variante ("Périmètre du triangle", ...).
    fn titre(&self) -> &'static str;

    /// Explication du concept (prose + schéma ASCII le cas échéant).
    fn explication(&self) -> String;

    /// Formule de la variante, dans sa propre notation.
    fn formule(&self) -> String;

    /// Démarche : le calcul déroulé avec les valeurs substituées.
    fn demarche(&self) -> String;

    /// Valeur numérique pure. Seul point d'échec du contrat.
    fn valeur(&self) -> Result<f64, ErreurCalc>;

    /// Assemble explication → formule → démarche → résultat.
    /// Une erreur de valeur() abandonne la fiche entière.
    fn fiche(&self) -> Result<Fiche, ErreurCalc> {
        let v = self.valeur()?;
        Ok(Fiche {
            titre: self.titre().to_string(),
            explication: self.explication(),
            formule: self.formule(),
            demarche: self.demarche(),
            resultat: format_nombre(v),
        })
    }
}
