// src/noyau/erreur.rs
//
// Taxonomie d'erreurs du noyau.
// - Chaque erreur est locale à UNE demande de calcul : rien n'est retenté,
//   rien n'est récupéré en cours de route.
// - Les messages sont destinés à l'affichage direct dans la vue.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ErreurCalc {
    /// Mauvais nombre de paramètres à la construction d'un calculateur.
    #[error("paramètres invalides : {attendu} attendu(s), {recu} reçu(s)")]
    ParametresInsuffisants { attendu: usize, recu: usize },

    /// Pas de dérivation nul : la différence avant diviserait par zéro.
    /// On refuse explicitement plutôt que de laisser filer un inf/NaN.
    #[error("pas nul : la différence avant exige un pas non nul")]
    PasNul,

    /// Capacité déclarée mais sans calcul : échec franc, jamais de valeur devinée.
    #[error("opération non implémentée : {0}")]
    NonImplementee(&'static str),

    /// Code d'opération inconnu du pipeline.
    #[error("sélection inconnue : '{0}'")]
    SelectionInconnue(String),

    /// Un morceau de l'entrée n'est pas un nombre lisible.
    #[error("paramètre illisible : '{0}'")]
    ParametreIllisible(String),

    /// Nombre lu mais non fini (inf/NaN) : hors du domaine des mesures.
    #[error("paramètre non fini : '{0}'")]
    ParametreNonFini(String),
}
