//! Noyau — pipeline de sélection (point d'entrée réel)
//!
//! code -> Selection -> lecture des paramètres -> construction du
//! calculateur -> fiche (explication / formule / démarche / résultat)
//!
//! Les codes courts viennent des menus d'origine ("t" triangle, "r"
//! rectangle, ...) étendus à toutes les opérations ; tout code hors table
//! est une SelectionInconnue, remontée telle quelle à la vue.

use super::calculateur::{Calculateur, Fiche};
use super::derivee::CalculDerivee;
use super::erreur::ErreurCalc;
use super::integrale::CalculIntegrale;
use super::lecture::lire_parametres;
use super::perimetre::{
    Cercle, Parallelogramme, PolygoneFerme, QuadrilatereRegulier, Rectangle, Triangle,
};
use super::regles::{DemonstrationRegle, Regle, VarianteQuotient};

/// Une opération sélectionnable, tous calculateurs confondus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    Triangle,
    Carre,
    Rectangle,
    Losange,
    Parallelogramme,
    PolygoneFerme,
    Cercle,
    Derivee,
    RegleSomme,
    RegleDifference,
    RegleProduit,
    RegleQuotient,
    RegleChaine,
    Integrale,
}

/// Table (code, sélection) : la source unique des codes reconnus.
const TABLE_CODES: &[(&str, Selection)] = &[
    ("t", Selection::Triangle),
    ("c", Selection::Carre),
    ("r", Selection::Rectangle),
    ("lo", Selection::Losange),
    ("pa", Selection::Parallelogramme),
    ("po", Selection::PolygoneFerme),
    ("ce", Selection::Cercle),
    ("d", Selection::Derivee),
    ("rs", Selection::RegleSomme),
    ("rd", Selection::RegleDifference),
    ("rp", Selection::RegleProduit),
    ("rq", Selection::RegleQuotient),
    ("rc", Selection::RegleChaine),
    ("i", Selection::Integrale),
];

impl Selection {
    /// Résout un code court (insensible à la casse, espaces tolérés).
    pub fn depuis_code(code: &str) -> Result<Selection, ErreurCalc> {
        let c = code.trim().to_lowercase();
        TABLE_CODES
            .iter()
            .find(|(k, _)| *k == c)
            .map(|(_, s)| *s)
            .ok_or_else(|| ErreurCalc::SelectionInconnue(code.trim().to_string()))
    }

    pub fn code(self) -> &'static str {
        TABLE_CODES
            .iter()
            .find(|(_, s)| *s == self)
            .map(|(k, _)| *k)
            .unwrap_or("?")
    }

    /// Libellé court pour la vue.
    pub fn libelle(self) -> &'static str {
        match self {
            Selection::Triangle => "Triangle",
            Selection::Carre => "Carré",
            Selection::Rectangle => "Rectangle",
            Selection::Losange => "Losange",
            Selection::Parallelogramme => "Parallélogramme",
            Selection::PolygoneFerme => "Polygone fermé",
            Selection::Cercle => "Cercle",
            Selection::Derivee => "Dérivée de f",
            Selection::RegleSomme => "Règle d'addition",
            Selection::RegleDifference => "Règle de soustraction",
            Selection::RegleProduit => "Règle du produit",
            Selection::RegleQuotient => "Règle du quotient",
            Selection::RegleChaine => "Règle de la chaîne",
            Selection::Integrale => "Intégrale",
        }
    }

    /// Aide de saisie pour la vue (ordre et sens des paramètres).
    pub fn indice_saisie(self) -> &'static str {
        match self {
            Selection::Triangle => "3 côtés, Ex: 1.7, 5.3, 3.0",
            Selection::Carre => "1 côté, Ex: 2.5",
            Selection::Rectangle => "largeur puis hauteur, Ex: 1.7, 5.3",
            Selection::Losange => "1 côté, Ex: 2.5",
            Selection::Parallelogramme => "côté horizontal puis vertical, Ex: 1.7, 5.3",
            Selection::PolygoneFerme => "distances ordonnées, Ex: 1.7, 5.3, 2.3, 65.2",
            Selection::Cercle => "rayon, Ex: 3.0",
            Selection::Derivee
            | Selection::RegleSomme
            | Selection::RegleDifference
            | Selection::RegleProduit
            | Selection::RegleQuotient
            | Selection::RegleChaine => "point puis pas, Ex: 2.0, 0.0001",
            Selection::Integrale => "borne inf, borne sup, pas, Ex: 0, 1, 0.001",
        }
    }

    /// Construit le calculateur de la variante à partir des paramètres lus.
    pub fn construire(self, params: &[f64]) -> Result<Box<dyn Calculateur>, ErreurCalc> {
        let calc: Box<dyn Calculateur> = match self {
            Selection::Triangle => Box::new(Triangle::new(params)?),
            Selection::Carre => Box::new(QuadrilatereRegulier::carre(params)?),
            Selection::Rectangle => Box::new(Rectangle::new(params)?),
            Selection::Losange => Box::new(QuadrilatereRegulier::losange(params)?),
            Selection::Parallelogramme => Box::new(Parallelogramme::new(params)?),
            Selection::PolygoneFerme => Box::new(PolygoneFerme::new(params)),
            Selection::Cercle => Box::new(Cercle::new(params)?),
            Selection::Derivee => Box::new(CalculDerivee::new(params)?),
            Selection::RegleSomme => Box::new(DemonstrationRegle::new(params, Regle::Somme)?),
            Selection::RegleDifference => {
                Box::new(DemonstrationRegle::new(params, Regle::Difference)?)
            }
            Selection::RegleProduit => Box::new(DemonstrationRegle::new(params, Regle::Produit)?),
            Selection::RegleQuotient => Box::new(DemonstrationRegle::new(
                params,
                Regle::Quotient(VarianteQuotient::DenominateurGCarre),
            )?),
            Selection::RegleChaine => Box::new(DemonstrationRegle::new(params, Regle::Chaine)?),
            Selection::Integrale => Box::new(CalculIntegrale::new(params)?),
        };
        Ok(calc)
    }

    /// Les sélections groupées par famille, dans l'ordre de présentation
    /// de la vue.
    pub fn groupes() -> &'static [(&'static str, &'static [Selection])] {
        const PERIMETRES: &[Selection] = &[
            Selection::Triangle,
            Selection::Carre,
            Selection::Rectangle,
            Selection::Losange,
            Selection::Parallelogramme,
            Selection::PolygoneFerme,
            Selection::Cercle,
        ];
        const DERIVEES: &[Selection] = &[
            Selection::Derivee,
            Selection::RegleSomme,
            Selection::RegleDifference,
            Selection::RegleProduit,
            Selection::RegleQuotient,
            Selection::RegleChaine,
        ];
        const INTEGRALES: &[Selection] = &[Selection::Integrale];

        &[
            ("Périmètres", PERIMETRES),
            ("Dérivées", DERIVEES),
            ("Intégrales", INTEGRALES),
        ]
    }
}

/// API publique : du code + entrée brute à la fiche affichable.
pub fn calculer_fiche(code: &str, entree: &str) -> Result<Fiche, ErreurCalc> {
    log::debug!("calcul demandé : code={code:?} entree={entree:?}");

    let selection = Selection::depuis_code(code)?;
    let params = lire_parametres(entree)?;
    let calc = selection.construire(&params)?;

    let fiche = calc.fiche();
    if let Err(e) = &fiche {
        log::debug!("calcul refusé : {e}");
    }
    fiche
}

#[cfg(test)]
mod tests {
    use super::{calculer_fiche, Selection};
    use crate::noyau::erreur::ErreurCalc;

    #[test]
    fn codes_aller_retour() {
        for (_, selections) in Selection::groupes() {
            for s in selections.iter().copied() {
                assert_eq!(Selection::depuis_code(s.code()).unwrap(), s);
            }
        }
    }

    #[test]
    fn code_inconnu_remonte_proprement() {
        let e = Selection::depuis_code("zz").unwrap_err();
        assert_eq!(e, ErreurCalc::SelectionInconnue("zz".to_string()));
    }

    #[test]
    fn code_tolerant_casse_et_espaces() {
        assert_eq!(Selection::depuis_code(" T ").unwrap(), Selection::Triangle);
        assert_eq!(Selection::depuis_code("RS").unwrap(), Selection::RegleSomme);
    }

    #[test]
    fn pipeline_triangle_complet() {
        let fiche = calculer_fiche("t", "1.7, 5.3, 3.0").unwrap();
        assert_eq!(fiche.resultat, "10");
        assert!(fiche.formule.contains("P_triangle"));
        assert!(fiche.explication.contains("triangle"));
    }

    #[test]
    fn pipeline_polygone_vide() {
        let fiche = calculer_fiche("po", "").unwrap();
        assert_eq!(fiche.resultat, "0");
    }

    #[test]
    fn pipeline_derivee() {
        let fiche = calculer_fiche("d", "3.0, 0.001").unwrap();
        // f'(3) = 6 ; la différence avant donne 6.001 → rendu "6.001"
        assert!(fiche.resultat.starts_with("6.0"));
    }

    #[test]
    fn pipeline_erreurs_typees() {
        // Compte de paramètres
        assert!(matches!(
            calculer_fiche("t", "1, 2").unwrap_err(),
            ErreurCalc::ParametresInsuffisants {
                attendu: 3,
                recu: 2
            }
        ));
        // Pas nul
        assert_eq!(calculer_fiche("d", "3, 0").unwrap_err(), ErreurCalc::PasNul);
        // Intégrale non implémentée
        assert!(matches!(
            calculer_fiche("i", "0, 1, 0.001").unwrap_err(),
            ErreurCalc::NonImplementee(_)
        ));
        // Entrée illisible
        assert!(matches!(
            calculer_fiche("t", "1, deux, 3").unwrap_err(),
            ErreurCalc::ParametreIllisible(_)
        ));
    }
}
