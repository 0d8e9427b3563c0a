// src/noyau/regles.rs
//
// Atelier des règles de dérivation.
// - Deux fonctions échantillons : f(x) = x² + 7 (famille dérivée) et
//   g(x) = x³ + 2 (ajoutée ici).
// - Pour chaque règle (somme, différence, produit, quotient, chaîne), on
//   construit k(x) à partir de f et g, puis on compare :
//     * la dérivée de k calculée DIRECTEMENT (différence avant sur k),
//     * la dérivée calculée PAR PARTIES (la règle appliquée à f, g, f', g').
// - La règle du quotient existe en DEUX variantes nommées par leur
//   dénominateur : g(x)² (identité classique) et g'(x)² (variante de
//   comparaison). Les deux sont montrées côte à côte, aucune n'est
//   corrigée en douce.

use super::calculateur::Calculateur;
use super::derivee::{difference_avant, f_echantillon};
use super::erreur::ErreurCalc;
use super::format::format_nombre;

/* ------------------------ Fonction échantillon ajoutée ------------------------ */

/// La seconde fonction échantillon de l'atelier.
pub fn g_echantillon(x: f64) -> f64 {
    x * x * x + 2.0
}

/* ------------------------ Énoncés des règles ------------------------ */

const ENONCE_SOMME: &str = r"
k(x) = f(x) + g(x)

k'(x) = f'(x) + g'(x)
";

const ENONCE_DIFFERENCE: &str = r"
k(x) = f(x) - g(x)

k'(x) = f'(x) - g'(x)
";

const ENONCE_PRODUIT: &str = r"
k(x) = f(x) × g(x)

k'(x) = f'(x) × g(x) + f(x) × g'(x)
";

const ENONCE_QUOTIENT_G_CARRE: &str = r"
k(x) = f(x) / g(x)

k'(x) = [f'(x)g(x) - f(x)g'(x)] / (g(x) × g(x))
";

const ENONCE_QUOTIENT_DERIVEE_G_CARREE: &str = r"
k(x) = f(x) / g(x)

k'(x) = [f'(x)g(x) - f(x)g'(x)] / (g'(x) × g'(x))
";

const ENONCE_CHAINE: &str = r"
k(x) = f( g(x) )

k'(x) = f'(g(x)) × g'(x)
";

/* ------------------------ Types de l'atelier ------------------------ */

/// Dénominateur retenu pour la règle du quotient.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VarianteQuotient {
    /// Identité classique : division par g(x)².
    DenominateurGCarre,
    /// Division par g'(x)². Ne coïncide pas avec l'identité classique ;
    /// conservée comme option distincte pour la comparaison.
    DenominateurDeriveeGCarree,
}

/// Règle démontrable par l'atelier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Regle {
    Somme,
    Difference,
    Produit,
    Quotient(VarianteQuotient),
    Chaine,
}

/// Résultat transitoire d'une démonstration : la règle, son énoncé, et les
/// deux dérivées à comparer.
#[derive(Clone, Debug)]
pub struct Demonstration {
    pub nom: &'static str,
    pub enonce: &'static str,
    /// Dérivée de k(x) calculée directement (différence avant sur k).
    pub directe: f64,
    /// Dérivée calculée par parties, comme à droite du "=" de la règle.
    pub par_parties: f64,
}

impl Demonstration {
    /// Les deux dérivées concordent-elles à la tolérance donnée ?
    pub fn concorde(&self, tolerance: f64) -> bool {
        (self.directe - self.par_parties).abs() <= tolerance
    }
}

/* ------------------------ Atelier ------------------------ */

/// Démontre les règles de dérivation en un point avec un pas.
pub struct AtelierRegles {
    point: f64,
    pas: f64,
}

impl AtelierRegles {
    /// Attend exactement 2 paramètres : point d'évaluation puis pas.
    pub fn new(params: &[f64]) -> Result<Self, ErreurCalc> {
        super::lecture::exiger_compte(params, 2)?;
        Ok(Self {
            point: params[0],
            pas: params[1],
        })
    }

    pub fn demontrer(&self, regle: Regle) -> Result<Demonstration, ErreurCalc> {
        match regle {
            Regle::Somme => self.somme(),
            Regle::Difference => self.difference(),
            Regle::Produit => self.produit(),
            Regle::Quotient(v) => self.quotient(v),
            Regle::Chaine => self.chaine(),
        }
    }

    /// f'(x) et g'(x) au point/pas stockés, par différence avant.
    fn derivees_des_parties(&self) -> Result<(f64, f64), ErreurCalc> {
        let df = difference_avant(f_echantillon, self.point, self.pas)?;
        let dg = difference_avant(g_echantillon, self.point, self.pas)?;
        Ok((df, dg))
    }

    fn somme(&self) -> Result<Demonstration, ErreurCalc> {
        let k = |x: f64| f_echantillon(x) + g_echantillon(x);
        let directe = difference_avant(k, self.point, self.pas)?;
        let (df, dg) = self.derivees_des_parties()?;

        Ok(Demonstration {
            nom: "règle d'addition",
            enonce: ENONCE_SOMME,
            directe,
            par_parties: df + dg,
        })
    }

    fn difference(&self) -> Result<Demonstration, ErreurCalc> {
        let k = |x: f64| f_echantillon(x) - g_echantillon(x);
        let directe = difference_avant(k, self.point, self.pas)?;
        let (df, dg) = self.derivees_des_parties()?;

        Ok(Demonstration {
            nom: "règle de soustraction",
            enonce: ENONCE_DIFFERENCE,
            directe,
            par_parties: df - dg,
        })
    }

    fn produit(&self) -> Result<Demonstration, ErreurCalc> {
        let k = |x: f64| f_echantillon(x) * g_echantillon(x);
        let directe = difference_avant(k, self.point, self.pas)?;
        let (df, dg) = self.derivees_des_parties()?;

        let fx = f_echantillon(self.point);
        let gx = g_echantillon(self.point);

        Ok(Demonstration {
            nom: "règle du produit",
            enonce: ENONCE_PRODUIT,
            directe,
            par_parties: df * gx + fx * dg,
        })
    }

    fn quotient(&self, variante: VarianteQuotient) -> Result<Demonstration, ErreurCalc> {
        let k = |x: f64| f_echantillon(x) / g_echantillon(x);
        let directe = difference_avant(k, self.point, self.pas)?;
        let (df, dg) = self.derivees_des_parties()?;

        let fx = f_echantillon(self.point);
        let gx = g_echantillon(self.point);
        let numerateur = df * gx - fx * dg;

        let (nom, enonce, par_parties) = match variante {
            VarianteQuotient::DenominateurGCarre => (
                "règle du quotient (dénominateur g(x)²)",
                ENONCE_QUOTIENT_G_CARRE,
                numerateur / (gx * gx),
            ),
            VarianteQuotient::DenominateurDeriveeGCarree => (
                "règle du quotient (dénominateur g'(x)²)",
                ENONCE_QUOTIENT_DERIVEE_G_CARREE,
                numerateur / (dg * dg),
            ),
        };

        Ok(Demonstration {
            nom,
            enonce,
            directe,
            par_parties,
        })
    }

    fn chaine(&self) -> Result<Demonstration, ErreurCalc> {
        let k = |x: f64| f_echantillon(g_echantillon(x));
        let directe = difference_avant(k, self.point, self.pas)?;

        let dg = difference_avant(g_echantillon, self.point, self.pas)?;
        let gx = g_echantillon(self.point);
        let d_f_en_g = difference_avant(f_echantillon, gx, self.pas)?;

        Ok(Demonstration {
            nom: "règle de la chaîne",
            enonce: ENONCE_CHAINE,
            directe,
            par_parties: dg * d_f_en_g,
        })
    }
}

/* ------------------------ Contrat Calculateur ------------------------ */

const EXPLICATION_REGLES: &str = r"
===================
Règles de dérivation
===================

Plutôt que de dériver k(x) d'un bloc, on peut la dériver en parties
quand k se construit à partir de fonctions plus simples. Ici :

    f(x) = x² + 7
    g(x) = x³ + 2

On vérifie la règle numériquement : la dérivée de k calculée
directement (différence avant sur k) doit concorder avec la dérivée
calculée en parties, comme à droite du signe = de la règle.
";

/// Une démonstration de règle présentée sous le contrat commun.
/// Pour le quotient, la fiche montre les deux variantes côte à côte.
pub struct DemonstrationRegle {
    atelier: AtelierRegles,
    regle: Regle,
}

impl DemonstrationRegle {
    pub fn new(params: &[f64], regle: Regle) -> Result<Self, ErreurCalc> {
        Ok(Self {
            atelier: AtelierRegles::new(params)?,
            regle,
        })
    }

    fn rendu_demarche(&self) -> Result<String, ErreurCalc> {
        let d = self.atelier.demontrer(self.regle)?;

        // Tolérance d'affichage relative : l'erreur de la différence avant
        // grandit avec la dérivée elle-même.
        let tolerance = 1e-3 * d.directe.abs().max(1.0);
        let verdict = if d.concorde(tolerance) { "oui" } else { "non" };

        let mut s = format!(
            "Voici la {} :\n{}\nDérivée de k(x) calculée directement : {}\nDérivée de k(x) calculée en parties : {}\nLes deux concordent (tolérance {}) : {}",
            d.nom,
            d.enonce,
            format_nombre(d.directe),
            format_nombre(d.par_parties),
            format_nombre(tolerance),
            verdict,
        );

        // Quotient : montrer aussi l'autre dénominateur, sans rien corriger.
        if let Regle::Quotient(v) = self.regle {
            let autre = match v {
                VarianteQuotient::DenominateurGCarre => {
                    VarianteQuotient::DenominateurDeriveeGCarree
                }
                VarianteQuotient::DenominateurDeriveeGCarree => {
                    VarianteQuotient::DenominateurGCarre
                }
            };
            let d2 = self.atelier.demontrer(Regle::Quotient(autre))?;
            s.push_str(&format!(
                "\n\nVariante ({}) : {}",
                d2.nom,
                format_nombre(d2.par_parties)
            ));
        }

        Ok(s)
    }
}

impl Calculateur for DemonstrationRegle {
    fn titre(&self) -> &'static str {
        match self.regle {
            Regle::Somme => "Règle d'addition",
            Regle::Difference => "Règle de soustraction",
            Regle::Produit => "Règle du produit",
            Regle::Quotient(_) => "Règle du quotient",
            Regle::Chaine => "Règle de la chaîne",
        }
    }

    fn explication(&self) -> String {
        EXPLICATION_REGLES.to_string()
    }

    fn formule(&self) -> String {
        let enonce = match self.regle {
            Regle::Somme => ENONCE_SOMME,
            Regle::Difference => ENONCE_DIFFERENCE,
            Regle::Produit => ENONCE_PRODUIT,
            Regle::Quotient(VarianteQuotient::DenominateurGCarre) => ENONCE_QUOTIENT_G_CARRE,
            Regle::Quotient(VarianteQuotient::DenominateurDeriveeGCarree) => {
                ENONCE_QUOTIENT_DERIVEE_G_CARREE
            }
            Regle::Chaine => ENONCE_CHAINE,
        };
        enonce.to_string()
    }

    fn demarche(&self) -> String {
        match self.rendu_demarche() {
            Ok(s) => s,
            Err(e) => format!("démarche indisponible : {e}"),
        }
    }

    /// La dérivée directe fait foi (c'est la vérité terrain de la règle).
    fn valeur(&self) -> Result<f64, ErreurCalc> {
        Ok(self.atelier.demontrer(self.regle)?.directe)
    }
}
