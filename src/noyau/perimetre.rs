// src/noyau/perimetre.rs
//
// Famille des périmètres.
// - Une variante par figure : triangle, carré, losange, rectangle,
//   parallélogramme, polygone fermé, cercle.
// - Carré et losange partagent LE MÊME calcul (4 × côté) : une seule
//   structure, paramétrée par son jeu de textes. Seule l'explication change.
// - Politique d'erreur : le compte de paramètres est vérifié à la
//   construction ; les valeurs elles-mêmes sont calculées littéralement
//   (négatif ou nul accepté, résultat arithmétique brut).

use std::f64::consts::PI;

use super::calculateur::Calculateur;
use super::erreur::ErreurCalc;
use super::format::{format_nombre, format_somme};
use super::lecture::exiger_compte;

/* ------------------------ Triangle ------------------------ */

const EXPLICATION_TRIANGLE: &str = r"
======================
Périmètre du triangle
======================

       A
      / \
     /   \
    /     \
   B-------C

Le périmètre du triangle est |AB| + |AC| + |BC| :
on additionne simplement les trois côtés.
";

#[derive(Debug)]
pub struct Triangle {
    cote1: f64,
    cote2: f64,
    cote3: f64,
}

impl Triangle {
    /// Attend exactement 3 côtés (dans l'ordre donné).
    pub fn new(params: &[f64]) -> Result<Self, ErreurCalc> {
        exiger_compte(params, 3)?;
        Ok(Self {
            cote1: params[0],
            cote2: params[1],
            cote3: params[2],
        })
    }

    pub fn perimetre(&self) -> f64 {
        self.cote1 + self.cote2 + self.cote3
    }
}

impl Calculateur for Triangle {
    fn titre(&self) -> &'static str {
        "Périmètre du triangle"
    }

    fn explication(&self) -> String {
        EXPLICATION_TRIANGLE.to_string()
    }

    fn formule(&self) -> String {
        "|AB| + |BC| + |AC| = P_triangle".to_string()
    }

    fn demarche(&self) -> String {
        format!(
            "{} = {}",
            format_somme(&[self.cote1, self.cote2, self.cote3]),
            format_nombre(self.perimetre())
        )
    }

    fn valeur(&self) -> Result<f64, ErreurCalc> {
        Ok(self.perimetre())
    }
}

/* ------------------------ Carré / losange (calcul partagé) ------------------------ */

/// Jeu de textes d'un quadrilatère régulier : le calcul est identique,
/// seule la présentation distingue le carré du losange.
pub struct TextesQuadrilatere {
    pub titre: &'static str,
    pub explication: &'static str,
}

pub static TEXTES_CARRE: TextesQuadrilatere = TextesQuadrilatere {
    titre: "Périmètre du carré",
    explication: r"
======================
Périmètre du carré
======================

   A-------D
   |       |
   |       | côté
   |       |
   B-------C
      côté

Le périmètre du carré est |AB| + |BC| + |CD| + |DA|,
ce qui s'écrit aussi 4 × côté.
",
};

pub static TEXTES_LOSANGE: TextesQuadrilatere = TextesQuadrilatere {
    titre: "Périmètre du losange",
    explication: r"
======================
Périmètre du losange
======================

      A
      /\
     /  \ côté
   B/    \D
    \    /
     \  / côté
      \/
      C

Le périmètre du losange est |AB| + |BC| + |CD| + |DA|,
ce qui s'écrit aussi 4 × côté : quatre côtés égaux,
comme le carré, seuls les angles diffèrent.
",
};

/// Quadrilatère à quatre côtés égaux : un seul calcul, deux jeux de textes.
pub struct QuadrilatereRegulier {
    cote: f64,
    textes: &'static TextesQuadrilatere,
}

impl QuadrilatereRegulier {
    /// Attend exactement 1 côté.
    fn new(params: &[f64], textes: &'static TextesQuadrilatere) -> Result<Self, ErreurCalc> {
        exiger_compte(params, 1)?;
        Ok(Self {
            cote: params[0],
            textes,
        })
    }

    pub fn carre(params: &[f64]) -> Result<Self, ErreurCalc> {
        Self::new(params, &TEXTES_CARRE)
    }

    pub fn losange(params: &[f64]) -> Result<Self, ErreurCalc> {
        Self::new(params, &TEXTES_LOSANGE)
    }

    pub fn perimetre(&self) -> f64 {
        4.0 * self.cote
    }
}

impl Calculateur for QuadrilatereRegulier {
    fn titre(&self) -> &'static str {
        self.textes.titre
    }

    fn explication(&self) -> String {
        self.textes.explication.to_string()
    }

    fn formule(&self) -> String {
        "4 × côté".to_string()
    }

    fn demarche(&self) -> String {
        format!(
            "4 × {} = {}",
            format_nombre(self.cote),
            format_nombre(self.perimetre())
        )
    }

    fn valeur(&self) -> Result<f64, ErreurCalc> {
        Ok(self.perimetre())
    }
}

/* ------------------------ Rectangle ------------------------ */

const EXPLICATION_RECTANGLE: &str = r"
======================
Périmètre du rectangle
======================

   A------------D
   |            |
   |            | hauteur
   |            |
   B------------C
      largeur

Le périmètre du rectangle est |AB| + |BC| + |CD| + |DA|,
ce qui s'écrit aussi 2 × largeur + 2 × hauteur.
";

pub struct Rectangle {
    largeur: f64,
    hauteur: f64,
}

impl Rectangle {
    /// Attend exactement 2 paramètres : largeur puis hauteur.
    pub fn new(params: &[f64]) -> Result<Self, ErreurCalc> {
        exiger_compte(params, 2)?;
        Ok(Self {
            largeur: params[0],
            hauteur: params[1],
        })
    }

    pub fn perimetre(&self) -> f64 {
        2.0 * self.largeur + 2.0 * self.hauteur
    }
}

impl Calculateur for Rectangle {
    fn titre(&self) -> &'static str {
        "Périmètre du rectangle"
    }

    fn explication(&self) -> String {
        EXPLICATION_RECTANGLE.to_string()
    }

    fn formule(&self) -> String {
        "2 × largeur + 2 × hauteur".to_string()
    }

    fn demarche(&self) -> String {
        format!(
            "2 × {} + 2 × {} = {}",
            format_nombre(self.largeur),
            format_nombre(self.hauteur),
            format_nombre(self.perimetre())
        )
    }

    fn valeur(&self) -> Result<f64, ErreurCalc> {
        Ok(self.perimetre())
    }
}

/* ------------------------ Parallélogramme ------------------------ */

const EXPLICATION_PARALLELOGRAMME: &str = r"
===========================
Périmètre du parallélogramme
===========================

        côté h
   A ______________ D
    /             /
   /             / côté v
  /             /
 B/_____________/ C

Le périmètre du parallélogramme est |AB| + |BC| + |CD| + |DA|,
ce qui s'écrit aussi 2 × côté horizontal + 2 × côté vertical.
";

pub struct Parallelogramme {
    cote_horizontal: f64,
    cote_vertical: f64,
}

impl Parallelogramme {
    /// Attend exactement 2 paramètres : côté horizontal puis côté vertical.
    pub fn new(params: &[f64]) -> Result<Self, ErreurCalc> {
        exiger_compte(params, 2)?;
        Ok(Self {
            cote_horizontal: params[0],
            cote_vertical: params[1],
        })
    }

    pub fn perimetre(&self) -> f64 {
        2.0 * self.cote_horizontal + 2.0 * self.cote_vertical
    }
}

impl Calculateur for Parallelogramme {
    fn titre(&self) -> &'static str {
        "Périmètre du parallélogramme"
    }

    fn explication(&self) -> String {
        EXPLICATION_PARALLELOGRAMME.to_string()
    }

    fn formule(&self) -> String {
        "2 × côté h + 2 × côté v".to_string()
    }

    fn demarche(&self) -> String {
        format!(
            "2 × {} + 2 × {} = {}",
            format_nombre(self.cote_horizontal),
            format_nombre(self.cote_vertical),
            format_nombre(self.perimetre())
        )
    }

    fn valeur(&self) -> Result<f64, ErreurCalc> {
        Ok(self.perimetre())
    }
}

/* ------------------------ Polygone fermé ------------------------ */

const EXPLICATION_POLYGONE: &str = r"
=============================
Périmètre d'un polygone fermé
=============================

       J______________ I
       /              \
     A/                \ H
     |      ____       /
     |     /D  E\     /
     |____/      \___/
     B    C      F    G

Le périmètre d'un polygone fermé est la somme des distances
entre sommets consécutifs :

    somme des d_i, i = 1..k (k = nombre de côtés)

où d_i est la distance |x_i - x_(i+1)| entre deux sommets
consécutifs de la suite ordonnée A, B, C, ...
";

pub struct PolygoneFerme {
    distances: Vec<f64>,
}

impl PolygoneFerme {
    /// Accepte une suite ordonnée de distances, de longueur quelconque
    /// (y compris vide : le périmètre vaut alors 0).
    pub fn new(params: &[f64]) -> Self {
        Self {
            distances: params.to_vec(),
        }
    }

    pub fn perimetre(&self) -> f64 {
        self.distances.iter().sum()
    }
}

impl Calculateur for PolygoneFerme {
    fn titre(&self) -> &'static str {
        "Périmètre d'un polygone fermé"
    }

    fn explication(&self) -> String {
        EXPLICATION_POLYGONE.to_string()
    }

    fn formule(&self) -> String {
        "Σ d_i, i = 1..k (k = nombre de côtés)".to_string()
    }

    fn demarche(&self) -> String {
        format!(
            "{} = {}",
            format_somme(&self.distances),
            format_nombre(self.perimetre())
        )
    }

    fn valeur(&self) -> Result<f64, ErreurCalc> {
        Ok(self.perimetre())
    }
}

/* ------------------------ Cercle ------------------------ */

const EXPLICATION_CERCLE: &str = r"
====================
Périmètre du cercle
====================

Le périmètre du cercle s'approche par des polygones réguliers :
c'est la limite du périmètre d'un polygone régulier dont le
nombre de côtés tend vers l'infini. Cette limite vaut 2 × π × rayon.
";

pub struct Cercle {
    rayon: f64,
}

impl Cercle {
    /// Attend exactement 1 paramètre : le rayon.
    pub fn new(params: &[f64]) -> Result<Self, ErreurCalc> {
        exiger_compte(params, 1)?;
        Ok(Self { rayon: params[0] })
    }

    pub fn perimetre(&self) -> f64 {
        2.0 * PI * self.rayon
    }
}

impl Calculateur for Cercle {
    fn titre(&self) -> &'static str {
        "Périmètre du cercle"
    }

    fn explication(&self) -> String {
        EXPLICATION_CERCLE.to_string()
    }

    fn formule(&self) -> String {
        "2 × π × rayon".to_string()
    }

    fn demarche(&self) -> String {
        format!(
            "2 × π × {} = {}",
            format_nombre(self.rayon),
            format_nombre(self.perimetre())
        )
    }

    fn valeur(&self) -> Result<f64, ErreurCalc> {
        Ok(self.perimetre())
    }
}
