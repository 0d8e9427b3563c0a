//! Tests pédagogiques (campagne) : identités des périmètres + convergence
//! des dérivées + règles de dérivation sur plusieurs points.
//!
//! Notes (alignées avec l'état du noyau) :
//! - Les longueurs ne sont PAS validées : négatif/zéro passent et donnent
//!   l'arithmétique brute. La campagne le vérifie au lieu de l'interdire.
//! - La différence avant porte une erreur d'ordre pas/2 × f'' : les
//!   tolérances des règles en tiennent compte (voir la règle de la chaîne).

use super::derivee::{difference_avant, f_echantillon};
use super::perimetre::{Cercle, PolygoneFerme, QuadrilatereRegulier, Rectangle, Triangle};
use super::regles::{AtelierRegles, Regle, VarianteQuotient};

fn assert_proche(a: f64, b: f64, tol: f64, contexte: &str) {
    assert!(
        (a - b).abs() <= tol,
        "{contexte} : {a} vs {b} (tolérance {tol})"
    );
}

/* ------------------------ Identités des périmètres ------------------------ */

#[test]
fn ped_carre_losange_4_fois_cote() {
    for cote in [0.0, 0.5, 1.0, 2.5, 12.25, 100.0] {
        let c = QuadrilatereRegulier::carre(&[cote]).unwrap();
        let l = QuadrilatereRegulier::losange(&[cote]).unwrap();
        assert_eq!(c.perimetre(), 4.0 * cote);
        assert_eq!(c.perimetre(), l.perimetre());
    }
}

#[test]
fn ped_rectangle_2l_plus_2h() {
    for (l, h) in [(0.0, 0.0), (1.7, 5.3), (10.0, 0.5)] {
        let r = Rectangle::new(&[l, h]).unwrap();
        assert_proche(r.perimetre(), 2.0 * l + 2.0 * h, 1e-12, "rectangle");
    }
}

#[test]
fn ped_triangle_somme_triples() {
    for (a, b, c) in [(1.0, 1.0, 1.0), (1.7, 5.3, 3.0), (-1.0, 2.0, 0.0)] {
        let t = Triangle::new(&[a, b, c]).unwrap();
        assert_proche(t.perimetre(), a + b + c, 1e-12, "triangle");
    }
}

#[test]
fn ped_polygone_somme_quelconque() {
    assert_eq!(PolygoneFerme::new(&[]).perimetre(), 0.0);

    let distances = [1.7, 5.3, 2.3, 65.2, 23.5];
    let p = PolygoneFerme::new(&distances);
    assert_proche(
        p.perimetre(),
        distances.iter().sum::<f64>(),
        1e-12,
        "polygone",
    );
}

#[test]
fn ped_cercle_limite_des_polygones() {
    // Le périmètre d'un polygone régulier inscrit (n côtés, rayon r) vaut
    // 2nr·sin(π/n) et doit tendre vers 2πr : on vérifie la limite que
    // l'explication raconte.
    let rayon = 3.0;
    let cercle = Cercle::new(&[rayon]).unwrap().perimetre();

    let poly = |n: u32| {
        let angle = std::f64::consts::PI / n as f64;
        let cote = 2.0 * rayon * angle.sin();
        PolygoneFerme::new(&vec![cote; n as usize]).perimetre()
    };

    let e96 = (poly(96) - cercle).abs();
    let e384 = (poly(384) - cercle).abs();
    assert!(e384 < e96, "l'approximation doit s'améliorer avec n");
    assert!(e384 < 1e-3, "polygone à 384 côtés : écart {e384}");
}

/* ------------------------ Convergence de la différence avant ------------------------ */

#[test]
fn ped_difference_avant_vers_2x() {
    // f'(x) = 2x ; l'erreur de la différence avant vaut exactement pas
    // (car f'' = 2) : on la vérifie à plusieurs points.
    for x in [-2.0, 0.0, 1.5, 3.0] {
        for pas in [0.01, 0.001, 0.0001] {
            let d = difference_avant(f_echantillon, x, pas).unwrap();
            assert_proche(d, 2.0 * x + pas, 1e-6, "différence avant");
        }
    }
}

/* ------------------------ Règles sur plusieurs points ------------------------ */

#[test]
fn ped_regles_lineaires_partout() {
    // Addition et soustraction : la différence avant est linéaire, la
    // concordance tient à l'arrondi près, quel que soit le point.
    for x in [-1.0, 0.5, 2.0, 4.0] {
        let a = AtelierRegles::new(&[x, 1e-4]).unwrap();
        for r in [Regle::Somme, Regle::Difference] {
            let d = a.demontrer(r).unwrap();
            assert!(d.concorde(1e-3), "{:?} en x={x} : {} vs {}", r, d.directe, d.par_parties);
        }
    }
}

#[test]
fn ped_regle_produit_plusieurs_points() {
    for x in [0.5, 1.0, 2.0] {
        let a = AtelierRegles::new(&[x, 1e-4]).unwrap();
        let d = a.demontrer(Regle::Produit).unwrap();
        assert!(
            d.concorde(5e-2),
            "produit en x={x} : {} vs {}",
            d.directe,
            d.par_parties
        );
    }
}

#[test]
fn ped_regle_chaine_plusieurs_points() {
    // Tolérance relative : la composée grandit vite (k' = 6x²(x³+2)),
    // l'écart absolu des termes d'ordre pas suit.
    for x in [0.5, 1.0, 2.0] {
        let a = AtelierRegles::new(&[x, 1e-4]).unwrap();
        let d = a.demontrer(Regle::Chaine).unwrap();
        let echelle = d.directe.abs().max(1.0);
        assert!(
            (d.directe - d.par_parties).abs() <= 1e-3 * echelle,
            "chaîne en x={x} : {} vs {}",
            d.directe,
            d.par_parties
        );
    }
}

#[test]
fn ped_quotient_les_deux_variantes_nommees() {
    // En x = 2 : l'identité classique (dénominateur g(x)²) suit la dérivée
    // directe ; la variante au dénominateur g'(x)² s'en écarte nettement.
    let a = AtelierRegles::new(&[2.0, 1e-4]).unwrap();

    let classique = a
        .demontrer(Regle::Quotient(VarianteQuotient::DenominateurGCarre))
        .unwrap();
    assert!(classique.concorde(1e-2));

    let variante = a
        .demontrer(Regle::Quotient(VarianteQuotient::DenominateurDeriveeGCarree))
        .unwrap();
    assert!(!variante.concorde(0.1));

    // Même numérateur, dénominateurs différents : les deux variantes ne
    // racontent pas la même chose.
    assert!((classique.par_parties - variante.par_parties).abs() > 0.1);
}
