//! Tests robustesse : marteler la lecture et le pipeline sans brûler la machine.
//!
//! - RNG déterministe (seed fixe)
//! - budget temps global
//! - on accepte les erreurs attendues (taxonomie ErreurCalc au complet) ;
//!   ce qu'on traque, c'est le panic et la valeur non finie qui s'échappe.

use std::time::{Duration, Instant};

use super::calculer_fiche;
use super::erreur::ErreurCalc;
use super::lecture::lire_parametres;
use super::Selection;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d'entrées (bornée) ------------------------ */

fn gen_morceau(rng: &mut Rng) -> String {
    match rng.pick(10) {
        0 => "1.7".to_string(),
        1 => "5.3".to_string(),
        2 => "0".to_string(),
        3 => "-2.5".to_string(),
        4 => format!("{}", rng.pick(1000)),
        5 => "abc".to_string(),
        6 => "inf".to_string(),
        7 => "NaN".to_string(),
        8 => String::new(),
        _ => "1e3".to_string(),
    }
}

fn gen_entree(rng: &mut Rng) -> String {
    let n = rng.pick(6) as usize;
    let morceaux: Vec<String> = (0..n).map(|_| gen_morceau(rng)).collect();
    let sep = if rng.coin() { ", " } else { "," };
    morceaux.join(sep)
}

fn gen_code(rng: &mut Rng) -> String {
    match rng.pick(8) {
        0 => "t".to_string(),
        1 => "r".to_string(),
        2 => "po".to_string(),
        3 => "d".to_string(),
        4 => "rq".to_string(),
        5 => "i".to_string(),
        6 => "zz".to_string(), // volontairement inconnu
        _ => String::new(),    // vide : inconnu aussi
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn rob_lecture_ne_panique_jamais() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut vus_ok = 0usize;
    let mut vus_err = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let entree = gen_entree(&mut rng);
        match lire_parametres(&entree) {
            Ok(valeurs) => {
                // Invariant clé : tout ce qui sort de la lecture est fini.
                assert!(
                    valeurs.iter().all(|v| v.is_finite()),
                    "valeur non finie échappée : {entree:?}"
                );
                vus_ok += 1;
            }
            Err(ErreurCalc::ParametreIllisible(_) | ErreurCalc::ParametreNonFini(_)) => {
                vus_err += 1;
            }
            Err(autre) => panic!("erreur hors lecture : {autre}"),
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne balaye rien.
    assert!(vus_ok > 10, "trop peu de succès: {vus_ok}");
    assert!(vus_err > 10, "trop peu d'erreurs: {vus_err}");
}

#[test]
fn rob_pipeline_erreurs_typees_seulement() {
    let t0 = Instant::now();
    let max = Duration::from_millis(400);

    let mut rng = Rng::new(0xBADC0DE_u64);

    let mut vus_ok = 0usize;
    let mut vus_err = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let code = gen_code(&mut rng);
        let entree = gen_entree(&mut rng);

        match calculer_fiche(&code, &entree) {
            Ok(fiche) => {
                // Une fiche complète porte toujours un résultat affichable.
                assert!(!fiche.resultat.is_empty());
                assert!(!fiche.titre.is_empty());
                vus_ok += 1;
            }
            Err(_) => {
                // Toute la taxonomie est attendue ici ; le panic ne l'est pas.
                vus_err += 1;
            }
        }
    }

    assert!(vus_ok > 5, "trop peu de succès: {vus_ok}");
    assert!(vus_err > 5, "trop peu d'erreurs: {vus_err}");
}

#[test]
fn rob_determinisme_du_pipeline() {
    // Même seed => mêmes entrées => mêmes sorties.
    let tirage = |seed: u64| {
        let mut rng = Rng::new(seed);
        let mut sorties = Vec::new();
        for _ in 0..60 {
            let code = gen_code(&mut rng);
            let entree = gen_entree(&mut rng);
            sorties.push(match calculer_fiche(&code, &entree) {
                Ok(fiche) => format!("ok:{}", fiche.resultat),
                Err(e) => format!("err:{e}"),
            });
        }
        sorties
    };

    assert_eq!(tirage(0xFEED_u64), tirage(0xFEED_u64));
}

#[test]
fn rob_polygone_grand_mais_borne() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    // 5000 côtés de 0.5 : somme = 2500, temps négligeable.
    let entree = vec!["0.5"; 5000].join(",");
    budget(t0, max);

    let fiche = calculer_fiche("po", &entree).unwrap_or_else(|e| panic!("err: {e}"));
    assert_eq!(fiche.resultat, "2500");

    budget(t0, max);

    for (_, selections) in Selection::groupes() {
        for s in selections.iter().copied() {
            // Chaque sélection doit répondre (fiche ou erreur typée), jamais paniquer.
            let _ = calculer_fiche(s.code(), &entree);
        }
    }
}
