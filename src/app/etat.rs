//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l'état de la calculatrice (sélection, entrée, fiche,
//! erreur) et offrir des opérations simples (C/CLR/AC) sans logique
//! d'affichage.
//!
//! Contrats (version UI) :
//! - Aucune évaluation ici (pas de noyau, pas de lecture).
//! - Actions déterministes, sans effet de bord caché.

use crate::noyau::{Fiche, Selection};

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- choix + entrée utilisateur ---
    pub selection: Selection,
    pub entree: String,

    // --- sorties ---
    pub fiche: Fiche,      // dernière fiche calculée
    pub fiche_dispo: bool, // false si rien à afficher
    pub erreur: String,    // message d'erreur (si lecture/calcul échoue)

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l'entrée après un clic.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            selection: Selection::Triangle,
            entree: String::new(),
            fiche: Fiche::default(),
            fiche_dispo: false, // au démarrage : rien à lire
            erreur: String::new(),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions "boutons" (état seulement) ------------------------ */

    /// AC : remise à zéro totale (sélection, entrée, résultats).
    pub fn reset_total(&mut self) {
        self.selection = Selection::Triangle;
        self.entree.clear();
        self.clear_resultats();
        self.focus_entree = true;
    }

    /// C : effacer seulement l'entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer fiche + erreur (sans toucher à l'entrée).
    pub fn clear_resultats(&mut self) {
        self.fiche = Fiche::default();
        self.fiche_dispo = false;
        self.erreur.clear();
        self.focus_entree = true;
    }

    /// Changer de variante : la fiche précédente ne correspond plus.
    pub fn choisir(&mut self, selection: Selection) {
        if self.selection != selection {
            self.selection = selection;
            self.clear_resultats();
        }
        self.focus_entree = true;
    }

    /// Utilitaire : placer une erreur.
    ///
    /// Choix UX : on coupe la fiche (non fiable si le calcul échoue),
    /// on garde l'entrée pour correction.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.fiche = Fiche::default();
        self.fiche_dispo = false;
        self.focus_entree = true;
    }

    /// Utilitaire : déposer une fiche complète.
    pub fn set_fiche(&mut self, fiche: Fiche) {
        self.erreur.clear();
        self.fiche = fiche;
        self.fiche_dispo = true;
        self.focus_entree = true;
    }
}
