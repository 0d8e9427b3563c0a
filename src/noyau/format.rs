// src/noyau/format.rs

/// Chiffres affichés après la virgule (zéros de fin retirés ensuite).
const DECIMALES: usize = 6;

/* ------------------------ Nombre "joli" ------------------------ */

/// Rendu décimal compact d'un f64 :
/// - précision fixe puis zéros de fin retirés ("4.000000" => "4")
/// - "-0" normalisé en "0"
pub fn format_nombre(x: f64) -> String {
    if !x.is_finite() {
        // Ne devrait pas arriver (lecture filtre en amont), mais on reste lisible.
        return format!("{x}");
    }

    let mut s = format!("{:.*}", DECIMALES, x);

    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }

    if s == "-0" {
        s = "0".to_string();
    }

    s
}

/* ------------------------ Listes (démarche) ------------------------ */

/// Joint des mesures pour la démarche : "1.7 + 5.3 + 3".
pub fn format_somme(valeurs: &[f64]) -> String {
    if valeurs.is_empty() {
        return "0".to_string();
    }
    valeurs
        .iter()
        .map(|v| format_nombre(*v))
        .collect::<Vec<_>>()
        .join(" + ")
}
