// src/noyau/format.rs
//
// Affichage des nombres et des calculs.
//
// Rôle : transformer un f64 stocké (jamais arrondi) en texte lisible, avec
// un nombre de décimales réglable (config `affichage.decimales`).
//
// Contrats :
// - Arrondi à l’affichage seulement : le noyau garde le f64 brut.
// - `decimales` borné à DECIMALES_MAX.
// - Zéros finaux retirés, jamais de "-0", non fini -> "∞" / "-∞" / "NaN".

use super::calcul::Calculation;

/// Nombre max de décimales affichées (au-delà, f64 n’a plus rien à dire).
pub const DECIMALES_MAX: usize = 17;

/// Affichage d’un f64 : `decimales` chiffres max, zéros finaux retirés.
/// - 5.0 -> "5", 0.25 -> "0.25", 1/3 (4 déc.) -> "0.3333"
/// - non fini -> "∞", "-∞", "NaN"
/// - jamais de "-0"
pub fn format_number(x: f64, decimales: usize) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "∞".to_string() } else { "-∞".to_string() };
    }

    let d = decimales.min(DECIMALES_MAX);
    let mut s = format!("{x:.d$}");

    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }

    // -0.0001 arrondi à 2 décimales => "-0"
    if s == "-0" {
        s = "0".to_string();
    }
    s
}

/// "a op b = résultat" (ex. "10 ÷ 4 = 2.5").
pub fn format_calcul(c: &Calculation, decimales: usize) -> String {
    format!(
        "{} {} {} = {}",
        format_number(c.a(), decimales),
        c.kind().symbol(),
        format_number(c.b(), decimales),
        format_number(c.result(), decimales)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noyau::operation::OperationKind;
    use uuid::Uuid;

    #[test]
    fn entiers_sans_decimales() {
        assert_eq!(format_number(5.0, 6), "5");
        assert_eq!(format_number(-42.0, 6), "-42");
        assert_eq!(format_number(0.0, 6), "0");
    }

    #[test]
    fn zeros_finaux_retires() {
        assert_eq!(format_number(0.25, 6), "0.25");
        assert_eq!(format_number(15.8, 6), "15.8");
        assert_eq!(format_number(1.0 / 3.0, 4), "0.3333");
        assert_eq!(format_number(2.0 / 3.0, 2), "0.67");
    }

    #[test]
    fn moins_zero() {
        assert_eq!(format_number(-0.0, 3), "0");
        assert_eq!(format_number(-0.0001, 2), "0");
    }

    #[test]
    fn non_finis() {
        assert_eq!(format_number(f64::INFINITY, 3), "∞");
        assert_eq!(format_number(f64::NEG_INFINITY, 3), "-∞");
        assert_eq!(format_number(f64::NAN, 3), "NaN");
    }

    #[test]
    fn decimales_bornees() {
        assert_eq!(format_number(0.1, 500), format_number(0.1, DECIMALES_MAX));
    }

    #[test]
    fn ligne_calcul() {
        let c = Calculation::create(OperationKind::Division, Uuid::nil(), 10.0, 4.0).unwrap();
        assert_eq!(format_calcul(&c, 6), "10 ÷ 4 = 2.5");
    }
}
