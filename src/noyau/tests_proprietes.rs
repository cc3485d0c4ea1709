//! Tests de propriétés : lois arithmétiques + classification des erreurs.
//!
//! - RNG déterministe (seed fixe)
//! - opérandes variés : petits entiers, décimaux, grandes/petites magnitudes, négatifs
//! - budget temps global

use std::time::{Duration, Instant};

use super::erreur::{CalcError, Operand};
use super::eval::{evaluate, evaluate_tag};
use super::operation::OperationKind::{self, *};

const TOURS: usize = 2_000;

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
    fn unit(&mut self) -> f64 {
        self.next_u32() as f64 / u32::MAX as f64
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }

    /// Opérande fini, magnitude bornée pour rester loin de l’overflow.
    fn operande(&mut self) -> f64 {
        let v = match self.pick(5) {
            0 => self.pick(20) as f64,
            1 => self.unit() * 100.0,
            2 => self.unit() * 1e12,
            3 => self.unit() * 1e-9,
            _ => (self.pick(2000) as f64) / 8.0,
        };
        if self.coin() {
            -v
        } else {
            v
        }
    }

    fn non_nul(&mut self) -> f64 {
        loop {
            let v = self.operande();
            if v != 0.0 {
                return v;
            }
        }
    }
}

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

fn proche(x: f64, y: f64) -> bool {
    let echelle = x.abs().max(y.abs()).max(1.0);
    (x - y).abs() <= 1e-9 * echelle
}

fn ok(kind: OperationKind, a: f64, b: f64) -> f64 {
    evaluate(kind, a, b).unwrap_or_else(|e| panic!("evaluate({kind}, {a}, {b}) erreur: {e}"))
}

/* ------------------------ Lois ------------------------ */

#[test]
fn prop_addition_commutative() {
    let start = Instant::now();
    let mut rng = Rng::new(0xA11);
    for _ in 0..TOURS {
        budget(start, Duration::from_secs(5));
        let (a, b) = (rng.operande(), rng.operande());
        assert_eq!(ok(Addition, a, b), a + b);
        assert_eq!(ok(Addition, a, b), ok(Addition, b, a), "a={a} b={b}");
    }
}

#[test]
fn prop_soustraction_antisymetrique() {
    let start = Instant::now();
    let mut rng = Rng::new(0x5B);
    for _ in 0..TOURS {
        budget(start, Duration::from_secs(5));
        let (a, b) = (rng.operande(), rng.operande());
        assert_eq!(ok(Subtraction, a, b), a - b);
        assert_eq!(ok(Subtraction, a, b), -ok(Subtraction, b, a), "a={a} b={b}");
    }
}

#[test]
fn prop_multiplication_commutative() {
    let start = Instant::now();
    let mut rng = Rng::new(0x707);
    for _ in 0..TOURS {
        budget(start, Duration::from_secs(5));
        let (a, b) = (rng.operande(), rng.operande());
        assert_eq!(ok(Multiplication, a, b), a * b);
        assert_eq!(ok(Multiplication, a, b), ok(Multiplication, b, a), "a={a} b={b}");
    }
}

#[test]
fn prop_division_aller_retour() {
    let start = Instant::now();
    let mut rng = Rng::new(0xD1F);
    for _ in 0..TOURS {
        budget(start, Duration::from_secs(5));
        let a = rng.operande();
        let b = rng.non_nul();
        let q = ok(Division, a, b);
        assert_eq!(q, a / b);

        // (a/b)*b ≈ a
        let retour = ok(Multiplication, q, b);
        assert!(proche(retour, a), "a={a} b={b} retour={retour}");

        // (a/b)*b/b ≈ a/b : rediviser retombe sur le quotient
        let requotient = ok(Division, q * b, b);
        assert!(proche(requotient, q), "a={a} b={b} requotient={requotient}");
    }
}

/* ------------------------ Erreurs ------------------------ */

#[test]
fn prop_division_par_zero() {
    let mut rng = Rng::new(0);
    for _ in 0..TOURS {
        let a = rng.operande();
        assert_eq!(evaluate(Division, a, 0.0), Err(CalcError::DivisionByZero), "a={a}");
    }
}

#[test]
fn prop_operande_invalide_pour_tout_type() {
    for kind in OperationKind::ALL {
        let e = evaluate(kind, f64::NAN, 1.0).unwrap_err();
        assert!(
            matches!(e, CalcError::InvalidOperand { operand: Operand::A, value } if value.is_nan()),
            "{kind}: {e:?}"
        );

        let e = evaluate(kind, 1.0, f64::INFINITY).unwrap_err();
        assert_eq!(e, CalcError::invalid_operand(Operand::B, f64::INFINITY), "{kind}");
    }
}

#[test]
fn prop_etiquette_non_enregistree() {
    for tag in ["Modulus", "Power", "sqrt", "addd", "%", "   "] {
        let e = evaluate_tag(tag, 1.0, 1.0).unwrap_err();
        assert!(matches!(e, CalcError::UnknownOperationType { .. }), "{tag:?}: {e:?}");
    }
}

#[test]
fn prop_determinisme() {
    let mut rng = Rng::new(42);
    for _ in 0..TOURS {
        let kind = OperationKind::ALL[rng.pick(4) as usize];
        let (a, b) = (rng.operande(), rng.non_nul());
        assert_eq!(evaluate(kind, a, b), evaluate(kind, a, b));
    }
}
