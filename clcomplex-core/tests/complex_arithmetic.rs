use clcomplex_core::{Complex, Tolerance};
use std::f64::consts::{FRAC_PI_2, PI, SQRT_2};

fn samples() -> Vec<Complex> {
    vec![
        Complex::new(0.0, 0.0),
        Complex::new(1.0, 2.0),
        Complex::new(-3.5, 0.25),
        Complex::new(1e-3, -1e3),
        Complex::new(-7.0, -11.0),
        Complex::new(123.456, 0.0),
        Complex::new(0.0, -0.5),
    ]
}

fn bits(z: Complex) -> (u64, u64) {
    (z.re.to_bits(), z.im.to_bits())
}

// ============================================================================
// Field operations
// ============================================================================

#[test]
fn add_zero_is_identity() {
    for z in samples() {
        assert_eq!(z.add(Complex::ZERO), z);
    }
}

#[test]
fn add_and_mul_commute() {
    for z in samples() {
        for w in samples() {
            assert_eq!(z.add(w), w.add(z));
            assert_eq!(z.mul(w), w.mul(z));
        }
    }
}

#[test]
fn sub_undoes_add() {
    let tol = Tolerance::new(1e-12, 1e-12);
    for z in samples() {
        for w in samples() {
            let back = z.add(w).sub(w);
            assert!(back.approx_eq(z, tol), "{:?} + {:?} - {:?} = {:?}", z, w, w, back);
        }
    }
}

#[test]
fn mul_by_one_is_identity() {
    for z in samples() {
        assert_eq!(z.mul(Complex::ONE), z);
    }
}

#[test]
fn add_propagates_nan_and_infinity() {
    let z = Complex::new(1.0, 2.0);
    assert!(z.add(Complex::NAN).is_nan());

    let inf = z.add(Complex::INFINITY);
    assert_eq!(inf.re, f64::INFINITY);
    assert_eq!(inf.im, f64::INFINITY);

    // inf - inf is invalid
    assert!(Complex::INFINITY.sub(Complex::INFINITY).is_nan());
}

#[test]
fn mul_overflows_without_guard() {
    let z = Complex::new(1e200, 0.0);
    let p = z.mul(z);
    assert_eq!(p.re, f64::INFINITY);
}

// ============================================================================
// Conjugate and reciprocal
// ============================================================================

#[test]
fn conjugate_negates_imaginary() {
    assert_eq!(Complex::new(3.0, 4.0).conjugate(), Complex::new(3.0, -4.0));
}

#[test]
fn conjugate_is_an_involution() {
    let mut values = samples();
    values.extend([
        Complex::NAN,
        Complex::INFINITY,
        Complex::new(-0.0, -0.0),
        Complex::new(f64::NEG_INFINITY, f64::NAN),
    ]);
    for z in values {
        assert_eq!(bits(z.conjugate().conjugate()), bits(z));
    }
}

#[test]
fn reciprocal_of_zero_is_bit_identical_infinity() {
    let r = Complex::ZERO.reciprocal();
    assert_eq!(r.re.to_bits(), f64::INFINITY.to_bits());
    assert_eq!(r.im.to_bits(), f64::INFINITY.to_bits());
    assert!(!r.is_nan());
}

#[test]
fn reciprocal_times_value_is_one() {
    let tol = Tolerance::new(1e-14, 1e-14);
    for z in samples().into_iter().filter(|z| *z != Complex::ZERO) {
        let one = z.reciprocal().mul(z);
        assert!(one.approx_eq(Complex::ONE, tol), "{:?} * 1/{:?} = {:?}", z, z, one);
    }
}

#[test]
fn reciprocal_known_value() {
    // 1 / (3 + 4i) = (3 - 4i) / 25
    let r = Complex::new(3.0, 4.0).reciprocal();
    assert_eq!(r, Complex::new(0.12, -0.16));
}

// ============================================================================
// Magnitude and phase
// ============================================================================

#[test]
fn magnitude_three_four_five() {
    assert_eq!(Complex::new(3.0, 4.0).magnitude(), 5.0);
}

#[test]
fn magnitude_does_not_overflow() {
    let m = Complex::new(1e300, 1e300).magnitude();
    assert!(m.is_finite());
    assert!(Tolerance::relative(1e-15).matches(m, 1e300 * SQRT_2));
}

#[test]
fn magnitude_does_not_underflow() {
    let m = Complex::new(3e-200, 4e-200).magnitude();
    assert!(Tolerance::relative(1e-15).matches(m, 5e-200));
}

#[test]
fn magnitude_of_infinite_component_is_infinite() {
    assert_eq!(Complex::new(f64::INFINITY, f64::NAN).magnitude(), f64::INFINITY);
    assert_eq!(Complex::new(1.0, f64::NEG_INFINITY).magnitude(), f64::INFINITY);
}

#[test]
fn phase_conventions() {
    assert_eq!(Complex::new(1.0, 0.0).phase(), 0.0);
    assert_eq!(Complex::new(0.0, 1.0).phase(), FRAC_PI_2);
    assert_eq!(Complex::new(-1.0, 0.0).phase(), PI);
    assert_eq!(Complex::new(0.0, -1.0).phase(), -FRAC_PI_2);
    assert_eq!(Complex::ZERO.phase(), 0.0);
}

#[test]
fn phase_stays_in_half_open_range() {
    for z in samples() {
        let p = z.phase();
        assert!(p > -PI && p <= PI, "phase({:?}) = {}", z, p);
    }
}

#[test]
fn phase_of_nan_is_nan() {
    assert!(Complex::NAN.phase().is_nan());
}
