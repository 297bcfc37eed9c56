//! Angle conversion and the float functions used by the formula pipeline.
//!
//! The trigonometric wrappers dispatch to the native `f64` methods with `std` and to `libm`
//! otherwise, so the rest of the crate never calls float intrinsics directly.

#![allow(clippy::many_single_char_names)]

#[cfg(not(feature = "std"))]
use libm;

/// Mathematical constants
pub const PI: f64 = core::f64::consts::PI;

/// Converts an angle from degrees to radians.
///
/// # Example
/// ```
/// # use solar_ephemeris::math::degrees_to_radians;
/// assert!((degrees_to_radians(180.0) - core::f64::consts::PI).abs() < 1e-12);
/// ```
#[inline]
#[must_use]
pub const fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Converts an angle from radians to degrees.
#[inline]
#[must_use]
pub const fn radians_to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Normalizes an angle in degrees to the range [0, 360).
///
/// Negative remainders (from negative input) are shifted into the positive range. A remainder
/// so close to zero that adding 360 rounds up to 360 maps to 0.
#[must_use]
pub fn normalize_degrees_0_to_360(degrees: f64) -> f64 {
    let normalized = degrees % 360.0;
    if normalized < 0.0 {
        let shifted = normalized + 360.0;
        if shifted >= 360.0 { 0.0 } else { shifted }
    } else {
        normalized
    }
}

/// Computes a polynomial using Horner's method.
///
/// Coefficients are ordered [a₀, a₁, a₂, ...] for a₀ + a₁x + a₂x² + ...
#[must_use]
pub fn polynomial(coeffs: &[f64], x: f64) -> f64 {
    let Some(&last) = coeffs.last() else {
        return 0.0;
    };

    let mut result = last;
    for &coeff in coeffs.iter().rev().skip(1) {
        result = mul_add(result, x, coeff);
    }
    result
}

/// Computes sin(x) using the appropriate function for the compilation target.
#[inline]
#[must_use]
pub fn sin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.sin();

    #[cfg(not(feature = "std"))]
    return libm::sin(x);
}

/// Computes cos(x) using the appropriate function for the compilation target.
#[inline]
#[must_use]
pub fn cos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.cos();

    #[cfg(not(feature = "std"))]
    return libm::cos(x);
}

/// Computes tan(x) using the appropriate function for the compilation target.
#[inline]
#[must_use]
pub fn tan(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.tan();

    #[cfg(not(feature = "std"))]
    return libm::tan(x);
}

/// Computes asin(x), clamping `x` into [-1, 1] first.
///
/// Products of sines can land a few ulps outside the arcsine domain; those are treated as ±1
/// instead of producing NaN. NaN input stays NaN.
#[inline]
#[must_use]
pub fn asin_clamped(x: f64) -> f64 {
    let x = x.clamp(-1.0, 1.0);

    #[cfg(feature = "std")]
    return x.asin();

    #[cfg(not(feature = "std"))]
    return libm::asin(x);
}

/// Computes acos(x) using the appropriate function for the compilation target.
#[inline]
#[must_use]
pub fn acos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.acos();

    #[cfg(not(feature = "std"))]
    return libm::acos(x);
}

/// Computes |x| using the appropriate function for the compilation target.
#[inline]
#[must_use]
pub fn abs(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.abs();

    #[cfg(not(feature = "std"))]
    return libm::fabs(x);
}

/// Computes floor(x) using the appropriate function for the compilation target.
#[inline]
#[must_use]
pub fn floor(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.floor();

    #[cfg(not(feature = "std"))]
    return libm::floor(x);
}

/// Rounds toward zero using the appropriate function for the compilation target.
#[inline]
#[must_use]
pub fn trunc(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.trunc();

    #[cfg(not(feature = "std"))]
    return libm::trunc(x);
}

/// Computes (x * a) + b with only one rounding error (fused multiply-add).
#[inline]
#[must_use]
pub fn mul_add(x: f64, a: f64, b: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.mul_add(a, b);

    #[cfg(not(feature = "std"))]
    return libm::fma(x, a, b);
}
