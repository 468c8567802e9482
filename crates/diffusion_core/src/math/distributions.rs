//! Normal distribution functions.
//!
//! This module provides:
//! - `norm_pdf` / `norm_cdf`: standard normal density and CDF
//! - `normal_pdf` / `normal_cdf`: location-scale versions for N(mean, std_dev²)
//!
//! All functions are generic over `T: Float` so they evaluate in `f32` or `f64`.
//! The location-scale versions assume `std_dev > 0`; callers own the
//! degenerate case.

use num_traits::Float;

/// Square root of 2.
const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Converts an `f64` literal into `T`.
#[inline]
fn lit<T: Float>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::nan)
}

/// Complementary error function approximation.
///
/// Abramowitz and Stegun formula 7.1.26, maximum absolute error 1.5e-7.
#[inline]
fn erfc_approx<T: Float>(x: T) -> T {
    let one = T::one();
    let abs_x = x.abs();

    let a1 = lit::<T>(0.254829592);
    let a2 = lit::<T>(-0.284496736);
    let a3 = lit::<T>(1.421413741);
    let a4 = lit::<T>(-1.453152027);
    let a5 = lit::<T>(1.061405429);
    let p = lit::<T>(0.3275911);

    let t = one / (one + p * abs_x);
    let poly = a1 + t * (a2 + t * (a3 + t * (a4 + t * a5)));
    let erfc_abs = t * poly * (-abs_x * abs_x).exp();

    // erfc(-x) = 2 - erfc(x)
    if x < T::zero() {
        lit::<T>(2.0) - erfc_abs
    } else {
        erfc_abs
    }
}

/// Standard normal cumulative distribution function.
///
/// Computes P(Z <= x) for Z ~ N(0, 1) through the complementary error function.
///
/// # Mathematical Definition
/// Φ(x) = (1/2) * erfc(-x / sqrt(2))
///
/// # Arguments
/// * `x` - Input value
///
/// # Returns
/// The probability P(Z <= x), in range [0, 1].
///
/// # Accuracy
/// Absolute error below 1e-7 for all finite x (Abramowitz and Stegun 7.1.26).
///
/// # Examples
/// ```
/// use diffusion_core::math::norm_cdf;
///
/// assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-7);
/// assert!(norm_cdf(3.0_f64) > 0.99);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    lit::<T>(0.5) * erfc_approx(-x / lit::<T>(SQRT_2))
}

/// Standard normal probability density function.
///
/// # Mathematical Definition
/// φ(x) = (1 / sqrt(2π)) * exp(-x² / 2)
///
/// # Arguments
/// * `x` - Input value
///
/// # Returns
/// The density φ(x), always non-negative; underflows to zero in the far tails.
///
/// # Examples
/// ```
/// use diffusion_core::math::norm_pdf;
///
/// assert!((norm_pdf(0.0_f64) - 0.3989422804).abs() < 1e-7);
/// ```
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    lit::<T>(FRAC_1_SQRT_2PI) * (-lit::<T>(0.5) * x * x).exp()
}

/// Density of N(mean, std_dev²) at `x`.
///
/// # Mathematical Definition
/// p(x) = φ((x - mean) / std_dev) / std_dev
///
/// # Arguments
/// * `x` - Point of evaluation
/// * `mean` - Location of the distribution
/// * `std_dev` - Scale of the distribution, must be positive
///
/// # Returns
/// The density at `x`. A zero `std_dev` gives NaN or infinity; callers
/// handle point masses before calling.
///
/// # Examples
/// ```
/// use diffusion_core::math::normal_pdf;
///
/// // Peak of N(100, 20²)
/// let peak = normal_pdf(100.0_f64, 100.0, 20.0);
/// assert!((peak - 0.3989422804 / 20.0).abs() < 1e-9);
/// ```
#[inline]
pub fn normal_pdf<T: Float>(x: T, mean: T, std_dev: T) -> T {
    norm_pdf((x - mean) / std_dev) / std_dev
}

/// Cumulative distribution function of N(mean, std_dev²) at `x`.
///
/// # Mathematical Definition
/// F(x) = Φ((x - mean) / std_dev)
///
/// # Arguments
/// * `x` - Point of evaluation
/// * `mean` - Location of the distribution
/// * `std_dev` - Scale of the distribution, must be positive
///
/// # Returns
/// The probability P(X <= x) for X ~ N(mean, std_dev²), in range [0, 1].
///
/// # Examples
/// ```
/// use diffusion_core::math::normal_cdf;
///
/// // Median and one standard deviation above the mean of N(100, 20²)
/// assert!((normal_cdf(100.0_f64, 100.0, 20.0) - 0.5).abs() < 1e-7);
/// assert!((normal_cdf(120.0_f64, 100.0, 20.0) - 0.8413447461).abs() < 1e-7);
/// ```
#[inline]
pub fn normal_cdf<T: Float>(x: T, mean: T, std_dev: T) -> T {
    norm_cdf((x - mean) / std_dev)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_norm_cdf_reference_values() {
        assert_relative_eq!(norm_cdf(0.0_f64), 0.5, epsilon = 1e-7);
        assert_relative_eq!(norm_cdf(1.0_f64), 0.8413447460685429, epsilon = 1e-7);
        assert_relative_eq!(norm_cdf(-1.0_f64), 0.15865525393145707, epsilon = 1e-7);
        assert_relative_eq!(norm_cdf(2.0_f64), 0.9772498680518208, epsilon = 1e-7);
    }

    #[test]
    fn test_norm_cdf_symmetry() {
        for x in [-3.0, -1.0, -0.5, 0.0, 0.5, 1.0, 3.0] {
            assert_relative_eq!(norm_cdf(x) + norm_cdf(-x), 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_norm_cdf_bounds() {
        for i in -100..=100 {
            let x = i as f64 * 0.1;
            let value = norm_cdf(x);
            assert!((0.0..=1.0).contains(&value), "CDF out of range at x = {}", x);
        }
    }

    #[test]
    fn test_norm_pdf_reference_values() {
        assert_relative_eq!(norm_pdf(0.0_f64), FRAC_1_SQRT_2PI, epsilon = 1e-12);
        assert_relative_eq!(norm_pdf(1.0_f64), 0.24197072451914337, epsilon = 1e-10);
        assert_relative_eq!(norm_pdf(2.0_f64), 0.05399096651318806, epsilon = 1e-10);
    }

    #[test]
    fn test_norm_pdf_f32_compatibility() {
        assert!((norm_pdf(0.0_f32) - 0.3989422).abs() < 1e-5);
    }

    #[test]
    fn test_normal_pdf_scales_and_shifts() {
        // N(110, 20²) at one standard deviation above the mean
        let value = normal_pdf(130.0_f64, 110.0, 20.0);
        assert_relative_eq!(value, norm_pdf(1.0_f64) / 20.0, epsilon = 1e-12);
    }

    #[test]
    fn test_normal_cdf_at_mean() {
        assert_relative_eq!(normal_cdf(42.0_f64, 42.0, 3.0), 0.5, epsilon = 1e-7);
        assert_relative_eq!(normal_cdf(45.0_f64, 42.0, 3.0), norm_cdf(1.0_f64), epsilon = 1e-15);
        assert_relative_eq!(normal_cdf(36.0_f64, 42.0, 3.0), 0.022750131948179195, epsilon = 1e-7);
    }

    #[test]
    fn test_cdf_pdf_relationship() {
        let h = 1e-4;
        for x in [-2.0, -1.0, 0.0, 1.0, 2.0] {
            let numerical_derivative = (norm_cdf(x + h) - norm_cdf(x - h)) / (2.0 * h);
            assert_relative_eq!(numerical_derivative, norm_pdf(x), epsilon = 1e-4);
        }
    }
}
