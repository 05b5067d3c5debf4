//! Composite trapezoidal-rule integration.

/// Subdivision count used by [`integrate`].
pub const DEFAULT_SUBDIVISIONS: usize = 1000;

/// Estimate the definite integral of `f` over `[start, end]` with `n`
/// subdivisions of the composite trapezoidal rule.
///
/// The two endpoint evaluations are half-weighted, the `n - 1` interior
/// evaluations at even spacing are full-weighted, and the sum is scaled by
/// the subinterval width `(end - start) / n`.
///
/// No input validation is performed: `n = 0` divides by zero and yields a
/// non-finite result, and non-finite values returned by `f` propagate into
/// the sum unmodified. Callers validate before invoking.
pub fn trapezoid<F>(f: F, start: f64, end: f64, n: usize) -> f64
where
    F: Fn(f64) -> f64,
{
    let dx = (end - start) / n as f64;
    let mut sum = 0.5 * (f(start) + f(end));
    for i in 1..n {
        sum += f(start + i as f64 * dx);
    }
    sum * dx
}

/// [`trapezoid`] with [`DEFAULT_SUBDIVISIONS`] subdivisions.
pub fn integrate<F>(f: F, start: f64, end: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    trapezoid(f, start, end, DEFAULT_SUBDIVISIONS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_integrates_to_area() {
        for n in [1, 2, 7, 1000] {
            let result = trapezoid(|_| 3.0, -2.0, 5.0, n);
            assert!((result - 21.0).abs() < 1e-9, "n = {n}: {result}");
        }
    }

    #[test]
    fn identity_over_unit_interval() {
        let result = integrate(|x| x, 0.0, 1.0);
        assert!((result - 0.5).abs() < 1e-3);
    }

    #[test]
    fn quadratic_converges() {
        let result = trapezoid(|x| x * x, 0.0, 3.0, 1000);
        assert!((result - 9.0).abs() < 1e-4);
    }

    #[test]
    fn reversed_bounds_negate() {
        let forward = trapezoid(|x| x.sin(), 0.0, 1.0, 100);
        let backward = trapezoid(|x| x.sin(), 1.0, 0.0, 100);
        assert!((forward + backward).abs() < 1e-12);
    }

    #[test]
    fn zero_subdivisions_is_non_finite() {
        let result = trapezoid(|x| x, 0.0, 1.0, 0);
        assert!(!result.is_finite());
    }
}
