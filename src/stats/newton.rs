//! Square root by Newton–Raphson iteration.

/// Iteration stops once successive guesses differ by less than this, scaled
/// by the guess for roots above one.
pub const SQRT_TOLERANCE: f64 = 1e-15;

/// Upper bound on refinement steps; the last guess is returned when reached.
pub const SQRT_MAX_ITERATIONS: usize = 10_000;

/// Outcome of a Newton–Raphson square root computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SqrtResult {
    pub root: f64,
    /// Refinement steps performed.
    pub iterations: usize,
    /// `false` when the iteration cap was hit first.
    pub converged: bool,
}

/// Square root of `value`.
///
/// Zero returns exactly `0.0` without iterating. Negative input is outside
/// the domain and yields `NaN`.
pub fn sqrt(value: f64) -> f64 {
    newton_sqrt(value).root
}

/// Square root with iteration details.
///
/// Starts from `value / 2` and refines with `(g + value / g) / 2` until two
/// guesses differ by less than `SQRT_TOLERANCE * max(guess, 1)`.
pub fn newton_sqrt(value: f64) -> SqrtResult {
    if value == 0.0 {
        return SqrtResult {
            root: 0.0,
            iterations: 0,
            converged: true,
        };
    }
    if value < 0.0 || value.is_nan() {
        return SqrtResult {
            root: f64::NAN,
            iterations: 0,
            converged: false,
        };
    }

    let mut guess = value / 2.0;
    for step in 1..=SQRT_MAX_ITERATIONS {
        let next = (guess + value / guess) / 2.0;
        if (next - guess).abs() < SQRT_TOLERANCE * next.max(1.0) {
            return SqrtResult {
                root: next,
                iterations: step,
                converged: true,
            };
        }
        guess = next;
    }

    log::debug!(
        "sqrt({}) did not converge after {} iterations",
        value,
        SQRT_MAX_ITERATIONS
    );
    SqrtResult {
        root: guess,
        iterations: SQRT_MAX_ITERATIONS,
        converged: false,
    }
}
