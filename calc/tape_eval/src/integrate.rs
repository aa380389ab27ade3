//! Composite trapezoidal integration.
//!
//! `[from, to]` is cut into `segments` equal sub-intervals. Each one is
//! evaluated at both of its edges and contributes `(f(l) + f(r)) * step / 2`.
//! The right edge of a sub-interval is evaluated again as the left edge of
//! the next, so a run costs exactly `2 * segments` evaluations.

use tape_ir::Tape;

use crate::errors::{invalid_range, EvalError};
use crate::evaluator::Evaluator;

impl Evaluator<'_> {
    /// Integrate the tape over `[from, to]` with the trapezoidal rule.
    ///
    /// Fails with `InvalidRange` when `from > to`, when either bound is NaN,
    /// or when `segments` is zero. Equal bounds give zero for any tape that
    /// evaluates to a finite value. The first evaluation failure aborts the
    /// run and is returned tagged with the input that failed.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn integrate(&mut self, from: f64, to: f64, segments: usize) -> Result<f64, EvalError> {
        if from.is_nan() || to.is_nan() || from > to || segments == 0 {
            return Err(invalid_range(from, to, segments));
        }

        #[expect(
            clippy::cast_precision_loss,
            reason = "segment counts past 2^53 are not a meaningful request"
        )]
        let step = (to - from) / segments as f64;

        let mut sum = 0.0;
        for i in 0..segments {
            #[expect(
                clippy::cast_precision_loss,
                reason = "bounded by segments, see above"
            )]
            let (left, right) = (from + i as f64 * step, from + (i + 1) as f64 * step);
            let f_left = self.evaluate_at(left)?;
            let f_right = self.evaluate_at(right)?;
            sum += (f_left + f_right) * step / 2.0;
        }

        tracing::debug!(sum, "integration finished");
        Ok(sum)
    }
}

/// Integrate `tape` over `[from, to]` in `segments` trapezoids.
pub fn integrate(tape: &Tape, from: f64, to: f64, segments: usize) -> Result<f64, EvalError> {
    Evaluator::new(tape).integrate(from, to, segments)
}
