//! Evenly spaced sampling for plots.
//!
//! A plot needs the tape's values across an interval and the range those
//! values span. Drawing them is somebody else's job.

use tape_ir::Tape;

use crate::errors::{invalid_range, EvalError};
use crate::evaluator::Evaluator;

/// `(x, y)` pairs produced by [`Evaluator::sample`], in increasing `x`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Samples {
    points: Vec<(f64, f64)>,
}

impl Samples {
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (f64, f64)> {
        self.points.iter()
    }

    /// Smallest and largest `y`, ignoring NaN. `None` if every `y` is NaN.
    pub fn range(&self) -> Option<(f64, f64)> {
        self.points
            .iter()
            .map(|&(_, y)| y)
            .filter(|y| !y.is_nan())
            .fold(None, |range, y| match range {
                None => Some((y, y)),
                Some((min, max)) => Some((f64::min(min, y), f64::max(max, y))),
            })
    }

    /// Position of `y` within [`range`](Self::range), as a fraction in `[0, 1]`.
    ///
    /// `None` for NaN (nothing to draw) or when there is no range. A flat
    /// range maps everything to `0`. The ends of the range map to exactly `0`
    /// and `1` even when infinite; a finite `y` against an infinite end sits
    /// at the finite end, or at `0.5` when both ends are infinite.
    #[expect(
        clippy::float_cmp,
        reason = "range ends are matched exactly, infinities included"
    )]
    pub fn normalized(&self, y: f64) -> Option<f64> {
        if y.is_nan() {
            return None;
        }
        let (min, max) = self.range()?;
        if min == max || y == min {
            return Some(0.0);
        }
        if y == max {
            return Some(1.0);
        }
        let fraction = (y - min) / (max - min);
        if fraction.is_nan() {
            return Some(match (min.is_infinite(), max.is_infinite()) {
                (true, true) => 0.5,
                (true, false) => 1.0,
                _ => 0.0,
            });
        }
        Some(fraction)
    }
}

impl<'a> IntoIterator for &'a Samples {
    type Item = &'a (f64, f64);
    type IntoIter = std::slice::Iter<'a, (f64, f64)>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Evaluator<'_> {
    /// Evaluate the tape at `points` evenly spaced inputs starting at `from`.
    ///
    /// Inputs are `from + i * (to - from) / points` for `i in 0..points`, so
    /// `to` itself is not sampled. An empty or reversed interval, a NaN
    /// bound, or zero points fails with `InvalidRange`. The first evaluation
    /// failure aborts sampling.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn sample(&mut self, from: f64, to: f64, points: usize) -> Result<Samples, EvalError> {
        if from.is_nan() || to.is_nan() || from >= to || points == 0 {
            return Err(invalid_range(from, to, points));
        }

        #[expect(
            clippy::cast_precision_loss,
            reason = "point counts past 2^53 are not a meaningful request"
        )]
        let step = (to - from) / points as f64;

        let mut samples = Vec::with_capacity(points);
        for i in 0..points {
            #[expect(clippy::cast_precision_loss, reason = "bounded by points, see above")]
            let x = from + i as f64 * step;
            samples.push((x, self.evaluate_at(x)?));
        }
        Ok(Samples { points: samples })
    }
}

/// Sample `tape` at `points` inputs across `[from, to)`.
pub fn sample(tape: &Tape, from: f64, to: f64, points: usize) -> Result<Samples, EvalError> {
    Evaluator::new(tape).sample(from, to, points)
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
