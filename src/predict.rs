//! Generic event prediction: find when a time function reaches a target value.
//!
//! [`predict`] walks from a start time in fixed steps until two consecutive samples bracket
//! the target, then bisects the bracket. It is used for every event kind in
//! [`crate::events`], with the value function passed as a closure.
//!
//! Bisection assumes the function is monotonic inside the bracket. That holds for the smooth
//! solar signals in this crate when the step is small relative to their period; a function
//! that turns around inside one step can produce an arbitrary point of the bracket.

use crate::math::abs;
use crate::{Error, Result};

/// Upper bound on bisection iterations.
pub const MAX_REFINEMENTS: usize = 1000;

/// Direction of an event search relative to the start time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// The next occurrence after the start time
    Future,
    /// The last occurrence before the start time
    Past,
}

impl Direction {
    /// Sign applied to the step size: `1.0` for the future, `-1.0` for the past.
    #[must_use]
    pub const fn signum(self) -> f64 {
        match self {
            Self::Future => 1.0,
            Self::Past => -1.0,
        }
    }
}

/// Step size, tolerance and search span of an event search, in Julian Centuries except for
/// `epsilon`, which is in the unit of the searched function.
///
/// # Example
/// ```
/// # use solar_ephemeris::predict::{Direction, PredictionWindow};
/// let window = PredictionWindow::towards(Direction::Past).with_span(0.02).unwrap();
/// assert!(window.step() < 0.0);
/// assert_eq!(window.span(), 0.02);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionWindow {
    step: f64,
    epsilon: f64,
    span: f64,
}

impl PredictionWindow {
    /// Default step: 1/2000 of a year (about 4.4 hours).
    pub const DEFAULT_STEP: f64 = 0.01 / 2000.0;

    /// Default tolerance on the searched function's value.
    pub const DEFAULT_EPSILON: f64 = 0.000001;

    /// Default span: 0.01 Julian Centuries (about one year).
    pub const DEFAULT_SPAN: f64 = 0.01;

    /// Creates a validated window. The sign of `step` selects the direction.
    ///
    /// # Errors
    /// Returns `InvalidPredictionWindow` if `step` is zero or not finite, or if `epsilon` or
    /// `span` is not a positive finite number.
    pub fn new(step: f64, epsilon: f64, span: f64) -> Result<Self> {
        if !step.is_finite() || step == 0.0 {
            return Err(Error::invalid_prediction_window(
                "step must be finite and non-zero",
            ));
        }
        check_positive(epsilon, "epsilon must be positive and finite")?;
        check_positive(span, "span must be positive and finite")?;
        Ok(Self {
            step,
            epsilon,
            span,
        })
    }

    /// Default window searching in `direction`.
    #[must_use]
    pub const fn towards(direction: Direction) -> Self {
        Self {
            step: Self::DEFAULT_STEP * direction.signum(),
            epsilon: Self::DEFAULT_EPSILON,
            span: Self::DEFAULT_SPAN,
        }
    }

    /// Returns this window with another tolerance.
    ///
    /// # Errors
    /// Returns `InvalidPredictionWindow` unless `epsilon` is positive and finite.
    pub fn with_epsilon(self, epsilon: f64) -> Result<Self> {
        Self::new(self.step, epsilon, self.span)
    }

    /// Returns this window with another search span.
    ///
    /// # Errors
    /// Returns `InvalidPredictionWindow` unless `span` is positive and finite.
    pub fn with_span(self, span: f64) -> Result<Self> {
        Self::new(self.step, self.epsilon, span)
    }

    /// Signed step between samples while bracketing.
    #[must_use]
    pub const fn step(&self) -> f64 {
        self.step
    }

    /// Tolerance on the function value at the bracket ends.
    #[must_use]
    pub const fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Maximum distance from the start time that is searched.
    #[must_use]
    pub const fn span(&self) -> f64 {
        self.span
    }

    /// Direction implied by the sign of the step.
    #[must_use]
    pub fn direction(&self) -> Direction {
        if self.step > 0.0 {
            Direction::Future
        } else {
            Direction::Past
        }
    }
}

fn check_positive(value: f64, message: &'static str) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::invalid_prediction_window(message));
    }
    Ok(())
}

/// Whether the target lies between two consecutive samples.
///
/// Values are already offset by the target. `initial` is the sample at the start time; the
/// last two patterns catch a run that moves away from zero on the far side of the start.
fn brackets_target(initial: f64, previous: f64, current: f64) -> bool {
    (previous <= 0.0 && 0.0 <= current)
        || (previous >= 0.0 && 0.0 >= current)
        || (0.0 >= previous && previous >= current && 0.0 <= initial)
        || (0.0 <= previous && previous <= current && 0.0 >= initial)
}

/// Finds the time nearest `t`, in the window's direction, at which `f` equals `target`.
///
/// # Arguments
/// * `window` - Step, tolerance and span of the search
/// * `target` - Value of `f` to look for
/// * `f` - Function of time in Julian Centuries
/// * `t` - Start time in Julian Centuries
///
/// # Returns
/// `None` if no crossing is bracketed within the span. Otherwise the midpoint of a bracket
/// whose end values differ by less than `epsilon`, or the last midpoint after
/// [`MAX_REFINEMENTS`] bisections.
///
/// # Example
/// ```
/// # use solar_ephemeris::predict::{Direction, PredictionWindow, predict};
/// let window = PredictionWindow::towards(Direction::Future);
/// let root = predict(&window, 2.0, |t| 1000.0 * t, 0.0).unwrap();
/// assert!((root - 0.002).abs() < 1e-9);
/// ```
pub fn predict<F>(window: &PredictionWindow, target: f64, f: F, t: f64) -> Option<f64>
where
    F: Fn(f64) -> f64,
{
    let offset = |t: f64| f(t) - target;
    let (t1, t2) = bracket(window, &offset, t)?;
    Some(bisect(window.epsilon, &offset, t1, t2))
}

fn bracket<F>(window: &PredictionWindow, offset: &F, start: f64) -> Option<(f64, f64)>
where
    F: Fn(f64) -> f64,
{
    let initial = offset(start);
    let (mut t1, mut v1) = (start, initial);
    let mut t2 = start;

    loop {
        if abs(t2 - start) > window.span {
            #[cfg(feature = "log")]
            log::trace!(
                "no crossing within {} Julian Centuries of {start}",
                window.span
            );
            return None;
        }

        t2 += window.step;
        let v2 = offset(t2);
        if brackets_target(initial, v1, v2) {
            return Some((t1, t2));
        }
        t1 = t2;
        v1 = v2;
    }
}

fn bisect<F>(epsilon: f64, offset: &F, mut t1: f64, mut t2: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    let mut midpoint = 0.5 * (t1 + t2);

    for _ in 0..MAX_REFINEMENTS {
        midpoint = 0.5 * (t1 + t2);
        let v1 = offset(t1);
        let v2 = offset(t2);
        let vm = offset(midpoint);

        if abs(v1 - v2) < epsilon {
            return midpoint;
        }

        if v1 < v2 {
            // Increasing across the bracket
            if vm > 0.0 {
                t2 = midpoint;
            } else {
                t1 = midpoint;
            }
        } else if v1 > v2 {
            if vm < 0.0 {
                t2 = midpoint;
            } else {
                t1 = midpoint;
            }
        }
    }

    #[cfg(feature = "log")]
    log::debug!(
        "bisection stopped after {MAX_REFINEMENTS} iterations at {midpoint} without reaching tolerance {epsilon}"
    );
    midpoint
}
