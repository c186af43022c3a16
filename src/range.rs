//! Viewport fitting policies per activation family.
//!
//! Fitting runs only on function selection or an explicit reset. Panning
//! is user-directed navigation and is never overridden by auto-scaling.

use crate::functions::{Activation, Family};
use crate::view::{Range, Viewport};

/// Default x-domain restored on selection and reset.
pub const X_DEFAULT: Range = Range {
    min: -5.0,
    max: 5.0,
};

/// Fixed band for bounded functions.
pub const Y_DEFAULT: Range = Range {
    min: -1.5,
    max: 1.5,
};

const SAMPLES: usize = 100;
const HEADROOM: f64 = 0.5;
const MIN_PEAK: f64 = 4.5;
const LINEAR_MIN_SPAN: f64 = 1.0;
const LINEAR_PAD_FRAC: f64 = 0.1;

/// Compute the visible y-range for a function over an x-domain.
pub fn fit(activation: Activation, x: Range) -> Range {
    match activation.family() {
        Family::UnboundedPositive => {
            let mut peak = f64::NEG_INFINITY;
            for index in 0..=SAMPLES {
                let sample = x.min + x.span() * index as f64 / SAMPLES as f64;
                peak = peak.max(activation.evaluate(sample));
            }
            Range::new(-HEADROOM, (peak + HEADROOM).max(MIN_PEAK))
        }
        Family::Linear => {
            let a = activation.evaluate(x.min);
            let b = activation.evaluate(x.max);
            let mut min = a.min(b);
            let mut max = a.max(b);
            if max - min < LINEAR_MIN_SPAN {
                let mid = (max + min) * 0.5;
                min = mid - LINEAR_MIN_SPAN * 0.5;
                max = mid + LINEAR_MIN_SPAN * 0.5;
            }
            let padding = (max - min) * LINEAR_PAD_FRAC;
            Range::new(min - padding, max + padding)
        }
        Family::Bounded => Y_DEFAULT,
    }
}

/// Compute the full default viewport for a function.
pub fn fit_viewport(activation: Activation) -> Viewport {
    Viewport::new(X_DEFAULT, fit(activation, X_DEFAULT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relu_reset_hits_minimum_peak() {
        let viewport = fit_viewport(Activation::ReLU);
        assert_eq!(viewport.x, X_DEFAULT);
        assert!((viewport.y.min + 0.5).abs() < 1e-9);
        // max over [-5, 5] is 5, plus headroom.
        assert!((viewport.y.max - 5.5).abs() < 1e-9);
    }

    #[test]
    fn small_domain_keeps_minimum_headroom() {
        let y = fit(Activation::ReLU, Range::new(-1.0, 1.0));
        assert!((y.max - 4.5).abs() < 1e-9);
    }

    #[test]
    fn linear_pads_by_ten_percent() {
        let y = fit(Activation::Linear, X_DEFAULT);
        assert!((y.min + 6.0).abs() < 1e-9);
        assert!((y.max - 6.0).abs() < 1e-9);
    }

    #[test]
    fn linear_expands_tiny_spans() {
        let y = fit(Activation::Linear, Range::new(-0.1, 0.1));
        // Span expands to 1.0 centered on zero, then 10% padding each side.
        assert!((y.span() - 1.2).abs() < 1e-9);
        assert!((y.min + 0.6).abs() < 1e-9);
    }

    #[test]
    fn bounded_family_uses_fixed_band() {
        assert_eq!(fit(Activation::Sigmoid, X_DEFAULT), Y_DEFAULT);
        assert_eq!(fit(Activation::Tanh, Range::new(-20.0, 20.0)), Y_DEFAULT);
        assert_eq!(fit(Activation::LeakyReLU, X_DEFAULT), Y_DEFAULT);
    }

    #[test]
    fn softplus_tracks_sampled_peak() {
        let y = fit(Activation::Softplus, X_DEFAULT);
        let peak = Activation::Softplus.evaluate(5.0);
        assert!((y.max - (peak + 0.5)).abs() < 1e-6);
    }
}
