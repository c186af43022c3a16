//! The closed set of activation functions and their derivatives.
//!
//! Every function is a closed-form map over the reals together with an
//! analytic derivative. Evaluation never fails; extreme inputs may produce
//! infinities, which downstream rendering clamps into the plot area.

use thiserror::Error;

/// Lookup of a function by a name that is not in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown activation function: {0}")]
pub struct UnknownFunction(pub String);

/// Auto-range family of an activation function.
///
/// Functions in the same family share the viewport fitting policy applied
/// on selection and reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    /// Unbounded above, flat or mildly negative below (ReLU, Softplus, ELU).
    UnboundedPositive,
    /// The identity line.
    Linear,
    /// Bounded in a fixed band (Sigmoid, Tanh).
    Bounded,
}

/// An activation function with its analytic derivative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Activation {
    /// `1 / (1 + e^-x)`
    Sigmoid,
    /// `tanh(x)`
    Tanh,
    /// `max(0, x)`
    ReLU,
    /// `x` for positive inputs, `0.01 x` otherwise.
    LeakyReLU,
    /// `x` for positive inputs, `e^x - 1` otherwise.
    Elu,
    /// `ln(1 + e^x)`
    Softplus,
    /// `x`
    Linear,
}

impl Activation {
    /// All registered functions, in display order.
    pub const ALL: [Activation; 7] = [
        Activation::Sigmoid,
        Activation::Tanh,
        Activation::ReLU,
        Activation::LeakyReLU,
        Activation::Elu,
        Activation::Softplus,
        Activation::Linear,
    ];

    /// Display name, also the lookup key.
    pub fn label(self) -> &'static str {
        match self {
            Self::Sigmoid => "Sigmoid",
            Self::Tanh => "Tanh",
            Self::ReLU => "ReLU",
            Self::LeakyReLU => "Leaky ReLU",
            Self::Elu => "ELU",
            Self::Softplus => "Softplus",
            Self::Linear => "Linear",
        }
    }

    /// Resolve a function by its display name.
    pub fn from_label(name: &str) -> Result<Self, UnknownFunction> {
        Self::ALL
            .iter()
            .copied()
            .find(|activation| activation.label() == name)
            .ok_or_else(|| UnknownFunction(name.to_string()))
    }

    /// Auto-range family.
    pub fn family(self) -> Family {
        match self {
            Self::ReLU | Self::Softplus | Self::Elu => Family::UnboundedPositive,
            Self::Linear => Family::Linear,
            Self::Sigmoid | Self::Tanh | Self::LeakyReLU => Family::Bounded,
        }
    }

    /// Evaluate the function at `x`.
    pub fn evaluate(self, x: f64) -> f64 {
        match self {
            Self::Sigmoid => 1.0 / (1.0 + (-x).exp()),
            Self::Tanh => x.tanh(),
            Self::ReLU => x.max(0.0),
            Self::LeakyReLU => {
                if x > 0.0 {
                    x
                } else {
                    0.01 * x
                }
            }
            Self::Elu => {
                if x > 0.0 {
                    x
                } else {
                    x.exp() - 1.0
                }
            }
            Self::Softplus => (1.0 + x.exp()).ln(),
            Self::Linear => x,
        }
    }

    /// Evaluate the derivative at `x`.
    ///
    /// Discontinuities at zero resolve to the negative-side constant
    /// (0 for ReLU, 0.01 for Leaky ReLU, 1 for ELU).
    pub fn derivative(self, x: f64) -> f64 {
        match self {
            Self::Sigmoid => {
                let sig = Self::Sigmoid.evaluate(x);
                sig * (1.0 - sig)
            }
            Self::Tanh => 1.0 - x.tanh().powi(2),
            Self::ReLU => {
                if x > 0.0 {
                    1.0
                } else {
                    0.0
                }
            }
            Self::LeakyReLU => {
                if x > 0.0 {
                    1.0
                } else {
                    0.01
                }
            }
            Self::Elu => {
                if x > 0.0 {
                    1.0
                } else {
                    x.exp()
                }
            }
            Self::Softplus => Self::Sigmoid.evaluate(x),
            Self::Linear => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn sigmoid_at_origin() {
        assert!((Activation::Sigmoid.evaluate(0.0) - 0.5).abs() < EPS);
        assert!((Activation::Sigmoid.derivative(0.0) - 0.25).abs() < EPS);
    }

    #[test]
    fn tanh_slope_at_origin() {
        assert!((Activation::Tanh.derivative(0.0) - 1.0).abs() < EPS);
    }

    #[test]
    fn relu_derivative_sides() {
        assert_eq!(Activation::ReLU.derivative(-1.0), 0.0);
        assert_eq!(Activation::ReLU.derivative(1.0), 1.0);
        assert_eq!(Activation::ReLU.derivative(0.0), 0.0);
    }

    #[test]
    fn softplus_derivative_is_sigmoid() {
        for x in [-3.0, -0.5, 0.0, 0.5, 3.0] {
            let expected = Activation::Sigmoid.evaluate(x);
            assert!((Activation::Softplus.derivative(x) - expected).abs() < EPS);
        }
    }

    #[test]
    fn elu_is_continuous_at_origin() {
        assert!((Activation::Elu.evaluate(0.0)).abs() < EPS);
        assert!((Activation::Elu.evaluate(-1e-9)).abs() < 1e-8);
    }

    #[test]
    fn overflow_passes_through() {
        assert!(Activation::Softplus.evaluate(800.0).is_infinite());
        assert!(Activation::Elu.evaluate(800.0).is_finite());
    }

    #[test]
    fn lookup_by_label() {
        assert_eq!(Activation::from_label("Leaky ReLU"), Ok(Activation::LeakyReLU));
        assert_eq!(
            Activation::from_label("Swish"),
            Err(UnknownFunction("Swish".to_string()))
        );
    }
}
