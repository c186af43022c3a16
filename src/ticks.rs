//! Axis tick planning and label formatting.

use crate::view::Range;

/// A labeled graduation mark on an axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    /// Tick position in math coordinates.
    pub value: f64,
    /// Formatted label.
    pub label: String,
}

/// Choose a tick step for the given span.
///
/// Wide spans step coarsely, narrow spans finely; a span around the
/// single-digit default steps by one.
pub fn tick_step(span: f64) -> f64 {
    if span > 20.0 {
        5.0
    } else if span > 10.0 {
        2.0
    } else if span < 0.5 {
        0.1
    } else if span < 2.0 {
        0.5
    } else {
        1.0
    }
}

/// Enumerate ticks across a range.
///
/// Values run from the first step multiple at or above `range.min` up to
/// `range.max` inclusive. Labels carry one decimal place for sub-unit
/// steps and none otherwise.
pub fn plan(range: Range) -> Vec<Tick> {
    let step = tick_step(range.span());
    let mut ticks = Vec::new();
    if !range.is_valid() {
        return ticks;
    }
    let mut value = (range.min / step).ceil() * step;
    while value <= range.max {
        ticks.push(Tick {
            value,
            label: format_tick(value, step),
        });
        value += step;
    }
    ticks
}

fn format_tick(value: f64, step: f64) -> String {
    if step < 1.0 {
        format!("{value:.1}")
    } else {
        format!("{value:.0}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_selection() {
        assert_eq!(tick_step(30.0), 5.0);
        assert_eq!(tick_step(15.0), 2.0);
        assert_eq!(tick_step(1.0), 0.5);
        assert_eq!(tick_step(0.3), 0.1);
        assert_eq!(tick_step(5.0), 1.0);
    }

    #[test]
    fn enumeration_starts_at_step_multiple() {
        let ticks = plan(Range::new(-5.0, 5.0));
        assert_eq!(ticks.len(), 11);
        assert!((ticks[0].value + 5.0).abs() < 1e-9);
        assert_eq!(ticks[0].label, "-5");
        assert!((ticks[10].value - 5.0).abs() < 1e-9);
    }

    #[test]
    fn sub_unit_steps_get_one_decimal() {
        let ticks = plan(Range::new(-0.75, 0.75));
        assert!(ticks.iter().any(|tick| tick.label == "-0.5"));
        assert!(ticks.iter().any(|tick| tick.label == "0.0"));
        assert!(ticks.iter().any(|tick| tick.label == "0.5"));
    }

    #[test]
    fn invalid_range_yields_no_ticks() {
        assert!(plan(Range::new(f64::NAN, 1.0)).is_empty());
    }
}
