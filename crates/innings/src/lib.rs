//! Innings-pitched codec between outs notation and decimal thirds.
//!
//! Box scores display innings pitched in "outs notation": the integer part
//! is full innings and the fractional part is .1 (one out = 1/3 inning) or
//! .2 (two outs = 2/3 inning). That notation does not sum: `6.2 + 3.1`
//! must come out to `10.0`, not `9.3`. Arithmetic therefore happens in the
//! decimal-thirds domain and converts back only for display.

/// Converts an outs-notation value to decimal thirds.
///
/// `6.2` (6 innings, 2 outs) becomes `6.666...`. Assumes a non-negative
/// input whose fractional part is 0, .1, or .2.
pub fn outs_to_thirds(v: f64) -> f64 {
    v.floor() + v.fract() * 10.0 / 3.0
}

/// Converts a decimal-thirds value back to outs notation.
///
/// The conversion applies only when the fractional part lies strictly
/// inside (0.05, 0.995). Outside that band the value passes through
/// unchanged: a remainder that close to a whole inning is floating-point
/// drift from summing exact thirds, not a real fraction, and converting
/// it would corrupt the result. The band is intentional, not a rounding
/// bug, though the cutoffs themselves are heuristic.
pub fn thirds_to_outs(v: f64) -> f64 {
    let frac = v.fract();
    if frac > 0.05 && frac < 0.995 {
        v.floor() + frac * 3.0 / 10.0
    } else {
        v
    }
}

/// Sums a sequence of outs-notation values, returning outs notation.
///
/// Each value is converted to decimal thirds, the thirds are summed, and
/// the total converts back through [`thirds_to_outs`]. The result matches
/// conventional box-score notation to the nearest out:
/// `sum_innings(&[6.2, 3.1])` is `10.0` (6 2/3 + 3 1/3 innings).
pub fn sum_innings(values: &[f64]) -> f64 {
    thirds_to_outs(values.iter().copied().map(outs_to_thirds).sum())
}
