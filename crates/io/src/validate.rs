//! Accumulated validation for loaded player rows.

use crate::error::IoError;

/// Accumulates validation errors and converts them into a single
/// [`IoError::Validation`].
pub(crate) struct ValidationCollector {
    errors: Vec<String>,
}

impl ValidationCollector {
    /// Create an empty collector.
    pub(crate) fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Record one validation error.
    pub(crate) fn push(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    /// Consume the collector and return `Ok(())` if no errors were
    /// recorded, or a single `Err` summarising every violation.
    pub(crate) fn finish(self) -> Result<(), IoError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(IoError::Validation {
                count: self.errors.len(),
                details: self.errors.join("; "),
            })
        }
    }
}

/// Largest accepted distance between an IP fraction and an exact
/// outs-notation digit.
const IP_FRACTION_TOL: f64 = 1e-6;

/// Check one raw innings-pitched value, still in outs notation, before
/// it is converted to decimal thirds. Valid fractional parts are .0, .1,
/// and .2; anything else (say `3.7`) would silently convert into a
/// plausible-looking third, so it has to be caught here.
pub(crate) fn check_outs_notation(c: &mut ValidationCollector, name: &str, ip: f64) {
    if ip < 0.0 {
        c.push(format!("negative IP {ip} for '{name}'"));
        return;
    }
    let frac = ip.fract();
    let ok = [0.0, 0.1, 0.2, 1.0]
        .iter()
        .any(|t| (frac - t).abs() < IP_FRACTION_TOL);
    if !ok {
        c.push(format!(
            "IP fractional part {frac:.4} for '{name}' is not outs notation (.0/.1/.2)"
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collector_empty_is_ok() {
        assert!(ValidationCollector::new().finish().is_ok());
    }

    #[test]
    fn collector_joins_messages() {
        let mut c = ValidationCollector::new();
        c.push("first");
        c.push("second");
        let err = c.finish().unwrap_err();
        match err {
            IoError::Validation { count, details } => {
                assert_eq!(count, 2);
                assert!(details.contains("first; second"));
            }
            other => panic!("expected IoError::Validation, got {other:?}"),
        }
    }

    #[test]
    fn valid_outs_fractions_pass() {
        let mut c = ValidationCollector::new();
        check_outs_notation(&mut c, "whole", 120.0);
        check_outs_notation(&mut c, "one out", 120.1);
        check_outs_notation(&mut c, "two outs", 120.2);
        check_outs_notation(&mut c, "none", 0.0);
        assert!(c.finish().is_ok());
    }

    #[test]
    fn bad_fraction_is_reported() {
        let mut c = ValidationCollector::new();
        check_outs_notation(&mut c, "ok", 10.0);
        check_outs_notation(&mut c, "broken", 10.7);
        let err = c.finish().unwrap_err();
        match err {
            IoError::Validation { count, details } => {
                assert_eq!(count, 1);
                assert!(details.contains("broken"));
            }
            other => panic!("expected IoError::Validation, got {other:?}"),
        }
    }

    #[test]
    fn negative_ip_is_reported() {
        let mut c = ValidationCollector::new();
        check_outs_notation(&mut c, "negative", -1.0);
        let err = c.finish().unwrap_err();
        assert!(matches!(err, IoError::Validation { count: 1, .. }));
    }
}
