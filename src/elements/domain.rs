use serde::{Deserialize, Serialize};

use crate::error::ScaleError;

/// How data values are spaced along an axis.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScaleKind {
    Linear,
    Logarithmic {
        #[serde(default = "ScaleKind::default_log_base")]
        base: f64,
    },
}

impl Default for ScaleKind {
    fn default() -> Self {
        Self::Linear
    }
}

impl ScaleKind {
    pub const fn default_log_base() -> f64 {
        2.0
    }

    pub const fn log2() -> Self {
        Self::Logarithmic { base: Self::default_log_base() }
    }

    pub fn is_logarithmic(&self) -> bool {
        matches!(self, Self::Logarithmic { .. })
    }

    /// A logarithmic base must be finite, positive and other than 1, or every log collapses to
    /// NaN or infinity.
    #[allow(clippy::float_cmp)]
    pub fn validate(&self) -> Result<(), ScaleError> {
        match *self {
            Self::Linear => Ok(()),
            Self::Logarithmic { base } if base.is_finite() && 0.0 < base && base != 1.0 => Ok(()),
            Self::Logarithmic { base } => Err(ScaleError::InvalidLogBase { base }),
        }
    }

    /// Moves a data value into the space in which interpolation is linear: identity for linear
    /// scales, `log_base(value)` for logarithmic ones.
    pub fn transform(&self, value: f64) -> Result<f64, ScaleError> {
        self.validate()?;
        match self {
            Self::Linear => Ok(value),
            Self::Logarithmic { base } => {
                if value.is_finite() && 0.0 < value {
                    Ok(value.ln() / base.ln())
                } else {
                    Err(ScaleError::InvalidLogInput { value })
                }
            },
        }
    }
}

/// The `[min, max]` range of data values mapped onto an axis. Derived from the loaded series
/// and never persisted, so it serializes for diagnostics but is only built through `new`.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct AxisDomain {
    min: f64,
    max: f64,
    kind: ScaleKind,
}

impl AxisDomain {
    /// Bounds are ordered on construction so `min <= max` always holds.
    pub fn new(a: f64, b: f64, kind: ScaleKind) -> Self {
        let (min, max) = if a <= b { (a, b) } else { (b, a) };
        Self { min, max, kind }
    }

    pub fn linear(a: f64, b: f64) -> Self {
        Self::new(a, b, ScaleKind::Linear)
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn kind(&self) -> ScaleKind {
        self.kind
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    #[allow(clippy::float_cmp)]
    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }

    /// Substitute domain for a degenerate one: one unit above `min` on a linear scale, one
    /// factor of the base away from `min` on a logarithmic scale. Non-degenerate domains are
    /// returned unchanged. A logarithmic substitute needs a valid base and a positive `min`.
    pub fn with_unit_range(self) -> Result<Self, ScaleError> {
        if !self.is_degenerate() {
            return Ok(self);
        }

        match self.kind {
            ScaleKind::Linear => Ok(Self::new(self.min, self.min + 1.0, self.kind)),
            ScaleKind::Logarithmic { base } => {
                self.kind.transform(self.min)?;
                Ok(Self::new(self.min, self.min * base, self.kind))
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use claim::*;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_domain_orders_bounds() {
        let domain = AxisDomain::linear(8.0, 1.0);
        assert_eq!(domain.min(), 1.0);
        assert_eq!(domain.max(), 8.0);
        assert!(domain.contains(4.0));
        assert!(!domain.contains(8.5));
    }

    #[test]
    fn test_log_transform() {
        let log2 = ScaleKind::log2();
        assert_relative_eq!(assert_ok!(log2.transform(8.0)), 3.0);
        assert_relative_eq!(assert_ok!(log2.transform(1.0)), 0.0);
        assert_eq!(assert_err!(log2.transform(0.0)), ScaleError::InvalidLogInput { value: 0.0 });
        assert_eq!(assert_err!(log2.transform(-2.0)), ScaleError::InvalidLogInput { value: -2.0 });
        assert_eq!(assert_ok!(ScaleKind::Linear.transform(-2.0)), -2.0);
    }

    #[test]
    fn test_with_unit_range() {
        let linear = AxisDomain::linear(5.0, 5.0);
        assert!(linear.is_degenerate());
        assert_eq!(assert_ok!(linear.with_unit_range()), AxisDomain::linear(5.0, 6.0));

        let log = AxisDomain::new(4.0, 4.0, ScaleKind::log2());
        assert_eq!(assert_ok!(log.with_unit_range()), AxisDomain::new(4.0, 8.0, ScaleKind::log2()));

        let wide = AxisDomain::linear(1.0, 10.0);
        assert_eq!(assert_ok!(wide.with_unit_range()), wide);

        let linear_zero = AxisDomain::linear(0.0, 0.0);
        assert_eq!(assert_ok!(linear_zero.with_unit_range()), AxisDomain::linear(0.0, 1.0));
    }

    #[test]
    fn test_log_unit_range_needs_positive_min() {
        let zero = AxisDomain::new(0.0, 0.0, ScaleKind::log2());
        assert_eq!(assert_err!(zero.with_unit_range()), ScaleError::InvalidLogInput { value: 0.0 });

        let negative = AxisDomain::new(-3.0, -3.0, ScaleKind::log2());
        assert_eq!(assert_err!(negative.with_unit_range()), ScaleError::InvalidLogInput { value: -3.0 });

        let bad_base = AxisDomain::new(4.0, 4.0, ScaleKind::Logarithmic { base: 1.0 });
        assert_eq!(assert_err!(bad_base.with_unit_range()), ScaleError::InvalidLogBase { base: 1.0 });
    }

    #[test]
    fn test_log_base_must_be_usable() {
        for base in [1.0, 0.0, -2.0, f64::INFINITY] {
            let kind = ScaleKind::Logarithmic { base };
            assert_eq!(assert_err!(kind.validate()), ScaleError::InvalidLogBase { base });
            assert_eq!(assert_err!(kind.transform(4.0)), ScaleError::InvalidLogBase { base });
        }

        let nan = ScaleKind::Logarithmic { base: f64::NAN };
        match assert_err!(nan.transform(4.0)) {
            ScaleError::InvalidLogBase { base } => assert!(base.is_nan()),
            err => panic!("expected invalid log base but got: {:?}", err),
        }

        assert_ok!(ScaleKind::log2().validate());
        assert_ok!(ScaleKind::Logarithmic { base: 10.0 }.validate());
        assert_ok!(ScaleKind::Logarithmic { base: 0.5 }.validate());
        assert_ok!(ScaleKind::Linear.validate());
    }

    #[test]
    fn test_axis_domain_is_not_deserializable() {
        assert_impl_all!(AxisDomain: Serialize);
        assert_not_impl_any!(AxisDomain: serde::de::DeserializeOwned);
    }

    #[test]
    fn test_scale_kind_serde() {
        let json = serde_json::to_string(&ScaleKind::log2()).unwrap();
        assert_eq!(json, r#"{"kind":"logarithmic","base":2.0}"#);

        let actual: ScaleKind = serde_json::from_str(r#"{"kind":"logarithmic"}"#).unwrap();
        assert_eq!(actual, ScaleKind::log2());

        let actual: ScaleKind = serde_json::from_str(r#"{"kind":"linear"}"#).unwrap();
        assert_eq!(actual, ScaleKind::Linear);
    }
}
