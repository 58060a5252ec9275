//! Error taxonomy: configuration errors, geometry warnings, invariant violations.

use thiserror::Error;

/// One violated configuration rule.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigViolation {
    #[error("polygon needs at least 3 sides (p = {0})")]
    PTooSmall(u32),

    #[error("at least 3 polygons must meet at each vertex (q = {0})")]
    QTooSmall(u32),

    #[error("polygon has too many sides (p = {0}, at most {})", MAX_SIDES)]
    PTooLarge(u32),

    #[error("too many polygons meet at each vertex (q = {0}, at most {})", MAX_SIDES)]
    QTooLarge(u32),

    #[error("hyperbolic tessellations require (p-2)(q-2) > 4, got ({p}-2)({q}-2) <= 4")]
    NotHyperbolic { p: u32, q: u32 },

    #[error("minimum edge length must be positive and finite (got {0})")]
    InvalidMinEdgeLength(f64),

    #[error("edge sample spacing must be positive and finite (got {0})")]
    InvalidSpacing(f64),
}

/// Upper bound on `p` and `q`.
pub const MAX_SIDES: u32 = 1024;

/// Every rule a configuration breaks, in check order.
#[derive(Clone, Debug, PartialEq, Error)]
#[error("invalid tiling configuration:{}", bracketed(.violations))]
pub struct ConfigError {
    pub violations: Vec<ConfigViolation>,
}

fn bracketed(violations: &[ConfigViolation]) -> String {
    violations.iter().map(|v| format!(" [{v}]")).collect()
}

/// Non-fatal numerical problem found while building geometry.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum GeomWarning {
    #[error("point ({x}, {y}) lies outside the unit disk")]
    OutsideDisk { x: f64, y: f64 },

    #[error("degenerate arc: coincident endpoints at ({x}, {y})")]
    DegenerateArc { x: f64, y: f64 },

    #[error("line-circle intersection failed for {samples} edge sample(s)")]
    NoIntersection { samples: u32 },
}

/// Internal-logic failure; never expected for a valid configuration.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum InvariantViolation {
    #[error("isometry has no anchor edge to shift from")]
    MissingAnchor,

    #[error("shifted edge index {index} outside [0, {p})")]
    ShiftOutOfRange { index: i64, p: usize },

    #[error("composed isometry is not normalizable (origin maps to z = {z})")]
    NonNormalizable { z: f64 },
}

#[derive(Debug, Error)]
pub enum TessellationError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("{} geometry warning(s) in strict mode", .0.len())]
    Geometry(Vec<GeomWarning>),

    #[error("internal invariant violated: {0}")]
    Invariant(#[from] InvariantViolation),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_lists_each_violation() {
        let err = ConfigError {
            violations: vec![
                ConfigViolation::PTooSmall(2),
                ConfigViolation::NotHyperbolic { p: 2, q: 7 },
            ],
        };
        assert_eq!(
            err.to_string(),
            "invalid tiling configuration: [polygon needs at least 3 sides (p = 2)] \
             [hyperbolic tessellations require (p-2)(q-2) > 4, got (2-2)(7-2) <= 4]"
        );
        let wrapped = TessellationError::from(err.clone());
        assert_eq!(wrapped.to_string(), err.to_string());
    }

    #[test]
    fn too_large_names_the_bound() {
        let msg = ConfigViolation::QTooLarge(5000).to_string();
        assert!(msg.contains("5000") && msg.contains(&MAX_SIDES.to_string()), "{msg}");
    }
}
