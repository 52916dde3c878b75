//! Axis-aligned bounding-box extents.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Size of a mesh's axis-aligned bounding box along X, Y and Z.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Extents {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Extents {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Parse the `[x y z]` form written to the `model_dimension` column.
    /// Returns `None` for anything that is not exactly three numbers.
    pub fn parse(s: &str) -> Option<Self> {
        let inner = s.trim().strip_prefix('[')?.strip_suffix(']')?;
        let mut parts = inner.split_whitespace().map(str::parse::<f64>);
        let x = parts.next()?.ok()?;
        let y = parts.next()?.ok()?;
        let z = parts.next()?.ok()?;
        if parts.next().is_some() {
            return None;
        }
        Some(Self { x, y, z })
    }
}

impl fmt::Display for Extents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {} {}]", self.x, self.y, self.z)
    }
}

impl From<[f64; 3]> for Extents {
    fn from(v: [f64; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_then_parse() {
        let e = Extents::new(10.0, 2.5, 0.125);
        assert_eq!(e.to_string(), "[10 2.5 0.125]");
        assert_eq!(Extents::parse(&e.to_string()), Some(e));
    }

    #[test]
    fn parse_rejects_malformed() {
        assert_eq!(Extents::parse("10 2 3"), None);
        assert_eq!(Extents::parse("[10 2]"), None);
        assert_eq!(Extents::parse("[10 2 3 4]"), None);
        assert_eq!(Extents::parse("[a b c]"), None);
    }

    #[test]
    fn parse_tolerates_extra_whitespace() {
        assert_eq!(
            Extents::parse("  [ 1   2 3 ] "),
            Some(Extents::new(1.0, 2.0, 3.0))
        );
    }
}
