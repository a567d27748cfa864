//! Immutable 2D integer coordinate

use std::fmt;
use std::str::FromStr;

use regex::Regex;

use crate::domain::{DomainError, DomainResult};

/// Number of addressable coordinates (x, y).
pub const COORDINATE_COUNT: usize = 2;

/// A 2D coordinate pair.
///
/// `Point` is `Copy`: assigning or passing it by value yields an independent
/// instance. There are no setters; use [`Point::offset`] to derive a new one.
///
/// Ordering is lexicographic on `x`, then `y` (field declaration order).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    x: i32,
    y: i32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    /// Coordinate by index: 0 is `x`, 1 is `y`. Any other value, negative
    /// included, is out of range.
    pub fn coordinate(&self, index: i64) -> DomainResult<i32> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            _ => Err(DomainError::IndexOutOfRange {
                index,
                len: COORDINATE_COUNT,
            }),
        }
    }

    /// New point shifted by `(dx, dy)`. Each coordinate saturates at the
    /// `i32` bounds.
    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Parses `x,y` or `(x, y)`.
impl FromStr for Point {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |message: String| DomainError::InvalidPoint {
            input: s.to_string(),
            message,
        };

        let re = Regex::new(r"^\s*\(?\s*([^,()\s]+)\s*,\s*([^,()\s]+)\s*\)?\s*$")
            .map_err(|e| invalid(e.to_string()))?;
        let caps = re
            .captures(s)
            .ok_or_else(|| invalid("expected 'x,y' or '(x, y)'".to_string()))?;

        let x = caps[1]
            .parse::<i32>()
            .map_err(|e| invalid(format!("x: {e}")))?;
        let y = caps[2]
            .parse::<i32>()
            .map_err(|e| invalid(format!("y: {e}")))?;
        Ok(Self::new(x, y))
    }
}
