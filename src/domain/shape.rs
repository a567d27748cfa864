//! Shape hierarchy as a sum type
//!
//! `Shape` holds a center and a `ShapeKind` tag. Drawing chains through the
//! levels of the hierarchy: every variant first emits its parent's output and
//! then appends its own lines (Shape -> Circle -> LabeledCircle).

use std::cmp::Ordering;
use std::fmt::{self, Write};
use std::str::FromStr;

use itertools::Itertools;
use regex::Regex;

use crate::domain::{DomainError, DomainResult, Point};

/// Mutable properties of a shape, named as they appear in change events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    Center,
    Radius,
    Width,
    Height,
    Label,
}

impl Property {
    pub fn as_str(&self) -> &'static str {
        match self {
            Property::Center => "Center",
            Property::Radius => "Radius",
            Property::Width => "Width",
            Property::Height => "Height",
            Property::Label => "Label",
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Variant-specific data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ShapeKind {
    #[default]
    Plain,
    Circle {
        radius: i32,
    },
    Rectangle {
        width: i32,
        height: i32,
    },
    /// A circle with a caption; its parent level is `Circle`.
    LabeledCircle {
        radius: i32,
        label: String,
    },
}

impl ShapeKind {
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Plain => "Shape",
            ShapeKind::Circle { .. } => "Circle",
            ShapeKind::Rectangle { .. } => "Rectangle",
            ShapeKind::LabeledCircle { .. } => "LabeledCircle",
        }
    }
}

/// A shape with a center point.
///
/// The default shape is a plain shape at the origin.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Shape {
    center: Point,
    kind: ShapeKind,
}

impl Shape {
    fn new(center: Point, kind: ShapeKind) -> Self {
        Self { center, kind }
    }

    pub fn plain(center: Point) -> Self {
        Self::new(center, ShapeKind::Plain)
    }

    pub fn circle(center: Point, radius: i32) -> Self {
        Self::new(center, ShapeKind::Circle { radius })
    }

    pub fn rectangle(center: Point, width: i32, height: i32) -> Self {
        Self::new(center, ShapeKind::Rectangle { width, height })
    }

    /// Fails with `InvalidLabel` if `label` contains a line break.
    pub fn labeled_circle(
        center: Point,
        radius: i32,
        label: impl Into<String>,
    ) -> DomainResult<Self> {
        Ok(Self::new(
            center,
            ShapeKind::LabeledCircle {
                radius,
                label: single_line(label.into())?,
            },
        ))
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }

    pub fn kind_name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn radius(&self) -> Option<i32> {
        match &self.kind {
            ShapeKind::Circle { radius } | ShapeKind::LabeledCircle { radius, .. } => {
                Some(*radius)
            }
            _ => None,
        }
    }

    pub fn width(&self) -> Option<i32> {
        match &self.kind {
            ShapeKind::Rectangle { width, .. } => Some(*width),
            _ => None,
        }
    }

    pub fn height(&self) -> Option<i32> {
        match &self.kind {
            ShapeKind::Rectangle { height, .. } => Some(*height),
            _ => None,
        }
    }

    pub fn label(&self) -> Option<&str> {
        match &self.kind {
            ShapeKind::LabeledCircle { label, .. } => Some(label),
            _ => None,
        }
    }

    /// Center coordinate by index: 0 is `x`, 1 is `y`.
    pub fn coordinate(&self, index: i64) -> DomainResult<i32> {
        self.center.coordinate(index)
    }

    pub fn set_center(&mut self, center: Point) {
        self.center = center;
    }

    pub fn set_radius(&mut self, value: i32) -> DomainResult<()> {
        let kind = self.kind_name();
        match &mut self.kind {
            ShapeKind::Circle { radius } | ShapeKind::LabeledCircle { radius, .. } => {
                *radius = value;
                Ok(())
            }
            _ => Err(unsupported(kind, Property::Radius)),
        }
    }

    pub fn set_width(&mut self, value: i32) -> DomainResult<()> {
        let kind = self.kind_name();
        match &mut self.kind {
            ShapeKind::Rectangle { width, .. } => {
                *width = value;
                Ok(())
            }
            _ => Err(unsupported(kind, Property::Width)),
        }
    }

    pub fn set_height(&mut self, value: i32) -> DomainResult<()> {
        let kind = self.kind_name();
        match &mut self.kind {
            ShapeKind::Rectangle { height, .. } => {
                *height = value;
                Ok(())
            }
            _ => Err(unsupported(kind, Property::Height)),
        }
    }

    /// Fails with `InvalidLabel` on a line break; the label is left as is.
    pub fn set_label(&mut self, value: impl Into<String>) -> DomainResult<()> {
        let kind = self.kind_name();
        match &mut self.kind {
            ShapeKind::LabeledCircle { label, .. } => {
                *label = single_line(value.into())?;
                Ok(())
            }
            _ => Err(unsupported(kind, Property::Label)),
        }
    }

    /// Write the drawing of this shape to `sink`, one line per level field.
    pub fn draw<W: Write>(&self, sink: &mut W) -> fmt::Result {
        match &self.kind {
            ShapeKind::Plain => self.draw_shape(sink),
            ShapeKind::Circle { radius } => self.draw_circle(sink, *radius),
            ShapeKind::Rectangle { width, height } => self.draw_rectangle(sink, *width, *height),
            ShapeKind::LabeledCircle { radius, label } => {
                self.draw_labeled_circle(sink, *radius, label)
            }
        }
    }

    /// Drawing collected into a `String`.
    pub fn drawing(&self) -> String {
        let mut out = String::new();
        // writing into a String cannot fail
        let _ = self.draw(&mut out);
        out
    }

    fn draw_shape<W: Write>(&self, sink: &mut W) -> fmt::Result {
        writeln!(sink, "Drawing shape at {}", self.center)
    }

    fn draw_circle<W: Write>(&self, sink: &mut W, radius: i32) -> fmt::Result {
        self.draw_shape(sink)?;
        writeln!(sink, "radius: {radius}")
    }

    fn draw_rectangle<W: Write>(&self, sink: &mut W, width: i32, height: i32) -> fmt::Result {
        self.draw_shape(sink)?;
        writeln!(sink, "width: {width}")?;
        writeln!(sink, "height: {height}")
    }

    fn draw_labeled_circle<W: Write>(&self, sink: &mut W, radius: i32, label: &str) -> fmt::Result {
        self.draw_circle(sink, radius)?;
        writeln!(sink, "label: {label}")
    }

    /// Total order by center, lexicographic on (x, y).
    pub fn cmp_by_center(&self, other: &Shape) -> Ordering {
        self.center.cmp(&other.center)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ShapeKind::Plain => write!(f, "Shape at {}", self.center),
            ShapeKind::Circle { radius } => write!(f, "Circle at {} radius {}", self.center, radius),
            ShapeKind::Rectangle { width, height } => {
                write!(f, "Rectangle at {} size {} x {}", self.center, width, height)
            }
            ShapeKind::LabeledCircle { radius, label } => {
                write!(f, "Circle \"{}\" at {} radius {}", label, self.center, radius)
            }
        }
    }
}

/// Parses the one-line form produced by `Display`.
impl FromStr for Shape {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |message: String| DomainError::InvalidShape {
            input: s.to_string(),
            message,
        };
        const POINT: &str = r"\((-?\d+), (-?\d+)\)";

        let patterns = [
            format!(r"^Shape at {POINT}$"),
            format!(r"^Circle at {POINT} radius (-?\d+)$"),
            format!(r"^Rectangle at {POINT} size (-?\d+) x (-?\d+)$"),
            format!(r#"^Circle "(.*)" at {POINT} radius (-?\d+)$"#),
        ];

        for (variant, pattern) in patterns.iter().enumerate() {
            let re = Regex::new(pattern).map_err(|e| invalid(e.to_string()))?;
            let Some(caps) = re.captures(s.trim_end()) else {
                continue;
            };
            let num = |i: usize| {
                caps[i]
                    .parse::<i32>()
                    .map_err(|e| invalid(format!("field {i}: {e}")))
            };
            let shape = match variant {
                0 => Shape::plain(Point::new(num(1)?, num(2)?)),
                1 => Shape::circle(Point::new(num(1)?, num(2)?), num(3)?),
                2 => Shape::rectangle(Point::new(num(1)?, num(2)?), num(3)?, num(4)?),
                _ => Shape::labeled_circle(Point::new(num(2)?, num(3)?), num(4)?, &caps[1])?,
            };
            return Ok(shape);
        }

        Err(invalid("unrecognized shape line".to_string()))
    }
}

/// Labels end up inside the one-line display form.
fn single_line(label: String) -> DomainResult<String> {
    if label.contains(['\n', '\r']) {
        return Err(DomainError::InvalidLabel(label));
    }
    Ok(label)
}

fn unsupported(kind: &'static str, property: Property) -> DomainError {
    DomainError::UnsupportedProperty { kind, property }
}

/// Shapes ordered by center, lexicographic on (x, y). Stable for equal centers.
pub fn sort_by_center(shapes: impl IntoIterator<Item = Shape>) -> Vec<Shape> {
    shapes
        .into_iter()
        .sorted_by(|a, b| a.cmp_by_center(b))
        .collect()
}

/// Equality over possibly absent operands. Never fails: two absent operands
/// are equal, exactly one absent operand is unequal.
pub fn shapes_equal(a: Option<&Shape>, b: Option<&Shape>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a == b,
        (None, None) => true,
        _ => false,
    }
}

/// Ordering by center over possibly absent operands. Fails with
/// `MissingOperand` if either side is absent.
pub fn compare_centers(a: Option<&Shape>, b: Option<&Shape>) -> DomainResult<Ordering> {
    match (a, b) {
        (Some(a), Some(b)) => Ok(a.cmp_by_center(b)),
        _ => Err(DomainError::MissingOperand),
    }
}
