//! Statically declared member metadata
//!
//! Each introspectable type publishes a `TypeDescriptor` table: its public
//! members in declaration order, each optionally carrying a help record.

use crate::domain::{Point, Shape};

/// Human-readable help attached to a type or member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpAttribute {
    pub description: &'static str,
    pub url: Option<&'static str>,
}

impl HelpAttribute {
    pub const fn new(description: &'static str) -> Self {
        Self {
            description,
            url: None,
        }
    }

    pub const fn with_url(description: &'static str, url: &'static str) -> Self {
        Self {
            description,
            url: Some(url),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    Method,
    Property,
}

impl MemberKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberKind::Method => "method",
            MemberKind::Property => "property",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemberInfo {
    pub name: &'static str,
    pub kind: MemberKind,
    pub help: Option<HelpAttribute>,
}

impl MemberInfo {
    pub const fn method(name: &'static str, help: Option<HelpAttribute>) -> Self {
        Self {
            name,
            kind: MemberKind::Method,
            help,
        }
    }

    pub const fn property(name: &'static str, help: Option<HelpAttribute>) -> Self {
        Self {
            name,
            kind: MemberKind::Property,
            help,
        }
    }
}

/// Metadata table for one type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeDescriptor {
    pub name: &'static str,
    pub help: Option<HelpAttribute>,
    pub members: &'static [MemberInfo],
}

/// Types that publish a static metadata table.
pub trait Introspect {
    fn descriptor() -> &'static TypeDescriptor;
}

static POINT_DESCRIPTOR: TypeDescriptor = TypeDescriptor {
    name: "Point",
    help: Some(HelpAttribute::new("Immutable 2D integer coordinate")),
    members: &[
        MemberInfo::property("x", Some(HelpAttribute::new("Horizontal coordinate"))),
        MemberInfo::property("y", Some(HelpAttribute::new("Vertical coordinate"))),
        MemberInfo::method(
            "coordinate",
            Some(HelpAttribute::new("Coordinate by index: 0 is x, 1 is y")),
        ),
        MemberInfo::method("offset", None),
    ],
};

static SHAPE_DESCRIPTOR: TypeDescriptor = TypeDescriptor {
    name: "Shape",
    help: Some(HelpAttribute::with_url(
        "Shape with a center point",
        "https://en.wikipedia.org/wiki/Shape",
    )),
    members: &[
        MemberInfo::property("center", Some(HelpAttribute::new("Center point"))),
        MemberInfo::property(
            "radius",
            Some(HelpAttribute::with_url(
                "Radius of circle variants",
                "https://en.wikipedia.org/wiki/Radius",
            )),
        ),
        MemberInfo::property("width", None),
        MemberInfo::property("height", None),
        MemberInfo::property("label", None),
        MemberInfo::method(
            "draw",
            Some(HelpAttribute::new(
                "Write the drawing, parent level first, then variant fields",
            )),
        ),
        MemberInfo::method("coordinate", None),
        MemberInfo::method("cmp_by_center", None),
    ],
};

impl Introspect for Point {
    fn descriptor() -> &'static TypeDescriptor {
        &POINT_DESCRIPTOR
    }
}

impl Introspect for Shape {
    fn descriptor() -> &'static TypeDescriptor {
        &SHAPE_DESCRIPTOR
    }
}
