//! Tests for Inspector

use rstest::rstest;

use shapelab::application::{ApplicationError, ChangeNotifier, Inspector};
use shapelab::domain::{
    HelpAttribute, Introspect, MemberInfo, MemberKind, Point, Shape, TypeDescriptor,
};

#[test]
fn given_shape_when_listing_members_then_declaration_order_is_stable() {
    let inspector = Inspector::new();
    let descriptor = Inspector::of::<Shape>();

    let first: Vec<_> = inspector.members(descriptor).iter().map(|m| m.name).collect();
    let second: Vec<_> = inspector.members(descriptor).iter().map(|m| m.name).collect();

    assert_eq!(first, second);
    assert_eq!(
        first,
        vec![
            "center",
            "radius",
            "width",
            "height",
            "label",
            "draw",
            "coordinate",
            "cmp_by_center"
        ]
    );
}

#[test]
fn given_shape_when_listing_documented_members_then_only_those_with_help() {
    let inspector = Inspector::new();

    let documented = inspector.documented_members(Shape::descriptor());

    let names: Vec<_> = documented.iter().map(|(m, _)| m.name).collect();
    assert_eq!(names, vec!["center", "radius", "draw"]);
    let (_, radius_help) = documented[1];
    assert_eq!(radius_help.url, Some("https://en.wikipedia.org/wiki/Radius"));
}

#[rstest]
#[case("radius", Some("Radius of circle variants"))]
#[case("width", None)]
#[case("no_such_member", None)]
fn given_member_name_when_asking_help_then_description_or_none(
    #[case] member: &str,
    #[case] expected: Option<&str>,
) {
    let inspector = Inspector::new();

    let help = inspector.help_for(Inspector::of::<Shape>(), member);

    assert_eq!(help.map(|h| h.description), expected);
}

#[rstest]
#[case("point", "Point")]
#[case("SHAPE", "Shape")]
#[case("changenotifier", "ChangeNotifier")]
fn given_registered_type_name_when_looking_up_then_found_ignoring_case(
    #[case] query: &str,
    #[case] expected: &str,
) {
    let inspector = Inspector::new();
    assert_eq!(inspector.lookup(query).map(|d| d.name), Some(expected));
}

#[test]
fn given_unknown_type_when_required_then_unknown_type_error() {
    let inspector = Inspector::new();

    let err = inspector.require("Triangle").unwrap_err();

    assert!(matches!(err, ApplicationError::UnknownType(name) if name == "Triangle"));
}

#[test]
fn given_default_inspector_then_registers_point_shape_notifier_in_order() {
    let names: Vec<_> = Inspector::new().types().iter().map(|d| d.name).collect();
    assert_eq!(names, vec!["Point", "Shape", "ChangeNotifier"]);
}

struct Undocumented;

static UNDOCUMENTED: TypeDescriptor = TypeDescriptor {
    name: "Undocumented",
    help: None,
    members: &[MemberInfo {
        name: "run",
        kind: MemberKind::Method,
        help: None,
    }],
};

impl Introspect for Undocumented {
    fn descriptor() -> &'static TypeDescriptor {
        &UNDOCUMENTED
    }
}

#[test]
fn given_type_without_metadata_when_inspecting_then_empty_results_not_errors() {
    let inspector = Inspector::empty().with::<Undocumented>();
    let descriptor = inspector.require("undocumented").unwrap();

    assert!(inspector.documented_members(descriptor).is_empty());
    assert_eq!(inspector.help_for(descriptor, "run"), None);
    let tree = inspector.render_tree(descriptor).to_string();
    assert!(tree.starts_with("Undocumented\n"));
    assert!(tree.contains("run (method)"));
}

#[test]
fn given_descriptors_when_inspected_then_tables_untouched() {
    let before: Vec<MemberInfo> = ChangeNotifier::descriptor().members.to_vec();
    let inspector = Inspector::new();

    let _ = inspector.documented_members(ChangeNotifier::descriptor());
    let _ = inspector.render_tree(ChangeNotifier::descriptor());

    assert_eq!(ChangeNotifier::descriptor().members, before.as_slice());
    assert_eq!(
        Point::descriptor().help,
        Some(HelpAttribute::new("Immutable 2D integer coordinate"))
    );
}
