//! Tests for Point

use rstest::rstest;

use shapelab::domain::{DomainError, Point};

#[rstest]
#[case(0, 0)]
#[case(3, 4)]
#[case(-7, 12)]
#[case(i32::MIN, i32::MAX)]
fn given_coordinates_when_constructing_then_reads_back_same_values(#[case] x: i32, #[case] y: i32) {
    let p = Point::new(x, y);
    assert_eq!((p.x(), p.y()), (x, y));
    assert_eq!(p.coordinate(0), Ok(x));
    assert_eq!(p.coordinate(1), Ok(y));
}

#[test]
fn given_points_when_compared_then_equality_is_structural() {
    let a = Point::new(1, 2);
    let b = Point::new(1, 2);
    let c = Point::new(1, 2);

    // reflexive, symmetric, transitive
    assert_eq!(a, a);
    assert_eq!(a, b);
    assert_eq!(b, a);
    assert_eq!(b, c);
    assert_eq!(a, c);

    assert_ne!(a, Point::new(2, 1));
    assert_ne!(a, Point::new(1, 3));
}

#[test]
fn given_copied_point_when_original_rebound_then_copy_is_independent() {
    let mut original = Point::new(1, 1);
    let copy = original;

    original = original.offset(5, 5);

    assert_eq!(copy, Point::new(1, 1));
    assert_eq!(original, Point::new(6, 6));
}

#[test]
fn given_points_when_sorted_then_lexicographic_on_x_then_y() {
    let mut points = vec![
        Point::new(10, 100),
        Point::new(3, 4),
        Point::new(10, 1),
        Point::new(-1, 50),
    ];

    points.sort();

    assert_eq!(
        points,
        vec![
            Point::new(-1, 50),
            Point::new(3, 4),
            Point::new(10, 1),
            Point::new(10, 100),
        ]
    );
}

#[rstest]
#[case(2)]
#[case(3)]
#[case(-1)]
#[case(i64::MAX)]
#[case(i64::MIN)]
fn given_invalid_index_when_reading_coordinate_then_out_of_range(#[case] index: i64) {
    let err = Point::new(1, 2).coordinate(index).unwrap_err();
    assert_eq!(err, DomainError::IndexOutOfRange { index, len: 2 });
}

#[rstest]
#[case("3,4", Point::new(3, 4))]
#[case(" ( -3 , 4 ) ", Point::new(-3, 4))]
#[case("(10, 100)", Point::new(10, 100))]
fn given_console_text_when_parsing_then_yields_point(#[case] input: &str, #[case] expected: Point) {
    assert_eq!(input.parse::<Point>().unwrap(), expected);
}

#[rstest]
#[case("")]
#[case("3")]
#[case("3,4,5")]
#[case("x,4")]
#[case("99999999999,1")]
fn given_malformed_text_when_parsing_then_invalid_point(#[case] input: &str) {
    let err = input.parse::<Point>().unwrap_err();
    assert!(matches!(err, DomainError::InvalidPoint { .. }), "{err:?}");
}

#[rstest]
#[case(Point::new(i32::MAX, 0), 1, 0, Point::new(i32::MAX, 0))]
#[case(Point::new(0, i32::MIN), 0, -1, Point::new(0, i32::MIN))]
#[case(Point::new(i32::MAX - 1, -5), i32::MAX, i32::MIN, Point::new(i32::MAX, i32::MIN))]
#[case(Point::new(-3, 4), 3, -4, Point::ORIGIN)]
fn given_offset_near_i32_bounds_when_shifting_then_saturates(
    #[case] start: Point,
    #[case] dx: i32,
    #[case] dy: i32,
    #[case] expected: Point,
) {
    assert_eq!(start.offset(dx, dy), expected);
}
