//! Tests for ChangeNotifier and TrackedShape

use std::cell::RefCell;
use std::rc::Rc;

use shapelab::application::{ChangeEvent, ChangeNotifier, TrackedShape};
use shapelab::domain::{DomainError, Point, Property, Shape};
use shapelab::util::testing;

type Log = Rc<RefCell<Vec<String>>>;

fn recorder(log: &Log, tag: &'static str) -> impl Fn(&ChangeEvent<'_>) + 'static {
    let log = Rc::clone(log);
    move |e| log.borrow_mut().push(format!("{tag}:{}", e.property))
}

fn tracked_circle() -> TrackedShape {
    TrackedShape::new(Shape::circle(Point::new(1, 1), 1))
}

#[test]
fn given_two_observers_when_property_changes_then_both_fire_in_registration_order() {
    // Arrange
    testing::init_test_setup();
    let log: Log = Default::default();
    let mut shape = tracked_circle();
    shape.subscribe(recorder(&log, "a"));
    shape.subscribe(recorder(&log, "b"));

    // Act
    shape.set_radius(10).unwrap();

    // Assert
    assert_eq!(*log.borrow(), vec!["a:Radius", "b:Radius"]);
}

#[test]
fn given_removed_observer_when_property_changes_then_it_no_longer_fires() {
    // Arrange
    let log: Log = Default::default();
    let mut shape = tracked_circle();
    let a = shape.subscribe(recorder(&log, "a"));
    shape.subscribe(recorder(&log, "b"));

    // Act
    assert!(shape.unsubscribe(a));
    shape.set_center(Point::new(5, 5));

    // Assert
    assert_eq!(*log.borrow(), vec!["b:Center"]);
}

#[test]
fn given_handle_never_added_when_unsubscribing_then_silent_no_op() {
    let log: Log = Default::default();
    let mut shape = tracked_circle();
    let a = shape.subscribe(recorder(&log, "a"));
    assert!(shape.unsubscribe(a));

    // second removal of the same handle
    assert!(!shape.unsubscribe(a));

    shape.set_radius(2).unwrap();
    assert!(log.borrow().is_empty());
}

#[test]
fn given_equivalent_closure_when_unsubscribing_its_handle_then_original_keeps_firing() {
    // Arrange
    let log: Log = Default::default();
    let mut shape = tracked_circle();
    shape.subscribe(recorder(&log, "inline"));

    // Act - a lookalike closure is a separate registration with its own handle
    let mut other = ChangeNotifier::new();
    let lookalike = other.subscribe(recorder(&log, "inline"));
    let removed = shape.unsubscribe(lookalike);
    shape.set_radius(3).unwrap();

    // Assert
    assert!(!removed);
    assert_eq!(*log.borrow(), vec!["inline:Radius"]);
}

thread_local! {
    static FN_LOG: RefCell<Vec<&'static str>> = const { RefCell::new(Vec::new()) };
}

fn on_change(_: &ChangeEvent<'_>) {
    FN_LOG.with(|log| log.borrow_mut().push("on_change"));
}

fn on_other_change(_: &ChangeEvent<'_>) {
    FN_LOG.with(|log| log.borrow_mut().push("on_other_change"));
}

#[test]
fn given_named_function_when_unsubscribed_by_function_then_last_registration_removed() {
    // Arrange
    FN_LOG.with(|log| log.borrow_mut().clear());
    let mut shape = tracked_circle();
    shape.subscribe_fn(on_change);
    shape.subscribe_fn(on_other_change);
    shape.subscribe_fn(on_change);

    // Act
    assert!(shape.unsubscribe_fn(on_change));
    shape.set_radius(4).unwrap();

    // Assert - earliest on_change registration survives, order kept
    FN_LOG.with(|log| assert_eq!(*log.borrow(), vec!["on_change", "on_other_change"]));
}

#[test]
fn given_named_function_registered_twice_when_unsubscribed_by_handle_then_exactly_that_one_removed() {
    // Arrange
    FN_LOG.with(|log| log.borrow_mut().clear());
    let mut shape = tracked_circle();
    let first = shape.subscribe_fn(on_change);
    shape.subscribe_fn(on_other_change);
    shape.subscribe_fn(on_change);

    // Act
    assert!(shape.unsubscribe(first));
    shape.set_radius(4).unwrap();

    // Assert - the later on_change registration survives, after on_other_change
    FN_LOG.with(|log| assert_eq!(*log.borrow(), vec!["on_other_change", "on_change"]));
}

#[test]
fn given_function_never_added_when_unsubscribing_then_no_op() {
    let mut notifier = ChangeNotifier::new();
    notifier.subscribe_fn(on_other_change);

    assert!(!notifier.unsubscribe_fn(on_change));
    assert_eq!(notifier.len(), 1);
}

#[test]
fn given_unsupported_setter_when_called_then_shape_unchanged_and_nobody_notified() {
    // Arrange
    let log: Log = Default::default();
    let mut shape = tracked_circle();
    shape.subscribe(recorder(&log, "a"));
    let before = shape.shape().clone();

    // Act
    let result = shape.set_width(9);

    // Assert
    assert!(matches!(
        result,
        Err(DomainError::UnsupportedProperty {
            kind: "Circle",
            property: Property::Width
        })
    ));
    assert_eq!(shape.shape(), &before);
    assert!(log.borrow().is_empty());
}

#[test]
fn given_same_value_when_set_then_still_notifies() {
    let log: Log = Default::default();
    let mut shape = tracked_circle();
    shape.subscribe(recorder(&log, "a"));

    shape.set_radius(1).unwrap();

    assert_eq!(*log.borrow(), vec!["a:Radius"]);
}

#[test]
fn given_observer_when_notified_then_event_source_has_new_value() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut shape = TrackedShape::new(Shape::rectangle(Point::ORIGIN, 1, 1));
    let sink = Rc::clone(&seen);
    shape.subscribe(move |e| sink.borrow_mut().push(e.source.to_string()));

    shape.set_width(5).unwrap();
    shape.set_height(6).unwrap();

    assert_eq!(
        *seen.borrow(),
        vec![
            "Rectangle at (0, 0) size 5 x 1".to_string(),
            "Rectangle at (0, 0) size 5 x 6".to_string(),
        ]
    );
}

#[test]
fn given_cleared_notifier_then_empty() {
    let mut notifier = ChangeNotifier::new();
    let h = notifier.subscribe(|_| {});
    assert!(notifier.contains(h));

    notifier.clear();

    assert!(notifier.is_empty());
    assert!(!notifier.contains(h));
}
