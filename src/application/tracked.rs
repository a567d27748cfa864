//! Shape with change notification on every setter

use tracing::debug;

use crate::application::notifier::{ChangeEvent, ChangeNotifier, ObserverFn, ObserverHandle};
use crate::domain::{DomainResult, Point, Property, Shape};

/// A shape whose setters notify registered observers after each mutation.
///
/// A setter that fails leaves the shape untouched and notifies nobody.
/// Assigning the current value still notifies.
#[derive(Debug, Default)]
pub struct TrackedShape {
    shape: Shape,
    notifier: ChangeNotifier,
}

impl TrackedShape {
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            notifier: ChangeNotifier::new(),
        }
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn into_shape(self) -> Shape {
        self.shape
    }

    pub fn notifier(&self) -> &ChangeNotifier {
        &self.notifier
    }

    pub fn subscribe<F>(&mut self, callback: F) -> ObserverHandle
    where
        F: Fn(&ChangeEvent<'_>) + 'static,
    {
        self.notifier.subscribe(callback)
    }

    pub fn subscribe_fn(&mut self, callback: ObserverFn) -> ObserverHandle {
        self.notifier.subscribe_fn(callback)
    }

    pub fn unsubscribe(&mut self, handle: ObserverHandle) -> bool {
        self.notifier.unsubscribe(handle)
    }

    pub fn unsubscribe_fn(&mut self, callback: ObserverFn) -> bool {
        self.notifier.unsubscribe_fn(callback)
    }

    pub fn set_center(&mut self, center: Point) {
        self.shape.set_center(center);
        self.changed(Property::Center);
    }

    pub fn set_radius(&mut self, radius: i32) -> DomainResult<()> {
        self.shape.set_radius(radius)?;
        self.changed(Property::Radius);
        Ok(())
    }

    pub fn set_width(&mut self, width: i32) -> DomainResult<()> {
        self.shape.set_width(width)?;
        self.changed(Property::Width);
        Ok(())
    }

    pub fn set_height(&mut self, height: i32) -> DomainResult<()> {
        self.shape.set_height(height)?;
        self.changed(Property::Height);
        Ok(())
    }

    pub fn set_label(&mut self, label: impl Into<String>) -> DomainResult<()> {
        self.shape.set_label(label)?;
        self.changed(Property::Label);
        Ok(())
    }

    fn changed(&self, property: Property) {
        debug!(kind = self.shape.kind_name(), %property, "property changed");
        self.notifier
            .notify(&ChangeEvent::new(&self.shape, property));
    }
}

impl From<Shape> for TrackedShape {
    fn from(shape: Shape) -> Self {
        Self::new(shape)
    }
}
