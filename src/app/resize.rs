use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use eframe::egui::Vec2;
use tracing::trace;

#[derive(Default)]
struct BusInner {
    next_id: u64,
    pending: BTreeMap<u64, bool>,
    last_viewport: Option<Vec2>,
}

/// Viewport-resize fan-out for the charts of expanded rows.
///
/// Each subscriber owns a [`ResizeSubscription`]; the bus only keeps a
/// pending flag per live subscription.
#[derive(Clone, Default)]
pub struct ResizeBus {
    inner: Rc<RefCell<BusInner>>,
}

impl ResizeBus {
    pub fn subscribe(&self) -> ResizeSubscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.pending.insert(id, false);

        ResizeSubscription {
            id,
            bus: Rc::downgrade(&self.inner),
        }
    }

    #[cfg(test)]
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().pending.len()
    }

    /// Records the current viewport size. Returns `true` when it differs
    /// from the previous observation, in which case every subscription is
    /// marked pending.
    pub fn notify_viewport(&self, size: Vec2) -> bool {
        let mut inner = self.inner.borrow_mut();
        let changed = inner
            .last_viewport
            .is_some_and(|last| (last - size).length_sq() > 0.25);
        inner.last_viewport = Some(size);

        if changed {
            trace!(width = size.x, height = size.y, subscribers = inner.pending.len(), "viewport resized");
            for pending in inner.pending.values_mut() {
                *pending = true;
            }
        }
        changed
    }
}

pub struct ResizeSubscription {
    id: u64,
    bus: Weak<RefCell<BusInner>>,
}

impl ResizeSubscription {
    /// Consumes the pending flag.
    pub fn take_pending(&self) -> bool {
        let Some(bus) = self.bus.upgrade() else {
            return false;
        };
        let mut inner = bus.borrow_mut();
        inner
            .pending
            .get_mut(&self.id)
            .map(std::mem::take)
            .unwrap_or(false)
    }
}

impl Drop for ResizeSubscription {
    fn drop(&mut self) {
        if let Some(bus) = self.bus.upgrade() {
            bus.borrow_mut().pending.remove(&self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use eframe::egui::vec2;

    use super::*;

    #[test]
    fn first_observation_is_not_a_resize() {
        let bus = ResizeBus::default();
        let subscription = bus.subscribe();
        assert!(!bus.notify_viewport(vec2(800.0, 600.0)));
        assert!(!subscription.take_pending());
    }

    #[test]
    fn resize_marks_every_subscriber_once() {
        let bus = ResizeBus::default();
        let first = bus.subscribe();
        let second = bus.subscribe();

        bus.notify_viewport(vec2(800.0, 600.0));
        assert!(bus.notify_viewport(vec2(1024.0, 600.0)));

        assert!(first.take_pending());
        assert!(!first.take_pending());
        assert!(second.take_pending());
    }

    #[test]
    fn unchanged_viewport_does_not_notify() {
        let bus = ResizeBus::default();
        let subscription = bus.subscribe();
        bus.notify_viewport(vec2(800.0, 600.0));
        assert!(!bus.notify_viewport(vec2(800.0, 600.0)));
        assert!(!subscription.take_pending());
    }

    #[test]
    fn dropping_subscription_unregisters() {
        let bus = ResizeBus::default();
        for _ in 0..50 {
            let subscription = bus.subscribe();
            assert_eq!(bus.subscriber_count(), 1);
            drop(subscription);
        }
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn subscription_outliving_bus_is_inert() {
        let bus = ResizeBus::default();
        let subscription = bus.subscribe();
        drop(bus);
        assert!(!subscription.take_pending());
    }
}
