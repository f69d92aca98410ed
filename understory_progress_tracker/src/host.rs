// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host seams: the element being tracked and the viewport it scrolls through.
//!
//! A browser binding implements these over DOM nodes and `window`; the
//! [`HeadlessElement`] and [`HeadlessViewport`] handles implement them in
//! memory for tests, benchmarks and demos.

use alloc::rc::Rc;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

use kurbo::{Rect, Size, Vec2};

/// An element whose position is tracked.
///
/// Methods take `&self`: like DOM node references, implementors are expected
/// to be shared handles with interior mutability.
pub trait Element {
    /// The element's bounding box in viewport coordinates, or `None` if it is
    /// not currently laid out (for example, detached from the document).
    fn bounding_box(&self) -> Option<Rect>;

    /// Adds `name` to the element's class list, if not already present.
    fn add_class(&self, name: &str);

    /// Removes `name` from the element's class list, if present.
    fn remove_class(&self, name: &str);

    /// Adds or removes `name` depending on `on`.
    fn toggle_class(&self, name: &str, on: bool) {
        if on {
            self.add_class(name);
        } else {
            self.remove_class(name);
        }
    }
}

/// Source of the current viewport size.
pub trait Viewport {
    /// The viewport's inner size in the same units as element boxes.
    fn size(&self) -> Size;
}

/// A fixed viewport.
impl Viewport for Size {
    fn size(&self) -> Size {
        *self
    }
}

#[derive(Debug, Default)]
struct ElementState {
    rect: Option<Rect>,
    classes: Vec<String>,
}

/// In-memory [`Element`]: a movable box plus an ordered class list.
///
/// Clones share the same underlying element.
///
/// ```
/// use kurbo::{Rect, Vec2};
/// use understory_progress_tracker::{Element, HeadlessElement};
///
/// let el = HeadlessElement::new(Rect::new(0.0, 0.0, 10.0, 10.0));
/// let handle = el.clone();
/// handle.translate(Vec2::new(0.0, -5.0));
/// el.add_class("seen");
/// assert_eq!(el.bounding_box(), Some(Rect::new(0.0, -5.0, 10.0, 5.0)));
/// assert!(handle.has_class("seen"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct HeadlessElement {
    state: Rc<RefCell<ElementState>>,
}

impl HeadlessElement {
    /// Creates an element laid out at `rect`.
    #[must_use]
    pub fn new(rect: Rect) -> Self {
        Self {
            state: Rc::new(RefCell::new(ElementState {
                rect: Some(rect),
                classes: Vec::new(),
            })),
        }
    }

    /// Moves the element to `rect`.
    pub fn set_rect(&self, rect: Rect) {
        self.state.borrow_mut().rect = Some(rect);
    }

    /// Moves the element by `delta`. Scrolling the page down by `d` is
    /// `translate(Vec2::new(0.0, -d))`.
    pub fn translate(&self, delta: Vec2) {
        let mut state = self.state.borrow_mut();
        if let Some(rect) = state.rect {
            state.rect = Some(rect + delta);
        }
    }

    /// Removes the element from layout; [`Element::bounding_box`] returns
    /// `None` until the next [`HeadlessElement::set_rect`].
    pub fn detach(&self) {
        self.state.borrow_mut().rect = None;
    }

    /// Returns `true` if the class list contains `name`.
    #[must_use]
    pub fn has_class(&self, name: &str) -> bool {
        self.state.borrow().classes.iter().any(|c| c == name)
    }

    /// Snapshot of the class list in insertion order.
    #[must_use]
    pub fn classes(&self) -> Vec<String> {
        self.state.borrow().classes.clone()
    }
}

impl Element for HeadlessElement {
    fn bounding_box(&self) -> Option<Rect> {
        self.state.borrow().rect
    }

    fn add_class(&self, name: &str) {
        let mut state = self.state.borrow_mut();
        if !state.classes.iter().any(|c| c == name) {
            state.classes.push(name.to_string());
        }
    }

    fn remove_class(&self, name: &str) {
        self.state.borrow_mut().classes.retain(|c| c != name);
    }
}

/// In-memory [`Viewport`] that can be resized.
///
/// Clones share the same size.
#[derive(Clone, Debug, Default)]
pub struct HeadlessViewport {
    size: Rc<Cell<Size>>,
}

impl HeadlessViewport {
    /// Creates a viewport of the given size.
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            size: Rc::new(Cell::new(size)),
        }
    }

    /// Changes the viewport size.
    pub fn resize(&self, size: Size) {
        self.size.set(size);
    }
}

impl Viewport for HeadlessViewport {
    fn size(&self) -> Size {
        self.size.get()
    }
}
