use std::fmt;
use std::rc::Rc;

use super::item::CarouselItem;

/// What the detail viewer is asked to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailRequest<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub icon: &'a str,
    pub details: &'a [String],
}

impl<'a> From<&'a CarouselItem> for DetailRequest<'a> {
    fn from(item: &'a CarouselItem) -> Self {
        Self {
            title: &item.title,
            description: &item.short_description,
            icon: &item.icon,
            details: &item.details,
        }
    }
}

/// Handed to the viewer when it opens; invoking it asks the page to close
/// the viewer and clear its selection.
#[derive(Clone)]
pub struct CloseCallback(Rc<dyn Fn()>);

impl CloseCallback {
    pub fn new(callback: impl Fn() + 'static) -> Self {
        Self(Rc::new(callback))
    }

    pub fn invoke(&self) {
        (self.0)()
    }
}

impl fmt::Debug for CloseCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CloseCallback")
    }
}

/// Opaque viewer for a selected item. The carousel never calls it; the page
/// does, in response to a selection.
pub trait DetailViewer {
    fn open(&mut self, request: DetailRequest<'_>, on_close: CloseCallback);

    /// Dismiss without invoking the close callback (the page already knows).
    fn close(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn request_borrows_item_fields() {
        let item = CarouselItem::new("Accessibility", "For all users.", "🌈", "One.\n\nTwo.");
        let request = DetailRequest::from(&item);
        assert_eq!(request.title, "Accessibility");
        assert_eq!(request.description, "For all users.");
        assert_eq!(request.details.len(), 2);
    }

    #[test]
    fn close_callback_clones_share_target() {
        let closed = Rc::new(Cell::new(0));
        let callback = {
            let closed = Rc::clone(&closed);
            CloseCallback::new(move || closed.set(closed.get() + 1))
        };
        callback.clone().invoke();
        callback.invoke();
        assert_eq!(closed.get(), 2);
    }
}
