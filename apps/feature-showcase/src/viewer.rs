//! Plain-text detail viewer for headless hosts.

use glide_foundation::{CloseCallback, DetailRequest, DetailViewer};

/// Label of the button that dismisses the viewer.
pub const CLOSE_BUTTON_LABEL: &str = "Got it, thanks!";

/// Input the open viewer reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerInput<'a> {
    KeyDown(&'a str),
    BackdropClick,
    /// A click inside the dialog itself; never dismisses.
    ContentClick,
    CloseButton,
}

#[derive(Debug)]
struct OpenDetail {
    lines: Vec<String>,
    on_close: CloseCallback,
}

/// Renders the selected item as lines of text.
#[derive(Debug, Default)]
pub struct TextDetailViewer {
    open: Option<OpenDetail>,
    opened_count: usize,
}

impl TextDetailViewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// How many times the viewer has been opened.
    pub fn opened_count(&self) -> usize {
        self.opened_count
    }

    pub fn lines(&self) -> &[String] {
        self.open
            .as_ref()
            .map(|open| open.lines.as_slice())
            .unwrap_or(&[])
    }

    /// The close callback to run for `input`, if it dismisses the viewer.
    ///
    /// Returned rather than invoked so the caller can release its borrow of
    /// the viewer first: closing calls back into [`DetailViewer::close`].
    pub fn dismiss_callback(&self, input: ViewerInput<'_>) -> Option<CloseCallback> {
        let open = self.open.as_ref()?;
        let dismisses = match input {
            ViewerInput::KeyDown(key) => key == "Escape",
            ViewerInput::BackdropClick | ViewerInput::CloseButton => true,
            ViewerInput::ContentClick => false,
        };
        dismisses.then(|| open.on_close.clone())
    }

    fn render(request: &DetailRequest<'_>) -> Vec<String> {
        let mut lines = Vec::with_capacity(request.details.len() + 3);
        lines.push(format!("{} {}", request.icon, request.title));
        lines.push(request.description.to_string());
        lines.extend(request.details.iter().cloned());
        lines.push(format!("[{}]", CLOSE_BUTTON_LABEL));
        lines
    }
}

impl DetailViewer for TextDetailViewer {
    fn open(&mut self, request: DetailRequest<'_>, on_close: CloseCallback) {
        log::debug!("TextDetailViewer: opening '{}'", request.title);
        self.opened_count += 1;
        self.open = Some(OpenDetail {
            lines: Self::render(&request),
            on_close,
        });
    }

    fn close(&mut self) {
        if self.open.take().is_some() {
            log::debug!("TextDetailViewer: closed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glide_foundation::CarouselItem;
    use std::cell::Cell;
    use std::rc::Rc;

    fn open_viewer(closed: &Rc<Cell<usize>>) -> TextDetailViewer {
        let item = CarouselItem::new("Responsive", "Everywhere.", "📱", "First.\n\nSecond.");
        let mut viewer = TextDetailViewer::new();
        let closed = Rc::clone(closed);
        viewer.open(
            DetailRequest::from(&item),
            CloseCallback::new(move || closed.set(closed.get() + 1)),
        );
        viewer
    }

    #[test]
    fn renders_title_description_paragraphs_and_button() {
        let viewer = open_viewer(&Rc::new(Cell::new(0)));
        assert_eq!(
            viewer.lines(),
            [
                "📱 Responsive",
                "Everywhere.",
                "First.",
                "Second.",
                "[Got it, thanks!]",
            ]
        );
    }

    #[test]
    fn escape_backdrop_and_button_dismiss() {
        let closed = Rc::new(Cell::new(0));
        let viewer = open_viewer(&closed);
        for input in [
            ViewerInput::KeyDown("Escape"),
            ViewerInput::BackdropClick,
            ViewerInput::CloseButton,
        ] {
            let callback = viewer.dismiss_callback(input);
            assert!(callback.is_some(), "{:?} should dismiss", input);
            if let Some(callback) = callback {
                callback.invoke();
            }
        }
        assert_eq!(closed.get(), 3);
    }

    #[test]
    fn other_input_keeps_viewer_open() {
        let viewer = open_viewer(&Rc::new(Cell::new(0)));
        assert!(viewer.dismiss_callback(ViewerInput::KeyDown("Enter")).is_none());
        assert!(viewer.dismiss_callback(ViewerInput::ContentClick).is_none());
    }

    #[test]
    fn closed_viewer_ignores_input() {
        let mut viewer = open_viewer(&Rc::new(Cell::new(0)));
        viewer.close();
        assert!(!viewer.is_open());
        assert!(viewer.lines().is_empty());
        assert!(viewer.dismiss_callback(ViewerInput::CloseButton).is_none());
    }
}
