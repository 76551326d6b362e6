use glide_foundation::LayoutMeasurer;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::error::{window, PlatformError};

/// Class carried by every rendered carousel card.
pub const CAROUSEL_ITEM_SELECTOR: &str = ".carousel-item";

/// Reads live widths from the DOM on every call.
pub struct DomLayoutMeasurer {
    container: HtmlElement,
    item_selector: String,
}

impl DomLayoutMeasurer {
    pub fn new(container: HtmlElement) -> Self {
        Self {
            container,
            item_selector: CAROUSEL_ITEM_SELECTOR.to_string(),
        }
    }

    /// Measure the element with `id`.
    pub fn for_element_id(id: &str) -> Result<Self, PlatformError> {
        let document = window()?.document().ok_or(PlatformError::NoDocument)?;
        let container = document
            .get_element_by_id(id)
            .ok_or_else(|| PlatformError::ElementNotFound(id.to_string()))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| PlatformError::Js(format!("element '{}' is not an HtmlElement", id)))?;
        Ok(Self::new(container))
    }

    pub fn with_item_selector(mut self, selector: impl Into<String>) -> Self {
        self.item_selector = selector.into();
        self
    }

    pub fn container(&self) -> &HtmlElement {
        &self.container
    }

    fn first_item(&self) -> Option<HtmlElement> {
        let element: Element = self.container.query_selector(&self.item_selector).ok()??;
        element.dyn_into::<HtmlElement>().ok()
    }
}

impl LayoutMeasurer for DomLayoutMeasurer {
    fn container_width(&self) -> f32 {
        self.container.offset_width() as f32
    }

    fn item_width(&self) -> Option<f32> {
        self.first_item().map(|item| item.offset_width() as f32)
    }
}
