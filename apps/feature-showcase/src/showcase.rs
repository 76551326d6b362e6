use std::cell::{Ref, RefCell};
use std::rc::{Rc, Weak};

use glide_core::RuntimeHandle;
use glide_foundation::{
    BoundsReport, CarouselConfig, CarouselItem, CarouselSurface, CloseCallback, DetailRequest,
    DetailViewer, LayoutMeasurer, ResizeEvents, SelectionState,
};

use crate::viewer::{TextDetailViewer, ViewerInput};

/// The feature section of the page: a carousel of items, the page-owned
/// selection, and the detail viewer it drives.
pub struct FeatureShowcase<M, V = TextDetailViewer>
where
    M: LayoutMeasurer + 'static,
    V: DetailViewer + 'static,
{
    surface: CarouselSurface<M>,
    items: Rc<[CarouselItem]>,
    selection: Rc<RefCell<SelectionState>>,
    viewer: Rc<RefCell<V>>,
}

impl<M, V> FeatureShowcase<M, V>
where
    M: LayoutMeasurer + 'static,
    V: DetailViewer + 'static,
{
    pub fn new(
        measurer: M,
        items: Vec<CarouselItem>,
        viewer: V,
        runtime: RuntimeHandle,
        config: CarouselConfig,
    ) -> Self {
        let items: Rc<[CarouselItem]> = items.into();
        let selection = Rc::new(RefCell::new(SelectionState::new(items.len())));
        let viewer = Rc::new(RefCell::new(viewer));
        let surface = CarouselSurface::new(measurer, items.len(), runtime, config);
        {
            let items = Rc::clone(&items);
            let selection = Rc::downgrade(&selection);
            let viewer = Rc::downgrade(&viewer);
            surface.set_on_item_selected(move |index| {
                if let (Some(selection), Some(viewer)) = (selection.upgrade(), viewer.upgrade()) {
                    open_detail(&items, &selection, &viewer, index);
                }
            });
        }
        Self {
            surface,
            items,
            selection,
            viewer,
        }
    }

    pub fn mount(&self, resize_events: &ResizeEvents) -> BoundsReport {
        self.surface.mount(resize_events)
    }

    pub fn unmount(&self) {
        self.surface.unmount();
    }

    pub fn surface(&self) -> &CarouselSurface<M> {
        &self.surface
    }

    pub fn items(&self) -> &[CarouselItem] {
        &self.items
    }

    pub fn selected(&self) -> Option<usize> {
        self.selection.borrow().selected()
    }

    pub fn viewer(&self) -> Ref<'_, V> {
        self.viewer.borrow()
    }

    /// Select an item as if it had been tapped.
    pub fn select(&self, index: usize) -> bool {
        open_detail(&self.items, &self.selection, &self.viewer, index)
    }

    /// Close the viewer and clear the selection.
    pub fn close_detail(&self) {
        close_detail(&self.selection, &self.viewer);
    }
}

impl<M> FeatureShowcase<M, TextDetailViewer>
where
    M: LayoutMeasurer + 'static,
{
    /// Route input to the open viewer. Returns whether it closed.
    pub fn viewer_input(&self, input: ViewerInput<'_>) -> bool {
        let on_close = self.viewer.borrow().dismiss_callback(input);
        match on_close {
            Some(on_close) => {
                on_close.invoke();
                true
            }
            None => false,
        }
    }
}

impl<M, V> AsRef<CarouselSurface<M>> for FeatureShowcase<M, V>
where
    M: LayoutMeasurer + 'static,
    V: DetailViewer + 'static,
{
    fn as_ref(&self) -> &CarouselSurface<M> {
        &self.surface
    }
}

fn open_detail<V: DetailViewer + 'static>(
    items: &[CarouselItem],
    selection: &Rc<RefCell<SelectionState>>,
    viewer: &Rc<RefCell<V>>,
    index: usize,
) -> bool {
    if !selection.borrow_mut().select(index) {
        return false;
    }
    let Some(item) = items.get(index) else {
        return false;
    };
    let on_close = {
        let selection: Weak<RefCell<SelectionState>> = Rc::downgrade(selection);
        let viewer: Weak<RefCell<V>> = Rc::downgrade(viewer);
        CloseCallback::new(move || {
            if let (Some(selection), Some(viewer)) = (selection.upgrade(), viewer.upgrade()) {
                close_detail(&selection, &viewer);
            }
        })
    };
    viewer
        .borrow_mut()
        .open(DetailRequest::from(item), on_close);
    true
}

fn close_detail<V: DetailViewer>(selection: &RefCell<SelectionState>, viewer: &RefCell<V>) {
    if let Some(index) = selection.borrow_mut().clear() {
        log::debug!("FeatureShowcase: closed detail for item {}", index);
    }
    viewer.borrow_mut().close();
}
