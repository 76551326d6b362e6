use super::*;

#[test]
fn layout_clones_share_measurements() {
    let layout = TestLayout::new(1200.0, None);
    let view = layout.clone();
    layout.set_item_width(Some(320.0));
    layout.set_container_width(900.0);
    assert_eq!(view.item_width(), Some(320.0));
    assert_eq!(view.container_width(), 900.0);
}

#[test]
fn advance_frame_moves_clock_and_drains_callbacks() {
    let mut host = TestHost::new(1200.0, Some(320.0));
    let seen = Rc::new(Cell::new(0));
    {
        let seen = Rc::clone(&seen);
        host.runtime()
            .register_frame_callback(move |time| seen.set(time));
    }
    assert!(host.has_pending_frames());
    assert_eq!(host.advance_frame(), 1);
    assert_eq!(seen.get(), FRAME_INTERVAL_NANOS);
    assert!(!host.has_pending_frames());
}

#[test]
fn resize_updates_layout_before_notifying() {
    let host = TestHost::new(1200.0, Some(320.0));
    let observed = Rc::new(Cell::new(0.0));
    let layout = host.layout();
    let _registration = {
        let observed = Rc::clone(&observed);
        host.resize_events()
            .register(move |_| observed.set(layout.container_width()))
    };
    assert_eq!(host.resize(640.0), 1);
    assert_eq!(observed.get(), 640.0);
}
