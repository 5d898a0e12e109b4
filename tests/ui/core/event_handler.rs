use refdesk::ui::core::event_handler::{EventHandler, EventType};

#[test]
fn test_fresh_handler_waits_for_frame_interval() {
    let handler = EventHandler::new();
    assert!(!handler.should_render());
}

#[test]
fn test_mark_rendered_resets_timer() {
    let mut handler = EventHandler::new();
    std::thread::sleep(std::time::Duration::from_millis(20));
    assert!(handler.should_render());
    handler.mark_rendered();
    assert!(!handler.should_render());
}

#[test]
fn test_event_type_is_cloneable() {
    let event = EventType::Resize(80, 24);
    assert!(matches!(event.clone(), EventType::Resize(80, 24)));
}
