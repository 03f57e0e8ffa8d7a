use kline_panel::event_utils::on_window_resize;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_test::*;
use web_sys::Event;
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn fire_resize() {
    let window = web_sys::window().unwrap();
    window.dispatch_event(&Event::new("resize").unwrap()).unwrap();
}

#[wasm_bindgen_test]
fn resize_listener_stops_after_remove() {
    let hits = Rc::new(Cell::new(0));
    let counter = Rc::clone(&hits);
    let listener = on_window_resize(move || counter.set(counter.get() + 1));

    fire_resize();
    fire_resize();
    assert_eq!(hits.get(), 2);

    listener.remove();
    fire_resize();
    assert_eq!(hits.get(), 2);
}
