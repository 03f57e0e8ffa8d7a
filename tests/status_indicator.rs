use gloo_timers::future::sleep;
use kline_panel::presentation::components::{BURST_CLASS, Burst, Status, StatusIndicator};
use leptos::*;
use std::time::Duration;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn mount_indicator(status: Status) -> HtmlElement {
    let host = document().create_element("div").unwrap().unchecked_into::<HtmlElement>();
    document().body().unwrap().append_child(&host).unwrap();
    mount_to(host.clone(), move || view! { <StatusIndicator status=status/> });
    host
}

fn refresh_icon(host: &HtmlElement) -> HtmlElement {
    host.query_selector(".refresh-icon").unwrap().unwrap().unchecked_into::<HtmlElement>()
}

#[wasm_bindgen_test(async)]
async fn burst_resets_after_its_duration() {
    let burst = Burst::new();
    burst.trigger();
    assert!(burst.is_active());

    sleep(Duration::from_millis(650)).await;
    assert!(!burst.is_active());
}

#[wasm_bindgen_test(async)]
async fn second_trigger_keeps_first_deadline() {
    let burst = Burst::new();
    burst.trigger();
    sleep(Duration::from_millis(300)).await;
    burst.trigger();
    assert!(burst.is_active());

    // 650 ms after the first trigger, 350 ms after the second
    sleep(Duration::from_millis(350)).await;
    assert!(!burst.is_active());
}

#[wasm_bindgen_test(async)]
async fn cancelled_burst_is_never_reset() {
    let burst = Burst::new();
    burst.trigger();
    burst.cancel();

    sleep(Duration::from_millis(700)).await;
    assert!(burst.is_active());
}

#[wasm_bindgen_test(async)]
async fn clicking_refresh_icon_spins_it_once() {
    let host = mount_indicator(Status::Ok);
    assert!(host.query_selector(".breathing-circle--green").unwrap().is_some());

    let icon = refresh_icon(&host);
    assert!(!icon.class_name().contains(BURST_CLASS));

    icon.click();
    sleep(Duration::from_millis(10)).await;
    assert!(icon.class_name().contains(BURST_CLASS));

    sleep(Duration::from_millis(290)).await;
    icon.click();
    sleep(Duration::from_millis(350)).await;
    assert!(!icon.class_name().contains(BURST_CLASS));

    host.remove();
}

#[wasm_bindgen_test]
fn status_picks_circle_color() {
    let host = mount_indicator(Status::Error);
    assert!(host.query_selector(".breathing-circle--red").unwrap().is_some());
    assert_eq!(host.query_selector(".status-indicator").unwrap().unwrap().get_attribute("title").as_deref(), Some("error"));
    host.remove();
}
