#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use js_sys::{Array, Function, JSON, Object, Reflect};
use marketplace_page_wasm::application::{MountOutcome, PageComponent, PageController};
use marketplace_page_wasm::domain::page::NoticePolicy;
use marketplace_page_wasm::presentation::components::{
    ActiveLinks, EarningsChart, NoticeDismissal, OrderStatusChart, RatingDisplay, ScrollToTop, BUTTON_ID,
};
use marketplace_page_wasm::{MarketplacePage, boot_page, dispose_page};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlElement, HtmlSelectElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Fresh fixture container appended to the body; removed by the caller.
fn fixture(html: &str) -> Element {
    let doc = document();
    let root = doc.create_element("div").unwrap();
    root.set_inner_html(html);
    doc.body().unwrap().append_child(&root).unwrap();
    root
}

fn display_of(element: &Element) -> String {
    element
        .dyn_ref::<HtmlElement>()
        .unwrap()
        .style()
        .get_property_value("display")
        .unwrap()
}

fn remove_global(name: &str) {
    Reflect::delete_property(&js_sys::global(), &JsValue::from(name)).unwrap();
}

/// Stand-in for the Chart.js global. Every construction is recorded as
/// `{ target, config, destroyed }`.
fn install_chart_stub() -> Array {
    let global = js_sys::global();
    let calls = Array::new();
    Reflect::set(&global, &JsValue::from("chartCalls"), &calls).unwrap();
    let chart = Function::new_with_args(
        "target, config",
        "const call = { target, config, destroyed: false };
         globalThis.chartCalls.push(call);
         this.destroy = () => { call.destroyed = true; };",
    );
    Reflect::set(&global, &JsValue::from("Chart"), &chart).unwrap();
    calls
}

fn uninstall_chart_stub() {
    remove_global("Chart");
    remove_global("chartCalls");
}

fn field(value: &JsValue, path: &[&str]) -> JsValue {
    path.iter()
        .fold(value.clone(), |current, key| Reflect::get(&current, &JsValue::from(*key)).unwrap())
}

fn json_at(value: &JsValue, path: &[&str]) -> String {
    JSON::stringify(&field(value, path)).unwrap().as_string().unwrap()
}

fn scroll_buttons() -> u32 {
    document()
        .query_selector_all(&format!("#{}", BUTTON_ID))
        .unwrap()
        .length()
}

/// Make the document report `readyState === "loading"` until restored.
fn pretend_document_is_loading() {
    let descriptor = Object::new();
    Reflect::set(&descriptor, &JsValue::from("value"), &JsValue::from("loading")).unwrap();
    Reflect::set(&descriptor, &JsValue::from("configurable"), &JsValue::TRUE).unwrap();
    let doc = document();
    Reflect::define_property(doc.unchecked_ref::<Object>(), &JsValue::from("readyState"), &descriptor).unwrap();
}

fn restore_ready_state() {
    let doc = document();
    Reflect::delete_property(doc.unchecked_ref::<Object>(), &JsValue::from("readyState")).unwrap();
}

fn fire_dom_content_loaded() {
    document()
        .dispatch_event(&web_sys::Event::new("DOMContentLoaded").unwrap())
        .unwrap();
}

#[wasm_bindgen_test]
fn rating_display_tracks_the_select() {
    let root = fixture(
        r#"<select id="id_rating">
             <option value="">--</option>
             <option value="3" selected>3</option>
             <option value="6">6</option>
           </select>"#,
    );
    let mut rating = RatingDisplay::new("id_rating");
    assert_eq!(rating.mount().unwrap(), MountOutcome::Mounted);

    let select = document()
        .get_element_by_id("id_rating")
        .unwrap()
        .dyn_into::<HtmlSelectElement>()
        .unwrap();
    let display = select.next_element_sibling().unwrap();
    assert!(display.class_list().contains("rating-stars"));
    assert_eq!(display.text_content().unwrap(), "⭐⭐⭐ (3/5)");

    select.set_value("6");
    select
        .dispatch_event(&web_sys::Event::new("change").unwrap())
        .unwrap();
    assert_eq!(display.text_content().unwrap(), "");

    rating.dispose();
    assert!(select.next_element_sibling().is_none());
    root.remove();
}

#[wasm_bindgen_test]
fn rating_display_is_absent_without_input() {
    let mut rating = RatingDisplay::new("no-such-rating");
    assert_eq!(rating.mount().unwrap(), MountOutcome::Absent);
}

#[wasm_bindgen_test]
fn nav_links_matching_the_page_are_marked() {
    let here = web_sys::window().unwrap().location().href().unwrap();
    let root = fixture(&format!(
        r#"<ul class="navbar-nav">
             <li><a class="nav-link" id="here" href="{here}">Here</a></li>
             <li><a class="nav-link" id="elsewhere" href="{here}?page=2">Elsewhere</a></li>
             <li><a class="nav-link active" id="server-marked" href="{here}">Also here</a></li>
           </ul>"#
    ));
    let mut links = ActiveLinks::new(".navbar-nav .nav-link");
    assert_eq!(links.mount().unwrap(), MountOutcome::Mounted);
    assert_eq!(links.marked(), 1);

    let doc = document();
    let current = doc.get_element_by_id("here").unwrap();
    let other = doc.get_element_by_id("elsewhere").unwrap();
    assert!(current.class_list().contains("active"));
    assert_eq!(current.get_attribute("aria-current").as_deref(), Some("page"));
    assert!(!other.class_list().contains("active"));
    assert!(other.get_attribute("aria-current").is_none());

    links.dispose();
    assert!(!current.class_list().contains("active"));
    assert!(doc.get_element_by_id("server-marked").unwrap().class_list().contains("active"));
    root.remove();
}

#[wasm_bindgen_test]
async fn informational_notices_hide_and_danger_stays() {
    let root = fixture(
        r#"<div class="alert alert-info" id="info">Saved</div>
           <div class="alert alert-danger" id="danger">Payment failed</div>"#,
    );
    let mut notices = NoticeDismissal::new(".alert", NoticePolicy::default(), 50);
    assert_eq!(notices.mount().unwrap(), MountOutcome::Mounted);
    assert_eq!(notices.scheduled(), 1);

    let doc = document();
    let info = doc.get_element_by_id("info").unwrap();
    let danger = doc.get_element_by_id("danger").unwrap();
    assert_eq!(display_of(&info), "");

    TimeoutFuture::new(150).await;
    assert_eq!(display_of(&info), "none");
    assert_eq!(display_of(&danger), "");

    notices.dispose();
    root.remove();
}

#[wasm_bindgen_test]
async fn disposed_notices_are_never_dismissed() {
    let root = fixture(r#"<div class="alert alert-success" id="kept">Welcome</div>"#);
    let mut notices = NoticeDismissal::new(".alert", NoticePolicy::default(), 50);
    notices.mount().unwrap();
    notices.dispose();

    TimeoutFuture::new(150).await;
    let kept = document().get_element_by_id("kept").unwrap();
    assert_eq!(display_of(&kept), "");
    root.remove();
}

#[wasm_bindgen_test]
fn scroll_button_is_created_hidden_and_removed_on_dispose() {
    let mut scroll = ScrollToTop::new(300);
    assert_eq!(scroll.mount().unwrap(), MountOutcome::Mounted);

    let button = document().get_element_by_id(BUTTON_ID).unwrap();
    assert_eq!(button.text_content().unwrap(), "▲");
    assert_eq!(display_of(&button), "none");

    scroll.dispose();
    assert!(document().get_element_by_id(BUTTON_ID).is_none());
}

#[wasm_bindgen_test]
fn chart_binders_without_targets_are_absent() {
    assert_eq!(OrderStatusChart::new("missingOrderChart").mount().unwrap(), MountOutcome::Absent);
    assert_eq!(EarningsChart::new("missingEarningsChart").mount().unwrap(), MountOutcome::Absent);
}

#[wasm_bindgen_test]
fn chart_target_outside_a_data_container_is_absent() {
    let root = fixture(r#"<canvas id="lonelyEarnings"></canvas>"#);
    assert_eq!(EarningsChart::new("lonelyEarnings").mount().unwrap(), MountOutcome::Absent);
    root.remove();
}

#[wasm_bindgen_test]
fn malformed_earnings_do_not_stop_the_rest_of_the_page() {
    let root = fixture(
        r#"<div data-earnings-data data-months="['Jan', 'Feb']" data-earnings="[1, 2]">
             <canvas id="brokenEarnings"></canvas>
           </div>
           <select id="isolated_rating"><option value="4" selected>4</option></select>"#,
    );
    let components: Vec<Box<dyn PageComponent>> = vec![
        Box::new(EarningsChart::new("brokenEarnings")),
        Box::new(RatingDisplay::new("isolated_rating")),
    ];
    let mut controller = PageController::new(components);
    let report = controller.mount_all();

    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].0, "earnings-chart");
    assert_eq!(report.mounted, ["rating-display"]);

    let display = document()
        .get_element_by_id("isolated_rating")
        .unwrap()
        .next_element_sibling()
        .unwrap();
    assert_eq!(display.text_content().unwrap(), "⭐⭐⭐⭐ (4/5)");

    controller.dispose();
    root.remove();
}

#[wasm_bindgen_test]
fn order_chart_is_handed_to_chart_js_and_destroyed_on_dispose() {
    let calls = install_chart_stub();
    let root = fixture(
        r#"<div data-order-stats data-pending="5" data-in-progress="8" data-completed="12" data-cancelled="n/a">
             <canvas id="statsChart"></canvas>
           </div>"#,
    );
    let mut chart = OrderStatusChart::new("statsChart");
    assert_eq!(chart.mount().unwrap(), MountOutcome::Mounted);

    assert_eq!(calls.length(), 1);
    let call = calls.get(0);
    let target = field(&call, &["target"]).dyn_into::<Element>().unwrap();
    assert_eq!(target.id(), "statsChart");
    assert_eq!(json_at(&call, &["config", "type"]), r#""doughnut""#);
    assert_eq!(
        json_at(&call, &["config", "data", "labels"]),
        r#"["Completed","In Progress","Pending","Cancelled"]"#
    );
    assert_eq!(json_at(&call, &["config", "data", "datasets", "0", "data"]), "[12,8,5,0]");
    assert_eq!(field(&call, &["destroyed"]).as_bool(), Some(false));

    chart.dispose();
    assert_eq!(field(&call, &["destroyed"]).as_bool(), Some(true));

    uninstall_chart_stub();
    root.remove();
}

#[wasm_bindgen_test]
fn earnings_chart_passes_the_series_through() {
    let calls = install_chart_stub();
    let root = fixture(
        r#"<div data-earnings-data data-months='["Jan","Feb"]' data-earnings='["10.50", 7]'>
             <canvas id="trendChart"></canvas>
           </div>"#,
    );
    let mut chart = EarningsChart::new("trendChart");
    assert_eq!(chart.mount().unwrap(), MountOutcome::Mounted);

    let call = calls.get(0);
    assert_eq!(json_at(&call, &["config", "type"]), r#""line""#);
    assert_eq!(json_at(&call, &["config", "data", "labels"]), r#"["Jan","Feb"]"#);
    assert_eq!(json_at(&call, &["config", "data", "datasets", "0", "data"]), "[10.5,7]");
    assert_eq!(json_at(&call, &["config", "options", "scales", "y", "beginAtZero"]), "true");

    chart.dispose();
    assert_eq!(field(&call, &["destroyed"]).as_bool(), Some(true));

    uninstall_chart_stub();
    root.remove();
}

#[wasm_bindgen_test]
async fn fading_notice_is_hidden_without_the_toolkit() {
    remove_global("bootstrap");
    let root = fixture(r#"<div class="alert alert-success fade show" id="fading">Saved</div>"#);
    let mut notices = NoticeDismissal::new("#fading", NoticePolicy::default(), 20);
    assert_eq!(notices.mount().unwrap(), MountOutcome::Mounted);

    TimeoutFuture::new(100).await;
    let fading = document().get_element_by_id("fading").unwrap();
    assert_eq!(display_of(&fading), "none");

    notices.dispose();
    root.remove();
}

#[wasm_bindgen_test]
async fn fading_notice_is_closed_by_the_toolkit() {
    let alert = Function::new_with_args("element", "this.close = () => element.classList.add('closed-by-toolkit');");
    let toolkit = Object::new();
    Reflect::set(&toolkit, &JsValue::from("Alert"), &alert).unwrap();
    Reflect::set(&js_sys::global(), &JsValue::from("bootstrap"), &toolkit).unwrap();

    let root = fixture(r#"<div class="alert alert-info fade show" id="toolkit-fading">Saved</div>"#);
    let mut notices = NoticeDismissal::new("#toolkit-fading", NoticePolicy::default(), 20);
    notices.mount().unwrap();

    TimeoutFuture::new(100).await;
    let fading = document().get_element_by_id("toolkit-fading").unwrap();
    assert!(fading.class_list().contains("closed-by-toolkit"));
    assert_eq!(display_of(&fading), "");

    notices.dispose();
    remove_global("bootstrap");
    root.remove();
}

#[wasm_bindgen_test]
fn booting_again_replaces_the_previous_page() {
    boot_page(None).unwrap();
    let first = document().get_element_by_id(BUTTON_ID).unwrap();

    boot_page(None).unwrap();
    assert!(!first.is_connected());
    assert_eq!(scroll_buttons(), 1);

    dispose_page();
    assert_eq!(scroll_buttons(), 0);
}

#[wasm_bindgen_test]
fn boot_waits_for_the_dom_while_loading() {
    pretend_document_is_loading();
    boot_page(None).unwrap();
    assert_eq!(scroll_buttons(), 0);

    fire_dom_content_loaded();
    restore_ready_state();
    assert_eq!(scroll_buttons(), 1);

    dispose_page();
    assert_eq!(scroll_buttons(), 0);
}

#[wasm_bindgen_test]
fn dispose_cancels_a_boot_still_waiting_for_the_dom() {
    pretend_document_is_loading();
    boot_page(None).unwrap();
    dispose_page();

    fire_dom_content_loaded();
    restore_ready_state();
    assert_eq!(scroll_buttons(), 0);
}

#[wasm_bindgen_test]
fn disposed_page_cannot_be_mounted_again() {
    let mut page = MarketplacePage::new(None).unwrap();
    page.dispose();

    assert_eq!(page.mount().length(), 0);
    assert_eq!(page.mounted_components().length(), 0);
    assert_eq!(scroll_buttons(), 0);
}
