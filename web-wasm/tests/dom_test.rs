//! ブラウザ上でのDOMヘルパーテスト
//!
//! `wasm-pack test --headless --chrome web-wasm` で実行

#![cfg(target_arch = "wasm32")]

use portfolio_common::{Effect, ScrollSpy, SectionId, Theme, UiEvent, UiState, DARK_CLASS};
use portfolio_wasm::dom;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

#[wasm_bindgen_test]
fn test_theme_toggle_adds_and_removes_root_class() {
    let mut state = UiState::new(Theme::Light);
    dom::set_root_class(DARK_CLASS, false).unwrap();

    let effect = state.apply(UiEvent::ToggleTheme).unwrap();
    dom::run_effect(effect);
    assert!(dom::root_has_class(DARK_CLASS));

    let effect = state.apply(UiEvent::ToggleTheme).unwrap();
    dom::run_effect(effect);
    assert!(!dom::root_has_class(DARK_CLASS));

    let classes = document().document_element().unwrap().class_list();
    assert_eq!(classes.length(), 0);
}

/// 本文を空にして、指定の高さのセクションを並べる
fn build_sections(ids: &[SectionId], height: &str) {
    dom::clear_body();
    let document = document();
    let body = document.body().unwrap();
    body.style().set_property("margin", "0").unwrap();
    for id in ids {
        let section = document.create_element("section").unwrap();
        section.set_id(id.as_str());
        section
            .dyn_ref::<web_sys::HtmlElement>()
            .unwrap()
            .style()
            .set_property("height", height)
            .unwrap();
        body.append_child(&section).unwrap();
    }
}

#[wasm_bindgen_test]
fn test_section_bounds_only_existing_sections() {
    build_sections(&[SectionId::Home, SectionId::Skills], "500px");

    let bounds = dom::section_bounds();
    let ids: Vec<_> = bounds.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![SectionId::Home, SectionId::Skills]);
    assert!(bounds.iter().all(|b| b.offset_height == 500.0));
}

#[wasm_bindgen_test]
fn test_scroll_to_missing_section_is_noop() {
    dom::run_effect(Effect::ScrollTo(SectionId::Resume));
}

#[wasm_bindgen_test]
fn test_scroll_spy_follows_window_scroll() {
    build_sections(&SectionId::ALL, "1000px");
    let window = web_sys::window().unwrap();
    let mut spy = ScrollSpy::new();
    let mut state = UiState::new(Theme::Light);

    window.scroll_to_with_x_and_y(0.0, 0.0);
    assert_eq!(dom::observe_scroll(&mut spy), None);

    // 2050 + 100 は3番目のセクション内
    window.scroll_to_with_x_and_y(0.0, 2050.0);
    let changed = dom::observe_scroll(&mut spy).expect("セクションが切り替わらない");
    assert_eq!(changed, SectionId::Projects);

    assert_eq!(state.apply(UiEvent::Scrolled(changed)), None);
    let active: Vec<_> = SectionId::ALL.iter().filter(|&&id| state.is_active(id)).collect();
    assert_eq!(active, vec![&SectionId::Projects]);

    // 同じ位置では通知しない
    assert_eq!(dom::observe_scroll(&mut spy), None);
    window.scroll_to_with_x_and_y(0.0, 0.0);
}
