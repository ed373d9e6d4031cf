//! DOM操作ヘルパー
//!
//! web-sysの呼び出しをここに集め、コンポーネント側は `Effect` を渡すだけにする。

use portfolio_common::{Effect, ScrollSpy, SectionBounds, SectionId};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollIntoViewOptions};

fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// 現在の縦スクロール量（取得できなければ0）
pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// DOM上に存在するセクションのレイアウト情報（文書順）
pub fn section_bounds() -> Vec<SectionBounds> {
    let Some(document) = document() else {
        return Vec::new();
    };

    SectionId::ALL
        .iter()
        .filter_map(|&id| {
            let element: HtmlElement = document.get_element_by_id(id.as_str())?.dyn_into().ok()?;
            Some(SectionBounds::new(
                id,
                element.offset_top() as f64,
                element.offset_height() as f64,
            ))
        })
        .collect()
}

/// 現在のスクロール位置をスパイに反映し、切り替わったセクションを返す
pub fn observe_scroll(spy: &mut ScrollSpy) -> Option<SectionId> {
    spy.update(scroll_y(), &section_bounds())
}

/// 事前レンダリングされた本文を取り除く（マウント前に呼ぶ）
///
/// 残すと各セクションのidが重複し、`get_element_by_id` が古い要素を返す。
pub fn clear_body() {
    if let Some(body) = document().and_then(|d| d.body()) {
        body.set_inner_html("");
    }
}

/// ドキュメントルート(<html>)のクラスを付け外し
pub fn set_root_class(class: &str, enabled: bool) -> Result<(), JsValue> {
    let root = document()
        .and_then(|d| d.document_element())
        .ok_or_else(|| JsValue::from_str("document element not available"))?;
    root.class_list().toggle_with_force(class, enabled)?;
    Ok(())
}

/// ドキュメントルートがクラスを持っているか
pub fn root_has_class(class: &str) -> bool {
    document()
        .and_then(|d| d.document_element())
        .map(|root| root.class_list().contains(class))
        .unwrap_or(false)
}

/// セクションまでスムーズスクロール（要素が無ければ何もしない）
pub fn scroll_to(id: SectionId) {
    let Some(element) = document().and_then(|d| d.get_element_by_id(id.as_str())) else {
        gloo::console::warn!(format!("section not found: {}", id));
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// UI状態遷移が要求するDOM処理を実行
pub fn run_effect(effect: Effect) {
    match effect {
        Effect::SetRootClass { class, enabled } => {
            if let Err(e) = set_root_class(class, enabled) {
                gloo::console::error!(format!("テーマ切替失敗: {:?}", e));
            }
        }
        Effect::ScrollTo(id) => scroll_to(id),
    }
}
