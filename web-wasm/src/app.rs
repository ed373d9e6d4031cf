//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use leptos::task::spawn_local;
use portfolio_common::{
    defaults, Effect as UiEffect, ScrollSpy, Theme, UiEvent, UiState, DARK_CLASS,
};
use crate::api::content::{fetch_content, CONTENT_URL};
use crate::components::{
    about::About,
    contact::ContactSection,
    footer::Footer,
    hero::Hero,
    navigation::Navigation,
    projects::Projects,
    resume::ResumeSection,
    skills::Skills,
};
use crate::dom;

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // 事前レンダリング時のテーマを引き継ぐ（保存はしない）
    let initial_theme = if dom::root_has_class(DARK_CLASS) {
        Theme::Dark
    } else {
        Theme::Light
    };
    dom::run_effect(UiEffect::SetRootClass {
        class: DARK_CLASS,
        enabled: initial_theme.is_dark(),
    });

    let (ui, set_ui) = signal(UiState::new(initial_theme));
    let (content, set_content) = signal(defaults::portfolio());

    let dispatch = move |event: UiEvent| {
        let mut effect = None;
        set_ui.update(|state| effect = state.apply(event));
        if let Some(effect) = effect {
            dom::run_effect(effect);
        }
    };

    // スクロールスパイ
    let spy = StoredValue::new(ScrollSpy::new());
    let handle = window_event_listener(leptos::ev::scroll, move |_| {
        let mut changed = None;
        spy.update_value(|s| changed = dom::observe_scroll(s));
        if let Some(id) = changed {
            dispatch(UiEvent::Scrolled(id));
        }
    });
    on_cleanup(move || handle.remove());

    // content.json があれば差し替え
    spawn_local(async move {
        match fetch_content(CONTENT_URL).await {
            Ok(loaded) => {
                gloo::console::log!(format!(
                    "content.json: {} projects, {} skills",
                    loaded.projects.len(),
                    loaded.skills.len()
                ));
                set_content.set(loaded);
            }
            Err(e) => {
                gloo::console::warn!(format!("content.json を読み込めません、組み込みの内容を使用: {:?}", e));
            }
        }
    });

    view! {
        <div class="min-h-screen transition-colors duration-300">
            <Navigation ui=ui content=content dispatch=dispatch />
            <Hero content=content dispatch=dispatch />
            <About content=content />
            <Projects content=content />
            <Skills content=content />
            <ResumeSection content=content />
            <ContactSection content=content />
            <Footer content=content />
        </div>
    }
}
