//! ナビゲーションバー（デスクトップ・モバイル）

use leptos::prelude::*;
use portfolio_common::{PortfolioContent, SectionId, UiEvent, UiState};

/// デスクトップ用ナビ項目のクラス
pub fn nav_item_class(active: bool) -> &'static str {
    if active {
        "capitalize transition-colors duration-200 text-teal-600 dark:text-teal-400"
    } else {
        "capitalize transition-colors duration-200 text-gray-600 dark:text-gray-300 hover:text-teal-600 dark:hover:text-teal-400"
    }
}

#[component]
pub fn Navigation<F>(
    ui: ReadSignal<UiState>,
    content: ReadSignal<PortfolioContent>,
    dispatch: F,
) -> impl IntoView
where
    F: Fn(UiEvent) + Copy + Send + Sync + 'static,
{
    let is_dark = move || ui.get().theme.is_dark();
    let menu_open = move || ui.get().mobile_menu_open;

    view! {
        <nav class="fixed top-0 w-full bg-white/80 dark:bg-slate-900/80 backdrop-blur-md z-50 border-b border-gray-200 dark:border-gray-700">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center py-4">
                    <div class="text-2xl font-bold text-slate-800 dark:text-white">
                        {move || content.get().profile.name}
                    </div>

                    <div class="hidden md:flex space-x-8">
                        {SectionId::ALL
                            .into_iter()
                            .map(move |id| {
                                view! {
                                    <button
                                        class=move || nav_item_class(ui.get().is_active(id))
                                        on:click=move |_| dispatch(UiEvent::NavigateTo(id))
                                    >
                                        {id.as_str()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="flex items-center space-x-4">
                        <button
                            class="btn-icon rounded-full"
                            aria-label="Toggle theme"
                            on:click=move |_| dispatch(UiEvent::ToggleTheme)
                        >
                            <i class=move || if is_dark() { "icon-sun" } else { "icon-moon" } />
                        </button>

                        <button
                            class="btn-icon md:hidden"
                            aria-label="Toggle menu"
                            on:click=move |_| dispatch(UiEvent::ToggleMobileMenu)
                        >
                            <i class=move || if menu_open() { "icon-x" } else { "icon-menu" } />
                        </button>
                    </div>
                </div>
            </div>

            <Show when=menu_open>
                <div class="md:hidden bg-white dark:bg-slate-900 border-t border-gray-200 dark:border-gray-700">
                    <div class="px-4 py-2 space-y-2">
                        {SectionId::ALL
                            .into_iter()
                            .map(move |id| {
                                view! {
                                    <button
                                        class="block w-full text-left px-3 py-2 capitalize text-gray-600 dark:text-gray-300 hover:text-teal-600 dark:hover:text-teal-400 transition-colors duration-200"
                                        on:click=move |_| dispatch(UiEvent::NavigateTo(id))
                                    >
                                        {id.as_str()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </Show>
        </nav>
    }
}
