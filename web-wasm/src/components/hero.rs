//! ヒーローセクション

use leptos::prelude::*;
use portfolio_common::{PortfolioContent, SectionId, UiEvent};

#[component]
pub fn Hero<F>(content: ReadSignal<PortfolioContent>, dispatch: F) -> impl IntoView
where
    F: Fn(UiEvent) + Copy + Send + Sync + 'static,
{
    let profile = move || content.get().profile;

    view! {
        <section
            id=SectionId::Home.as_str()
            class="min-h-screen flex items-center justify-center bg-gradient-to-br from-slate-50 to-slate-100 dark:from-slate-900 dark:to-slate-800 pt-20"
        >
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                <div class="animate-fade-in-up">
                    <div class="mb-8">
                        <div class="w-32 h-32 mx-auto mb-6 rounded-full bg-gradient-to-r from-teal-400 to-blue-500 p-1">
                            <img
                                src=move || profile().photo
                                alt=move || profile().name
                                width="128"
                                height="128"
                                class="w-full h-full rounded-full object-cover bg-white"
                            />
                        </div>
                    </div>
                    <h1 class="text-5xl md:text-7xl font-bold text-slate-800 dark:text-white mb-6">
                        "Hi, I'm "
                        <span class="text-transparent bg-clip-text bg-gradient-to-r from-teal-600 to-blue-600">
                            {move || profile().first_name}
                        </span>
                    </h1>
                    <p class="text-xl md:text-2xl text-gray-600 dark:text-gray-300 mb-8 max-w-3xl mx-auto">
                        {move || profile().tagline}
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center">
                        <button
                            class="btn btn-primary px-8 py-3 text-lg"
                            on:click=move |_| dispatch(UiEvent::NavigateTo(SectionId::Projects))
                        >
                            "View My Work"
                        </button>
                        <button
                            class="btn btn-outline px-8 py-3 text-lg"
                            on:click=move |_| dispatch(UiEvent::NavigateTo(SectionId::Contact))
                        >
                            "Get In Touch"
                        </button>
                    </div>
                </div>
                <div class="absolute bottom-8 left-1/2 transform -translate-x-1/2 animate-bounce">
                    <i class="icon-chevron-down text-gray-400" />
                </div>
            </div>
        </section>
    }
}
