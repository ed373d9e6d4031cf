//! フッター

use leptos::prelude::*;
use portfolio_common::PortfolioContent;

#[component]
pub fn Footer(content: ReadSignal<PortfolioContent>) -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="bg-slate-800 dark:bg-slate-950 text-white py-8">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center">
                    <p class="text-gray-300">
                        {move || format!("© {} {}. All rights reserved.", year, content.get().profile.name)}
                    </p>
                    <p class="text-gray-400 mt-2">"Built with Rust, Leptos and Tailwind CSS"</p>
                </div>
            </div>
        </footer>
    }
}
