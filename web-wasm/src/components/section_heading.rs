//! セクション見出し（タイトル・下線・リード文）

use leptos::prelude::*;

#[component]
pub fn SectionHeading(
    title: &'static str,
    #[prop(optional)]
    lead: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="text-center mb-16">
            <h2 class="text-4xl font-bold text-slate-800 dark:text-white mb-4">{title}</h2>
            <div class="w-20 h-1 bg-teal-600 mx-auto mb-6"></div>
            {lead.map(|text| view! {
                <p class="text-lg text-gray-600 dark:text-gray-300 max-w-2xl mx-auto">{text}</p>
            })}
        </div>
    }
}
