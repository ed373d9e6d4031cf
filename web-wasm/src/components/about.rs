//! Aboutセクション

use leptos::prelude::*;
use portfolio_common::{PortfolioContent, SectionId};
use super::section_heading::SectionHeading;

#[component]
pub fn About(content: ReadSignal<PortfolioContent>) -> impl IntoView {
    view! {
        <section id=SectionId::About.as_str() class="py-20 bg-white dark:bg-slate-900">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading title="About Me" />

                <div class="grid md:grid-cols-2 gap-12 items-center">
                    <div class="space-y-6">
                        {move || {
                            content
                                .get()
                                .about
                                .paragraphs
                                .into_iter()
                                .map(|text| view! {
                                    <p class="text-lg text-gray-600 dark:text-gray-300 leading-relaxed">{text}</p>
                                })
                                .collect_view()
                        }}

                        <div class="grid grid-cols-2 gap-4 pt-6">
                            {move || {
                                content
                                    .get()
                                    .about
                                    .highlights
                                    .into_iter()
                                    .map(|h| view! {
                                        <div>
                                            <h4 class="font-semibold text-slate-800 dark:text-white mb-2">{h.label}</h4>
                                            <p class="text-teal-600 dark:text-teal-400 font-medium">{h.value}</p>
                                        </div>
                                    })
                                    .collect_view()
                            }}
                        </div>
                    </div>

                    <div class="relative">
                        <div class="aspect-square rounded-2xl overflow-hidden bg-gradient-to-br from-teal-400 to-blue-500 p-1">
                            <img
                                src=move || content.get().profile.portrait
                                alt=move || content.get().profile.name
                                width="400"
                                height="400"
                                class="w-full h-full rounded-2xl object-cover bg-white"
                            />
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
