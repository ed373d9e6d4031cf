//! 履歴書ダウンロード

use leptos::prelude::*;
use portfolio_common::{PortfolioContent, SectionId};
use super::section_heading::SectionHeading;

#[component]
pub fn ResumeSection(content: ReadSignal<PortfolioContent>) -> impl IntoView {
    let resume = move || content.get().resume;

    view! {
        <section id=SectionId::Resume.as_str() class="py-20 bg-slate-50 dark:bg-slate-800">
            <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                <SectionHeading
                    title="Resume"
                    lead="Download my resume to learn more about my experience, education, and achievements"
                />

                <div class="card bg-white dark:bg-slate-900 border-0 shadow-lg max-w-md mx-auto">
                    <div class="card-content p-8">
                        <div class="w-16 h-16 bg-teal-100 dark:bg-teal-900/30 rounded-full flex items-center justify-center mx-auto mb-6">
                            <i class="icon-download text-teal-600 dark:text-teal-400" />
                        </div>
                        <h3 class="text-xl font-semibold text-slate-800 dark:text-white mb-4">
                            {move || resume().title}
                        </h3>
                        <p class="text-gray-600 dark:text-gray-300 mb-6">{move || resume().summary}</p>
                        {move || match resume().file {
                            Some(file) => view! {
                                <a class="btn btn-primary w-full" href=file download="">
                                    <i class="icon-download mr-2" />
                                    "Download Resume (PDF)"
                                </a>
                            }
                            .into_any(),
                            None => view! {
                                <button class="btn btn-primary w-full">
                                    <i class="icon-download mr-2" />
                                    "Download Resume (PDF)"
                                </button>
                            }
                            .into_any(),
                        }}
                    </div>
                </div>
            </div>
        </section>
    }
}
