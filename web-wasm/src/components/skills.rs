//! スキル一覧（プログレスバー）

use leptos::prelude::*;
use portfolio_common::{PortfolioContent, SectionId, Skill};
use super::section_heading::SectionHeading;

#[component]
pub fn Skills(content: ReadSignal<PortfolioContent>) -> impl IntoView {
    view! {
        <section id=SectionId::Skills.as_str() class="py-20 bg-white dark:bg-slate-900">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    title="Skills & Expertise"
                    lead="Technologies and tools I work with to bring ideas to life"
                />

                <div class="grid md:grid-cols-2 gap-8">
                    <For
                        each=move || content.get().skills.into_iter().enumerate()
                        key=|(index, skill)| (*index, skill.name.clone(), skill.level)
                        children=|(_, skill)| view! { <SkillBar skill=skill /> }
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillBar(skill: Skill) -> impl IntoView {
    let style = skill.bar_style();

    view! {
        <div class="space-y-2">
            <div class="flex justify-between items-center">
                <span class="text-lg font-medium text-slate-800 dark:text-white">{skill.name}</span>
                <span class="text-sm text-gray-600 dark:text-gray-300">{format!("{}%", skill.level)}</span>
            </div>
            <div class="w-full bg-gray-200 dark:bg-gray-700 rounded-full h-3">
                <div
                    class="bg-gradient-to-r from-teal-500 to-blue-500 h-3 rounded-full transition-all duration-1000 ease-out"
                    style=style
                ></div>
            </div>
        </div>
    }
}
