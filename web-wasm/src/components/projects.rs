//! プロジェクトギャラリー

use leptos::prelude::*;
use portfolio_common::{PortfolioContent, Project, SectionId};
use super::section_heading::SectionHeading;

#[component]
pub fn Projects(content: ReadSignal<PortfolioContent>) -> impl IntoView {
    view! {
        <section id=SectionId::Projects.as_str() class="py-20 bg-slate-50 dark:bg-slate-800">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    title="Featured Projects"
                    lead="Here are some of my recent projects that showcase my skills in full-stack development and AI/ML"
                />

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    <For
                        each=move || content.get().projects.into_iter().enumerate()
                        key=|(index, project)| (*index, project.title.clone())
                        children=|(_, project)| view! { <ProjectCard project=project /> }
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let image = project.image_src().to_string();

    view! {
        <div class="card group hover:shadow-xl transition-all duration-300 transform hover:-translate-y-2 bg-white dark:bg-slate-900 border-0 shadow-lg">
            <div class="relative overflow-hidden rounded-t-lg">
                <img
                    src=image
                    alt=project.title.clone()
                    width="400"
                    height="300"
                    class="w-full h-48 object-cover group-hover:scale-105 transition-transform duration-300"
                />
                <div class="absolute inset-0 bg-black/50 opacity-0 group-hover:opacity-100 transition-opacity duration-300 flex items-center justify-center space-x-4">
                    <a class="btn btn-small btn-secondary" href=project.github.clone() target="_blank" rel="noopener noreferrer">
                        <i class="icon-github mr-2" />
                        "Code"
                    </a>
                    <a class="btn btn-small btn-primary" href=project.demo.clone() target="_blank" rel="noopener noreferrer">
                        <i class="icon-external-link mr-2" />
                        "Demo"
                    </a>
                </div>
            </div>
            <div class="card-header">
                <h3 class="card-title text-slate-800 dark:text-white">{project.title.clone()}</h3>
                <p class="card-description text-gray-600 dark:text-gray-300">{project.description.clone()}</p>
            </div>
            <div class="card-content">
                <div class="flex flex-wrap gap-2">
                    {project
                        .tech
                        .into_iter()
                        .map(|tech| view! {
                            <span class="badge bg-teal-100 text-teal-800 dark:bg-teal-900/30 dark:text-teal-300">
                                {tech}
                            </span>
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
