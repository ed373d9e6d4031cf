//! 連絡先セクション
//!
//! フォームは表示のみで送信処理は持たない。

use leptos::prelude::*;
use portfolio_common::{PortfolioContent, SectionId, SocialKind};
use super::section_heading::SectionHeading;

#[component]
pub fn ContactSection(content: ReadSignal<PortfolioContent>) -> impl IntoView {
    let contact = move || content.get().contact;

    view! {
        <section id=SectionId::Contact.as_str() class="py-20 bg-white dark:bg-slate-900">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    title="Get In Touch"
                    lead="I'm always open to discussing new opportunities, interesting projects, or just having a chat about technology"
                />

                <div class="grid lg:grid-cols-2 gap-12">
                    <ContactForm />

                    <div class="space-y-8">
                        <div>
                            <h3 class="text-2xl font-semibold text-slate-800 dark:text-white mb-6">"Let's connect"</h3>
                            <div class="space-y-4">
                                <InfoRow icon="icon-mail" label="Email" value=Signal::derive(move || contact().email) />
                                <InfoRow icon="icon-phone" label="Phone" value=Signal::derive(move || contact().phone) />
                                <InfoRow icon="icon-map-pin" label="Location" value=Signal::derive(move || contact().location) />
                            </div>
                        </div>

                        <div>
                            <h4 class="text-lg font-semibold text-slate-800 dark:text-white mb-4">"Follow me on social media"</h4>
                            <div class="flex space-x-4">
                                {move || {
                                    contact()
                                        .socials
                                        .into_iter()
                                        .map(|link| view! {
                                            <a
                                                href=link.url
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                class=social_class(link.kind)
                                                aria-label=link.kind.label()
                                            >
                                                <i class=link.kind.icon_class() />
                                            </a>
                                        })
                                        .collect_view()
                                }}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

fn social_class(kind: SocialKind) -> &'static str {
    match kind {
        SocialKind::LinkedIn => "social-link w-12 h-12 bg-blue-100 dark:bg-blue-900/30 rounded-full flex items-center justify-center",
        SocialKind::GitHub => "social-link w-12 h-12 bg-gray-100 dark:bg-gray-700 rounded-full flex items-center justify-center",
    }
}

#[component]
fn InfoRow(icon: &'static str, label: &'static str, value: Signal<String>) -> impl IntoView {
    view! {
        <div class="flex items-center space-x-4">
            <div class="w-12 h-12 bg-teal-100 dark:bg-teal-900/30 rounded-full flex items-center justify-center">
                <i class=icon />
            </div>
            <div>
                <p class="font-medium text-slate-800 dark:text-white">{label}</p>
                <p class="text-gray-600 dark:text-gray-300">{move || value.get()}</p>
            </div>
        </div>
    }
}

#[component]
fn ContactForm() -> impl IntoView {
    view! {
        <div class="card bg-white dark:bg-slate-800 border-0 shadow-lg">
            <div class="card-header">
                <h3 class="card-title text-slate-800 dark:text-white">"Send me a message"</h3>
                <p class="card-description text-gray-600 dark:text-gray-300">
                    "I'll get back to you as soon as possible"
                </p>
            </div>
            <div class="card-content space-y-6">
                <div class="grid md:grid-cols-2 gap-4">
                    <div class="form-group">
                        <label for="contact-name">"Name"</label>
                        <input type="text" id="contact-name" placeholder="Your name" />
                    </div>
                    <div class="form-group">
                        <label for="contact-email">"Email"</label>
                        <input type="email" id="contact-email" placeholder="your.email@example.com" />
                    </div>
                </div>
                <div class="form-group">
                    <label for="contact-message">"Message"</label>
                    <textarea
                        id="contact-message"
                        rows="5"
                        placeholder="Tell me about your project or just say hello!"
                    ></textarea>
                </div>
                <button type="button" class="btn btn-primary w-full">"Send Message"</button>
            </div>
        </div>
    }
}
