use leptos::prelude::*;

use crate::content::{portfolio, ExperienceEntry, SkillCategory};
use crate::icons::Icon;
use crate::view_state::{SectionId, ViewState};

use super::icon::IconSvg;

#[component]
pub fn ExperienceSection() -> impl IntoView {
    let experience = &portfolio().experience;
    let last = experience.len().saturating_sub(1);
    view! {
        <section id=SectionId::Experience.element_id() class="py-20">
            <div class="container mx-auto px-6">
                <h3 class="text-3xl md:text-4xl font-bold text-center mb-12">
                    "Experiencia Laboral"
                </h3>
                <div class="max-w-4xl mx-auto">
                    {experience
                        .iter()
                        .enumerate()
                        .map(|(i, entry)| {
                            view! { <TimelineEntry entry=entry.clone() with_line={i != last} /> }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn TimelineEntry(entry: ExperienceEntry, with_line: bool) -> impl IntoView {
    let state = expect_context::<RwSignal<ViewState>>();
    let dark = Memo::new(move |_| state.with(|s| s.dark_mode()));
    view! {
        <div class="mb-12 relative">
            {with_line
                .then(|| {
                    view! {
                        <div class=move || {
                            if dark.get() {
                                "absolute left-8 top-16 bottom-0 w-0.5 bg-gray-700"
                            } else {
                                "absolute left-8 top-16 bottom-0 w-0.5 bg-gray-300"
                            }
                        }></div>
                    }
                })}
            <div class="flex items-start">
                <div class=move || {
                    if dark.get() {
                        "w-16 h-16 rounded-full bg-gray-700 flex items-center justify-center flex-shrink-0"
                    } else {
                        "w-16 h-16 rounded-full bg-gray-200 flex items-center justify-center flex-shrink-0"
                    }
                }>
                    <IconSvg icon=Icon::Server />
                </div>
                <div class="ml-8 flex-grow">
                    <h4 class="text-xl font-semibold">{entry.role}</h4>
                    <p class="text-blue-600 font-medium">{entry.organization}</p>
                    <p class="text-sm text-gray-500 mb-4">{entry.period}</p>
                    <p class="mb-4">{entry.description}</p>
                    <div class="space-y-2">
                        {entry
                            .achievements
                            .into_iter()
                            .map(|achievement| {
                                view! {
                                    <div class="flex items-start">
                                        <span class="text-blue-600 mr-2">"•"</span>
                                        <span class="text-sm">{achievement}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn SkillsSection() -> impl IntoView {
    let state = expect_context::<RwSignal<ViewState>>();
    view! {
        <section
            id=SectionId::Skills.element_id()
            class=move || {
                if state.with(|s| s.dark_mode()) { "py-20 bg-gray-800" } else { "py-20 bg-gray-50" }
            }
        >
            <div class="container mx-auto px-6">
                <h3 class="text-3xl md:text-4xl font-bold text-center mb-12">
                    "Habilidades Técnicas"
                </h3>
                <div class="max-w-5xl mx-auto grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {portfolio()
                        .skills
                        .iter()
                        .map(|category| view! { <SkillCard category=category.clone() /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillCard(category: SkillCategory) -> impl IntoView {
    let state = expect_context::<RwSignal<ViewState>>();
    let dark = Memo::new(move |_| state.with(|s| s.dark_mode()));
    let pill_class = move || {
        if dark.get() {
            "px-3 py-1 text-sm rounded-full bg-gray-800"
        } else {
            "px-3 py-1 text-sm rounded-full bg-gray-100"
        }
    };
    view! {
        <div class=move || {
            if dark.get() {
                "p-6 rounded-lg bg-gray-900 shadow-lg"
            } else {
                "p-6 rounded-lg bg-white shadow-lg"
            }
        }>
            <div class="flex items-center mb-4">
                <IconSvg icon=category.icon class="text-blue-600 mr-3" />
                <h4 class="text-xl font-semibold">{category.title}</h4>
            </div>
            <div class="flex flex-wrap gap-2">
                {category
                    .skills
                    .into_iter()
                    .map(|skill| view! { <span class=pill_class>{skill}</span> })
                    .collect_view()}
            </div>
        </div>
    }
}
