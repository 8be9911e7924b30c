use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::portfolio;
use crate::icons::Icon;
use crate::view_state::{SectionId, ViewState};

use super::header::Header;
use super::icon::IconSvg;
use super::resume::{ExperienceSection, SkillsSection};
use super::surface::{use_section_tracking, BrowserSurface};

#[component]
pub fn HomePage() -> impl IntoView {
    let state = RwSignal::new(ViewState::new());
    provide_context(state);
    use_section_tracking(state);

    let dark = Memo::new(move |_| state.with(|s| s.dark_mode()));

    view! {
        <Title text=portfolio().profile.headline.clone() />
        <div class=move || {
            if dark.get() {
                "min-h-screen bg-gray-900 text-white transition-colors duration-300"
            } else {
                "min-h-screen bg-white text-gray-900 transition-colors duration-300"
            }
        }>
            <Header />
            <Hero />
            <About />
            <ExperienceSection />
            <SkillsSection />
            <Contact />
            <Footer />
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    let state = expect_context::<RwSignal<ViewState>>();
    let profile = &portfolio().profile;
    view! {
        <section
            id=SectionId::Home.element_id()
            class="min-h-screen flex items-center justify-center relative"
        >
            <div class="container mx-auto px-6 text-center">
                <h2 class="text-5xl md:text-7xl font-bold mb-6">{profile.name.clone()}</h2>
                <p class="text-xl md:text-2xl text-gray-600 mb-8">{profile.headline.clone()}</p>
                <div class="flex justify-center space-x-6 mb-12">
                    {profile
                        .contact_links()
                        .into_iter()
                        .map(|link| {
                            let (target, rel) = if link.external {
                                (Some("_blank"), Some("noopener noreferrer"))
                            } else {
                                (None, None)
                            };
                            view! {
                                <a
                                    href=link.href
                                    target=target
                                    rel=rel
                                    title=link.icon.label()
                                    class="flex flex-col items-center gap-1 hover:scale-110 transition-transform"
                                >
                                    <IconSvg icon=link.icon />
                                    <span class="text-xs">{link.icon.label()}</span>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <button
                    class="animate-bounce"
                    aria-label=Icon::ChevronDown.label()
                    on:click=move |_| {
                        state.update(|s| s.navigate_to(&BrowserSurface, SectionId::About))
                    }
                >
                    <IconSvg icon=Icon::ChevronDown size=32 />
                </button>
            </div>
        </section>
    }
}

#[component]
fn About() -> impl IntoView {
    let state = expect_context::<RwSignal<ViewState>>();
    let paragraphs = portfolio().profile.about.clone();
    let last = paragraphs.len().saturating_sub(1);
    view! {
        <section
            id=SectionId::About.element_id()
            class=move || {
                if state.with(|s| s.dark_mode()) { "py-20 bg-gray-800" } else { "py-20 bg-gray-50" }
            }
        >
            <div class="container mx-auto px-6">
                <h3 class="text-3xl md:text-4xl font-bold text-center mb-12">"Sobre Mí"</h3>
                <div class="max-w-3xl mx-auto">
                    {paragraphs
                        .into_iter()
                        .enumerate()
                        .map(|(i, p)| {
                            let class = if i == last {
                                "text-lg leading-relaxed"
                            } else {
                                "text-lg leading-relaxed mb-6"
                            };
                            view! { <p class=class>{p}</p> }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Contact() -> impl IntoView {
    let state = expect_context::<RwSignal<ViewState>>();
    let profile = &portfolio().profile;
    let dark = Memo::new(move |_| state.with(|s| s.dark_mode()));
    let button_class = move || {
        if dark.get() {
            "flex items-center space-x-2 px-6 py-3 rounded-lg bg-gray-800 hover:bg-gray-700 transition-colors"
        } else {
            "flex items-center space-x-2 px-6 py-3 rounded-lg bg-gray-100 hover:bg-gray-200 transition-colors"
        }
    };
    view! {
        <section
            id=SectionId::Contact.element_id()
            class=move || if dark.get() { "py-20 bg-gray-900" } else { "py-20 bg-white" }
        >
            <div class="container mx-auto px-6 text-center">
                <h3 class="text-3xl md:text-4xl font-bold mb-8">
                    {profile.contact_title.clone()}
                </h3>
                <p class="text-lg mb-8 max-w-2xl mx-auto">{profile.contact_blurb.clone()}</p>
                <div class="flex justify-center space-x-8 flex-wrap gap-4">
                    <a href=format!("mailto:{}", profile.email) class=button_class>
                        <IconSvg icon=Icon::Mail size=20 />
                        <span>{profile.email.clone()}</span>
                    </a>
                    <a href=format!("tel:{}", profile.phone) class=button_class>
                        <IconSvg icon=Icon::Phone size=20 />
                        <span>{profile.phone_display.clone()}</span>
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let state = expect_context::<RwSignal<ViewState>>();
    view! {
        <footer class=move || {
            if state.with(|s| s.dark_mode()) {
                "py-8 text-center bg-gray-800"
            } else {
                "py-8 text-center bg-gray-100"
            }
        }>
            <p class="text-sm text-gray-500">
                {format!(
                    "© {} {}. Todos los derechos reservados.",
                    portfolio().profile.copyright_year,
                    portfolio().profile.name,
                )}
            </p>
        </footer>
    }
}
