use leptos::{either::*, prelude::*};

use crate::content::portfolio;
use crate::icons::Icon;
use crate::view_state::{SectionId, ViewState};

use super::icon::IconSvg;
use super::surface::BrowserSurface;

#[component]
pub fn Header() -> impl IntoView {
    let state = expect_context::<RwSignal<ViewState>>();
    let dark = Memo::new(move |_| state.with(|s| s.dark_mode()));
    let menu_open = Memo::new(move |_| state.with(|s| s.menu_open()));

    view! {
        <header class=move || {
            if dark.get() {
                "fixed top-0 w-full bg-gray-900/95 backdrop-blur-sm z-50 border-b border-gray-800"
            } else {
                "fixed top-0 w-full bg-white/95 backdrop-blur-sm z-50 border-b border-gray-200"
            }
        }>
            <nav class="container mx-auto px-6 py-4">
                <div class="flex justify-between items-center">
                    <h1 class="text-xl font-semibold">{portfolio().profile.initials.clone()}</h1>
                    <ul class="hidden md:flex space-x-8">
                        {SectionId::ALL
                            .into_iter()
                            .map(|section| view! { <li><NavButton section /></li> })
                            .collect_view()}
                    </ul>
                    <div class="flex items-center space-x-4">
                        <button
                            aria-label="Toggle theme"
                            class=move || {
                                if dark.get() {
                                    "p-2 rounded-lg hover:bg-gray-800"
                                } else {
                                    "p-2 rounded-lg hover:bg-gray-100"
                                }
                            }
                            on:click=move |_| state.update(|s| s.toggle_dark_mode())
                        >
                            {move || if dark.get() { "☀️" } else { "🌙" }}
                        </button>
                        <button
                            aria-label=move || {
                                if menu_open.get() { Icon::Close.label() } else { Icon::Menu.label() }
                            }
                            class="md:hidden"
                            on:click=move |_| state.update(|s| s.toggle_menu())
                        >
                            {move || {
                                let icon = if menu_open.get() { Icon::Close } else { Icon::Menu };
                                view! { <IconSvg icon /> }
                            }}
                        </button>
                    </div>
                </div>
                <Show when=move || menu_open.get()>
                    <ul class=move || {
                        if dark.get() {
                            "md:hidden mt-4 space-y-4 pb-4 border-t border-gray-800 pt-4"
                        } else {
                            "md:hidden mt-4 space-y-4 pb-4 border-t border-gray-200 pt-4"
                        }
                    }>
                        {SectionId::ALL
                            .into_iter()
                            .map(|section| view! { <li><MobileNavButton section /></li> })
                            .collect_view()}
                    </ul>
                </Show>
            </nav>
        </header>
    }
}

#[component]
fn NavButton(section: SectionId) -> impl IntoView {
    let state = expect_context::<RwSignal<ViewState>>();
    let class = move || {
        state.with(|s| {
            if s.active_section() == section {
                "capitalize transition-colors text-blue-600"
            } else if s.dark_mode() {
                "capitalize transition-colors hover:text-gray-300"
            } else {
                "capitalize transition-colors hover:text-gray-600"
            }
        })
    };
    view! {
        <button
            class=class
            on:click=move |_| state.update(|s| s.navigate_to(&BrowserSurface, section))
        >
            {section.label()}
        </button>
    }
}

#[component]
fn MobileNavButton(section: SectionId) -> impl IntoView {
    let state = expect_context::<RwSignal<ViewState>>();
    let is_active = Memo::new(move |_| state.with(|s| s.active_section() == section));
    view! {
        <button
            class="capitalize block w-full text-left"
            on:click=move |_| state.update(|s| s.navigate_to(&BrowserSurface, section))
        >
            {move || {
                if is_active.get() {
                    Either::Left(view! { <span class="text-blue-600">{section.label()}</span> })
                } else {
                    Either::Right(section.label())
                }
            }}
        </button>
    }
}
