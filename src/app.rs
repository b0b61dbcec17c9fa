//! Root application component: navigation shell and page switch.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::footer::Footer;
use crate::pages::{
    agentic::AgenticPage, calibration::CalibrationPage, home::HomePage,
    instruments::InstrumentsPage, reports::ReportsPage, samples::SamplesPage,
};
use crate::state::agentic::AnalysisState;
use crate::state::calibration::CalibrationState;
use crate::state::checklist::Checklist;
use crate::state::shell::{Page, ShellState};
use crate::util::{clock, dark_mode};

/// Root component.
///
/// Owns the shell state (active page plus cross-screen flags) and provides
/// the longer-lived screen states as contexts so progress survives
/// navigating away and back.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let shell = RwSignal::new(ShellState::default());
    let checklist = RwSignal::new(Checklist::default());
    let calibration = RwSignal::new(CalibrationState::default());
    let analysis = RwSignal::new(AnalysisState::new(clock::session_seed()));

    provide_context(shell);
    provide_context(checklist);
    provide_context(calibration);
    provide_context(analysis);

    let dark = RwSignal::new(dark_mode::read_preference());
    dark_mode::apply(dark.get_untracked());
    let toggle_dark = move |_| {
        dark.set(dark_mode::toggle(dark.get_untracked()));
    };

    let active = move || shell.get().page;

    view! {
        <Title text="ADAPT LIMS"/>

        <div class="app">
            <nav class="nav">
                <div class="nav__inner">
                    <div class="nav__brand">
                        <span class="nav__logo" aria-hidden="true">"\u{2697}"</span>
                        <h1 class="nav__title">"ADAPT LIMS"</h1>
                    </div>
                    <div class="nav__pages">
                        {Page::NAV
                            .into_iter()
                            .map(|page| {
                                view! {
                                    <button
                                        class="nav__page-btn"
                                        class:nav__page-btn--active=move || active() == page
                                        on:click=move |_| shell.update(|s| s.navigate(page))
                                    >
                                        {page.label()}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                    <div class="nav__user">
                        <button
                            class="nav__dark-toggle"
                            title="Toggle dark mode"
                            on:click=toggle_dark
                        >
                            {move || if dark.get() { "\u{2600}" } else { "\u{263e}" }}
                        </button>
                        <span class="nav__user-name">"Dr. Sarah Chen"</span>
                    </div>
                </div>
            </nav>

            <main class="app__main">
                {move || match active() {
                    Page::Home => view! { <HomePage/> }.into_any(),
                    Page::Samples => view! { <SamplesPage/> }.into_any(),
                    Page::Instruments => view! { <InstrumentsPage/> }.into_any(),
                    Page::Reports => view! { <ReportsPage/> }.into_any(),
                    Page::Calibration => view! { <CalibrationPage/> }.into_any(),
                    Page::Agentic => view! { <AgenticPage/> }.into_any(),
                }}
            </main>

            <Footer/>
        </div>
    }
}
