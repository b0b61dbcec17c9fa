//! Floating getting-started checklist shown over the dashboard.
//!
//! DESIGN
//! ======
//! The checklist card sits in the bottom-right corner and tracks five
//! onboarding steps. Steps expand to show a description and, for most of
//! them, an embedded tutorial video. The "Complete Interactive Tour" step is
//! gated: checking it launches the product tour instead, and only finishing
//! (not skipping) the tour marks it done. Completion and expansion live in
//! [`crate::state::checklist::Checklist`], provided as context by the shell.

use leptos::prelude::*;

use crate::components::tour_overlay::TourOverlay;
use crate::model::tours::{ChecklistStep, ONBOARDING_STEPS, PRODUCT_TOUR};
use crate::state::checklist::{Checklist, ToggleOutcome};

#[component]
pub fn OnboardingChecklist(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let checklist = expect_context::<RwSignal<Checklist>>();
    let show_tour = RwSignal::new(false);

    let toggle_step = move |step: &'static ChecklistStep| {
        let outcome = checklist
            .try_update(|c| c.request_toggle(step))
            .unwrap_or(ToggleOutcome::Toggled);
        if outcome == ToggleOutcome::TourRequired {
            show_tour.set(true);
        }
    };

    let tour_finished = move || {
        show_tour.set(false);
        checklist.update(Checklist::complete_tour);
    };
    let tour_skipped = move || show_tour.set(false);

    view! {
        <div class="checklist">
            <div class="checklist__header">
                <div>
                    <h3 class="checklist__title">"Getting Started"</h3>
                    <p class="checklist__subtitle">
                        "Learn the essentials with interactive tutorials and hands-on demos."
                    </p>
                </div>
                <div class="checklist__controls">
                    <button
                        class="btn btn--icon"
                        on:click=move |_| checklist.update(|c| c.minimized = !c.minimized)
                    >
                        {move || if checklist.get().minimized { "\u{2303}" } else { "\u{2304}" }}
                    </button>
                    <button class="btn btn--icon" on:click=move |_| on_close.run(())>
                        "\u{2715}"
                    </button>
                </div>
            </div>

            <Show when=move || !checklist.get().minimized>
                <div class="checklist__body">
                    <div class="checklist__progress">
                        <div class="checklist__progress-row">
                            <span>
                                {move || {
                                    format!(
                                        "{} of {} completed",
                                        checklist.get().completed_count(),
                                        ONBOARDING_STEPS.len(),
                                    )
                                }}
                            </span>
                            <span
                                class="badge"
                                class:badge--ok=move || checklist.get().is_complete()
                                class:badge--muted=move || !checklist.get().is_complete()
                            >
                                {move || format!("{}%", checklist.get().progress_percent())}
                            </span>
                        </div>
                        <div class="progress-track">
                            <div
                                class="progress-fill"
                                style:width=move || {
                                    format!("{}%", checklist.get().progress_percent())
                                }
                            ></div>
                        </div>
                    </div>

                    <div class="checklist__steps">
                        {ONBOARDING_STEPS
                            .iter()
                            .map(|step| {
                                let completed = move || checklist.get().is_completed(step.id);
                                let expanded = move || checklist.get().is_expanded(step.id);
                                view! {
                                    <div class="checklist__step">
                                        <div class="checklist__step-row">
                                            <input
                                                type="checkbox"
                                                prop:checked=completed
                                                on:change=move |_| toggle_step(step)
                                            />
                                            <button
                                                class="checklist__step-toggle"
                                                on:click=move |_| {
                                                    checklist.update(|c| c.toggle_expanded(step.id));
                                                }
                                            >
                                                <span
                                                    class="checklist__step-title"
                                                    class:checklist__step-title--done=completed
                                                >
                                                    {step.title}
                                                </span>
                                                <span class="checklist__chevron">
                                                    {move || if expanded() { "\u{25b4}" } else { "\u{25be}" }}
                                                </span>
                                            </button>
                                        </div>
                                        <Show when=expanded>
                                            <div class="checklist__step-detail">
                                                <p>{step.description}</p>
                                                {step
                                                    .video_id
                                                    .map(|id| {
                                                        view! {
                                                            <iframe
                                                                class="checklist__video"
                                                                src=format!("https://www.youtube.com/embed/{id}")
                                                                title=step.title
                                                                allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                                                            ></iframe>
                                                        }
                                                    })}
                                                <Show when=move || step.requires_tour>
                                                    <button
                                                        class="btn btn--outline"
                                                        on:click=move |_| show_tour.set(true)
                                                    >
                                                        "Start Interactive Tour"
                                                    </button>
                                                </Show>
                                            </div>
                                        </Show>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>

                    <Show when=move || checklist.get().is_complete()>
                        <div class="checklist__done">
                            <p class="checklist__done-title">"Onboarding complete!"</p>
                            <p>"You're ready to start using the LIMS platform."</p>
                        </div>
                    </Show>
                </div>
            </Show>
        </div>

        <Show when=move || show_tour.get()>
            <TourOverlay steps=PRODUCT_TOUR on_finish=tour_finished on_skip=tour_skipped />
        </Show>
    }
}
