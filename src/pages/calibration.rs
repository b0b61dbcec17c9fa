//! Calibration wizard: detected issues, guided procedure checklist, and the
//! guidance analytics log.

use leptos::prelude::*;

use crate::components::tour_overlay::TourOverlay;
use crate::model::tours::{CALIBRATION_PROCEDURE, CALIBRATION_TOUR};
use crate::state::calibration::CalibrationState;
use crate::util::clock;

const DETECTED_ISSUES: &[&str] = &[
    "Calibration drift detected - retention time variance exceeds tolerance",
    "Column pressure readings 15% above recommended range",
    "Last calibration performed 45 days ago (recommended: 30 days)",
];

const STEP_INSTRUCTIONS: &[&str] = &[
    "Review the video tutorial above",
    "Follow on-screen prompts from the instrument",
    "Verify all parameters are within specification",
    "Mark as complete when finished",
];

#[component]
pub fn CalibrationPage() -> impl IntoView {
    let cal = expect_context::<RwSignal<CalibrationState>>();
    let show_tour = RwSignal::new(false);

    let log_event = move |action: &str, element: &str| {
        let time = clock::time_label();
        cal.update(|c| c.push_event(time, action, element));
    };

    let tour_finished = move || {
        show_tour.set(false);
        cal.update(CalibrationState::complete_all);
    };
    let tour_skipped = move || show_tour.set(false);

    view! {
        <div class="page">
            <header class="page__header">
                <h2>"Instrument Calibration"</h2>
                <p class="page__subtitle">"HPLC-002 requires recalibration"</p>
            </header>

            <Show when=move || cal.get().show_warning>
                <div class="banner banner--warn">
                    <p>
                        "Calibration drift detected in last 3 runs. Please recalibrate \
                         before proceeding."
                    </p>
                    <button
                        class="btn btn--icon"
                        on:click=move |_| {
                            cal.update(CalibrationState::dismiss_warning);
                            log_event("Dismissed warning banner", "Calibration drift warning");
                        }
                    >
                        "\u{2715}"
                    </button>
                </div>
            </Show>

            <Show when=move || cal.get().show_success>
                <div class="banner banner--ok">
                    <p>
                        "Calibration completed successfully. QC results within expected \
                         range."
                    </p>
                </div>
            </Show>

            <div class="card">
                <div class="instrument-card__header">
                    <div>
                        <h3>"Agilent 1290 Infinity II"</h3>
                        <p class="list__mono">"HPLC-002"</p>
                    </div>
                    <span
                        class="badge"
                        class:badge--fail=move || !cal.get().is_complete()
                        class:badge--ok=move || cal.get().is_complete()
                    >
                        {move || {
                            if cal.get().is_complete() {
                                "Calibrated"
                            } else {
                                "Calibration Required"
                            }
                        }}
                    </span>
                </div>
                <p class="card__section-label">"Detected Issues:"</p>
                <ul class="issue-list">
                    {DETECTED_ISSUES.iter().map(|line| view! { <li>{*line}</li> }).collect_view()}
                </ul>
            </div>

            <div class="card">
                <div class="instrument-card__header">
                    <div>
                        <h3>"Calibration Progress"</h3>
                        <p class="page__subtitle">
                            {move || {
                                let c = cal.get();
                                format!(
                                    "Step {} of {} \u{b7} {}% completed",
                                    c.completed_count(),
                                    CALIBRATION_PROCEDURE.len(),
                                    c.progress_percent(),
                                )
                            }}
                        </p>
                    </div>
                    <span
                        class="badge"
                        class:badge--ok=move || cal.get().is_complete()
                        class:badge--muted=move || !cal.get().is_complete()
                    >
                        {move || if cal.get().is_complete() { "Complete" } else { "In Progress" }}
                    </span>
                </div>
                <div class="progress-track">
                    <div
                        class="progress-fill"
                        style:width=move || format!("{}%", cal.get().progress_percent())
                    ></div>
                </div>
            </div>

            <div class="card">
                <h3 class="card__title">"Calibration Checklist"</h3>
                <p class="page__subtitle">"Follow each step to complete instrument calibration"</p>
                <div class="procedure">
                    {CALIBRATION_PROCEDURE
                        .iter()
                        .map(|step| {
                            let expanded = move || cal.get().expanded == Some(step.id);
                            view! {
                                <div class="procedure__step">
                                    <div
                                        class="procedure__step-head"
                                        on:click=move |_| {
                                            cal.update(|c| c.toggle_expanded(step.id));
                                            if cal.get_untracked().expanded == Some(step.id) {
                                                log_event(
                                                    "Expanded step",
                                                    &format!("Step {}: {}", step.id, step.title),
                                                );
                                            }
                                        }
                                    >
                                        <input
                                            type="checkbox"
                                            prop:checked=move || cal.get().is_completed(step.id)
                                            on:change=move |_| {
                                                cal.update(|c| c.toggle_complete(step.id));
                                                log_event(
                                                    "Completed step",
                                                    &format!("Step {}: {}", step.id, step.title),
                                                );
                                            }
                                            on:click=move |ev| ev.stop_propagation()
                                        />
                                        <div>
                                            <h4>{format!("Step {}: {}", step.id, step.title)}</h4>
                                            <p class="list__meta">{step.description}</p>
                                        </div>
                                        <span class="checklist__chevron">
                                            {move || if expanded() { "\u{25be}" } else { "\u{25b8}" }}
                                        </span>
                                    </div>
                                    <Show when=expanded>
                                        <div class="procedure__step-body">
                                            <div
                                                class="procedure__video"
                                                on:click=move |_| {
                                                    log_event("Played video", step.video_placeholder);
                                                }
                                            >
                                                <span class="procedure__video-icon">"\u{25b6}"</span>
                                                <p>{step.video_placeholder}</p>
                                            </div>
                                            <p class="card__section-label">"Instructions:"</p>
                                            <ul class="issue-list">
                                                {STEP_INSTRUCTIONS
                                                    .iter()
                                                    .map(|line| view! { <li>{*line}</li> })
                                                    .collect_view()}
                                            </ul>
                                        </div>
                                    </Show>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <Show when=move || !cal.get().is_complete()>
                    <button class="btn btn--primary btn--wide" on:click=move |_| show_tour.set(true)>
                        "Start Guided Calibration"
                    </button>
                </Show>
                <Show when=move || cal.get().is_complete()>
                    <div class="checklist__done">
                        <p class="checklist__done-title">"Calibration Complete"</p>
                        <p>"HPLC-002 is now calibrated and ready for use"</p>
                    </div>
                </Show>
            </div>

            <div class="card">
                <h3 class="card__title">"Guidance Analytics"</h3>
                <p class="page__subtitle">"Recent user interactions with guidance elements"</p>
                {move || {
                    let events = cal.get().events;
                    if events.is_empty() {
                        view! {
                            <p class="list__empty">
                                "No events recorded yet. Interact with tooltips and steps to \
                                 see analytics."
                            </p>
                        }
                            .into_any()
                    } else {
                        events
                            .into_iter()
                            .map(|event| {
                                view! {
                                    <div class="event-row">
                                        <span class="list__mono">{event.time}</span>
                                        <span class="event-row__action">{event.action}</span>
                                        <span class="list__meta">{event.element}</span>
                                    </div>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }
                }}
            </div>

            <Show when=move || show_tour.get()>
                <TourOverlay
                    steps=CALIBRATION_TOUR
                    on_finish=tour_finished
                    on_skip=tour_skipped
                />
            </Show>
        </div>
    }
}
