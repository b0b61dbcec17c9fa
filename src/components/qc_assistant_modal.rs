//! Lab-assistant modal for a failed QC record.
//!
//! DESIGN
//! ======
//! The assistant is scripted. On open the modal restates the question, then
//! reveals analysis, recommended actions, and the action buttons on fixed
//! delays driven by [`RevealStage::TIMED`]. The pending timeouts live in a
//! [`TimerSet`] held in owner-local storage, so disposing the modal (closing
//! it, navigating away) cancels anything that has not fired. "Start Action"
//! hands off to the corrective-action tour; finishing or skipping it closes
//! the modal too.

use leptos::prelude::*;

use crate::components::tour_overlay::TourOverlay;
use crate::model::fixtures::QcRecord;
use crate::model::tours::CORRECTIVE_ACTION_TOUR;
use crate::state::reveal::{RevealStage, advance_to};
use crate::util::timers::TimerSet;

struct ActionItem {
    title: &'static str,
    detail: &'static str,
    tour: bool,
}

const EVIDENCE: &[&str] = &[
    "3 of last 5 content uniformity tests failed using reagent lot 5678 (correlation: 87%)",
    "Column pressure readings 15% above recommended range on Instrument B",
    "Blend uniformity samples from previous batch showed borderline RSD (5.8%)",
    "Environmental logs show room temperature fluctuated above 27\u{b0}C during compression",
];

const ACTIONS: &[ActionItem] = &[
    ActionItem {
        title: "Isolate reagent lot 5678",
        detail: "Quarantine lot and test alternative lot for comparison",
        tour: true,
    },
    ActionItem {
        title: "Run column health check",
        detail: "Perform system suitability test and inspect column for deterioration",
        tour: false,
    },
    ActionItem {
        title: "Re-run controls with fresh standards",
        detail: "Verify method performance with known reference standards",
        tour: false,
    },
];

#[component]
pub fn QcAssistantModal(
    qc: &'static QcRecord,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let stage = RwSignal::new(RevealStage::default());
    let show_tour = RwSignal::new(false);

    // Timeout handles are !Send, so they live in owner-local storage. The
    // owner is disposed when the modal leaves the tree, which drops the set
    // and cancels whatever is still pending.
    let timers = StoredValue::new_local(TimerSet::new());
    timers.update_value(|set| {
        for target in RevealStage::TIMED {
            set.schedule(target.delay_ms(), move || {
                stage.update(|s| advance_to(s, target));
            });
        }
    });

    let export = move |_| {
        let summary = qc.export_summary();
        #[cfg(feature = "csr")]
        log::info!("exported QC summary for {}:\n{summary}", qc.id);
        #[cfg(not(feature = "csr"))]
        let _ = summary;
    };

    let tour_done = move || {
        show_tour.set(false);
        on_close.run(());
    };

    view! {
        <Show when=move || !show_tour.get()>
            <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
                <div class="dialog dialog--assistant" on:click=move |ev| ev.stop_propagation()>
                    <div class="dialog__header">
                        <h2>"\u{2728} Lab Assistant Analysis"</h2>
                        <button class="dialog__close" on:click=move |_| on_close.run(())>
                            "\u{2715}"
                        </button>
                    </div>

                    <div class="assistant__question">
                        <p class="assistant__label">"Question:"</p>
                        <p>{qc.assistant_question()}</p>
                    </div>

                    <Show when=move || stage.get().shows(RevealStage::Analysis)>
                        <div class="assistant__analysis">
                            <p class="assistant__label">
                                {move || {
                                    if stage.get() == RevealStage::Analysis {
                                        "Analysis (running\u{2026}):"
                                    } else {
                                        "Analysis:"
                                    }
                                }}
                            </p>
                            <p>
                                "Based on the failure pattern and recent run history, I've \
                                 identified several potential root causes for this content \
                                 uniformity failure. The elevated RSD suggests inconsistent \
                                 tablet weight or poor blend uniformity."
                            </p>
                            <div class="assistant__evidence">
                                <p class="assistant__label">"Evidence & Reasoning:"</p>
                                <ul>
                                    {EVIDENCE
                                        .iter()
                                        .map(|line| view! { <li>{*line}</li> })
                                        .collect_view()}
                                </ul>
                            </div>
                        </div>
                    </Show>

                    <Show when=move || stage.get().shows(RevealStage::Actions)>
                        <div class="assistant__actions">
                            <p class="assistant__label">"Recommended Actions:"</p>
                            {ACTIONS
                                .iter()
                                .map(|action| {
                                    view! {
                                        <div class="assistant__action">
                                            <div>
                                                <p class="assistant__action-title">{action.title}</p>
                                                <p class="assistant__action-detail">{action.detail}</p>
                                            </div>
                                            <Show when=move || {
                                                action.tour && stage.get().shows(RevealStage::Complete)
                                            }>
                                                <button
                                                    class="btn btn--outline"
                                                    on:click=move |_| show_tour.set(true)
                                                >
                                                    "Start Action"
                                                </button>
                                            </Show>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Show>

                    <Show when=move || stage.get().shows(RevealStage::Complete)>
                        <div class="assistant__footer">
                            <button class="btn btn--outline" on:click=export>
                                "Export Summary"
                            </button>
                            <button class="btn btn--outline">"Create Ticket"</button>
                        </div>
                    </Show>
                </div>
            </div>
        </Show>

        <Show when=move || show_tour.get()>
            <TourOverlay steps=CORRECTIVE_ACTION_TOUR on_finish=tour_done on_skip=tour_done />
        </Show>
    }
}
