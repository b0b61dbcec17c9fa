//! QC reports screen: recent results with the assistant entry point on
//! flagged failures.

use leptos::prelude::*;

use crate::components::qc_assistant_modal::QcAssistantModal;
use crate::model::fixtures::{QC_RECORDS, QcRecord, QcStatus};

#[component]
pub fn ReportsPage() -> impl IntoView {
    let selected = RwSignal::new(None::<&'static QcRecord>);
    let close_assistant = move || selected.set(None);

    view! {
        <div class="page">
            <header class="page__header">
                <h2>"QC Reports"</h2>
                <p class="page__subtitle">"Review quality control test results"</p>
            </header>

            <div class="card">
                <h3 class="card__title">"Recent QC Results"</h3>
                <div class="list">
                    {QC_RECORDS
                        .iter()
                        .map(|qc| {
                            let badge = match qc.status {
                                QcStatus::Pass => "badge badge--ok",
                                QcStatus::Fail => "badge badge--fail",
                            };
                            view! {
                                <div class="list__row" class:list__row--flagged=qc.flagged>
                                    <div>
                                        <p class="list__mono">
                                            {qc.id}
                                            {qc.flagged.then(|| view! { <span class="flag-dot">"\u{26a0}"</span> })}
                                        </p>
                                        <p class="list__primary">{qc.assay}</p>
                                        <p class="list__meta">"Result: " {qc.result}</p>
                                    </div>
                                    <div class="list__trailing">
                                        <span class="list__meta">{qc.date}</span>
                                        <span class=badge>{qc.status.label()}</span>
                                        <Show when=move || qc.flagged>
                                            <button
                                                class="btn btn--primary"
                                                on:click=move |_| selected.set(Some(qc))
                                            >
                                                "Ask Assistant"
                                            </button>
                                        </Show>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            {move || {
                selected
                    .get()
                    .map(|qc| view! { <QcAssistantModal qc=qc on_close=close_assistant /> })
            }}
        </div>
    }
}
