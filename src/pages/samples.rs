//! Sample management screen: drift banner, search, and the sample list.

use leptos::prelude::*;

use crate::model::synth;
use crate::state::shell::ShellState;
use crate::util::clock;

#[component]
pub fn SamplesPage() -> impl IntoView {
    let shell = expect_context::<RwSignal<ShellState>>();

    let samples = StoredValue::new(synth::samples(clock::session_seed(), 12));
    let query = RwSignal::new(String::new());

    let filtered = move || {
        let needle = query.get().to_lowercase();
        samples.with_value(|all| {
            all.iter()
                .filter(|s| {
                    needle.is_empty()
                        || s.id.to_lowercase().contains(&needle)
                        || s.name.to_lowercase().contains(&needle)
                })
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="page">
            <Show when=move || !shell.get().drift_banner_dismissed>
                <div class="banner banner--warn">
                    <p>
                        "Calibration drift detected on HPLC-002. Please recalibrate \
                         before processing new samples."
                    </p>
                    <button
                        class="btn btn--primary"
                        on:click=move |_| {
                            shell.update(|s| {
                                s.start_calibration();
                            });
                        }
                    >
                        "Start Calibration"
                    </button>
                </div>
            </Show>

            <header class="page__header">
                <div>
                    <h2>"Sample Management"</h2>
                    <p class="page__subtitle">"Track and manage laboratory samples"</p>
                </div>
                <button class="btn btn--primary">"+ New Sample"</button>
            </header>

            <div class="toolbar">
                <input
                    class="toolbar__search"
                    type="search"
                    placeholder="Search samples..."
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <button class="btn btn--outline">"Filters"</button>
            </div>

            <div class="card">
                <h3 class="card__title">"All Samples"</h3>
                <div class="list">
                    {move || {
                        let rows = filtered();
                        if rows.is_empty() {
                            view! {
                                <p class="list__empty">"No samples match the current search."</p>
                            }
                                .into_any()
                        } else {
                            rows
                                .into_iter()
                                .map(|sample| {
                                    view! {
                                        <div class="list__row">
                                            <div>
                                                <p class="list__mono">
                                                    {sample.id}
                                                    <span class="badge badge--muted">{sample.kind}</span>
                                                </p>
                                                <p class="list__primary">{sample.name}</p>
                                                {sample
                                                    .instrument
                                                    .map(|name| {
                                                        view! { <p class="list__meta">{name}</p> }
                                                    })}
                                            </div>
                                            <div class="list__trailing">
                                                <span class="list__meta">{sample.date}</span>
                                                <span class=sample.status.badge_class()>
                                                    {sample.status.label()}
                                                </span>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </div>
            </div>
        </div>
    }
}
