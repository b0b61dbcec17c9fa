//! Instrument fleet screen: per-instrument metric cards with tooltip
//! explanations and tutorial-video links.

use leptos::prelude::*;

use crate::components::video_dialog::VideoDialog;
use crate::model::fixtures::{INSTRUMENTS, Instrument, METRIC_INFO};

fn metric_value(instrument: &Instrument, label: &str) -> String {
    match label {
        "Column Temp" => format!("{:.1}\u{b0}C", instrument.temperature_c),
        "Pressure" => format!("{} bar", instrument.pressure_bar),
        _ => format!("{:.1} mL/min", instrument.flow_ml_min),
    }
}

#[component]
pub fn InstrumentsPage() -> impl IntoView {
    let video = RwSignal::new(None::<&'static str>);

    view! {
        <div class="page">
            <header class="page__header">
                <h2>"Instruments"</h2>
                <p class="page__subtitle">"Monitor and manage laboratory instruments"</p>
            </header>

            <div class="instrument-grid">
                {INSTRUMENTS
                    .iter()
                    .map(|instrument| {
                        view! {
                            <div class="card instrument-card">
                                <div class="instrument-card__header">
                                    <h3>{instrument.name}</h3>
                                    <span class=instrument.status.badge_class()>
                                        {instrument.status.label()}
                                    </span>
                                </div>
                                <p class="list__mono">{instrument.id}</p>
                                <div class="instrument-card__metrics">
                                    {METRIC_INFO
                                        .iter()
                                        .map(|info| {
                                            let video_id = info.video_id;
                                            view! {
                                                <div class="metric">
                                                    <span class="metric__label">{info.label}</span>
                                                    <span class="metric__value">
                                                        {metric_value(instrument, info.label)}
                                                    </span>
                                                    <div class="metric__tooltip">
                                                        <p class="metric__tooltip-heading">{info.heading}</p>
                                                        <p>{info.blurb}</p>
                                                        <button
                                                            class="metric__tooltip-link"
                                                            on:click=move |_| video.set(Some(video_id))
                                                        >
                                                            "Watch tutorial video \u{2192}"
                                                        </button>
                                                    </div>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <VideoDialog video=video />
        </div>
    }
}
