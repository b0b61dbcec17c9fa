//! Dashboard: quick stats, recent samples, system alerts, and the
//! getting-started overlay.

use leptos::prelude::*;

use crate::components::onboarding_checklist::OnboardingChecklist;
use crate::model::fixtures::{AlertSeverity, DASHBOARD_STATS, SYSTEM_ALERTS};
use crate::model::synth;
use crate::state::shell::ShellState;
use crate::util::clock;

#[component]
pub fn HomePage() -> impl IntoView {
    let shell = expect_context::<RwSignal<ShellState>>();

    let recent = synth::samples(clock::session_seed(), 4);
    let close_onboarding = move || shell.update(ShellState::close_onboarding);

    view! {
        <div class="page">
            <header class="page__header">
                <h2>"Dashboard"</h2>
                <p class="page__subtitle">"Welcome back, Dr. Chen"</p>
            </header>

            <div class="stat-grid">
                {DASHBOARD_STATS
                    .iter()
                    .map(|stat| {
                        view! {
                            <div class="card stat-card">
                                <p class="stat-card__title">{stat.title}</p>
                                <p class="stat-card__value">{stat.value}</p>
                                <p class="stat-card__note">{stat.note}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="two-col">
                <div class="card">
                    <h3 class="card__title">"Recent Samples"</h3>
                    <div class="list">
                        {recent
                            .into_iter()
                            .map(|sample| {
                                view! {
                                    <div class="list__row">
                                        <div>
                                            <p class="list__primary">{sample.name}</p>
                                            <p class="list__mono">{sample.id}</p>
                                        </div>
                                        <span class=sample.status.badge_class()>
                                            {sample.status.label()}
                                        </span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="card">
                    <h3 class="card__title">"System Alerts"</h3>
                    <div class="list">
                        {SYSTEM_ALERTS
                            .iter()
                            .map(|alert| {
                                let tone = match alert.severity {
                                    AlertSeverity::Error => "alert alert--error",
                                    AlertSeverity::Warning => "alert alert--warn",
                                    AlertSeverity::Info => "alert alert--info",
                                };
                                view! {
                                    <div class=tone>
                                        <p class="alert__title">{alert.title}</p>
                                        <p class="alert__detail">{alert.detail}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>

            <Show when=move || shell.get().show_onboarding>
                <OnboardingChecklist on_close=close_onboarding />
            </Show>
        </div>
    }
}
