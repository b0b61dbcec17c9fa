//! Multi-agent analysis screen: diagnostic pipeline, hypothesis graph, and
//! the digital-twin simulation card.

use leptos::prelude::*;

use crate::model::fixtures::TWIN_CHANGES;
use crate::model::graph::{self, LinkKind, NodeKind, NodeStatus};
use crate::state::agentic::{AGENT_COUNT, AnalysisState};
use crate::util::clock;

const AGENT_NAMES: [&str; 4] = [
    "Data Retrieval Agent",
    "Correlation Agent",
    "Evaluation Agent",
    "Summary Agent",
];

const GRAPH_WIDTH: f64 = 720.0;
const GRAPH_HEIGHT: f64 = 360.0;
const GRAPH_ITERATIONS: u32 = 3;

struct Retrieved {
    source: &'static str,
    detail: &'static str,
}

const RETRIEVED: &[Retrieved] = &[
    Retrieved { source: "QC History", detail: "142 QC records from last 30 days" },
    Retrieved { source: "Run Logs", detail: "Instrument logs from 3 HPLC systems" },
    Retrieved { source: "Instrument Configs", detail: "Method parameters and calibration data" },
    Retrieved { source: "Reagent Tracking", detail: "Lot numbers and expiration dates" },
    Retrieved { source: "Environmental Logs", detail: "Temperature and humidity data" },
    Retrieved { source: "Maintenance Records", detail: "Service history and column replacements" },
];

struct Correlation {
    title: &'static str,
    strength: &'static str,
    finding: &'static str,
    percent: u32,
}

const CORRELATIONS: &[Correlation] = &[
    Correlation {
        title: "Reagent Lot Correlation",
        strength: "High",
        finding: "80% of failed runs used reagent lot 5678 on Instrument B",
        percent: 80,
    },
    Correlation {
        title: "Environmental Condition",
        strength: "Medium",
        finding: "65% of failures occurred when room temperature exceeded 27\u{b0}C",
        percent: 65,
    },
    Correlation {
        title: "Column Age",
        strength: "Low",
        finding: "Column B-003 has 2400 injections (recommended max: 2000)",
        percent: 35,
    },
];

struct Hypothesis {
    text: &'static str,
    confidence: u32,
    supporting: u32,
    contradicting: u32,
}

const HYPOTHESES: &[Hypothesis] = &[
    Hypothesis {
        text: "Degraded reagent lot causing variable results",
        confidence: 92,
        supporting: 4,
        contradicting: 0,
    },
    Hypothesis {
        text: "Column performance degradation affecting separation",
        confidence: 78,
        supporting: 3,
        contradicting: 1,
    },
    Hypothesis {
        text: "Environmental temperature affecting chromatography",
        confidence: 65,
        supporting: 2,
        contradicting: 1,
    },
];

struct Recommendation {
    priority: u32,
    action: &'static str,
    impact: &'static str,
}

const RECOMMENDATIONS: &[Recommendation] = &[
    Recommendation {
        priority: 1,
        action: "Quarantine and replace reagent lot 5678",
        impact: "Expected to resolve 80% of failures",
    },
    Recommendation {
        priority: 2,
        action: "Replace column B-003 with fresh column",
        impact: "Restore baseline separation performance",
    },
    Recommendation {
        priority: 3,
        action: "Implement HVAC monitoring and alerts",
        impact: "Prevent temperature-related variability",
    },
];

const SUMMARY: &str = "The recurring anomalies in Assay XYZ are primarily caused by \
    degraded reagent lot 5678, compounded by column aging and suboptimal \
    environmental conditions. The reagent lot shows 92% correlation with failures \
    and should be immediately replaced. Secondary factors include column B-003 \
    exceeding recommended injection count and elevated ambient temperatures \
    affecting separation reproducibility.";

const SIMULATION_NOTES: &str = "Based on the selected changes, the model predicts a \
    significant improvement in assay reliability. The new reagent lot alone accounts \
    for most of the improvement (26% increase), with the fresh column providing \
    additional stability. These changes are recommended for immediate implementation.";

#[component]
pub fn AgenticPage() -> impl IntoView {
    let analysis = expect_context::<RwSignal<AnalysisState>>();

    view! {
        <div class="page">
            <header class="page__header">
                <h2>"Multi-Agent Analysis"</h2>
                <p class="page__subtitle">"Adaptive Diagnostics for Recurring Lab Anomalies"</p>
            </header>

            <div class="card card--alert">
                <div class="instrument-card__header">
                    <div>
                        <h3 class="card__title--error">"Recurring Anomalies Detected"</h3>
                        <p class="page__subtitle">
                            "Assay XYZ showing consistent issues over last 14 days"
                        </p>
                    </div>
                    <Show when=move || !analysis.get().started()>
                        <button
                            class="btn btn--primary"
                            on:click=move |_| analysis.update(AnalysisState::start)
                        >
                            "\u{25b6} Run Deep Analysis"
                        </button>
                    </Show>
                </div>
                <div class="stat-grid stat-grid--three">
                    <div>
                        <p class="list__meta">"Affected Runs"</p>
                        <p class="stat-card__value">"18"</p>
                    </div>
                    <div>
                        <p class="list__meta">"Failure Rate Increase"</p>
                        <p class="stat-card__value">"32%"</p>
                    </div>
                    <div>
                        <p class="list__meta">"Affected Instruments"</p>
                        <p class="stat-card__value">"2"</p>
                    </div>
                </div>
            </div>

            <Show when=move || analysis.get().started()>
                <div class="card">
                    <h3 class="card__title">"Multi-Agent Diagnostic Pipeline"</h3>
                    <p class="page__subtitle">"Collaborative AI agents analyzing anomaly patterns"</p>
                    <div class="pipeline">
                        {(1..=AGENT_COUNT)
                            .map(|agent| {
                                let name = AGENT_NAMES[(agent - 1) as usize];
                                let active = move || {
                                    analysis.get().active_agent() == Some(agent)
                                };
                                let passed = move || analysis.get().is_passed(agent);
                                view! {
                                    <button
                                        class="pipeline__agent"
                                        class:pipeline__agent--active=active
                                        class:pipeline__agent--complete=passed
                                        on:click=move |_| {
                                            analysis.update(|a| a.select_agent(agent));
                                        }
                                    >
                                        <p class="pipeline__agent-name">{name}</p>
                                        <span class="badge badge--muted">
                                            {move || {
                                                if passed() {
                                                    "Complete"
                                                } else if active() {
                                                    "Running"
                                                } else {
                                                    "Pending"
                                                }
                                            }}
                                        </span>
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="card">
                    <div class="instrument-card__header">
                        <div>
                            <h3 class="card__title">
                                {move || {
                                    analysis
                                        .get()
                                        .active_agent()
                                        .map(|a| AGENT_NAMES[(a - 1) as usize])
                                        .unwrap_or_default()
                                }}
                            </h3>
                            <p class="page__subtitle">"Analysis results and findings"</p>
                        </div>
                        <Show when=move || {
                            analysis.get().active_agent().is_some_and(|a| a < AGENT_COUNT)
                        }>
                            <button
                                class="btn btn--primary"
                                on:click=move |_| analysis.update(AnalysisState::next_agent)
                            >
                                "Next Agent \u{2192}"
                            </button>
                        </Show>
                    </div>
                    {move || match analysis.get().active_agent() {
                        Some(1) => retrieval_panel().into_any(),
                        Some(2) => correlation_panel().into_any(),
                        Some(3) => evaluation_panel().into_any(),
                        Some(4) => summary_panel().into_any(),
                        _ => ().into_any(),
                    }}
                </div>

                <HypothesisGraph analysis=analysis />

                <Show when=move || analysis.get().active_agent() == Some(AGENT_COUNT)>
                    <SimulationCard analysis=analysis />
                </Show>
            </Show>
        </div>
    }
}

fn retrieval_panel() -> impl IntoView {
    view! {
        <div class="agent-panel">
            <p class="list__meta">
                "Retrieved comprehensive data from multiple sources across the \
                 laboratory ecosystem:"
            </p>
            <div class="agent-panel__grid">
                {RETRIEVED
                    .iter()
                    .map(|item| {
                        view! {
                            <div class="agent-panel__tile">
                                <p class="agent-panel__tile-title">{item.source}</p>
                                <p class="list__meta">{item.detail}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

fn correlation_panel() -> impl IntoView {
    view! {
        <div class="agent-panel">
            <p class="list__meta">
                "Identified statistically significant correlations between failures \
                 and operational parameters:"
            </p>
            {CORRELATIONS
                .iter()
                .map(|corr| {
                    view! {
                        <div class="correlation">
                            <div class="correlation__head">
                                <p class="correlation__title">{corr.title}</p>
                                <span class="badge badge--warn">{corr.strength}</span>
                            </div>
                            <p>{corr.finding}</p>
                            <div class="progress-track">
                                <div
                                    class="progress-fill"
                                    style:width=format!("{}%", corr.percent)
                                ></div>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

fn evaluation_panel() -> impl IntoView {
    view! {
        <div class="agent-panel">
            <p class="list__meta">
                "Evaluated hypotheses using statistical models and domain expertise:"
            </p>
            {HYPOTHESES
                .iter()
                .map(|hyp| {
                    view! {
                        <div class="hypothesis">
                            <div class="correlation__head">
                                <p class="correlation__title">{hyp.text}</p>
                                <span class="badge badge--info">
                                    {format!("{}% confidence", hyp.confidence)}
                                </span>
                            </div>
                            <div class="progress-track">
                                <div
                                    class="progress-fill"
                                    style:width=format!("{}%", hyp.confidence)
                                ></div>
                            </div>
                            <p class="list__meta">
                                {format!(
                                    "{} supporting \u{b7} {} contradicting",
                                    hyp.supporting,
                                    hyp.contradicting,
                                )}
                            </p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

fn summary_panel() -> impl IntoView {
    view! {
        <div class="agent-panel">
            <div class="agent-panel__summary">
                <p class="correlation__title">"Root Cause Analysis Summary"</p>
                <p>{SUMMARY}</p>
            </div>
            <p class="card__section-label">"Recommended Actions (Priority Order):"</p>
            {RECOMMENDATIONS
                .iter()
                .map(|rec| {
                    view! {
                        <div class="recommendation">
                            <span class="recommendation__priority">{rec.priority}</span>
                            <div>
                                <p class="correlation__title">{rec.action}</p>
                                <p class="list__meta">{rec.impact}</p>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// SVG rendering of the generated hypothesis graph. The graph only changes on
/// explicit reseed; redraws reuse the stored seed.
#[component]
fn HypothesisGraph(analysis: RwSignal<AnalysisState>) -> impl IntoView {
    // Track only the seed: pipeline and simulation updates to the shared
    // state must not re-run generation and layout.
    let seed = Memo::new(move |_| analysis.with(|a| a.graph_seed));
    let reseed = move |_| {
        analysis.update(|a| a.reseed_graph(clock::session_seed().wrapping_add(a.graph_seed)));
    };

    view! {
        <div class="card">
            <div class="instrument-card__header">
                <div>
                    <h3 class="card__title">"Hypothesis Graph"</h3>
                    <p class="page__subtitle">
                        "Data sources, candidate hypotheses, and the concluded root cause"
                    </p>
                </div>
                <button class="btn btn--outline" on:click=reseed>
                    "Redraw Graph"
                </button>
            </div>
            <svg
                class="graph"
                viewBox=format!("0 0 {GRAPH_WIDTH} {GRAPH_HEIGHT}")
                role="img"
            >
                {move || {
                    let g = graph::generate(seed.get(), GRAPH_ITERATIONS);
                    let positions = graph::layout(&g, GRAPH_WIDTH, GRAPH_HEIGHT);
                    let pos_of = |id: u32| {
                        positions.iter().find(|p| p.id == id).copied()
                    };
                    let edges = g
                        .links
                        .iter()
                        .filter_map(|link| {
                            let from = pos_of(link.source)?;
                            let to = pos_of(link.target)?;
                            let class = match link.kind {
                                LinkKind::DataFlow => "graph__edge graph__edge--data",
                                LinkKind::Collaboration => "graph__edge graph__edge--collab",
                                LinkKind::Conclusion => "graph__edge graph__edge--conclusion",
                            };
                            Some(view! {
                                <line
                                    class=class
                                    x1=from.x
                                    y1=from.y
                                    x2=to.x
                                    y2=to.y
                                ></line>
                            })
                        })
                        .collect_view();
                    let nodes = g
                        .nodes
                        .iter()
                        .filter_map(|node| {
                            let pos = pos_of(node.id)?;
                            let class = match (node.kind, node.status) {
                                (NodeKind::DataSource, _) => "graph__node graph__node--source",
                                (NodeKind::Hypothesis, NodeStatus::Active) => {
                                    "graph__node graph__node--hypothesis-active"
                                }
                                (NodeKind::Hypothesis, NodeStatus::Resolved) => {
                                    "graph__node graph__node--hypothesis"
                                }
                                (NodeKind::RootCause, _) => "graph__node graph__node--root",
                            };
                            let label = format!("{} ({}%)", node.label, node.confidence);
                            Some(view! {
                                <g class=class>
                                    <circle cx=pos.x cy=pos.y r="14"></circle>
                                    <text x=pos.x y={pos.y + 28.0} text-anchor="middle">
                                        {label}
                                    </text>
                                </g>
                            })
                        })
                        .collect_view();
                    view! {
                        <g>{edges}</g>
                        <g>{nodes}</g>
                    }
                }}
            </svg>
        </div>
    }
}

#[component]
fn SimulationCard(analysis: RwSignal<AnalysisState>) -> impl IntoView {
    view! {
        <div class="card">
            <h3 class="card__title">"Digital Twin Simulation"</h3>
            <p class="page__subtitle">
                "Test protocol and setting changes in a safe environment before \
                 applying to production"
            </p>

            <p class="card__section-label">"Select Changes to Simulate"</p>
            <div class="twin-changes">
                {TWIN_CHANGES
                    .iter()
                    .map(|change| {
                        view! {
                            <label class="twin-change">
                                <input
                                    type="checkbox"
                                    prop:checked=move || analysis.get().is_selected(change.id)
                                    on:change=move |_| {
                                        analysis.update(|a| a.toggle_change(change.id));
                                    }
                                />
                                <span class="twin-change__label">{change.label}</span>
                                <span class="badge badge--muted">
                                    {format!("{} impact", change.impact)}
                                </span>
                            </label>
                        }
                    })
                    .collect_view()}
            </div>

            <button
                class="btn btn--primary btn--wide"
                prop:disabled=move || !analysis.get().can_simulate()
                on:click=move |_| analysis.update(AnalysisState::run_simulation)
            >
                "\u{25b6} Simulate Impact"
            </button>

            <Show when=move || analysis.get().simulation_run>
                <div class="simulation-result">
                    <p class="checklist__done-title">"Simulation Complete"</p>
                    <p class="list__meta">
                        "Predicted outcome based on historical data and system models"
                    </p>
                    <div class="two-col">
                        <div class="agent-panel__tile">
                            <p class="list__meta">"Predicted Pass Rate"</p>
                            <p class="stat-card__value">"94%"</p>
                            <p class="list__meta">"(Current: 68%)"</p>
                        </div>
                        <div class="agent-panel__tile">
                            <p class="list__meta">"QC Pass Probability"</p>
                            <p class="stat-card__value">"91%"</p>
                            <p class="list__meta">"High confidence"</p>
                        </div>
                    </div>
                    <div class="agent-panel__tile">
                        <p class="correlation__title">"Simulation Notes:"</p>
                        <p class="list__meta">{SIMULATION_NOTES}</p>
                    </div>
                    <div class="assistant__footer">
                        <button class="btn btn--outline">"Export Report"</button>
                        <button class="btn btn--primary">"Apply Changes to Production"</button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
