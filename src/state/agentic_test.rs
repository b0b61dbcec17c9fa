use super::*;

// =============================================================
// Pipeline cursor
// =============================================================

#[test]
fn analysis_starts_idle() {
    let state = AnalysisState::new(7);
    assert!(!state.started());
    assert_eq!(state.active_agent(), None);
    assert!(!state.is_reached(1));
    assert_eq!(state.graph_seed, 7);
}

#[test]
fn start_activates_agent_one() {
    let mut state = AnalysisState::new(0);
    state.start();
    assert!(state.started());
    assert_eq!(state.active_agent(), Some(1));
    assert!(state.is_reached(1));
    assert!(!state.is_reached(2));
}

#[test]
fn start_twice_does_not_rewind() {
    let mut state = AnalysisState::new(0);
    state.start();
    state.next_agent();
    state.start();
    assert_eq!(state.active_agent(), Some(2));
}

#[test]
fn next_agent_saturates_at_the_last_agent() {
    let mut state = AnalysisState::new(0);
    state.start();
    for _ in 0..AGENT_COUNT + 3 {
        state.next_agent();
    }
    assert_eq!(state.active_agent(), Some(AGENT_COUNT));
}

#[test]
fn next_agent_before_start_is_ignored() {
    let mut state = AnalysisState::new(0);
    state.next_agent();
    assert_eq!(state.active_agent(), None);
}

#[test]
fn reached_agents_can_be_reopened_but_future_ones_cannot() {
    let mut state = AnalysisState::new(0);
    state.start();
    state.next_agent();
    state.next_agent(); // now on agent 3

    state.select_agent(1);
    assert_eq!(state.active_agent(), Some(1));
    assert!(state.is_passed(1));

    state.select_agent(4);
    assert_eq!(state.active_agent(), Some(1));
}

// =============================================================
// Graph seed
// =============================================================

#[test]
fn reseed_replaces_the_graph_seed() {
    let mut state = AnalysisState::new(1);
    state.reseed_graph(42);
    assert_eq!(state.graph_seed, 42);
}

// =============================================================
// Simulation
// =============================================================

#[test]
fn simulation_requires_a_selection() {
    let mut state = AnalysisState::new(0);
    assert!(!state.can_simulate());
    state.run_simulation();
    assert!(!state.simulation_run);
}

#[test]
fn toggle_change_twice_is_identity() {
    let mut state = AnalysisState::new(0);
    state.toggle_change("reagent");
    assert!(state.is_selected("reagent"));
    state.toggle_change("reagent");
    assert!(!state.is_selected("reagent"));
    assert!(state.selected_changes().is_empty());
}

#[test]
fn simulation_runs_once() {
    let mut state = AnalysisState::new(0);
    state.toggle_change("reagent");
    state.toggle_change("column");
    assert!(state.can_simulate());
    state.run_simulation();
    assert!(state.simulation_run);
    assert!(!state.can_simulate());
}
