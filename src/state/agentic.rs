//! Multi-agent analysis screen state: the diagnostic pipeline cursor, the
//! hypothesis-graph seed, and the digital-twin simulation form.

#[cfg(test)]
#[path = "agentic_test.rs"]
mod agentic_test;

/// Number of agents in the diagnostic pipeline.
pub const AGENT_COUNT: u32 = 4;

/// State for the multi-agent analysis screen.
#[derive(Clone, Debug)]
pub struct AnalysisState {
    /// Highest agent reached so far; agents at or below this are selectable.
    furthest_agent: u32,
    /// Agent whose output panel is shown.
    active_agent: u32,
    started: bool,
    /// Seed for the hypothesis graph. Changes only on explicit reseed, never
    /// per render, so the graph is stable while the user reads it.
    pub graph_seed: u64,
    selected_changes: Vec<&'static str>,
    pub simulation_run: bool,
}

impl AnalysisState {
    /// Build the screen state with the session's graph seed.
    #[must_use]
    pub fn new(graph_seed: u64) -> Self {
        Self {
            furthest_agent: 0,
            active_agent: 0,
            started: false,
            graph_seed,
            selected_changes: Vec::new(),
            simulation_run: false,
        }
    }

    #[must_use]
    pub fn started(&self) -> bool {
        self.started
    }

    /// The agent whose output panel is shown, `None` before analysis starts.
    #[must_use]
    pub fn active_agent(&self) -> Option<u32> {
        self.started.then_some(self.active_agent)
    }

    /// Whether an agent's stage has been reached (and may be re-opened).
    #[must_use]
    pub fn is_reached(&self, agent: u32) -> bool {
        self.started && agent <= self.furthest_agent
    }

    /// Whether an agent's stage is fully behind the pipeline cursor.
    #[must_use]
    pub fn is_passed(&self, agent: u32) -> bool {
        self.started && agent < self.furthest_agent
    }

    /// Kick off the pipeline at agent 1.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.furthest_agent = 1;
        self.active_agent = 1;
    }

    /// Advance the pipeline to the next agent, saturating at the last one.
    pub fn next_agent(&mut self) {
        if !self.started {
            return;
        }
        self.furthest_agent = (self.furthest_agent + 1).min(AGENT_COUNT);
        self.active_agent = self.furthest_agent;
    }

    /// Re-open a previously reached agent's output panel. Agents ahead of the
    /// pipeline cursor cannot be selected.
    pub fn select_agent(&mut self, agent: u32) {
        if self.is_reached(agent) {
            self.active_agent = agent;
        }
    }

    /// Draw a fresh hypothesis graph.
    pub fn reseed_graph(&mut self, seed: u64) {
        self.graph_seed = seed;
    }

    // ---- digital-twin simulation ----

    #[must_use]
    pub fn selected_changes(&self) -> &[&'static str] {
        &self.selected_changes
    }

    #[must_use]
    pub fn is_selected(&self, change_id: &str) -> bool {
        self.selected_changes.contains(&change_id)
    }

    /// Flip a proposed change in or out of the simulation set.
    pub fn toggle_change(&mut self, change_id: &'static str) {
        if let Some(pos) = self.selected_changes.iter().position(|c| *c == change_id) {
            self.selected_changes.remove(pos);
        } else {
            self.selected_changes.push(change_id);
        }
    }

    /// Whether the simulate button is actionable.
    #[must_use]
    pub fn can_simulate(&self) -> bool {
        !self.selected_changes.is_empty() && !self.simulation_run
    }

    /// Run the canned simulation. No-op without a selection or when already
    /// run.
    pub fn run_simulation(&mut self) {
        if self.can_simulate() {
            self.simulation_run = true;
        }
    }
}
