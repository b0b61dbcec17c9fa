//! Step-by-step guided tour overlay.
//!
//! DESIGN
//! ======
//! One overlay renders every tour in the app. The caller supplies the step
//! deck and two callbacks: `on_finish` fires when the last step is advanced
//! past, `on_skip` when the tour is abandoned early. Cursor movement lives in
//! [`crate::state::tour::Tour`]; this component only renders the current step
//! and wires the buttons.

use leptos::prelude::*;

use crate::model::tours::TourStep;
use crate::state::tour::Tour;

#[component]
pub fn TourOverlay(
    steps: &'static [TourStep],
    #[prop(into)] on_finish: Callback<()>,
    #[prop(into)] on_skip: Callback<()>,
) -> impl IntoView {
    let tour = RwSignal::new(Tour::new(steps));

    let advance = move |_| {
        let finished = tour.try_update(Tour::next).unwrap_or(false);
        if finished {
            on_finish.run(());
        }
    };
    let skip = move |_| {
        tour.update(|t| {
            t.skip();
        });
        on_skip.run(());
    };

    view! {
        <div class="tour-backdrop">
            <div class="tour-card">
                <span class="tour-card__badge">
                    {move || {
                        let t = tour.get();
                        format!("Step {} of {}", t.index() + 1, t.len())
                    }}
                </span>
                <h3 class="tour-card__title">{move || tour.get().current().title}</h3>
                <p class="tour-card__body">{move || tour.get().current().description}</p>
                <div class="tour-card__dots">
                    {move || {
                        let t = tour.get();
                        (0..t.len())
                            .map(|i| {
                                view! {
                                    <span
                                        class="tour-card__dot"
                                        class:tour-card__dot--active=move || i == tour.get().index()
                                    ></span>
                                }
                            })
                            .collect_view()
                    }}
                </div>
                <div class="tour-card__actions">
                    <button class="btn btn--ghost" on:click=skip>
                        "Skip Tour"
                    </button>
                    <button class="btn btn--primary" on:click=advance>
                        {move || {
                            let t = tour.get();
                            t.current().action.unwrap_or(if t.is_last() { "Done" } else { "Next" })
                        }}
                    </button>
                </div>
            </div>
        </div>
    }
}
