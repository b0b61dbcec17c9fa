//! Modal dialog hosting an embedded tutorial video player.

use leptos::prelude::*;

/// Tutorial video dialog. `video` holds the player id of the open video, or
/// `None` when the dialog is closed.
#[component]
pub fn VideoDialog(video: RwSignal<Option<&'static str>>) -> impl IntoView {
    let close = move |_| video.set(None);

    view! {
        <Show when=move || video.get().is_some()>
            <div class="dialog-backdrop" on:click=close>
                <div class="dialog dialog--video" on:click=move |ev| ev.stop_propagation()>
                    <div class="dialog__header">
                        <h2>"Tutorial Video"</h2>
                        <button class="dialog__close" on:click=close>
                            "\u{2715}"
                        </button>
                    </div>
                    <div class="dialog__player">
                        <iframe
                            src=move || {
                                video
                                    .get()
                                    .map(|id| format!("https://www.youtube.com/embed/{id}"))
                                    .unwrap_or_default()
                            }
                            title="YouTube video player"
                            allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                        ></iframe>
                    </div>
                </div>
            </div>
        </Show>
    }
}
