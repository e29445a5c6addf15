//! Dismissible notice banner for rejected form actions.

use leptos::prelude::*;

use tally::notice::{Notice, Severity};

fn banner_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "notice-banner notice-banner-info",
        Severity::Warning => "notice-banner notice-banner-warning",
    }
}

/// Notice banner component.
#[component]
pub fn NoticeBanner(
    /// Currently visible notice, if any.
    notice: RwSignal<Option<Notice>>,
) -> impl IntoView {
    move || {
        notice.get().map(|current| {
            view! {
                <div class=banner_class(current.severity) role="alert">
                    <div>
                        <p class="notice-title">{current.title}</p>
                        <p class="notice-description">{current.description}</p>
                    </div>
                    <button
                        type="button"
                        class="notice-dismiss"
                        aria-label="Dismiss notification"
                        on:click=move |_| notice.set(None)
                    >
                        "\u{2715}"
                    </button>
                </div>
            }
        })
    }
}
