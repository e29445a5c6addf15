//! Leptos Tally Demo Application

use std::sync::Arc;

use leptos::prelude::*;

use tally::{catalog::Catalog, fixtures::catalog::load_catalog, form::CheckInForm, notice::Notice};

mod banner;
mod checkin;
mod gallery;

const CATALOG_FIXTURE_YAML: &str = include_str!("../../../fixtures/catalog.yml");

const REPO_URL: &str = "https://github.com/tally-blocks/tally";

/// Parsed application fixtures used by the UI.
#[derive(Debug)]
struct AppData {
    /// Gallery catalog shown on the gallery screen.
    catalog: Arc<Catalog>,
}

impl AppData {
    fn load() -> Result<Self, String> {
        let catalog = load_catalog(CATALOG_FIXTURE_YAML)
            .map_err(|error| format!("Failed to parse catalog fixture: {error}"))?;

        Ok(Self {
            catalog: Arc::new(catalog),
        })
    }
}

/// Main demo app shell.
#[component]
fn App() -> impl IntoView {
    match AppData::load() {
        Ok(app_data) => {
            let form = RwSignal::new(CheckInForm::new());
            let notice = RwSignal::new(None::<Notice>);
            let live_message = RwSignal::new((0_u64, String::new()));

            view! {
                <main class="app-shell">
                    <p class="sr-only" role="status" aria-live="polite" aria-atomic="true">
                        {move || live_message.get().1}
                    </p>
                    <header class="app-header">
                        <h1 class="app-title">"Tally Component Blocks"</h1>
                        <a
                            class="app-repo-link"
                            href=REPO_URL
                            target="_blank"
                            rel="noreferrer"
                        >
                            "GitHub"
                        </a>
                    </header>
                    <banner::NoticeBanner notice=notice />
                    <div class="app-sections">
                        <gallery::GalleryPanel catalog=Arc::clone(&app_data.catalog) />
                        <checkin::CheckinPanel form=form notice=notice live_message=live_message />
                    </div>
                </main>
            }
            .into_any()
        }
        Err(error_message) => view! {
            <main class="app-shell">
                <header class="app-header">
                    <h1 class="app-title">"Tally Component Blocks"</h1>
                </header>
                <div class="load-error">
                    <p class="load-error-text">{error_message}</p>
                </div>
            </main>
        }
        .into_any(),
    }
}

/// Main entry point.
fn main() {
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(App);
}

fn announce(live_message: RwSignal<(u64, String)>, message: String) {
    live_message.update(|(id, text)| {
        *id = id.saturating_add(1);
        *text = message;
    });
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn test_bundled_catalog_fixture_parses() -> TestResult {
        let catalog = load_catalog(CATALOG_FIXTURE_YAML)?;

        assert!(!catalog.is_empty());

        Ok(())
    }

    #[test]
    fn test_app_data_load_succeeds() {
        let app_data = AppData::load().expect("bundled fixture parses");

        assert!(!app_data.catalog.is_empty());
    }

    #[test]
    fn test_announce_bumps_id_and_replaces_text() {
        let live_message = RwSignal::new((0_u64, String::new()));

        announce(live_message, "Added entry 2.".to_string());
        announce(live_message, "Removed entry 2.".to_string());

        let (id, text) = live_message.get_untracked();
        assert_eq!(id, 2);
        assert_eq!(text, "Removed entry 2.");
    }
}
