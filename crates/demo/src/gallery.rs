//! Gallery screen: a searchable grid of catalog component cards.

use std::sync::Arc;

use leptos::prelude::*;

use tally::catalog::{Catalog, CatalogItem};

/// Recompute the visible cards for the current search term.
fn filtered_items(catalog: &Catalog, query: &str) -> Vec<CatalogItem> {
    catalog.filter(query).into_iter().cloned().collect()
}

#[component]
fn GalleryCard(item: CatalogItem) -> impl IntoView {
    view! {
        <div class="gallery-card">
            <h3 class="gallery-card-title">{item.name}</h3>
            <p class="gallery-card-description">{item.description}</p>
            <a class="button button-primary gallery-card-action" href=item.link>
                "View Component"
            </a>
        </div>
    }
}

#[component]
fn GalleryEmptyState() -> impl IntoView {
    view! {
        <div class="gallery-empty">
            <h3 class="gallery-empty-title">"No components found"</h3>
            <p class="gallery-empty-hint">"Try adjusting your search term"</p>
        </div>
    }
}

/// Gallery panel component.
#[component]
pub fn GalleryPanel(
    /// Catalog rendered as cards.
    catalog: Arc<Catalog>,
) -> impl IntoView {
    let search_term = RwSignal::new(String::new());

    view! {
        <section class="gallery-panel" id="gallery">
            <div class="panel-header">
                <h2 class="panel-title">"Components"</h2>
                <input
                    type="search"
                    class="gallery-search"
                    placeholder="Search components..."
                    prop:value=move || search_term.get()
                    on:input=move |ev| search_term.set(event_target_value(&ev))
                />
            </div>
            {move || {
                let matches = filtered_items(&catalog, &search_term.get());

                if matches.is_empty() {
                    view! { <GalleryEmptyState /> }.into_any()
                } else {
                    view! {
                        <div class="gallery-grid">
                            {matches
                                .into_iter()
                                .map(|item| view! { <GalleryCard item=item /> })
                                .collect_view()}
                        </div>
                    }
                    .into_any()
                }
            }}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_catalog() -> Catalog {
        Catalog::new([CatalogItem {
            id: 1,
            name: "Check-in Table Form".to_string(),
            description: "A table form with dynamic tables and multi-store support.".to_string(),
            link: "#check-in".to_string(),
        }])
    }

    #[test]
    fn test_filtered_items_matches_substring() {
        let catalog = test_catalog();

        let matches = filtered_items(&catalog, "TABLE");

        assert_eq!(matches.len(), 1);
    }

    #[test]
    fn test_filtered_items_empty_query_shows_all() {
        let catalog = test_catalog();

        let matches = filtered_items(&catalog, "");

        assert_eq!(matches.len(), catalog.len());
    }

    #[test]
    fn test_filtered_items_no_match_is_empty() {
        let catalog = test_catalog();

        let matches = filtered_items(&catalog, "zzz");

        assert!(matches.is_empty());
    }
}
