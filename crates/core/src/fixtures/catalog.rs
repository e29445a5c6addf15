//! Catalog fixtures

use serde::Deserialize;

use crate::{
    catalog::{Catalog, CatalogItem},
    fixtures::FixtureError,
};

/// On-disk shape of the catalog fixture file.
#[derive(Debug, Deserialize)]
pub struct CatalogFixture {
    /// Gallery components, in display order.
    pub components: Vec<CatalogItemFixture>,
}

/// One component definition in the catalog fixture.
#[derive(Debug, Deserialize)]
pub struct CatalogItemFixture {
    /// Component name.
    pub name: String,

    /// Component description.
    pub description: String,

    /// Target of the card's "view component" action.
    pub link: String,
}

/// Parse catalog fixture YAML into a [`Catalog`], assigning 1-based ids by
/// position.
///
/// # Errors
///
/// Returns a [`FixtureError`] when the YAML cannot be parsed.
pub fn load_catalog(yaml: &str) -> Result<Catalog, FixtureError> {
    let fixture: CatalogFixture = serde_norway::from_str(yaml)?;

    let items = fixture
        .components
        .into_iter()
        .zip(1u32..)
        .map(|(component, id)| CatalogItem {
            id,
            name: component.name,
            description: component.description,
            link: component.link,
        })
        .collect::<Vec<_>>();

    Ok(Catalog::new(items))
}
