//! Catalog facade: glues the gateway to the list state.
//!
//! Each operation performs one round trip; the matching [`ListEvent`] is
//! applied only when the round trip succeeds.  A failure returns the error
//! untouched and leaves both projections exactly as they were, so the UI
//! keeps showing stale-but-consistent data.

use aviary_shared::{Bird, BirdFields};

use crate::error::GatewayError;
use crate::gateway::BirdApi;
use crate::state::{ListEvent, ListState};

/// Client-side view of the bird catalog.
pub struct Catalog {
    api: BirdApi,
    state: ListState,
}

impl Catalog {
    /// Create a catalog backed by the API at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Result<Self, GatewayError> {
        Ok(Self {
            api: BirdApi::new(base_url)?,
            state: ListState::new(),
        })
    }

    /// Current list state, for rendering.
    pub fn state(&self) -> &ListState {
        &self.state
    }

    /// Re-fetch the authoritative list from the server.
    pub async fn refresh(&mut self) -> Result<(), GatewayError> {
        let birds = self.api.fetch_birds().await?;
        self.state.apply(ListEvent::FetchSucceeded(birds));
        Ok(())
    }

    /// Create a record and splice it into the local projections.
    pub async fn create(&mut self, fields: &BirdFields) -> Result<Bird, GatewayError> {
        let bird = self.api.create_bird(fields).await?;
        self.state.apply(ListEvent::CreateSucceeded(bird.clone()));
        Ok(bird)
    }

    /// Update a record and splice the result into the local projections.
    pub async fn update(
        &mut self,
        id: &str,
        fields: &BirdFields,
    ) -> Result<Bird, GatewayError> {
        let bird = self.api.update_bird(id, fields).await?;
        self.state.apply(ListEvent::UpdateSucceeded(bird.clone()));
        Ok(bird)
    }

    /// Delete a record and drop it from the local projections.
    pub async fn delete(&mut self, id: &str) -> Result<(), GatewayError> {
        self.api.delete_bird(id).await?;
        self.state.apply(ListEvent::DeleteSucceeded(id.to_string()));
        Ok(())
    }

    /// Change the search query.  Purely local; no round trip.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.state.apply(ListEvent::QueryChanged(query.into()));
    }
}

#[cfg(test)]
mod tests {
    use aviary_shared::{Appearance, Bird};

    use super::*;

    fn bird(id: &str, common: &str, scientific: &str) -> Bird {
        Bird {
            id: id.to_string(),
            fields: BirdFields {
                common_name: common.to_string(),
                scientific_name: scientific.to_string(),
                description: format!("About the {common}."),
                habitat: vec!["Woodland".to_string()],
                appearance: Appearance {
                    size: "20 cm".to_string(),
                    color: vec!["Brown".to_string()],
                },
                photos: vec![],
            },
        }
    }

    /// A catalog pointed at an address nothing listens on, pre-seeded with
    /// known state.
    fn unreachable_catalog() -> Catalog {
        let mut catalog = Catalog::new("http://127.0.0.1:9").unwrap();
        catalog.state.apply(ListEvent::FetchSucceeded(vec![
            bird("1", "Blue Jay", "Cyanocitta cristata"),
            bird("2", "Robin", "Turdus migratorius"),
        ]));
        catalog.set_query("jay");
        catalog
    }

    #[tokio::test]
    async fn failed_refresh_leaves_state_intact() {
        let mut catalog = unreachable_catalog();
        let birds_before = catalog.state().birds().to_vec();
        let filtered_before = catalog.state().filtered().to_vec();

        let err = catalog.refresh().await.unwrap_err();
        assert!(matches!(err, GatewayError::Transport(_)));

        assert_eq!(catalog.state().birds(), birds_before.as_slice());
        assert_eq!(catalog.state().filtered(), filtered_before.as_slice());
    }

    #[tokio::test]
    async fn failed_create_leaves_state_intact() {
        let mut catalog = unreachable_catalog();
        let birds_before = catalog.state().birds().to_vec();
        let filtered_before = catalog.state().filtered().to_vec();

        let fields = bird("x", "Wren", "Troglodytes aedon").fields;
        assert!(catalog.create(&fields).await.is_err());

        assert_eq!(catalog.state().birds(), birds_before.as_slice());
        assert_eq!(catalog.state().filtered(), filtered_before.as_slice());
    }

    #[tokio::test]
    async fn failed_delete_leaves_state_intact() {
        let mut catalog = unreachable_catalog();
        let birds_before = catalog.state().birds().to_vec();

        assert!(catalog.delete("1").await.is_err());

        assert_eq!(catalog.state().birds(), birds_before.as_slice());
    }
}
