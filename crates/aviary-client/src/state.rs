//! Client-side list state.
//!
//! Holds two projections of the catalog: the *authoritative* list (last
//! known server state) and the *filtered* list (authoritative restricted to
//! the active search query).  State changes only through
//! [`ListState::apply`], and only successful round trips produce events, so
//! a failed call leaves both projections exactly as they were.

use aviary_shared::Bird;

/// State transitions: one per successful gateway round trip, plus local
/// query edits.
#[derive(Debug, Clone)]
pub enum ListEvent {
    /// A full fetch completed; replace the authoritative list wholesale.
    FetchSucceeded(Vec<Bird>),
    /// A create completed; append the stored record.
    CreateSucceeded(Bird),
    /// An update completed; replace the record with the same id.
    UpdateSucceeded(Bird),
    /// A delete completed; drop the record with this id.
    DeleteSucceeded(String),
    /// The user edited the search query.
    QueryChanged(String),
}

/// Authoritative + filtered projections of the bird list.
#[derive(Debug, Clone, Default)]
pub struct ListState {
    birds: Vec<Bird>,
    filtered: Vec<Bird>,
    query: String,
}

impl ListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last known server state.
    pub fn birds(&self) -> &[Bird] {
        &self.birds
    }

    /// Authoritative list restricted to the active query.
    pub fn filtered(&self) -> &[Bird] {
        &self.filtered
    }

    /// The active search query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Apply one state transition, then recompute the filtered projection
    /// in full from the new authoritative list and the active query.
    pub fn apply(&mut self, event: ListEvent) {
        match event {
            ListEvent::FetchSucceeded(birds) => {
                self.birds = birds;
            }
            ListEvent::CreateSucceeded(bird) => {
                self.birds.push(bird);
            }
            ListEvent::UpdateSucceeded(bird) => {
                if let Some(existing) = self.birds.iter_mut().find(|b| b.id == bird.id) {
                    *existing = bird;
                }
            }
            ListEvent::DeleteSucceeded(id) => {
                self.birds.retain(|b| b.id != id);
            }
            ListEvent::QueryChanged(query) => {
                self.query = query;
            }
        }

        self.filtered = filter(&self.birds, &self.query);
    }
}

/// Case-insensitive substring match over both name fields.
///
/// A pure function of (authoritative list, query); never patched
/// incrementally.
fn filter(birds: &[Bird], query: &str) -> Vec<Bird> {
    let needle = query.to_lowercase();
    birds
        .iter()
        .filter(|b| {
            b.fields.common_name.to_lowercase().contains(&needle)
                || b.fields.scientific_name.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use aviary_shared::{Appearance, BirdFields};

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

    fn seeded() -> ListState {
        let mut state = ListState::new();
        state.apply(ListEvent::FetchSucceeded(vec![
            bird("1", "Blue Jay", "Cyanocitta cristata"),
            bird("2", "Robin", "Turdus migratorius"),
        ]));
        state
    }

    #[test]
    fn fetch_replaces_both_projections() {
        let state = seeded();
        assert_eq!(state.birds().len(), 2);
        assert_eq!(state.filtered().len(), 2);
    }

    #[test]
    fn query_filters_on_common_name() {
        let mut state = seeded();
        state.apply(ListEvent::QueryChanged("jay".to_string()));

        assert_eq!(state.filtered().len(), 1);
        assert_eq!(state.filtered()[0].id, "1");
        // Authoritative list is untouched by filtering.
        assert_eq!(state.birds().len(), 2);
    }

    #[test]
    fn query_filters_on_scientific_name() {
        let mut state = seeded();
        state.apply(ListEvent::QueryChanged("TURDUS".to_string()));

        assert_eq!(state.filtered().len(), 1);
        assert_eq!(state.filtered()[0].id, "2");
    }

    #[test]
    fn clearing_query_restores_full_projection() {
        let mut state = seeded();
        state.apply(ListEvent::QueryChanged("jay".to_string()));
        state.apply(ListEvent::QueryChanged(String::new()));

        assert_eq!(state.filtered().len(), 2);
    }

    #[test]
    fn create_respects_active_query() {
        let mut state = seeded();
        state.apply(ListEvent::QueryChanged("jay".to_string()));
        state.apply(ListEvent::CreateSucceeded(bird(
            "3",
            "Wren",
            "Troglodytes aedon",
        )));

        // Appended to authoritative, but it does not match the query.
        assert_eq!(state.birds().len(), 3);
        assert_eq!(state.filtered().len(), 1);

        state.apply(ListEvent::CreateSucceeded(bird(
            "4",
            "Steller's Jay",
            "Cyanocitta stelleri",
        )));
        assert_eq!(state.filtered().len(), 2);
    }

    #[test]
    fn update_replaces_matching_record() {
        let mut state = seeded();
        state.apply(ListEvent::UpdateSucceeded(bird(
            "2",
            "American Robin",
            "Turdus migratorius",
        )));

        assert_eq!(state.birds().len(), 2);
        let updated = state.birds().iter().find(|b| b.id == "2").unwrap();
        assert_eq!(updated.fields.common_name, "American Robin");
    }

    #[test]
    fn update_can_move_record_out_of_filter() {
        let mut state = seeded();
        state.apply(ListEvent::QueryChanged("jay".to_string()));
        assert_eq!(state.filtered().len(), 1);

        state.apply(ListEvent::UpdateSucceeded(bird(
            "1",
            "Northern Cardinal",
            "Cardinalis cardinalis",
        )));
        assert!(state.filtered().is_empty());
    }

    #[test]
    fn delete_removes_from_both_projections() {
        let mut state = seeded();
        state.apply(ListEvent::DeleteSucceeded("1".to_string()));

        assert_eq!(state.birds().len(), 1);
        assert_eq!(state.filtered().len(), 1);
        assert_eq!(state.birds()[0].id, "2");
    }
}
