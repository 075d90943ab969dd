//! # Browse Module
//!
//! Filtering of the customer's in-memory animal snapshot.
//!
//! The snapshot holds available animals only and is replaced wholesale on
//! every refresh. The filtered view is derived from it and recomputed
//! whenever the query, the category or the snapshot changes.

use shared::Animal;

/// Category value that disables species filtering
pub const ALL_CATEGORIES: &str = "All";

/// Current search inputs of the browse page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseFilter {
    /// Free text matched case-insensitively against name or species
    pub query: String,
    /// `"All"` or a species name
    pub category: String,
}

impl Default for BrowseFilter {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: ALL_CATEGORIES.to_string(),
        }
    }
}

impl BrowseFilter {
    pub fn matches(&self, animal: &Animal) -> bool {
        let category_ok = self.category == ALL_CATEGORIES || animal.species.eq_ignore_ascii_case(&self.category);

        let query = self.query.trim().to_lowercase();
        let query_ok = query.is_empty()
            || animal.name.to_lowercase().contains(&query)
            || animal.species.to_lowercase().contains(&query);

        category_ok && query_ok
    }
}

/// Apply the filter to a snapshot, preserving snapshot order
pub fn filter_animals(animals: &[Animal], filter: &BrowseFilter) -> Vec<Animal> {
    animals.iter().filter(|a| filter.matches(a)).cloned().collect()
}

/// `"All"` followed by the distinct species of the snapshot in first-seen order
pub fn categories(animals: &[Animal]) -> Vec<String> {
    let mut result = vec![ALL_CATEGORIES.to_string()];
    for animal in animals {
        if !result.iter().skip(1).any(|s| s == &animal.species) {
            result.push(animal.species.clone());
        }
    }
    result
}

/// Snapshot plus derived view for the browse page
#[derive(Debug, Default, Clone)]
pub struct BrowseState {
    snapshot: Vec<Animal>,
    filtered: Vec<Animal>,
    filter: BrowseFilter,
}

impl BrowseState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the snapshot with freshly fetched animals.
    /// Anything not available is dropped.
    pub fn replace_snapshot(&mut self, animals: Vec<Animal>) {
        self.snapshot = animals.into_iter().filter(Animal::is_available).collect();
        if !categories(&self.snapshot).contains(&self.filter.category) {
            self.filter.category = ALL_CATEGORIES.to_string();
        }
        self.recompute();
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if query != self.filter.query {
            self.filter.query = query;
            self.recompute();
        }
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        let category = category.into();
        if category != self.filter.category {
            self.filter.category = category;
            self.recompute();
        }
    }

    pub fn filter(&self) -> &BrowseFilter {
        &self.filter
    }

    pub fn snapshot(&self) -> &[Animal] {
        &self.snapshot
    }

    pub fn filtered(&self) -> &[Animal] {
        &self.filtered
    }

    pub fn categories(&self) -> Vec<String> {
        categories(&self.snapshot)
    }

    fn recompute(&mut self) {
        self.filtered = filter_animals(&self.snapshot, &self.filter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::AnimalStatus;

    fn animal(id: i64, name: &str, species: &str) -> Animal {
        Animal {
            id,
            name: name.to_string(),
            species: species.to_string(),
            age: 1,
            price: 10.0,
            status: AnimalStatus::Available,
            owner: None,
        }
    }

    fn rex_and_milo() -> Vec<Animal> {
        vec![animal(1, "Rex", "Dog"), animal(2, "Milo", "Cat")]
    }

    fn names(animals: &[Animal]) -> Vec<&str> {
        animals.iter().map(|a| a.name.as_str()).collect()
    }

    #[test]
    fn test_filter_by_category() {
        let filter = BrowseFilter {
            query: String::new(),
            category: "Dog".to_string(),
        };
        assert_eq!(names(&filter_animals(&rex_and_milo(), &filter)), vec!["Rex"]);
    }

    #[test]
    fn test_filter_by_query_is_case_insensitive() {
        let filter = BrowseFilter {
            query: "mi".to_string(),
            category: ALL_CATEGORIES.to_string(),
        };
        assert_eq!(names(&filter_animals(&rex_and_milo(), &filter)), vec!["Milo"]);

        let filter = BrowseFilter {
            query: "DOG".to_string(),
            category: ALL_CATEGORIES.to_string(),
        };
        assert_eq!(names(&filter_animals(&rex_and_milo(), &filter)), vec!["Rex"]);
    }

    #[test]
    fn test_query_and_category_combine() {
        let filter = BrowseFilter {
            query: "rex".to_string(),
            category: "Cat".to_string(),
        };
        assert!(filter_animals(&rex_and_milo(), &filter).is_empty());
    }

    #[test]
    fn test_categories_follow_snapshot() {
        let mut animals = rex_and_milo();
        animals.push(animal(3, "Fido", "Dog"));
        assert_eq!(categories(&animals), vec!["All", "Dog", "Cat"]);
        assert_eq!(categories(&[]), vec!["All"]);
    }

    #[test]
    fn test_state_drops_bought_animals_and_recomputes() {
        let mut state = BrowseState::new();
        let mut animals = rex_and_milo();
        animals[1].status = AnimalStatus::Bought;
        animals[1].owner = Some("alice".to_string());

        state.replace_snapshot(animals);
        assert_eq!(names(state.filtered()), vec!["Rex"]);
        assert_eq!(state.categories(), vec!["All", "Dog"]);

        state.set_query("zzz");
        assert!(state.filtered().is_empty());
        state.set_query("");
        assert_eq!(state.filtered().len(), 1);
    }

    #[test]
    fn test_vanished_category_resets_to_all() {
        let mut state = BrowseState::new();
        state.replace_snapshot(rex_and_milo());
        state.set_category("Cat");
        assert_eq!(names(state.filtered()), vec!["Milo"]);

        // Milo was sold elsewhere; the refreshed snapshot has no cats left
        state.replace_snapshot(vec![animal(1, "Rex", "Dog")]);
        assert_eq!(state.filter().category, ALL_CATEGORIES);
        assert_eq!(names(state.filtered()), vec!["Rex"]);
    }
}
