//! # Admin State Module
//!
//! The admin panel's animal list snapshot and the add/edit dialog form.

use shared::{Animal, AnimalStatus};

/// Whether the dialog creates a new animal or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimalDialogMode {
    Add,
    Edit(i64),
}

/// Raw text of the add/edit animal dialog
#[derive(Debug, Clone)]
pub struct AnimalDialogState {
    pub mode: AnimalDialogMode,
    pub name: String,
    pub species: String,
    pub age: String,
    pub price: String,
    pub status: AnimalStatus,
    pub error: Option<String>,
}

impl AnimalDialogState {
    pub fn for_add() -> Self {
        Self {
            mode: AnimalDialogMode::Add,
            name: String::new(),
            species: String::new(),
            age: String::new(),
            price: String::new(),
            status: AnimalStatus::Available,
            error: None,
        }
    }

    pub fn for_edit(animal: &Animal) -> Self {
        Self {
            mode: AnimalDialogMode::Edit(animal.id),
            name: animal.name.clone(),
            species: animal.species.clone(),
            age: animal.age.to_string(),
            price: animal.price.to_string(),
            status: animal.status,
            error: None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            AnimalDialogMode::Add => "Add Animal",
            AnimalDialogMode::Edit(_) => "Modify Animal",
        }
    }
}

/// State of the admin panel
#[derive(Debug, Default)]
pub struct AdminState {
    /// Snapshot of every animal, replaced after each mutation
    pub animals: Vec<Animal>,

    /// Open add/edit dialog, if any
    pub dialog: Option<AnimalDialogState>,

    /// Whether the snapshot has been fetched since login
    pub loaded: bool,
}

impl AdminState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_dialog_prefills_fields() {
        let animal = Animal {
            id: 7,
            name: "Rex".to_string(),
            species: "Dog".to_string(),
            age: 3,
            price: 99.5,
            status: AnimalStatus::Bought,
            owner: Some("alice".to_string()),
        };

        let dialog = AnimalDialogState::for_edit(&animal);
        assert_eq!(dialog.mode, AnimalDialogMode::Edit(7));
        assert_eq!(dialog.age, "3");
        assert_eq!(dialog.price, "99.5");
        assert_eq!(dialog.status, AnimalStatus::Bought);
        assert_eq!(dialog.title(), "Modify Animal");
        assert_eq!(AnimalDialogState::for_add().title(), "Add Animal");
    }
}
