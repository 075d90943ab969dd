//! Client-side shopping cart. Nothing here touches the database; items are
//! not reserved and may be sold to someone else before checkout.

use shared::{format_price, Animal};

/// One animal in the cart with its checkbox state
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub animal: Animal,
    pub selected: bool,
}

#[derive(Debug, Default, Clone)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an animal, selected. Returns false if it is already in the cart.
    pub fn add(&mut self, animal: Animal) -> bool {
        if self.contains(animal.id) {
            return false;
        }
        self.lines.push(CartLine { animal, selected: true });
        true
    }

    pub fn contains(&self, animal_id: i64) -> bool {
        self.lines.iter().any(|l| l.animal.id == animal_id)
    }

    pub fn set_selected(&mut self, animal_id: i64, selected: bool) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.animal.id == animal_id) {
            line.selected = selected;
        }
    }

    pub fn toggle(&mut self, animal_id: i64) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.animal.id == animal_id) {
            line.selected = !line.selected;
        }
    }

    /// Drop every deselected line; returns how many were removed
    pub fn remove_unchecked(&mut self) -> usize {
        let before = self.lines.len();
        self.lines.retain(|l| l.selected);
        before - self.lines.len()
    }

    /// Drop the given animals, e.g. after they were bought
    pub fn remove_ids(&mut self, animal_ids: &[i64]) {
        self.lines.retain(|l| !animal_ids.contains(&l.animal.id));
    }

    pub fn selected_animals(&self) -> Vec<Animal> {
        self.lines
            .iter()
            .filter(|l| l.selected)
            .map(|l| l.animal.clone())
            .collect()
    }

    pub fn has_selection(&self) -> bool {
        self.lines.iter().any(|l| l.selected)
    }

    /// Sum of the selected animals' prices
    pub fn total(&self) -> f64 {
        self.lines.iter().filter(|l| l.selected).map(|l| l.animal.price).sum()
    }

    pub fn formatted_total(&self) -> String {
        format_price(self.total())
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Drop lines whose animal is not in `available`, e.g. sold to someone
    /// else since it was added. Returns the dropped animals.
    pub fn retain_available(&mut self, available: &[Animal]) -> Vec<Animal> {
        let (kept, dropped): (Vec<CartLine>, Vec<CartLine>) = self
            .lines
            .drain(..)
            .partition(|l| available.iter().any(|a| a.id == l.animal.id));
        self.lines = kept;
        dropped.into_iter().map(|l| l.animal).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::AnimalStatus;

    fn animal(id: i64, price: f64) -> Animal {
        Animal {
            id,
            name: format!("Pet {}", id),
            species: "Dog".to_string(),
            age: 1,
            price,
            status: AnimalStatus::Available,
            owner: None,
        }
    }

    #[test]
    fn test_total_of_selected_lines() {
        let mut cart = Cart::new();
        cart.add(animal(1, 10.00));
        cart.add(animal(2, 25.50));

        assert_eq!(cart.formatted_total(), "$35.50");
        assert!((cart.total() - 35.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_deselected_lines_excluded_from_total() {
        let mut cart = Cart::new();
        cart.add(animal(1, 10.00));
        cart.add(animal(2, 25.50));
        cart.toggle(2);

        assert_eq!(cart.formatted_total(), "$10.00");
        assert_eq!(cart.selected_animals().len(), 1);
    }

    #[test]
    fn test_no_duplicates() {
        let mut cart = Cart::new();
        assert!(cart.add(animal(1, 10.0)));
        assert!(!cart.add(animal(1, 10.0)));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_remove_unchecked_keeps_selected() {
        let mut cart = Cart::new();
        cart.add(animal(1, 10.0));
        cart.add(animal(2, 20.0));
        cart.add(animal(3, 30.0));
        cart.set_selected(1, false);
        cart.set_selected(3, false);

        assert_eq!(cart.remove_unchecked(), 2);
        assert_eq!(cart.len(), 1);
        assert!(cart.contains(2));
    }

    #[test]
    fn test_retain_available_drops_sold_lines() {
        let mut cart = Cart::new();
        cart.add(animal(1, 10.0));
        cart.add(animal(2, 25.5));
        cart.set_selected(1, false);

        let dropped = cart.retain_available(&[animal(1, 10.0)]);

        assert_eq!(dropped.len(), 1);
        assert_eq!(dropped[0].id, 2);
        assert!(cart.contains(1));
        assert!(!cart.contains(2));
        // selection state of kept lines is untouched
        assert!(!cart.has_selection());
    }

    #[test]
    fn test_remove_ids_and_selection() {
        let mut cart = Cart::new();
        cart.add(animal(1, 10.0));
        cart.add(animal(2, 20.0));
        cart.remove_ids(&[1]);

        assert!(!cart.contains(1));
        assert!(cart.has_selection());
        cart.toggle(2);
        assert!(!cart.has_selection());
        assert_eq!(cart.formatted_total(), "$0.00");
    }
}
