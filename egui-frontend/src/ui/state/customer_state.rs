//! # Customer State Module
//!
//! Everything the customer panel keeps in memory between frames: the
//! browse snapshot, the cart, the owned-animals list and this session's
//! receipts. All of it is dropped on logout.

use petshop_backend::{BrowseState, Cart};
use shared::{Animal, CheckoutResponse, Transaction};

#[derive(Debug, Default)]
pub struct CustomerState {
    /// Available animals and the filtered view
    pub browse: BrowseState,

    /// Whether the browse snapshot has been fetched since login
    pub browse_loaded: bool,

    pub cart: Cart,

    /// Animals owned by the customer, read from the database
    pub owned: Vec<Animal>,

    /// Receipts of purchases made since login; never persisted
    pub session_receipts: Vec<Transaction>,

    /// Animal shown in the details dialog
    pub detail: Option<Animal>,

    /// Purchase confirmation dialog contents
    pub confirmation: Option<CheckoutResponse>,
}

impl CustomerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
