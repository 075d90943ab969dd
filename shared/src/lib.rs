use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role a user registers and logs in with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserRole {
    Customer,
    Admin,
}

impl UserRole {
    /// All roles in selector order
    pub const ALL: [UserRole; 2] = [UserRole::Customer, UserRole::Admin];

    /// String stored in the `users.role` column and shown in the UI
    pub fn display(&self) -> &'static str {
        match self {
            UserRole::Customer => "Customer",
            UserRole::Admin => "Admin",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display())
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Customer" => Ok(UserRole::Customer),
            "Admin" => Ok(UserRole::Admin),
            other => Err(format!("Unknown role: {}", other)),
        }
    }
}

/// A row of the `users` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    /// Stored and compared as plaintext
    pub password: String,
    pub role: UserRole,
}

/// Lifecycle state of an animal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnimalStatus {
    Available,
    Bought,
}

impl AnimalStatus {
    /// All statuses in selector order
    pub const ALL: [AnimalStatus; 2] = [AnimalStatus::Available, AnimalStatus::Bought];

    pub fn display(&self) -> &'static str {
        match self {
            AnimalStatus::Available => "Available",
            AnimalStatus::Bought => "Bought",
        }
    }
}

impl fmt::Display for AnimalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display())
    }
}

impl FromStr for AnimalStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Available" => Ok(AnimalStatus::Available),
            "Bought" => Ok(AnimalStatus::Bought),
            other => Err(format!("Unknown animal status: {}", other)),
        }
    }
}

/// A row of the `animals` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animal {
    pub id: i64,
    pub name: String,
    pub species: String,
    /// Age in whole years
    pub age: i32,
    pub price: f64,
    pub status: AnimalStatus,
    /// Username of the buyer; set exactly when `status` is `Bought`
    pub owner: Option<String>,
}

impl Animal {
    pub fn is_available(&self) -> bool {
        self.status == AnimalStatus::Available
    }

    /// Emoji shown next to the animal on browse and cart cards
    pub fn species_icon(&self) -> &'static str {
        match self.species.to_lowercase().as_str() {
            "dog" => "🐶",
            "cat" => "🐱",
            "rabbit" => "🐰",
            "bird" => "🐦",
            _ => "🐾",
        }
    }
}

/// Validated contents of the add/edit animal form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimalDraft {
    pub name: String,
    pub species: String,
    pub age: i32,
    pub price: f64,
    pub status: AnimalStatus,
}

/// A purchase receipt kept in memory for the current session only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Username of the buying customer
    pub customer: String,
    pub animal: Animal,
    pub timestamp: DateTime<Local>,
}

impl Transaction {
    pub fn new(customer: impl Into<String>, animal: Animal) -> Self {
        Self {
            customer: customer.into(),
            animal,
            timestamp: Local::now(),
        }
    }

    pub fn total(&self) -> f64 {
        self.animal.price
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub role: UserRole,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    pub role: UserRole,
}

/// Result of a successful purchase of one or more animals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutResponse {
    pub receipts: Vec<Transaction>,
    pub success_message: String,
}

impl CheckoutResponse {
    pub fn total(&self) -> f64 {
        self.receipts.iter().map(Transaction::total).sum()
    }
}

/// Format a price with a dollar sign and two decimals, e.g. `$35.50`
pub fn format_price(amount: f64) -> String {
    format!("${:.2}", amount)
}
