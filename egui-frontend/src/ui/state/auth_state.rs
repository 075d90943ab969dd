//! # Auth State Module
//!
//! Text fields, selected role and inline feedback of the login and
//! registration forms.

use shared::UserRole;

/// Inline message under a form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMessage {
    Success(String),
    Error(String),
}

#[derive(Debug)]
pub struct LoginFormState {
    pub username: String,
    pub password: String,
    pub role: UserRole,
    pub message: Option<FormMessage>,
}

impl LoginFormState {
    pub fn new() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            role: UserRole::Customer,
            message: None,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

#[derive(Debug)]
pub struct RegisterFormState {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
    pub role: UserRole,
    pub message: Option<FormMessage>,
}

impl RegisterFormState {
    pub fn new() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            role: UserRole::Customer,
            message: None,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

/// Both auth forms
#[derive(Debug)]
pub struct AuthState {
    pub login: LoginFormState,
    pub register: RegisterFormState,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            login: LoginFormState::new(),
            register: RegisterFormState::new(),
        }
    }

    pub fn clear(&mut self) {
        self.login.clear();
        self.register.clear();
    }
}
