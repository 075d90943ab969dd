use log::{info, warn};
use std::sync::Arc;

use crate::storage::UserStorage;
use shared::{LoginRequest, RegisterRequest, RegisterResponse, UserRole};

use super::errors::DomainError;

/// Service for registering and logging in users.
///
/// Storage failures never escape this service: `login` reports them as a
/// failed login and `register` as a "Registration error" message.
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserStorage>,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserStorage>) -> Self {
        Self { users }
    }

    /// Register a new user unless the username is already taken
    pub async fn register(&self, request: &RegisterRequest) -> RegisterResponse {
        info!("Registering user: username={}, role={}", request.username, request.role);

        match self.try_register(request).await {
            Ok(()) => {
                let message = match request.role {
                    UserRole::Customer => "Registered successfully!",
                    UserRole::Admin => "Admin registered successfully!",
                };
                info!("Registered user: {}", request.username);
                RegisterResponse {
                    success: true,
                    message: message.to_string(),
                }
            }
            Err(e) => {
                let message = match e.downcast_ref::<DomainError>() {
                    Some(DomainError::UsernameTaken) => DomainError::UsernameTaken.to_string(),
                    _ => format!("Registration error: {}", e),
                };
                warn!("Registration of {} failed: {}", request.username, e);
                RegisterResponse {
                    success: false,
                    message,
                }
            }
        }
    }

    async fn try_register(&self, request: &RegisterRequest) -> anyhow::Result<()> {
        if self.users.get_user_by_username(&request.username).await?.is_some() {
            return Err(DomainError::UsernameTaken.into());
        }
        self.users
            .store_user(&request.username, &request.password, request.role)
            .await?;
        Ok(())
    }

    /// True iff a user with exactly this username, password and role exists
    pub async fn login(&self, request: &LoginRequest) -> bool {
        info!("Login attempt: username={}, role={}", request.username, request.role);

        match self
            .users
            .find_by_credentials(&request.username, &request.password, request.role)
            .await
        {
            Ok(Some(_)) => {
                info!("Login succeeded for {}", request.username);
                true
            }
            Ok(None) => {
                info!("Login rejected for {}", request.username);
                false
            }
            Err(e) => {
                warn!("Login lookup failed for {}: {}", request.username, e);
                false
            }
        }
    }
}
