//! Form validation run before any data-access call.

use shared::{AnimalDraft, AnimalStatus, LoginRequest, RegisterRequest, UserRole};

use super::errors::FormError;

/// Parse the raw text of the add/edit animal dialog.
///
/// Name, species and status must be non-blank, age must parse as an integer
/// and price as a decimal. Text fields are kept as typed apart from
/// surrounding whitespace.
pub fn validate_animal_form(
    name: &str,
    species: &str,
    age: &str,
    price: &str,
    status: &str,
) -> Result<AnimalDraft, FormError> {
    if name.trim().is_empty() || species.trim().is_empty() || status.trim().is_empty() {
        return Err(FormError::InvalidAnimalFields);
    }

    let age = age.trim().parse::<i32>().map_err(|_| FormError::InvalidAnimalFields)?;
    let price = price.trim().parse::<f64>().map_err(|_| FormError::InvalidAnimalFields)?;
    if !price.is_finite() {
        return Err(FormError::InvalidAnimalFields);
    }
    let status = status.trim().parse::<AnimalStatus>().map_err(|_| FormError::InvalidAnimalFields)?;

    Ok(AnimalDraft {
        name: name.trim().to_string(),
        species: species.trim().to_string(),
        age,
        price,
        status,
    })
}

/// Check the login form and build the request
pub fn validate_login_form(username: &str, password: &str, role: UserRole) -> Result<LoginRequest, FormError> {
    if username.trim().is_empty() || password.trim().is_empty() {
        return Err(FormError::MissingCredentials);
    }

    Ok(LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
        role,
    })
}

/// Check the registration form and build the request
pub fn validate_register_form(
    username: &str,
    password: &str,
    confirm_password: &str,
    role: UserRole,
) -> Result<RegisterRequest, FormError> {
    if username.trim().is_empty() || password.trim().is_empty() || confirm_password.trim().is_empty() {
        return Err(FormError::MissingRegistrationFields);
    }
    if password != confirm_password {
        return Err(FormError::PasswordMismatch);
    }

    Ok(RegisterRequest {
        username: username.to_string(),
        password: password.to_string(),
        role,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_animal_form() {
        let draft = validate_animal_form(" Rex ", "Dog", "3", "120.50", "Available").unwrap();
        assert_eq!(draft.name, "Rex");
        assert_eq!(draft.species, "Dog");
        assert_eq!(draft.age, 3);
        assert_eq!(draft.price, 120.5);
        assert_eq!(draft.status, AnimalStatus::Available);
    }

    #[test]
    fn test_invalid_animal_forms() {
        let cases = [
            ("", "Dog", "3", "10", "Available"),
            ("Rex", "  ", "3", "10", "Available"),
            ("Rex", "Dog", "three", "10", "Available"),
            ("Rex", "Dog", "3.5", "10", "Available"),
            ("Rex", "Dog", "3", "ten", "Available"),
            ("Rex", "Dog", "3", "NaN", "Available"),
            ("Rex", "Dog", "3", "10", ""),
        ];
        for (name, species, age, price, status) in cases {
            let err = validate_animal_form(name, species, age, price, status).unwrap_err();
            assert_eq!(err.to_string(), "Please fill all fields correctly.");
        }
    }

    #[test]
    fn test_login_form() {
        assert_eq!(
            validate_login_form("", "pw", UserRole::Customer).unwrap_err(),
            FormError::MissingCredentials
        );
        let request = validate_login_form("alice", "pw", UserRole::Admin).unwrap();
        assert_eq!(request.username, "alice");
        assert_eq!(request.role, UserRole::Admin);
    }

    #[test]
    fn test_register_form() {
        assert_eq!(
            validate_register_form("alice", "pw", "", UserRole::Customer).unwrap_err(),
            FormError::MissingRegistrationFields
        );
        assert_eq!(
            validate_register_form("alice", "pw", "pw2", UserRole::Customer).unwrap_err().to_string(),
            "Passwords do not match"
        );
        assert!(validate_register_form("alice", "pw", "pw", UserRole::Customer).is_ok());
    }
}
