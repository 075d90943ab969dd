//! # Navigation State Module
//!
//! The single "current screen" value that decides what the app renders,
//! plus the logged-in session and the customer's sidebar page.
//!
//! ## Screen flow:
//! ```text
//! Landing → MainMenu → Login ─┬→ AdminPanel ──┐
//!              ↑   └→ Register │→ CustomerPanel ┤
//!              └───────────────┴── logout ──────┘
//! ```
//!
//! Transitions are plain assignments made by UI callbacks. There is no
//! history stack and nothing is persisted across restarts.

use log::info;
use shared::UserRole;

/// Top-level screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Landing,
    MainMenu,
    Login,
    Register,
    AdminPanel,
    CustomerPanel,
}

/// Sub-pages reachable from the customer sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerPage {
    Home,
    Browse,
    Cart,
    Purchases,
}

impl CustomerPage {
    pub const ALL: [CustomerPage; 4] = [
        CustomerPage::Home,
        CustomerPage::Browse,
        CustomerPage::Purchases,
        CustomerPage::Cart,
    ];

    /// Sidebar label
    pub fn title(&self) -> &'static str {
        match self {
            CustomerPage::Home => "🏠 Home",
            CustomerPage::Browse => "🐱 Browse",
            CustomerPage::Cart => "💳 Cart",
            CustomerPage::Purchases => "💰 My Purchases",
        }
    }
}

/// The logged-in user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub username: String,
    pub role: UserRole,
}

#[derive(Debug)]
pub struct NavigationState {
    pub screen: Screen,
    pub customer_page: CustomerPage,
    pub session: Option<Session>,
}

impl NavigationState {
    pub fn new() -> Self {
        Self {
            screen: Screen::Landing,
            customer_page: CustomerPage::Home,
            session: None,
        }
    }

    /// Leave the landing page
    pub fn enter(&mut self) {
        self.go_to(Screen::MainMenu);
    }

    pub fn open_login(&mut self) {
        self.go_to(Screen::Login);
    }

    pub fn open_register(&mut self) {
        self.go_to(Screen::Register);
    }

    pub fn back_to_menu(&mut self) {
        self.go_to(Screen::MainMenu);
    }

    /// Start a session and route to the role's panel
    pub fn login_succeeded(&mut self, username: &str, role: UserRole) {
        self.session = Some(Session {
            username: username.to_string(),
            role,
        });
        self.customer_page = CustomerPage::Home;
        match role {
            UserRole::Admin => self.go_to(Screen::AdminPanel),
            UserRole::Customer => self.go_to(Screen::CustomerPanel),
        }
    }

    /// End the session and return to the main menu
    pub fn logout(&mut self) {
        if let Some(session) = self.session.take() {
            info!("👋 Logging out {}", session.username);
        }
        self.customer_page = CustomerPage::Home;
        self.go_to(Screen::MainMenu);
    }

    pub fn open_customer_page(&mut self, page: CustomerPage) {
        if self.customer_page != page {
            info!("📄 Customer page: {:?} -> {:?}", self.customer_page, page);
            self.customer_page = page;
        }
    }

    pub fn username(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.username.as_str())
    }

    fn go_to(&mut self, screen: Screen) {
        info!("🧭 Screen: {:?} -> {:?}", self.screen, screen);
        self.screen = screen;
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_landing() {
        let nav = NavigationState::new();
        assert_eq!(nav.screen, Screen::Landing);
        assert!(nav.session.is_none());
    }

    #[test]
    fn test_menu_transitions() {
        let mut nav = NavigationState::new();
        nav.enter();
        assert_eq!(nav.screen, Screen::MainMenu);
        nav.open_register();
        assert_eq!(nav.screen, Screen::Register);
        nav.back_to_menu();
        nav.open_login();
        assert_eq!(nav.screen, Screen::Login);
    }

    #[test]
    fn test_login_routes_by_role() {
        let mut nav = NavigationState::new();
        nav.login_succeeded("root", UserRole::Admin);
        assert_eq!(nav.screen, Screen::AdminPanel);

        nav.logout();
        nav.login_succeeded("alice", UserRole::Customer);
        assert_eq!(nav.screen, Screen::CustomerPanel);
        assert_eq!(nav.customer_page, CustomerPage::Home);
        assert_eq!(nav.username(), Some("alice"));
    }

    #[test]
    fn test_logout_resets_session() {
        let mut nav = NavigationState::new();
        nav.login_succeeded("alice", UserRole::Customer);
        nav.open_customer_page(CustomerPage::Cart);

        nav.logout();

        assert_eq!(nav.screen, Screen::MainMenu);
        assert_eq!(nav.customer_page, CustomerPage::Home);
        assert!(nav.session.is_none());
        assert_eq!(nav.username(), None);
    }
}
