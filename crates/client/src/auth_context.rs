//! Session context for the Dioxus views.
//!
//! [`AuthProvider`] owns the one [`SessionManager`] of the app and restores
//! the persisted token on mount. Views reach it with
//! `use_context::<AuthContext>()`.
//!
//! Async operations work on a copy of the manager and write it back when
//! done, so no signal borrow is held across an await.

use dioxus::prelude::*;
use vitrine_shared::{RegisterForm, User};

use crate::api_client::ApiClient;
use crate::auth_session::{AuthResult, Session, SessionManager};
use crate::config::ClientConfig;
use crate::log_error;
use crate::profile_form::{save_profile_and_refresh, ProfileForm, SaveError};
use crate::storage::LocalTokenStore;

#[derive(Clone, Copy)]
pub struct AuthContext {
    pub manager: Signal<SessionManager<LocalTokenStore>>,
}

#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut manager = use_signal(|| {
        let config = ClientConfig::from_env().unwrap_or_else(|e| {
            log_error!("{e:#}; falling back to the default API");
            ClientConfig::default()
        });
        SessionManager::new(ApiClient::new(&config), LocalTokenStore)
    });

    use_future(move || async move {
        let mut restored = manager.peek().clone();
        restored.restore().await;
        manager.set(restored);
    });

    use_context_provider(|| AuthContext { manager });

    children
}

impl AuthContext {
    pub fn session(&self) -> Session {
        self.manager.read().session().clone()
    }

    pub fn user(&self) -> Option<User> {
        self.manager.read().user().cloned()
    }

    pub fn is_authenticated(&self) -> bool {
        self.manager.read().is_authenticated()
    }

    pub fn is_loading(&self) -> bool {
        self.manager.read().is_loading()
    }

    pub fn is_admin(&self) -> bool {
        self.manager.read().user().is_some_and(User::is_admin)
    }

    /// An API client carrying the current token.
    pub fn client(&self) -> ApiClient {
        self.manager.read().client()
    }

    pub async fn login(mut self, email: String, password: String) -> AuthResult {
        let mut manager = self.manager.peek().clone();
        self.manager.write().set_loading(true);
        let result = manager.login(&email, &password).await;
        self.manager.set(manager);
        result
    }

    pub async fn register(mut self, form: RegisterForm) -> AuthResult {
        let mut manager = self.manager.peek().clone();
        self.manager.write().set_loading(true);
        let result = manager.register(&form).await;
        self.manager.set(manager);
        result
    }

    pub fn logout(&mut self) {
        self.manager.write().logout();
    }

    /// Save the provider profile and pick up the re-fetched user record.
    pub async fn save_profile(mut self, form: ProfileForm) -> Result<String, SaveError> {
        let mut manager = self.manager.peek().clone();
        let result = save_profile_and_refresh(&mut manager, &form).await;
        self.manager.set(manager);
        result
    }

    pub async fn forgot_password(self, email: String) -> AuthResult<String> {
        let manager = self.manager.peek().clone();
        manager.forgot_password(&email).await
    }
}

/// Redirect to the login page once the session is known to be anonymous.
///
/// Returns `true` while the page may render its content.
pub fn use_require_auth() -> bool {
    let auth = use_context::<AuthContext>();
    let nav = use_navigator();

    use_effect(move || {
        if !auth.is_loading() && !auth.is_authenticated() {
            nav.replace(crate::routes::Route::Login {});
        }
    });

    !auth.is_loading() && auth.is_authenticated()
}
