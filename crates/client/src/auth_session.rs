//! Authentication session management with persisted bearer token.
//!
//! [`SessionManager`] is the single owner of "who is logged in". Other code
//! reads the [`Session`] and obtains an authenticated [`ApiClient`] from it,
//! but only the manager mutates either.
//!
//! ```text
//! anonymous --login/register ok--> authenticated
//! authenticated --logout | token rejected on restore--> anonymous
//! ```

use vitrine_shared::{
    ApiError, AuthResponse, LoginForm, RegisterForm, User, ValidationError,
    CONNECTION_ERROR_MESSAGE,
};

use crate::api_client::ApiClient;
use crate::storage::{LocalTokenStore, TokenStore};
use crate::{log_error, log_info, log_warn};

const LOGIN_FALLBACK: &str = "Erro ao fazer login";
const REGISTER_FALLBACK: &str = "Erro ao criar conta";
const FORGOT_PASSWORD_FALLBACK: &str = "Erro ao enviar e-mail";

/// Snapshot of the authentication state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<User>,
    /// True during the initial restore and in-flight login/register calls.
    pub loading: bool,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }
}

/// Why a login, registration or password-recovery attempt failed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AuthError {
    /// Caught client-side; no request was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The backend refused, or could not be reached.
    #[error("{0}")]
    Rejected(String),
}

pub type AuthResult<T = ()> = Result<T, AuthError>;

#[derive(Debug, Clone)]
pub struct SessionManager<S = LocalTokenStore> {
    api: ApiClient,
    store: S,
    session: Session,
}

impl<S: TokenStore> SessionManager<S> {
    /// A manager that has not restored yet: anonymous and loading.
    pub fn new(api: ApiClient, store: S) -> Self {
        Self {
            api: api.with_token(None),
            store,
            session: Session {
                loading: true,
                ..Session::default()
            },
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn user(&self) -> Option<&User> {
        self.session.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn is_loading(&self) -> bool {
        self.session.loading
    }

    /// An API client carrying the current token, if any.
    pub fn client(&self) -> ApiClient {
        self.api.with_token(self.session.token.clone())
    }

    pub(crate) fn set_loading(&mut self, loading: bool) {
        self.session.loading = loading;
    }

    /// Validate a persisted token against `/auth/me`.
    ///
    /// Never fails: a rejected token or an unreachable backend both leave
    /// the session anonymous and the stored token removed.
    pub async fn restore(&mut self) {
        self.session.loading = true;

        if let Some(token) = self.store.load() {
            match self.api.with_token(Some(token.clone())).me().await {
                Ok(user) if user.has_identity() => {
                    log_info!("Restored session for user {}", user.id);
                    self.session.token = Some(token);
                    self.session.user = Some(user);
                }
                Ok(_) => {
                    log_warn!("Persisted token no longer identifies a user; discarding");
                    self.discard();
                }
                Err(e) => {
                    log_warn!("Failed to restore session: {e}");
                    self.discard();
                }
            }
        }

        self.session.loading = false;
    }

    pub async fn login(&mut self, email: &str, password: &str) -> AuthResult {
        let form = LoginForm {
            email: email.to_string(),
            password: password.to_string(),
        };
        let req = form.validate()?;

        self.session.loading = true;
        let result = self.api.login(&req).await;
        self.session.loading = false;

        self.accept(result, LOGIN_FALLBACK)
    }

    /// Validate the form, then create the account. Validation failures are
    /// reported before any request is made.
    pub async fn register(&mut self, form: &RegisterForm) -> AuthResult {
        let req = form.validate()?;

        self.session.loading = true;
        let result = self.api.register(&req).await;
        self.session.loading = false;

        self.accept(result, REGISTER_FALLBACK)
    }

    /// Forget the session and the persisted token.
    pub fn logout(&mut self) {
        log_info!("Logging out");
        self.discard();
    }

    /// Re-fetch the user record. Silently does nothing without a token.
    pub async fn refresh(&mut self) {
        if self.session.token.is_none() {
            return;
        }
        match self.client().me().await {
            Ok(user) if user.has_identity() => self.session.user = Some(user),
            Ok(_) => log_warn!("Refresh returned no identity; keeping current user"),
            Err(e) => log_error!("Failed to refresh user: {e}"),
        }
    }

    /// Ask the backend to send a password-reset e-mail. Returns the
    /// backend's confirmation message.
    pub async fn forgot_password(&self, email: &str) -> AuthResult<String> {
        let email = email.trim();
        if email.is_empty() {
            return Err(ValidationError::MissingEmail.into());
        }
        if !vitrine_shared::is_valid_email(email) {
            return Err(ValidationError::InvalidEmail.into());
        }

        match self.api.forgot_password(email).await {
            Ok(resp) if resp.success => Ok(resp.message.unwrap_or_default()),
            Ok(resp) => Err(AuthError::Rejected(
                resp.message
                    .unwrap_or_else(|| FORGOT_PASSWORD_FALLBACK.to_string()),
            )),
            Err(ApiError::Http { message, .. }) => Err(AuthError::Rejected(message)),
            Err(e) => {
                log_error!("Password recovery failed: {e}");
                Err(AuthError::Rejected(CONNECTION_ERROR_MESSAGE.to_string()))
            }
        }
    }

    fn accept(&mut self, result: Result<AuthResponse, ApiError>, fallback: &str) -> AuthResult {
        match result {
            Ok(AuthResponse {
                success: true,
                token: Some(token),
                user: Some(user),
                ..
            }) => {
                self.store.save(&token);
                self.session.token = Some(token);
                self.session.user = Some(user);
                Ok(())
            }
            Ok(resp) => Err(AuthError::Rejected(
                resp.message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| fallback.to_string()),
            )),
            Err(e) => {
                log_error!("Authentication request failed: {e}");
                Err(AuthError::Rejected(e.user_message()))
            }
        }
    }

    fn discard(&mut self) {
        self.store.clear();
        self.session.token = None;
        self.session.user = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::storage::MemoryTokenStore;

    const USER_JSON: &str = r#"{"id":7,"email":"ana@example.com","nome":"Ana","role":"anunciante","tem_perfil":false,"plano":"free"}"#;

    fn manager(
        server: &mockito::Server,
        store: MemoryTokenStore,
    ) -> SessionManager<MemoryTokenStore> {
        let api = ApiClient::new(&ClientConfig::default()).with_base_url(server.url());
        SessionManager::new(api, store)
    }

    fn register_form() -> RegisterForm {
        RegisterForm {
            name: "Ana Souza".into(),
            email: "ana@example.com".into(),
            whatsapp: String::new(),
            password: "segredo1".into(),
            confirm_password: "segredo1".into(),
            accepts_terms: true,
        }
    }

    #[tokio::test]
    async fn restore_without_token_is_anonymous_and_offline() {
        let mut server = mockito::Server::new_async().await;
        let me = server.mock("GET", "/auth/me").expect(0).create_async().await;

        let mut mgr = manager(&server, MemoryTokenStore::default());
        assert!(mgr.is_loading());
        mgr.restore().await;

        assert!(!mgr.is_loading());
        assert!(!mgr.is_authenticated());
        me.assert_async().await;
    }

    #[tokio::test]
    async fn restore_accepts_valid_token() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/auth/me")
            .match_header("authorization", "Bearer saved")
            .with_body(USER_JSON)
            .create_async()
            .await;

        let mut mgr = manager(&server, MemoryTokenStore::with_token("saved"));
        mgr.restore().await;

        assert!(mgr.is_authenticated());
        assert_eq!(mgr.user().map(|u| u.id), Some(7));
        assert_eq!(mgr.client().token(), Some("saved"));
    }

    #[tokio::test]
    async fn restore_with_rejected_token_reverts_to_anonymous() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/auth/me")
            .with_status(401)
            .with_body(r#"{"code":"jwt_auth_invalid_token","message":"Token inválido"}"#)
            .create_async()
            .await;

        let store = MemoryTokenStore::with_token("expired");
        let mut mgr = manager(&server, store.clone());
        mgr.restore().await;

        assert!(!mgr.is_authenticated());
        assert!(!mgr.is_loading());
        assert_eq!(mgr.session().token, None);
        assert_eq!(store.load(), None);
    }

    #[tokio::test]
    async fn restore_with_identityless_answer_discards_token() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/auth/me")
            .with_body("{}")
            .create_async()
            .await;

        let store = MemoryTokenStore::with_token("stale");
        let mut mgr = manager(&server, store.clone());
        mgr.restore().await;

        assert!(!mgr.is_authenticated());
        assert_eq!(store.load(), None);
    }

    #[tokio::test]
    async fn restore_keeps_session_despite_odd_plan_and_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/auth/me")
            .with_body(
                r#"{"id":7,"email":"ana@x.com","nome":"Ana","role":null,"tem_perfil":true,"perfil_status":"private","plano":""}"#,
            )
            .create_async()
            .await;

        let store = MemoryTokenStore::with_token("saved");
        let mut mgr = manager(&server, store.clone());
        mgr.restore().await;

        assert!(mgr.is_authenticated());
        assert_eq!(store.load().as_deref(), Some("saved"));
        let user = mgr.user().unwrap();
        assert_eq!(user.plan_tier(), vitrine_shared::PlanTier::Free);
        assert_eq!(
            user.listing_status,
            Some(vitrine_shared::ModerationStatus::Unknown)
        );
    }

    #[tokio::test]
    async fn login_success_persists_token() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/auth/login")
            .with_body(format!(
                r#"{{"success":true,"token":"fresh","user":{USER_JSON}}}"#
            ))
            .create_async()
            .await;

        let store = MemoryTokenStore::default();
        let mut mgr = manager(&server, store.clone());
        mgr.restore().await;

        mgr.login("ana@example.com", "segredo1").await.unwrap();
        assert!(mgr.is_authenticated());
        assert!(!mgr.is_loading());
        assert_eq!(store.load().as_deref(), Some("fresh"));
    }

    #[tokio::test]
    async fn login_failure_is_a_result_not_a_panic() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/auth/login")
            .with_status(403)
            .with_body(r#"{"message":"E-mail ou senha incorretos"}"#)
            .create_async()
            .await;

        let mut mgr = manager(&server, MemoryTokenStore::default());
        let err = mgr.login("ana@example.com", "errada").await.unwrap_err();

        assert_eq!(err, AuthError::Rejected("E-mail ou senha incorretos".into()));
        assert!(!mgr.is_authenticated());
        assert!(!mgr.is_loading());
    }

    #[tokio::test]
    async fn login_unsuccessful_body_uses_fallback_message() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/auth/login")
            .with_body(r#"{"success":false}"#)
            .create_async()
            .await;

        let mut mgr = manager(&server, MemoryTokenStore::default());
        let err = mgr.login("ana@example.com", "x").await.unwrap_err();
        assert_eq!(err.to_string(), LOGIN_FALLBACK);
    }

    #[tokio::test]
    async fn register_with_short_password_never_hits_backend() {
        let mut server = mockito::Server::new_async().await;
        let endpoint = server
            .mock("POST", "/auth/register")
            .expect(0)
            .create_async()
            .await;

        let mut form = register_form();
        form.password = "abc12".into();
        form.confirm_password = "abc12".into();

        let mut mgr = manager(&server, MemoryTokenStore::default());
        let err = mgr.register(&form).await.unwrap_err();

        assert_eq!(err, AuthError::Validation(ValidationError::PasswordTooShort));
        endpoint.assert_async().await;
    }

    #[tokio::test]
    async fn register_with_mismatched_confirmation_reports_it() {
        let mut server = mockito::Server::new_async().await;
        let endpoint = server
            .mock("POST", "/auth/register")
            .expect(0)
            .create_async()
            .await;

        let mut form = register_form();
        form.confirm_password = "segredo2".into();

        let mut mgr = manager(&server, MemoryTokenStore::default());
        let err = mgr.register(&form).await.unwrap_err();

        assert_eq!(err.to_string(), "As senhas não conferem");
        endpoint.assert_async().await;
    }

    #[tokio::test]
    async fn register_success_authenticates() {
        let mut server = mockito::Server::new_async().await;
        let endpoint = server
            .mock("POST", "/auth/register")
            .match_body(mockito::Matcher::PartialJson(serde_json::json!({
                "nome": "Ana Souza",
                "email": "ana@example.com"
            })))
            .with_body(format!(
                r#"{{"success":true,"token":"new","user":{USER_JSON}}}"#
            ))
            .create_async()
            .await;

        let mut mgr = manager(&server, MemoryTokenStore::default());
        mgr.register(&register_form()).await.unwrap();

        assert!(mgr.is_authenticated());
        endpoint.assert_async().await;
    }

    #[tokio::test]
    async fn logout_clears_memory_and_storage() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/auth/me")
            .with_body(USER_JSON)
            .create_async()
            .await;

        let store = MemoryTokenStore::with_token("saved");
        let mut mgr = manager(&server, store.clone());
        mgr.restore().await;
        assert!(mgr.is_authenticated());

        mgr.logout();
        assert!(!mgr.is_authenticated());
        assert_eq!(mgr.client().token(), None);
        assert_eq!(store.load(), None);
    }

    #[tokio::test]
    async fn refresh_without_token_is_a_no_op() {
        let mut server = mockito::Server::new_async().await;
        let me = server.mock("GET", "/auth/me").expect(0).create_async().await;

        let mut mgr = manager(&server, MemoryTokenStore::default());
        mgr.refresh().await;

        assert!(mgr.user().is_none());
        me.assert_async().await;
    }

    #[tokio::test]
    async fn refresh_replaces_user_record() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/auth/me")
            .with_body(USER_JSON)
            .expect(1)
            .create_async()
            .await;

        let mut mgr = manager(&server, MemoryTokenStore::with_token("saved"));
        mgr.restore().await;

        server.reset_async().await;
        server
            .mock("GET", "/auth/me")
            .with_body(
                r#"{"id":7,"email":"ana@example.com","nome":"Ana","role":"anunciante","tem_perfil":true,"perfil_status":"pending","plano":"premium"}"#,
            )
            .create_async()
            .await;

        mgr.refresh().await;
        let user = mgr.user().unwrap();
        assert!(user.has_listing);
        assert_eq!(user.plan_tier(), vitrine_shared::PlanTier::Premium);
    }

    #[tokio::test]
    async fn forgot_password_validates_email_first() {
        let mut server = mockito::Server::new_async().await;
        let endpoint = server
            .mock("POST", "/auth/forgot-password")
            .expect(0)
            .create_async()
            .await;

        let mgr = manager(&server, MemoryTokenStore::default());
        assert_eq!(
            mgr.forgot_password("  ").await,
            Err(AuthError::Validation(ValidationError::MissingEmail))
        );
        assert_eq!(
            mgr.forgot_password("ana").await,
            Err(AuthError::Validation(ValidationError::InvalidEmail))
        );
        endpoint.assert_async().await;
    }
}
