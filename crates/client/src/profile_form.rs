//! Provider profile editor state.
//!
//! The editor holds every field as typed text. Numbers are parsed once, when
//! the form is turned into a [`ProfilePayload`] for submission.

use vitrine_shared::{
    ApiError, OwnedListing, ProfilePayload, SaveListingResponse, ValidationError,
};

use crate::api_client::ApiClient;
use crate::auth_session::SessionManager;
use crate::log_error;
use crate::storage::TokenStore;

pub const DEFAULT_STATE: &str = "RJ";

/// Brazilian states as `(UF, name)`.
pub const STATES: [(&str, &str); 27] = [
    ("AC", "Acre"),
    ("AL", "Alagoas"),
    ("AP", "Amapá"),
    ("AM", "Amazonas"),
    ("BA", "Bahia"),
    ("CE", "Ceará"),
    ("DF", "Distrito Federal"),
    ("ES", "Espírito Santo"),
    ("GO", "Goiás"),
    ("MA", "Maranhão"),
    ("MT", "Mato Grosso"),
    ("MS", "Mato Grosso do Sul"),
    ("MG", "Minas Gerais"),
    ("PA", "Pará"),
    ("PB", "Paraíba"),
    ("PR", "Paraná"),
    ("PE", "Pernambuco"),
    ("PI", "Piauí"),
    ("RJ", "Rio de Janeiro"),
    ("RN", "Rio Grande do Norte"),
    ("RS", "Rio Grande do Sul"),
    ("RO", "Rondônia"),
    ("RR", "Roraima"),
    ("SC", "Santa Catarina"),
    ("SP", "São Paulo"),
    ("SE", "Sergipe"),
    ("TO", "Tocantins"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub headline: String,
    pub description: String,
    pub birth_date: String,
    pub state: String,
    pub city_id: String,
    pub neighborhood_id: String,
    pub category_id: String,
    pub whatsapp: String,
    pub phone: String,
    pub height: String,
    pub weight: String,
    pub measurements: String,
    pub eye_color: String,
    pub hair_color: String,
    pub ethnicity: String,
    pub silicone: String,
    pub hourly_rate: String,
    pub half_hour_rate: String,
    pub overnight_rate: String,
    pub has_own_place: bool,
    pub accepts_card: bool,
    pub accepts_pix: bool,
    pub services: Vec<u64>,
}

impl Default for ProfileForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            headline: String::new(),
            description: String::new(),
            birth_date: String::new(),
            state: DEFAULT_STATE.to_string(),
            city_id: String::new(),
            neighborhood_id: String::new(),
            category_id: String::new(),
            whatsapp: String::new(),
            phone: String::new(),
            height: String::new(),
            weight: String::new(),
            measurements: String::new(),
            eye_color: String::new(),
            hair_color: String::new(),
            ethnicity: String::new(),
            silicone: String::new(),
            hourly_rate: String::new(),
            half_hour_rate: String::new(),
            overnight_rate: String::new(),
            has_own_place: false,
            accepts_card: false,
            accepts_pix: true,
            services: Vec::new(),
        }
    }
}

fn text<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Rates are whole reais in the editor; zero means "not set". Cents the
/// backend may hold are dropped.
fn rate_text(value: f64) -> String {
    if value.is_finite() && value >= 1.0 {
        format!("{}", value.trunc() as u64)
    } else {
        String::new()
    }
}

fn parse_field<T: std::str::FromStr>(
    value: &str,
    field: &'static str,
) -> Result<Option<T>, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse()
        .map(Some)
        .map_err(|_| ValidationError::InvalidNumber { field })
}

/// A rate typed with cents (`250.5` or `250,50`) keeps its whole part.
fn parse_rate(value: &str, field: &'static str) -> Result<Option<u32>, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    match value.replace(',', ".").parse::<f64>() {
        Ok(rate) if (0.0..=f64::from(u32::MAX)).contains(&rate) => {
            Ok(Some(rate.trunc() as u32))
        }
        _ => Err(ValidationError::InvalidNumber { field }),
    }
}

impl ProfileForm {
    /// Prefill the editor from the provider's saved listing.
    pub fn from_listing(listing: &OwnedListing) -> Self {
        let detail = &listing.detail;
        let summary = &detail.summary;
        let state = if summary.state.is_empty() {
            DEFAULT_STATE.to_string()
        } else {
            summary.state.clone()
        };
        Self {
            name: summary.name.clone(),
            headline: summary.headline.clone(),
            description: detail.description.clone(),
            birth_date: listing.birth_date.clone(),
            state,
            city_id: text(listing.city_id),
            neighborhood_id: text(listing.neighborhood_id),
            category_id: text(listing.category_id),
            whatsapp: detail.whatsapp.clone(),
            phone: detail.phone.clone(),
            height: text(detail.height),
            weight: text(detail.weight),
            measurements: detail.measurements.clone(),
            eye_color: detail.eye_color.clone(),
            hair_color: detail.hair_color.clone(),
            ethnicity: detail.ethnicity.clone(),
            silicone: detail.silicone.clone(),
            hourly_rate: rate_text(summary.hourly_rate),
            half_hour_rate: rate_text(detail.half_hour_rate),
            overnight_rate: rate_text(detail.overnight_rate),
            has_own_place: summary.has_own_place,
            accepts_card: detail.accepts_card,
            accepts_pix: detail.accepts_pix,
            services: listing.service_ids.clone(),
        }
    }

    /// Add the service if absent, remove it otherwise.
    pub fn toggle_service(&mut self, service_id: u64) {
        if let Some(pos) = self.services.iter().position(|id| *id == service_id) {
            self.services.remove(pos);
        } else {
            self.services.push(service_id);
        }
    }

    pub fn has_service(&self, service_id: u64) -> bool {
        self.services.contains(&service_id)
    }

    /// Convert to the submission payload. Empty numeric fields become
    /// `None`. Rates may carry cents, which are truncated; any other
    /// non-number is an error naming the field.
    pub fn to_payload(&self) -> Result<ProfilePayload, ValidationError> {
        Ok(ProfilePayload {
            name: self.name.trim().to_string(),
            headline: self.headline.trim().to_string(),
            description: self.description.trim().to_string(),
            birth_date: self.birth_date.clone(),
            state: self.state.clone(),
            city_id: parse_field(&self.city_id, "cidade")?,
            neighborhood_id: parse_field(&self.neighborhood_id, "bairro")?,
            category_id: parse_field(&self.category_id, "categoria")?,
            whatsapp: self.whatsapp.trim().to_string(),
            phone: self.phone.trim().to_string(),
            height: parse_field(&self.height, "altura")?,
            weight: parse_field(&self.weight, "peso")?,
            measurements: self.measurements.clone(),
            eye_color: self.eye_color.clone(),
            hair_color: self.hair_color.clone(),
            ethnicity: self.ethnicity.clone(),
            silicone: self.silicone.clone(),
            hourly_rate: parse_rate(&self.hourly_rate, "valor por hora")?,
            half_hour_rate: parse_rate(&self.half_hour_rate, "valor meia hora")?,
            overnight_rate: parse_rate(&self.overnight_rate, "valor pernoite")?,
            has_own_place: self.has_own_place,
            accepts_card: self.accepts_card,
            accepts_pix: self.accepts_pix,
            services: self.services.clone(),
        })
    }
}

/// Why a save did not go through.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SaveError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{0}")]
    Rejected(String),
}

/// Load the provider's listing into a form. A provider without a listing
/// gets the empty defaults.
pub async fn load_profile(api: &ApiClient) -> Result<ProfileForm, ApiError> {
    let mine = api.my_listing().await?;
    Ok(match mine.listing.filter(|_| mine.exists) {
        Some(listing) => ProfileForm::from_listing(&listing),
        None => ProfileForm::default(),
    })
}

/// Validate and submit the form. Returns the success message to display.
pub async fn save_profile(api: &ApiClient, form: &ProfileForm) -> Result<String, SaveError> {
    let payload = form.to_payload()?;
    match api.save_listing(&payload).await {
        Ok(SaveListingResponse {
            success: true,
            message,
            ..
        }) => Ok(message.unwrap_or_else(|| "Perfil salvo com sucesso!".to_string())),
        Ok(resp) => Err(SaveError::Rejected(
            resp.message.unwrap_or_else(|| "Erro ao salvar perfil".to_string()),
        )),
        Err(e) => {
            log_error!("Failed to save profile: {e}");
            Err(SaveError::Rejected(e.user_message()))
        }
    }
}

/// Save, then re-fetch the user so `has_listing` and the moderation status
/// reflect the new profile.
pub async fn save_profile_and_refresh<S: TokenStore>(
    manager: &mut SessionManager<S>,
    form: &ProfileForm,
) -> Result<String, SaveError> {
    let message = save_profile(&manager.client(), form).await?;
    manager.refresh().await;
    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::storage::MemoryTokenStore;
    use mockito::Matcher;
    use vitrine_shared::{Listing, ListingDetail, ModerationStatus};

    fn owned() -> OwnedListing {
        OwnedListing {
            detail: ListingDetail {
                summary: Listing {
                    name: "Ana".into(),
                    hourly_rate: 300.0,
                    ..Default::default()
                },
                whatsapp: "21999999999".into(),
                height: Some(168),
                accepts_pix: false,
                ..Default::default()
            },
            city_id: Some(4),
            service_ids: vec![1, 3],
            ..Default::default()
        }
    }

    #[test]
    fn defaults_to_rio_and_pix() {
        let form = ProfileForm::default();
        assert_eq!(form.state, "RJ");
        assert!(form.accepts_pix);
    }

    #[test]
    fn prefills_from_saved_listing() {
        let form = ProfileForm::from_listing(&owned());
        assert_eq!(form.name, "Ana");
        assert_eq!(form.state, "RJ");
        assert_eq!(form.city_id, "4");
        assert_eq!(form.neighborhood_id, "");
        assert_eq!(form.height, "168");
        assert_eq!(form.hourly_rate, "300");
        assert_eq!(form.half_hour_rate, "");
        assert!(!form.accepts_pix);
        assert_eq!(form.services, vec![1, 3]);
    }

    #[test]
    fn toggle_service_adds_and_removes() {
        let mut form = ProfileForm::default();
        form.toggle_service(5);
        form.toggle_service(2);
        assert!(form.has_service(5));
        form.toggle_service(5);
        assert_eq!(form.services, vec![2]);
    }

    #[test]
    fn payload_parses_numbers_and_leaves_blanks_empty() {
        let mut form = ProfileForm::from_listing(&owned());
        form.weight = " 55 ".into();
        let payload = form.to_payload().unwrap();
        assert_eq!(payload.city_id, Some(4));
        assert_eq!(payload.neighborhood_id, None);
        assert_eq!(payload.weight, Some(55));
        assert_eq!(payload.hourly_rate, Some(300));
        assert_eq!(payload.overnight_rate, None);
    }

    #[test]
    fn non_numeric_field_is_rejected_by_name() {
        let form = ProfileForm {
            hourly_rate: "trezentos".into(),
            ..Default::default()
        };
        let err = form.to_payload().unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidNumber {
                field: "valor por hora"
            }
        );
        assert_eq!(err.to_string(), "Valor inválido para valor por hora");
    }

    #[tokio::test]
    async fn invalid_form_is_not_submitted() {
        let mut server = mockito::Server::new_async().await;
        let save = server
            .mock("POST", "/meu-perfil")
            .expect(0)
            .create_async()
            .await;

        let api = ApiClient::new(&ClientConfig::default()).with_base_url(server.url());
        let form = ProfileForm {
            height: "1,68".into(),
            ..Default::default()
        };
        let err = save_profile(&api, &form).await.unwrap_err();
        assert!(matches!(err, SaveError::Validation(_)));
        save.assert_async().await;
    }

    #[tokio::test]
    async fn save_sends_typed_payload() {
        let mut server = mockito::Server::new_async().await;
        let save = server
            .mock("POST", "/meu-perfil")
            .match_body(Matcher::PartialJson(serde_json::json!({
                "nome": "Ana",
                "estado": "RJ",
                "cidade_id": 4,
                "bairro_id": null,
                "valor_hora": 300,
                "aceita_pix": false,
                "servicos": [1, 3]
            })))
            .with_body(r#"{"success":true,"perfil_id":12,"status":"pending"}"#)
            .create_async()
            .await;

        let api = ApiClient::new(&ClientConfig::default()).with_base_url(server.url());
        let message = save_profile(&api, &ProfileForm::from_listing(&owned()))
            .await
            .unwrap();
        assert_eq!(message, "Perfil salvo com sucesso!");
        save.assert_async().await;
    }

    #[tokio::test]
    async fn missing_listing_loads_defaults() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/meu-perfil")
            .with_body(r#"{"existe":false}"#)
            .create_async()
            .await;

        let api = ApiClient::new(&ClientConfig::default()).with_base_url(server.url());
        assert_eq!(load_profile(&api).await.unwrap(), ProfileForm::default());
    }

    #[test]
    fn fractional_rate_survives_an_untouched_save() {
        let mut listing = owned();
        listing.detail.summary.hourly_rate = 250.5;
        listing.detail.overnight_rate = 0.4;

        let form = ProfileForm::from_listing(&listing);
        assert_eq!(form.hourly_rate, "250");
        assert_eq!(form.overnight_rate, "");

        let payload = form.to_payload().unwrap();
        assert_eq!(payload.hourly_rate, Some(250));
        assert_eq!(payload.overnight_rate, None);
    }

    #[test]
    fn typed_cents_are_truncated() {
        let form = ProfileForm {
            hourly_rate: "250.90".into(),
            half_hour_rate: "150,50".into(),
            ..Default::default()
        };
        let payload = form.to_payload().unwrap();
        assert_eq!(payload.hourly_rate, Some(250));
        assert_eq!(payload.half_hour_rate, Some(150));

        let negative = ProfileForm {
            overnight_rate: "-10".into(),
            ..Default::default()
        };
        assert_eq!(
            negative.to_payload().unwrap_err(),
            ValidationError::InvalidNumber {
                field: "valor pernoite"
            }
        );
    }

    #[tokio::test]
    async fn save_refreshes_the_signed_in_user() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/auth/login")
            .with_body(
                r#"{"success":true,"token":"tok","user":{"id":7,"nome":"Ana","tem_perfil":false}}"#,
            )
            .create_async()
            .await;
        let save = server
            .mock("POST", "/meu-perfil")
            .match_header("authorization", "Bearer tok")
            .with_body(r#"{"success":true,"message":"Perfil enviado para análise"}"#)
            .create_async()
            .await;
        let me = server
            .mock("GET", "/auth/me")
            .match_header("authorization", "Bearer tok")
            .with_body(r#"{"id":7,"nome":"Ana","tem_perfil":true,"perfil_status":"pending"}"#)
            .create_async()
            .await;

        let api = ApiClient::new(&ClientConfig::default()).with_base_url(server.url());
        let mut manager = SessionManager::new(api, MemoryTokenStore::default());
        manager.login("ana@example.com", "secret1").await.unwrap();
        assert!(!manager.user().unwrap().has_listing);

        let message = save_profile_and_refresh(&mut manager, &ProfileForm::from_listing(&owned()))
            .await
            .unwrap();
        assert_eq!(message, "Perfil enviado para análise");

        let user = manager.user().unwrap();
        assert!(user.has_listing);
        assert_eq!(user.listing_status, Some(ModerationStatus::Pending));
        save.assert_async().await;
        me.assert_async().await;
    }

    #[tokio::test]
    async fn failed_save_does_not_refresh() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/auth/login")
            .with_body(r#"{"success":true,"token":"tok","user":{"id":7,"nome":"Ana"}}"#)
            .create_async()
            .await;
        server
            .mock("POST", "/meu-perfil")
            .with_status(500)
            .with_body(r#"{"message":"Falha interna"}"#)
            .create_async()
            .await;
        let me = server.mock("GET", "/auth/me").expect(0).create_async().await;

        let api = ApiClient::new(&ClientConfig::default()).with_base_url(server.url());
        let mut manager = SessionManager::new(api, MemoryTokenStore::default());
        manager.login("ana@example.com", "secret1").await.unwrap();

        let err = save_profile_and_refresh(&mut manager, &ProfileForm::default())
            .await
            .unwrap_err();
        assert_eq!(err, SaveError::Rejected("Falha interna".into()));
        me.assert_async().await;
    }
}
