//! Domain methods for the listing backend, one per endpoint.

use vitrine_shared::{
    ApiError, AuthResponse, ClickKind, DashboardStats, ForgotPasswordRequest, GalleryPayload,
    ListingDetail, ListingPage, LoginRequest, MessageResponse, MyListingResponse, PaymentRequest,
    PaymentResponse, PendingListings, Plan, ProfilePayload, RegisterRequest, RejectRequest,
    SaveListingResponse, Taxonomy, TrackRequest, UploadResponse, User,
};

use crate::api_client::ApiClient;

/// A file picked for upload, already read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            bytes,
        }
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

impl ApiClient {
    // --- Authentication ---

    pub async fn register(&self, req: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.post_json("/auth/register", req).await
    }

    pub async fn login(&self, req: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.post_json("/auth/login", req).await
    }

    /// Identity behind the current token.
    pub async fn me(&self) -> Result<User, ApiError> {
        self.get_json("/auth/me").await
    }

    pub async fn forgot_password(&self, email: &str) -> Result<MessageResponse, ApiError> {
        let req = ForgotPasswordRequest {
            email: email.to_string(),
        };
        self.post_json("/auth/forgot-password", &req).await
    }

    // --- Provider's own listing ---

    pub async fn my_listing(&self) -> Result<MyListingResponse, ApiError> {
        self.get_json("/meu-perfil").await
    }

    pub async fn save_listing(
        &self,
        payload: &ProfilePayload,
    ) -> Result<SaveListingResponse, ApiError> {
        self.post_json("/meu-perfil", payload).await
    }

    /// Persist the gallery order. The first id becomes the cover photo.
    pub async fn save_gallery(&self, photo_ids: &[u64]) -> Result<SaveListingResponse, ApiError> {
        self.post_json("/meu-perfil", &GalleryPayload::from_ids(photo_ids))
            .await
    }

    pub async fn upload_photo(&self, file: &UploadFile) -> Result<UploadResponse, ApiError> {
        let part = reqwest::multipart::Part::bytes(file.bytes.clone())
            .file_name(file.name.clone())
            .mime_str(&file.mime)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let form = reqwest::multipart::Form::new().part("foto", part);
        self.post_multipart("/upload", form, "Erro no upload").await
    }

    pub async fn delete_photo(&self, photo_id: u64) -> Result<MessageResponse, ApiError> {
        self.delete_json(&format!("/upload/{photo_id}")).await
    }

    // --- Public listing ---

    pub async fn list_listings(&self, query: &[(&str, String)]) -> Result<ListingPage, ApiError> {
        self.get_query("/acompanhantes", query).await
    }

    pub async fn get_listing(&self, slug: &str) -> Result<ListingDetail, ApiError> {
        self.get_json(&format!("/acompanhante/{}", urlencoding::encode(slug)))
            .await
    }

    pub async fn track_click(
        &self,
        listing_id: u64,
        kind: ClickKind,
    ) -> Result<MessageResponse, ApiError> {
        self.post_json(
            &format!("/acompanhante/{listing_id}/track"),
            &TrackRequest { kind },
        )
        .await
    }

    // --- Taxonomies ---

    pub async fn cities(&self) -> Result<Vec<Taxonomy>, ApiError> {
        self.get_json("/cidades").await
    }

    /// Neighborhoods, optionally restricted to one city slug.
    pub async fn neighborhoods(&self, city: Option<&str>) -> Result<Vec<Taxonomy>, ApiError> {
        match city.filter(|c| !c.is_empty()) {
            Some(city) => {
                self.get_query("/bairros", &[("cidade", city.to_string())])
                    .await
            }
            None => self.get_json("/bairros").await,
        }
    }

    pub async fn categories(&self) -> Result<Vec<Taxonomy>, ApiError> {
        self.get_json("/categorias").await
    }

    pub async fn services(&self) -> Result<Vec<Taxonomy>, ApiError> {
        self.get_json("/servicos").await
    }

    // --- Plans & payments ---

    pub async fn plans(&self) -> Result<Vec<Plan>, ApiError> {
        self.get_json("/planos").await
    }

    pub async fn create_payment(&self, plan_id: &str) -> Result<PaymentResponse, ApiError> {
        let req = PaymentRequest {
            plan: plan_id.to_string(),
        };
        self.post_json("/pagamento/criar", &req).await
    }

    // --- Dashboard ---

    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        self.get_json("/dashboard/stats").await
    }

    // --- Moderation ---

    pub async fn pending_listings(&self) -> Result<PendingListings, ApiError> {
        self.get_json("/admin/pendentes").await
    }

    pub async fn approve_listing(&self, listing_id: u64) -> Result<MessageResponse, ApiError> {
        self.post_empty(&format!("/admin/aprovar/{listing_id}")).await
    }

    pub async fn reject_listing(
        &self,
        listing_id: u64,
        reason: &str,
    ) -> Result<MessageResponse, ApiError> {
        let req = RejectRequest {
            reason: reason.to_string(),
        };
        self.post_json(&format!("/admin/reprovar/{listing_id}"), &req)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use mockito::Matcher;

    fn client_for(server: &mockito::Server) -> ApiClient {
        ApiClient::new(&ClientConfig::default()).with_base_url(server.url())
    }

    #[tokio::test]
    async fn track_click_posts_kind() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/acompanhante/42/track")
            .match_body(Matcher::Json(serde_json::json!({"tipo": "whatsapp"})))
            .with_body(r#"{"success":true}"#)
            .create_async()
            .await;

        let ack = client_for(&server)
            .track_click(42, ClickKind::WhatsApp)
            .await
            .unwrap();
        assert!(ack.success);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn upload_sends_multipart_with_bearer_only() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/upload")
            .match_header("authorization", "Bearer tok")
            .match_header(
                "content-type",
                Matcher::Regex("^multipart/form-data; boundary=".into()),
            )
            .match_body(Matcher::Regex(r#"name="foto"; filename="a.jpg""#.into()))
            .with_body(r#"{"success":true,"id":9,"url":"u","sizes":{"thumbnail":"t","medium":"m","large":"l","full":"f"}}"#)
            .create_async()
            .await;

        let file = UploadFile::new("a.jpg", "image/jpeg", b"jpeg-bytes".to_vec());
        let resp = client_for(&server)
            .with_token(Some("tok".into()))
            .upload_photo(&file)
            .await
            .unwrap();
        assert_eq!(resp.id, 9);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn upload_error_without_message_uses_upload_fallback() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/upload")
            .with_status(500)
            .with_body("{}")
            .create_async()
            .await;

        let file = UploadFile::new("a.png", "image/png", vec![1, 2, 3]);
        let err = client_for(&server).upload_photo(&file).await.unwrap_err();
        assert_eq!(err.to_string(), "Erro no upload");
    }

    #[tokio::test]
    async fn neighborhoods_filter_by_city() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/bairros")
            .match_query(Matcher::UrlEncoded("cidade".into(), "rio-de-janeiro".into()))
            .with_body(r#"[{"id":1,"nome":"Copacabana","slug":"copacabana","count":3}]"#)
            .create_async()
            .await;

        let list = client_for(&server)
            .neighborhoods(Some("rio-de-janeiro"))
            .await
            .unwrap();
        assert_eq!(list[0].name, "Copacabana");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn reject_listing_sends_reason() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/admin/reprovar/7")
            .match_body(Matcher::Json(serde_json::json!({"motivo": "Fotos fora do padrão"})))
            .with_body(r#"{"success":true,"message":"Perfil reprovado"}"#)
            .create_async()
            .await;

        let ack = client_for(&server)
            .reject_listing(7, "Fotos fora do padrão")
            .await
            .unwrap();
        assert_eq!(ack.message.as_deref(), Some("Perfil reprovado"));
        mock.assert_async().await;
    }
}
