//! Wire models for the listing backend (`/wp-json/scortrio/v1`).
//!
//! Field names on the wire are the backend's Portuguese snake_case; Rust-side
//! names are English and mapped with `#[serde(rename)]`. Most structs are
//! `#[serde(default)]` because the backend omits empty fields freely.

use serde::{Deserialize, Deserializer, Serialize};

use crate::de;

// --- Enumerations ---

/// Subscription tier controlling listing visibility and ranking.
///
/// Decoding is lenient: `null`, `""` and unknown tiers read as `Free`.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PlanTier {
    #[default]
    Free,
    Premium,
    Vip,
}

impl PlanTier {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "premium" => PlanTier::Premium,
            "vip" => PlanTier::Vip,
            _ => PlanTier::Free,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PlanTier::Free => "free",
            PlanTier::Premium => "premium",
            PlanTier::Vip => "vip",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PlanTier::Free => "Gratuito",
            PlanTier::Premium => "Premium",
            PlanTier::Vip => "VIP",
        }
    }
}

impl<'de> Deserialize<'de> for PlanTier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(Self::parse).unwrap_or_default())
    }
}

/// Moderation status of a provider's listing. Set by backend reviewers.
///
/// WordPress post statuses map onto it (`publish`, `draft`); anything else
/// it may report (`private`, `trash`, ...) is `Unknown`.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ModerationStatus {
    Pending,
    Published,
    Rejected,
    Unknown,
}

impl ModerationStatus {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "pending" => ModerationStatus::Pending,
            "published" | "publish" => ModerationStatus::Published,
            "rejected" | "draft" => ModerationStatus::Rejected,
            _ => ModerationStatus::Unknown,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ModerationStatus::Pending => "Em análise",
            ModerationStatus::Published => "Publicado",
            ModerationStatus::Rejected => "Reprovado",
            ModerationStatus::Unknown => "Desconhecido",
        }
    }
}

impl<'de> Deserialize<'de> for ModerationStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map_or(ModerationStatus::Unknown, Self::parse))
    }
}

/// Server-side ordering of the public listing. Passed through verbatim.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum SortMode {
    #[default]
    #[serde(rename = "recentes")]
    Recent,
    #[serde(rename = "popular")]
    Popular,
    #[serde(rename = "preco_asc")]
    PriceAsc,
    #[serde(rename = "preco_desc")]
    PriceDesc,
}

impl SortMode {
    pub const ALL: [SortMode; 4] = [
        SortMode::Recent,
        SortMode::Popular,
        SortMode::PriceAsc,
        SortMode::PriceDesc,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortMode::Recent => "recentes",
            SortMode::Popular => "popular",
            SortMode::PriceAsc => "preco_asc",
            SortMode::PriceDesc => "preco_desc",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.as_str() == value)
    }

    pub fn label(self) -> &'static str {
        match self {
            SortMode::Recent => "Mais recentes",
            SortMode::Popular => "Mais populares",
            SortMode::PriceAsc => "Menor preço",
            SortMode::PriceDesc => "Maior preço",
        }
    }
}

/// Kind of contact affordance a visitor clicked.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ClickKind {
    #[serde(rename = "whatsapp")]
    WhatsApp,
    #[serde(rename = "telefone")]
    Phone,
    #[serde(rename = "favorito")]
    Favorite,
}

// --- Identity ---

/// The logged-in account as returned by `/auth/me`, `/auth/login` and
/// `/auth/register`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct User {
    #[serde(deserialize_with = "de::number")]
    pub id: u64,
    #[serde(deserialize_with = "de::or_default")]
    pub email: String,
    #[serde(rename = "nome")]
    #[serde(deserialize_with = "de::or_default")]
    pub name: String,
    #[serde(deserialize_with = "de::or_default")]
    pub role: String,
    #[serde(rename = "tem_perfil")]
    #[serde(deserialize_with = "de::or_default")]
    pub has_listing: bool,
    #[serde(rename = "perfil_status")]
    pub listing_status: Option<ModerationStatus>,
    #[serde(rename = "perfil_id")]
    #[serde(deserialize_with = "de::opt_number")]
    pub listing_id: Option<u64>,
    #[serde(rename = "plano")]
    pub plan: Option<PlanTier>,
    pub slug: Option<String>,
}

impl User {
    /// `/auth/me` answers an unknown token with an identity-less body rather
    /// than an error status, so a zero id means "not logged in".
    pub fn has_identity(&self) -> bool {
        self.id != 0
    }

    pub fn is_admin(&self) -> bool {
        self.role == "administrator"
    }

    pub fn plan_tier(&self) -> PlanTier {
        self.plan.unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegisterRequest {
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AuthResponse {
    #[serde(deserialize_with = "de::or_default")]
    pub success: bool,
    pub message: Option<String>,
    pub token: Option<String>,
    pub user: Option<User>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

/// Generic `{ success, message }` acknowledgement.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MessageResponse {
    #[serde(deserialize_with = "de::or_default")]
    pub success: bool,
    pub message: Option<String>,
}

// --- Listings ---

/// One of the four derived sizes of an uploaded photo.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Photo {
    #[serde(deserialize_with = "de::number")]
    pub id: u64,
    #[serde(deserialize_with = "de::or_default")]
    pub thumbnail: String,
    #[serde(deserialize_with = "de::or_default")]
    pub medium: String,
    #[serde(deserialize_with = "de::or_default")]
    pub large: String,
    #[serde(deserialize_with = "de::or_default")]
    pub full: String,
}

/// Public projection of a provider's listing, as shown in result grids.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Listing {
    #[serde(deserialize_with = "de::number")]
    pub id: u64,
    #[serde(deserialize_with = "de::or_default")]
    pub slug: String,
    #[serde(rename = "nome")]
    #[serde(deserialize_with = "de::or_default")]
    pub name: String,
    #[serde(rename = "idade")]
    #[serde(deserialize_with = "de::opt_number")]
    pub age: Option<u32>,
    #[serde(deserialize_with = "de::or_default")]
    pub headline: String,
    #[serde(rename = "cidade")]
    #[serde(deserialize_with = "de::or_default")]
    pub city: String,
    #[serde(rename = "cidade_slug")]
    #[serde(deserialize_with = "de::or_default")]
    pub city_slug: String,
    #[serde(rename = "estado")]
    #[serde(deserialize_with = "de::or_default")]
    pub state: String,
    #[serde(rename = "bairro")]
    #[serde(deserialize_with = "de::or_default")]
    pub neighborhood: String,
    #[serde(rename = "bairro_slug")]
    #[serde(deserialize_with = "de::or_default")]
    pub neighborhood_slug: String,
    #[serde(rename = "categoria")]
    #[serde(deserialize_with = "de::or_default")]
    pub category: String,
    #[serde(rename = "categoria_slug")]
    #[serde(deserialize_with = "de::or_default")]
    pub category_slug: String,
    #[serde(rename = "valor_hora")]
    #[serde(deserialize_with = "de::number")]
    pub hourly_rate: f64,
    #[serde(rename = "foto_principal")]
    #[serde(deserialize_with = "de::or_default")]
    pub main_photo: String,
    #[serde(rename = "foto_thumbnail")]
    #[serde(deserialize_with = "de::or_default")]
    pub thumbnail: String,
    #[serde(rename = "verificada")]
    #[serde(deserialize_with = "de::or_default")]
    pub verified: bool,
    #[serde(deserialize_with = "de::or_default")]
    pub online: bool,
    #[serde(rename = "destaque")]
    #[serde(deserialize_with = "de::or_default")]
    pub featured: bool,
    #[serde(rename = "plano")]
    pub plan: PlanTier,
    #[serde(rename = "atende_local")]
    #[serde(deserialize_with = "de::or_default")]
    pub has_own_place: bool,
}

/// A service tag attached to a listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServiceTag {
    #[serde(deserialize_with = "de::number")]
    pub id: u64,
    #[serde(rename = "nome")]
    #[serde(deserialize_with = "de::or_default")]
    pub name: String,
    #[serde(deserialize_with = "de::or_default")]
    pub slug: String,
}

/// Full public listing returned by `/acompanhante/{slug}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ListingDetail {
    #[serde(flatten)]
    pub summary: Listing,
    #[serde(rename = "descricao")]
    #[serde(deserialize_with = "de::or_default")]
    pub description: String,
    #[serde(deserialize_with = "de::or_default")]
    pub whatsapp: String,
    #[serde(rename = "telefone")]
    #[serde(deserialize_with = "de::or_default")]
    pub phone: String,
    #[serde(rename = "altura")]
    #[serde(deserialize_with = "de::opt_number")]
    pub height: Option<u32>,
    #[serde(rename = "peso")]
    #[serde(deserialize_with = "de::opt_number")]
    pub weight: Option<u32>,
    #[serde(rename = "medidas")]
    #[serde(deserialize_with = "de::or_default")]
    pub measurements: String,
    #[serde(rename = "cor_olhos")]
    #[serde(deserialize_with = "de::or_default")]
    pub eye_color: String,
    #[serde(rename = "cor_cabelo")]
    #[serde(deserialize_with = "de::or_default")]
    pub hair_color: String,
    #[serde(rename = "etnia")]
    #[serde(deserialize_with = "de::or_default")]
    pub ethnicity: String,
    #[serde(deserialize_with = "de::or_default")]
    pub silicone: String,
    #[serde(rename = "valor_meia_hora")]
    #[serde(deserialize_with = "de::number")]
    pub half_hour_rate: f64,
    #[serde(rename = "valor_pernoite")]
    #[serde(deserialize_with = "de::number")]
    pub overnight_rate: f64,
    #[serde(rename = "aceita_cartao")]
    #[serde(deserialize_with = "de::or_default")]
    pub accepts_card: bool,
    #[serde(rename = "aceita_pix")]
    #[serde(deserialize_with = "de::or_default")]
    pub accepts_pix: bool,
    #[serde(rename = "servicos")]
    #[serde(deserialize_with = "de::or_default")]
    pub services: Vec<ServiceTag>,
    #[serde(rename = "galeria")]
    #[serde(deserialize_with = "de::or_default")]
    pub gallery: Vec<Photo>,
    #[serde(deserialize_with = "de::number")]
    pub views: u64,
}

impl ListingDetail {
    /// Cover image: first gallery photo, else the listing's main photo.
    pub fn cover_url(&self) -> &str {
        self.gallery
            .first()
            .map(|p| p.large.as_str())
            .filter(|url| !url.is_empty())
            .unwrap_or(self.summary.main_photo.as_str())
    }
}

/// The provider's own listing as returned by `GET /meu-perfil`, including
/// private contact data, moderation status and engagement counters.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OwnedListing {
    #[serde(flatten)]
    pub detail: ListingDetail,
    pub status: Option<ModerationStatus>,
    #[serde(rename = "data_nascimento")]
    #[serde(deserialize_with = "de::or_default")]
    pub birth_date: String,
    #[serde(rename = "cidade_id")]
    #[serde(deserialize_with = "de::opt_number")]
    pub city_id: Option<u64>,
    #[serde(rename = "bairro_id")]
    #[serde(deserialize_with = "de::opt_number")]
    pub neighborhood_id: Option<u64>,
    #[serde(rename = "categoria_id")]
    #[serde(deserialize_with = "de::opt_number")]
    pub category_id: Option<u64>,
    #[serde(rename = "servicos_ids")]
    #[serde(deserialize_with = "de::or_default")]
    pub service_ids: Vec<u64>,
    #[serde(deserialize_with = "de::number")]
    pub whatsapp_clicks: u64,
    #[serde(deserialize_with = "de::number")]
    pub phone_clicks: u64,
    #[serde(rename = "favoritos")]
    #[serde(deserialize_with = "de::number")]
    pub favorites: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MyListingResponse {
    #[serde(rename = "existe")]
    #[serde(deserialize_with = "de::or_default")]
    pub exists: bool,
    #[serde(rename = "perfil")]
    pub listing: Option<OwnedListing>,
}

/// One page of the public listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ListingPage {
    #[serde(deserialize_with = "de::or_default")]
    pub data: Vec<Listing>,
    #[serde(deserialize_with = "de::number")]
    pub total: u64,
    #[serde(deserialize_with = "de::number")]
    pub pages: u32,
    #[serde(deserialize_with = "de::number")]
    pub current_page: u32,
}

/// Typed submission payload for `POST /meu-perfil`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProfilePayload {
    #[serde(rename = "nome")]
    pub name: String,
    pub headline: String,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "data_nascimento")]
    pub birth_date: String,
    #[serde(rename = "estado")]
    pub state: String,
    #[serde(rename = "cidade_id")]
    pub city_id: Option<u64>,
    #[serde(rename = "bairro_id")]
    pub neighborhood_id: Option<u64>,
    #[serde(rename = "categoria_id")]
    pub category_id: Option<u64>,
    pub whatsapp: String,
    #[serde(rename = "telefone")]
    pub phone: String,
    #[serde(rename = "altura")]
    pub height: Option<u32>,
    #[serde(rename = "peso")]
    pub weight: Option<u32>,
    #[serde(rename = "medidas")]
    pub measurements: String,
    #[serde(rename = "cor_olhos")]
    pub eye_color: String,
    #[serde(rename = "cor_cabelo")]
    pub hair_color: String,
    #[serde(rename = "etnia")]
    pub ethnicity: String,
    pub silicone: String,
    #[serde(rename = "valor_hora")]
    pub hourly_rate: Option<u32>,
    #[serde(rename = "valor_meia_hora")]
    pub half_hour_rate: Option<u32>,
    #[serde(rename = "valor_pernoite")]
    pub overnight_rate: Option<u32>,
    #[serde(rename = "atende_local")]
    pub has_own_place: bool,
    #[serde(rename = "aceita_cartao")]
    pub accepts_card: bool,
    #[serde(rename = "aceita_pix")]
    pub accepts_pix: bool,
    #[serde(rename = "servicos")]
    pub services: Vec<u64>,
}

/// Gallery order update; the backend takes the ids comma-joined.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GalleryPayload {
    #[serde(rename = "galeria")]
    pub gallery: String,
}

impl GalleryPayload {
    pub fn from_ids(ids: &[u64]) -> Self {
        let gallery = ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");
        Self { gallery }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SaveListingResponse {
    #[serde(deserialize_with = "de::or_default")]
    pub success: bool,
    pub message: Option<String>,
    #[serde(rename = "perfil_id")]
    #[serde(deserialize_with = "de::opt_number")]
    pub listing_id: Option<u64>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PhotoSizes {
    #[serde(deserialize_with = "de::or_default")]
    pub thumbnail: String,
    #[serde(deserialize_with = "de::or_default")]
    pub medium: String,
    #[serde(deserialize_with = "de::or_default")]
    pub large: String,
    #[serde(deserialize_with = "de::or_default")]
    pub full: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UploadResponse {
    #[serde(deserialize_with = "de::or_default")]
    pub success: bool,
    #[serde(deserialize_with = "de::number")]
    pub id: u64,
    #[serde(deserialize_with = "de::or_default")]
    pub url: String,
    pub sizes: Option<PhotoSizes>,
}

impl UploadResponse {
    /// Build the gallery photo, substituting the original `url` for any size
    /// the backend did not generate.
    pub fn into_photo(self) -> Option<Photo> {
        if !self.success || self.id == 0 {
            return None;
        }
        let sizes = self.sizes?;
        let pick = |size: String| if size.is_empty() { self.url.clone() } else { size };
        Some(Photo {
            id: self.id,
            thumbnail: pick(sizes.thumbnail),
            medium: pick(sizes.medium),
            large: pick(sizes.large),
            full: pick(sizes.full),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrackRequest {
    #[serde(rename = "tipo")]
    pub kind: ClickKind,
}

// --- Taxonomies ---

/// A flat categorical dimension (city, neighborhood, category, service).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Taxonomy {
    #[serde(deserialize_with = "de::number")]
    pub id: u64,
    #[serde(rename = "nome")]
    #[serde(deserialize_with = "de::or_default")]
    pub name: String,
    #[serde(deserialize_with = "de::or_default")]
    pub slug: String,
    #[serde(deserialize_with = "de::number")]
    pub count: u64,
}

/// Resolve a slug to its display name, falling back to the slug itself.
pub fn taxonomy_name<'a>(items: &'a [Taxonomy], slug: &'a str) -> &'a str {
    items
        .iter()
        .find(|t| t.slug == slug)
        .map(|t| t.name.as_str())
        .unwrap_or(slug)
}

// --- Plans & payments ---

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Plan {
    #[serde(deserialize_with = "de::or_default")]
    pub id: String,
    #[serde(rename = "nome")]
    #[serde(deserialize_with = "de::or_default")]
    pub name: String,
    #[serde(rename = "preco")]
    #[serde(deserialize_with = "de::number")]
    pub price: f64,
    #[serde(rename = "duracao_dias")]
    #[serde(deserialize_with = "de::number")]
    pub duration_days: u32,
    #[serde(rename = "beneficios")]
    #[serde(deserialize_with = "de::or_default")]
    pub benefits: Vec<String>,
}

impl Plan {
    pub fn is_free(&self) -> bool {
        self.id == PlanTier::Free.as_str()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaymentRequest {
    #[serde(rename = "plano")]
    pub plan: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PaymentResponse {
    #[serde(deserialize_with = "de::or_default")]
    pub success: bool,
    #[serde(deserialize_with = "de::or_default")]
    pub preference_id: String,
    #[serde(deserialize_with = "de::or_default")]
    pub init_point: String,
    pub sandbox_init_point: Option<String>,
}

// --- Dashboard ---

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EngagementStats {
    #[serde(deserialize_with = "de::number")]
    pub views: u64,
    #[serde(deserialize_with = "de::number")]
    pub whatsapp_clicks: u64,
    #[serde(deserialize_with = "de::number")]
    pub phone_clicks: u64,
    #[serde(rename = "favoritos")]
    #[serde(deserialize_with = "de::number")]
    pub favorites: u64,
    #[serde(rename = "taxa_conversao")]
    #[serde(deserialize_with = "de::number")]
    pub conversion_rate: f64,
}

impl EngagementStats {
    pub fn total_contacts(&self) -> u64 {
        self.whatsapp_clicks + self.phone_clicks
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DashboardStats {
    #[serde(rename = "tem_perfil")]
    #[serde(deserialize_with = "de::or_default")]
    pub has_listing: bool,
    #[serde(rename = "perfil_status")]
    pub listing_status: Option<ModerationStatus>,
    #[serde(rename = "plano")]
    pub plan: Option<PlanTier>,
    #[serde(rename = "plano_expira")]
    pub plan_expires: Option<String>,
    #[serde(rename = "dias_restantes")]
    #[serde(deserialize_with = "de::opt_number")]
    pub days_remaining: Option<i64>,
    pub stats: Option<EngagementStats>,
}

// --- Moderation ---

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PendingListings {
    #[serde(deserialize_with = "de::number")]
    pub total: u64,
    #[serde(rename = "pendentes")]
    #[serde(deserialize_with = "de::or_default")]
    pub pending: Vec<OwnedListing>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RejectRequest {
    #[serde(rename = "motivo")]
    pub reason: String,
}
