//! Contact affordances and click tracking.
//!
//! A contact click first records the click against the listing and then
//! opens the link. Recording is best effort: a failure is logged and the
//! link opens anyway. Lost clicks are not retried.

use vitrine_shared::{tel_link, whatsapp_link, ClickKind, ListingDetail};

use crate::api_client::ApiClient;
use crate::{log_debug, log_warn};

/// Where a link should open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    NewTab,
    SamePage,
}

/// Opens links on behalf of the user.
pub trait LinkOpener {
    fn open(&self, url: &str, target: LinkTarget);
}

/// Opens links through the browser window.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLinkOpener;

#[cfg(target_arch = "wasm32")]
impl LinkOpener for SystemLinkOpener {
    fn open(&self, url: &str, target: LinkTarget) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let result = match target {
            LinkTarget::NewTab => window.open_with_url_and_target(url, "_blank").map(|_| ()),
            LinkTarget::SamePage => window.location().set_href(url),
        };
        if result.is_err() {
            log_warn!("Could not open {url}");
        }
    }
}

/// Opens links with the desktop's default handler.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLinkOpener;

#[cfg(not(target_arch = "wasm32"))]
impl LinkOpener for SystemLinkOpener {
    fn open(&self, url: &str, _target: LinkTarget) {
        if let Err(e) = open::that(url) {
            log_warn!("Could not open {url}: {e}");
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactAction {
    WhatsApp,
    Phone,
}

impl ContactAction {
    pub fn click_kind(self) -> ClickKind {
        match self {
            ContactAction::WhatsApp => ClickKind::WhatsApp,
            ContactAction::Phone => ClickKind::Phone,
        }
    }

    pub fn target(self) -> LinkTarget {
        match self {
            ContactAction::WhatsApp => LinkTarget::NewTab,
            ContactAction::Phone => LinkTarget::SamePage,
        }
    }

    /// The link for this listing, or `None` when it has no usable number.
    /// Calls fall back to the WhatsApp number when no phone is listed.
    pub fn link(self, listing: &ListingDetail) -> Option<String> {
        match self {
            ContactAction::WhatsApp => {
                let number = listing.whatsapp.trim();
                (!number.is_empty())
                    .then(|| whatsapp_link(number, Some(&greeting(&listing.summary.name))))
            }
            ContactAction::Phone => [listing.phone.trim(), listing.whatsapp.trim()]
                .into_iter()
                .find(|n| !n.is_empty())
                .map(tel_link),
        }
    }
}

/// Message prefilled in the WhatsApp chat.
pub fn greeting(name: &str) -> String {
    format!("Olá {name}! Vi seu perfil no ScortRio e gostaria de saber mais.")
}

/// Record the click and open the contact link.
///
/// Returns `false` without tracking when the listing has no number for
/// this action.
pub async fn contact(
    api: &ApiClient,
    listing: &ListingDetail,
    action: ContactAction,
    opener: &impl LinkOpener,
) -> bool {
    let Some(url) = action.link(listing) else {
        log_debug!("Listing {} has no number for {action:?}", listing.summary.id);
        return false;
    };
    record(api, listing.summary.id, action.click_kind()).await;
    opener.open(&url, action.target());
    true
}

pub async fn track_favorite(api: &ApiClient, listing_id: u64) {
    record(api, listing_id, ClickKind::Favorite).await;
}

async fn record(api: &ApiClient, listing_id: u64, kind: ClickKind) {
    if let Err(e) = api.track_click(listing_id, kind).await {
        log_warn!("Failed to track {kind:?} click on listing {listing_id}: {e}");
    }
}
