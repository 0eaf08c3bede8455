//! Admin moderation queue.

use vitrine_shared::{ApiError, OwnedListing, ValidationError};

use crate::api_client::ApiClient;
use crate::{log_error, log_info};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModerationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Listings awaiting review. An entry leaves the queue only after the
/// backend accepted the decision.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModerationQueue {
    pending: Vec<OwnedListing>,
}

impl ModerationQueue {
    pub async fn load(api: &ApiClient) -> Result<Self, ApiError> {
        let resp = api.pending_listings().await?;
        Ok(Self {
            pending: resp.pending,
        })
    }

    pub fn pending(&self) -> &[OwnedListing] {
        &self.pending
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub async fn approve(&mut self, api: &ApiClient, listing_id: u64) -> Result<(), ApiError> {
        api.approve_listing(listing_id).await.inspect_err(|e| {
            log_error!("Failed to approve listing {listing_id}: {e}");
        })?;
        log_info!("Approved listing {listing_id}");
        self.remove(listing_id);
        Ok(())
    }

    /// Reject with a reason shown to the provider. A blank reason is refused
    /// before any request.
    pub async fn reject(
        &mut self,
        api: &ApiClient,
        listing_id: u64,
        reason: &str,
    ) -> Result<(), ModerationError> {
        let reason = reason.trim();
        if reason.is_empty() {
            return Err(ValidationError::MissingReason.into());
        }
        api.reject_listing(listing_id, reason)
            .await
            .inspect_err(|e| log_error!("Failed to reject listing {listing_id}: {e}"))?;
        log_info!("Rejected listing {listing_id}");
        self.remove(listing_id);
        Ok(())
    }

    fn remove(&mut self, listing_id: u64) {
        self.pending.retain(|l| l.detail.summary.id != listing_id);
    }
}
