//! The provider's photo gallery.
//!
//! The gallery is an ordered list of photos; the first one is the cover.
//! Every change to the list is followed by saving the id order on the
//! listing. A failed order save is only logged, since the photos themselves
//! are already stored.

use vitrine_shared::{validate_upload, ApiError, Photo};

use crate::api_client::ApiClient;
use crate::endpoints::UploadFile;
use crate::{log_error, log_info, log_warn};

pub const UPLOAD_ERROR_MESSAGE: &str = "Erro ao fazer upload";
pub const DELETE_ERROR_MESSAGE: &str = "Erro ao excluir foto";

/// Outcome of one upload batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadReport {
    pub uploaded: usize,
    /// One message per skipped or failed file, in batch order.
    pub errors: Vec<String>,
}

impl UploadReport {
    pub fn success_message(&self) -> Option<String> {
        (self.uploaded > 0).then(|| format!("{} foto(s) enviada(s)!", self.uploaded))
    }

    /// The message to show for the batch: the last error, as the form
    /// shows a single banner.
    pub fn error_message(&self) -> Option<&str> {
        self.errors.last().map(String::as_str)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gallery {
    photos: Vec<Photo>,
}

impl Gallery {
    pub fn new(photos: Vec<Photo>) -> Self {
        Self { photos }
    }

    /// Load the gallery of the provider's listing. No listing means an
    /// empty gallery.
    pub async fn load(api: &ApiClient) -> Result<Self, ApiError> {
        let mine = api.my_listing().await?;
        let photos = mine
            .listing
            .filter(|_| mine.exists)
            .map(|l| l.detail.gallery)
            .unwrap_or_default();
        Ok(Self::new(photos))
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn ids(&self) -> Vec<u64> {
        self.photos.iter().map(|p| p.id).collect()
    }

    pub fn cover(&self) -> Option<&Photo> {
        self.photos.first()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    /// Validate and upload a batch of files, one at a time.
    ///
    /// Files with a wrong type or over the size limit are skipped without a
    /// request; the rest of the batch continues. Uploaded photos are
    /// appended and the new order is saved once at the end.
    pub async fn upload_batch(&mut self, api: &ApiClient, files: &[UploadFile]) -> UploadReport {
        let mut report = UploadReport::default();

        for file in files {
            if let Err(e) = validate_upload(&file.mime, file.size()) {
                log_warn!("Skipping {}: {e}", file.name);
                report.errors.push(e.to_string());
                continue;
            }
            match api.upload_photo(file).await.map(|r| r.into_photo()) {
                Ok(Some(photo)) => {
                    self.photos.push(photo);
                    report.uploaded += 1;
                }
                Ok(None) => {
                    log_warn!("Upload of {} returned no photo", file.name);
                    report.errors.push(UPLOAD_ERROR_MESSAGE.to_string());
                }
                Err(e) => {
                    log_error!("Upload of {} failed: {e}", file.name);
                    report.errors.push(UPLOAD_ERROR_MESSAGE.to_string());
                }
            }
        }

        if report.uploaded > 0 {
            log_info!("Uploaded {} photo(s)", report.uploaded);
            self.persist_order(api).await;
        }
        report
    }

    /// Delete a photo. The local list changes only when the backend
    /// accepted the deletion.
    pub async fn delete(&mut self, api: &ApiClient, photo_id: u64) -> Result<(), String> {
        if let Err(e) = api.delete_photo(photo_id).await {
            log_error!("Failed to delete photo {photo_id}: {e}");
            return Err(DELETE_ERROR_MESSAGE.to_string());
        }
        self.photos.retain(|p| p.id != photo_id);
        self.persist_order(api).await;
        Ok(())
    }

    /// Move the photo at `from` to position `to`. Out-of-range indexes are
    /// ignored and return `false`.
    pub async fn reorder(&mut self, api: &ApiClient, from: usize, to: usize) -> bool {
        if !self.move_photo(from, to) {
            return false;
        }
        self.persist_order(api).await;
        true
    }

    /// Make the photo at `index` the cover.
    pub async fn set_cover(&mut self, api: &ApiClient, index: usize) -> bool {
        self.reorder(api, index, 0).await
    }

    fn move_photo(&mut self, from: usize, to: usize) -> bool {
        if from >= self.photos.len() || to >= self.photos.len() || from == to {
            return false;
        }
        let photo = self.photos.remove(from);
        self.photos.insert(to, photo);
        true
    }

    async fn persist_order(&self, api: &ApiClient) {
        if let Err(e) = api.save_gallery(&self.ids()).await {
            log_error!("Failed to save gallery order: {e}");
        }
    }
}
