//! Upload gateway to the external media host
//!
//! Every asset category shares one parameterized upload call: a single
//! multipart POST carrying the file bytes, the upload preset and the
//! destination folder. One attempt, no retry, no chunking; the only
//! local validation is a presence check. Failures carry the provider's
//! own message.

use serde::Deserialize;

use crate::config::MediaConfig;

pub type MediaResult<T> = Result<T, MediaError>;

#[derive(thiserror::Error, Debug)]
pub enum MediaError {
    #[error("no file supplied")]
    EmptyFile,

    #[error("media host is not configured")]
    NotConfigured,

    #[error("media host rejected the upload ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("media host unreachable: {0}")]
    Http(#[from] reqwest::Error),
}

/// Asset categories, each landing in its own folder on the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    PropertyImage,
    Banner,
    Brochure,
    Video,
    BuilderLogo,
    DeveloperLogo,
}

impl AssetKind {
    pub fn folder(self) -> &'static str {
        match self {
            AssetKind::PropertyImage => "properties",
            AssetKind::Banner => "banners",
            AssetKind::Brochure => "brochures",
            AssetKind::Video => "videos",
            AssetKind::BuilderLogo => "builders",
            AssetKind::DeveloperLogo => "developers",
        }
    }
}

/// Stable reference returned by the host
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UploadedAsset {
    pub url: String,
    pub public_id: String,
}

pub struct MediaClient {
    http: reqwest::Client,
    endpoint: String,
    upload_preset: Option<String>,
}

impl MediaClient {
    pub fn new(config: &MediaConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: config.endpoint.clone(),
            upload_preset: config.upload_preset.clone(),
        }
    }

    /// Upload one file and return its permanent `{url, public_id}`
    /// reference
    pub async fn upload(
        &self,
        bytes: Vec<u8>,
        filename: &str,
        kind: AssetKind,
    ) -> MediaResult<UploadedAsset> {
        if bytes.is_empty() {
            return Err(MediaError::EmptyFile);
        }
        if self.endpoint.is_empty() {
            return Err(MediaError::NotConfigured);
        }

        let mut form = reqwest::multipart::Form::new()
            .part(
                "file",
                reqwest::multipart::Part::bytes(bytes).file_name(filename.to_string()),
            )
            .text("folder", kind.folder());
        if let Some(preset) = &self.upload_preset {
            form = form.text("upload_preset", preset.clone());
        }

        let response = self.http.post(&self.endpoint).multipart(form).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(MediaError::Rejected { status, message });
        }

        Ok(response.json::<UploadedAsset>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MediaConfig;

    #[test]
    fn every_asset_kind_has_its_own_folder() {
        let kinds = [
            AssetKind::PropertyImage,
            AssetKind::Banner,
            AssetKind::Brochure,
            AssetKind::Video,
            AssetKind::BuilderLogo,
            AssetKind::DeveloperLogo,
        ];
        let folders: std::collections::HashSet<_> = kinds.iter().map(|k| k.folder()).collect();
        assert_eq!(folders.len(), kinds.len());
    }

    #[tokio::test]
    async fn empty_file_is_rejected_before_any_network_call() {
        let client = MediaClient::new(&MediaConfig::default());
        let err = client.upload(Vec::new(), "logo.png", AssetKind::BuilderLogo).await.unwrap_err();
        assert!(matches!(err, MediaError::EmptyFile));
    }

    #[tokio::test]
    async fn missing_endpoint_is_surfaced_as_not_configured() {
        let client = MediaClient::new(&MediaConfig::default());
        let err = client.upload(vec![1, 2, 3], "a.png", AssetKind::Banner).await.unwrap_err();
        assert!(matches!(err, MediaError::NotConfigured));
    }
}
