use crate::constants::{ACCEPTED_IMAGE_TYPES, MAX_LOGO_SIZE_BYTES, MAX_PRODUCT_SIZE_BYTES};
use crate::error::{FieldErrors, ReadError, ValidationError};
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetRole {
    Product,
    Logo,
}

impl AssetRole {
    pub fn label(&self) -> &'static str {
        match self {
            AssetRole::Product => "Product photo",
            AssetRole::Logo => "Logo",
        }
    }

    pub fn max_bytes(&self) -> u64 {
        match self {
            AssetRole::Product => MAX_PRODUCT_SIZE_BYTES,
            AssetRole::Logo => MAX_LOGO_SIZE_BYTES,
        }
    }
}

impl fmt::Display for AssetRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A validated input image. Only constructed through [`validate_asset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    path: PathBuf,
    role: AssetRole,
    mime_type: &'static str,
    size: u64,
}

impl Asset {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn role(&self) -> AssetRole {
        self.role
    }

    pub fn mime_type(&self) -> &'static str {
        self.mime_type
    }

    pub fn size(&self) -> u64 {
        self.size
    }
}

/// Inline bytes in the form the remote API expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedAsset {
    pub mime_type: String,
    pub data: String,
}

pub fn mime_type_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let mime = match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        _ => return None,
    };
    ACCEPTED_IMAGE_TYPES.iter().copied().find(|t| *t == mime)
}

/// Checks presence, then size, then type, in that order.
pub async fn validate_asset(
    path: Option<&Path>,
    role: AssetRole,
) -> Result<Asset, ValidationError> {
    let path = path.ok_or(ValidationError::Missing(role))?;
    let metadata = tokio::fs::metadata(path)
        .await
        .ok()
        .filter(|m| m.is_file())
        .ok_or(ValidationError::Missing(role))?;

    let size = metadata.len();
    if size > role.max_bytes() {
        return Err(ValidationError::TooLarge {
            role,
            size,
            limit: role.max_bytes(),
        });
    }

    let mime_type = mime_type_for(path).ok_or_else(|| ValidationError::UnsupportedType {
        role,
        path: path.to_path_buf(),
    })?;

    Ok(Asset {
        path: path.to_path_buf(),
        role,
        mime_type,
        size,
    })
}

pub async fn validate_form(
    product: Option<&Path>,
    logo: Option<&Path>,
) -> Result<(Asset, Asset), FieldErrors> {
    let product = validate_asset(product, AssetRole::Product).await;
    let logo = validate_asset(logo, AssetRole::Logo).await;

    match (product, logo) {
        (Ok(product), Ok(logo)) => Ok((product, logo)),
        (product, logo) => Err(FieldErrors {
            product: product.err(),
            logo: logo.err(),
        }),
    }
}

pub async fn encode_asset(asset: &Asset) -> Result<EncodedAsset, ReadError> {
    let bytes = tokio::fs::read(asset.path())
        .await
        .map_err(|source| ReadError {
            path: asset.path().to_path_buf(),
            source,
        })?;

    log::debug!(
        "Encoded {} ({}, {} bytes)",
        asset.role(),
        asset.mime_type(),
        bytes.len()
    );

    Ok(EncodedAsset {
        mime_type: asset.mime_type().to_string(),
        data: base64::encode(bytes),
    })
}
