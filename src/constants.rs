pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-image";
pub const DEFAULT_BATCH_SIZE: usize = 4;
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

pub const MAX_PRODUCT_SIZE_BYTES: u64 = 10 * 1024 * 1024;
pub const MAX_LOGO_SIZE_BYTES: u64 = 5 * 1024 * 1024;
pub const ACCEPTED_IMAGE_TYPES: [&str; 2] = ["image/jpeg", "image/png"];

pub const ARCHIVE_FILE_NAME: &str = "fashion_product_studio_images.zip";
pub const IMAGE_FILE_PREFIX: &str = "fashion_editorial_";
pub const RECOVERY_DIR_NAME: &str = "fashion_product_studio_images";

pub const ENV_API_KEY: &str = "GEMINI_API_KEY";
pub const ENV_API_KEY_FALLBACK: &str = "API_KEY";
pub const ENV_MODEL: &str = "GEMINI_MODEL";
pub const ENV_API_BASE: &str = "GEMINI_API_BASE";
pub const ENV_BATCH_SIZE: &str = "STUDIO_BATCH_SIZE";
pub const ENV_TIMEOUT_SECS: &str = "STUDIO_TIMEOUT_SECS";
