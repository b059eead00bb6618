use crate::asset::{encode_asset, validate_form, EncodedAsset};
use crate::descriptor::{AspectRatio, Selection};
use crate::error::{BatchError, GenerationError, InvalidDataUri, StudioError};
use crate::prompt::build_prompt;
use async_trait::async_trait;
use futures::future::join_all;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Self-describing image: renders as `data:{mime};base64,{data}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    mime_type: String,
    data: String,
}

impl ImagePayload {
    pub fn new(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// The base64 body with the `data:` prefix stripped.
    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn decode(&self) -> Result<Vec<u8>, base64::DecodeError> {
        base64::decode(self.data())
    }
}

impl fmt::Display for ImagePayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "data:{};base64,{}", self.mime_type, self.data)
    }
}

impl FromStr for ImagePayload {
    type Err = InvalidDataUri;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s.strip_prefix("data:").ok_or(InvalidDataUri)?;
        let (mime_type, data) = rest.split_once(";base64,").ok_or(InvalidDataUri)?;
        if mime_type.is_empty() || data.is_empty() {
            return Err(InvalidDataUri);
        }
        Ok(ImagePayload::new(mime_type, data))
    }
}

/// Everything one sub-call needs. Built once per submission and only ever
/// read after that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    prompt: String,
    product: EncodedAsset,
    logo: EncodedAsset,
    aspect_ratio: AspectRatio,
}

impl GenerationRequest {
    pub fn new(
        prompt: String,
        product: EncodedAsset,
        logo: EncodedAsset,
        aspect_ratio: AspectRatio,
    ) -> Self {
        Self {
            prompt,
            product,
            logo,
            aspect_ratio,
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn product(&self) -> &EncodedAsset {
        &self.product
    }

    pub fn logo(&self) -> &EncodedAsset {
        &self.logo
    }

    pub fn aspect_ratio(&self) -> AspectRatio {
        self.aspect_ratio
    }
}

#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<ImagePayload, GenerationError>;
}

pub struct Orchestrator<G> {
    generator: G,
    batch_size: usize,
}

impl<G: ImageGenerator> Orchestrator<G> {
    pub fn new(generator: G, batch_size: usize) -> Result<Self, GenerationError> {
        if batch_size == 0 {
            return Err(GenerationError::Configuration(
                "batch size must be at least 1".into(),
            ));
        }
        Ok(Self {
            generator,
            batch_size,
        })
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Runs `batch_size` identical calls at once and waits for all of them.
    /// Any single failure fails the whole batch; results keep issue order.
    pub async fn generate_batch(
        &self,
        request: &GenerationRequest,
    ) -> Result<Vec<ImagePayload>, BatchError> {
        log::info!(
            "Issuing {} generation calls ({})",
            self.batch_size,
            request.aspect_ratio().ratio()
        );

        let calls = (0..self.batch_size).map(|_| self.generator.generate(request));
        let outcomes = join_all(calls).await;

        let mut images = Vec::with_capacity(self.batch_size);
        let mut failures = Vec::new();
        for (index, outcome) in outcomes.into_iter().enumerate() {
            match outcome {
                Ok(image) => images.push(image),
                Err(e) => {
                    log::error!("Generation call {} failed ({:?}): {}", index, e.kind(), e);
                    failures.push((index, e));
                }
            }
        }

        if !failures.is_empty() {
            log::warn!(
                "Discarding batch: {} of {} calls failed",
                failures.len(),
                self.batch_size
            );
            return Err(BatchError {
                failures,
                batch_size: self.batch_size,
            });
        }

        log::info!("Batch complete with {} images", images.len());
        Ok(images)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct BatchToken(u64);

/// Hands out increasing tokens so a newer submission can win over an older
/// one still in flight.
#[derive(Debug, Default)]
pub struct BatchTracker {
    latest: AtomicU64,
}

impl BatchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> BatchToken {
        BatchToken(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, token: BatchToken) -> bool {
        self.latest.load(Ordering::SeqCst) == token.0
    }
}

#[derive(Debug)]
pub enum BatchOutcome {
    Completed(Vec<ImagePayload>),
    Superseded,
}

/// The submit side of the form: validation, prompt, encoding and the batch,
/// with stale results dropped.
pub struct Studio<G> {
    orchestrator: Arc<Orchestrator<G>>,
    tracker: Arc<BatchTracker>,
}

impl<G> Clone for Studio<G> {
    fn clone(&self) -> Self {
        Self {
            orchestrator: Arc::clone(&self.orchestrator),
            tracker: Arc::clone(&self.tracker),
        }
    }
}

impl<G: ImageGenerator> Studio<G> {
    pub fn new(orchestrator: Orchestrator<G>) -> Self {
        Self {
            orchestrator: Arc::new(orchestrator),
            tracker: Arc::new(BatchTracker::new()),
        }
    }

    pub fn orchestrator(&self) -> &Orchestrator<G> {
        &self.orchestrator
    }

    pub async fn submit(
        &self,
        product: Option<&Path>,
        logo: Option<&Path>,
        selection: Selection,
    ) -> Result<BatchOutcome, StudioError> {
        let (product, logo) = validate_form(product, logo).await?;
        log::debug!(
            "Validated {} ({} bytes) and {} ({} bytes)",
            product.role(),
            product.size(),
            logo.role(),
            logo.size()
        );

        let prompt = build_prompt(selection.descriptor(), selection.aspect_ratio.phrase());
        let product = encode_asset(&product).await?;
        let logo = encode_asset(&logo).await?;
        let request = GenerationRequest::new(prompt, product, logo, selection.aspect_ratio);

        let token = self.tracker.issue();
        let result = self.orchestrator.generate_batch(&request).await;

        if !self.tracker.is_current(token) {
            log::info!("Dropping results of superseded batch {:?}", token);
            return Ok(BatchOutcome::Superseded);
        }

        Ok(BatchOutcome::Completed(result?))
    }
}
