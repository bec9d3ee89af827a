use crate::error::NormalizeError;
use crate::region::RegionCode;
use crate::service::{FormatVariant, PhoneService};
use serde::Serialize;
use tracing::debug;

/// A candidate rendered in its selected format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Normalized {
    pub input: String,
    pub formatted: String,
    pub format: FormatVariant,
    pub region: Option<String>,
    /// Reported by the phone library; never used to suppress output.
    pub valid: bool,
}

/// National when the derived region is known and identical to the default
/// region text, international otherwise.
pub fn select_format(derived: Option<&str>, default_region: &RegionCode) -> FormatVariant {
    match derived {
        Some(region) if default_region.matches(region) => FormatVariant::National,
        _ => FormatVariant::International,
    }
}

pub fn normalize<S: PhoneService>(
    service: &S,
    candidate: &str,
    default_region: &RegionCode,
) -> Result<Normalized, NormalizeError> {
    let number = service
        .parse(candidate, default_region)
        .map_err(|err| NormalizeError::Parse {
            candidate: candidate.to_string(),
            reason: err.to_string(),
        })?;

    let valid = service.is_valid(&number);
    let region = service.region_code(&number);
    let format = select_format(region.as_deref(), default_region);
    debug!(
        candidate,
        region = region.as_deref().unwrap_or("-"),
        valid,
        format = format.label(),
        "number parsed"
    );

    Ok(Normalized {
        input: candidate.to_string(),
        formatted: service.format(&number, format),
        format,
        region,
        valid,
    })
}

/// Normalizes candidates against a fixed default region.
#[derive(Debug, Clone)]
pub struct Normalizer<S> {
    service: S,
    default_region: RegionCode,
}

impl<S: PhoneService> Normalizer<S> {
    pub fn new(service: S, default_region: RegionCode) -> Self {
        Self {
            service,
            default_region,
        }
    }

    pub fn default_region(&self) -> &RegionCode {
        &self.default_region
    }

    pub fn normalize(&self, candidate: &str) -> Result<Normalized, NormalizeError> {
        normalize(&self.service, candidate, &self.default_region)
    }
}
