pub mod error;
pub mod normalize;
pub mod region;
pub mod service;

pub use error::NormalizeError;
pub use normalize::{normalize, select_format, Normalized, Normalizer};
pub use region::{LanguageTag, RegionCode, DEFAULT_LANGUAGE, DEFAULT_REGION};
pub use service::{FormatVariant, LibraryError, Libphonenumber, PhoneService};
