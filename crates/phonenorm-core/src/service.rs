use crate::region::RegionCode;
use phonenumber::{country, Mode, PhoneNumber};
use serde::Serialize;
use std::fmt;
use std::panic;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatVariant {
    National,
    International,
}

impl FormatVariant {
    pub fn label(self) -> &'static str {
        match self {
            FormatVariant::National => "national",
            FormatVariant::International => "international",
        }
    }
}

/// Phone-number intelligence the normalizer delegates to.
///
/// Implementations are expected to be stateless and cheap to share; all
/// calls are synchronous and in-process.
pub trait PhoneService {
    type Number;
    type Error: fmt::Display;

    fn parse(&self, text: &str, region: &RegionCode) -> Result<Self::Number, Self::Error>;

    fn is_valid(&self, number: &Self::Number) -> bool;

    /// Two-letter region the number belongs to, or `None` for numbers that
    /// do not map to a single region (e.g. `+800`).
    fn region_code(&self, number: &Self::Number) -> Option<String>;

    fn format(&self, number: &Self::Number, variant: FormatVariant) -> String;
}

#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("{0}")]
    Parse(#[from] phonenumber::ParseError),
    #[error("phone number library panicked: {0}")]
    Panicked(String),
}

/// `PhoneService` backed by the `phonenumber` crate and its bundled metadata.
#[derive(Debug, Clone, Copy, Default)]
pub struct Libphonenumber;

impl Libphonenumber {
    pub fn new() -> Self {
        Self
    }
}

impl PhoneService for Libphonenumber {
    type Number = PhoneNumber;
    type Error = LibraryError;

    fn parse(&self, text: &str, region: &RegionCode) -> Result<PhoneNumber, LibraryError> {
        // Unknown hints (including lowercase codes) parse without a region,
        // so only numbers carrying a country calling code succeed.
        let hint = region.as_str().parse::<country::Id>().ok();
        let text = text.to_string();

        // The phonenumber crate has some questionable unwraps on odd input.
        // A panic becomes a parse failure; the default panic hook still
        // prints its own message to stderr.
        match panic::catch_unwind(move || phonenumber::parse(hint, text)) {
            Ok(result) => Ok(result?),
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                debug!(error = %message, "phone number library panicked while parsing");
                Err(LibraryError::Panicked(message))
            }
        }
    }

    fn is_valid(&self, number: &PhoneNumber) -> bool {
        phonenumber::is_valid(number)
    }

    fn region_code(&self, number: &PhoneNumber) -> Option<String> {
        number.country().id().map(|id| {
            let code: &str = id.as_ref();
            code.to_string()
        })
    }

    fn format(&self, number: &PhoneNumber, variant: FormatVariant) -> String {
        let mode = match variant {
            FormatVariant::National => Mode::National,
            FormatVariant::International => Mode::International,
        };
        number.format().mode(mode).to_string()
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::{panic_message, FormatVariant, Libphonenumber, PhoneService};
    use std::panic;
    use crate::region::RegionCode;

    #[test]
    fn parses_national_number_with_region_hint() {
        let service = Libphonenumber::new();
        let number = service
            .parse("650-253-0000", &RegionCode::new("US"))
            .expect("parse");
        assert_eq!(service.region_code(&number).as_deref(), Some("US"));
        assert_eq!(
            service.format(&number, FormatVariant::National),
            "(650) 253-0000"
        );
        assert_eq!(
            service.format(&number, FormatVariant::International),
            "+1 650-253-0000"
        );
    }

    #[test]
    fn derives_region_from_country_calling_code() {
        let service = Libphonenumber::new();
        let number = service
            .parse("+44 20 7946 0958", &RegionCode::new("US"))
            .expect("parse");
        assert_eq!(service.region_code(&number).as_deref(), Some("GB"));
    }

    #[test]
    fn unknown_region_hint_still_parses_international_input() {
        let service = Libphonenumber::new();
        let number = service
            .parse("+44 20 7946 0958", &RegionCode::new("gb"))
            .expect("parse");
        assert_eq!(service.region_code(&number).as_deref(), Some("GB"));
    }

    #[test]
    fn rejects_empty_input() {
        let service = Libphonenumber::new();
        assert!(service.parse("", &RegionCode::new("US")).is_err());
    }

    #[test]
    fn rejects_text_without_digits() {
        let service = Libphonenumber::new();
        let result = service.parse("not a number", &RegionCode::new("US"));
        assert!(result.is_err());
    }

    #[test]
    fn panic_payloads_become_messages() {
        let payload = panic::catch_unwind(|| panic!("bad metadata")).unwrap_err();
        assert_eq!(panic_message(payload.as_ref()), "bad metadata");

        let code = 7;
        let payload = panic::catch_unwind(|| panic!("bad code {code}")).unwrap_err();
        assert_eq!(panic_message(payload.as_ref()), "bad code 7");
    }

    #[test]
    fn format_variant_labels() {
        assert_eq!(FormatVariant::National.label(), "national");
        assert_eq!(FormatVariant::International.label(), "international");
    }
}
