//! `Authorization: Basic` credential extraction (RFC 7617).

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use campus_security::Credential;
use http::HeaderValue;
use zeroize::Zeroizing;

/// Standard alphabet, padding optional on decode.
const BASIC_PAYLOAD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Why no credential could be read from the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractError {
    /// No `Authorization` header.
    Absent,
    /// Header present but unusable. Carries an internal diagnostic.
    Malformed(&'static str),
}

/// Parses `Authorization: Basic base64(identifier:secret)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CredentialExtractor;

impl CredentialExtractor {
    pub const SCHEME: &'static str = "Basic";

    /// Extract a credential from the raw header value.
    ///
    /// The scheme is matched case-insensitively. The decoded payload is split
    /// on the first `:`, so secrets may contain colons but identifiers may not.
    ///
    /// # Errors
    ///
    /// [`ExtractError::Absent`] when there is no header, otherwise
    /// [`ExtractError::Malformed`].
    pub fn extract(header: Option<&HeaderValue>) -> Result<Credential, ExtractError> {
        let Some(raw) = header else {
            return Err(ExtractError::Absent);
        };

        let raw = raw
            .to_str()
            .map_err(|_| ExtractError::Malformed("header is not visible ASCII"))?;

        let (scheme, payload) = raw
            .trim()
            .split_once(' ')
            .ok_or(ExtractError::Malformed("missing credentials payload"))?;

        if !scheme.eq_ignore_ascii_case(Self::SCHEME) {
            return Err(ExtractError::Malformed("unsupported authorization scheme"));
        }

        let payload = payload.trim();
        if payload.is_empty() {
            return Err(ExtractError::Malformed("missing credentials payload"));
        }

        let decoded = Zeroizing::new(
            BASIC_PAYLOAD
                .decode(payload)
                .map_err(|_| ExtractError::Malformed("payload is not valid base64"))?,
        );

        let decoded = std::str::from_utf8(&decoded)
            .map_err(|_| ExtractError::Malformed("payload is not valid UTF-8"))?;

        let (identifier, secret) = decoded
            .split_once(':')
            .ok_or(ExtractError::Malformed("missing identifier/secret separator"))?;

        if identifier.is_empty() {
            return Err(ExtractError::Malformed("empty identifier"));
        }

        Ok(Credential::new(identifier, secret.to_owned()))
    }
}

/// Build an `Authorization` header value for the given pair.
#[must_use]
pub fn basic_authorization_value(identifier: &str, secret: &str) -> String {
    let payload = Zeroizing::new(format!("{identifier}:{secret}"));
    format!(
        "{} {}",
        CredentialExtractor::SCHEME,
        base64::engine::general_purpose::STANDARD.encode(payload.as_bytes())
    )
}
