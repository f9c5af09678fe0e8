use std::fmt;

use serde::Deserialize;

use crate::domain::phone::{Country, Phone};
use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SendCloud SMS user (`smsUser`).
///
/// Invariant: non-empty after trimming.
pub struct SmsUser(String);

impl SmsUser {
    /// Form field name used by SendCloud (`smsUser`).
    pub const FIELD: &'static str = "smsUser";

    /// Create a validated [`SmsUser`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated user name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq)]
/// Shared secret (`smsKey`) used to sign requests. Never sent over the wire.
///
/// Invariant: must not be empty (whitespace is preserved and allowed).
pub struct SmsKey(String);

impl SmsKey {
    /// Name used for this value in configuration and errors.
    pub const FIELD: &'static str = "smsKey";

    /// Create a validated [`SmsKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the secret as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SmsKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SmsKey(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Gateway-registered template id (`templateId`).
///
/// Invariant: non-empty after trimming.
pub struct TemplateId(String);

impl TemplateId {
    /// Form field name used by SendCloud (`templateId`).
    pub const FIELD: &'static str = "templateId";

    /// Create a validated [`TemplateId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated template id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Verification code rendered by a verification-code template.
///
/// Invariant: non-empty after trimming.
pub struct VerificationCode(String);

impl VerificationCode {
    /// Template variable name the code is stored under (`code`).
    pub const FIELD: &'static str = "code";

    /// Create a validated [`VerificationCode`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Gateway routing flag (`msgType`).
pub enum MsgType {
    /// Domestic SMS (`0`); numbers are sent in national format.
    Domestic,
    /// International SMS (`2`); numbers are sent with an exit code prefix.
    International,
}

impl MsgType {
    /// Form field name used by SendCloud (`msgType`).
    pub const FIELD: &'static str = "msgType";

    /// Integer value as sent on the wire.
    pub fn as_i32(self) -> i32 {
        match self {
            Self::Domestic => 0,
            Self::International => 2,
        }
    }

    /// Classify a batch once.
    ///
    /// International only when the template's home country is not the default country
    /// and at least one of `recipients` lives outside the default country.
    pub fn classify(
        template_country: Country,
        default_country: Country,
        recipients: &[Phone],
    ) -> Self {
        let foreign_template = template_country != default_country;
        let foreign_recipient = recipients
            .iter()
            .any(|phone| phone.country() != default_country);
        if foreign_template && foreign_recipient {
            Self::International
        } else {
            Self::Domestic
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Which recipient list decides [`MsgType`].
pub enum ClassifyUsing {
    /// Every number that parsed, before dedup and the mobile filter.
    RawRecipients,
    /// Only the numbers that will actually be sent.
    #[default]
    FilteredRecipients,
}
