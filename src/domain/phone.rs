use std::collections::HashSet;
use std::str::FromStr;

use phonenumber::country;

use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// A country together with its international exit code.
///
/// Exit codes come from a static table; countries not listed there dial out with `00`.
pub struct Country {
    id: country::Id,
    exit_code: &'static str,
}

impl Country {
    /// Look up a country by its region id.
    pub fn new(id: country::Id) -> Self {
        Self {
            id,
            exit_code: exit_code_for(id),
        }
    }

    /// Parse a two-letter region id such as `CN` or `us`.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "country" });
        }
        let id = country::Id::from_str(&trimmed.to_ascii_uppercase()).map_err(|_| {
            ValidationError::UnknownCountry {
                input: trimmed.to_owned(),
            }
        })?;
        Ok(Self::new(id))
    }

    pub fn id(self) -> country::Id {
        self.id
    }

    /// International dialing prefix used to call out of this country.
    pub fn exit_code(self) -> &'static str {
        self.exit_code
    }
}

fn exit_code_for(id: country::Id) -> &'static str {
    use phonenumber::country::Id::*;

    match id {
        US | CA | AG | AI | AS | BB | BM | BS | DM | DO | GD | GU | JM | KN | KY | LC | MP
        | MS | PR | SX | TC | TT | VC | VG | VI => "011",
        JP => "010",
        AU => "0011",
        KR | HK | ID | TH => "001",
        TW => "002",
        SG | KE => "000",
        RU | KZ | BY => "810",
        _ => "00",
    }
}

#[derive(Debug, Clone)]
/// Parsed recipient number.
///
/// Equality and hashing use the country and the national number only.
pub struct Phone {
    raw: String,
    country: Country,
    calling_code: u16,
    national: String,
    e164: String,
    is_mobile: bool,
}

impl Phone {
    /// Parse `input` against `default_country`.
    ///
    /// Numbers carrying their own country prefix (`+44...`, or the default country's exit
    /// code) are attributed to that country instead.
    pub fn parse(input: &str, default_country: Country) -> Result<Self, ValidationError> {
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty { field: "phone" });
        }
        let invalid = || ValidationError::InvalidPhoneNumber { input: raw.clone() };

        let parsed = phonenumber::parse(Some(default_country.id()), &raw).map_err(|_| invalid())?;
        let id = parsed.country().id().ok_or_else(invalid)?;
        let calling_code = parsed.country().code();

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();
        let national = e164
            .strip_prefix('+')
            .and_then(|rest| rest.strip_prefix(calling_code.to_string().as_str()))
            .filter(|national| !national.is_empty())
            .ok_or_else(invalid)?
            .to_owned();

        let is_mobile = phonenumber::is_valid(&parsed)
            && matches!(
                parsed.number_type(&phonenumber::metadata::DATABASE),
                phonenumber::Type::Mobile | phonenumber::Type::FixedLineOrMobile
            );

        Ok(Self {
            raw,
            country: Country::new(id),
            calling_code,
            national,
            e164,
            is_mobile,
        })
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn country(&self) -> Country {
        self.country
    }

    /// Country calling code, e.g. `86`.
    pub fn calling_code(&self) -> u16 {
        self.calling_code
    }

    /// National significant number as digits, without any prefix.
    pub fn national(&self) -> &str {
        &self.national
    }

    pub fn e164(&self) -> &str {
        &self.e164
    }

    /// Whether the number is valid and belongs to its country's mobile numbering plan.
    pub fn is_mobile(&self) -> bool {
        self.is_mobile
    }
}

impl PartialEq for Phone {
    fn eq(&self, other: &Self) -> bool {
        self.country == other.country && self.national == other.national
    }
}

impl Eq for Phone {}

impl std::hash::Hash for Phone {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.country.hash(state);
        self.national.hash(state);
    }
}

/// Parse every raw number against `default_country`.
///
/// Unparseable numbers are dropped, never reported as errors.
pub fn normalize<I, S>(raw_numbers: I, default_country: Country) -> Vec<Phone>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw_numbers
        .into_iter()
        .filter_map(|raw| match Phone::parse(raw.as_ref(), default_country) {
            Ok(phone) => Some(phone),
            Err(err) => {
                log::debug!("dropping recipient: {err}");
                None
            }
        })
        .collect()
}

/// Remove repeated numbers, keeping the first occurrence of each.
pub fn dedup(phones: Vec<Phone>) -> Vec<Phone> {
    let mut seen = HashSet::<(Country, String)>::new();
    phones
        .into_iter()
        .filter(|phone| seen.insert((phone.country, phone.national.clone())))
        .collect()
}

/// `exit_code` + calling code + national number, with leading `0`/`+` stripped from the
/// national part.
pub fn to_international_format(phone: &Phone, exit_code: &str) -> String {
    let national = phone.national.trim_start_matches(['0', '+']);
    format!("{exit_code}{}{national}", phone.calling_code)
}
