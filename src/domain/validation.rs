use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    InvalidPhoneNumber { input: String },
    UnknownCountry { input: String },
    InvalidEndpoint { input: String },
    DuplicateTemplate { id: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
            Self::UnknownCountry { input } => write!(f, "unknown country id: {input}"),
            Self::InvalidEndpoint { input } => write!(f, "invalid endpoint url: {input}"),
            Self::DuplicateTemplate { id } => {
                write!(f, "template {id} is registered more than once")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
