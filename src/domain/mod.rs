//! Domain layer: strong types with validation and invariants (no I/O).

mod params;
mod phone;
mod request;
mod response;
mod template;
mod validation;
mod value;

pub use params::{ParameterSet, SignedRequest};
pub use phone::{Country, Phone, dedup, normalize, to_international_format};
pub use request::{SEND_SMS_MAX_RECIPIENTS, SendCode, SendSms};
pub use response::{ActionResult, LOCAL_FAILURE_CODE};
pub use template::{Template, TemplateKind, TemplateRegistry};
pub use validation::ValidationError;
pub use value::{ClassifyUsing, MsgType, SmsKey, SmsUser, TemplateId, VerificationCode};
