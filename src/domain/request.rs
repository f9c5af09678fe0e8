use std::collections::BTreeMap;

use crate::domain::template::TemplateKind;
use crate::domain::value::{TemplateId, VerificationCode};

/// Upper bound on recipients per send, counted after dedup and the mobile filter.
pub const SEND_SMS_MAX_RECIPIENTS: usize = 2000;

#[derive(Debug, Clone)]
/// A templated send to one or more recipients.
///
/// Recipients are raw strings; they are parsed, deduplicated, and filtered when the
/// request is sent, so an empty or oversized list is reported as a failed
/// [`ActionResult`](crate::ActionResult) rather than rejected here.
pub struct SendSms {
    kind: TemplateKind,
    recipients: Vec<String>,
    vars: BTreeMap<String, String>,
    template_id: Option<TemplateId>,
}

impl SendSms {
    pub fn new(kind: TemplateKind, recipients: Vec<String>) -> Self {
        Self {
            kind,
            recipients,
            vars: BTreeMap::new(),
            template_id: None,
        }
    }

    /// Set one template variable, replacing any previous value.
    pub fn var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    pub fn vars(mut self, vars: BTreeMap<String, String>) -> Self {
        self.vars.extend(vars);
        self
    }

    /// Use this template instead of resolving one from the recipients' country.
    pub fn template(mut self, id: TemplateId) -> Self {
        self.template_id = Some(id);
        self
    }

    pub fn kind(&self) -> TemplateKind {
        self.kind
    }

    pub fn recipients(&self) -> &[String] {
        &self.recipients
    }

    pub fn template_vars(&self) -> &BTreeMap<String, String> {
        &self.vars
    }

    pub fn template_id(&self) -> Option<&TemplateId> {
        self.template_id.as_ref()
    }
}

#[derive(Debug, Clone)]
/// A verification code sent to a single number through a verification-code template.
pub struct SendCode {
    phone: String,
    code: VerificationCode,
    template_id: Option<TemplateId>,
}

impl SendCode {
    pub fn new(phone: impl Into<String>, code: VerificationCode) -> Self {
        Self {
            phone: phone.into(),
            code,
            template_id: None,
        }
    }

    pub fn template(mut self, id: TemplateId) -> Self {
        self.template_id = Some(id);
        self
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn code(&self) -> &VerificationCode {
        &self.code
    }
}

impl From<SendCode> for SendSms {
    fn from(value: SendCode) -> Self {
        let request = SendSms::new(TemplateKind::VerificationCode, vec![value.phone])
            .var(VerificationCode::FIELD, value.code.as_str());
        match value.template_id {
            Some(id) => request.template(id),
            None => request,
        }
    }
}
