use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::domain::{
    ActionResult, Country, MsgType, ParameterSet, Phone, SmsUser, TemplateId,
    to_international_format,
};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Deserialize)]
struct SendJsonResponse {
    result: bool,
    #[serde(default, rename = "statusCode")]
    status_code: Option<i32>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    info: Option<Map<String, Value>>,
}

/// Everything the canonical parameter set is built from.
#[derive(Debug, Clone, Copy)]
pub struct SendForm<'a> {
    pub sms_user: &'a SmsUser,
    pub template_id: &'a TemplateId,
    pub phones: &'a [Phone],
    pub vars: &'a BTreeMap<String, String>,
    pub msg_type: MsgType,
    pub default_country: Country,
}

pub fn encode_send_sms_form(form: SendForm<'_>) -> Result<ParameterSet, TransportError> {
    let phone = form
        .phones
        .iter()
        .map(|phone| match form.msg_type {
            MsgType::Domestic => phone.national().to_owned(),
            MsgType::International => {
                to_international_format(phone, form.default_country.exit_code())
            }
        })
        .collect::<Vec<_>>()
        .join(",");

    let mut params = ParameterSet::new();
    params.insert(SmsUser::FIELD, form.sms_user.as_str());
    params.insert(TemplateId::FIELD, form.template_id.as_str());
    params.insert("phone", phone);
    params.insert(MsgType::FIELD, form.msg_type.as_i32().to_string());
    params.insert("vars", serde_json::to_string(form.vars)?);
    Ok(params)
}

pub fn decode_send_sms_json_response(json: &str) -> Result<ActionResult, TransportError> {
    let parsed: SendJsonResponse = serde_json::from_str(json)?;
    Ok(ActionResult::new(
        parsed.result,
        parsed.status_code,
        parsed.message,
        parsed.info,
    ))
}
