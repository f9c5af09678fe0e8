//! Transport layer: wire-format details (form encoding, JSON decoding).

mod send_sms;

pub use send_sms::{SendForm, decode_send_sms_json_response, encode_send_sms_form};
