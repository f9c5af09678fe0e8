//! Client layer: filters recipients, resolves templates, signs, and dispatches.

use std::collections::HashSet;
use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::{
    ActionResult, ClassifyUsing, Country, MsgType, Phone, SEND_SMS_MAX_RECIPIENTS, SendCode,
    SendSms, SignedRequest, SmsKey, SmsUser, Template, TemplateId, TemplateKind,
    TemplateRegistry, ValidationError, dedup, normalize,
};
use crate::sign::{DoubleSha256, SignatureScheme};
use crate::transport::SendForm;

const DEFAULT_SEND_ENDPOINT: &str = "https://api.sendcloud.net/smsapi/send";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self.client.post(url).form(&params).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, Clone)]
/// Account credentials: the public `smsUser` and the signing secret `smsKey`.
pub struct Credentials {
    sms_user: SmsUser,
    sms_key: SmsKey,
}

impl Credentials {
    /// Validate both parts; neither may be empty.
    pub fn new(
        sms_user: impl Into<String>,
        sms_key: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            sms_user: SmsUser::new(sms_user)?,
            sms_key: SmsKey::new(sms_key)?,
        })
    }

    pub fn sms_user(&self) -> &SmsUser {
        &self.sms_user
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`SendCloudClient`].
///
/// Business outcomes, including local recipient checks, are returned as
/// [`ActionResult`] instead. These variants cover:
/// - transport failures,
/// - missing templates (misconfiguration),
/// - values that could not be encoded or validated.
pub enum SendCloudError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// No template could be resolved for the request.
    #[error("no {kind} template for id {id:?} / country {country:?}")]
    TemplateNotFound {
        kind: TemplateKind,
        id: Option<TemplateId>,
        country: Option<Country>,
    },

    /// Template variables could not be serialized.
    #[error("encode error: {0}")]
    Encode(#[source] Box<dyn StdError + Send + Sync>),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Clone)]
/// Builder for [`SendCloudClient`].
///
/// Use this when you need to customize the endpoint, timeout, user-agent, msgType
/// classification, or signature scheme.
pub struct SendCloudClientBuilder {
    credentials: Credentials,
    default_country: Country,
    templates: Arc<TemplateRegistry>,
    endpoint: String,
    classify_using: ClassifyUsing,
    signer: Arc<dyn SignatureScheme>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl SendCloudClientBuilder {
    /// Create a builder with the default endpoint and signature scheme.
    pub fn new(
        credentials: Credentials,
        default_country: Country,
        templates: Arc<TemplateRegistry>,
    ) -> Self {
        Self {
            credentials,
            default_country,
            templates,
            endpoint: DEFAULT_SEND_ENDPOINT.to_owned(),
            classify_using: ClassifyUsing::default(),
            signer: Arc::new(DoubleSha256),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the endpoint used by templates without their own.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Choose which recipient list decides `msgType`.
    pub fn classify_using(mut self, classify_using: ClassifyUsing) -> Self {
        self.classify_using = classify_using;
        self
    }

    /// Replace the request signature scheme.
    pub fn signature_scheme(mut self, signer: Arc<dyn SignatureScheme>) -> Self {
        self.signer = signer;
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`SendCloudClient`].
    pub fn build(self) -> Result<SendCloudClient, SendCloudError> {
        url::Url::parse(&self.endpoint).map_err(|_| ValidationError::InvalidEndpoint {
            input: self.endpoint.clone(),
        })?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| SendCloudError::Transport(Box::new(err)))?;

        Ok(SendCloudClient {
            credentials: self.credentials,
            default_country: self.default_country,
            templates: self.templates,
            endpoint: self.endpoint,
            classify_using: self.classify_using,
            signer: self.signer,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level SendCloud SMS client.
///
/// Each send parses and filters the recipients, resolves a template from the shared
/// registry, builds and signs the form, and posts it to the template's endpoint (or
/// `https://api.sendcloud.net/smsapi/send`). Nothing is shared between calls except the
/// read-only registry.
pub struct SendCloudClient {
    credentials: Credentials,
    default_country: Country,
    templates: Arc<TemplateRegistry>,
    endpoint: String,
    classify_using: ClassifyUsing,
    signer: Arc<dyn SignatureScheme>,
    http: Arc<dyn HttpTransport>,
}

/// A signed request ready for dispatch, plus where it goes.
#[derive(Debug, Clone)]
pub struct PreparedSend {
    pub url: String,
    pub msg_type: MsgType,
    pub request: SignedRequest,
}

enum Prepared {
    Ready(PreparedSend),
    Rejected(ActionResult),
}

impl SendCloudClient {
    /// Create a client using the default endpoint.
    ///
    /// For more customization, use [`SendCloudClient::builder`].
    pub fn new(
        credentials: Credentials,
        default_country: Country,
        templates: Arc<TemplateRegistry>,
    ) -> Self {
        Self {
            credentials,
            default_country,
            templates,
            endpoint: DEFAULT_SEND_ENDPOINT.to_owned(),
            classify_using: ClassifyUsing::default(),
            signer: Arc::new(DoubleSha256),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(
        credentials: Credentials,
        default_country: Country,
        templates: Arc<TemplateRegistry>,
    ) -> SendCloudClientBuilder {
        SendCloudClientBuilder::new(credentials, default_country, templates)
    }

    /// Send a templated SMS.
    ///
    /// Returns `Ok` with a failed [`ActionResult`] when no recipient survives filtering
    /// (`-1`, `"No Numbers"`), when more than 2000 do (`-1`, `"Max 2000 Items"`), or when
    /// the gateway rejects the request or answers with something unreadable.
    ///
    /// Errors:
    /// - [`SendCloudError::TemplateNotFound`] when no template can be resolved,
    /// - [`SendCloudError::Transport`] when the HTTP call itself fails.
    pub async fn send(&self, request: SendSms) -> Result<ActionResult, SendCloudError> {
        let prepared = match self.prepare(&request)? {
            Prepared::Ready(prepared) => prepared,
            Prepared::Rejected(result) => return Ok(result),
        };

        log::debug!(
            "sending {:?} sms to {} via {}",
            prepared.msg_type,
            request.recipients().len(),
            prepared.url
        );
        let response = self
            .http
            .post_form(&prepared.url, prepared.request.into_form())
            .await
            .map_err(SendCloudError::Transport)?;

        match crate::transport::decode_send_sms_json_response(&response.body) {
            Ok(result) => Ok(result),
            Err(err) => {
                log::warn!(
                    "unreadable gateway response (HTTP {}): {err}",
                    response.status
                );
                Ok(ActionResult::unparsed())
            }
        }
    }

    /// Send a verification code to a single number through a verification-code template.
    pub async fn send_code(&self, request: SendCode) -> Result<ActionResult, SendCloudError> {
        self.send(request.into()).await
    }

    /// Build and sign a request without sending it.
    ///
    /// Returns `Ok(Err(result))` for the same local rejections [`SendCloudClient::send`]
    /// reports.
    pub fn sign_request(
        &self,
        request: &SendSms,
    ) -> Result<Result<PreparedSend, ActionResult>, SendCloudError> {
        Ok(match self.prepare(request)? {
            Prepared::Ready(prepared) => Ok(prepared),
            Prepared::Rejected(result) => Err(result),
        })
    }

    fn prepare(&self, request: &SendSms) -> Result<Prepared, SendCloudError> {
        let parsed = normalize(request.recipients(), self.default_country);
        let phones = dedup(parsed.clone())
            .into_iter()
            .filter(Phone::is_mobile)
            .collect::<Vec<_>>();

        if phones.is_empty() {
            return Ok(Prepared::Rejected(ActionResult::no_numbers()));
        }
        if phones.len() > SEND_SMS_MAX_RECIPIENTS {
            return Ok(Prepared::Rejected(ActionResult::too_many_numbers()));
        }

        let template = self.resolve_template(request, &phones)?;
        let classify_over = match self.classify_using {
            ClassifyUsing::RawRecipients => &parsed,
            ClassifyUsing::FilteredRecipients => &phones,
        };
        let msg_type =
            MsgType::classify(template.country(), self.default_country, classify_over);
        log::debug!("template {} resolved, msgType {:?}", template.id(), msg_type);

        let params = crate::transport::encode_send_sms_form(SendForm {
            sms_user: self.credentials.sms_user(),
            template_id: template.id(),
            phones: &phones,
            vars: request.template_vars(),
            msg_type,
            default_country: self.default_country,
        })
        .map_err(|err| SendCloudError::Encode(Box::new(err)))?;
        let signature = self.signer.sign(&self.credentials.sms_key, &params);

        let url = template
            .endpoint()
            .map(|url| url.as_str().to_owned())
            .unwrap_or_else(|| self.endpoint.clone());

        Ok(Prepared::Ready(PreparedSend {
            url,
            msg_type,
            request: params.into_signed(signature),
        }))
    }

    fn resolve_template(
        &self,
        request: &SendSms,
        phones: &[Phone],
    ) -> Result<&Template, SendCloudError> {
        let countries = phones
            .iter()
            .map(|phone| phone.country())
            .collect::<HashSet<_>>();
        let country = match (request.template_id(), countries.len()) {
            (None, 1) => countries.into_iter().next(),
            _ => None,
        };

        self.templates
            .get(request.kind(), request.template_id(), country)
            .ok_or_else(|| SendCloudError::TemplateNotFound {
                kind: request.kind(),
                id: request.template_id().cloned(),
                country,
            })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use phonenumber::country::Id;

    use crate::domain::VerificationCode;

    use super::*;

    #[derive(Debug, Clone)]
    struct FakeTransport {
        state: Arc<Mutex<FakeTransportState>>,
    }

    #[derive(Debug)]
    struct FakeTransportState {
        calls: usize,
        last_url: Option<String>,
        last_params: Vec<(String, String)>,
        response_status: u16,
        response_body: String,
        fail: bool,
    }

    impl FakeTransport {
        fn new(response_status: u16, response_body: impl Into<String>) -> Self {
            Self {
                state: Arc::new(Mutex::new(FakeTransportState {
                    calls: 0,
                    last_url: None,
                    last_params: Vec::new(),
                    response_status,
                    response_body: response_body.into(),
                    fail: false,
                })),
            }
        }

        fn failing() -> Self {
            let transport = Self::new(0, "");
            transport.state.lock().unwrap().fail = true;
            transport
        }

        fn last_request(&self) -> (Option<String>, Vec<(String, String)>) {
            let state = self.state.lock().unwrap();
            (state.last_url.clone(), state.last_params.clone())
        }

        fn calls(&self) -> usize {
            self.state.lock().unwrap().calls
        }
    }

    impl HttpTransport for FakeTransport {
        fn post_form<'a>(
            &'a self,
            url: &'a str,
            params: Vec<(String, String)>,
        ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
            Box::pin(async move {
                let (status, body, fail) = {
                    let mut state = self.state.lock().unwrap();
                    state.calls += 1;
                    state.last_url = Some(url.to_owned());
                    state.last_params = params;
                    (
                        state.response_status,
                        state.response_body.clone(),
                        state.fail,
                    )
                };
                if fail {
                    return Err("connection refused".into());
                }
                Ok(HttpResponse { status, body })
            })
        }
    }

    const OK_JSON: &str = r#"{"result":true,"statusCode":200,"message":"OK"}"#;

    fn param<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
        params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    fn template(id: &str, kind: TemplateKind, country: Id) -> Template {
        Template::new(TemplateId::new(id).unwrap(), kind, Country::new(country))
    }

    fn registry() -> Arc<TemplateRegistry> {
        Arc::new(
            TemplateRegistry::build([
                template("100", TemplateKind::Generic, Id::CN),
                template("200", TemplateKind::Generic, Id::US),
                template("300", TemplateKind::VerificationCode, Id::CN),
                template("400", TemplateKind::Generic, Id::GB)
                    .with_endpoint("https://example.invalid/intl/send")
                    .unwrap(),
            ])
            .unwrap(),
        )
    }

    fn make_client(transport: FakeTransport) -> SendCloudClient {
        make_client_with(transport, ClassifyUsing::FilteredRecipients)
    }

    fn make_client_with(
        transport: FakeTransport,
        classify_using: ClassifyUsing,
    ) -> SendCloudClient {
        SendCloudClient {
            credentials: Credentials::new("user", "secret").unwrap(),
            default_country: Country::new(Id::CN),
            templates: registry(),
            endpoint: "https://example.invalid/smsapi/send".to_owned(),
            classify_using,
            signer: Arc::new(DoubleSha256),
            http: Arc::new(transport),
        }
    }

    fn generic(numbers: &[&str]) -> SendSms {
        SendSms::new(
            TemplateKind::Generic,
            numbers.iter().map(|n| (*n).to_owned()).collect(),
        )
    }

    #[tokio::test]
    async fn send_domestic_posts_signed_sorted_form() {
        let transport = FakeTransport::new(200, OK_JSON);
        let client = make_client(transport.clone());

        let request = generic(&["13800138000", "+86 138 0013 8000"]).var("name", "Ann");
        let result = client.send(request).await.unwrap();
        assert_eq!(
            result,
            ActionResult::new(true, Some(200), Some("OK".to_owned()), None)
        );

        let (url, params) = transport.last_request();
        assert_eq!(url.as_deref(), Some("https://example.invalid/smsapi/send"));
        let keys = params.iter().map(|(k, _)| k.as_str()).collect::<Vec<_>>();
        assert_eq!(
            keys,
            vec!["msgType", "phone", "smsUser", "templateId", "vars", "signature"]
        );
        assert_eq!(param(&params, "msgType"), Some("0"));
        assert_eq!(param(&params, "phone"), Some("13800138000"));
        assert_eq!(param(&params, "smsUser"), Some("user"));
        assert_eq!(param(&params, "templateId"), Some("100"));
        assert_eq!(param(&params, "vars"), Some(r#"{"name":"Ann"}"#));
        assert!(params.iter().all(|(k, _)| k != "smsKey"));
    }

    #[tokio::test]
    async fn signature_matches_scheme_over_unsigned_params() {
        let transport = FakeTransport::new(200, OK_JSON);
        let client = make_client(transport.clone());
        let request = generic(&["13800138000"]);

        let prepared = client.sign_request(&request).unwrap().unwrap();
        let expected = DoubleSha256.sign(
            &SmsKey::new("secret").unwrap(),
            prepared.request.params(),
        );
        assert_eq!(prepared.request.signature(), expected);

        client.send(request).await.unwrap();
        let (_, params) = transport.last_request();
        assert_eq!(param(&params, "signature"), Some(expected.as_str()));
    }

    #[tokio::test]
    async fn send_international_uses_exit_code_and_foreign_template() {
        let transport = FakeTransport::new(200, OK_JSON);
        let client = make_client(transport.clone());

        let request = generic(&["+1 201-555-0123"]);
        client.send(request).await.unwrap();

        let (_, params) = transport.last_request();
        assert_eq!(param(&params, "templateId"), Some("200"));
        assert_eq!(param(&params, "msgType"), Some("2"));
        assert_eq!(param(&params, "phone"), Some("0012015550123"));
    }

    #[tokio::test]
    async fn template_endpoint_override_is_used() {
        let transport = FakeTransport::new(200, OK_JSON);
        let client = make_client(transport.clone());

        client.send(generic(&["+447400123456"])).await.unwrap();

        let (url, params) = transport.last_request();
        assert_eq!(url.as_deref(), Some("https://example.invalid/intl/send"));
        assert_eq!(param(&params, "phone"), Some("00447400123456"));
    }

    #[tokio::test]
    async fn no_eligible_numbers_is_rejected_without_network() {
        let transport = FakeTransport::new(200, OK_JSON);
        let client = make_client(transport.clone());

        let request = generic(&["not-a-number", "010 1234 5678"]);
        let result = client.send(request).await.unwrap();
        assert_eq!(result, ActionResult::no_numbers());
        assert_eq!(result.status_code, Some(-1));
        assert_eq!(result.message.as_deref(), Some("No Numbers"));
        assert_eq!(transport.calls(), 0);

        let result = client.send(generic(&[])).await.unwrap();
        assert_eq!(result, ActionResult::no_numbers());
    }

    #[tokio::test]
    async fn batch_limit_is_enforced_after_dedup() {
        let transport = FakeTransport::new(200, OK_JSON);
        let client = make_client(transport.clone());

        let mut numbers = (0..SEND_SMS_MAX_RECIPIENTS)
            .map(|i| format!("1380013{i:04}"))
            .collect::<Vec<_>>();
        numbers.push("13800130000".to_owned());
        let result = client
            .send(SendSms::new(TemplateKind::Generic, numbers.clone()))
            .await
            .unwrap();
        assert!(result.success);
        assert_eq!(transport.calls(), 1);

        numbers.push(format!("1380013{:04}", SEND_SMS_MAX_RECIPIENTS));
        let result = client
            .send(SendSms::new(TemplateKind::Generic, numbers))
            .await
            .unwrap();
        assert_eq!(
            result,
            ActionResult::new(false, Some(-1), Some("Max 2000 Items".to_owned()), None)
        );
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn mixed_countries_without_explicit_template_is_an_error() {
        let transport = FakeTransport::new(200, OK_JSON);
        let client = make_client(transport.clone());

        let err = client
            .send(generic(&["13800138000", "+12015550123"]))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            SendCloudError::TemplateNotFound {
                kind: TemplateKind::Generic,
                id: None,
                country: None,
            }
        ));
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn mixed_countries_with_explicit_template_is_international() {
        let transport = FakeTransport::new(200, OK_JSON);
        let client = make_client(transport.clone());

        let request = generic(&["13800138000", "+12015550123"])
            .template(TemplateId::new("200").unwrap());
        client.send(request).await.unwrap();

        let (_, params) = transport.last_request();
        assert_eq!(param(&params, "msgType"), Some("2"));
        assert_eq!(
            param(&params, "phone"),
            Some("008613800138000,0012015550123")
        );
    }

    #[tokio::test]
    async fn unknown_explicit_template_is_an_error() {
        let client = make_client(FakeTransport::new(200, OK_JSON));
        let request = generic(&["13800138000"]).template(TemplateId::new("999").unwrap());
        let err = client.send(request).await.unwrap_err();
        match err {
            SendCloudError::TemplateNotFound { id, .. } => {
                assert_eq!(id.map(|id| id.as_str().to_owned()).as_deref(), Some("999"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn classification_can_use_raw_recipients() {
        let request = || {
            generic(&["13800138000", "+49 30 123456"]).template(TemplateId::new("200").unwrap())
        };

        let transport = FakeTransport::new(200, OK_JSON);
        let client = make_client(transport.clone());
        client.send(request()).await.unwrap();
        let (_, params) = transport.last_request();
        assert_eq!(param(&params, "msgType"), Some("0"));
        assert_eq!(param(&params, "phone"), Some("13800138000"));

        let transport = FakeTransport::new(200, OK_JSON);
        let client = make_client_with(transport.clone(), ClassifyUsing::RawRecipients);
        client.send(request()).await.unwrap();
        let (_, params) = transport.last_request();
        assert_eq!(param(&params, "msgType"), Some("2"));
        assert_eq!(param(&params, "phone"), Some("008613800138000"));
    }

    #[tokio::test]
    async fn send_code_uses_verification_template() {
        let transport = FakeTransport::new(200, OK_JSON);
        let client = make_client(transport.clone());

        let request = SendCode::new("13800138000", VerificationCode::new("4821").unwrap());
        let result = client.send_code(request).await.unwrap();
        assert!(result.is_success());

        let (_, params) = transport.last_request();
        assert_eq!(param(&params, "templateId"), Some("300"));
        assert_eq!(param(&params, "vars"), Some(r#"{"code":"4821"}"#));
    }

    #[tokio::test]
    async fn business_rejection_is_returned_as_result() {
        let json = r#"{"result":false,"statusCode":40005,"message":"bad signature"}"#;
        let client = make_client(FakeTransport::new(200, json));
        let result = client.send(generic(&["13800138000"])).await.unwrap();
        assert!(!result.success);
        assert_eq!(result.status_code, Some(40005));
        assert_eq!(result.message.as_deref(), Some("bad signature"));
    }

    #[tokio::test]
    async fn unreadable_body_degrades_to_failed_result() {
        let client = make_client(FakeTransport::new(502, "<html>bad gateway</html>"));
        let result = client.send(generic(&["13800138000"])).await.unwrap();
        assert_eq!(result, ActionResult::unparsed());

        let client = make_client(FakeTransport::new(200, ""));
        let result = client.send(generic(&["13800138000"])).await.unwrap();
        assert_eq!(result, ActionResult::unparsed());
    }

    #[tokio::test]
    async fn transport_failure_is_an_error() {
        let client = make_client(FakeTransport::failing());
        let err = client.send(generic(&["13800138000"])).await.unwrap_err();
        assert!(matches!(err, SendCloudError::Transport(_)));
    }

    #[test]
    fn credentials_validate_inputs() {
        assert!(Credentials::new("  ", "secret").is_err());
        assert!(Credentials::new("user", "").is_err());
        let credentials = Credentials::new(" user ", "secret").unwrap();
        assert_eq!(credentials.sms_user().as_str(), "user");
        assert!(!format!("{credentials:?}").contains("secret"));
    }

    #[test]
    fn builder_overrides_are_applied() {
        let client = SendCloudClient::builder(
            Credentials::new("user", "secret").unwrap(),
            Country::new(Id::CN),
            registry(),
        )
        .endpoint("https://example.invalid/all")
        .classify_using(ClassifyUsing::RawRecipients)
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();
        assert_eq!(client.endpoint, "https://example.invalid/all");
        assert_eq!(client.classify_using, ClassifyUsing::RawRecipients);

        let err = SendCloudClient::builder(
            Credentials::new("user", "secret").unwrap(),
            Country::new(Id::CN),
            registry(),
        )
        .endpoint("not a url")
        .build()
        .err()
        .unwrap();
        assert!(matches!(
            err,
            SendCloudError::Validation(ValidationError::InvalidEndpoint { .. })
        ));
    }
}
