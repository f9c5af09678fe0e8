//! Deserializable client configuration.
//!
//! Reading the configuration from a file or the environment is up to the caller; any serde
//! format works.

use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;

use crate::client::{Credentials, SendCloudClient, SendCloudClientBuilder, SendCloudError};
use crate::domain::{
    ClassifyUsing, Country, Template, TemplateId, TemplateKind, TemplateRegistry, ValidationError,
};

#[derive(Debug, Clone, Deserialize)]
pub struct TemplateConfig {
    pub kind: TemplateKind,
    pub id: String,
    /// Two-letter home country id, e.g. `CN`.
    pub country: String,
    #[serde(default)]
    pub endpoint: Option<String>,
}

impl TemplateConfig {
    pub fn into_template(self) -> Result<Template, ValidationError> {
        let template = Template::new(
            TemplateId::new(self.id)?,
            self.kind,
            Country::parse(&self.country)?,
        );
        match self.endpoint {
            Some(endpoint) => template.with_endpoint(&endpoint),
            None => Ok(template),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    pub sms_user: String,
    pub sms_key: String,
    pub default_country: String,
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub classify_using: ClassifyUsing,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub templates: Vec<TemplateConfig>,
}

impl ClientConfig {
    /// Validate every value and produce a builder for further tweaks.
    pub fn into_builder(self) -> Result<SendCloudClientBuilder, ValidationError> {
        let credentials = Credentials::new(self.sms_user, self.sms_key)?;
        let default_country = Country::parse(&self.default_country)?;
        let templates = self
            .templates
            .into_iter()
            .map(TemplateConfig::into_template)
            .collect::<Result<Vec<_>, _>>()?;
        let registry = TemplateRegistry::build(templates)?;

        let mut builder =
            SendCloudClient::builder(credentials, default_country, Arc::new(registry))
                .classify_using(self.classify_using);
        if let Some(endpoint) = self.endpoint {
            builder = builder.endpoint(endpoint);
        }
        if let Some(secs) = self.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(builder)
    }

    pub fn into_client(self) -> Result<SendCloudClient, SendCloudError> {
        self.into_builder()?.build()
    }
}
