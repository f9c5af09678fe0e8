use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;
use url::Url;

use crate::domain::phone::Country;
use crate::domain::validation::ValidationError;
use crate::domain::value::TemplateId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateKind {
    Generic,
    VerificationCode,
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic => f.write_str("generic"),
            Self::VerificationCode => f.write_str("verification_code"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A message template registered with the gateway.
pub struct Template {
    id: TemplateId,
    kind: TemplateKind,
    country: Country,
    endpoint: Option<Url>,
}

impl Template {
    pub fn new(id: TemplateId, kind: TemplateKind, country: Country) -> Self {
        Self {
            id,
            kind,
            country,
            endpoint: None,
        }
    }

    /// Send requests using this template to `endpoint` instead of the client default.
    pub fn with_endpoint(mut self, endpoint: &str) -> Result<Self, ValidationError> {
        let url = Url::parse(endpoint.trim()).map_err(|_| ValidationError::InvalidEndpoint {
            input: endpoint.to_owned(),
        })?;
        self.endpoint = Some(url);
        Ok(self)
    }

    pub fn id(&self) -> &TemplateId {
        &self.id
    }

    pub fn kind(&self) -> TemplateKind {
        self.kind
    }

    /// Home country of the template.
    pub fn country(&self) -> Country {
        self.country
    }

    pub fn endpoint(&self) -> Option<&Url> {
        self.endpoint.as_ref()
    }
}

#[derive(Debug, Clone, Default)]
/// Read-only template index, keyed by `(kind, id)` and by `(kind, country)`.
///
/// Built once and shared; there is no way to mutate it after [`TemplateRegistry::build`].
pub struct TemplateRegistry {
    by_id: HashMap<(TemplateKind, TemplateId), Template>,
    by_country: HashMap<(TemplateKind, Country), TemplateId>,
}

impl TemplateRegistry {
    /// Index `templates`.
    ///
    /// The same `(kind, id)` twice is rejected. When several templates of one kind share a
    /// home country, the first one is used for country lookups.
    pub fn build(templates: impl IntoIterator<Item = Template>) -> Result<Self, ValidationError> {
        let mut registry = Self::default();
        for template in templates {
            let id_key = (template.kind, template.id.clone());
            if registry.by_id.contains_key(&id_key) {
                return Err(ValidationError::DuplicateTemplate {
                    id: template.id.as_str().to_owned(),
                });
            }
            registry
                .by_country
                .entry((template.kind, template.country))
                .or_insert_with(|| template.id.clone());
            registry.by_id.insert(id_key, template);
        }
        Ok(registry)
    }

    /// Resolve a template.
    ///
    /// An explicit `id` wins. Otherwise the template registered for `country` is used; with
    /// neither there is nothing to resolve.
    pub fn get(
        &self,
        kind: TemplateKind,
        id: Option<&TemplateId>,
        country: Option<Country>,
    ) -> Option<&Template> {
        match (id, country) {
            (Some(id), _) => self.get_by_id(kind, id),
            (None, Some(country)) => self.get_by_country(kind, country),
            (None, None) => None,
        }
    }

    pub fn get_by_id(&self, kind: TemplateKind, id: &TemplateId) -> Option<&Template> {
        self.by_id.get(&(kind, id.clone()))
    }

    pub fn get_by_country(&self, kind: TemplateKind, country: Country) -> Option<&Template> {
        let id = self.by_country.get(&(kind, country))?;
        self.get_by_id(kind, id)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
