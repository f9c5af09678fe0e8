use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Outbound request fields, unique by key and always iterated in key order.
pub struct ParameterSet(BTreeMap<String, String>);

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a field.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Pairs in lexicographic key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Attach a signature computed over this set.
    pub fn into_signed(self, signature: String) -> SignedRequest {
        SignedRequest {
            params: self,
            signature,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A parameter set plus the signature computed over it.
pub struct SignedRequest {
    params: ParameterSet,
    signature: String,
}

impl SignedRequest {
    /// Form field name carrying the signature.
    pub const SIGNATURE_FIELD: &'static str = "signature";

    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Sorted form pairs with `signature` appended last.
    pub fn into_form(self) -> Vec<(String, String)> {
        let mut form = self.params.0.into_iter().collect::<Vec<_>>();
        form.push((Self::SIGNATURE_FIELD.to_owned(), self.signature));
        form
    }
}
