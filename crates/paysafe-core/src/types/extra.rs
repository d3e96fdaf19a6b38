//! The escape-hatch map merged into payload wire forms.
//!
//! Paysafe documents this mechanism as `additionalParameters`: an open
//! string-keyed map whose entries serialize as sibling top-level keys of the
//! declared attributes, so callers can send fields the typed model does not
//! know about yet.

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::types::{AnyJson, Record};

/// Open-ended extra fields carried alongside a payload's declared attributes.
///
/// Flattened into the carrier's wire form, so each entry appears as a
/// top-level key. On the inbound direction the same flattening captures
/// response fields the typed model has no attribute for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtraFields(Record<AnyJson>);

impl ExtraFields {
    pub fn new() -> Self {
        ExtraFields(Record::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, key: &str) -> Option<&AnyJson> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AnyJson>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &AnyJson)> {
        self.0.iter()
    }
}

impl<K: Into<String>, V: Into<AnyJson>> FromIterator<(K, V)> for ExtraFields {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        ExtraFields(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Payloads that carry an [`ExtraFields`] escape hatch.
///
/// [`with_extra_field`](ExtraFieldsExt::with_extra_field) refuses keys that
/// are already present on the serialized payload, whether as a declared
/// attribute or a previously added extra, so a collision can never silently
/// overwrite a typed value on the wire.
pub trait ExtraFieldsExt: Serialize + Sized {
    fn extra_fields(&self) -> &ExtraFields;

    fn extra_fields_mut(&mut self) -> &mut ExtraFields;

    fn with_extra_field(
        mut self,
        key: impl Into<String>,
        value: impl Into<AnyJson>,
    ) -> Result<Self> {
        let key = key.into();
        let wire = serde_json::to_value(&self)?;
        if wire.get(key.as_str()).is_some() {
            return Err(Error::DuplicateField { field: key });
        }
        self.extra_fields_mut().insert(key, value);
        Ok(self)
    }
}
