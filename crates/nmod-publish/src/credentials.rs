use std::collections::BTreeMap;

use nmod_core::properties::PropertyBag;

/// The resolved values of a rule's required credential properties.
///
/// A set only ever exists in its COMPLETE form: [`CredentialSet::gather`]
/// returns `None` unless every required name is present with a non-empty
/// value, so partial credentials behave identically to total absence and
/// no partial-credential publish attempt can be constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialSet {
    required: Vec<String>,
    values: BTreeMap<String, String>,
}

impl CredentialSet {
    /// Resolve `required` names against the property bag.
    ///
    /// Presence is checked by membership with a non-empty value; there is
    /// no format or strength validation.
    pub fn gather(required: &[String], properties: &PropertyBag) -> Option<Self> {
        let mut values = BTreeMap::new();
        for name in required {
            let value = properties.get_non_empty(name)?;
            values.insert(name.clone(), value.to_string());
        }
        Some(Self {
            required: required.to_vec(),
            values,
        })
    }

    /// The value of one of the required properties.
    ///
    /// Always present for names this set was gathered with.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// The required names, in rule order.
    pub fn required_names(&self) -> &[String] {
        &self.required
    }
}
