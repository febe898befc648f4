//! Store credential fields and the form that holds what the user typed.
//!
//! The form is a mapping from field label to text. Nothing is validated,
//! persisted or sent anywhere; values live exactly as long as the window.

use std::fmt;

/// One of the connection fields on the Credentials tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CredentialField {
    ShopifyStoreUrl,
    ShopifyAccessToken,
    WooCommerceStoreUrl,
    WooCommerceConsumerKey,
    WooCommerceConsumerSecret,
}

impl CredentialField {
    /// All fields in display order.
    pub const ALL: [CredentialField; 5] = [
        CredentialField::ShopifyStoreUrl,
        CredentialField::ShopifyAccessToken,
        CredentialField::WooCommerceStoreUrl,
        CredentialField::WooCommerceConsumerKey,
        CredentialField::WooCommerceConsumerSecret,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CredentialField::ShopifyStoreUrl => "Shopify Store URL",
            CredentialField::ShopifyAccessToken => "Shopify Access Token",
            CredentialField::WooCommerceStoreUrl => "WooCommerce Store URL",
            CredentialField::WooCommerceConsumerKey => "WooCommerce Consumer Key",
            CredentialField::WooCommerceConsumerSecret => "WooCommerce Consumer Secret",
        }
    }

    /// Looks a field up by its label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.label() == label)
    }

    /// Token and secret fields are masked when rendered.
    pub fn is_secret(self) -> bool {
        let label = self.label();
        label.contains("Token") || label.contains("Secret")
    }
}

impl fmt::Display for CredentialField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Text typed into each credential field, kept in display order.
#[derive(Clone, PartialEq, Eq)]
pub struct CredentialForm {
    values: [String; 5],
}

impl Default for CredentialForm {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialForm {
    /// Creates a form with every field present and empty.
    pub fn new() -> Self {
        Self {
            values: Default::default(),
        }
    }

    fn index(field: CredentialField) -> usize {
        field as usize
    }

    pub fn value(&self, field: CredentialField) -> &str {
        &self.values[Self::index(field)]
    }

    /// Reads back a value by field label, `None` for unknown labels.
    pub fn value_by_label(&self, label: &str) -> Option<&str> {
        CredentialField::from_label(label).map(|f| self.value(f))
    }

    /// Mutable buffer backing the text input for `field`.
    pub fn value_mut(&mut self, field: CredentialField) -> &mut String {
        &mut self.values[Self::index(field)]
    }

    pub fn set(&mut self, field: CredentialField, text: impl Into<String>) {
        *self.value_mut(field) = text.into();
    }

    /// Field/value pairs in display order.
    pub fn entries(&self) -> impl Iterator<Item = (CredentialField, &str)> + '_ {
        CredentialField::ALL
            .into_iter()
            .map(move |f| (f, self.value(f)))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when no field has any text.
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(String::is_empty)
    }

    pub fn clear(&mut self) {
        self.values.iter_mut().for_each(String::clear);
    }
}

impl fmt::Debug for CredentialForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (field, value) in self.entries() {
            if field.is_secret() && !value.is_empty() {
                map.entry(&field.label(), &"<redacted>");
            } else {
                map.entry(&field.label(), &value);
            }
        }
        map.finish()
    }
}
