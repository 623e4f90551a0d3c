// License: MIT
// Copyright © 2026 The cim-production Authors

//! This module contains the configuration options for the `Model`.

/// The namespace prefix of the production package.
pub const NS_PREFIX: &str = "cimProduction";

/// The namespace URI of the production package.
pub const NS_URI: &str = "http://iec.ch/TC57/CIM-generic#Production";

/// Configuration options for the `Model`.
#[derive(Clone, Debug)]
pub struct ModelConfig {
    /// The namespace prefix used for class and field tokens when serializing.
    pub ns_prefix: String,

    /// The namespace URI bound to `ns_prefix` in the document envelope.
    pub ns_uri: String,

    /// Whether entities inserted with an empty `uri` get a freshly generated
    /// UUID as their `uri`.  When this is `false`, inserting such an entity
    /// fails.
    pub generate_missing_uris: bool,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            ns_prefix: NS_PREFIX.to_string(),
            ns_uri: NS_URI.to_string(),
            generate_missing_uris: true,
        }
    }
}
