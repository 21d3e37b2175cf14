//! Type alias documentation

use serde::{Deserialize, Serialize};

/// Payload of a `type-alias` document
///
/// ```typescript
/// type Callback<T> = (value: T) => void;
/// ```
/// documents `type_parameters = "<T>"` and
/// `type_definition = "(value: T) => void"`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeAliasDef {
    /// Bracketed type parameter list, empty when not generic
    #[serde(default)]
    pub type_parameters: String,

    /// Rendered aliased type
    #[serde(default)]
    pub type_definition: String,
}
