//! Dublin Core and DCMI vocabularies.
//!
//! - [`Elements`]: the fifteen elements of `http://purl.org/dc/elements/1.1/`
//! - [`Terms`]: the DCMI Metadata Terms refinements
//! - [`DcmiType`]: the DCMI Type Vocabulary
//! - [`EncodingScheme`]: syntax and vocabulary encoding schemes used as `xsi:type`

mod dcmitype;
mod elements;
mod schemes;
mod terms;

pub use dcmitype::DcmiType;
pub use elements::{Elements, SimpleLiteral};
pub use schemes::EncodingScheme;
pub use terms::Terms;

/// Declare a struct whose fields are all lists of [`SimpleLiteral`], each
/// keyed by its qualified element name.
///
/// The local name is accepted as well: a container that itself sits in the
/// vocabulary's namespace keys its children without a prefix.
macro_rules! literal_set {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $($(#[$field_meta:meta])* $field:ident => $key:literal as $local:literal,)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        pub struct $name {
            $(
                $(#[$field_meta])*
                #[serde(rename = $key, alias = $local, default, skip_serializing_if = "Vec::is_empty")]
                pub $field: Vec<$crate::dc::SimpleLiteral>,
            )*
        }

        impl $name {
            /// Qualified keys of every field, in declaration order.
            pub const KEYS: &'static [&'static str] = &[$($key),*];

            /// No field holds a value.
            pub fn is_empty(&self) -> bool {
                true $(&& self.$field.is_empty())*
            }

            /// Number of literals across all fields.
            pub fn len(&self) -> usize {
                0 $(+ self.$field.len())*
            }

            /// Literals of the field with this key.
            pub fn get(&self, key: &str) -> Option<&[$crate::dc::SimpleLiteral]> {
                match key {
                    $($key => Some(&self.$field),)*
                    _ => None,
                }
            }

            /// Mutable list of the field with this key.
            pub fn get_mut(&mut self, key: &str) -> Option<&mut Vec<$crate::dc::SimpleLiteral>> {
                match key {
                    $($key => Some(&mut self.$field),)*
                    _ => None,
                }
            }
        }
    };
}

pub(crate) use literal_set;
