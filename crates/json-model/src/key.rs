//! Closed key-sets addressing the fields of one model type.

use std::fmt::Debug;
use std::hash::Hash;

/// The closed set of field names a model reads and writes.
///
/// Accessors only accept members of a model's key type, so a misspelt key is
/// a compile error rather than a silently missing field. Implement it with
/// [`model_keys!`](crate::model_keys).
pub trait ModelKey: Copy + Eq + Hash + Debug + 'static {
    /// Every member, in declaration order.
    const ALL: &'static [Self];

    /// Object field name for this key.
    fn token(self) -> &'static str;

    fn from_token(token: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|key| key.token() == token)
    }
}

/// Declares a key enum and its [`ModelKey`] implementation.
///
/// ```
/// json_model::model_keys! {
///     pub enum CountryKey {
///         Name => "name",
///         Continent => "continent",
///     }
/// }
///
/// use json_model::ModelKey;
/// assert_eq!(CountryKey::Continent.token(), "continent");
/// assert_eq!(CountryKey::from_token("name"), Some(CountryKey::Name));
/// ```
#[macro_export]
macro_rules! model_keys {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $token:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $crate::ModelKey for $name {
            const ALL: &'static [Self] = &[ $( Self::$variant ),+ ];

            fn token(self) -> &'static str {
                match self {
                    $( Self::$variant => $token ),+
                }
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str($crate::ModelKey::token(*self))
            }
        }
    };
}
