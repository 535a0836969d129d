//! Declarative macros shared by the model types.

/// Declares a string-backed enumeration.
///
/// Each variant carries exactly one canonical wire string. The generated type
/// gets `as_str`, `VALUES`, `FromStr` (failing with
/// [`SdkError::UnknownEnumValue`](crate::error::SdkError::UnknownEnumValue)),
/// `Display`, `AsRef<str>`, `From<E> for String` and serde impls that use the
/// canonical string.
///
/// ```ignore
/// string_enum! {
///     /// Processing state of an uploaded bundle
///     pub enum BundleState {
///         Ready => "Ready",
///         Failed => "Failed",
///     }
/// }
/// ```
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $wire:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Every known value, in declaration order
            pub const VALUES: &'static [$name] = &[$($name::$variant),+];

            /// Canonical wire string for this value
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::SdkError;

            fn from_str(value: &str) -> ::std::result::Result<Self, Self::Err> {
                match value {
                    $($wire => Ok($name::$variant),)+
                    _ => Err($crate::error::SdkError::unknown_enum_value(
                        stringify!($name),
                        value,
                    )),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::convert::AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl ::std::convert::From<$name> for ::std::string::String {
            fn from(value: $name) -> Self {
                value.as_str().to_string()
            }
        }
    };
}
