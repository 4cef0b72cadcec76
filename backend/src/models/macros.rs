/// Defines a newtype ID wrapper around an integer-like scalar (typically `i64`)
/// and generates:
/// - derives (Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)
/// - `Display`
/// - `From<$inner> for $name` and `From<$name> for $inner`
///
/// Usage:
///   define_id_type!(i64, WorkPlaceId);
#[macro_export]
macro_rules! define_id_type {
    ($inner:ty, $name:ident) => {
        #[derive(
            Debug,
            Copy,
            Clone,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub $inner);

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::write!(f, "{}", self.0)
            }
        }

        impl ::std::convert::From<$inner> for $name {
            fn from(v: $inner) -> Self {
                $name(v)
            }
        }

        impl ::std::convert::From<$name> for $inner {
            fn from(v: $name) -> Self {
                v.0
            }
        }

        impl $name {
            pub fn new(value: $inner) -> Self {
                $name(value)
            }

            pub fn value(&self) -> $inner {
                self.0
            }
        }
    };
}

/// Defines a key type that is either an integer or a string, matching how
/// widget consumers hand over identifiers (`1` and `"1"` are distinct keys).
///
/// Generates:
/// - an untagged `Int(i64)` / `Str(String)` enum with the usual derives
/// - `Display`
/// - `From<i64>`, `From<&str>` and `From<String>`
/// - `parse_lossy`, which reads integers as `Int` and anything else as `Str`
///
/// Usage:
///   define_key_type!(ColumnId);
#[macro_export]
macro_rules! define_key_type {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(untagged)]
        pub enum $name {
            Int(i64),
            Str(String),
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                match self {
                    $name::Int(v) => ::std::write!(f, "{}", v),
                    $name::Str(v) => ::std::write!(f, "{}", v),
                }
            }
        }

        impl ::std::convert::From<i64> for $name {
            fn from(v: i64) -> Self {
                $name::Int(v)
            }
        }

        impl ::std::convert::From<&str> for $name {
            fn from(v: &str) -> Self {
                $name::Str(v.to_string())
            }
        }

        impl ::std::convert::From<String> for $name {
            fn from(v: String) -> Self {
                $name::Str(v)
            }
        }

        impl $name {
            /// Interpret a raw path or query value: integers become `Int`,
            /// everything else is kept verbatim as `Str`.
            pub fn parse_lossy(raw: &str) -> Self {
                match raw.parse::<i64>() {
                    Ok(v) => $name::Int(v),
                    Err(_) => $name::Str(raw.to_string()),
                }
            }
        }
    };
}
