use std::hash::Hash;
use std::ops::Deref;
use std::sync::Arc;

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

/// An implementation of strings that may easily be shared without copies.
///
/// Static strings may be imported without copy, while dynamic strings
/// are converted into `Arc`, so that trees holding them may be handed
/// to other threads.
#[derive(Clone, Debug, Eq, Ord)]
pub enum SharedString {
    Dynamic(Arc<str>),
    Static(&'static str),
}
impl Deref for SharedString {
    type Target = str;
    fn deref(&self) -> &str {
        match *self {
            SharedString::Static(ref s) => *s,
            SharedString::Dynamic(ref arc) => arc.deref(),
        }
    }
}
impl PartialEq for SharedString {
    fn eq(&self, other: &SharedString) -> bool {
        self.deref() == other.deref()
    }
}
impl PartialEq<str> for SharedString {
    fn eq(&self, other: &str) -> bool {
        self.deref().eq(other)
    }
}
impl<'a> PartialEq<&'a str> for SharedString {
    fn eq(&self, other: &&'a str) -> bool {
        self.deref().eq(*other)
    }
}
impl PartialOrd for SharedString {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.deref().partial_cmp(other.deref())
    }
}
impl Hash for SharedString {
    fn hash<H: std::hash::Hasher>(&self, hasher: &mut H) {
        self.deref().hash(hasher)
    }
}
impl std::fmt::Display for SharedString {
    fn fmt(&self, formatter: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        std::fmt::Display::fmt(self.deref(), formatter)
    }
}
impl Default for SharedString {
    fn default() -> Self {
        SharedString::Static("<uninitialized SharedString>")
    }
}
/// Shared strings are serialized as strings. This loses any sharing :/
impl Serialize for SharedString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.deref().serialize(serializer)
    }
}
impl<'a> From<&'a str> for SharedString {
    fn from(value: &'a str) -> Self {
        SharedString::from_string(value.to_string())
    }
}
impl From<String> for SharedString {
    fn from(value: String) -> Self {
        SharedString::from_string(value)
    }
}
/// Shared strings are deserialized as Dynamic strings.
impl<'de> Deserialize<'de> for SharedString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let dynamic = String::deserialize(deserializer)?;
        Ok(SharedString::from_string(dynamic))
    }
}
impl SharedString {
    pub fn as_str(&self) -> &str {
        self.deref()
    }
    pub const fn from_str(value: &'static str) -> Self {
        SharedString::Static(value)
    }
    pub fn from_string(value: String) -> Self {
        SharedString::Dynamic(Arc::from(value))
    }
}

#[macro_export]
macro_rules! shared_string {
    (
        $(#[$outer:meta])*
        pub $name: ident
    ) => {
        // Documentation comments are actually syntactic sugar for #[doc="Some documentation comment"].
        // We capture them and insert them in the generated macro.
        $(#[$outer])*
        #[derive(Clone, Eq, PartialOrd, Ord, Debug, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub $crate::SharedString);
        impl $name {
            pub const fn from_str(value: &'static str) -> Self {
                $name($crate::SharedString::from_str(value))
            }
            pub fn from_string(value: String) -> Self {
                $name($crate::SharedString::from_string(value))
            }
            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }
            pub fn as_shared_string(&self) -> &$crate::SharedString {
                &self.0
            }
        }
        impl std::ops::Deref for $name {
            type Target = str;
            fn deref(&self) -> &str {
                self.as_str()
            }
        }
        impl<'a> From<&'a str> for $name {
            fn from(value: &'a str) -> Self {
                Self::from_string(value.to_string())
            }
        }
        impl PartialEq for $name {
            fn eq(&self, other: &$name) -> bool {
                self.0.eq(&other.0)
            }
        }
        impl<'a> PartialEq<&'a str> for $name {
            fn eq(&self, other: &&'a str) -> bool {
                self.0.eq(other)
            }
        }
        impl Default for $name {
            fn default() -> Self {
                Self::from_str("<uninitialized SharedString>")
            }
        }
        impl std::fmt::Display for $name {
            fn fmt(&self, formatter: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
                std::fmt::Display::fmt(self.as_str(), formatter)
            }
        }
    };
}

#[cfg(test)]
mod test {
    use super::SharedString;

    #[test]
    fn test_static_and_dynamic_compare_equal() {
        let a = SharedString::from_str("use strict");
        let b = SharedString::from_string("use strict".to_string());
        assert_eq!(a, b);
        assert_eq!(b, "use strict");
        assert_eq!(b.len(), 10);
    }

    #[test]
    fn test_serialized_as_plain_string() {
        let value = SharedString::from("foo");
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, "\"foo\"");
        let back: SharedString = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn test_shared_across_threads() {
        let value = SharedString::from("shared");
        let clone = value.clone();
        let handle = std::thread::spawn(move || clone.to_uppercase());
        assert_eq!(handle.join().unwrap(), "SHARED");
        assert_eq!(value, "shared");
    }
}
