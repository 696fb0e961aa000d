// Copyright 2015 Axel Rasmussen
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::collections::HashMap;
use std::path::PathBuf;

/// ConvertibleFromString is implemented by every type which a value-bearing
/// option can hold. Conversion is total: unparseable input yields `None`,
/// never an error or a panic.
pub trait ConvertibleFromString: Sized {
    /// Convert the given raw command-line token into a value of this type, or
    /// return None if the token isn't a valid representation of one.
    fn convert(raw: &str) -> Option<Self>;

    /// A short human-readable name for this type, used when describing a
    /// conversion failure (e.g. "expected integer").
    fn type_description() -> &'static str {
        "value"
    }
}

impl ConvertibleFromString for String {
    fn convert(raw: &str) -> Option<Self> {
        Some(raw.to_owned())
    }

    fn type_description() -> &'static str {
        "string"
    }
}

impl ConvertibleFromString for PathBuf {
    fn convert(raw: &str) -> Option<Self> {
        Some(PathBuf::from(raw))
    }

    fn type_description() -> &'static str {
        "path"
    }
}

impl ConvertibleFromString for char {
    fn convert(raw: &str) -> Option<Self> {
        let mut chars = raw.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }

    fn type_description() -> &'static str {
        "character"
    }
}

/// Return the boolean interpretation of a string, or None if the string isn't
/// one of the recognized affirmative or negative words.
fn parse_bool(raw: &str) -> Option<bool> {
    lazy_static! {
        static ref STRING_MAPPING: HashMap<&'static str, bool> = {
            let mut m = HashMap::new();
            for &s in ["y", "yes", "t", "true"].iter() {
                m.insert(s, true);
            }
            for &s in ["n", "no", "f", "false"].iter() {
                m.insert(s, false);
            }
            m
        };
    }

    STRING_MAPPING.get(raw.to_lowercase().as_str()).copied()
}

impl ConvertibleFromString for bool {
    fn convert(raw: &str) -> Option<Self> {
        parse_bool(raw)
    }

    fn type_description() -> &'static str {
        "boolean"
    }
}

macro_rules! convertible_via_from_str {
    ($description:expr; $($t:ty),*) => {
        $(
            impl ConvertibleFromString for $t {
                fn convert(raw: &str) -> Option<Self> {
                    raw.parse::<$t>().ok()
                }

                fn type_description() -> &'static str {
                    $description
                }
            }
        )*
    };
}

convertible_via_from_str!("integer"; i8, i16, i32, i64, i128, isize);
convertible_via_from_str!("integer"; u8, u16, u32, u64, u128, usize);
convertible_via_from_str!("number"; f32, f64);

/// RawRepresentable describes enumeration-like types whose cases each
/// correspond to a value of some simpler "raw" type. Such types convert from
/// strings by converting to the raw type first (see `convert_raw_value`).
pub trait RawRepresentable: Sized {
    /// The underlying type each case maps to.
    type RawValue: ConvertibleFromString;

    /// Returns the case matching the given raw value, if there is one.
    fn from_raw_value(raw: Self::RawValue) -> Option<Self>;

    /// Returns this case's raw value.
    fn raw_value(&self) -> Self::RawValue;
}

/// Convert a raw command-line token into a RawRepresentable type, by
/// delegating to the raw value type's conversion and then looking up the
/// matching case. Returns None if either step fails.
pub fn convert_raw_value<T: RawRepresentable>(raw: &str) -> Option<T> {
    T::RawValue::convert(raw).and_then(T::from_raw_value)
}

/// Implement ConvertibleFromString for a type which already implements
/// RawRepresentable by hand, e.g. an enum backed by integers:
///
/// ```
/// use bindflags::convert::{ConvertibleFromString, RawRepresentable};
///
/// #[derive(Debug, PartialEq)]
/// enum Priority {
///     Low,
///     High,
/// }
///
/// impl RawRepresentable for Priority {
///     type RawValue = u8;
///
///     fn from_raw_value(raw: u8) -> Option<Self> {
///         match raw {
///             1 => Some(Priority::Low),
///             2 => Some(Priority::High),
///             _ => None,
///         }
///     }
///
///     fn raw_value(&self) -> u8 {
///         match self {
///             Priority::Low => 1,
///             Priority::High => 2,
///         }
///     }
/// }
///
/// bindflags::convertible_from_raw_value!(Priority);
///
/// assert_eq!(Some(Priority::High), Priority::convert("2"));
/// assert_eq!(None, Priority::convert("3"));
/// ```
#[macro_export]
macro_rules! convertible_from_raw_value {
    ($t:ty) => {
        impl $crate::convert::ConvertibleFromString for $t {
            fn convert(raw: &str) -> ::std::option::Option<Self> {
                $crate::convert::convert_raw_value::<Self>(raw)
            }

            fn type_description() -> &'static str {
                <<$t as $crate::convert::RawRepresentable>::RawValue as $crate::convert::ConvertibleFromString>::type_description()
            }
        }
    };
}
