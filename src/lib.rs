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

#![deny(
    anonymous_parameters,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces
)]
#![warn(bare_trait_objects, unreachable_pub, unused_qualifications)]

//! bindflags lets a program declare its command-line options (boolean flags,
//! and keys which take single or repeated values), convert raw command-line
//! tokens into strongly typed values, validate those values, and render
//! consistent usage text.
//!
//! Scanning argv and deciding which option a token belongs to is left to the
//! caller; this crate only provides the options themselves.

// The derive macro refers to this crate by name, so make that name resolve
// inside the crate too.
#[allow(unused_extern_crates)]
extern crate self as bindflags;

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

/// completion defines the shell completion hints options carry.
pub mod completion;
/// convert defines how raw command-line tokens are converted into typed
/// values.
pub mod convert;
/// error defines error types specific to bindflags.
pub mod error;
/// option defines the kinds of options a program can declare, and the trait
/// which lets a parser treat them uniformly.
pub mod option;
/// usage provides utilities for rendering options' usage text.
pub mod usage;
/// validation defines checks which converted values must pass before they are
/// stored.
pub mod validation;

/// testing provides utilities which are useful for unit testing code which
/// uses this crate.
#[cfg(feature = "testing")]
pub mod testing;

// Tests exercise every optional feature. Don't bother running tests unless
// all features are enabled.
#[cfg(all(
    feature = "derive",
    feature = "regex",
    feature = "serde",
    feature = "testing"
))]

// Re-export most commonly used symbols, to allow using this library with just
// one "use".

#[cfg(feature = "derive")]
pub use bindflags_codegen::ConvertibleFromString;

pub use self::completion::Completion;
pub use self::convert::{ConvertibleFromString, RawRepresentable};
pub use self::error::{Error, Result, UpdateError, UpdateResult};
pub use self::option::{Binding, CounterFlag, Flag, Key, Option, ValueOption, VariadicKey};
pub use self::validation::Validation;
