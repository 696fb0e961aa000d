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

/// Boolean and counting switches.
pub mod flag;
/// Options which take a single value.
pub mod key;
/// Options which collect a value per occurrence.
pub mod variadic_key;

pub use self::flag::{CounterFlag, Flag};
pub use self::key::Key;
pub use self::variadic_key::VariadicKey;

use crate::completion::Completion;
use crate::error::*;
use crate::usage;
use std::collections::HashSet;
use std::fmt;
use std::option::Option as Optional;

/// The placeholder appended to the identifier of options which take a value.
pub const VALUE_PLACEHOLDER: &str = "<value>";

/// A Declaration is the identity every option has regardless of its kind:
/// the names it can be spelled with on the command line, and its help text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Declaration {
    /// Every spelling of this option (e.g. "-m" and "--message"), in the
    /// order they should be displayed.
    names: Vec<String>,
    /// A one-line (or occasionally multi-line) summary for usage text.
    short_description: String,
}

impl Declaration {
    /// Constructs a new Declaration. There must be at least one name, and the
    /// names must be non-empty and distinct.
    pub fn new(names: &[&str], short_description: &str) -> Result<Declaration> {
        if names.is_empty() {
            return Err(Error::InvalidArgument(
                "Options must be declared with at least one name".to_owned(),
            ));
        }

        let mut seen: HashSet<&str> = HashSet::new();
        for &name in names {
            if name.is_empty() {
                return Err(Error::InvalidArgument(
                    "Option names must not be empty".to_owned(),
                ));
            }
            if !seen.insert(name) {
                return Err(Error::InvalidArgument(format!(
                    "Option name '{}' was declared more than once",
                    name
                )));
            }
        }

        Ok(Declaration {
            names: names.iter().map(|&n| n.to_owned()).collect(),
            short_description: short_description.to_owned(),
        })
    }

    /// Returns the names this option can be spelled with.
    pub fn names(&self) -> &[String] {
        self.names.as_slice()
    }

    /// Returns this option's help text.
    pub fn short_description(&self) -> &str {
        self.short_description.as_str()
    }

    /// Returns the names joined together for display, with a value
    /// placeholder if the option takes a value.
    pub fn identifier(&self, takes_value: bool) -> String {
        let names = self.names.join(", ");
        match takes_value {
            false => names,
            true => format!("{} {}", names, VALUE_PLACEHOLDER),
        }
    }
}

/// Binding is how a parser reaches the kind-specific mutation entry point of
/// an option it only knows as a `dyn Option`.
pub enum Binding<'a> {
    /// A boolean switch; the parser should toggle it.
    Flag(&'a mut Flag),
    /// A counting switch; the parser should increment it.
    Counter(&'a mut CounterFlag),
    /// An option which takes a value; the parser should feed it the raw token.
    Value(&'a mut dyn ValueOption),
}

/// Option is the contract shared by every kind of command-line option. A
/// parser can hold a heterogeneous collection of `&mut dyn Option` and
/// match, mutate, and describe them without knowing their concrete types.
pub trait Option {
    /// The name of this kind of option (e.g. "Flag"), for diagnostics.
    fn kind(&self) -> &'static str;

    /// The identity (names and help text) of this option.
    fn declaration(&self) -> &Declaration;

    /// Whether this option consumes a value token when it appears.
    fn takes_value(&self) -> bool;

    /// Whether this option accumulates a value for every occurrence.
    fn is_variadic(&self) -> bool {
        false
    }

    /// The shell completion hint for this option's value.
    fn completion(&self) -> &Completion;

    /// Returns the mutation entry point for this option.
    fn binding(&mut self) -> Binding<'_>;

    /// Every spelling of this option (e.g. "-m" and "--message").
    fn names(&self) -> &[String] {
        self.declaration().names()
    }

    /// This option's help text.
    fn short_description(&self) -> &str {
        self.declaration().short_description()
    }

    /// The names joined by ", ", followed by " <value>" if the option takes a
    /// value. This is what usage text displays in its first column.
    fn identifier(&self) -> String {
        self.declaration().identifier(self.takes_value())
    }

    /// Render this option's usage text, with the identifier padded out to the
    /// given column. See `usage::usage` for the details.
    fn usage(&self, padding: usize) -> String {
        usage::usage(&self.identifier(), self.short_description(), padding)
    }

    /// A description of this option for debugging, like
    /// "Key(-m, --message <value>)". This is not meant for usage text.
    fn description(&self) -> String {
        format!("{}({})", self.kind(), self.identifier())
    }
}

/// ValueOption is implemented by options which store values converted from
/// raw command-line tokens.
pub trait ValueOption: Option {
    /// Convert and validate the given raw token, and store it if that
    /// succeeds. On failure, the previously stored value is untouched.
    fn update_value(&mut self, raw: &str) -> UpdateResult<()>;

    /// A human-readable name for the type of value this option holds.
    fn value_type(&self) -> &'static str;

    /// The message a parser should display when `update_value` returns the
    /// given error for this option.
    fn failure_message(&self, error: &UpdateError) -> String {
        match error {
            UpdateError::Conversion => format!(
                "Invalid value passed to '{}'; expected {}",
                self.identifier(),
                self.value_type()
            ),
            UpdateError::Validation(message) => format!(
                "Invalid value passed to '{}': {}",
                self.identifier(),
                message
            ),
        }
    }
}

impl<'a> fmt::Debug for dyn Option + 'a {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.description().as_str())
    }
}

/// Returns the length (in characters) of the longest identifier among the
/// given options, or None if there are no options.
pub(crate) fn longest_identifier<'a, I>(options: I) -> Optional<usize>
where
    I: IntoIterator<Item = &'a dyn Option>,
{
    options
        .into_iter()
        .map(|o| o.identifier().chars().count())
        .max()
}
