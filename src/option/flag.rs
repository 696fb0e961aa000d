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

use crate::completion::{Completion, NO_COMPLETION};
use crate::error::*;
use crate::option::{Binding, Declaration, Option};
use std::fmt;

/// A Flag is an option whose value is either true or false, and which never
/// takes a value on the command line. Every time the flag appears, its value
/// is flipped.
pub struct Flag {
    declaration: Declaration,
    value: bool,
}

impl Flag {
    /// Constructs a new Flag, which is off until it is toggled.
    pub fn new(names: &[&str], short_description: &str) -> Result<Flag> {
        Ok(Flag {
            declaration: Declaration::new(names, short_description)?,
            value: false,
        })
    }

    /// Change the value this Flag has before it is toggled.
    pub fn with_default(mut self, default_value: bool) -> Flag {
        self.value = default_value;
        self
    }

    /// Flip this flag's value.
    pub fn toggle(&mut self) {
        self.value = !self.value;
        debug!("Toggled {} to {}", self.identifier(), self.value);
    }

    /// Returns this flag's current value.
    pub fn value(&self) -> bool {
        self.value
    }
}

impl Option for Flag {
    fn kind(&self) -> &'static str {
        "Flag"
    }

    fn declaration(&self) -> &Declaration {
        &self.declaration
    }

    fn takes_value(&self) -> bool {
        false
    }

    fn completion(&self) -> &Completion {
        &NO_COMPLETION
    }

    fn binding(&mut self) -> Binding<'_> {
        Binding::Flag(self)
    }
}

impl fmt::Debug for Flag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.description().as_str())
    }
}

/// A CounterFlag is like a Flag, except instead of flipping a boolean it
/// counts how many times it appeared (e.g. "-v -v -v" for extra verbosity).
pub struct CounterFlag {
    declaration: Declaration,
    value: usize,
}

impl CounterFlag {
    /// Constructs a new CounterFlag with a count of zero.
    pub fn new(names: &[&str], short_description: &str) -> Result<CounterFlag> {
        Ok(CounterFlag {
            declaration: Declaration::new(names, short_description)?,
            value: 0,
        })
    }

    /// Record one more occurrence of this flag.
    pub fn increment(&mut self) {
        self.value = self.value.saturating_add(1);
        debug!("Incremented {} to {}", self.identifier(), self.value);
    }

    /// Returns the number of times this flag has occurred.
    pub fn value(&self) -> usize {
        self.value
    }
}

impl Option for CounterFlag {
    fn kind(&self) -> &'static str {
        "CounterFlag"
    }

    fn declaration(&self) -> &Declaration {
        &self.declaration
    }

    fn takes_value(&self) -> bool {
        false
    }

    fn completion(&self) -> &Completion {
        &NO_COMPLETION
    }

    fn binding(&mut self) -> Binding<'_> {
        Binding::Counter(self)
    }
}

impl fmt::Debug for CounterFlag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.description().as_str())
    }
}
