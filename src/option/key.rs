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

use crate::completion::Completion;
use crate::convert::ConvertibleFromString;
use crate::error::*;
use crate::option::{Binding, Declaration, Option, ValueOption};
use crate::validation::{convert_and_validate, Validation};
use std::fmt;
use std::option::Option as Optional;

/// A Key is an option which takes exactly one value each time it appears. If
/// it appears more than once, the last valid value wins.
///
/// Keys have no value until one is successfully stored; whether that is an
/// error is up to the caller (a Key which never appeared is perfectly valid
/// as far as this type is concerned).
pub struct Key<T> {
    declaration: Declaration,
    completion: Completion,
    validations: Vec<Validation<T>>,
    value: Optional<T>,
}

impl<T: ConvertibleFromString> Key<T> {
    /// Constructs a new Key with no value, no validations, and filename
    /// completion.
    pub fn new(names: &[&str], short_description: &str) -> Result<Key<T>> {
        Ok(Key {
            declaration: Declaration::new(names, short_description)?,
            completion: Completion::Filename,
            validations: Vec::new(),
            value: None,
        })
    }

    /// Replace this Key's completion hint.
    pub fn with_completion(mut self, completion: Completion) -> Key<T> {
        self.completion = completion;
        self
    }

    /// Add a validation, to be checked after any previously added ones.
    pub fn with_validation(mut self, validation: Validation<T>) -> Key<T> {
        self.validations.push(validation);
        self
    }

    /// Add several validations, to be checked in the given order after any
    /// previously added ones.
    pub fn with_validations<I: IntoIterator<Item = Validation<T>>>(
        mut self,
        validations: I,
    ) -> Key<T> {
        self.validations.extend(validations);
        self
    }

    /// Returns the validations this Key applies, in order.
    pub fn validations(&self) -> &[Validation<T>] {
        self.validations.as_slice()
    }

    /// Returns the most recently stored value, if any.
    pub fn value(&self) -> Optional<&T> {
        self.value.as_ref()
    }

    /// Consume this Key, returning its value (if any).
    pub fn into_value(self) -> Optional<T> {
        self.value
    }
}

impl<T: ConvertibleFromString> Option for Key<T> {
    fn kind(&self) -> &'static str {
        "Key"
    }

    fn declaration(&self) -> &Declaration {
        &self.declaration
    }

    fn takes_value(&self) -> bool {
        true
    }

    fn completion(&self) -> &Completion {
        &self.completion
    }

    fn binding(&mut self) -> Binding<'_> {
        Binding::Value(self)
    }
}

impl<T: ConvertibleFromString> ValueOption for Key<T> {
    fn update_value(&mut self, raw: &str) -> UpdateResult<()> {
        let value = convert_and_validate(raw, &self.validations)?;
        self.value = Some(value);
        debug!("Stored new value for {}", self.identifier());
        Ok(())
    }

    fn value_type(&self) -> &'static str {
        T::type_description()
    }
}

impl<T: ConvertibleFromString> fmt::Debug for Key<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.description().as_str())
    }
}
