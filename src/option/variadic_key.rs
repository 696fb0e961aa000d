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

/// A VariadicKey is an option which may appear any number of times,
/// collecting one value per occurrence in the order they were given.
pub struct VariadicKey<T> {
    declaration: Declaration,
    completion: Completion,
    validations: Vec<Validation<T>>,
    values: Vec<T>,
}

impl<T: ConvertibleFromString> VariadicKey<T> {
    /// Constructs a new VariadicKey with no values, no validations, and
    /// filename completion.
    pub fn new(names: &[&str], short_description: &str) -> Result<VariadicKey<T>> {
        Ok(VariadicKey {
            declaration: Declaration::new(names, short_description)?,
            completion: Completion::Filename,
            validations: Vec::new(),
            values: Vec::new(),
        })
    }

    /// Replace this VariadicKey's completion hint.
    pub fn with_completion(mut self, completion: Completion) -> VariadicKey<T> {
        self.completion = completion;
        self
    }

    /// Add a validation, which every individual value must pass.
    pub fn with_validation(mut self, validation: Validation<T>) -> VariadicKey<T> {
        self.validations.push(validation);
        self
    }

    /// Add several validations, to be checked in the given order after any
    /// previously added ones.
    pub fn with_validations<I: IntoIterator<Item = Validation<T>>>(
        mut self,
        validations: I,
    ) -> VariadicKey<T> {
        self.validations.extend(validations);
        self
    }

    /// Returns the validations this VariadicKey applies, in order.
    pub fn validations(&self) -> &[Validation<T>] {
        self.validations.as_slice()
    }

    /// Returns every value stored so far, in the order they were given.
    pub fn values(&self) -> &[T] {
        self.values.as_slice()
    }

    /// Consume this VariadicKey, returning its values.
    pub fn into_values(self) -> Vec<T> {
        self.values
    }
}

impl<T: ConvertibleFromString> Option for VariadicKey<T> {
    fn kind(&self) -> &'static str {
        "VariadicKey"
    }

    fn declaration(&self) -> &Declaration {
        &self.declaration
    }

    fn takes_value(&self) -> bool {
        true
    }

    fn is_variadic(&self) -> bool {
        true
    }

    fn completion(&self) -> &Completion {
        &self.completion
    }

    fn binding(&mut self) -> Binding<'_> {
        Binding::Value(self)
    }
}

impl<T: ConvertibleFromString> ValueOption for VariadicKey<T> {
    fn update_value(&mut self, raw: &str) -> UpdateResult<()> {
        let value = convert_and_validate(raw, &self.validations)?;
        self.values.push(value);
        debug!(
            "Appended value #{} for {}",
            self.values.len(),
            self.identifier()
        );
        Ok(())
    }

    fn value_type(&self) -> &'static str {
        T::type_description()
    }
}

impl<T: ConvertibleFromString> fmt::Debug for VariadicKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.description().as_str())
    }
}
