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

use crate::convert::ConvertibleFromString;
use crate::error::*;
use std::fmt;
use std::ops::{Range, RangeInclusive};

fn join_values<T: fmt::Display>(values: &[T]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<String>>()
        .join(", ")
}

/// A Validation is a predicate which a converted option value must satisfy
/// before it is stored, along with the message to report when it doesn't.
///
/// Validations know nothing about each other or about the option they are
/// attached to. An option applies its validations in the order they were
/// declared, and reports only the first one which fails.
pub struct Validation<T> {
    predicate: Box<dyn Fn(&T) -> bool>,
    message: String,
}

impl<T> Validation<T> {
    /// Constructs a Validation from an arbitrary predicate. The message is
    /// reported verbatim whenever the predicate returns false.
    pub fn custom<F: Fn(&T) -> bool + 'static>(predicate: F, message: &str) -> Self {
        Validation {
            predicate: Box::new(predicate),
            message: message.to_owned(),
        }
    }

    /// Returns the message this Validation reports on failure.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Check the given value against this Validation.
    pub fn validate(&self, value: &T) -> UpdateResult<()> {
        match (self.predicate)(value) {
            true => Ok(()),
            false => Err(UpdateError::Validation(self.message.clone())),
        }
    }
}

impl<T: PartialOrd + fmt::Display + 'static> Validation<T> {
    /// The value must be strictly greater than the given bound.
    pub fn greater_than(bound: T) -> Self {
        let message = format!("Must be greater than {}", bound);
        Validation::custom(move |v| *v > bound, &message)
    }

    /// The value must be strictly less than the given bound.
    pub fn less_than(bound: T) -> Self {
        let message = format!("Must be less than {}", bound);
        Validation::custom(move |v| *v < bound, &message)
    }

    /// The value must fall within the given inclusive range.
    pub fn within(range: RangeInclusive<T>) -> Self {
        let message = format!(
            "Must be greater than or equal to {} and less than or equal to {}",
            range.start(),
            range.end()
        );
        Validation::custom(move |v| range.contains(v), &message)
    }

    /// The value must fall within the given half-open range.
    pub fn within_range(range: Range<T>) -> Self {
        let message = format!(
            "Must be greater than or equal to {} and less than {}",
            range.start, range.end
        );
        Validation::custom(move |v| range.contains(v), &message)
    }
}

impl<T: PartialEq + fmt::Display + 'static> Validation<T> {
    /// The value must be equal to one of the given values.
    pub fn allowing(values: Vec<T>) -> Self {
        let message = format!("Must be one of: {}", join_values(&values));
        Validation::custom(move |v| values.contains(v), &message)
    }

    /// The value must not be equal to any of the given values.
    pub fn rejecting(values: Vec<T>) -> Self {
        let message = format!("Must not be: {}", join_values(&values));
        Validation::custom(move |v| !values.contains(v), &message)
    }
}

impl Validation<String> {
    /// The value must contain the given substring.
    pub fn contains(needle: &str) -> Self {
        let needle = needle.to_owned();
        let message = format!("Must contain '{}'", needle);
        Validation::custom(move |v: &String| v.contains(needle.as_str()), &message)
    }

    /// The value must match the given regular expression somewhere. Anchor the
    /// pattern with ^ and $ to require a full match.
    #[cfg(feature = "regex")]
    pub fn matching(pattern: &str) -> Result<Self> {
        let re = regex::Regex::new(pattern)?;
        let message = format!("Must match the pattern '{}'", pattern);
        Ok(Validation::custom(
            move |v: &String| re.is_match(v.as_str()),
            &message,
        ))
    }
}

impl<T> fmt::Debug for Validation<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Validation")
            .field("message", &self.message)
            .finish()
    }
}

/// Convert the raw token and then run every validation against it, in order.
/// This never touches any option's stored state; the caller commits the
/// returned value only if this succeeds.
pub(crate) fn convert_and_validate<T: ConvertibleFromString>(
    raw: &str,
    validations: &[Validation<T>],
) -> UpdateResult<T> {
    let value = T::convert(raw).ok_or(UpdateError::Conversion)?;
    for validation in validations {
        validation.validate(&value)?;
    }
    Ok(value)
}
