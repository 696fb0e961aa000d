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

use thiserror::Error;

/// Error represents the errors which can come up while declaring options or
/// rendering their usage text.
#[derive(Debug, Error)]
pub enum Error {
    /// Errors akin to EINVAL - essentially, an argument passed into a function
    /// was invalid in some way (e.g. an option declared without any names).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// An I/O error, generally encountered when writing usage text.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// An error encountered in parsing a regular expression.
    #[cfg(feature = "regex")]
    #[error("{0}")]
    Regex(#[from] regex::Error),
}

/// A Result type which uses bindflags' internal Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// UpdateError describes why a raw command-line token could not be stored in
/// a value-bearing option. Either way, the option's stored value is left
/// exactly as it was before the failed update.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum UpdateError {
    /// The raw token could not be converted into the option's value type.
    /// This carries no message; callers are expected to report a generic
    /// "invalid value" diagnostic naming the option.
    #[error("Invalid value")]
    Conversion,
    /// The converted value was rejected by one of the option's validations.
    /// The message is the failing validation's, suitable for direct display.
    #[error("{0}")]
    Validation(String),
}

/// A Result type for option value updates.
pub type UpdateResult<T> = std::result::Result<T, UpdateError>;
