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

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Completion is a hint for shell completion script generators, describing
/// what kind of value an option expects. This crate only stores it; it is
/// never interpreted here.
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Completion {
    /// Don't offer any completions.
    None,
    /// Complete with file names.
    Filename,
    /// Complete with a fixed list of values, each paired with a short
    /// description.
    Values(Vec<(String, String)>),
    /// Complete by calling the named shell function.
    Function(String),
}

impl Default for Completion {
    fn default() -> Self {
        Completion::None
    }
}

/// The hint for options which never take a value.
pub(crate) static NO_COMPLETION: Completion = Completion::None;
