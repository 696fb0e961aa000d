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

use crate::error::*;
use crate::option::{longest_identifier, Option};
use std::io::Write;

/// The number of spaces `padding_for` leaves between the longest identifier
/// and its description.
pub const COLUMN_GAP: usize = 4;

/// Render one option's usage text: the identifier, padded with spaces out to
/// `padding` columns, followed by the description. Continuation lines of a
/// multi-line description are indented by `padding` spaces, so they line up
/// under the first line of the description rather than under the identifier.
///
/// If the identifier is already `padding` characters or longer, the
/// description follows it directly.
pub fn usage(identifier: &str, short_description: &str, padding: usize) -> String {
    let spacing = " ".repeat(padding.saturating_sub(identifier.chars().count()));
    let description = short_description.replace('\n', &format!("\n{}", " ".repeat(padding)));
    format!("{}{}{}", identifier, spacing, description)
}

/// Returns the padding to use when rendering the given options together: the
/// longest identifier, plus a gap of `COLUMN_GAP` spaces.
pub fn padding_for<'a, I>(options: I) -> usize
where
    I: IntoIterator<Item = &'a dyn Option>,
{
    longest_identifier(options).unwrap_or(0) + COLUMN_GAP
}

/// Write the usage text for each of the given options to the given writer,
/// one after another, with all of their descriptions aligned in one column.
pub fn write_usage<'a, W: Write>(f: &mut W, options: &[&'a dyn Option]) -> Result<()> {
    let padding = padding_for(options.iter().copied());
    for option in options {
        f.write_fmt(format_args!("{}\n", option.usage(padding)))?;
    }
    Ok(())
}
