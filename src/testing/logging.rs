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

use log::{set_logger, set_max_level, Level, LevelFilter, Log, Metadata, Record};
use std::sync::{Mutex, Once};

static TEST_LOGGER: TestLogger = TestLogger;
static INIT: Once = Once::new();

lazy_static! {
    static ref CAPTURED: Mutex<Vec<(Level, String)>> = Mutex::new(Vec::new());
}

struct TestLogger;

impl Log for TestLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let message = record.args().to_string();
        println!("{} {} {}", record.level(), record.target(), message);
        if let Ok(mut captured) = CAPTURED.lock() {
            captured.push((record.level(), message));
        }
    }

    fn flush(&self) {}
}

/// Call set_logger with a test-friendly logger, which prints every record and
/// also keeps a copy of it (see `captured_messages`). Logging will be enabled
/// at the given level, or at "Debug" if no other level was specified.
///
/// Only the first call installs the logger; later calls (e.g. from other
/// tests in the same binary) just adjust the maximum level.
pub fn set_test_logger(max_log_level: Option<LevelFilter>) {
    INIT.call_once(|| {
        // Another logger may already be installed; then we simply won't
        // capture anything.
        let _ = set_logger(&TEST_LOGGER);
    });
    set_max_level(max_log_level.unwrap_or(LevelFilter::Debug));
}

/// Returns every record logged so far at the given level (or any more severe
/// level), in the order they were logged. Records from concurrently running
/// tests are included too, so assertions should look for specific messages.
pub fn captured_messages(level: Level) -> Vec<String> {
    match CAPTURED.lock() {
        Ok(captured) => captured
            .iter()
            .filter(|(l, _)| *l <= level)
            .map(|(_, m)| m.clone())
            .collect(),
        Err(_) => Vec::new(),
    }
}
