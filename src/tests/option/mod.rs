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

mod key;

use crate::completion::Completion;
use crate::error::*;
use crate::option::*;
use crate::testing::logging::{captured_messages, set_test_logger};
use crate::validation::Validation;
use log::Level;

fn assert_invalid_argument<T>(result: Result<T>) {
    match result {
        Err(Error::InvalidArgument(_)) => {}
        Err(e) => panic!("Expected an invalid argument error, got {}", e),
        Ok(_) => panic!("Expected an invalid argument error, got success"),
    }
}

#[test]
fn test_declaration_requires_names() {
    assert_invalid_argument(Declaration::new(&[], "help"));
    assert_invalid_argument(Flag::new(&[], "help"));
    assert_invalid_argument(Key::<String>::new(&[], "help"));
    assert_invalid_argument(VariadicKey::<String>::new(&[], "help"));
    assert_invalid_argument(CounterFlag::new(&[], "help"));
}

#[test]
fn test_declaration_rejects_bad_names() {
    assert_invalid_argument(Declaration::new(&["-m", ""], "help"));
    assert_invalid_argument(Declaration::new(&["-m", "--message", "-m"], "help"));
}

#[test]
fn test_declaration_preserves_name_order() {
    let d = Declaration::new(&["--message", "-m"], "The message").unwrap();
    assert_eq!(&["--message".to_owned(), "-m".to_owned()], d.names());
    assert_eq!("The message", d.short_description());
    assert_eq!("--message, -m", d.identifier(false));
    assert_eq!("--message, -m <value>", d.identifier(true));
}

#[test]
fn test_identifiers() {
    let flag = Flag::new(&["-m", "--message"], "").unwrap();
    let key = Key::<String>::new(&["-m", "--message"], "").unwrap();
    let variadic = VariadicKey::<String>::new(&["-m", "--message"], "").unwrap();
    assert_eq!("-m, --message", flag.identifier());
    assert_eq!("-m, --message <value>", key.identifier());
    assert_eq!("-m, --message <value>", variadic.identifier());

    let single = Key::<i32>::new(&["--count"], "").unwrap();
    assert_eq!("--count <value>", single.identifier());
}

#[test]
fn test_kind_properties() {
    let flag = Flag::new(&["-f"], "").unwrap();
    let counter = CounterFlag::new(&["-v"], "").unwrap();
    let key = Key::<String>::new(&["-k"], "").unwrap();
    let variadic = VariadicKey::<String>::new(&["-V"], "").unwrap();

    assert!(!flag.is_variadic());
    assert!(!counter.is_variadic());
    assert!(!key.is_variadic());
    assert!(variadic.is_variadic());

    assert_eq!(&Completion::None, flag.completion());
    assert_eq!(&Completion::None, counter.completion());
    assert_eq!(&Completion::Filename, key.completion());
    assert_eq!(&Completion::Filename, variadic.completion());

    let key = key.with_completion(Completion::Function("_list_hosts".to_owned()));
    assert_eq!(
        &Completion::Function("_list_hosts".to_owned()),
        key.completion()
    );
}

#[test]
fn test_descriptions() {
    let flag = Flag::new(&["-m", "--message"], "").unwrap();
    let key = Key::<String>::new(&["-m", "--message"], "").unwrap();
    let variadic = VariadicKey::<u32>::new(&["-m"], "").unwrap();
    let counter = CounterFlag::new(&["-v"], "").unwrap();
    assert_eq!("Flag(-m, --message)", flag.description());
    assert_eq!("Key(-m, --message <value>)", format!("{:?}", key));
    assert_eq!("VariadicKey(-m <value>)", format!("{:?}", variadic));
    assert_eq!("CounterFlag(-v)", format!("{:?}", counter));

    let erased: &dyn Option = &flag;
    assert_eq!("Flag(-m, --message)", format!("{:?}", erased));
}

/// A stand-in for an external parser: it finds the option with the given
/// name, and applies the given occurrence to it through its Binding.
fn apply(
    options: &mut [&mut dyn Option],
    name: &str,
    raw: std::option::Option<&str>,
) -> std::result::Result<(), String> {
    let option = options
        .iter_mut()
        .find(|o| o.names().iter().any(|n| n == name))
        .ok_or_else(|| format!("Unknown option '{}'", name))?;
    match option.binding() {
        Binding::Flag(flag) => flag.toggle(),
        Binding::Counter(counter) => counter.increment(),
        Binding::Value(value_option) => {
            let raw = raw.ok_or_else(|| format!("Missing value for '{}'", name))?;
            value_option
                .update_value(raw)
                .map_err(|e| value_option.failure_message(&e))?;
        }
    }
    Ok(())
}

#[test]
fn test_heterogeneous_parse() {
    let mut verbose = Flag::new(&["-v", "--verbose"], "").unwrap();
    let mut debug = CounterFlag::new(&["-d"], "").unwrap();
    let mut count = Key::<i32>::new(&["-c", "--count"], "")
        .unwrap()
        .with_validation(Validation::greater_than(0));
    let mut files = VariadicKey::<String>::new(&["-f", "--file"], "").unwrap();

    {
        let mut options: Vec<&mut dyn Option> = Vec::new();
        options.push(&mut verbose);
        options.push(&mut debug);
        options.push(&mut count);
        options.push(&mut files);

        assert!(apply(&mut options, "--verbose", None).is_ok());
        assert!(apply(&mut options, "-d", None).is_ok());
        assert!(apply(&mut options, "-d", None).is_ok());
        assert!(apply(&mut options, "-c", Some("3")).is_ok());
        assert!(apply(&mut options, "-f", Some("a.txt")).is_ok());
        assert!(apply(&mut options, "--file", Some("b.txt")).is_ok());

        assert_eq!(
            Err("Invalid value passed to '-c, --count <value>'; expected integer".to_owned()),
            apply(&mut options, "--count", Some("abc"))
        );
        assert_eq!(
            Err("Invalid value passed to '-c, --count <value>': Must be greater than 0".to_owned()),
            apply(&mut options, "--count", Some("-1"))
        );
        assert_eq!(
            Err("Unknown option '-x'".to_owned()),
            apply(&mut options, "-x", None)
        );
    }

    assert!(verbose.value());
    assert_eq!(2, debug.value());
    assert_eq!(Some(&3), count.value());
    assert_eq!(&["a.txt".to_owned(), "b.txt".to_owned()], files.values());
}

#[test]
fn test_successful_updates_are_logged() {
    set_test_logger(None);

    let mut key = Key::<String>::new(&["--logging-probe"], "").unwrap();
    key.update_value("secret-token").unwrap();

    let messages = captured_messages(Level::Debug);
    assert!(messages
        .iter()
        .any(|m| m.contains("--logging-probe <value>")));
    // Raw values are never logged.
    assert!(!messages.iter().any(|m| m.contains("secret-token")));
}
