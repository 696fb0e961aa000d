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
use crate::option::*;
use crate::validation::Validation;

#[test]
fn test_key_starts_unset() {
    let key = Key::<String>::new(&["-m", "--message"], "").unwrap();
    assert_eq!(None, key.value());
    assert_eq!(None, key.into_value());
}

#[test]
fn test_key_last_update_wins() {
    let mut key = Key::<String>::new(&["-m", "--message"], "").unwrap();
    key.update_value("first").unwrap();
    assert_eq!(Some(&"first".to_owned()), key.value());
    key.update_value("second").unwrap();
    assert_eq!(Some("second".to_owned()), key.into_value());
}

#[test]
fn test_key_conversion_failure_leaves_value_unchanged() {
    let mut int_key = Key::<i32>::new(&["-n"], "").unwrap();
    assert_eq!(Err(UpdateError::Conversion), int_key.update_value("abc"));
    assert_eq!(None, int_key.value());
    int_key.update_value("7").unwrap();
    assert_eq!(Err(UpdateError::Conversion), int_key.update_value("abc"));
    assert_eq!(Some(&7), int_key.value());

    let mut float_key = Key::<f64>::new(&["-x"], "").unwrap();
    float_key.update_value("2.5").unwrap();
    assert_eq!(Err(UpdateError::Conversion), float_key.update_value("abc"));
    assert_eq!(Some(&2.5), float_key.value());
}

#[test]
fn test_key_validation() {
    let mut key = Key::<i32>::new(&["-n"], "")
        .unwrap()
        .with_validation(Validation::greater_than(5));

    assert_eq!(
        Err(UpdateError::Validation("Must be greater than 5".to_owned())),
        key.update_value("3")
    );
    assert_eq!(None, key.value());

    assert!(key.update_value("10").is_ok());
    assert_eq!(Some(&10), key.value());

    assert!(key.update_value("4").is_err());
    assert_eq!(Some(&10), key.value());
}

#[test]
fn test_key_first_failing_validation_wins() {
    let mut key = Key::<i32>::new(&["-n"], "")
        .unwrap()
        .with_validations(vec![
            Validation::greater_than(5),
            Validation::custom(|v: &i32| v % 2 == 0, "Must be even"),
        ]);

    // Both validations fail; only the first is reported.
    assert_eq!(
        Err(UpdateError::Validation("Must be greater than 5".to_owned())),
        key.update_value("3")
    );
    assert_eq!(
        Err(UpdateError::Validation("Must be even".to_owned())),
        key.update_value("7")
    );
    assert!(key.update_value("8").is_ok());
    assert_eq!(2, key.validations().len());
}

#[test]
fn test_key_later_validations_are_not_run_after_failure() {
    use std::cell::Cell;
    use std::rc::Rc;

    let calls = Rc::new(Cell::new(0));
    let counted = calls.clone();
    let mut key = Key::<i32>::new(&["-n"], "")
        .unwrap()
        .with_validation(Validation::custom(|_| false, "Always fails"))
        .with_validation(Validation::custom(
            move |_| {
                counted.set(counted.get() + 1);
                true
            },
            "Never fails",
        ));

    assert!(key.update_value("1").is_err());
    assert_eq!(0, calls.get());
}

#[test]
fn test_key_bool_vocabulary() {
    let mut key = Key::<bool>::new(&["--enabled"], "").unwrap();
    key.update_value("YES").unwrap();
    assert_eq!(Some(&true), key.value());
    key.update_value("f").unwrap();
    assert_eq!(Some(&false), key.value());
    assert_eq!(Err(UpdateError::Conversion), key.update_value("maybe"));
    assert_eq!(Some(&false), key.value());
}

#[test]
fn test_key_failure_messages() {
    let key = Key::<u16>::new(&["-p", "--port"], "")
        .unwrap()
        .with_validation(Validation::greater_than(1024));
    assert_eq!("integer", key.value_type());
    assert_eq!(
        "Invalid value passed to '-p, --port <value>'; expected integer",
        key.failure_message(&UpdateError::Conversion)
    );
    assert_eq!(
        "Invalid value passed to '-p, --port <value>': Must be greater than 1024",
        key.failure_message(&UpdateError::Validation(
            "Must be greater than 1024".to_owned()
        ))
    );
}
