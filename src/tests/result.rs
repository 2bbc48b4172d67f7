use super::*;
use std::cell::{Cell, RefCell};

#[derive(Debug, PartialEq)]
struct NoCopy {
    value: String,
}

#[test]
fn ok_holds_value() {
    let result: Result<i32> = ok(4);
    assert!(result.is_ok());
    assert!(!result.is_error());
    assert_eq!(*result.get(), 4);
    assert_eq!(result.into_value(), 4);
}

#[test]
fn err_holds_error() {
    let result: Result<i32> = err("bad number");
    assert!(!result.is_ok());
    assert!(result.is_error());
    assert_eq!(result.get_error(), &ErrorMsg::from("bad number"));
    assert_eq!(result.into_error().message(), "bad number");
}

#[test]
#[should_panic(expected = "accessed the value of a 'Result' that holds an error")]
fn err_get_panics() {
    err::<i32>("bad number").get();
}

#[test]
#[should_panic(expected = "accessed the value of a 'Result' that holds an error")]
fn err_into_value_panics() {
    err::<i32>("bad number").into_value();
}

#[test]
#[should_panic(expected = "accessed the error of a 'Result' that holds a value")]
fn ok_get_error_panics() {
    ok(4).get_error();
}

#[test]
#[should_panic(expected = "accessed the error of a 'Result' that holds a value")]
fn ok_into_error_panics() {
    ok(4).into_error();
}

#[test]
fn map_transforms_value() {
    let answer = ok(42).map(|value| format!("answer = {}", value));
    assert_eq!(answer.get(), "answer = 42");
}

#[test]
fn map_keeps_error() {
    let calls = Cell::new(0);
    let answer = err::<i32>("bad number").map(|value| {
        calls.set(calls.get() + 1);
        format!("answer = {}", value)
    });
    assert_eq!(answer.get_error(), &ErrorMsg::from("bad number"));
    assert_eq!(calls.get(), 0);
}

#[test]
fn flat_map_flattens() {
    let half = |value: i32| {
        if value % 2 == 0 {
            ok(value / 2)
        } else {
            err(format!("{} is odd", value))
        }
    };
    assert_eq!(ok(8).flat_map(half).flat_map(half), ok(2));
    assert_eq!(
        ok(6).flat_map(half).flat_map(half),
        err::<i32>("3 is odd")
    );
}

#[test]
fn flat_map_keeps_error() {
    let calls = Cell::new(0);
    let result = err::<i32>("bad number").flat_map(|value| {
        calls.set(calls.get() + 1);
        ok(value + 1)
    });
    assert_eq!(result, err("bad number"));
    assert_eq!(calls.get(), 0);
}

#[test]
fn then_observes_value() {
    let seen = Cell::new(0);
    let result = ok(7).then(|&value| seen.set(value));
    assert_eq!(seen.get(), 7);
    assert_eq!(result, ok(7));

    let result = err::<i32>("bad number").then(|&value| seen.set(value + 1));
    assert_eq!(seen.get(), 7);
    assert!(result.is_error());
}

#[test]
fn then_into_moves_value_once() {
    let seen = RefCell::new(Vec::new());
    let result: Result<NoCopy> = Result::Ok(NoCopy {
        value: "s1".into(),
    });
    result.then_into(|value| seen.borrow_mut().push(value));
    assert_eq!(
        *seen.borrow(),
        vec![NoCopy {
            value: "s1".into()
        }]
    );

    let result: Result<NoCopy> = err("bad number");
    result.then_into(|value| seen.borrow_mut().push(value));
    assert_eq!(seen.borrow().len(), 1);
}

#[test]
fn expect_returns_value() {
    assert_eq!(ok(7).expect("number not good"), 7);
}

#[test]
#[should_panic(expected = "number not good")]
fn expect_panics_with_message() {
    err::<i32>("bad number").expect("number not good");
}

#[test]
fn expect_replaces_error_message() {
    let message = panic_message(|| err::<i32>("bad number").expect("number not good"));
    assert_eq!(message.as_deref(), Some("number not good"));
}

#[test]
fn unwrap_returns_value() {
    assert_eq!(ok(9).unwrap(), 9);
    let parsed: Result<i32, String> = Result::Ok(11);
    assert_eq!(parsed.unwrap(), 11);
}

#[test]
#[should_panic(expected = "bad number")]
fn unwrap_panics_with_error_message() {
    err::<i32>("bad number").unwrap();
}

#[test]
fn unwrap_uses_generic_message_for_foreign_errors() {
    let message = panic_message(|| {
        let parsed: Result<i32, String> = Result::Err("bad number".into());
        parsed.unwrap()
    });
    assert_eq!(message.as_deref(), Some(error::UNEXPECTED));
}

#[test]
fn error_message_defaults() {
    assert_eq!(ErrorMsg::default().message(), "unknown error");
    assert_eq!(ErrorMsg::from("a"), ErrorMsg::new(String::from("a")));
    assert_ne!(ErrorMsg::from("a"), ErrorMsg::from("b"));
    assert_eq!(ErrorMsg::from("a").to_string(), "a");
}

#[test]
fn misuse_renders_message() {
    assert_eq!(
        Error::UnexpectedResult("number not good".into()).to_string(),
        "number not good"
    );
    assert_eq!(
        Error::EmptyAccess.to_string(),
        "accessed the value of an empty 'Maybe'"
    );
}

#[test]
fn borrows_without_consuming() {
    let result: Result<String> = ok("fredis".into());
    assert_eq!(result.as_ref().map(|value| value.len()).into_value(), 6);
    assert_eq!(result.as_ref().into_value(), "fredis");
    assert!(result.is_ok());
}

#[test]
fn converts_from_std() {
    let parsed: Result<i32, std::num::ParseIntError> = "12".parse::<i32>().into();
    assert_eq!(parsed.into_std(), Ok(12));
    let failed: Result<i32, std::num::ParseIntError> = "x".parse::<i32>().into();
    assert!(failed.is_error());
    assert!(failed.into_std().is_err());
}

#[test]
fn borrowed_errors_use_expect_or_map_error() {
    let cause = String::from("bad number");
    let borrowed: Result<i32, &String> = Result::Err(&cause);
    let message = panic_message(move || borrowed.expect("number not good"));
    assert_eq!(message.as_deref(), Some("number not good"));

    let borrowed: Result<i32, &String> = Result::Err(&cause);
    let owned = borrowed.map_error(|error| ErrorMsg::new(error.as_str()));
    assert_eq!(panic_message(move || owned.unwrap()).as_deref(), Some("bad number"));
}

#[test]
fn unwrap_uses_generic_message_for_static_borrows() {
    let parsed: Result<i32, &'static str> = Result::Err("bad number");
    assert_eq!(panic_message(move || parsed.unwrap()).as_deref(), Some(error::UNEXPECTED));
}

#[test]
fn map_error_keeps_value() {
    let parsed: Result<i32, String> = Result::Ok(3);
    assert_eq!(parsed.map_error(|error| error.len()), Result::Ok(3));
    let parsed: Result<i32, String> = Result::Err("bad".into());
    assert_eq!(parsed.map_error(|error| error.len()), Result::Err(3));
}
