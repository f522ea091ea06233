use std::collections::HashMap;
use std::sync::Arc;
use std::thread;

use pretty_assertions::assert_eq;
use requirements::{Check, Error, Requirement, Result, UriKind};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
enum SignupError {
    #[error("username is required")]
    MissingUsername,
    #[error("signup rejected")]
    Rejected,
}

struct Signup<'a> {
    username: Option<&'a str>,
    email: &'a str,
    website: &'a str,
    tags: Vec<&'a str>,
    age: i32,
}

fn validate(signup: &Signup) -> Result {
    let require = Requirement::to();
    require.not_be_null(signup.username, Some(&|| Error::custom(SignupError::MissingUsername)))?;
    require.not_be_empty(signup.username, None)?;
    require.not_match_pattern(signup.username.unwrap_or_default(), r"\s", None)?;
    require.be_email(signup.email, None)?;
    require.be_url(signup.website, UriKind::default(), None)?;
    require.be_less_than_or_equal_to(signup.tags.len(), 5, None)?;
    require.be_greater_than_or_equal_to(signup.age, 18, None)?;
    Ok(())
}

fn signup() -> Signup<'static> {
    Signup {
        username: Some("ada"),
        email: "ada@example.com",
        website: "https://ada.example.com",
        tags: vec!["math"],
        age: 36,
    }
}

#[test]
fn test_valid_input_passes_every_check() {
    assert!(validate(&signup()).is_ok());
}

#[test]
fn test_first_failed_check_is_reported() {
    let input = Signup {
        email: "ada@@example.com",
        age: 3,
        ..signup()
    };
    let err = validate(&input).unwrap_err();
    assert_eq!(err.check(), Some(Check::BeEmail));
    assert_eq!(err.to_string(), "Requirement \"BeEmail\" was not fulfilled");
}

#[test]
fn test_per_call_failure_is_returned() {
    let input = Signup {
        username: None,
        ..signup()
    };
    let err = validate(&input).unwrap_err();
    assert_eq!(
        err.downcast_ref::<SignupError>(),
        Some(&SignupError::MissingUsername)
    );
}

#[test]
fn test_bound_failure_applies_to_every_check() {
    let require = Requirement::to_with(|| Error::custom(SignupError::Rejected));
    let failures = [
        require.be_null(Some(1), None),
        require.be_true(false, None),
        require.be_empty("text", None),
        require.be_empty_collection(&HashMap::from([(1, 2)]), None),
        require.match_pattern("abc", "^[0-9]+$", None),
        require.be_greater_than_or_equal_to(1.5, 2.0, None),
        require.be_url("not a url", UriKind::Absolute, None),
        require.be_email("not-an-email", None),
    ];

    for failure in failures {
        let err = failure.unwrap_err();
        assert_eq!(err.downcast_ref::<SignupError>(), Some(&SignupError::Rejected));
    }
}

#[test]
fn test_boundaries_pass_in_both_directions() {
    let require = Requirement::to();
    assert!(require.be_greater_than_or_equal_to(0, 0, None).is_ok());
    assert!(require.be_less_than_or_equal_to(0, 0, None).is_ok());
    assert!(require.be_greater_than_or_equal_to(-0.0, 0.0, None).is_ok());
    assert!(require.be_less_than_or_equal_to(i64::MIN, i64::MIN, None).is_ok());
}

#[test]
fn test_requirements_are_shared_across_threads() {
    let require = Arc::new(Requirement::to_with(|| Error::custom(SignupError::Rejected)));
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let require = Arc::clone(&require);
            thread::spawn(move || {
                let value = format!("item-{i}");
                require.match_pattern(&value, "^item-[0-9]$", None)?;
                require.not_match_pattern(&value, "^item-[0-9]$", None)
            })
        })
        .collect();

    for handle in handles {
        let err = handle.join().unwrap().unwrap_err();
        assert_eq!(err.downcast_ref::<SignupError>(), Some(&SignupError::Rejected));
    }
}

#[test]
fn test_default_requirement_is_usable_from_any_thread() {
    let handle = thread::spawn(|| Requirement::to().be_false(true, None));
    let err = handle.join().unwrap().unwrap_err();
    assert!(err.is_requirement_failed());
    assert_eq!(err.to_string(), "Requirement \"BeFalse\" was not fulfilled");
}
