mod common;
use common::{output_of, scripted};

use rbikeshare::errors::AppError;
use rbikeshare::models::{DAYS, MONTHS};

const INVALID: &str = "Invalid input! Please enter a valid month.";

#[test]
fn test_choice_accepts_every_allowed_value_case_insensitively() {
    for month in MONTHS {
        let upper = month.to_uppercase();
        let mut p = scripted(&format!("{upper}\n"));
        let got = p.ask_choice("Month? ", &MONTHS, INVALID).expect("valid month");
        assert_eq!(got, month);
    }

    for day in DAYS {
        let mut p = scripted(&format!("{day}\n"));
        let got = p.ask_choice("Day? ", &DAYS, INVALID).expect("valid day");
        assert_eq!(got, day);
    }
}

#[test]
fn test_choice_reprompts_until_valid() {
    let mut p = scripted("july\nJan\n march\nMarch\n");
    let got = p.ask_choice("Month? ", &MONTHS, INVALID).expect("valid month");
    assert_eq!(got, "march");

    let out = output_of(p);
    assert_eq!(out.matches(INVALID).count(), 3);
    assert_eq!(out.matches("Month? ").count(), 4);
}

#[test]
fn test_choice_keeps_inner_spaces() {
    let cities = ["chicago", "new york", "washington"];
    let mut p = scripted("newyork\nNew York\r\n");
    let got = p.ask_choice("City? ", &cities, "bad").expect("valid city");
    assert_eq!(got, "new york");
}

#[test]
fn test_choice_reports_closed_input() {
    let mut p = scripted("july\n");
    let err = p.ask_choice("Month? ", &MONTHS, INVALID).unwrap_err();
    assert!(matches!(err, AppError::InputClosed));
}

#[test]
fn test_yes_no_is_strict() {
    let mut p = scripted("y\nsure\nNO\n");
    let answer = p.ask_yes_no("More? ", "yes or no").expect("answer");
    assert!(!answer);
    assert_eq!(output_of(p).matches("yes or no").count(), 2);
}

#[test]
fn test_confirm_is_lenient() {
    let mut p = scripted("YES\n");
    assert!(p.confirm("Again? ").expect("answer"));

    let mut p = scripted("whatever\n");
    assert!(!p.confirm("Again? ").expect("answer"));
    assert!(!output_of(p).contains("Invalid"));
}
