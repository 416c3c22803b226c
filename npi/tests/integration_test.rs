use npi::{
    check_digit_for, valid, validate, LengthPolicy, Npi, NpiValidationError, UsNpiChecksum,
    Validator, ValidatorConfig,
};

#[test]
fn non_numeric_string_is_invalid() {
    assert!(!valid("notannpiid"));
}

#[test]
fn string_with_incorrect_length_is_invalid() {
    assert!(!valid("13246"));
}

#[test]
fn integer_with_incorrect_length_is_invalid() {
    assert!(!valid(13_246));
}

#[test]
fn valid_npi_string() {
    assert!(valid("1215290382"));
}

#[test]
fn valid_npi_integer() {
    assert!(valid(1_215_290_382));
}

#[test]
fn invalid_npi_string() {
    assert!(!valid("1215290383"));
}

#[test]
fn invalid_npi_integer() {
    assert!(!valid(1_215_290_383));
}

#[test]
fn text_and_integer_forms_agree() {
    for value in [1_215_290_382u64, 1_215_290_383, 1_234_567_893, 13_246, 0] {
        assert_eq!(valid(value), valid(value.to_string()), "{value}");
    }
}

#[test]
fn every_prefix_has_exactly_one_check_digit() {
    let prefixes = ["000000000", "121529038", "123456789", "987654321", "555555555"];
    for prefix in prefixes {
        let expected = check_digit_for(prefix).unwrap();
        for digit in 0..10u32 {
            let candidate = format!("{prefix}{digit}");
            assert_eq!(valid(candidate.as_str()), digit == expected, "{candidate}");
        }
    }
}

#[test]
fn any_length_other_than_ten_is_invalid() {
    let digits = "12152903821215290382";
    for length in 0..=digits.len() {
        if length != 10 {
            assert!(!valid(&digits[..length]), "length {length}");
        }
    }
}

#[test]
fn any_non_digit_is_invalid() {
    let npi = "1215290382";
    for position in 0..npi.len() {
        for replacement in ['a', ' ', '-', '.', 'é'] {
            let mut candidate: String = npi.chars().take(position).collect();
            candidate.push(replacement);
            candidate.extend(npi.chars().skip(position + 1));
            assert_eq!(
                validate(candidate.as_str()),
                Err(NpiValidationError::NonNumeric { position }),
                "{candidate}"
            );
        }
    }
}

#[test]
fn negative_integers_are_invalid() {
    assert!(!valid(-1_215_290_382i64));
    assert_eq!(validate(-1i8), Err(NpiValidationError::Negative));
}

#[test]
fn all_validators_agree_under_the_strict_policy() {
    let configured = ValidatorConfig::new().build();
    let candidates = [
        "1215290382",
        "1215290383",
        "notannpiid",
        "13246",
        "12152903820",
        "0000000006",
        "",
    ];
    for candidate in candidates {
        let expected = valid(candidate);
        assert_eq!(UsNpiChecksum.is_valid_match(candidate), expected);
        assert_eq!(configured.is_valid_match(candidate), expected);
        assert_eq!(configured.valid(candidate), expected);
    }
}

#[test]
fn permissive_policy_from_json_config() {
    let config: ValidatorConfig =
        serde_json::from_str(r#"{"length_policy": {"type": "Permissive"}}"#).unwrap();
    assert_eq!(config.length_policy, LengthPolicy::Permissive);

    let validator = config.build();
    assert!(validator.valid("12152903892"));
    assert!(!valid("12152903892"));
}

#[test]
fn npi_from_a_generated_check_digit() {
    let prefix = "987654321";
    let digit = check_digit_for(prefix).unwrap();
    let npi: Npi = format!("{prefix}{digit}").parse().unwrap();
    assert_eq!(npi.check_digit(), digit);
    assert_eq!(npi.as_str().len(), 10);
}
