use afl::fuzz;
use npi::{check_digit_for, valid, validate, LengthPolicy, UsNpiChecksum, Validator, ValidatorConfig};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&input);
}

fn split_bytes_once(input: &[u8]) -> Option<(&[u8], &[u8])> {
    if let Some(i) = input.iter().position(|b| *b == b',') {
        Some((&input[0..i], &input[i + 1..]))
    } else {
        None
    }
}

fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let (input, rand_seed) = split_bytes_once(bytes)?;
    let input_str = std::str::from_utf8(input).ok()?;

    let mut rng_seed: u64 = 0;
    for i in 0..8 {
        if rand_seed.len() > i {
            rng_seed <<= 8;
            rng_seed += rand_seed[i] as u64;
        }
    }

    let rng = StdRng::seed_from_u64(rng_seed);
    run_fuzz(input_str, rng);

    Some(())
}

fn gen_length_policy(rng: &mut StdRng) -> LengthPolicy {
    if rng.gen_bool(0.5) {
        LengthPolicy::Strict
    } else {
        LengthPolicy::Permissive
    }
}

fn run_fuzz(input: &str, mut rng: StdRng) {
    let length_policy = gen_length_policy(&mut rng);
    let integer: i64 = rng.gen();

    #[cfg(feature = "manual_test")]
    {
        println!("Input: {:?}", input);
        println!("Integer: {:?}", integer);
        println!("Length policy: {:?}", length_policy);
    }

    // Every entry point must agree on the default policy
    let expected = validate(input);
    assert_eq!(valid(input), expected.is_ok());
    assert_eq!(UsNpiChecksum.is_valid_match(input), expected.is_ok());
    if let Ok(npi) = &expected {
        assert_eq!(npi.as_str(), input);
        assert_eq!(check_digit_for(&input[..9]), Some(npi.check_digit()));
    }

    // Text and integer forms of the same value agree
    assert_eq!(valid(integer), valid(integer.to_string()));

    // The permissive policy only ever accepts more
    let validator = ValidatorConfig::new().length_policy(length_policy).build();
    let configured = validator.valid(input);
    if expected.is_ok() {
        assert!(configured);
    }
    if length_policy == LengthPolicy::Strict {
        assert_eq!(configured, expected.is_ok());
    }
}
