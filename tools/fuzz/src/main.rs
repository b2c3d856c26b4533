use afl::fuzz;
use dd_idnr::{thai_idnr, ThaiIdnrChecksum, ValidationResult, Validator};
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

/// Sprinkles spaces and dashes in the value, which must not change the outcome
fn gen_separators(value: &str, rng: &mut StdRng) -> String {
    let mut decorated = String::new();
    for c in value.chars() {
        match rng.gen_range::<u8, _>(0..4) {
            0 => decorated.push(' '),
            1 => decorated.push('-'),
            _ => {}
        }
        decorated.push(c);
    }
    decorated
}

fn run_fuzz(input: &str, mut rng: StdRng) {
    #[cfg(feature = "manual_test")]
    {
        println!("Input: {:?}", input);
        println!("Input len: {:?}", input.len());
    }

    let result = thai_idnr::validate(input);
    let formatted = thai_idnr::format(input);

    assert_eq!(
        result.is_valid(),
        ThaiIdnrChecksum.is_valid_match(input),
        "validators disagree on {input:?}"
    );

    let decorated = gen_separators(input, &mut rng);
    assert_eq!(thai_idnr::validate(&decorated), result);

    if let ValidationResult::Valid(valid) = result {
        assert_eq!(valid.compact.len(), thai_idnr::LENGTH);
        assert_eq!(thai_idnr::compact(&formatted).unwrap(), valid.compact);
    }
}
