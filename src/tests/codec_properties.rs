use crate::decoder::{decode, RunParser};
use crate::encoder::{encode, encode_runs};
use crate::error::{Error, MalformedKind};
use crate::report::{compress, decompress};
use crate::stats::{compression_ratio, expansion_ratio, Ratio};
use proptest::prelude::*;

/// Text with no ASCII digits, biased towards long runs.
fn digit_free_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        (prop::char::any().prop_filter("no digits", |c| !c.is_ascii_digit()), 1usize..20),
        0..30,
    )
    .prop_map(|runs| {
        runs.into_iter()
            .flat_map(|(c, n)| std::iter::repeat(c).take(n))
            .collect::<String>()
    })
}

proptest! {
    /// Property 1: Roundtrip fidelity
    /// Decoding the encoded text gives back the input.
    #[test]
    fn prop_roundtrip(input in digit_free_text()) {
        let encoded = encode(&input);
        prop_assert_eq!(decode(&encoded).unwrap(), input);
    }

    /// Property 2: Roundtrip on arbitrary digit-free strings
    #[test]
    fn prop_roundtrip_any_string(input in "[^0-9]*") {
        prop_assert_eq!(decode(&encode(&input)).unwrap(), input);
    }

    /// Property 3: Maximal runs
    /// No two adjacent runs share a symbol.
    #[test]
    fn prop_runs_are_maximal(input in digit_free_text()) {
        let runs = encode_runs(&input);
        for pair in runs.windows(2) {
            prop_assert_ne!(pair[0].symbol(), pair[1].symbol());
        }
    }

    /// Property 4: Length preservation
    /// Run counts are positive and sum to the input length in chars.
    #[test]
    fn prop_counts_sum_to_length(input: String) {
        let runs = encode_runs(&input);
        prop_assert!(runs.iter().all(|r| r.count() >= 1));
        let total: usize = runs.iter().map(|r| r.count()).sum();
        prop_assert_eq!(total, input.chars().count());
    }

    /// Property 5: The parser reads back exactly the runs the encoder made
    #[test]
    fn prop_parser_matches_encoder(input in digit_free_text()) {
        let encoded = encode(&input);
        let parsed: Vec<_> = RunParser::new(&encoded).collect::<Result<_, _>>().unwrap();
        prop_assert_eq!(parsed, encode_runs(&input));
    }

    /// Property 6: A single run is a single token
    #[test]
    fn prop_single_run(symbol in prop::char::any(), len in 1usize..5000) {
        let input: String = std::iter::repeat(symbol).take(len).collect();
        prop_assert_eq!(encode(&input), format!("{symbol}{len}"));
    }

    /// Property 7: Reports agree with the codec and ratios stay finite
    #[test]
    fn prop_reports_consistent(input in digit_free_text()) {
        let compressed = compress(&input);
        prop_assert_eq!(compressed.original_size, input.len());
        prop_assert_eq!(compressed.compressed_size, compressed.compressed_content.len());

        let decompressed = decompress(&compressed.compressed_content).unwrap();
        prop_assert_eq!(&decompressed.decompressed_content, &input);

        if input.is_empty() {
            prop_assert_eq!(compressed.compression_ratio, Ratio::NotApplicable);
            prop_assert_eq!(decompressed.expansion_ratio, Ratio::NotApplicable);
        } else {
            prop_assert!(compressed.compression_ratio.percent().unwrap().is_finite());
            prop_assert!(decompressed.expansion_ratio.percent().unwrap().is_finite());
        }
    }

    /// Property 8: Ratios never produce NaN or infinity
    #[test]
    fn prop_ratios_finite(a: u32, b: u32) {
        let (a, b) = (a as usize, b as usize);
        for ratio in [compression_ratio(a, b), expansion_ratio(a, b)] {
            match ratio {
                Ratio::Percent(p) => prop_assert!(p.is_finite()),
                Ratio::NotApplicable => prop_assert_eq!(a, 0),
            }
        }
    }

    /// Property 9: Parsing arbitrary text either succeeds or reports a
    /// malformed run inside the input, after which parsing stops
    #[test]
    fn prop_parse_errors_are_located(stream: String) {
        let mut parser = RunParser::new(&stream);
        while let Some(run) = parser.next() {
            match run {
                Ok(run) => prop_assert!(run.count() >= 1),
                Err(Error::MalformedStream { offset, .. }) => {
                    prop_assert!(offset < stream.len());
                    prop_assert!(stream.is_char_boundary(offset));
                    prop_assert!(parser.next().is_none());
                    break;
                }
                Err(other) => prop_assert!(false, "unexpected error {:?}", other),
            }
        }
    }
}

/// Bolero fuzz test: No panics on arbitrary input
#[test]
fn fuzz_encode_no_panic() {
    bolero::check!().with_type::<String>().for_each(|input| {
        let encoded = encode(input);
        let runs = encode_runs(input);
        assert_eq!(runs.iter().map(|r| r.count()).sum::<usize>(), input.chars().count());

        if !input.chars().any(|c| c.is_ascii_digit()) {
            assert_eq!(decode(&encoded).unwrap(), *input);
        }
    });
}

/// Bolero fuzz test: Decoder never panics on arbitrary input
#[test]
fn fuzz_decode_no_panic() {
    bolero::check!().with_type::<String>().for_each(|stream| {
        // Walk the runs decode will expand, in order. Stop at the first one
        // whose running byte total cannot be allocated at all; skip the
        // stream if a representable prefix is already too large for a test.
        let mut total = 0usize;
        for run in RunParser::new(stream).map_while(Result::ok) {
            let next = run
                .count()
                .checked_mul(run.symbol().len_utf8())
                .and_then(|bytes| total.checked_add(bytes))
                .filter(|next| *next <= isize::MAX as usize);
            match next {
                Some(next) if next > 1 << 20 => return,
                Some(next) => total = next,
                None => {
                    let err = decode(stream).unwrap_err();
                    assert_eq!(err.malformed_kind(), Some(MalformedKind::CountOverflow));
                    return;
                }
            }
        }

        match decode(stream) {
            Ok(decoded) if !decoded.chars().any(|c| c.is_ascii_digit()) => {
                // Re-encoding merges adjacent runs but keeps the text.
                assert_eq!(decode(&encode(&decoded)).unwrap(), decoded);
            }
            Ok(_) => {}
            Err(err) => assert!(err.malformed_kind().is_some()),
        }
    });
}

/// Bolero fuzz test: Runs whose expansion cannot be allocated are rejected
#[test]
fn fuzz_decode_huge_counts() {
    bolero::check!()
        .with_type::<(char, u64, u64)>()
        .for_each(|(symbol, first, second)| {
            if symbol.is_ascii_digit() {
                return;
            }
            let first = (*first as usize).max(isize::MAX as usize + 1);
            let second = (*second).max(1);
            let stream = format!("{symbol}{first}{symbol}{second}");
            let err = decode(&stream).unwrap_err();
            assert_eq!(err.malformed_kind(), Some(MalformedKind::CountOverflow));
        });
}
