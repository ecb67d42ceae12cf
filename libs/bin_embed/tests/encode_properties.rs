#![allow(unused_crate_dependencies)]
use std::num::NonZeroUsize;

use bin_embed::{EncodingConfig, Identifier};
use proptest::prelude::*;
use utils::text::{PLACEHOLDER, is_letter_or_digit, to_camel_case};

fn encode_lines(data: &[u8], config: &EncodingConfig) -> Vec<String> {
    let name = Identifier::new("data").expect("valid name");
    let mut out = Vec::new();
    bin_embed::encode(data, &name, config, &mut out).expect("in-memory encode cannot fail");

    let out = String::from_utf8(out).expect("output is utf-8");
    out.lines()
        .filter(|l| l.starts_with('\t'))
        .map(str::to_owned)
        .collect()
}

fn parse_line(line: &str) -> Vec<u8> {
    let literals = line.split('\t').nth(1).expect("line has literals");
    literals
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            let hex = s.strip_prefix("0x").expect("literal has 0x prefix");
            assert_eq!(hex.len(), 2, "literal is two digits wide");
            u8::from_str_radix(hex, 16).expect("literal is hex")
        })
        .collect()
}

proptest! {
    #[test]
    fn line_count_and_round_trip(
        data in proptest::collection::vec(any::<u8>(), 0..300),
        line_length in 1..40usize,
        comments in any::<bool>(),
    ) {
        let line_length = NonZeroUsize::new(line_length).expect("range starts at 1");
        let config = EncodingConfig::default()
            .with_line_length(line_length)
            .with_comments(comments);

        let lines = encode_lines(&data, &config);
        prop_assert_eq!(lines.len(), data.len().div_ceil(line_length.get()));

        let parsed: Vec<Vec<u8>> = lines.iter().map(|l| parse_line(l)).collect();
        if let Some((last, full)) = parsed.split_last() {
            let rem = data.len() % line_length.get();
            let expected_last = if rem == 0 { line_length.get() } else { rem };

            prop_assert_eq!(last.len(), expected_last);
            prop_assert!(full.iter().all(|l| l.len() == line_length.get()));
        }

        let round_trip: Vec<u8> = parsed.into_iter().flatten().collect();
        prop_assert_eq!(round_trip, data);
    }

    #[test]
    fn comments_match_their_line(
        data in proptest::collection::vec(any::<u8>(), 1..100),
        line_length in 1..16usize,
    ) {
        let line_length = NonZeroUsize::new(line_length).expect("range starts at 1");
        let config = EncodingConfig::default()
            .with_line_length(line_length)
            .with_comments(true);

        let lines = encode_lines(&data, &config);
        prop_assert_eq!(lines.len(), data.len().div_ceil(line_length.get()));

        for (line, chunk) in lines.iter().zip(data.chunks(line_length.get())) {
            let comment = line.split("// ").nth(1).expect("line has a comment");

            // one char per decoded char, one placeholder per invalid byte
            let expected: usize = chunk
                .utf8_chunks()
                .map(|c| c.valid().chars().count() + c.invalid().len())
                .sum();
            prop_assert_eq!(comment.chars().count(), expected);
            prop_assert!(comment.chars().all(|c| c == PLACEHOLDER || is_letter_or_digit(c)));

            if chunk.is_ascii() && chunk.iter().all(u8::is_ascii_alphanumeric) {
                prop_assert_eq!(comment.as_bytes(), chunk);
            }
        }
    }

    #[test]
    fn camel_case_is_identifier(input in "\\PC*") {
        let name = to_camel_case(&input);

        prop_assert!(name.chars().all(is_letter_or_digit));
        prop_assert_eq!(name.is_empty(), !input.chars().any(is_letter_or_digit));
        prop_assert_eq!(&name, &to_camel_case(&input));

        if let Some(first) = name.chars().next() {
            prop_assert_eq!(first, utils::text::to_lower_simple(first));
        }
    }
}
