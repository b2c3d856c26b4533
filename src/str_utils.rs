/// Efficiently find the index of the start of the next UTF-8 character
fn get_next_char_index(input: &str, mut index: usize) -> Option<usize> {
    while index < input.len() {
        index += 1;
        if input.is_char_boundary(index) {
            return Some(index);
        }
    }
    None
}

/// Byte index of the `char_offset`-th character, clamped to the end of `input`
fn byte_index_of_char(input: &str, char_offset: usize) -> usize {
    let mut index = 0;
    for _ in 0..char_offset {
        match get_next_char_index(input, index) {
            Some(next) => index = next,
            None => return input.len(),
        }
    }
    index
}

/// Splits `input` at the given character offsets.
///
/// Always returns `offsets.len() + 1` parts. Offsets past the end of the input
/// (or smaller than a previous offset) produce empty parts instead of failing.
pub fn split_at<'a>(input: &'a str, offsets: &[usize]) -> Vec<&'a str> {
    let mut parts = Vec::with_capacity(offsets.len() + 1);
    let mut start = 0;
    for offset in offsets {
        let end = byte_index_of_char(input, *offset).max(start);
        parts.push(&input[start..end]);
        start = end;
    }
    parts.push(&input[start..]);
    parts
}

#[cfg(test)]
mod test {
    use super::{get_next_char_index, split_at};

    #[test]
    fn test_next_char() {
        let test_cases = vec![
            ("abcd", 0, Some(1)),
            ("abcd", 1, Some(2)),
            ("abcd", 4, None),
            ("ÀñôΑβω", 2, Some(4)),
            ("ÀñôΑβω", 0, Some(2)),
            ("ÀñôΑβω", 12, None),
        ];

        for (input, start, expected_next) in test_cases {
            assert_eq!(get_next_char_index(input, start), expected_next);
        }
    }

    #[test]
    fn test_split_at() {
        let test_cases: Vec<(&str, &[usize], Vec<&str>)> = vec![
            (
                "3100600445635",
                &[1, 5, 10, 12][..],
                vec!["3", "1006", "00445", "63", "5"],
            ),
            ("3100600445635", &[12][..], vec!["310060044563", "5"]),
            ("310060", &[1, 5, 10, 12][..], vec!["3", "1006", "0", "", ""]),
            ("", &[1, 5][..], vec!["", "", ""]),
            ("abc", &[][..], vec!["abc"]),
            // offsets are in characters, not bytes
            ("ÀñôΑβω", &[1, 4][..], vec!["À", "ñôΑ", "βω"]),
            // decreasing offsets never go backwards
            ("abcdef", &[4, 2][..], vec!["abcd", "", "ef"]),
        ];

        for (input, offsets, expected) in test_cases {
            assert_eq!(split_at(input, offsets), expected, "input {input:?}");
        }
    }
}
