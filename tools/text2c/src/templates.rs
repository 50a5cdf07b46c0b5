//! C declaration text generation
//!
//! The generated fragment pairs an `extern` declaration with the array
//! definition so it can be compiled on its own and linked against from
//! any translation unit that repeats the `extern` line.

/// Generate the two-line declaration for a null-terminated char array
///
/// Bytes are formatted as decimal values in original order, with a `0`
/// sentinel always appended as the final element — even when the input
/// already ends with a zero byte. An empty input yields the
/// single-element initializer `{ 0 }`.
pub fn c_char_array(symbol: &str, bytes: &[u8]) -> String {
    let mut values: Vec<String> = bytes.iter().map(|b| b.to_string()).collect();
    values.push("0".to_string());

    format!(
        "extern const char {symbol}[];\nconst char {symbol}[] = {{ {values} }};\n",
        symbol = symbol,
        values = values.join(", "),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_byte_source() {
        let fragment = c_char_array("foo", b"Hi");
        assert_eq!(
            fragment,
            "extern const char foo[];\nconst char foo[] = { 72, 105, 0 };\n"
        );
    }

    #[test]
    fn test_empty_source_emits_lone_sentinel() {
        let fragment = c_char_array("empty", b"");
        assert_eq!(
            fragment,
            "extern const char empty[];\nconst char empty[] = { 0 };\n"
        );
    }

    #[test]
    fn test_symbol_appears_exactly_twice() {
        let fragment = c_char_array("kSource_widget_api", b"var x = 1;");
        assert_eq!(fragment.matches("kSource_widget_api").count(), 2);
    }

    #[test]
    fn test_trailing_zero_byte_is_not_deduplicated() {
        let fragment = c_char_array("raw", &[65, 0]);
        assert!(fragment.contains("{ 65, 0, 0 }"));
    }

    #[test]
    fn test_value_count_is_byte_count_plus_sentinel() {
        let bytes: Vec<u8> = (0..=255).collect();
        let fragment = c_char_array("all", &bytes);

        let definition = fragment.lines().nth(1).unwrap();
        let list = definition
            .split_once('{')
            .and_then(|(_, rest)| rest.rsplit_once('}'))
            .map(|(list, _)| list)
            .unwrap();
        assert_eq!(list.split(", ").count(), bytes.len() + 1);
    }

    #[test]
    fn test_round_trip_recovers_source_bytes() {
        let bytes: Vec<u8> = vec![0, 1, 10, 13, 34, 92, 127, 128, 200, 255];
        let fragment = c_char_array("blob", &bytes);

        let definition = fragment.lines().nth(1).unwrap();
        let list = definition
            .split_once('{')
            .and_then(|(_, rest)| rest.rsplit_once('}'))
            .map(|(list, _)| list.trim())
            .unwrap();

        let mut decoded: Vec<u8> = list
            .split(", ")
            .map(|v| v.parse::<u8>().unwrap())
            .collect();
        assert_eq!(decoded.pop(), Some(0));
        assert_eq!(decoded, bytes);
    }
}
