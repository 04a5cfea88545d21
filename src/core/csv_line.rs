use crate::domain::model::RawRow;

/// Splits one CSV line into trimmed fields.
///
/// A `"` toggles the quoted state and is dropped from the output, so a
/// doubled quote inside a quoted field does not produce a literal quote.
/// Commas inside quotes are kept. Never fails, and always returns at least
/// one field: `n` unquoted commas yield `n + 1` fields.
pub fn parse_csv_line(line: &str) -> RawRow {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }

    fields.push(current.trim().to_string());
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_line_is_single_trimmed_field() {
        assert_eq!(parse_csv_line("  Finca Nueva  "), vec!["Finca Nueva"]);
    }

    #[test]
    fn test_splits_on_commas() {
        assert_eq!(parse_csv_line("a,b,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_quoted_comma_does_not_split() {
        assert_eq!(parse_csv_line("\"a,b\",c"), vec!["a,b", "c"]);
    }

    #[test]
    fn test_fields_are_trimmed() {
        assert_eq!(parse_csv_line(" a , b "), vec!["a", "b"]);
    }

    #[test]
    fn test_empty_input_yields_one_empty_field() {
        assert_eq!(parse_csv_line(""), vec![""]);
    }

    #[test]
    fn test_trailing_comma_yields_empty_last_field() {
        assert_eq!(parse_csv_line("a,b,"), vec!["a", "b", ""]);
    }

    #[test]
    fn test_doubled_quote_is_dropped() {
        // "say ""hi""" toggles four extra times and keeps no quote characters
        assert_eq!(parse_csv_line("\"say \"\"hi\"\"\",x"), vec!["say hi", "x"]);
    }

    #[test]
    fn test_unterminated_quote_swallows_rest_of_line() {
        assert_eq!(parse_csv_line("\"a,b,c"), vec!["a,b,c"]);
    }

    #[test]
    fn test_carriage_return_is_trimmed() {
        assert_eq!(parse_csv_line("X,Y,Z\r"), vec!["X", "Y", "Z"]);
    }
}
