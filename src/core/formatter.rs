//! The record formatter: turns a raw text blob into the numbered,
//! re-punctuated report layout.
//!
//! Total over strings. Never fails and never panics for any text input;
//! the only caller-visible "failure" is the empty string returned when the
//! input has no non-blank lines, which the pipeline reports as an empty
//! file before ever calling in here.

/// Character that splits a record into identifier and remainder.
pub const DELIMITER: char = ';';

/// Horizontal rule emitted after every entry, 38 `=` characters.
pub const SEPARATOR_RULE: &str = "======================================";

const PHONE_PLACEHOLDER: &str = "Telefone:";

/// Formats the raw input into the concatenation of one entry per record.
///
/// Records are the non-blank trimmed lines of `raw`, in original order.
/// Blank lines are dropped entirely and do not consume a number.
pub fn format(raw: &str) -> String {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(index, line)| format_entry(index + 1, line))
        .collect()
}

/// Zero-padded entry label: 1 -> "01.", 23 -> "23.", 104 -> "104.".
pub fn number_label(number: usize) -> String {
    format!("{:02}.", number)
}

fn format_entry(number: usize, record: &str) -> String {
    let label = number_label(number);
    match split_at_delimiter(record) {
        Split::Found { head, tail } => {
            format!("{label} {head}{tail};;\n{PHONE_PLACEHOLDER}\n{SEPARATOR_RULE}\n\n\n")
        }
        // One extra blank line before the placeholder. The asymmetry with
        // the delimiter case is intentional; it matches the observed output
        // of the legacy tool.
        Split::NotFound => {
            format!("{label} {record};;\n\n{PHONE_PLACEHOLDER}\n{SEPARATOR_RULE}\n\n\n")
        }
        Split::Degraded => {
            format!("{label} {record};;\n{PHONE_PLACEHOLDER}\n{SEPARATOR_RULE}\n\n\n")
        }
    }
}

enum Split<'a> {
    /// `head` keeps the delimiter; `tail` is trimmed.
    Found { head: &'a str, tail: &'a str },
    NotFound,
    /// Slicing around the delimiter failed; emit the record verbatim so a
    /// single odd record cannot abort the whole batch.
    Degraded,
}

fn split_at_delimiter(record: &str) -> Split<'_> {
    let Some(position) = record.find(DELIMITER) else {
        return Split::NotFound;
    };
    // ';' is a single byte, so position + 1 is always a char boundary.
    // Checked slicing keeps the transformation total even if that ever
    // stops holding.
    match (record.get(..position + 1), record.get(position + 1..)) {
        (Some(head), Some(rest)) => Split::Found {
            head,
            tail: rest.trim(),
        },
        _ => Split::Degraded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delimiter_present_layout() {
        let output = format("12345;John Doe");
        assert_eq!(
            output,
            "01. 12345;John Doe;;\nTelefone:\n======================================\n\n\n"
        );
    }

    #[test]
    fn test_delimiter_absent_layout_has_extra_blank_line() {
        let output = format("John Doe");
        assert_eq!(
            output,
            "01. John Doe;;\n\nTelefone:\n======================================\n\n\n"
        );
    }

    #[test]
    fn test_tail_is_trimmed_but_head_keeps_delimiter() {
        let output = format("12345;   John Doe   ");
        assert!(output.starts_with("01. 12345;John Doe;;\n"));
    }

    #[test]
    fn test_only_first_delimiter_splits() {
        let output = format("123;a;b;c");
        assert!(output.starts_with("01. 123;a;b;c;;\n"));
    }

    #[test]
    fn test_blank_lines_are_dropped_without_consuming_numbers() {
        let output = format("A;1\n\nB\n");
        assert!(output.starts_with("01. A;1;;"));
        assert!(output.contains("02. B;;"));
        assert!(!output.contains("03."));
    }

    #[test]
    fn test_whitespace_only_input_yields_empty_string() {
        assert_eq!(format("   \n\n  \n"), "");
        assert_eq!(format(""), "");
    }

    #[test]
    fn test_lines_are_trimmed_before_formatting() {
        let output = format("   123;Jane   \r\n");
        assert!(output.starts_with("01. 123;Jane;;\n"));
    }

    #[test]
    fn test_no_trailing_newline_still_yields_final_record() {
        let output = format("a;1\nb;2");
        assert!(output.contains("02. b;2;;"));
    }

    #[test]
    fn test_numbering_is_zero_padded_and_unbounded() {
        assert_eq!(number_label(1), "01.");
        assert_eq!(number_label(9), "09.");
        assert_eq!(number_label(10), "10.");
        assert_eq!(number_label(104), "104.");
    }

    #[test]
    fn test_delimiter_only_record() {
        let output = format(";");
        assert!(output.starts_with("01. ;;;\n"));
    }

    #[test]
    fn test_multibyte_record_text_survives() {
        let output = format("São Paulo;José");
        assert!(output.starts_with("01. São Paulo;José;;\n"));
    }
}
