//! Minimal CSV codec for the dataset files.
//!
//! Handles the subset of CSV the dataset needs: comma separation, double
//! quotes around fields containing commas or quotes, and doubled quotes as
//! the escape inside quoted fields.

/// Split a CSV line into fields.
///
/// Quoted fields may contain commas; a doubled quote inside a quoted field
/// decodes to a single quote. Unquoted fields are trimmed.
#[must_use]
pub fn parse_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }
    fields.push(current.trim().to_string());
    fields
}

/// Join fields into a CSV line, quoting any field that contains a comma,
/// quote, or newline.
#[must_use]
pub fn to_line(fields: &[String]) -> String {
    fields
        .iter()
        .map(|f| {
            if f.contains(',') || f.contains('"') || f.contains('\n') {
                format!("\"{}\"", f.replace('"', "\"\""))
            } else {
                f.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_plain_fields() {
        assert_eq!(
            parse_line("CS101, Intro ,3"),
            vec!["CS101", "Intro", "3"]
        );
    }

    #[test]
    fn quoted_fields_keep_commas_and_quotes() {
        assert_eq!(
            parse_line(r#"S001,"Doe, Jane","say ""hi"""#),
            vec!["S001", "Doe, Jane", r#"say "hi""#]
        );
    }

    #[test]
    fn empty_fields_survive() {
        assert_eq!(parse_line("a,,c,"), vec!["a", "", "c", ""]);
    }

    #[test]
    fn line_round_trips_awkward_fields() {
        let fields = vec![
            "CS101".to_string(),
            "Data, Structures".to_string(),
            r#"the "best" course"#.to_string(),
        ];
        assert_eq!(parse_line(&to_line(&fields)), fields);
    }
}
