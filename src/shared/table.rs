//! Comma-separated table reading and writing
//!
//! Handles the subset of CSV that grading exports use: quoted fields with
//! doubled quotes, commas and line breaks inside quotes, CRLF or LF line
//! ends, and an optional UTF-8 byte-order mark. Blank lines are dropped.
//! A quote inside an unquoted field is kept as a literal character.

use crate::core::models::InvalidCsv;

/// One parsed record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// 1-based line the record starts on
    pub line: usize,
    /// Field values
    pub fields: Vec<String>,
}

/// Parse table text into records
pub fn parse(text: &str) -> Result<Vec<Record>, InvalidCsv> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut records = Vec::new();
    let mut fields: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut touched = false;
    let mut line = 1usize;
    let mut record_line = 1usize;
    let mut quote_line = 1usize;

    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if in_quotes {
            match ch {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                },
                '"' => in_quotes = false,
                '\n' => {
                    line += 1;
                    field.push(ch);
                },
                _ => field.push(ch),
            }
            continue;
        }

        match ch {
            '"' if field.is_empty() => {
                in_quotes = true;
                touched = true;
                quote_line = line;
            },
            ',' => {
                fields.push(std::mem::take(&mut field));
                touched = true;
            },
            '\r' if chars.peek() == Some(&'\n') => {},
            '\n' | '\r' => {
                if touched {
                    fields.push(std::mem::take(&mut field));
                    records.push(Record {
                        line: record_line,
                        fields: std::mem::take(&mut fields),
                    });
                }
                field.clear();
                touched = false;
                line += 1;
                record_line = line;
            },
            _ => {
                field.push(ch);
                touched = true;
            },
        }
    }

    if in_quotes {
        return Err(InvalidCsv::UnterminatedQuote { line: quote_line });
    }
    if touched {
        fields.push(field);
        records.push(Record {
            line: record_line,
            fields,
        });
    }

    Ok(records)
}

/// Quote a field if it needs it
#[must_use]
pub fn quote(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Render rows as table text, one `\n`-terminated line per row
#[must_use]
pub fn write<R: AsRef<[String]>>(rows: &[R]) -> String {
    let mut out = String::new();
    for row in rows {
        let line: Vec<String> = row.as_ref().iter().map(|f| quote(f)).collect();
        out.push_str(&line.join(","));
        out.push('\n');
    }
    out
}
