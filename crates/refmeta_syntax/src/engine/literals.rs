//! Primitive literal text per dialect.
//!
//! Quoted strings, no forced hexadecimal. The C#-style dialect escapes
//! with backslashes; the VB-style dialect doubles embedded quotes and
//! tags character literals with a `c` suffix.

use refmeta_model::{PartKind, PrimitiveValue};

use crate::dialect::Dialect;

/// The literal text of a primitive value in the given dialect.
pub(crate) fn primitive_text(value: &PrimitiveValue, dialect: Dialect) -> String {
    match value {
        PrimitiveValue::Bool(b) => match dialect {
            Dialect::CSharp => if *b { "true" } else { "false" }.to_string(),
            Dialect::VisualBasic => if *b { "True" } else { "False" }.to_string(),
        },
        PrimitiveValue::Int(i) => i.to_string(),
        PrimitiveValue::UInt(u) => u.to_string(),
        PrimitiveValue::Float(f) => f.to_string(),
        PrimitiveValue::Char(c) => match dialect {
            Dialect::CSharp => format!("'{}'", escape_char_csharp(*c)),
            Dialect::VisualBasic => match c {
                '"' => "\"\"\"\"c".to_string(),
                _ => format!("\"{c}\"c"),
            },
        },
        PrimitiveValue::Str(s) => match dialect {
            Dialect::CSharp => {
                let mut out = String::with_capacity(s.len() + 2);
                out.push('"');
                for c in s.chars() {
                    // Single quotes need no escape inside a string literal.
                    match c {
                        '\'' => out.push(c),
                        _ => out.push_str(&escape_char_csharp(c)),
                    }
                }
                out.push('"');
                out
            }
            Dialect::VisualBasic => format!("\"{}\"", s.replace('"', "\"\"")),
        },
    }
}

/// Part kind of a primitive literal: strings are string literals,
/// everything else counts as numeric.
pub(crate) fn primitive_kind(value: &PrimitiveValue) -> PartKind {
    match value {
        PrimitiveValue::Str(_) => PartKind::StringLiteral,
        _ => PartKind::NumericLiteral,
    }
}

fn escape_char_csharp(c: char) -> String {
    match c {
        '\\' => "\\\\".to_string(),
        '"' => "\\\"".to_string(),
        '\'' => "\\'".to_string(),
        '\n' => "\\n".to_string(),
        '\r' => "\\r".to_string(),
        '\t' => "\\t".to_string(),
        '\0' => "\\0".to_string(),
        _ => c.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn strings_quote_per_dialect() {
        let v = PrimitiveValue::Str("a \"b\"".into());
        assert_eq!(primitive_text(&v, Dialect::CSharp), r#""a \"b\"""#);
        assert_eq!(primitive_text(&v, Dialect::VisualBasic), "\"a \"\"b\"\"\"");
        assert_eq!(primitive_kind(&v), PartKind::StringLiteral);
    }

    #[test]
    fn chars_and_bools() {
        assert_eq!(
            primitive_text(&PrimitiveValue::Char('x'), Dialect::VisualBasic),
            "\"x\"c"
        );
        assert_eq!(
            primitive_text(&PrimitiveValue::Char('\n'), Dialect::CSharp),
            "'\\n'"
        );
        assert_eq!(
            primitive_text(&PrimitiveValue::Bool(true), Dialect::VisualBasic),
            "True"
        );
        assert_eq!(
            primitive_kind(&PrimitiveValue::Bool(true)),
            PartKind::NumericLiteral
        );
    }

    #[test]
    fn numbers_print_decimal() {
        assert_eq!(primitive_text(&PrimitiveValue::Int(-3), Dialect::CSharp), "-3");
        assert_eq!(
            primitive_text(&PrimitiveValue::Float(1.5), Dialect::VisualBasic),
            "1.5"
        );
    }
}
