//! Strict reader for the list and record literals the models are asked to emit.
//!
//! Accepts the subset both Python-style and JSON-style replies share: lists,
//! string-keyed records, single or double quoted strings, numbers,
//! `None`/`null`, `True`/`False` and trailing commas. Nothing is evaluated.

use serde_json::{Map, Number, Value};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum LiteralError {
    #[error("literal.unexpected_end")]
    UnexpectedEnd,
    #[error("literal.unexpected_char_{0}_at_{1}")]
    UnexpectedChar(char, usize),
    #[error("literal.invalid_escape_at_{0}")]
    InvalidEscape(usize),
    #[error("literal.invalid_number_at_{0}")]
    InvalidNumber(usize),
    #[error("literal.trailing_input_at_{0}")]
    TrailingInput(usize),
    #[error("literal.too_deep_at_{0}")]
    TooDeep(usize),
}

/// Deepest list or record nesting accepted, matching serde_json's recursion limit.
const MAX_DEPTH: usize = 128;

/// Parses a whole literal; anything after the value besides whitespace is an error.
pub fn parse_literal(input: &str) -> Result<Value, LiteralError> {
    let mut parser = Parser {
        chars: input.chars().collect(),
        pos: 0,
        depth: 0,
    };
    let value = parser.value()?;
    parser.skip_whitespace();
    if parser.pos < parser.chars.len() {
        return Err(LiteralError::TrailingInput(parser.pos));
    }
    Ok(value)
}

struct Parser {
    chars: Vec<char>,
    pos: usize,
    depth: usize,
}

impl Parser {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) -> Result<char, LiteralError> {
        let c = self.peek().ok_or(LiteralError::UnexpectedEnd)?;
        self.pos += 1;
        Ok(c)
    }

    fn expect(&mut self, expected: char) -> Result<(), LiteralError> {
        match self.bump()? {
            c if c == expected => Ok(()),
            c => Err(LiteralError::UnexpectedChar(c, self.pos - 1)),
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }

    fn value(&mut self) -> Result<Value, LiteralError> {
        self.skip_whitespace();
        match self.peek().ok_or(LiteralError::UnexpectedEnd)? {
            '[' => self.list(),
            '{' => self.record(),
            '\'' | '"' => self.string().map(Value::String),
            c if c == '-' || c.is_ascii_digit() => self.number(),
            c if c.is_ascii_alphabetic() => self.keyword(),
            c => Err(LiteralError::UnexpectedChar(c, self.pos)),
        }
    }

    /// Shared loop for `[a, b,]` and `{k: v,}`; a comma may trail the last entry.
    fn sequence(
        &mut self,
        close: char,
        mut entry: impl FnMut(&mut Self) -> Result<(), LiteralError>,
    ) -> Result<(), LiteralError> {
        if self.depth == MAX_DEPTH {
            return Err(LiteralError::TooDeep(self.pos - 1));
        }
        self.depth += 1;
        loop {
            self.skip_whitespace();
            if self.peek() == Some(close) {
                self.pos += 1;
                break;
            }
            entry(self)?;
            self.skip_whitespace();
            match self.bump()? {
                ',' => continue,
                c if c == close => break,
                c => return Err(LiteralError::UnexpectedChar(c, self.pos - 1)),
            }
        }
        self.depth -= 1;
        Ok(())
    }

    fn list(&mut self) -> Result<Value, LiteralError> {
        self.expect('[')?;
        let mut items = Vec::new();
        self.sequence(']', |p| {
            items.push(p.value()?);
            Ok(())
        })?;
        Ok(Value::Array(items))
    }

    fn record(&mut self) -> Result<Value, LiteralError> {
        self.expect('{')?;
        let mut fields = Map::new();
        self.sequence('}', |p| {
            p.skip_whitespace();
            let key = match p.peek() {
                Some('\'' | '"') => p.string()?,
                Some(c) => return Err(LiteralError::UnexpectedChar(c, p.pos)),
                None => return Err(LiteralError::UnexpectedEnd),
            };
            p.skip_whitespace();
            p.expect(':')?;
            let value = p.value()?;
            fields.insert(key, value);
            Ok(())
        })?;
        Ok(Value::Object(fields))
    }

    fn string(&mut self) -> Result<String, LiteralError> {
        let quote = self.bump()?;
        let mut out = String::new();
        loop {
            match self.bump()? {
                c if c == quote => return Ok(out),
                '\\' => {
                    let at = self.pos;
                    let escaped = match self.bump()? {
                        'n' => '\n',
                        't' => '\t',
                        'r' => '\r',
                        '0' => '\0',
                        c @ ('\\' | '\'' | '"' | '/') => c,
                        'u' => self.unicode_escape(at)?,
                        _ => return Err(LiteralError::InvalidEscape(at)),
                    };
                    out.push(escaped);
                }
                '\n' => return Err(LiteralError::UnexpectedChar('\n', self.pos - 1)),
                c => out.push(c),
            }
        }
    }

    fn unicode_escape(&mut self, at: usize) -> Result<char, LiteralError> {
        let mut code = 0u32;
        for _ in 0..4 {
            let digit = self
                .bump()?
                .to_digit(16)
                .ok_or(LiteralError::InvalidEscape(at))?;
            code = code * 16 + digit;
        }
        char::from_u32(code).ok_or(LiteralError::InvalidEscape(at))
    }

    fn number(&mut self) -> Result<Value, LiteralError> {
        let start = self.pos;
        if self.peek() == Some('-') {
            self.pos += 1;
        }
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-' | '_'))
        {
            self.pos += 1;
        }
        let text: String = self.chars[start..self.pos]
            .iter()
            .filter(|c| **c != '_')
            .collect();

        if let Ok(int) = text.parse::<i64>() {
            return Ok(Value::Number(int.into()));
        }
        text.parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .ok_or(LiteralError::InvalidNumber(start))
    }

    fn keyword(&mut self) -> Result<Value, LiteralError> {
        let start = self.pos;
        while self.peek().is_some_and(|c| c.is_ascii_alphanumeric() || c == '_') {
            self.pos += 1;
        }
        let word: String = self.chars[start..self.pos].iter().collect();
        match word.as_str() {
            "None" | "null" => Ok(Value::Null),
            "True" | "true" => Ok(Value::Bool(true)),
            "False" | "false" => Ok(Value::Bool(false)),
            _ => Err(LiteralError::UnexpectedChar(self.chars[start], start)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_read_python_style_list_of_strings() {
        assert_eq!(
            parse_literal("['milk', \"eggs\", 'chef\\'s knife']").unwrap(),
            json!(["milk", "eggs", "chef's knife"])
        );
    }

    #[test]
    fn should_read_empty_list() {
        assert_eq!(parse_literal(" [ ] ").unwrap(), json!([]));
    }

    #[test]
    fn should_read_records_with_mixed_quoting_and_trailing_commas() {
        let text = r#"[
            {'name': 'apple', 'quantity': 6, 'expiry_date': '2025-10-26'},
            {"name": "salt", "quantity": None, "organic": True,},
        ]"#;

        assert_eq!(
            parse_literal(text).unwrap(),
            json!([
                {"name": "apple", "quantity": 6, "expiry_date": "2025-10-26"},
                {"name": "salt", "quantity": null, "organic": true}
            ])
        );
    }

    #[test]
    fn should_read_numbers() {
        assert_eq!(parse_literal("[-3, 1.5, 1_000]").unwrap(), json!([-3, 1.5, 1000]));
    }

    #[test]
    fn should_reject_code_and_identifiers() {
        assert!(parse_literal("__import__('os').system('rm -rf /')").is_err());
        assert!(parse_literal("[milk, eggs]").is_err());
        assert!(parse_literal("['a' + 'b']").is_err());
    }

    #[test]
    fn should_reject_unterminated_input() {
        assert_eq!(parse_literal("['milk'"), Err(LiteralError::UnexpectedEnd));
        assert_eq!(parse_literal("'milk"), Err(LiteralError::UnexpectedEnd));
    }

    #[test]
    fn should_reject_trailing_text() {
        assert_eq!(
            parse_literal("['milk'] and more"),
            Err(LiteralError::TrailingInput(9))
        );
    }

    #[test]
    fn should_reject_non_string_keys() {
        assert!(parse_literal("{name: 'milk'}").is_err());
        assert!(parse_literal("{1: 'milk'}").is_err());
    }

    #[test]
    fn should_decode_unicode_escapes() {
        assert_eq!(
            parse_literal("'jalape\\u00f1o'").unwrap(),
            json!("jalapeño")
        );
    }

    #[test]
    fn should_reject_runaway_nesting() {
        let nested = "[".repeat(100_000);

        assert_eq!(parse_literal(&nested), Err(LiteralError::TooDeep(128)));
        assert!(parse_literal(&"{'a': ".repeat(100_000)).is_err());
    }

    #[test]
    fn should_accept_nesting_up_to_limit() {
        let deepest = format!("{}{}", "[".repeat(128), "]".repeat(128));
        let too_deep = format!("{}{}", "[".repeat(129), "]".repeat(129));

        assert!(parse_literal(&deepest).is_ok());
        assert!(matches!(parse_literal(&too_deep), Err(LiteralError::TooDeep(_))));
    }
}
