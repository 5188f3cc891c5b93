use crate::error::ExprError;

/// Returns true when a substituted expression consists only of the characters
/// the arithmetic evaluator accepts: digits, `+ - * / ( ) .` and whitespace.
/// Anything else is treated as a textual label and returned verbatim.
pub(super) fn is_arithmetic(input: &str) -> bool {
    !input.trim().is_empty()
        && input.chars().all(|c| {
            c.is_ascii_digit()
                || c.is_ascii_whitespace()
                || matches!(c, '+' | '-' | '*' | '/' | '(' | ')' | '.')
        })
}

/// Evaluates a purely numeric expression with the usual precedence rules.
///
/// This is a deliberately tiny recursive-descent parser restricted to
/// `+ - * / ( ) .` and decimal literals. Authored option rules are untrusted
/// input, so they are never handed to anything more powerful than this.
pub(super) fn eval_arithmetic(input: &str) -> Result<f64, ExprError> {
    let mut parser = Parser::new(input);
    let value = parser.expression()?;
    parser.skip_whitespace();
    if !parser.at_end() {
        return Err(ExprError::TrailingInput(parser.rest().to_string()));
    }
    Ok(value)
}

struct Parser<'a> {
    input: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            bytes: input.as_bytes(),
            pos: 0,
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    fn rest(&self) -> &str {
        &self.input[self.pos..]
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while self
            .peek()
            .is_some_and(|b| (b as char).is_ascii_whitespace())
        {
            self.pos += 1;
        }
    }

    /// expression := term (('+' | '-') term)*
    fn expression(&mut self) -> Result<f64, ExprError> {
        let mut value = self.term()?;
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some(b'+') => {
                    self.pos += 1;
                    value += self.term()?;
                }
                Some(b'-') => {
                    self.pos += 1;
                    value -= self.term()?;
                }
                _ => return Ok(value),
            }
        }
    }

    /// term := unary (('*' | '/') unary)*
    fn term(&mut self) -> Result<f64, ExprError> {
        let mut value = self.unary()?;
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some(b'*') => {
                    self.pos += 1;
                    value *= self.unary()?;
                }
                Some(b'/') => {
                    self.pos += 1;
                    // Division by zero follows IEEE semantics and surfaces as
                    // inf/NaN in the option text rather than failing.
                    value /= self.unary()?;
                }
                _ => return Ok(value),
            }
        }
    }

    /// unary := ('-' | '+') unary | primary
    fn unary(&mut self) -> Result<f64, ExprError> {
        self.skip_whitespace();
        match self.peek() {
            Some(b'-') => {
                self.pos += 1;
                Ok(-self.unary()?)
            }
            Some(b'+') => {
                self.pos += 1;
                self.unary()
            }
            _ => self.primary(),
        }
    }

    /// primary := number | '(' expression ')'
    fn primary(&mut self) -> Result<f64, ExprError> {
        self.skip_whitespace();
        match self.peek() {
            Some(b'(') => {
                self.pos += 1;
                let value = self.expression()?;
                self.skip_whitespace();
                match self.peek() {
                    Some(b')') => {
                        self.pos += 1;
                        Ok(value)
                    }
                    Some(other) => Err(ExprError::UnexpectedChar {
                        found: other as char,
                        at: self.pos,
                    }),
                    None => Err(ExprError::UnexpectedEnd),
                }
            }
            Some(b) if b.is_ascii_digit() || b == b'.' => self.number(),
            Some(other) => Err(ExprError::UnexpectedChar {
                found: other as char,
                at: self.pos,
            }),
            None => Err(ExprError::UnexpectedEnd),
        }
    }

    fn number(&mut self) -> Result<f64, ExprError> {
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|b| b.is_ascii_digit() || b == b'.')
        {
            self.pos += 1;
        }
        let literal = &self.input[start..self.pos];
        literal
            .parse::<f64>()
            .map_err(|_| ExprError::InvalidNumber(literal.to_string()))
    }
}
