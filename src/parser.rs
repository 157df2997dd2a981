//! Parser for gate expression text.
//!
//! Expressions are written the way the catalog authors them, e.g.
//! `(A & B) | (A & C) | (B & C)` or `A & B & C | A & B & D`.
//!
//! ```text
//! or    := and ('|' and)*
//! and   := unary ('&' unary)*
//! unary := ('~' | '!') unary | '(' or ')' | VAR
//! VAR   := 'A' | 'B' | 'C' | 'D'   (either case)
//! ```
//!
//! `&` binds tighter than `|`, so `A & B | C` is `(A & B) | C`.

use log::trace;

use crate::ast::Expr;
use crate::error::{Error, Result};
use crate::types::Var;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Tok {
    Var(Var),
    And,
    Or,
    Not,
    LParen,
    RParen,
}

/// Token paired with its byte offset in the source text.
type Spanned = (usize, Tok);

/// Parses `text` into an expression tree.
pub fn parse_expr(text: &str) -> Result<Expr> {
    let tokens = tokenize(text)?;
    let mut parser = Parser {
        text,
        tokens: &tokens,
        pos: 0,
    };
    let expr = parser.parse_or()?;
    if let Some(&(offset, tok)) = parser.peek() {
        return Err(parser.error_at(offset, format!("unexpected {:?} after complete expression", tok)));
    }
    trace!("parse_expr({:?}) = {}", text, expr);
    Ok(expr)
}

fn tokenize(text: &str) -> Result<Vec<Spanned>> {
    let malformed = |position: usize, message: String| Error::MalformedExpression {
        expr: text.to_string(),
        position,
        message,
    };

    let mut tokens = Vec::new();
    let mut chars = text.char_indices().peekable();
    while let Some((offset, c)) = chars.next() {
        let tok = match c {
            c if c.is_whitespace() => continue,
            '&' => Tok::And,
            '|' => Tok::Or,
            '~' | '!' => Tok::Not,
            '(' => Tok::LParen,
            ')' => Tok::RParen,
            c if c.is_ascii_alphabetic() => {
                let var = Var::from_char(c).ok_or_else(|| malformed(offset, format!("unknown variable '{}'", c)))?;
                if let Some(&(_, next)) = chars.peek() {
                    if next.is_ascii_alphanumeric() || next == '_' {
                        return Err(malformed(offset, "variables are single letters A-D".to_string()));
                    }
                }
                Tok::Var(var)
            }
            _ => return Err(malformed(offset, format!("unexpected character '{}'", c))),
        };
        tokens.push((offset, tok));
    }
    Ok(tokens)
}

struct Parser<'a> {
    text: &'a str,
    tokens: &'a [Spanned],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&'a Spanned> {
        self.tokens.get(self.pos)
    }

    fn bump(&mut self) -> Option<&'a Spanned> {
        let tok = self.tokens.get(self.pos);
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    fn eat(&mut self, expected: Tok) -> bool {
        match self.peek() {
            Some(&(_, tok)) if tok == expected => {
                self.pos += 1;
                true
            }
            _ => false,
        }
    }

    fn error_at(&self, position: usize, message: String) -> Error {
        Error::MalformedExpression {
            expr: self.text.to_string(),
            position,
            message,
        }
    }

    fn parse_or(&mut self) -> Result<Expr> {
        let mut lhs = self.parse_and()?;
        while self.eat(Tok::Or) {
            let rhs = self.parse_and()?;
            lhs = Expr::or(lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_and(&mut self) -> Result<Expr> {
        let mut lhs = self.parse_unary()?;
        while self.eat(Tok::And) {
            let rhs = self.parse_unary()?;
            lhs = Expr::and(lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_unary(&mut self) -> Result<Expr> {
        match self.bump() {
            Some(&(_, Tok::Var(v))) => Ok(Expr::var(v)),
            Some(&(_, Tok::Not)) => Ok(Expr::not(self.parse_unary()?)),
            Some(&(offset, Tok::LParen)) => {
                let inner = self.parse_or()?;
                if !self.eat(Tok::RParen) {
                    return Err(self.error_at(offset, "unbalanced '('".to_string()));
                }
                Ok(inner)
            }
            Some(&(offset, tok)) => Err(self.error_at(offset, format!("expected operand, found {:?}", tok))),
            None => Err(self.error_at(self.text.len(), "unexpected end of expression".to_string())),
        }
    }
}
