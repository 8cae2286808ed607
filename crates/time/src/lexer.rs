use std::ops::Range;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// Run of ASCII digits
    Number,
    /// Run of letters (or any other alphanumeric that is not an ASCII digit)
    Word,
}

/// Single token with lexeme and byte span in the source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub lexeme: &'a str,
    pub span: Range<usize>,
}

impl Token<'_> {
    pub fn is_number(&self) -> bool {
        self.kind == TokenKind::Number
    }

    /// Numeric value of a `Number` token with at most `max_len` digits.
    pub fn number(&self, max_len: usize) -> Option<u32> {
        if !self.is_number() || self.lexeme.len() > max_len {
            return None;
        }
        self.lexeme.parse().ok()
    }
}

fn kind_of(c: char) -> Option<TokenKind> {
    if c.is_ascii_digit() {
        Some(TokenKind::Number)
    } else if c.is_alphanumeric() {
        Some(TokenKind::Word)
    } else {
        None
    }
}

/// Split `text` into digit runs and word runs. Everything else is a
/// delimiter, and a change between digits and letters also ends a token,
/// so `IMG20200115` yields `IMG` and `20200115`.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut current: Option<(TokenKind, usize)> = None;

    for (i, c) in text.char_indices() {
        let kind = kind_of(c);
        match (current, kind) {
            (Some((cur, _)), Some(k)) if cur == k => {}
            (Some((cur, start)), _) => {
                tokens.push(Token {
                    kind: cur,
                    lexeme: &text[start..i],
                    span: start..i,
                });
                current = kind.map(|k| (k, i));
            }
            (None, k) => current = k.map(|k| (k, i)),
        }
    }

    if let Some((kind, start)) = current {
        tokens.push(Token {
            kind,
            lexeme: &text[start..],
            span: start..text.len(),
        });
    }

    tokens
}
