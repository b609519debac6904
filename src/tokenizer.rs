use crate::token::{Token, TokenKind};

pub struct Tokenizer<'a> {
    source: &'a str,  // Source code.
    start: usize,  // Byte offset of the start of the current token.
    current: usize,  // Byte offset of the *next* character to be scanned.
    line: usize,  // Keeps track of the current line number.
    column: usize,  // Column of the *next* character, counted in chars.
    start_line: usize,
    start_column: usize,
    finished: bool,  // Set once the iterator has handed out its last token.
}

impl<'a> Tokenizer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            start: 0,
            current: 0,
            line: 1,
            column: 1,
            start_line: 1,
            start_column: 1,
            finished: false,
        }
    }

    /// Interface function.
    /// Scans and returns the next token. Lexical errors come back as `TokenKind::Error` tokens.
    /// Once the end of the source is reached, every call returns `TokenKind::Eof`.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        self.start = self.current;
        self.start_line = self.line;
        self.start_column = self.column;

        let Some(c) = self.advance() else {
            return self.make_token(TokenKind::Eof);
        };

        match c {
            // Single-character tokens.
            '(' => self.make_token(TokenKind::LeftParen),
            ')' => self.make_token(TokenKind::RightParen),
            '[' => self.make_token(TokenKind::LeftBracket),
            ']' => self.make_token(TokenKind::RightBracket),
            '{' => self.make_token(TokenKind::LeftBrace),
            '}' => self.make_token(TokenKind::RightBrace),
            ':' => self.make_token(TokenKind::Colon),
            ';' => self.make_token(TokenKind::Semicolon),
            ',' => self.make_token(TokenKind::Comma),
            '*' => self.make_token(TokenKind::Multiply),
            '%' => self.make_token(TokenKind::Mod),
            '^' => self.make_token(TokenKind::Power),

            // One or two character tokens. The longer match always wins.
            '+' => {
                if self.match_next('+') {
                    self.make_token(TokenKind::Increment)
                } else {
                    self.make_token(TokenKind::Add)
                }
            },
            '-' => {
                if self.match_next('-') {
                    self.make_token(TokenKind::Decrement)
                } else {
                    self.make_token(TokenKind::Subtract)
                }
            },
            '!' => {
                if self.match_next('=') {
                    self.make_token(TokenKind::NotEqual)
                } else {
                    self.make_token(TokenKind::Not)
                }
            },
            '=' => {
                if self.match_next('=') {
                    self.make_token(TokenKind::Equal)
                } else {
                    self.make_token(TokenKind::Assign)
                }
            },
            '>' => {
                if self.match_next('=') {
                    self.make_token(TokenKind::GreaterEqual)
                } else {
                    self.make_token(TokenKind::Greater)
                }
            },
            '<' => {
                if self.match_next('=') {
                    self.make_token(TokenKind::LessEqual)
                } else {
                    self.make_token(TokenKind::Less)
                }
            },

            // Two character tokens only. A lone `&` or `|` is not part of the language.
            '&' => {
                if self.match_next('&') {
                    self.make_token(TokenKind::And)
                } else {
                    self.make_token(TokenKind::Error)
                }
            },
            '|' => {
                if self.match_next('|') {
                    self.make_token(TokenKind::Or)
                } else {
                    self.make_token(TokenKind::Error)
                }
            },

            // Division or the start of a comment.
            '/' => {
                if self.match_next('/') {
                    self.line_comment()
                } else if self.match_next('*') {
                    self.block_comment()
                } else {
                    self.make_token(TokenKind::Divide)
                }
            },

            // Literals.
            '"' => self.string(),
            '\'' => self.character(),
            '0'..='9' => self.number(),

            // Identifiers or keywords.
            'a'..='z' | 'A'..='Z' | '_' => self.word(),

            // Anything else matches no rule. The offending unit is this single character.
            _ => self.make_token(TokenKind::Error),
        }
    }

    /// Skips spaces, tabs, form feeds and line breaks.
    fn skip_whitespace(&mut self) {
        while self.peek().map_or(false, |c| c.is_ascii_whitespace()) {
            self.advance();
        }
    }

    /// Processes `//` comments. The comment runs up to, but not including, the line break.
    fn line_comment(&mut self) -> Token {
        loop {
            match (self.peek(), self.peek_next()) {
                (None, _) | (Some('\n'), _) | (Some('\r'), Some('\n')) => break,
                _ => {
                    self.advance();
                },
            }
        }

        self.make_token(TokenKind::Comment)
    }

    /// Processes `/* */` comments, which may span several lines.
    fn block_comment(&mut self) -> Token {
        loop {
            match self.advance() {
                None => return self.unterminated(),
                Some('*') if self.match_next('/') => return self.make_token(TokenKind::BlockComment),
                Some(_) => (),
            }
        }
    }

    /// Processes string literals. A string must be closed on the line it was opened on.
    fn string(&mut self) -> Token {
        loop {
            match self.peek() {
                c if is_line_end(c) => return self.unterminated(),
                Some('"') => {
                    // Consume the closing `"`.
                    self.advance();
                    return self.make_token(TokenKind::StringLiteral);
                },
                Some('\\') => {
                    // An escape swallows the next character, whatever it is, unless the line ends.
                    self.advance();
                    if is_line_end(self.peek()) {
                        return self.unterminated();
                    }
                    self.advance();
                },
                Some(_) => {
                    self.advance();
                },
                None => unreachable!(),
            }
        }
    }

    /// Processes character literals: exactly one character or one escape between single quotes.
    fn character(&mut self) -> Token {
        match self.peek() {
            c if is_line_end(c) => return self.unterminated(),
            Some('\'') => {
                // `''` holds no character at all.
                self.advance();
                return self.make_token(TokenKind::Error);
            },
            Some('\\') => {
                self.advance();
                if is_line_end(self.peek()) {
                    return self.unterminated();
                }
                self.advance();
            },
            Some(_) => {
                self.advance();
            },
            None => unreachable!(),
        }

        match self.peek() {
            Some('\'') => {
                self.advance();
                self.make_token(TokenKind::CharLiteral)
            },
            c if is_line_end(c) => self.unterminated(),
            Some(_) => {
                // Too many characters. Report everything up to the closing quote on this line.
                while !is_line_end(self.peek()) && self.peek() != Some('\'') {
                    self.advance();
                }
                self.match_next('\'');
                self.make_token(TokenKind::Error)
            },
            None => unreachable!(),
        }
    }

    /// Processes number literals.
    fn number(&mut self) -> Token {
        while self.peek().map_or(false, |c| c.is_ascii_digit()) {
            // The above statement evaluates to `false` if `peek()` returned `None`. Otherwise, it will evaluate to the result of the closure.
            self.advance();
        }

        self.make_token(TokenKind::Number)
    }

    /// Processes identifiers and keywords.
    fn word(&mut self) -> Token {
        while self.peek().map_or(false, |c| c.is_ascii_alphanumeric() || c == '_') {
            // Allow alphanumeric characters and `_` in identifiers.
            self.advance();
        }

        // An exact match in the keyword table beats the identifier rule.
        let kind = TokenKind::keyword(self.lexeme()).unwrap_or(TokenKind::Ident);
        self.make_token(kind)
    }

    /// Builds the error token for a literal or comment whose closing delimiter never came.
    /// The offending text runs from the opening delimiter to the end of its line,
    /// and scanning resumes right after it.
    fn unterminated(&mut self) -> Token {
        let source = self.source;
        let rest = &source[self.start..];
        let end = rest.find(|c: char| is_line_end(Some(c))).unwrap_or(rest.len());
        let lexeme = &rest[..end];

        // The lexeme holds no line break, so the cursor stays on the starting line.
        self.current = self.start + end;
        self.line = self.start_line;
        self.column = self.start_column + lexeme.chars().count();

        Token {
            kind: TokenKind::Error,
            lexeme: String::from(lexeme),
            line: self.start_line,
            column: self.start_column,
        }
    }

    /// Consumes and returns the next character pointed to by `current`.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.current += c.len_utf8();

        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(c)
    }

    /// Checks if next character pointed to by `current` is `expected`. If so, consume it and return true.
    fn match_next(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Returns the next character if there is one.
    fn peek(&self) -> Option<char> {
        self.source[self.current..].chars().next()
    }

    /// Returns the character after next if there is one.
    fn peek_next(&self) -> Option<char> {
        self.source[self.current..].chars().nth(1)
    }

    fn lexeme(&self) -> &'a str {
        &self.source[self.start..self.current]
    }

    fn make_token(&self, kind: TokenKind) -> Token {
        Token {
            kind,
            lexeme: String::from(self.lexeme()),
            line: self.start_line,
            column: self.start_column,
        }
    }
}

/// `None` counts as a line end, so an unclosed literal at the end of the file is unterminated too.
fn is_line_end(c: Option<char>) -> bool {
    matches!(c, None | Some('\n') | Some('\r'))
}

/// Yields every token up to, but excluding, `Eof`.
/// An `Error` token is yielded and then the iterator is exhausted.
impl Iterator for Tokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        let token = self.next_token();
        match token.kind {
            TokenKind::Eof => {
                self.finished = true;
                None
            },
            TokenKind::Error => {
                self.finished = true;
                Some(token)
            },
            _ => Some(token),
        }
    }
}
