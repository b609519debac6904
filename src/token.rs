use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    // Punctuation.
    LeftParen, RightParen,
    LeftBracket, RightBracket,
    LeftBrace, RightBrace,
    Colon, Semicolon, Comma,

    // Arithmetic operators.
    Add, Subtract, Multiply, Divide, Mod, Power,
    Increment, Decrement,

    // Logical and comparison operators.
    Not, And, Or,
    Less, LessEqual,
    Greater, GreaterEqual,
    Equal, NotEqual,
    Assign,

    // Literals.
    Ident, Number, StringLiteral, CharLiteral,

    // Keywords.
    Array, Auto, Boolean, Char, Else, False,
    For, Function, If, Integer, Print, Return,
    String, True, Void, While,

    // Comments are reported rather than skipped.
    Comment, BlockComment,

    Error,
    Eof,
}

impl TokenKind {
    /// The label printed for this kind in scan mode.
    pub fn name(self) -> &'static str {
        match self {
            Self::LeftParen => "LEFT_PAREN",
            Self::RightParen => "RIGHT_PAREN",
            Self::LeftBracket => "LEFT_BRACKET",
            Self::RightBracket => "RIGHT_BRACKET",
            Self::LeftBrace => "LEFT_BRACE",
            Self::RightBrace => "RIGHT_BRACE",
            Self::Colon => "COLON",
            Self::Semicolon => "SEMICOLON",
            Self::Comma => "COMMA",
            Self::Add => "ADD",
            Self::Subtract => "SUBTRACT",
            Self::Multiply => "MULTIPLY",
            Self::Divide => "DIVIDE",
            Self::Mod => "MOD",
            Self::Power => "POWER",
            Self::Increment => "INCREMENT",
            Self::Decrement => "DECREMENT",
            Self::Not => "NOT",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Less => "LESS",
            Self::LessEqual => "LESS_EQUAL",
            Self::Greater => "GREATER",
            Self::GreaterEqual => "GREATER_EQUAL",
            Self::Equal => "EQUAL",
            Self::NotEqual => "NOT_EQUAL",
            Self::Assign => "ASSIGN",
            Self::Ident => "IDENT",
            Self::Number => "NUMBER",
            Self::StringLiteral => "LITERAL",
            Self::CharLiteral => "CHAR_LITERAL",
            Self::Array => "ARRAY",
            Self::Auto => "AUTO",
            Self::Boolean => "BOOLEAN",
            Self::Char => "CHAR",
            Self::Else => "ELSE",
            Self::False => "FALSE",
            Self::For => "FOR",
            Self::Function => "FUNCTION",
            Self::If => "IF",
            Self::Integer => "INTEGER",
            Self::Print => "PRINT",
            Self::Return => "RETURN",
            Self::String => "STRING",
            Self::True => "TRUE",
            Self::Void => "VOID",
            Self::While => "WHILE",
            Self::Comment => "COMMENT",
            Self::BlockComment => "C_COMMENT",
            Self::Error => "ERROR",
            Self::Eof => "EOF",
        }
    }

    /// Looks up a reserved word. Returns `None` for anything that should be an identifier.
    pub fn keyword(word: &str) -> Option<Self> {
        let kind = match word {
            "array" => Self::Array,
            "auto" => Self::Auto,
            "boolean" => Self::Boolean,
            "char" => Self::Char,
            "else" => Self::Else,
            "false" => Self::False,
            "for" => Self::For,
            "function" => Self::Function,
            "if" => Self::If,
            "integer" => Self::Integer,
            "print" => Self::Print,
            "return" => Self::Return,
            "string" => Self::String,
            "true" => Self::True,
            "void" => Self::Void,
            "while" => Self::While,
            _ => return None,
        };
        Some(kind)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,  // Type of token.
    pub lexeme: String,  // The 'original' from the source code.
    pub line: usize,  // Line the lexeme starts on.
    pub column: usize,  // Column (in chars) the lexeme starts at.
}

/// Renders the token as a scan-mode output line, e.g. `IDENT x`.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.lexeme)
    }
}
