use std::collections::HashMap;
use std::fmt;

/// The closed set of token categories the lexer can produce.
///
/// Kinds are bare tags; the matched text lives on [`Token::literal`]. A few
/// spellings share a kind: the keywords `int` / `float` reuse the literal
/// kinds, `include` reuses `Preproc`, `~` and bare `!` both map to `Not`,
/// and `%` maps to `And`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Illegal,
    EOF,

    Identifier,
    Int,
    Float,
    StringLiteral,

    // Keywords. `int`, `float` and `include` resolve to the kinds above.
    Return,
    Void,
    Signed,
    Unsigned,
    Short,
    Long,
    Double,
    Char,
    Enum,
    Struct,
    Union,
    Typedef,
    Const,
    Volatile,
    Auto,
    Static,
    Extern,
    Register,
    Sizeof,
    Goto,
    Break,
    Continue,
    If,
    Else,
    Switch,
    Case,
    Default,
    Do,
    While,
    For,

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Equals,
    EqualsEquals,
    NotEquals,
    LessThan,
    GreaterThan,
    LessThanEqual,
    GreaterThanEqual,
    LeftShift,
    RightShift,
    And,
    AndAnd,
    Or,
    OrOr,
    Xor,
    Not,

    // Punctuation
    Semicolon,
    Comma,
    Colon,
    OpenParen,
    CloseParen,
    OpenBrace,
    CloseBrace,

    Preproc,

    LineComment,
    BlockComment,
}

impl TokenKind {
    /// Uppercase tag printed by the driver in front of each literal.
    pub fn tag(&self) -> &'static str {
        match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::EOF => "EOF",
            TokenKind::Identifier => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::Float => "FLOAT",
            TokenKind::StringLiteral => "STRING",
            TokenKind::Return => "RETURN",
            TokenKind::Void => "VOID",
            TokenKind::Signed => "SIGNED",
            TokenKind::Unsigned => "UNSIGNED",
            TokenKind::Short => "SHORT",
            TokenKind::Long => "LONG",
            TokenKind::Double => "DOUBLE",
            TokenKind::Char => "CHAR",
            TokenKind::Enum => "ENUM",
            TokenKind::Struct => "STRUCT",
            TokenKind::Union => "UNION",
            TokenKind::Typedef => "TYPEDEF",
            TokenKind::Const => "CONST",
            TokenKind::Volatile => "VOLATILE",
            TokenKind::Auto => "AUTO",
            TokenKind::Static => "STATIC",
            TokenKind::Extern => "EXTERN",
            TokenKind::Register => "REGISTER",
            TokenKind::Sizeof => "SIZEOF",
            TokenKind::Goto => "GOTO",
            TokenKind::Break => "BREAK",
            TokenKind::Continue => "CONTINUE",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Switch => "SWITCH",
            TokenKind::Case => "CASE",
            TokenKind::Default => "DEFAULT",
            TokenKind::Do => "DO",
            TokenKind::While => "WHILE",
            TokenKind::For => "FOR",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Star => "STAR",
            TokenKind::Slash => "SLASH",
            TokenKind::Equals => "EQUAL",
            TokenKind::EqualsEquals => "EQEQ",
            TokenKind::NotEquals => "NOTEQ",
            TokenKind::LessThan => "LESS",
            TokenKind::GreaterThan => "GREATER",
            TokenKind::LessThanEqual => "LTEQ",
            TokenKind::GreaterThanEqual => "GTEQ",
            TokenKind::LeftShift => "LSHIFT",
            TokenKind::RightShift => "RSHIFT",
            TokenKind::And => "AND",
            TokenKind::AndAnd => "ANDAND",
            TokenKind::Or => "OR",
            TokenKind::OrOr => "OROR",
            TokenKind::Xor => "XOR",
            TokenKind::Not => "NOT",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Comma => "COMMA",
            TokenKind::Colon => "COLON",
            TokenKind::OpenParen => "LPAREN",
            TokenKind::CloseParen => "RPAREN",
            TokenKind::OpenBrace => "LBRACE",
            TokenKind::CloseBrace => "RBRACE",
            TokenKind::Preproc => "PREPROC",
            TokenKind::LineComment => "COMMENT_SINGLE",
            TokenKind::BlockComment => "COMMENT_MULTI",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One lexical unit: a kind plus the matched text.
///
/// The literal has its decoration stripped where the kind implies some:
/// string literals exclude the delimiting quotes, preprocessor tokens carry
/// only the directive name, comments carry the trimmed interior text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

impl Token {
    pub fn new(kind: TokenKind, literal: String) -> Token {
        Token { kind, literal }
    }
}

impl Default for Token {
    fn default() -> Self {
        Token {
            kind: TokenKind::EOF,
            literal: String::new(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.kind, self.literal)
    }
}

lazy_static! {
    // Built once, read-only afterwards. Lookups require the exact spelling;
    // there is no prefix or case-insensitive matching.
    static ref KEYWORDS: HashMap<&'static str, TokenKind> = {
        let mut m = HashMap::new();
        m.insert("int", TokenKind::Int);
        m.insert("float", TokenKind::Float);
        m.insert("return", TokenKind::Return);
        // `include` is in the keyword set and lexes as Preproc even
        // without a leading '#'.
        m.insert("include", TokenKind::Preproc);
        m.insert("void", TokenKind::Void);
        m.insert("signed", TokenKind::Signed);
        m.insert("unsigned", TokenKind::Unsigned);
        m.insert("short", TokenKind::Short);
        m.insert("long", TokenKind::Long);
        m.insert("double", TokenKind::Double);
        m.insert("char", TokenKind::Char);
        m.insert("enum", TokenKind::Enum);
        m.insert("struct", TokenKind::Struct);
        m.insert("union", TokenKind::Union);
        m.insert("typedef", TokenKind::Typedef);
        m.insert("const", TokenKind::Const);
        m.insert("volatile", TokenKind::Volatile);
        m.insert("auto", TokenKind::Auto);
        m.insert("static", TokenKind::Static);
        m.insert("extern", TokenKind::Extern);
        m.insert("register", TokenKind::Register);
        m.insert("sizeof", TokenKind::Sizeof);
        m.insert("goto", TokenKind::Goto);
        m.insert("break", TokenKind::Break);
        m.insert("continue", TokenKind::Continue);
        m.insert("if", TokenKind::If);
        m.insert("else", TokenKind::Else);
        m.insert("switch", TokenKind::Switch);
        m.insert("case", TokenKind::Case);
        m.insert("default", TokenKind::Default);
        m.insert("do", TokenKind::Do);
        m.insert("while", TokenKind::While);
        m.insert("for", TokenKind::For);
        m
    };
}

/// Resolves a scanned identifier against the keyword table.
pub fn lookup_keyword(ident: &str) -> Option<TokenKind> {
    KEYWORDS.get(ident).copied()
}

#[cfg(test)]
mod token_tests {
    use super::*;

    #[test]
    fn keyword_lookup_is_exact() {
        assert_eq!(lookup_keyword("while"), Some(TokenKind::While));
        assert_eq!(lookup_keyword("int"), Some(TokenKind::Int));
        assert_eq!(lookup_keyword("include"), Some(TokenKind::Preproc));

        // No prefix, suffix or case-insensitive hits.
        assert_eq!(lookup_keyword("whil"), None);
        assert_eq!(lookup_keyword("while_"), None);
        assert_eq!(lookup_keyword("While"), None);
        assert_eq!(lookup_keyword("int8"), None);
        assert_eq!(lookup_keyword(""), None);
    }

    #[test]
    fn keyword_table_covers_reserved_words() {
        for word in [
            "int", "float", "return", "include", "void", "signed", "unsigned",
            "short", "long", "double", "char", "enum", "struct", "union",
            "typedef", "const", "volatile", "auto", "static", "extern",
            "register", "sizeof", "goto", "break", "continue", "if", "else",
            "switch", "case", "default", "do", "while", "for",
        ] {
            assert!(lookup_keyword(word).is_some(), "missing keyword {word}");
        }
    }

    #[test]
    fn display_prints_tag_and_literal() {
        let token = Token::new(TokenKind::Identifier, String::from("main"));
        assert_eq!(token.to_string(), "IDENT \"main\"");
        assert_eq!(TokenKind::EqualsEquals.to_string(), "EQEQ");
    }
}
