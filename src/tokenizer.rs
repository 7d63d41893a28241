// ABOUTME: Source tokenizer for code cells
// ABOUTME: Lexes Python source with syntect and regroups the token stream into lines

use log::warn;
use syntect::easy::ScopeRangeIterator;
use syntect::parsing::{ParseState, Scope, ScopeStack, SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

/// Lexical category of a span of source text.
///
/// The names follow the usual highlighter vocabulary rather than syntect's
/// scope names so that the color table can be keyed by a closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    /// Whitespace and anything the lexer leaves unscoped
    Text,
    /// A literal line feed; only ever seen in the flat stream from [`Tokenizer::lex`]
    Newline,
    Keyword,
    KeywordConstant,
    Name,
    NameClass,
    NameFunction,
    NameFunctionMagic,
    NameDecorator,
    NameBuiltin,
    NameBuiltinPseudo,
    String,
    Number,
    Operator,
    Punctuation,
    Comment,
    CommentSingle,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    fn newline() -> Self {
        Self::new(TokenKind::Newline, "\n")
    }

    pub fn is_newline(&self) -> bool {
        self.kind == TokenKind::Newline
    }
}

/// The tokens of exactly one source line, without its line terminator
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    pub tokens: Vec<Token>,
}

impl Line {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Concatenated token text
    pub fn text(&self) -> String {
        self.tokens.iter().map(|token| token.text.as_str()).collect()
    }
}

// Prefix rules applied to a single scope name, most specific first
const SCOPE_KINDS: &[(&str, TokenKind)] = &[
    ("keyword.operator", TokenKind::Operator),
    ("constant.language", TokenKind::KeywordConstant),
    ("constant.numeric", TokenKind::Number),
    ("keyword", TokenKind::Keyword),
    ("storage", TokenKind::Keyword),
    ("entity.name.class", TokenKind::NameClass),
    ("entity.name.type.class", TokenKind::NameClass),
    ("support.function.magic", TokenKind::NameFunctionMagic),
    ("support.variable.magic", TokenKind::NameFunctionMagic),
    ("entity.name.function.decorator", TokenKind::NameDecorator),
    ("variable.annotation", TokenKind::NameDecorator),
    ("punctuation.definition.annotation", TokenKind::NameDecorator),
    ("meta.annotation", TokenKind::NameDecorator),
    ("entity.name.function", TokenKind::NameFunction),
    ("support.function.builtin", TokenKind::NameBuiltin),
    ("support.type", TokenKind::NameBuiltin),
    ("support.function", TokenKind::NameBuiltin),
    ("variable.language", TokenKind::NameBuiltinPseudo),
    ("variable", TokenKind::Name),
    ("meta.generic-name", TokenKind::Name),
    ("entity.other.inherited-class", TokenKind::Name),
    ("punctuation", TokenKind::Punctuation),
    ("invalid", TokenKind::Error),
];

fn scope_matches(name: &str, prefix: &str) -> bool {
    name == prefix
        || (name.starts_with(prefix) && name.as_bytes().get(prefix.len()) == Some(&b'.'))
}

fn kind_for_scope(name: &str) -> Option<TokenKind> {
    SCOPE_KINDS
        .iter()
        .find(|(prefix, _)| scope_matches(name, prefix))
        .map(|(_, kind)| *kind)
}

/// Map a syntect scope stack to a token kind.
///
/// Comment and string context wins over whatever is nested inside it, so the
/// quotes of a string or the `#` of a comment share the span's kind. Otherwise
/// the innermost concrete scope decides; `meta.*` scopes only count when no
/// concrete scope matches, since syntect nests `meta.generic-name` inside
/// `entity.name.class` and `entity.name.function`.
pub(crate) fn classify_scopes(scopes: &[Scope]) -> TokenKind {
    let names: Vec<String> = scopes.iter().map(|scope| scope.build_string()).collect();

    if names.iter().any(|name| scope_matches(name, "comment.line")) {
        return TokenKind::CommentSingle;
    }
    if names.iter().any(|name| scope_matches(name, "comment")) {
        return TokenKind::Comment;
    }
    if names.iter().any(|name| scope_matches(name, "string")) {
        return TokenKind::String;
    }

    let (meta, concrete): (Vec<&String>, Vec<&String>) =
        names.iter().partition(|name| name.starts_with("meta."));

    concrete
        .iter()
        .rev()
        .find_map(|name| kind_for_scope(name))
        .or_else(|| meta.iter().rev().find_map(|name| kind_for_scope(name)))
        .unwrap_or(TokenKind::Text)
}

// Split a span's trailing line terminator off into its own token
fn push_span(tokens: &mut Vec<Token>, kind: TokenKind, text: &str) {
    match text.strip_suffix('\n') {
        Some(body) => {
            let body = body.strip_suffix('\r').unwrap_or(body);
            if !body.is_empty() {
                tokens.push(Token::new(kind, body));
            }
            tokens.push(Token::newline());
        }
        None => tokens.push(Token::new(kind, text)),
    }
}

/// Lexer for the one language code cells are written in.
pub struct Tokenizer {
    syntax_set: SyntaxSet,
    extension: &'static str,
}

impl Tokenizer {
    /// Create a tokenizer bound to the bundled Python syntax
    pub fn python() -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            extension: "py",
        }
    }

    fn syntax(&self) -> &SyntaxReference {
        self.syntax_set
            .find_syntax_by_extension(self.extension)
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text())
    }

    /// Flat token stream with explicit newline tokens.
    ///
    /// Never fails: a line the lexer chokes on becomes a single `Error` token
    /// and lexing starts over from a clean state on the next line.
    pub fn lex(&self, source: &str) -> Vec<Token> {
        let syntax = self.syntax();
        let mut state = ParseState::new(syntax);
        let mut stack = ScopeStack::new();
        let mut tokens = Vec::new();

        for line in LinesWithEndings::from(source) {
            let ops = match state.parse_line(line, &self.syntax_set) {
                Ok(ops) => ops,
                Err(e) => {
                    warn!("Failed to lex line {:?}: {}", line, e);
                    push_span(&mut tokens, TokenKind::Error, line);
                    state = ParseState::new(syntax);
                    stack = ScopeStack::new();
                    continue;
                }
            };

            for (range, op) in ScopeRangeIterator::new(&ops, line) {
                if let Err(e) = stack.apply(op) {
                    warn!("Inconsistent scope stack while lexing: {:?}", e);
                }
                if range.is_empty() {
                    continue;
                }
                push_span(&mut tokens, classify_scopes(stack.as_slice()), &line[range]);
            }
        }

        tokens
    }

    /// Split source into lines of tokens.
    ///
    /// The trailing line is always kept, so `"a"` gives one line and `"a\n"`
    /// gives two.
    pub fn tokenize(&self, source: &str) -> Vec<Line> {
        let mut lines = Vec::new();
        let mut current = Vec::new();

        for token in self.lex(source) {
            if token.is_newline() {
                lines.push(Line::new(std::mem::take(&mut current)));
            } else {
                current.push(token);
            }
        }
        lines.push(Line::new(current));

        lines
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::python()
    }
}
