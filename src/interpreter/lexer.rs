use logos::Logos;

use crate::error::{EvalError, EvalResult};

/// Represents a lexical token in an RPN expression.
///
/// RPN needs no grammar beyond whitespace separation, so every run of
/// non-whitespace characters is a single [`Token::Word`]. Whether a word is an
/// operator or a number is decided later against the operator registry.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(extras = LexerExtras)]
pub enum Token<'s> {
    /// Any whitespace-delimited word, such as `2.5`, `+` or `foo`.
    #[regex(r"[^ \t\f\r\n]+", |lex| lex.slice())]
    Word(&'s str),
    /// Line breaks; tracked for error positions.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        lex.extras.line_start = lex.span().end;
    })]
    NewLine,
    /// Spaces, tabs, feeds and carriage returns.
    #[regex(r"[ \t\f\r]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line and the byte offset at which it starts, so that
/// every word can be given a line and column for error reporting.
pub struct LexerExtras {
    /// The current line number, starting at 1.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line:       1,
               line_start: 0, }
    }
}

/// A word of the input together with its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lexeme<'s> {
    /// The raw text of the word.
    pub text:   &'s str,
    /// 1-based line of the word.
    pub line:   usize,
    /// 1-based byte column of the word within its line.
    pub column: usize,
}

/// Splits `source` into positioned words, grouped by source line.
///
/// Lines that contain no words are omitted, so every returned group is
/// non-empty.
///
/// # Errors
/// Returns [`EvalError::InvalidToken`] if the lexer cannot match the input.
///
/// # Example
/// ```
/// use rpn_eval::interpreter::lexer::tokenize_lines;
///
/// let lines = tokenize_lines("1 2 +\n\n  3 x").unwrap();
/// assert_eq!(lines.len(), 2);
/// assert_eq!(lines[1][0].text, "3");
/// assert_eq!((lines[1][0].line, lines[1][0].column), (3, 3));
/// ```
pub fn tokenize_lines(source: &str) -> EvalResult<Vec<Vec<Lexeme<'_>>>> {
    let mut lines = Vec::new();
    let mut current = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        match token {
            Ok(Token::Word(text)) => {
                current.push(Lexeme { text,
                                      line: lexer.extras.line,
                                      column: lexer.span().start - lexer.extras.line_start + 1 });
            },
            Ok(Token::NewLine) => {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
            },
            Ok(Token::Ignored) => {},
            Err(()) => {
                return Err(EvalError::InvalidToken { token:  lexer.slice().to_string(),
                                                     line:   lexer.extras.line,
                                                     column: lexer.span().start
                                                             - lexer.extras.line_start
                                                             + 1, });
            },
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    Ok(lines)
}

/// Splits `source` into positioned words, treating line breaks as ordinary
/// whitespace.
///
/// # Errors
/// Returns [`EvalError::InvalidToken`] if the lexer cannot match the input.
pub fn tokenize(source: &str) -> EvalResult<Vec<Lexeme<'_>>> {
    Ok(tokenize_lines(source)?.into_iter().flatten().collect())
}
