use crate::issue::{IssueKind, ParseIssue};
use crate::tags::{ParseOptions, tag_eq};

use super::helpers::{find_text_end, scan_attributes, scan_tag_name, skip_tag_end};
use super::token::Token;

const COMMENT_OPEN: &str = "<!--";
const COMMENT_CLOSE: &str = "-->";

/// Single-pass HTML lexer.
///
/// The lexer works on byte offsets into the borrowed source and advances
/// monotonically; every loop iteration consumes at least one character.
pub struct Lexer<'a> {
    source: &'a str,
    options: &'a ParseOptions,
    cursor: usize,
    tokens: Vec<Token>,
    issues: Vec<ParseIssue>,
}

impl<'a> Lexer<'a> {
    /// Create a lexer over `source`.
    #[must_use]
    pub const fn new(source: &'a str, options: &'a ParseOptions) -> Self {
        Self {
            source,
            options,
            cursor: 0,
            tokens: Vec::new(),
            issues: Vec::new(),
        }
    }

    /// Lex the whole source.
    pub fn run(&mut self) {
        let len = self.source.len();
        while self.cursor < len {
            let start = self.cursor;
            self.lex_text();
            if self.cursor != start {
                continue;
            }

            if self.source[start..].starts_with(COMMENT_OPEN) {
                self.lex_comment();
            } else {
                let name = self.lex_tag();
                if self.options.is_raw_text(name) {
                    self.lex_raw_text(name);
                }
            }
        }
    }

    /// Tokens produced so far.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Recoveries made so far, in source order.
    #[must_use]
    pub fn issues(&self) -> &[ParseIssue] {
        &self.issues
    }

    /// Consume the lexer and return its tokens.
    #[must_use]
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    /// Consume the lexer and return its tokens and issues.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Token>, Vec<ParseIssue>) {
        (self.tokens, self.issues)
    }

    fn lex_text(&mut self) {
        let end = find_text_end(self.source, self.cursor).unwrap_or(self.source.len());
        if end == self.cursor {
            return;
        }
        self.tokens.push(Token::text(&self.source[self.cursor..end]));
        self.cursor = end;
    }

    fn lex_comment(&mut self) {
        let source = self.source;
        let start = self.cursor;
        let body = start + COMMENT_OPEN.len();
        let content = match source[body..].find(COMMENT_CLOSE) {
            Some(offset) => {
                self.cursor = body + offset + COMMENT_CLOSE.len();
                &source[body..body + offset]
            }
            None => {
                self.cursor = source.len();
                self.issues.push(ParseIssue {
                    kind: IssueKind::UnterminatedComment,
                    tag: None,
                    position: start,
                });
                &source[body..]
            }
        };
        self.tokens.push(Token::comment(content));
    }

    /// Lex one tag starting at the `<` under the cursor and return its name.
    ///
    /// Any tag with a raw-text name switches to raw-text mode afterwards,
    /// closing and self-closing ones included.
    fn lex_tag(&mut self) -> &'a str {
        let source = self.source;
        let closing = source.as_bytes().get(self.cursor + 1) == Some(&b'/');
        self.tokens.push(Token::TagStart { closing });
        self.cursor += if closing { 2 } else { 1 };

        let (name_start, name_end) = scan_tag_name(source, self.cursor);
        let name = &source[name_start..name_end];
        self.tokens.push(Token::tag_name(name));

        let end = self.lex_attributes(name_end);
        let self_closing = source.as_bytes().get(end) == Some(&b'/');
        self.tokens.push(Token::TagEnd { self_closing });
        name
    }

    /// Emit attribute tokens and move the cursor past the tag end. Returns
    /// the offset where the attributes stopped, at `/`, `>` or end of input.
    fn lex_attributes(&mut self, from: usize) -> usize {
        let (attributes, end) = scan_attributes(self.source, from);
        self.tokens
            .extend(attributes.into_iter().map(|content| Token::Attribute { content }));
        self.cursor = skip_tag_end(self.source, end);
        end
    }

    /// Consume the content of a raw-text element as a single text token, up
    /// to its case-insensitively matching closing tag.
    fn lex_raw_text(&mut self, tag_name: &str) {
        let source = self.source;
        let start = self.cursor;
        let mut index = start;

        while let Some(offset) = source[index..].find("</") {
            let close_at = index + offset;
            let (name_start, name_end) = scan_tag_name(source, close_at + 2);
            let name = &source[name_start..name_end];
            if !tag_eq(name, tag_name) {
                index = close_at + 2;
                continue;
            }

            if close_at > start {
                self.tokens.push(Token::text(&source[start..close_at]));
            }
            self.tokens.push(Token::TagStart { closing: true });
            self.tokens.push(Token::tag_name(name));
            let _ = self.lex_attributes(name_end);
            self.tokens.push(Token::TagEnd {
                self_closing: false,
            });
            return;
        }

        if start < source.len() {
            self.tokens.push(Token::text(&source[start..]));
        }
        self.issues
            .push(ParseIssue::for_tag(IssueKind::UnterminatedRawText, tag_name, start));
        self.cursor = source.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(source: &str) -> (Vec<Token>, Vec<ParseIssue>) {
        let options = ParseOptions::default();
        let mut lexer = Lexer::new(source, &options);
        lexer.run();
        lexer.into_parts()
    }

    #[test]
    fn unterminated_comment_runs_to_end() {
        let (tokens, issues) = lex("a<!-- b");
        assert_eq!(tokens, [Token::text("a"), Token::comment(" b")]);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::UnterminatedComment);
        assert_eq!(issues[0].position, 1);
    }

    #[test]
    fn unterminated_raw_text_runs_to_end() {
        let (tokens, issues) = lex("<script>let a = '</scrip';");
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[3], Token::text("let a = '</scrip';"));
        assert_eq!(issues[0].kind, IssueKind::UnterminatedRawText);
        assert_eq!(issues[0].tag.as_deref(), Some("script"));
    }

    #[test]
    fn stray_raw_text_closer_enters_raw_mode() {
        let (tokens, issues) = lex("x</script><b>y</b></script>z");
        assert!(issues.is_empty());
        assert_eq!(tokens[4], Token::text("<b>y</b>"));
        assert!(!tokens.contains(&Token::tag_name("b")));
        assert_eq!(tokens.last(), Some(&Token::text("z")));
    }

    #[test]
    fn raw_text_closer_always_ends_with_plain_tag_end() {
        let (tokens, _) = lex("<style>a</style/>b");
        assert_eq!(tokens[6], Token::TagEnd { self_closing: false });
        assert_eq!(tokens[7], Token::text("b"));
    }

    #[test]
    fn multibyte_text_is_preserved() {
        let (tokens, _) = lex("héllo <em>wörld</em> ✓");
        assert_eq!(tokens[0], Token::text("héllo "));
        assert_eq!(tokens[4], Token::text("wörld"));
        assert_eq!(tokens[8], Token::text(" ✓"));
    }

    #[test]
    fn cursor_never_passes_end_on_truncated_tag() {
        let (tokens, _) = lex("<a href='x");
        assert_eq!(
            tokens,
            [
                Token::TagStart { closing: false },
                Token::tag_name("a"),
                Token::attribute("href='x"),
                Token::TagEnd { self_closing: false },
            ]
        );
    }
}
