//! Flat XML token stream with a fixed-lookahead value matcher.
//!
//! Sibling products store their properties as XML where a key's value sits a
//! fixed number of tokens after the key text. Tokens are produced one per
//! parser event, whitespace text included, and `<a/>` yields a start and an
//! end token.

use std::borrow::Cow;

use quick_xml::Reader;
use quick_xml::events::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Declaration,
    DocType,
    StartElement,
    EndElement,
    Text,
    Comment,
    ProcessingInstruction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Character data of text, comment and doctype tokens, empty otherwise
    pub text: String,
}

impl Token {
    fn bare(kind: TokenKind) -> Self {
        Self {
            kind,
            text: String::new(),
        }
    }

    fn with_text(kind: TokenKind, text: Cow<'_, str>) -> Self {
        Self {
            kind,
            text: text.into_owned(),
        }
    }
}

pub struct TokenStream<'a> {
    reader: Reader<&'a [u8]>,
    buf: Vec<u8>,
}

impl<'a> TokenStream<'a> {
    pub fn new(xml: &'a [u8]) -> Self {
        let mut reader = Reader::from_reader(xml);
        reader.config_mut().expand_empty_elements = true;
        Self {
            reader,
            buf: Vec::new(),
        }
    }

    /// Next token, or `None` at end of document.
    pub fn next_token(&mut self) -> Result<Option<Token>, quick_xml::Error> {
        self.buf.clear();
        let token = match self.reader.read_event_into(&mut self.buf)? {
            Event::Eof => return Ok(None),
            Event::Decl(_) => Token::bare(TokenKind::Declaration),
            Event::DocType(e) => {
                Token::with_text(TokenKind::DocType, String::from_utf8_lossy(e.as_ref()))
            }
            Event::Start(_) | Event::Empty(_) => Token::bare(TokenKind::StartElement),
            Event::End(_) => Token::bare(TokenKind::EndElement),
            Event::Text(e) => Token::with_text(TokenKind::Text, e.unescape()?),
            Event::CData(e) => {
                Token::with_text(TokenKind::Text, String::from_utf8_lossy(e.as_ref()))
            }
            Event::Comment(e) => {
                Token::with_text(TokenKind::Comment, String::from_utf8_lossy(e.as_ref()))
            }
            Event::PI(_) => Token::bare(TokenKind::ProcessingInstruction),
        };
        Ok(Some(token))
    }
}

/// Text of the token `lookahead` positions after the first token whose text
/// equals `marker`.
///
/// Returns `None` when the marker never appears or the document ends first.
pub fn value_after_marker(
    xml: &[u8],
    marker: &str,
    lookahead: usize,
) -> Result<Option<String>, quick_xml::Error> {
    let mut stream = TokenStream::new(xml);

    while let Some(token) = stream.next_token()? {
        if token.text != marker {
            continue;
        }

        let mut target = None;
        for _ in 0..lookahead {
            target = stream.next_token()?;
            if target.is_none() {
                return Ok(None);
            }
        }
        return Ok(target.map(|t| t.text));
    }

    Ok(None)
}
