use crate::results::PageMetadata;
use html5ever::Attribute;
use html5ever::tendril::stream::{TendrilSink, Utf8LossyDecoder};
use html5ever::tendril::{ByteTendril, StrTendril, fmt};
use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{
    BufferQueue, Tag, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};
use std::borrow::Cow;
use std::io::{ErrorKind, Read};

/// Default number of bytes read per tokenizer feed
pub const DEFAULT_CHUNK_SIZE: usize = 8 * 1024;

/// Streams markup from `reader` and extracts Open Graph metadata
///
/// Stops at the first `<body>` tag, at end of input, or on a read error,
/// returning whatever was collected up to that point.
pub fn extract<R: Read>(reader: R) -> PageMetadata {
    extract_with_chunk_size(reader, DEFAULT_CHUNK_SIZE)
}

/// Same as [`extract`] with an explicit read size
pub fn extract_with_chunk_size<R: Read>(mut reader: R, chunk_size: usize) -> PageMetadata {
    let mut decoder = Utf8LossyDecoder::new(TokenizerFeed::new());
    let mut buf = vec![0u8; chunk_size.max(1)];

    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => {
                ::log::debug!("Stopping extraction on read error: {}", e);
                break;
            }
        };

        decoder.process(ByteTendril::from_slice(&buf[..n]));
        if decoder.inner_sink.is_done() {
            ::log::debug!("Reached <body>, stopping extraction");
            break;
        }
    }

    decoder.finish()
}

/// Looks for `property="<property>"` in a tag's attributes
///
/// Returns the value of the `content` attribute (empty if absent) and whether
/// the property matched. Attribute order does not matter. The tokenizer keeps
/// only the first occurrence of a repeated attribute name, so a second
/// `property` or `content` on the same tag never reaches this function.
pub fn extract_meta_property(attrs: &[Attribute], property: &str) -> (String, bool) {
    let mut content = String::new();
    let mut matched = false;

    for attr in attrs {
        let key = &*attr.name.local;
        if key == "property" && &*attr.value == property {
            matched = true;
        }
        if key == "content" {
            content = attr.value.to_string();
        }
    }

    (content, matched)
}

/// Decoded text sink driving the tokenizer
struct TokenizerFeed {
    tokenizer: Tokenizer<MetaSink>,
    input: BufferQueue,
}

impl TokenizerFeed {
    fn new() -> Self {
        Self {
            tokenizer: Tokenizer::new(MetaSink::default(), TokenizerOpts::default()),
            input: BufferQueue::default(),
        }
    }

    fn is_done(&self) -> bool {
        self.tokenizer.sink.done
    }
}

impl TendrilSink<fmt::UTF8> for TokenizerFeed {
    fn process(&mut self, t: StrTendril) {
        if self.is_done() {
            return;
        }
        self.input.push_back(t);
        let _ = self.tokenizer.feed(&mut self.input);
    }

    fn error(&mut self, desc: Cow<'static, str>) {
        ::log::trace!("Replacing undecodable input: {}", desc);
    }

    type Output = PageMetadata;

    fn finish(mut self) -> PageMetadata {
        if !self.is_done() {
            self.tokenizer.end();
        }
        std::mem::take(&mut self.tokenizer.sink).finish()
    }
}

/// Properties checked on every `<meta>` tag, in order
const META_PROPERTIES: [&str; 6] = [
    "description",
    "og:title",
    "og:description",
    "og:image",
    "og:site_name",
    "og:video",
];

/// Token sink collecting metadata from the document head
#[derive(Debug, Default)]
struct MetaSink {
    meta: PageMetadata,
    awaiting_title: bool,
    title_text: String,
    dropped_attribute: bool,
    done: bool,
}

impl MetaSink {
    fn finish(mut self) -> PageMetadata {
        self.commit_title();
        self.meta
    }

    /// Ends the pending text run, if any, as the page title
    fn commit_title(&mut self) {
        if self.awaiting_title && !self.title_text.is_empty() {
            self.meta.title = std::mem::take(&mut self.title_text);
            self.awaiting_title = false;
        }
    }

    fn handle_start_tag(&mut self, tag: &Tag) -> TokenSinkResult<()> {
        match &*tag.name {
            "body" => {
                self.done = true;
                return TokenSinkResult::Continue;
            }
            "title" => self.awaiting_title = true,
            "meta" => {
                if self.dropped_attribute {
                    ::log::debug!("Repeated attribute dropped from <meta {:?}>", tag.attrs);
                }
                self.apply_meta(&tag.attrs)
            }
            _ => {}
        }

        if tag.self_closing {
            return TokenSinkResult::Continue;
        }
        raw_text_state(&tag.name)
    }

    fn apply_meta(&mut self, attrs: &[Attribute]) {
        for property in META_PROPERTIES {
            let (content, matched) = extract_meta_property(attrs, property);
            if !matched {
                continue;
            }
            ::log::trace!("meta {} = {:?}", property, content);
            let field = match property {
                "description" | "og:description" => &mut self.meta.description,
                "og:title" => &mut self.meta.title,
                "og:image" => &mut self.meta.image,
                "og:site_name" => &mut self.meta.site_name,
                "og:video" => &mut self.meta.video,
                _ => continue,
            };
            *field = content;
        }
    }
}

impl TokenSink for MetaSink {
    type Handle = ();

    fn process_token(&mut self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        if self.done {
            return TokenSinkResult::Continue;
        }

        match token {
            Token::CharacterTokens(text) => {
                if self.awaiting_title {
                    self.title_text.push_str(&text);
                }
                TokenSinkResult::Continue
            }
            Token::NullCharacterToken => TokenSinkResult::Continue,
            Token::ParseError(e) => {
                ::log::trace!("Ignoring markup error: {}", e);
                if e == "Duplicate attribute" {
                    self.dropped_attribute = true;
                }
                TokenSinkResult::Continue
            }
            Token::TagToken(tag) => {
                self.commit_title();
                let result = match tag.kind {
                    TagKind::StartTag => self.handle_start_tag(&tag),
                    TagKind::EndTag => TokenSinkResult::Continue,
                };
                self.dropped_attribute = false;
                result
            }
            Token::EOFToken => {
                self.commit_title();
                self.done = true;
                TokenSinkResult::Continue
            }
            _ => {
                self.commit_title();
                TokenSinkResult::Continue
            }
        }
    }
}

/// Tokenizer state for elements whose content is not markup
fn raw_text_state(name: &str) -> TokenSinkResult<()> {
    match name {
        "title" | "textarea" => TokenSinkResult::RawData(RawKind::Rcdata),
        "style" | "iframe" | "noembed" | "noframes" | "noscript" | "xmp" => {
            TokenSinkResult::RawData(RawKind::Rawtext)
        }
        "script" => TokenSinkResult::RawData(RawKind::ScriptData),
        "plaintext" => TokenSinkResult::Plaintext,
        _ => TokenSinkResult::Continue,
    }
}
