//! rubric is a reStructuredText parser.
//!
//! Source text is lexed into a stream of position-tagged tokens and parsed
//! into a typed node tree. Malformed constructs never abort the parse:
//! they become `SystemMessage` nodes placed both inside the tree and in a
//! flat diagnostics list, with a literal reconstruction of the offending
//! source attached.
//!
//! ```rust
//! let doc = rubric::parse("readme", "Title\n=====\n\nSome paragraph.");
//! assert!(doc.messages.is_empty());
//! println!("{}", doc.to_json().unwrap());
//! ```

pub mod config;
pub mod document;
pub mod lexer;
pub mod messages;
pub mod parser;
pub mod token;

pub use config::{Config, ConfigBuilder};
pub use document::{Document, Node, NodeList};
pub use lexer::Lexer;
pub use messages::{MessageType, Severity};
pub use parser::Parser;
pub use token::{Token, TokenKind};

use std::borrow::Cow;
use unicode_normalization::{UnicodeNormalization, is_nfc};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Parses `text` into a [`Document`] using the default configuration.
///
/// `name` is a free-form identifier used in log output and diagnostics.
/// The input is NFC-normalized first when it is not already, so combining
/// sequences compose before any length bookkeeping happens.
pub fn parse(name: &str, text: &str) -> Document {
    parse_with_config(name, text, Config::default())
}

/// Parses `text` with an explicit [`Config`].
pub fn parse_with_config(name: &str, text: &str, config: Config) -> Document {
    #[cfg(debug_assertions)]
    {
        init_logger();
    }

    let normalized: Cow<'_, str> = if is_nfc(text) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.nfc().collect())
    };

    Parser::new(name, &normalized, config).parse()
}
