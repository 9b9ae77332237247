pub mod baike;
pub mod config;
pub mod document;
pub mod error;
pub mod locales;
pub mod session;
pub mod transport;
pub mod utils;

pub use baike::{BaikeLookup, EntryRecord, LookupOutcome, ResultSummary};
pub use config::LookupConfig;
pub use document::DocumentTree;
pub use error::{FetchError, LookupError, SessionError};
pub use locales::{BuiltinLocalizer, Locale, Localizer, MessageKey};
pub use session::{ChannelSession, Session, TerminalSession};
pub use transport::{HttpFetcher, PageFetcher};
