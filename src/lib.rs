// Library API; the CLI and the helper binaries are thin layers over it
pub mod board;
pub mod budget;
pub mod config;
pub mod dice;
pub mod errors;
pub mod lexicon;
pub mod log;
pub mod path;
pub mod search;
pub mod verify;
pub mod word_list;

pub use board::{Board, Cell, Position};
pub use budget::{SearchLimits, SearchStatus};
pub use config::GameConfig;
pub use errors::{BoardError, ConfigError};
pub use lexicon::Lexicon;
pub use path::{DiscoveredWord, Path};
pub use search::{enumerate, enumerate_with_limits, SearchResult};
pub use verify::{verify, verify_with_limits, VerifyResult};
pub use word_list::WordList;
