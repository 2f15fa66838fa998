//! Discovery of the anonymous per-installation identifier.

pub mod archive;
pub mod token_stream;

mod resolver;

pub use resolver::{IdentityResolver, IdentitySource, ResolvedIdentity, normalize_identity};

/// Key under which settings files store the identifier.
pub const ANONYMOUS_ID_KEY: &str = "anonymousID";
/// Text token that precedes the identifier in sibling property files.
pub const ANONYMOUS_ID_MARKER: &str = "AnonymousID";
/// The identifier is the fourth token after the marker.
pub const ANONYMOUS_ID_LOOKAHEAD: usize = 4;
/// File names considered by the filesystem scan.
pub const SCAN_PATTERN: &str = "robo*.json";
