use std::fmt;
use std::io;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    MissingToken { field: &'static str },
    InvalidToken { field: &'static str, token: String },
    UnknownDockingStatus { found: i64 },
    TrailingTokens { count: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingToken { field } => write!(f, "map line ended before {field}"),
            Self::InvalidToken { field, token } => {
                write!(f, "invalid {field}: '{token}'")
            }
            Self::UnknownDockingStatus { found } => {
                write!(f, "unknown docking status: {found}")
            }
            Self::TrailingTokens { count } => {
                write!(f, "map line has {count} unexpected trailing tokens")
            }
        }
    }
}

impl std::error::Error for ParseError {}

#[derive(Debug)]
pub enum EngineError {
    /// The engine closed its end of the stream; the game is over.
    Closed,
    Io(io::Error),
    Parse(ParseError),
    Handshake { line: String },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Closed => write!(f, "engine closed the connection"),
            Self::Io(err) => write!(f, "engine i/o failed: {err}"),
            Self::Parse(err) => write!(f, "malformed game map: {err}"),
            Self::Handshake { line } => write!(f, "unexpected handshake line: '{line}'"),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for EngineError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ParseError> for EngineError {
    fn from(err: ParseError) -> Self {
        Self::Parse(err)
    }
}
