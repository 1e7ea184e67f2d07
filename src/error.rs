use thiserror::Error;

use crate::parser::ParseError;

#[derive(Error, Debug)]
pub enum Error {
    /// A node descriptor could not be parsed.
    #[error("invalid node descriptor `{descriptor}`: {message}")]
    Descriptor { descriptor: String, message: String },

    /// A descriptor failed to parse while loading a graph description.
    #[error("line {line}: invalid node descriptor `{descriptor}`: {message}")]
    Format {
        /// 1-based line number within the graph description.
        line: usize,
        descriptor: String,
        message: String,
    },

    /// The graph description could not be read.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// An edge operation addressed a source node that is not in the graph.
    #[error("no node named `{0}` in the graph")]
    UnknownNode(String),
}

impl Error {
    pub(crate) fn descriptor(descriptor: &str, errors: &[ParseError<'_>]) -> Self {
        let message = errors
            .first()
            .map_or_else(|| "empty descriptor".to_string(), render);
        Self::Descriptor {
            descriptor: descriptor.to_string(),
            message,
        }
    }

    /// Attaches the line number at which a descriptor failed to parse.
    pub(crate) fn at_line(self, line: usize) -> Self {
        match self {
            Self::Descriptor {
                descriptor,
                message,
            } => Self::Format {
                line,
                descriptor,
                message,
            },
            other => other,
        }
    }
}

fn render(error: &ParseError<'_>) -> String {
    match error.found() {
        Some(token) => format!("unexpected {token} at column {}", error.span().start + 1),
        None => "unexpected end of descriptor".to_string(),
    }
}
