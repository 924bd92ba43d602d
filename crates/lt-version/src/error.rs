use miette::SourceSpan;

/// The piece of grammar an input was checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grammar {
    /// `major(.minor(.patch)?)?(-qualifier)?`
    Version,
    /// `[` or `(`, two versions separated by a comma, `]` or `)`.
    Range,
    /// `[A-Za-z0-9_.-]+`
    Qualifier,
}

impl std::fmt::Display for Grammar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Version => write!(f, "version number"),
            Self::Range => write!(f, "version range"),
            Self::Qualifier => write!(f, "version qualifier"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum VersionError {
    #[error("Invalid {grammar} '{input}'")]
    #[diagnostic(
        code(lt::invalid_format),
        help("versions look like `1.2.3-RC1`, ranges look like `[1.0, 2.0)`")
    )]
    InvalidFormat {
        #[source_code]
        input: String,
        grammar: Grammar,
        #[label("unexpected input here")]
        span: SourceSpan,
    },
}

impl VersionError {
    pub(crate) fn invalid_format(input: &str, grammar: Grammar, offset: usize) -> Self {
        tracing::trace!(input, %grammar, offset, "rejected input");

        // Point at a single character, or at the very end for truncated input.
        let len = input[offset.min(input.len())..]
            .chars()
            .next()
            .map_or(0, char::len_utf8);

        Self::InvalidFormat {
            input: input.to_owned(),
            grammar,
            span: SourceSpan::new(offset.into(), len),
        }
    }

    pub fn input(&self) -> &str {
        match self {
            Self::InvalidFormat { input, .. } => input,
        }
    }

    pub fn grammar(&self) -> Grammar {
        match self {
            Self::InvalidFormat { grammar, .. } => *grammar,
        }
    }

    /// Byte offset of the first character the parser could not accept.
    pub fn offset(&self) -> usize {
        match self {
            Self::InvalidFormat { span, .. } => span.offset(),
        }
    }
}
