use miette::{Diagnostic, SourceSpan};
use std::{
    error::Error,
    fmt::{Display, Formatter, Result},
};

#[derive(Debug, Diagnostic)]
pub enum HexhueError {
    #[diagnostic(
        code(hexhue::invalid_format),
        url(docsrs),
        help("expected rgb, rgba, rrggbb or rrggbbaa hex digits, optionally prefixed with `#` or `0x`")
    )]
    InvalidFormat {
        #[source_code]
        src: String,
        #[label("not a hex color code")]
        err_span: SourceSpan,
    },
}

pub type HexhueResult<T> = std::result::Result<T, HexhueError>;

impl Display for HexhueError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            HexhueError::InvalidFormat { src, .. } => {
                write!(f, "Invalid format string: '{}'", src)
            }
        }
    }
}

impl Error for HexhueError {}

impl HexhueError {
    /// Labels the whole of `src` as the offending input.
    pub fn invalid_format(src: impl Into<String>) -> Self {
        let src = src.into();
        let err_span = (0, src.len()).into();
        Self::InvalidFormat { src, err_span }
    }

    pub fn is_invalid_format(&self) -> bool {
        matches!(self, HexhueError::InvalidFormat { .. })
    }
}
