//! Error types with diagnostics using miette
//!
//! Measurement errors name the element that could not be resolved; parse
//! errors carry the offending option string and a span into it.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::types::NumericError;

// ============================================================================
// Measurement Errors
// ============================================================================

/// The metrics provider could not produce data for an element.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum MeasureError {
    #[error("element {element} is not attached to the document")]
    #[diagnostic(
        code(boxplace::measure::detached),
        help("measure only elements that are connected to the measured document")
    )]
    Detached { element: String },

    #[error("unknown element {element}")]
    #[diagnostic(code(boxplace::measure::unknown_element))]
    UnknownElement { element: String },

    #[error("metrics for element {element} are invalid")]
    #[diagnostic(code(boxplace::measure::invalid_metrics))]
    InvalidMetrics {
        element: String,
        #[source]
        source: NumericError,
    },
}

impl MeasureError {
    pub fn detached(element: &impl std::fmt::Debug) -> Self {
        MeasureError::Detached { element: format!("{element:?}") }
    }

    pub fn unknown(element: &impl std::fmt::Debug) -> Self {
        MeasureError::UnknownElement { element: format!("{element:?}") }
    }

    pub fn invalid(element: &impl std::fmt::Debug, source: NumericError) -> Self {
        MeasureError::InvalidMetrics { element: format!("{element:?}"), source }
    }
}

// ============================================================================
// Parse Errors
// ============================================================================

/// Errors from the option-string parsers.
#[derive(Error, Diagnostic, Debug)]
pub enum ParseError {
    #[error("malformed {what}: {message}")]
    #[diagnostic(code(boxplace::parse::malformed))]
    Malformed {
        what: &'static str,
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: SourceSpan,
    },

    #[error("{what} takes at most two values, got {count}")]
    #[diagnostic(
        code(boxplace::parse::too_many_values),
        help("give one value for both axes, or a horizontal then a vertical value")
    )]
    TooManyValues {
        what: &'static str,
        count: usize,
        #[source_code]
        src: NamedSource<String>,
        #[label("unexpected value")]
        span: SourceSpan,
    },
}

impl ParseError {
    pub(crate) fn malformed(
        what: &'static str,
        input: &str,
        message: impl Into<String>,
        span: impl Into<SourceSpan>,
    ) -> Self {
        ParseError::Malformed {
            what,
            message: message.into(),
            src: NamedSource::new(what, input.to_string()),
            span: span.into(),
        }
    }

    pub(crate) fn too_many(
        what: &'static str,
        input: &str,
        count: usize,
        span: impl Into<SourceSpan>,
    ) -> Self {
        ParseError::TooManyValues {
            what,
            count,
            src: NamedSource::new(what, input.to_string()),
            span: span.into(),
        }
    }
}
