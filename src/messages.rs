//! The diagnostic message catalogue.
//!
//! Diagnostics are data, not control flow: every malformed construct becomes
//! a `SystemMessage` node in the tree and the parse always runs to
//! completion. Each [`MessageType`] has a stable string identifier (its
//! variant name), a severity derived from that name, and a human-readable
//! message text.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a system message, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Info,
    Warning,
    Error,
    Severe,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Severe => "SEVERE",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every kind of diagnostic the parser can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MessageType {
    SectionWarningOverlineTooShortForTitle,
    SectionWarningUnexpectedTitleOverlineOrTransition,
    SectionWarningUnderlineTooShortForTitle,
    SectionWarningShortOverline,
    SectionWarningShortUnderline,
    SectionErrorInvalidSectionOrTransitionMarker,
    SectionErrorUnexpectedSectionTitle,
    SectionErrorUnexpectedSectionTitleOrTransition,
    SectionErrorIncompleteSectionTitle,
    SectionErrorMissingMatchingUnderlineForOverline,
    SectionErrorOverlineUnderlineMismatch,
    SectionErrorTitleLevelInconsistent,
    InlineMarkupWarningExplicitMarkupWithUnIndent,
}

impl MessageType {
    /// The stable string identifier used in serialized trees.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SectionWarningOverlineTooShortForTitle => "SectionWarningOverlineTooShortForTitle",
            Self::SectionWarningUnexpectedTitleOverlineOrTransition => {
                "SectionWarningUnexpectedTitleOverlineOrTransition"
            }
            Self::SectionWarningUnderlineTooShortForTitle => {
                "SectionWarningUnderlineTooShortForTitle"
            }
            Self::SectionWarningShortOverline => "SectionWarningShortOverline",
            Self::SectionWarningShortUnderline => "SectionWarningShortUnderline",
            Self::SectionErrorInvalidSectionOrTransitionMarker => {
                "SectionErrorInvalidSectionOrTransitionMarker"
            }
            Self::SectionErrorUnexpectedSectionTitle => "SectionErrorUnexpectedSectionTitle",
            Self::SectionErrorUnexpectedSectionTitleOrTransition => {
                "SectionErrorUnexpectedSectionTitleOrTransition"
            }
            Self::SectionErrorIncompleteSectionTitle => "SectionErrorIncompleteSectionTitle",
            Self::SectionErrorMissingMatchingUnderlineForOverline => {
                "SectionErrorMissingMatchingUnderlineForOverline"
            }
            Self::SectionErrorOverlineUnderlineMismatch => "SectionErrorOverlineUnderlineMismatch",
            Self::SectionErrorTitleLevelInconsistent => "SectionErrorTitleLevelInconsistent",
            Self::InlineMarkupWarningExplicitMarkupWithUnIndent => {
                "InlineMarkupWarningExplicitMarkupWithUnIndent"
            }
        }
    }

    /// The severity, derived from the identifier name.
    pub fn severity(&self) -> Severity {
        if self.as_str().contains("Warning") {
            Severity::Warning
        } else {
            Severity::Error
        }
    }

    /// The human-readable message placed in the first `Text` child of the
    /// system message node.
    pub fn message(&self) -> &'static str {
        match self {
            Self::SectionWarningOverlineTooShortForTitle => {
                "Possible incomplete section title.\nTreating the overline as ordinary text because it's so short."
            }
            Self::SectionWarningUnexpectedTitleOverlineOrTransition => {
                "Unexpected possible title overline or transition.\nTreating it as ordinary text because it's so short."
            }
            Self::SectionWarningUnderlineTooShortForTitle => {
                "Possible title underline, too short for the title.\nTreating it as ordinary text because it's so short."
            }
            Self::SectionWarningShortOverline => "Title overline too short.",
            Self::SectionWarningShortUnderline => "Title underline too short.",
            Self::SectionErrorInvalidSectionOrTransitionMarker => {
                "Invalid section title or transition marker."
            }
            Self::SectionErrorUnexpectedSectionTitle => "Unexpected section title.",
            Self::SectionErrorUnexpectedSectionTitleOrTransition => {
                "Unexpected section title or transition."
            }
            Self::SectionErrorIncompleteSectionTitle => "Incomplete section title.",
            Self::SectionErrorMissingMatchingUnderlineForOverline => {
                "Missing matching underline for section title overline."
            }
            Self::SectionErrorOverlineUnderlineMismatch => "Title overline & underline mismatch.",
            Self::SectionErrorTitleLevelInconsistent => "Title level inconsistent.",
            Self::InlineMarkupWarningExplicitMarkupWithUnIndent => {
                "Explicit markup ends without a blank line; unexpected unindent."
            }
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_follows_name() {
        assert_eq!(
            MessageType::SectionWarningShortUnderline.severity(),
            Severity::Warning
        );
        assert_eq!(
            MessageType::SectionErrorOverlineUnderlineMismatch.severity(),
            Severity::Error
        );
        assert_eq!(
            MessageType::InlineMarkupWarningExplicitMarkupWithUnIndent.severity(),
            Severity::Warning
        );
    }

    #[test]
    fn severity_ordering() {
        assert!(Severity::Info < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
        assert!(Severity::Error < Severity::Severe);
    }

    #[test]
    fn identifier_matches_variant() {
        assert_eq!(
            MessageType::SectionErrorTitleLevelInconsistent.as_str(),
            "SectionErrorTitleLevelInconsistent"
        );
    }
}
