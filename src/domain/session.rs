use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// The six named trading windows the dataset tags each record with.
///
/// The variants are ordered the way the windows occur through a UTC day,
/// which is also the order the legend lists them in.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, strum_macros::EnumIter,
)]
pub enum Session {
    AsiaOpen,
    AsiaClose,
    UkOpen,
    UkClose,
    UsOpen,
    UsClose,
}

impl Session {
    /// The exact label used in the CSV `Session` column (and in the legend).
    pub fn label(&self) -> &'static str {
        match self {
            Session::AsiaOpen => "Asia Session (5.30 am)",
            Session::AsiaClose => "Asia Session (9.30 am)",
            Session::UkOpen => "UK Session (1.30 pm)",
            Session::UkClose => "UK Session (5.30 pm)",
            Session::UsOpen => "US Session (9.30 pm)",
            Session::UsClose => "US Session (1.30 am)",
        }
    }

    /// Match a CSV label against the known sessions.
    ///
    /// Unknown labels are tolerated rather than rejected: such records still
    /// count toward the sentiment totals, they just get no background band.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Session::iter().find(|session| session.label() == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_label_round_trips() {
        for session in Session::iter() {
            assert_eq!(
                Session::from_label(session.label()),
                Some(session),
                "label '{}' should map back to its session",
                session.label()
            );
        }
    }

    #[test]
    fn test_unknown_label_is_tolerated() {
        assert_eq!(Session::from_label("Unknown Session"), None);
        assert_eq!(Session::from_label(""), None);
    }

    #[test]
    fn test_label_whitespace_is_trimmed() {
        assert_eq!(
            Session::from_label("  UK Session (1.30 pm) "),
            Some(Session::UkOpen)
        );
    }
}
