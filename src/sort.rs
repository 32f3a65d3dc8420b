use crate::error::NavError;
use std::str::FromStr;

/// File display order of the explorer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    Alphabetical,
    AlphabeticalReverse,
    /// Newest first
    ModifiedTime,
    /// Oldest first
    ModifiedTimeReverse,
    /// Newest first
    CreatedTime,
    /// Oldest first
    CreatedTimeReverse,
}

impl SortMode {
    pub const ALL: [SortMode; 6] = [
        SortMode::Alphabetical,
        SortMode::AlphabeticalReverse,
        SortMode::ModifiedTime,
        SortMode::ModifiedTimeReverse,
        SortMode::CreatedTime,
        SortMode::CreatedTimeReverse,
    ];

    /// Preference key as stored by the host.
    pub fn key(&self) -> &'static str {
        match self {
            SortMode::Alphabetical => "alphabetical",
            SortMode::AlphabeticalReverse => "alphabeticalReverse",
            SortMode::ModifiedTime => "byModifiedTime",
            SortMode::ModifiedTimeReverse => "byModifiedTimeReverse",
            SortMode::CreatedTime => "byCreatedTime",
            SortMode::CreatedTimeReverse => "byCreatedTimeReverse",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SortMode::Alphabetical => "name (A to Z)",
            SortMode::AlphabeticalReverse => "name (Z to A)",
            SortMode::ModifiedTime => "modified (new to old)",
            SortMode::ModifiedTimeReverse => "modified (old to new)",
            SortMode::CreatedTime => "created (new to old)",
            SortMode::CreatedTimeReverse => "created (old to new)",
        }
    }

    /// The same ordering criterion with the direction flipped.
    pub fn flipped(&self) -> Self {
        match self {
            SortMode::Alphabetical => SortMode::AlphabeticalReverse,
            SortMode::AlphabeticalReverse => SortMode::Alphabetical,
            SortMode::ModifiedTime => SortMode::ModifiedTimeReverse,
            SortMode::ModifiedTimeReverse => SortMode::ModifiedTime,
            SortMode::CreatedTime => SortMode::CreatedTimeReverse,
            SortMode::CreatedTimeReverse => SortMode::CreatedTime,
        }
    }

    /// Selecting the active criterion again flips it, a new criterion starts unreversed.
    pub fn toggle(current: Option<SortMode>, criterion: SortMode) -> SortMode {
        match current {
            Some(mode) if mode == criterion || mode.flipped() == criterion => mode.flipped(),
            _ => criterion,
        }
    }
}

impl FromStr for SortMode {
    type Err = NavError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        SortMode::ALL
            .into_iter()
            .find(|mode| mode.key() == key)
            .ok_or_else(|| NavError::UnsupportedSortMode(key.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn keys_parse_back() {
        for mode in SortMode::ALL {
            assert_eq!(mode.key().parse::<SortMode>().unwrap(), mode);
        }
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = "bySize".parse::<SortMode>().unwrap_err();
        assert!(matches!(err, NavError::UnsupportedSortMode(ref key) if key == "bySize"));
        assert!("Alphabetical".parse::<SortMode>().is_err());
    }

    #[test]
    fn toggle_flips_same_criterion() {
        assert_eq!(
            SortMode::toggle(Some(SortMode::Alphabetical), SortMode::Alphabetical),
            SortMode::AlphabeticalReverse
        );
        assert_eq!(
            SortMode::toggle(Some(SortMode::AlphabeticalReverse), SortMode::Alphabetical),
            SortMode::Alphabetical
        );
        assert_eq!(
            SortMode::toggle(Some(SortMode::ModifiedTimeReverse), SortMode::CreatedTime),
            SortMode::CreatedTime
        );
        assert_eq!(SortMode::toggle(None, SortMode::ModifiedTime), SortMode::ModifiedTime);
    }
}
