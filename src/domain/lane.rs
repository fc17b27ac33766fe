//! The two independent filter dimensions.

/// One of the two independent filter dimensions a button belongs to.
///
/// Every filter button is wired to exactly one lane at construction time.
/// The two lanes hold separate active-tag lists and are combined with a
/// logical AND when deciding item visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lane {
    /// The primary filter dimension.
    Primary,
    /// The secondary filter dimension.
    Secondary,
}

impl Lane {
    /// Returns the lane name as used in logs and class names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
        }
    }
}

impl std::fmt::Display for Lane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
