//! User profiles: declared interests plus optional location data.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The slice of a user's profile that ranking and filtering read.
///
/// Interests are free-form labels chosen during onboarding; their order is
/// irrelevant. `location` feeds the location factor and `country` drives
/// local task visibility and reward currency.
///
/// # Examples
/// ```
/// use storyverse_core::UserProfile;
///
/// let profile = UserProfile::new("user-1")
///     .with_interests(["tech", "food"])
///     .with_country("India");
/// assert!(profile.has_interests());
/// assert_eq!(profile.country.as_deref(), Some("India"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UserProfile {
    /// Identifier of the user.
    pub user_id: String,
    /// Declared interest labels.
    #[cfg_attr(feature = "serde", serde(default))]
    pub interests: Vec<String>,
    /// Free-form location on file, if any.
    #[cfg_attr(feature = "serde", serde(default))]
    pub location: Option<String>,
    /// Country of residence, if any.
    #[cfg_attr(feature = "serde", serde(default))]
    pub country: Option<String>,
}

impl UserProfile {
    /// Construct a profile with no interests or location.
    #[must_use]
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            ..Self::default()
        }
    }

    /// Replace the interest list while returning `self` for chaining.
    #[must_use]
    pub fn with_interests<I, T>(mut self, interests: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.interests = interests.into_iter().map(Into::into).collect();
        self
    }

    /// Set the location while returning `self` for chaining.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Set the country while returning `self` for chaining.
    #[must_use]
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Report whether any interests are declared.
    #[must_use]
    pub fn has_interests(&self) -> bool {
        !self.interests.is_empty()
    }

    /// Return the location when it is present and not blank.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.location
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }
}
