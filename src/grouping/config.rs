//! Grouping parameters.

use crate::error::ConfigError;

/// Parameters of a grouping problem.
///
/// `num_people` people are split into `num_people / group_size` groups on
/// each of `num_days` days, and no pair may share a group on more than
/// `repeats_allowed` days.
///
/// # Examples
///
/// ```
/// use u_grouping::grouping::GroupingConfig;
///
/// let config = GroupingConfig::default()
///     .with_num_people(12)
///     .with_group_size(3)
///     .with_num_days(4)
///     .with_repeats_allowed(1);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.num_groups(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupingConfig {
    /// Number of people. Identifiers run from 1 to `num_people`.
    pub num_people: u32,
    /// Members per group. Must divide `num_people`.
    pub group_size: u32,
    /// Number of days.
    pub num_days: u32,
    /// Maximum number of days any pair may share a group. 0 is allowed.
    pub repeats_allowed: u32,
}

impl Default for GroupingConfig {
    fn default() -> Self {
        Self {
            num_people: 24,
            group_size: 6,
            num_days: 6,
            repeats_allowed: 2,
        }
    }
}

impl GroupingConfig {
    /// Creates a config from all four parameters.
    pub fn new(num_people: u32, group_size: u32, num_days: u32, repeats_allowed: u32) -> Self {
        Self {
            num_people,
            group_size,
            num_days,
            repeats_allowed,
        }
    }

    pub fn with_num_people(mut self, n: u32) -> Self {
        self.num_people = n;
        self
    }

    pub fn with_group_size(mut self, n: u32) -> Self {
        self.group_size = n;
        self
    }

    pub fn with_num_days(mut self, n: u32) -> Self {
        self.num_days = n;
        self
    }

    pub fn with_repeats_allowed(mut self, n: u32) -> Self {
        self.repeats_allowed = n;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_people == 0 {
            return Err(ConfigError::ZeroPeople);
        }
        if self.group_size == 0 {
            return Err(ConfigError::ZeroGroupSize);
        }
        if self.num_days == 0 {
            return Err(ConfigError::ZeroDays);
        }
        if self.num_people % self.group_size != 0 {
            return Err(ConfigError::NotDivisible {
                num_people: self.num_people,
                group_size: self.group_size,
            });
        }
        if self.model_size().is_none() {
            return Err(ConfigError::TooLarge {
                num_people: self.num_people,
                num_days: self.num_days,
            });
        }
        Ok(())
    }

    /// Variable and constraint counts of the model for this config, or
    /// `None` if either does not fit in `usize`.
    ///
    /// Every size computed by the model builder is bounded by one of these
    /// two totals.
    pub fn model_size(&self) -> Option<(usize, usize)> {
        let n = self.num_people as usize;
        let days = self.num_days as usize;
        let groups = self.num_groups() as usize;
        let pairs = n.checked_mul(n.saturating_sub(1))? / 2;

        let x = days.checked_mul(groups)?.checked_mul(n)?;
        let y = days.checked_mul(pairs)?;
        let vars = x.checked_add(y)?;

        let constraints = days
            .checked_mul(n)?
            .checked_add(days.checked_mul(groups)?)?
            .checked_add(y.checked_mul(groups)?)?
            .checked_add(pairs)?;
        Some((vars, constraints))
    }

    /// Number of groups per day. Only meaningful for a valid config.
    pub fn num_groups(&self) -> u32 {
        self.num_people.checked_div(self.group_size).unwrap_or(0)
    }

    /// Number of unordered pairs of people, `C(num_people, 2)`.
    pub fn num_pairs(&self) -> usize {
        let n = self.num_people as usize;
        n * n.saturating_sub(1) / 2
    }
}
