use log::warn;

/// Environment variable names, as set in the plugin settings.
pub mod env_keys {
    pub const API_KEY: &str = "LINEAR_API_KEY";
    pub const SORT_BY: &str = "SORT_BY";
    pub const NUM_RESULTS: &str = "NUM_RESULTS";
}

/// Default number of issues to show.
pub const DEFAULT_NUM_RESULTS: i64 = 5;
/// Bounds for the configured result count.
pub const MIN_NUM_RESULTS: i64 = 1;
pub const MAX_NUM_RESULTS: i64 = 10;

/// Issue orderings accepted by the assigned-issues query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    UpdatedAt,
    CreatedAt,
}

impl SortOrder {
    /// Name used as the GraphQL `orderBy` argument.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::UpdatedAt => "updatedAt",
            SortOrder::CreatedAt => "createdAt",
        }
    }

    /// Parses a plugin settings value. Returns `None` for anything that
    /// is not a known ordering.
    pub fn parse(value: &str) -> Option<SortOrder> {
        match value {
            "updatedAt" => Some(SortOrder::UpdatedAt),
            "createdAt" => Some(SortOrder::CreatedAt),
            _ => None,
        }
    }
}

/// Per-invocation configuration resolved from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Personal API key. `None` when unset or empty.
    pub api_key: Option<String>,
    pub sort_by: SortOrder,
    /// Number of issues to request, always within 1..=10.
    pub num_results: i64,
}

impl Config {
    /// Resolves the configuration through `lookup`, one call per
    /// variable name.
    ///
    /// Invalid values never fail the invocation: an unknown `SORT_BY`
    /// or a non-numeric `NUM_RESULTS` falls back to its default, and a
    /// numeric `NUM_RESULTS` is clamped into 1..=10.
    pub fn from_lookup<F>(lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(env_keys::API_KEY).filter(|key| !key.is_empty());

        let sort_by = match lookup(env_keys::SORT_BY) {
            None => SortOrder::default(),
            Some(value) => SortOrder::parse(&value).unwrap_or_else(|| {
                warn!(
                    "unknown {} value {:?}, using {}",
                    env_keys::SORT_BY,
                    value,
                    SortOrder::default().as_str()
                );
                SortOrder::default()
            }),
        };

        let num_results = match lookup(env_keys::NUM_RESULTS) {
            None => DEFAULT_NUM_RESULTS,
            Some(value) => match value.trim().parse::<i64>() {
                Ok(n) => n.clamp(MIN_NUM_RESULTS, MAX_NUM_RESULTS),
                Err(_) => {
                    warn!(
                        "{} is not a number: {:?}, using {}",
                        env_keys::NUM_RESULTS,
                        value,
                        DEFAULT_NUM_RESULTS
                    );
                    DEFAULT_NUM_RESULTS
                }
            },
        };

        Config {
            api_key,
            sort_by,
            num_results,
        }
    }

    /// Resolves the configuration from the process environment.
    pub fn from_env() -> Config {
        Config::from_lookup(|name| std::env::var(name).ok())
    }
}
