use serde::{Deserialize, Serialize};

/// Public profile counters shown on the About page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GithubStats {
    pub public_repos: u32,
    pub followers: u32,
    pub following: u32,
}

impl GithubStats {
    /// Substituted when the profile API cannot be reached.
    pub fn fallback() -> GithubStats {
        return GithubStats {
            public_repos: 15,
            followers: 42,
            following: 38,
        };
    }
}
