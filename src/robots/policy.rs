//! Robots.txt policy wrapper over the robotstxt crate

use robotstxt::DefaultMatcher;

/// Crawls identify themselves to robots rules as the wildcard agent.
const WILDCARD_AGENT: &str = "*";

/// Per-site exclusion ruleset
///
/// Wraps raw robots.txt content and answers allow/deny queries with the
/// robotstxt crate's matcher. An `allow_all` policy stands in whenever the
/// declaration could not be fetched.
#[derive(Debug, Clone)]
pub struct RobotsPolicy {
    /// Raw robots.txt content
    content: String,
    /// True when no ruleset applies (fetch failed or robots checking is moot)
    allow_all: bool,
}

impl RobotsPolicy {
    /// Creates a policy from raw robots.txt content
    pub fn from_content(content: &str) -> Self {
        Self {
            content: content.to_string(),
            allow_all: false,
        }
    }

    /// Creates a permissive policy that allows every URL
    ///
    /// This is the fail-open default when robots.txt cannot be fetched.
    pub fn allow_all() -> Self {
        Self {
            content: String::new(),
            allow_all: true,
        }
    }

    /// Checks whether a URL may be fetched under this policy
    ///
    /// Matching uses the wildcard user-agent. Empty content allows all, which
    /// matches how an absent robots.txt behaves on the live web.
    pub fn is_allowed(&self, url: &str) -> bool {
        if self.allow_all || self.content.is_empty() {
            return true;
        }

        let mut matcher = DefaultMatcher::default();
        matcher.one_agent_allowed_by_robots(&self.content, WILDCARD_AGENT, url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allow_all() {
        let policy = RobotsPolicy::allow_all();
        assert!(policy.is_allowed("http://x.com/any/path"));
        assert!(policy.is_allowed("http://x.com/admin"));
    }

    #[test]
    fn test_empty_content_allows_all() {
        let policy = RobotsPolicy::from_content("");
        assert!(policy.is_allowed("http://x.com/page"));
    }

    #[test]
    fn test_disallow_all() {
        let policy = RobotsPolicy::from_content("User-agent: *\nDisallow: /");
        assert!(!policy.is_allowed("http://x.com/"));
        assert!(!policy.is_allowed("http://x.com/page"));
    }

    #[test]
    fn test_disallow_prefix() {
        let policy = RobotsPolicy::from_content("User-agent: *\nDisallow: /admin");
        assert!(policy.is_allowed("http://x.com/page"));
        assert!(!policy.is_allowed("http://x.com/admin"));
        assert!(!policy.is_allowed("http://x.com/admin/users"));
    }

    #[test]
    fn test_allow_overrides_disallow() {
        let policy = RobotsPolicy::from_content(
            "User-agent: *\nDisallow: /private\nAllow: /private/public",
        );
        assert!(!policy.is_allowed("http://x.com/private"));
        assert!(policy.is_allowed("http://x.com/private/public"));
    }

    #[test]
    fn test_rules_for_other_agents_ignored() {
        // Only the wildcard group binds this crawler.
        let policy =
            RobotsPolicy::from_content("User-agent: BadBot\nDisallow: /\n\nUser-agent: *\nAllow: /");
        assert!(policy.is_allowed("http://x.com/page"));
    }

    #[test]
    fn test_garbage_content_fails_open() {
        let policy = RobotsPolicy::from_content("this is not valid robots.txt {{{");
        assert!(policy.is_allowed("http://x.com/any/path"));
    }
}
