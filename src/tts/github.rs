//! GitHub raw URLs for hosted sprite sheets

use crate::{CardGenError, Result};
use tokio::process::Command;

/// Where sprite sheets are published
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubLocation {
    pub user: String,
    pub repo: String,
    pub branch: String,
    pub prefix: String,
}

impl GitHubLocation {
    pub fn new(user: &str, repo: &str, branch: &str, prefix: &str) -> Self {
        GitHubLocation {
            user: user.to_string(),
            repo: repo.to_string(),
            branch: branch.to_string(),
            prefix: prefix.trim_matches('/').to_string(),
        }
    }

    pub fn raw_url(&self, file: &str) -> String {
        let path = if self.prefix.is_empty() {
            file.to_string()
        } else {
            format!("{}/{file}", self.prefix)
        };
        format!(
            "https://raw.githubusercontent.com/{}/{}/{}/{path}",
            self.user, self.repo, self.branch
        )
    }
}

/// Extract `(user, repo)` from an HTTPS or SSH GitHub remote URL
///
/// The repo name stops at the first `.`, so `.git` suffixes are dropped.
pub fn parse_remote(url: &str) -> Result<(String, String)> {
    let unparsable = || CardGenError::GitRemote(format!("could not parse GitHub URL: {url}"));

    let (_, rest) = url.split_once("github.com").ok_or_else(unparsable)?;
    let rest = rest
        .strip_prefix(':')
        .or_else(|| rest.strip_prefix('/'))
        .ok_or_else(unparsable)?;
    let mut segments = rest.split('/');
    let user = segments.next().filter(|s| !s.is_empty()).ok_or_else(unparsable)?;
    let repo = segments
        .next()
        .and_then(|s| s.split('.').next())
        .filter(|s| !s.is_empty())
        .ok_or_else(unparsable)?;
    Ok((user.to_string(), repo.to_string()))
}

/// Read `remote.origin.url` from git and parse it
pub async fn detect_remote() -> Result<(String, String)> {
    let output = Command::new("git")
        .args(["config", "--get", "remote.origin.url"])
        .output()
        .await
        .map_err(|e| CardGenError::GitRemote(format!("could not run git: {e}")))?;
    if !output.status.success() {
        return Err(CardGenError::GitRemote(
            "no git remote found; set tts.github_user and tts.github_repo".to_string(),
        ));
    }
    parse_remote(String::from_utf8_lossy(&output.stdout).trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_https_remote() {
        assert_eq!(
            parse_remote("https://github.com/dancer/beat-by-beat.git").unwrap(),
            ("dancer".to_string(), "beat-by-beat".to_string())
        );
        assert_eq!(
            parse_remote("https://github.com/dancer/beat-by-beat").unwrap().1,
            "beat-by-beat"
        );
    }

    #[test]
    fn test_parse_ssh_remote() {
        assert_eq!(
            parse_remote("git@github.com:dancer/bbb.git").unwrap(),
            ("dancer".to_string(), "bbb".to_string())
        );
    }

    #[test]
    fn test_unparsable_remote() {
        assert!(matches!(
            parse_remote("https://gitlab.com/dancer/bbb.git"),
            Err(CardGenError::GitRemote(_))
        ));
        assert!(parse_remote("git@github.com:dancer").is_err());
    }

    #[test]
    fn test_raw_url() {
        let loc = GitHubLocation::new("dancer", "bbb", "main", "output/tts/");
        assert_eq!(
            loc.raw_url("move-back.png"),
            "https://raw.githubusercontent.com/dancer/bbb/main/output/tts/move-back.png"
        );
        let bare = GitHubLocation::new("dancer", "bbb", "dev", "");
        assert_eq!(
            bare.raw_url("judge-cards.png"),
            "https://raw.githubusercontent.com/dancer/bbb/dev/judge-cards.png"
        );
    }
}
