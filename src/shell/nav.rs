//! Fixed navigation links rendered by the page chrome.
//!
//! Every link on the shell is a compile-time constant. Templates consume
//! these through [`crate::shell::PageShell`] accessors so the header and the
//! footer can never drift apart on the repository URL.

/// A single chrome link with a stable label and target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    /// Visible text, also used as the accessible name on icon buttons.
    pub label: &'static str,
    /// Absolute target URL.
    pub href: &'static str,
    /// External links open in a new tab with `rel="noopener"`.
    pub external: bool,
}

/// Project repository, linked from both the header and the footer.
pub const REPO_URL: &str = "https://github.com/nutlope/napkins";

/// Maintainer profile on X, linked from the footer only.
pub const PROFILE_URL: &str = "https://x.com/nutlope";

/// Inference provider attribution target. Both footer attribution links
/// share this constant on purpose.
pub const TOGETHER_URL: &str = "https://togetherai.link";

/// Header call-to-action. Hidden on narrow viewports by the stylesheet.
pub const HEADER_REPO_LINK: NavLink = NavLink {
    label: "GitHub",
    href: REPO_URL,
    external: true,
};

/// Footer repository button.
pub const FOOTER_REPO_LINK: NavLink = NavLink {
    label: "GitHub",
    href: REPO_URL,
    external: true,
};

/// Footer profile button.
pub const FOOTER_PROFILE_LINK: NavLink = NavLink {
    label: "X/Twitter",
    href: PROFILE_URL,
    external: true,
};

/// Footer attribution line, in render order.
pub const ATTRIBUTION_LINKS: [NavLink; 2] = [
    NavLink {
        label: "Together AI",
        href: TOGETHER_URL,
        external: true,
    },
    NavLink {
        label: "Llama 4",
        href: TOGETHER_URL,
        external: true,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_and_footer_point_at_the_same_repository() {
        assert_eq!(HEADER_REPO_LINK.href, FOOTER_REPO_LINK.href);
        assert_eq!(HEADER_REPO_LINK.href, REPO_URL);
        assert!(HEADER_REPO_LINK.external);
    }

    #[test]
    fn test_attribution_links_share_target_but_not_label() {
        let [together, llama] = ATTRIBUTION_LINKS;
        assert_eq!(together.href, llama.href);
        assert_eq!(together.href, TOGETHER_URL);
        assert_eq!(together.label, "Together AI");
        assert_eq!(llama.label, "Llama 4");
    }
}
