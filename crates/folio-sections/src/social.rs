//! Sidebar icons for social links

use folio_content::SocialLink;
use serde::Serialize;
use url::Url;

/// Icon shown for a sidebar link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialIcon {
    /// linkedin.com
    LinkedIn,
    /// github.com
    GitHub,
    /// facebook.com
    Facebook,
    /// instagram.com
    Instagram,
    /// youtube.com
    YouTube,
    /// tiktok.com
    TikTok,
    /// t.me / telegram.me
    Telegram,
    /// medium.com
    Medium,
    /// dev.to
    Dev,
    /// dribbble.com
    Dribbble,
    /// behance.net
    Behance,
    /// `mailto:` links
    Envelope,
    /// Any other web link
    Globe,
}

const HOSTS: [(&str, SocialIcon); 12] = [
    ("linkedin.com", SocialIcon::LinkedIn),
    ("github.com", SocialIcon::GitHub),
    ("facebook.com", SocialIcon::Facebook),
    ("instagram.com", SocialIcon::Instagram),
    ("youtube.com", SocialIcon::YouTube),
    ("tiktok.com", SocialIcon::TikTok),
    ("t.me", SocialIcon::Telegram),
    ("telegram.me", SocialIcon::Telegram),
    ("medium.com", SocialIcon::Medium),
    ("dev.to", SocialIcon::Dev),
    ("dribbble.com", SocialIcon::Dribbble),
    ("behance.net", SocialIcon::Behance),
];

impl SocialIcon {
    /// Icon for a URL, `None` when nothing maps
    ///
    /// Hosts match exactly or as a parent domain (`www.github.com` is GitHub).
    #[must_use]
    pub fn for_url(raw: &str) -> Option<Self> {
        let url = Url::parse(raw.trim()).ok()?;
        match url.scheme() {
            "mailto" => Some(Self::Envelope),
            "http" | "https" => {
                let host = url.host_str()?.to_ascii_lowercase();
                let icon = HOSTS
                    .iter()
                    .find(|(domain, _)| host == *domain || host.ends_with(&format!(".{domain}")))
                    .map_or(Self::Globe, |(_, icon)| *icon);
                Some(icon)
            }
            _ => None,
        }
    }

    /// CSS class suffix and accessible name
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LinkedIn => "linkedin",
            Self::GitHub => "github",
            Self::Facebook => "facebook",
            Self::Instagram => "instagram",
            Self::YouTube => "youtube",
            Self::TikTok => "tiktok",
            Self::Telegram => "telegram",
            Self::Medium => "medium",
            Self::Dev => "dev",
            Self::Dribbble => "dribbble",
            Self::Behance => "behance",
            Self::Envelope => "envelope",
            Self::Globe => "globe",
        }
    }
}

/// Links that have an icon, paired with it
pub fn iconed(links: &[SocialLink]) -> impl Iterator<Item = (&SocialLink, SocialIcon)> {
    links
        .iter()
        .filter_map(|link| SocialIcon::for_url(&link.url).map(|icon| (link, icon)))
}
