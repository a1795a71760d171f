//! Social share link construction and dispatch.
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Characters `encodeURIComponent` leaves untouched, besides alphanumerics.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SharePlatform {
    Facebook,
    Twitter,
    Linkedin,
    Whatsapp,
    Telegram,
}

impl SharePlatform {
    pub const ALL: [Self; 5] = [
        Self::Facebook,
        Self::Twitter,
        Self::Linkedin,
        Self::Whatsapp,
        Self::Telegram,
    ];

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Facebook => "facebook",
            Self::Twitter => "twitter",
            Self::Linkedin => "linkedin",
            Self::Whatsapp => "whatsapp",
            Self::Telegram => "telegram",
        }
    }

    /// URL template; `{url}`, `{title}` and `{description}` are substituted encoded.
    #[must_use]
    pub const fn template(self) -> &'static str {
        match self {
            Self::Facebook => "https://www.facebook.com/sharer/sharer.php?u={url}",
            Self::Twitter => "https://twitter.com/intent/tweet?url={url}&text={title}",
            Self::Linkedin => "https://www.linkedin.com/sharing/share-offsite/?url={url}",
            Self::Whatsapp => "https://wa.me/?text={title}%20{url}",
            Self::Telegram => "https://t.me/share/url?url={url}&text={title}",
        }
    }
}

impl fmt::Display for SharePlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown share platform `{0}`")]
pub struct UnknownPlatform(pub String);

impl FromStr for SharePlatform {
    type Err = UnknownPlatform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|platform| platform.id() == s)
            .ok_or_else(|| UnknownPlatform(s.to_string()))
    }
}

/// The page being shared. The description comes from the page's meta
/// description; none of the built-in templates embed it yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShareContext {
    pub url: String,
    pub title: String,
    pub description: String,
}

/// Percent-encode a value the way `encodeURIComponent` does.
#[must_use]
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

#[must_use]
pub fn share_url(platform: SharePlatform, ctx: &ShareContext) -> String {
    platform
        .template()
        .replace("{url}", &encode_component(&ctx.url))
        .replace("{title}", &encode_component(&ctx.title))
        .replace("{description}", &encode_component(&ctx.description))
}

/// Opens a new browsing context (a popup window in the browser).
pub trait WindowOpener {
    fn open(&self, url: &str, target: &str, features: &str);
}

pub struct ShareDispatcher<W: WindowOpener> {
    opener: W,
    features: String,
}

impl<W: WindowOpener> ShareDispatcher<W> {
    pub fn new(opener: W, features: impl Into<String>) -> Self {
        Self {
            opener,
            features: features.into(),
        }
    }

    /// Open the share popup for `platform_id`. Unknown ids are ignored.
    pub fn dispatch(&self, platform_id: &str, ctx: &ShareContext) -> Option<String> {
        let platform = match platform_id.parse::<SharePlatform>() {
            Ok(platform) => platform,
            Err(err) => {
                log::debug!("share ignored: {err}");
                return None;
            }
        };
        let url = share_url(platform, ctx);
        self.opener.open(&url, "_blank", &self.features);
        Some(url)
    }
}
