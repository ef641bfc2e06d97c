//! Turns shareable content links into iframe-embeddable URLs.
//!
//! Each [`DemoKind`] has an ordered rule table. The first rule whose host
//! marker appears in the URL and whose rewrite succeeds wins; anything else
//! falls back to the URL as given.

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

const LOOM_SHARE: &str = "loom.com/share/";
const GOOGLE_SLIDES: &str = "docs.google.com/presentation";
const GOOGLE_DRIVE_FILE: &str = "drive.google.com/file";
const GITHUB: &str = "github.com";

static DOCUMENT_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/d/([A-Za-z0-9_-]+)").expect("document id pattern is valid"));

/// What the modal is showing. Picks the rule table and the labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DemoKind {
    Demo,
    Code,
    Paper,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmbedResolution {
    pub embed_url: String,
    pub display_title: String,
    pub footer_label: &'static str,
}

struct EmbedRule {
    name: &'static str,
    marker: &'static str,
    rewrite: fn(&str) -> Option<String>,
}

impl EmbedRule {
    fn apply(&self, url: &str) -> Option<String> {
        if !url.contains(self.marker) {
            return None;
        }
        (self.rewrite)(url)
    }
}

const DEMO_RULES: &[EmbedRule] = &[
    EmbedRule { name: "loom", marker: LOOM_SHARE, rewrite: loom_embed },
    EmbedRule { name: "google-slides", marker: GOOGLE_SLIDES, rewrite: slides_embed },
    EmbedRule { name: "google-drive", marker: GOOGLE_DRIVE_FILE, rewrite: drive_preview },
];

// Code hosts refuse rewrites; the link is rendered as-is.
const CODE_RULES: &[EmbedRule] = &[
    EmbedRule { name: "github", marker: GITHUB, rewrite: unchanged },
];

const PAPER_RULES: &[EmbedRule] = &[
    EmbedRule { name: "google-drive", marker: GOOGLE_DRIVE_FILE, rewrite: drive_preview },
];

impl DemoKind {
    fn rules(self) -> &'static [EmbedRule] {
        match self {
            DemoKind::Demo => DEMO_RULES,
            DemoKind::Code => CODE_RULES,
            DemoKind::Paper => PAPER_RULES,
        }
    }

    pub fn title_suffix(self) -> &'static str {
        match self {
            DemoKind::Demo => "Demo",
            DemoKind::Code => "Code",
            DemoKind::Paper => "Research Paper",
        }
    }
}

pub fn resolve(url: &str, kind: DemoKind, title: &str) -> EmbedResolution {
    EmbedResolution {
        embed_url: embed_url(url, kind),
        display_title: display_title(title, kind),
        footer_label: footer_label(kind),
    }
}

/// Rewrites `url` into the provider's embed format, or returns it unchanged.
pub fn embed_url(url: &str, kind: DemoKind) -> String {
    for rule in kind.rules() {
        if let Some(rewritten) = rule.apply(url) {
            debug!("embed rule {} matched {}", rule.name, url);
            return rewritten;
        }
    }
    url.to_string()
}

pub fn display_title(title: &str, kind: DemoKind) -> String {
    format!("{} {}", title, kind.title_suffix())
}

pub fn footer_label(kind: DemoKind) -> &'static str {
    match kind {
        DemoKind::Demo => "Open in new tab",
        DemoKind::Code => "Open in GitHub",
        DemoKind::Paper => "Open full paper",
    }
}

fn loom_embed(url: &str) -> Option<String> {
    let path = url.split(['?', '#']).next().unwrap_or_default();
    let video_id = path.rsplit('/').next().filter(|id| !id.is_empty())?;
    Some(format!("https://www.loom.com/embed/{}", video_id))
}

fn slides_embed(url: &str) -> Option<String> {
    let id = document_id(url)?;
    Some(format!(
        "https://docs.google.com/presentation/d/{}/embed?start=false&loop=false&delayms=3000",
        id
    ))
}

fn drive_preview(url: &str) -> Option<String> {
    let id = document_id(url)?;
    Some(format!("https://drive.google.com/file/d/{}/preview", id))
}

fn unchanged(url: &str) -> Option<String> {
    Some(url.to_string())
}

fn document_id(url: &str) -> Option<&str> {
    DOCUMENT_ID
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn loom_share_becomes_embed() {
        assert_eq!(
            embed_url("https://www.loom.com/share/abc123def", DemoKind::Demo),
            "https://www.loom.com/embed/abc123def"
        );
    }

    #[test]
    fn loom_query_string_is_dropped() {
        assert_eq!(
            embed_url("https://www.loom.com/share/abc123?sid=42&t=1/2", DemoKind::Demo),
            "https://www.loom.com/embed/abc123"
        );
    }

    #[test]
    fn loom_without_id_falls_back() {
        let url = "https://www.loom.com/share/";
        assert_eq!(embed_url(url, DemoKind::Demo), url);
    }

    #[test]
    fn slides_use_embed_template() {
        assert_eq!(
            embed_url(
                "https://docs.google.com/presentation/d/1AbC-d_E/edit?usp=sharing",
                DemoKind::Demo
            ),
            "https://docs.google.com/presentation/d/1AbC-d_E/embed?start=false&loop=false&delayms=3000"
        );
    }

    #[test]
    fn slides_without_id_fall_through() {
        let url = "https://docs.google.com/presentation/u/0/";
        assert_eq!(embed_url(url, DemoKind::Demo), url);
    }

    #[test]
    fn drive_file_becomes_preview() {
        assert_eq!(
            embed_url("https://drive.google.com/file/d/XyZ_09-a/view?usp=drive_link", DemoKind::Demo),
            "https://drive.google.com/file/d/XyZ_09-a/preview"
        );
    }

    #[test]
    fn paper_uses_drive_preview() {
        assert_eq!(
            embed_url("https://drive.google.com/file/d/paperId/view", DemoKind::Paper),
            "https://drive.google.com/file/d/paperId/preview"
        );
    }

    #[test]
    fn paper_ignores_loom_links() {
        let url = "https://www.loom.com/share/abc";
        assert_eq!(embed_url(url, DemoKind::Paper), url);
    }

    #[test]
    fn code_links_pass_through() {
        let url = "https://github.com/jeremiahcandelaria/ai-chat-app";
        assert_eq!(embed_url(url, DemoKind::Code), url);
        assert_eq!(embed_url("https://gitlab.com/x/y", DemoKind::Code), "https://gitlab.com/x/y");
    }

    #[test]
    fn empty_and_malformed_urls_are_returned() {
        assert_eq!(embed_url("", DemoKind::Demo), "");
        assert_eq!(embed_url("not a url at all", DemoKind::Paper), "not a url at all");
    }

    #[test]
    fn labels_follow_kind() {
        assert_eq!(display_title("Foo", DemoKind::Paper), "Foo Research Paper");
        assert_eq!(display_title("Foo", DemoKind::Demo), "Foo Demo");
        assert_eq!(display_title("Foo", DemoKind::Code), "Foo Code");
        assert_eq!(footer_label(DemoKind::Code), "Open in GitHub");
        assert_eq!(footer_label(DemoKind::Demo), "Open in new tab");
        assert_eq!(footer_label(DemoKind::Paper), "Open full paper");
    }

    #[test]
    fn resolve_bundles_url_and_labels() {
        let resolution = resolve("https://www.loom.com/share/v1", DemoKind::Demo, "Chat");
        assert_eq!(
            resolution,
            EmbedResolution {
                embed_url: "https://www.loom.com/embed/v1".to_string(),
                display_title: "Chat Demo".to_string(),
                footer_label: "Open in new tab",
            }
        );
    }

    fn any_kind() -> impl Strategy<Value = DemoKind> {
        prop_oneof![Just(DemoKind::Demo), Just(DemoKind::Code), Just(DemoKind::Paper)]
    }

    proptest! {
        #[test]
        fn loom_embed_carries_exact_id(id in "[A-Za-z0-9]{1,32}", query in proptest::option::of("[a-z]{1,5}=[a-z0-9/]{0,8}")) {
            let mut url = format!("https://www.loom.com/share/{}", id);
            if let Some(q) = &query {
                url.push('?');
                url.push_str(q);
            }
            let embed = embed_url(&url, DemoKind::Demo);
            prop_assert_eq!(embed, format!("https://www.loom.com/embed/{}", id));
        }

        #[test]
        fn document_hosts_carry_exact_id(id in "[A-Za-z0-9_-]{1,44}", tail in "(edit|view)(\\?usp=sharing)?") {
            let slides = embed_url(&format!("https://docs.google.com/presentation/d/{}/{}", id, tail), DemoKind::Demo);
            prop_assert_eq!(slides, format!("https://docs.google.com/presentation/d/{}/embed?start=false&loop=false&delayms=3000", id));

            let drive = embed_url(&format!("https://drive.google.com/file/d/{}/{}", id, tail), DemoKind::Demo);
            prop_assert_eq!(drive, format!("https://drive.google.com/file/d/{}/preview", id));
        }

        #[test]
        fn unmatched_urls_are_identity_and_idempotent(path in "[a-z0-9/]{0,24}", kind in any_kind()) {
            let url = format!("https://example.org/{}", path);
            let once = embed_url(&url, kind);
            prop_assert_eq!(&once, &url);
            prop_assert_eq!(embed_url(&once, kind), once);
        }
    }
}
