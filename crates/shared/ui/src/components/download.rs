use crate::class_list;
use crate::components::Button;
use crate::variants::{ButtonAction, ButtonVariant};
use dioxus::prelude::*;
use ocean_domain::content::DownloadOption;
use ocean_domain::routes::Anchor;

/// Platforms listed when a download section is given no builds of its own.
pub const DEFAULT_DOWNLOADS: &[DownloadOption] = &[
    DownloadOption::coming_soon("Meta Quest 2/3", "🥽"),
    DownloadOption::coming_soon("PC VR (SteamVR)", "💻"),
    DownloadOption::coming_soon("Windows", "🪟"),
    DownloadOption::coming_soon("macOS", "🍎"),
];

const MINIMUM_SETUP: &[&str] =
    &["OpenXR compatible VR headset", "8GB RAM", "GTX 1060 / RX 580 or better", "2GB storage space"];

const RECOMMENDED_SETUP: &[&str] =
    &["Meta Quest 2/3 or PC VR", "16GB RAM", "RTX 2060 / RX 5700 or better", "SSD recommended"];

/// The `#download` band: header, optional release badge, platform cards and
/// system requirements.
#[component]
pub fn DownloadSection(
    #[props(default = "Download VR Experience".to_owned(), into)] title: String,
    #[props(
        default = "Get the latest version of our virtual reality ocean exploration experience".to_owned(),
        into
    )]
    description: String,
    #[props(into)] subtitle: Option<String>,
    #[props(default)] downloads: &'static [DownloadOption],
    #[props(default)] coming_soon: bool,
    #[props(into)] release_date: Option<String>,
    #[props(default, into)] class: String,
) -> Element {
    let classes = class_list(["band", class.as_str()]);
    let (options, grid) = if downloads.is_empty() {
        (DEFAULT_DOWNLOADS, "grid grid-cols-4 download-grid")
    } else {
        (downloads, "grid grid-cols-3 download-grid")
    };
    let badge = release_date.unwrap_or_else(|| "Coming Soon".to_owned());

    rsx! {
        section { id: Anchor::Download.id(), class: "{classes}",
            div { class: "container",
                div { class: "band-heading",
                    h2 { class: "band-title text-gradient", "{title}" }
                    if let Some(subtitle) = subtitle {
                        p { class: "download-subtitle text-accent", "{subtitle}" }
                    }
                    if !description.is_empty() {
                        p { class: "band-subtitle text-secondary", "{description}" }
                    }
                    if coming_soon {
                        div { class: "release-badge",
                            span { class: "release-dot" }
                            span { class: "release-text text-accent", "{badge}" }
                        }
                    }
                }
                div { class: grid,
                    for (index, option) in options.iter().enumerate() {
                        DownloadCard { key: "{index}", option: *option }
                    }
                }
                div { class: "requirements card-solid",
                    h3 { class: "requirements-title text-primary", "System Requirements" }
                    div { class: "requirements-grid",
                        Requirements { heading: "Minimum VR Setup", items: MINIMUM_SETUP }
                        Requirements { heading: "Recommended", items: RECOMMENDED_SETUP }
                    }
                }
            }
        }
    }
}

#[component]
fn Requirements(#[props(into)] heading: String, items: &'static [&'static str]) -> Element {
    rsx! {
        div {
            h4 { class: "requirements-heading text-accent", "{heading}" }
            ul { class: "requirements-list text-secondary",
                for item in items {
                    li { "• {item}" }
                }
            }
        }
    }
}

/// A platform card. Builds that are announced or lack a URL render inert;
/// the rest become a `download` link.
#[component]
pub fn DownloadCard(option: DownloadOption) -> Element {
    let details = rsx! {
        div { class: "download-icon", {option.icon} }
        h3 { class: "download-platform text-accent", {option.platform} }
        if let Some(version) = option.version {
            p { class: "download-version text-secondary", "Version {version}" }
        }
        if let Some(size) = option.size {
            p { class: "download-size text-secondary", {size} }
        }
        if option.coming_soon {
            div { class: "pill",
                span { class: "pill-text text-accent", "Coming Soon" }
            }
        }
    };

    match option.available_url() {
        Some(url) => rsx! {
            a { class: "download-card card-solid card-hover group", href: url, "download": "true",
                {details}
                div { class: "download-cta text-primary", "Download →" }
            }
        },
        None => rsx! {
            div { class: "download-card card-solid download-card-inert", {details} }
        },
    }
}

/// Compact download call to action for sidebars.
#[component]
pub fn QuickDownload(
    #[props(into)] url: Option<String>,
    #[props(default = "Download Demo".to_owned(), into)] label: String,
    #[props(default)] coming_soon: bool,
    #[props(default, into)] class: String,
) -> Element {
    let classes = class_list(["quick-download", "card-solid", class.as_str()]);

    rsx! {
        div { class: "{classes}",
            h3 { class: "quick-download-title text-primary", "Ready to Explore?" }
            if coming_soon {
                p { class: "quick-download-note text-secondary", "Our VR demo is coming soon!" }
                div { class: "quick-download-placeholder text-secondary", "{label}" }
            } else {
                p { class: "quick-download-note text-secondary", "Download our VR experience now" }
                Button {
                    action: ButtonAction::for_url(url.unwrap_or_else(|| Anchor::Download.href().to_owned())),
                    variant: ButtonVariant::Primary,
                    full_width: true,
                    "{label}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render;

    #[test]
    fn empty_downloads_fall_back_to_the_four_platforms() {
        let html = render(rsx! { DownloadSection { coming_soon: true } });

        assert_eq!(html.matches("download-card ").count(), 4);
        for platform in ["Meta Quest 2/3", "PC VR (SteamVR)", "Windows", "macOS"] {
            assert!(html.contains(platform), "{platform} missing");
        }
        assert_eq!(html.matches("download-card-inert").count(), 4);
        assert!(html.contains(r#"id="download""#));
        assert!(html.contains("Download VR Experience"));
        assert!(html.contains("System Requirements"));
    }

    #[test]
    fn release_badge_shows_custom_text() {
        let html = render(rsx! { DownloadSection { coming_soon: true, release_date: "October 2025" } });
        assert!(html.contains("October 2025"));

        let hidden = render(rsx! { DownloadSection {} });
        assert!(!hidden.contains("release-badge"));
    }

    #[test]
    fn explicit_downloads_replace_defaults() {
        const BUILDS: &[DownloadOption] = &[DownloadOption {
            platform: "Windows",
            icon: "🪟",
            version: Some("0.3.0"),
            size: Some("1.2 GB"),
            url: Some("/builds/deep-ocean-win.zip"),
            coming_soon: false,
        }];
        let html = render(rsx! { DownloadSection { downloads: BUILDS } });

        assert_eq!(html.matches("download-card ").count(), 1);
        assert!(html.contains(r#"href="/builds/deep-ocean-win.zip""#));
        assert!(html.contains("download="));
        assert!(html.contains("Version 0.3.0"));
        assert!(!html.contains("Meta Quest 2/3<"));
    }

    #[test]
    fn quick_download_switches_on_coming_soon() {
        let soon = render(rsx! { QuickDownload { coming_soon: true } });
        assert!(soon.contains("Our VR demo is coming soon!"));
        assert!(!soon.contains("<a "));

        let ready = render(rsx! { QuickDownload { url: "/builds/demo.zip", label: "Download for Quest" } });
        assert!(ready.contains(r#"href="/builds/demo.zip""#));
        assert!(ready.contains("btn-full"));
        assert!(ready.contains("Download for Quest"));
    }
}
