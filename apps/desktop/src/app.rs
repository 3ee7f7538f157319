use crate::directory::DirectoryPage;
use crate::format;
use crate::wizard::RegistrationWizard;
use dioxus::prelude::*;
use seva::domain::config::ClientConfig;
use seva::domain::stats::ImpactStats;
use seva::features::directory::{DirectoryKind, StatsCache, StatsSource, fetch_stats};
use seva::features::identity::{AuthenticatedUser, Session};
use seva::features::registration::FlowKind;
use seva::kernel::api::ApiClient;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Page {
    Home,
    Register(FlowKind),
    Directory(DirectoryKind),
}

/// Root component: navigation bar plus the current page.
#[component]
pub fn App() -> Element {
    let session = use_context::<Session>();
    // Mirrors the session so the header re-renders after an auto-login.
    let signed_in: Signal<Option<AuthenticatedUser>> =
        use_context_provider(|| Signal::new(session.current()));
    let page = use_signal(|| Page::Home);

    let user = format::signed_in_label(signed_in.read().as_ref());
    let current = page();

    rsx! {
        header { class: "topbar",
            h1 { "Seva Trust" }
            nav {
                NavButton { label: "Home", target: Page::Home, page }
                NavButton { label: "Become a Volunteer", target: Page::Register(FlowKind::Volunteer), page }
                NavButton { label: "Join as SN Arya Mitra", target: Page::Register(FlowKind::AryaMitra), page }
                NavButton { label: "Volunteers", target: Page::Directory(DirectoryKind::Volunteers), page }
                NavButton { label: "SN Arya Mitras", target: Page::Directory(DirectoryKind::AryaMitras), page }
            }
            if let Some(user) = user {
                span { class: "signed-in", "{user}" }
            }
        }
        main {
            match current {
                Page::Home => rsx! { Home {} },
                Page::Register(flow) => rsx! { RegistrationWizard { key: "{flow}", flow } },
                Page::Directory(kind) => rsx! { DirectoryPage { key: "{kind}", kind } },
            }
        }
    }
}

#[component]
fn NavButton(label: &'static str, target: Page, mut page: Signal<Page>) -> Element {
    let class = if page() == target { "nav active" } else { "nav" };
    rsx! {
        button { class: "{class}", onclick: move |_| page.set(target), "{label}" }
    }
}

#[component]
fn Home() -> Element {
    let client = use_context::<ApiClient>();
    let config = use_context::<ClientConfig>();
    let stats = use_resource(move || {
        let client = client.clone();
        let cache = StatsCache::new(&config.storage.data_dir);
        async move { fetch_stats(&client, &cache).await }
    });

    let banner = match &*stats.read() {
        Some(Some((stats, source))) => {
            rsx! { StatsBanner { stats: *stats, cached: *source == StatsSource::Cached } }
        },
        Some(None) => rsx! {},
        None => rsx! { p { class: "muted", "Loading impact numbers..." } },
    };

    rsx! {
        section { class: "hero",
            h2 { "Serve your district" }
            p { "Register as a volunteer or as an SN Arya Mitra, or find help near you." }
        }
        {banner}
    }
}

#[component]
fn StatsBanner(stats: ImpactStats, cached: bool) -> Element {
    let figures = [
        ("Donors", format::grouped(stats.donors)),
        ("Volunteers", format::grouped(stats.volunteers)),
        ("Campaigns", format::grouped(stats.campaigns)),
        ("Beneficiaries", format::grouped(stats.beneficiaries)),
        ("Funds raised (₹)", format::grouped(stats.funds_raised)),
    ];

    rsx! {
        section { class: "stats",
            for (caption, value) in figures {
                div { key: "{caption}", class: "stat",
                    strong { "{value}" }
                    span { "{caption}" }
                }
            }
            if cached {
                p { class: "muted", "Showing the last numbers we could load." }
            }
        }
    }
}
