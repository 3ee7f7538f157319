use dioxus::prelude::*;
use seva::domain::directory::DirectoryEntry;
use seva::domain::icons::IconKey;
use seva::features::directory::{
    Choice, DirectoryClient, DirectoryKind, DirectoryView, LoadState, SortOrder,
};
use seva::kernel::api::ApiClient;
use std::str::FromStr;
use strum::IntoEnumIterator;

#[component]
pub(crate) fn DirectoryPage(kind: DirectoryKind) -> Element {
    let client = use_context::<ApiClient>();
    let mut view = use_signal(DirectoryView::new);
    let mut attempt = use_signal(|| 0_u32);

    let _load = use_resource(move || {
        let client = DirectoryClient::new(client.clone());
        let attempt = attempt();
        async move {
            tracing::debug!(%kind, attempt, "Loading directory");
            view.write().mark_loading();
            let listing = client.fetch(kind).await;
            view.write().set_listing(listing);
        }
    });

    let catalog = kind.tag_catalog();
    let (criteria, order, regions, sub_regions) = {
        let state = view.read();
        (
            state.criteria.clone(),
            state.order,
            state.region_options().into_iter().map(str::to_owned).collect::<Vec<_>>(),
            state.sub_region_options().into_iter().map(str::to_owned).collect::<Vec<_>>(),
        )
    };

    let tag_options: Vec<(&str, &str, bool)> = catalog
        .iter()
        .map(|tag| (tag.key, tag.label, criteria.tag.as_option().is_some_and(|t| t == tag.key)))
        .collect();
    let region_options: Vec<(String, bool)> = regions
        .into_iter()
        .map(|r| {
            let selected = criteria.region.as_option().is_some_and(|c| c.eq_ignore_ascii_case(&r));
            (r, selected)
        })
        .collect();
    let sub_region_options: Vec<(String, bool)> = sub_regions
        .into_iter()
        .map(|s| {
            let selected = criteria.sub_region.as_option().is_some_and(|c| c.eq_ignore_ascii_case(&s));
            (s, selected)
        })
        .collect();
    let orders: Vec<(String, &str, bool)> =
        SortOrder::iter().map(|o| (o.to_string(), o.label(), o == order)).collect();
    let postal = criteria.postal_code.as_option().cloned().unwrap_or_default();
    let search = criteria.search.clone();
    let no_region = criteria.region.is_all();
    let filters = criteria.active_count();

    let body = {
        let state = view.read();
        match state.state() {
            LoadState::Loading => rsx! { p { class: "muted", "Loading {kind}..." } },
            LoadState::Unavailable(message) => rsx! {
                div { class: "banner error",
                    "{message}"
                    button { onclick: move |_| *attempt.write() += 1, "Retry" }
                }
            },
            LoadState::Empty => rsx! { p { class: "muted", "No {kind} registered yet." } },
            LoadState::NoMatches => rsx! {
                p { class: "muted", "No {kind} match these filters." }
                button { onclick: move |_| view.write().criteria.reset(), "Clear filters" }
            },
            LoadState::Entries(entries) => {
                let count = entries.len();
                let cards: Vec<DirectoryEntry> = entries.into_iter().cloned().collect();
                rsx! {
                    p { class: "muted", "{count} shown" }
                    div { class: "grid",
                        {cards.into_iter().map(|entry| {
                            let id = entry.id.clone();
                            rsx! { EntryCard { key: "{id}", entry, kind } }
                        })}
                    }
                }
            },
        }
    };

    rsx! {
        section { class: "directory",
            h2 { "{kind}" }
            div { class: "filters",
                select {
                    onchange: move |evt: FormEvent| view.write().criteria.tag = Choice::parse(&evt.value()),
                    option { value: "all", "All services" }
                    for (value, text, selected) in tag_options {
                        option { key: "{value}", value: "{value}", selected: selected, "{text}" }
                    }
                }
                select {
                    onchange: move |evt: FormEvent| {
                        view.write().criteria.set_region(Choice::parse(&evt.value()));
                    },
                    option { value: "all", "All districts" }
                    for (name, selected) in region_options {
                        option { key: "{name}", value: "{name}", selected: selected, "{name}" }
                    }
                }
                select {
                    disabled: no_region,
                    onchange: move |evt: FormEvent| {
                        view.write().criteria.sub_region = Choice::parse(&evt.value());
                    },
                    option { value: "all", "All talukas" }
                    for (name, selected) in sub_region_options {
                        option { key: "{name}", value: "{name}", selected: selected, "{name}" }
                    }
                }
                input {
                    placeholder: "Pincode",
                    value: "{postal}",
                    oninput: move |evt: FormEvent| {
                        view.write().criteria.postal_code = Choice::parse(&evt.value());
                    },
                }
                input {
                    placeholder: "Search by name or place",
                    value: "{search}",
                    oninput: move |evt: FormEvent| view.write().criteria.search = evt.value(),
                }
                select {
                    onchange: move |evt: FormEvent| {
                        view.write().order = SortOrder::from_str(&evt.value()).unwrap_or_default();
                    },
                    for (value, text, selected) in orders {
                        option { key: "{value}", value: "{value}", selected: selected, "{text}" }
                    }
                }
                if filters > 0 {
                    button { onclick: move |_| view.write().criteria.reset(), "Reset ({filters})" }
                }
            }
            {body}
        }
    }
}

#[component]
fn EntryCard(entry: DirectoryEntry, kind: DirectoryKind) -> Element {
    let catalog = kind.tag_catalog();
    let region = entry.display_region();
    let tags: Vec<(String, &str, String)> = entry
        .tags
        .iter()
        .map(|key| {
            let glyph = catalog.get(key).map_or("•", |tag| IconKey::from(tag.icon).glyph());
            (key.clone(), glyph, catalog.label(key).to_owned())
        })
        .collect();

    rsx! {
        article { class: "card",
            h3 { "{entry.name}" }
            if let Some(organisation) = &entry.organisation {
                p { class: "organisation", "{organisation}" }
            }
            p { class: "region", "{region}" }
            if !entry.postal_code.is_empty() {
                p { class: "postal", "PIN {entry.postal_code}" }
            }
            ul { class: "tags",
                for (key, glyph, text) in tags {
                    li { key: "{key}", "{glyph} {text}" }
                }
            }
            if let Some(phone) = &entry.phone {
                a { href: "tel:{phone}", "{phone}" }
            }
        }
    }
}
