//! The multi-step registration form.

use crate::format;
use dioxus::prelude::*;
use seva::domain::icons::IconKey;
use seva::domain::registration::{Attachment, Availability, Gender, IdKind};
use seva::features::identity::{AuthenticatedUser, Session};
use seva::features::registration::{
    Field, FlowKind, FormSession, SubmissionAdapter, Submitter,
};
use seva::kernel::api::ApiClient;
use tracing::{debug, warn};

#[component]
pub(crate) fn RegistrationWizard(flow: FlowKind) -> Element {
    let mut form = use_signal(|| FormSession::new(flow));
    let client = use_context::<ApiClient>();
    let session = use_context::<Session>();
    let mut signed_in = use_context::<Signal<Option<AuthenticatedUser>>>();

    let submit = move |_: MouseEvent| {
        let payload = match form.write().begin_submit() {
            Ok(payload) => payload,
            Err(refused) => {
                debug!(%flow, %refused, "Submit refused");
                return;
            },
        };
        let adapter = SubmissionAdapter::new(client.clone());
        let session = session.clone();

        spawn(async move {
            let outcome = adapter.submit(payload).await;
            if let Ok(receipt) = &outcome
                && let Some(credentials) = receipt.auto_login.clone()
            {
                match session.login(credentials) {
                    Ok(()) => signed_in.set(session.current()),
                    Err(err) => warn!(error = %err, "Auto-login refused"),
                }
            }
            form.write().finish_submit(outcome);
        });
    };

    let (step, total, section, fields, is_first, is_last, submitting, banner) = {
        let state = form.read();
        let nav = state.navigator();
        let section = nav.section();
        (
            nav.current(),
            nav.total(),
            section.title(),
            section.fields(),
            nav.is_first(),
            nav.is_last(),
            state.is_submitting(),
            format::status_banner(state.status()),
        )
    };
    let title = flow.title();

    rsx! {
        section { class: "wizard",
            h2 { "{title}" }
            p { class: "steps", "Step {step} of {total}: {section}" }
            if let Some((kind, message)) = banner {
                div { class: "banner {kind}", "{message}" }
            }
            div { class: "fields",
                for field in fields.iter().copied() {
                    FieldInput { key: "{field}", form, field }
                }
            }
            div { class: "actions",
                button {
                    disabled: is_first || submitting,
                    onclick: move |_| form.write().previous(),
                    "Back"
                }
                if is_last {
                    button { class: "primary", disabled: submitting, onclick: submit,
                        if submitting { "Submitting..." } else { "Submit" }
                    }
                } else {
                    button {
                        class: "primary",
                        onclick: move |_| {
                            if !form.write().next() {
                                debug!(%flow, "Step has errors");
                            }
                        },
                        "Next"
                    }
                }
            }
        }
    }
}

#[component]
fn FieldInput(form: Signal<FormSession>, field: Field) -> Element {
    let error = form.read().errors().get(field).map(str::to_owned);
    let class = if error.is_some() { "field invalid" } else { "field" };
    let label = field.label();

    let control = match field {
        Field::Gender => rsx! { GenderSelect { form } },
        Field::IdKind => rsx! { IdKindSelect { form } },
        Field::Region | Field::SubRegion => rsx! { LocationSelect { form, field } },
        Field::IdDocument | Field::Photo => rsx! { FileInput { form, field } },
        Field::Interests | Field::Services => rsx! { TagPicker { form, field } },
        Field::Availability => rsx! { AvailabilityPicker { form } },
        Field::Consent => rsx! { ConsentBox { form } },
        Field::Address | Field::Skills | Field::Motivation | Field::Experience => {
            rsx! { TextInput { form, field, multiline: true } }
        },
        _ => rsx! { TextInput { form, field, multiline: false } },
    };

    rsx! {
        div { class: "{class}",
            label { "{label}" }
            {control}
            if let Some(message) = error {
                p { class: "error", "{message}" }
            }
        }
    }
}

#[component]
fn TextInput(mut form: Signal<FormSession>, field: Field, multiline: bool) -> Element {
    let value = form.read().draft().text(field).unwrap_or_default().to_owned();
    let kind = match field {
        Field::Email => "email",
        Field::Phone | Field::AlternatePhone | Field::EmergencyPhone => "tel",
        Field::Age => "number",
        _ => "text",
    };
    let mut edit = move |value: String| {
        let mut state = form.write();
        state.draft_mut().set_text(field, value);
        state.dismiss_error(field);
    };

    if multiline {
        rsx! {
            textarea { value: "{value}", oninput: move |evt: FormEvent| edit(evt.value()) }
        }
    } else {
        rsx! {
            input { r#type: kind, value: "{value}", oninput: move |evt: FormEvent| edit(evt.value()) }
        }
    }
}

#[component]
fn GenderSelect(mut form: Signal<FormSession>) -> Element {
    let current = form.read().draft().gender;
    let options: Vec<(&str, &str, bool)> =
        Gender::ALL.iter().map(|g| (g.as_str(), g.label(), current == Some(*g))).collect();

    rsx! {
        select {
            onchange: move |evt: FormEvent| {
                let mut state = form.write();
                state.draft_mut().gender = Gender::parse(&evt.value());
                state.dismiss_error(Field::Gender);
            },
            option { value: "", selected: current.is_none(), "Select..." }
            for (value, text, selected) in options {
                option { key: "{value}", value: "{value}", selected: selected, "{text}" }
            }
        }
    }
}

#[component]
fn IdKindSelect(mut form: Signal<FormSession>) -> Element {
    let current = form.read().draft().id_kind;
    let options: Vec<(&str, &str, bool)> =
        IdKind::ALL.iter().map(|k| (k.as_str(), k.label(), current == Some(*k))).collect();

    rsx! {
        select {
            onchange: move |evt: FormEvent| {
                let mut state = form.write();
                state.draft_mut().id_kind = IdKind::parse(&evt.value());
                state.dismiss_error(Field::IdKind);
                state.dismiss_error(Field::IdNumber);
            },
            option { value: "", selected: current.is_none(), "Select..." }
            for (value, text, selected) in options {
                option { key: "{value}", value: "{value}", selected: selected, "{text}" }
            }
        }
    }
}

/// District or taluka dropdown. The taluka list always follows the chosen district.
#[component]
fn LocationSelect(mut form: Signal<FormSession>, field: Field) -> Element {
    let (current, options): (Option<&'static str>, Vec<&'static str>) = {
        let state = form.read();
        let location = &state.draft().location;
        if field == Field::Region {
            (location.region(), location.catalog().regions().collect())
        } else {
            (location.sub_region(), location.available_sub_regions().to_vec())
        }
    };
    let placeholder = match (field, options.is_empty()) {
        (Field::Region, _) => "Select district",
        (_, true) => "Select a district first",
        (_, false) => "Select taluka",
    };
    let disabled = options.is_empty();

    rsx! {
        select {
            disabled: disabled,
            onchange: move |evt: FormEvent| {
                let value = evt.value();
                let mut state = form.write();
                let location = &mut state.draft_mut().location;
                let changed = match (field, value.as_str()) {
                    (Field::Region, "") => {
                        location.clear();
                        true
                    },
                    (Field::Region, name) => location.set_region(name),
                    (_, "") => {
                        location.clear_sub_region();
                        true
                    },
                    (_, name) => location.set_sub_region(name),
                };
                if changed {
                    state.dismiss_error(field);
                }
            },
            option { value: "", selected: current.is_none(), "{placeholder}" }
            for name in options {
                option { key: "{name}", value: "{name}", selected: current == Some(name), "{name}" }
            }
        }
    }
}

#[component]
fn FileInput(mut form: Signal<FormSession>, field: Field) -> Element {
    let summary = form.read().draft().attachment(field).map(format::attachment_summary);

    rsx! {
        input {
            r#type: "file",
            accept: ".jpg,.jpeg,.png,.pdf",
            onchange: move |evt: FormEvent| async move {
                let Some(file) = evt.files().into_iter().next() else {
                    return;
                };
                let name = file.name();
                match file.read_bytes().await {
                    Ok(bytes) => {
                        let content_type = format::content_type_for(&name);
                        let attachment = Attachment::new(name, content_type, bytes.to_vec());
                        let mut state = form.write();
                        state.draft_mut().set_attachment(field, Some(attachment));
                        state.dismiss_error(field);
                    },
                    Err(err) => warn!(%field, error = ?err, "Could not read the selected file"),
                }
            },
        }
        if let Some(summary) = summary {
            span { class: "file-name", "{summary}" }
        }
    }
}

#[component]
fn TagPicker(mut form: Signal<FormSession>, field: Field) -> Element {
    let mut pending = use_signal(String::new);
    let (catalog, selected, custom) = {
        let state = form.read();
        let tags = &state.draft().tags;
        (
            tags.catalog(),
            tags.selected().collect::<Vec<_>>(),
            tags.custom().map(str::to_owned).collect::<Vec<_>>(),
        )
    };
    let options: Vec<(&str, &str, &str, bool)> = catalog
        .iter()
        .map(|tag| (tag.key, tag.label, IconKey::from(tag.icon).glyph(), selected.contains(&tag.key)))
        .collect();

    rsx! {
        div { class: "tag-grid",
            for (key, text, glyph, checked) in options {
                label { key: "{key}", class: "tag",
                    input {
                        r#type: "checkbox",
                        checked: checked,
                        onchange: move |_| {
                            let mut state = form.write();
                            state.draft_mut().tags.toggle(key);
                            state.dismiss_error(field);
                        },
                    }
                    "{glyph} {text}"
                }
            }
        }
        div { class: "custom-tags",
            {custom.into_iter().map(|text| {
                let removed = text.clone();
                rsx! {
                    span { key: "{text}", class: "chip",
                        "{text}"
                        button {
                            onclick: move |_| {
                                form.write().draft_mut().tags.remove_custom(&removed);
                            },
                            "×"
                        }
                    }
                }
            })}
            input {
                value: "{pending}",
                placeholder: "Something else?",
                oninput: move |evt: FormEvent| pending.set(evt.value()),
            }
            button {
                onclick: move |_| {
                    let text = pending();
                    let mut state = form.write();
                    if state.draft_mut().tags.add_custom(&text) {
                        state.dismiss_error(field);
                    }
                    pending.set(String::new());
                },
                "Add"
            }
        }
    }
}

#[component]
fn AvailabilityPicker(mut form: Signal<FormSession>) -> Element {
    let current = form.read().draft().availability;
    let slots: Vec<(Availability, &str, bool)> =
        Availability::slots().map(|(flag, _, text)| (flag, text, current.contains(flag))).collect();

    rsx! {
        div { class: "slots",
            for (flag, text, checked) in slots {
                label { key: "{text}",
                    input {
                        r#type: "checkbox",
                        checked: checked,
                        onchange: move |_| {
                            let mut state = form.write();
                            state.draft_mut().availability.toggle(flag);
                            state.dismiss_error(Field::Availability);
                        },
                    }
                    "{text}"
                }
            }
        }
    }
}

#[component]
fn ConsentBox(mut form: Signal<FormSession>) -> Element {
    let accepted = form.read().draft().consent;

    rsx! {
        label { class: "consent",
            input {
                r#type: "checkbox",
                checked: accepted,
                onchange: move |_| {
                    let mut state = form.write();
                    let draft = state.draft_mut();
                    draft.consent = !draft.consent;
                    state.dismiss_error(Field::Consent);
                },
            }
            "I confirm the details are correct and agree to be contacted by the trust."
        }
    }
}
