//! Sensors page component.
//!
//! Sensor list with a create/edit modal and delete.

use dioxus::prelude::*;

use agri_types::{Sensor, SensorStatus, SensorType};

use crate::app::components::Layout;
use crate::app::context::use_api;
use crate::format;
use crate::platform::dialog;
use crate::views::sensors::{
    self, delete_confirmation, SensorEditor, DELETE_FALLBACK, SAVE_FALLBACK,
};

/// Sensors page component.
#[component]
pub fn Sensors() -> Element {
    let client = use_api();

    let mut list = use_signal(|| None::<Vec<Sensor>>);
    let mut editor = use_signal(|| None::<SensorEditor>);
    let mut saving = use_signal(|| false);

    let load_client = client.clone();
    let _loader = use_resource(move || {
        let client = load_client.clone();
        async move {
            match sensors::load(&client).await {
                Ok(sensors) => list.set(Some(sensors)),
                Err(e) => {
                    tracing::warn!("Error fetching sensors: {}", e);
                    if list.peek().is_none() {
                        list.set(Some(Vec::new()));
                    }
                }
            }
        }
    });

    let save_client = client.clone();
    let submit = move |_: ()| {
        let Some(current) = editor() else {
            return;
        };
        if let Err(msg) = current.form.validate() {
            dialog::alert(&msg);
            return;
        }
        let client = save_client.clone();
        saving.set(true);
        spawn(async move {
            match sensors::save(&client, &current).await {
                Ok(reloaded) => {
                    if let Some(sensors) = reloaded {
                        list.set(Some(sensors));
                    }
                    editor.set(None);
                }
                Err(e) => {
                    tracing::error!("Error saving sensor: {}", e);
                    dialog::alert(&e.user_message(SAVE_FALLBACK));
                }
            }
            saving.set(false);
        });
    };

    let delete = move |sensor: Sensor| {
        if !dialog::confirm(&delete_confirmation(&sensor)) {
            return;
        }
        let client = client.clone();
        spawn(async move {
            match sensors::delete_and_reload(&client, sensor.id).await {
                Ok(Some(sensors)) => list.set(Some(sensors)),
                Ok(None) => {}
                Err(e) => {
                    tracing::error!("Error deleting sensor: {}", e);
                    dialog::alert(&e.user_message(DELETE_FALLBACK));
                }
            }
        });
    };

    let content = match list() {
        None => rsx! {
            article { aria_busy: "true", "Loading sensors..." }
        },
        Some(sensors) if sensors.is_empty() => rsx! {
            article { class: "empty", "No sensors registered yet" }
        },
        Some(sensors) => rsx! {
            figure {
                table { class: "striped",
                    thead {
                        tr {
                            th { "Sensor ID" }
                            th { "Name" }
                            th { "Type" }
                            th { "Location" }
                            th { "Status" }
                            th { "Updated" }
                            th {}
                        }
                    }
                    tbody {
                        for sensor in sensors.iter() {
                            SensorRow {
                                key: "{sensor.id}",
                                sensor: sensor.clone(),
                                on_edit: move |s: Sensor| editor.set(Some(SensorEditor::edit(&s))),
                                on_delete: delete.clone(),
                            }
                        }
                    }
                }
            }
        },
    };

    rsx! {
        Layout {
            title: "Sensors".to_string(),
            nav_active: "sensors".to_string(),

            div { class: "controls", style: "justify-content:space-between;align-items:center;",
                h1 { "Sensors" }
                button { onclick: move |_| editor.set(Some(SensorEditor::create())), "+ New sensor" }
            }

            {content}

            if let Some(current) = editor() {
                SensorModal {
                    editor: current,
                    saving: saving(),
                    on_change: move |next| editor.set(Some(next)),
                    on_submit: submit.clone(),
                    on_close: move |_| editor.set(None),
                }
            }
        }
    }
}

#[component]
fn SensorRow(sensor: Sensor, on_edit: EventHandler<Sensor>, on_delete: EventHandler<Sensor>) -> Element {
    let (status_class, status) = format::status_badge(&sensor.status);
    let location = sensor.location.clone().unwrap_or_else(|| "—".to_string());
    let updated = sensor
        .updated_at
        .as_deref()
        .or(sensor.created_at.as_deref())
        .map(format::date_time)
        .unwrap_or_default();
    let kind = sensor.kind.label().to_string();
    let edit_target = sensor.clone();
    let delete_target = sensor.clone();

    rsx! {
        tr {
            td { code { "{sensor.sensor_id}" } }
            td {
                "{sensor.name}"
                if let Some(desc) = sensor.description.as_ref().filter(|d| !d.is_empty()) {
                    br {}
                    small { "{desc}" }
                }
            }
            td { "{kind}" }
            td { "{location}" }
            td { span { class: "{status_class}", "{status}" } }
            td { small { "{updated}" } }
            td {
                div { class: "controls",
                    button {
                        class: "outline",
                        onclick: move |_| on_edit.call(edit_target.clone()),
                        "Edit"
                    }
                    button {
                        class: "outline secondary",
                        onclick: move |_| on_delete.call(delete_target.clone()),
                        "Delete"
                    }
                }
            }
        }
    }
}

/// Create/edit modal. Every keystroke produces an updated editor.
#[component]
fn SensorModal(
    editor: SensorEditor,
    saving: bool,
    on_change: EventHandler<SensorEditor>,
    on_submit: EventHandler<()>,
    on_close: EventHandler<()>,
) -> Element {
    let locked = editor.sensor_id_locked();
    let title = editor.title();
    let submit_label = editor.submit_label();
    let form = editor.form.clone();

    let update = move |apply: fn(&mut SensorEditor, String)| {
        let editor = editor.clone();
        move |e: FormEvent| {
            let mut next = editor.clone();
            apply(&mut next, e.value());
            on_change.call(next);
        }
    };

    rsx! {
        dialog { open: true,
            article {
                header {
                    button {
                        aria_label: "Close",
                        "rel": "prev",
                        onclick: move |_| on_close.call(()),
                    }
                    h3 { "{title}" }
                }
                form {
                    onsubmit: move |e| {
                        e.prevent_default();
                        on_submit.call(());
                    },
                    label {
                        "Sensor ID"
                        input {
                            r#type: "text",
                            required: true,
                            disabled: locked,
                            value: "{form.sensor_id}",
                            oninput: update(|ed, v| ed.form.sensor_id = v),
                        }
                    }
                    label {
                        "Name"
                        input {
                            r#type: "text",
                            required: true,
                            value: "{form.name}",
                            oninput: update(|ed, v| ed.form.name = v),
                        }
                    }
                    div { class: "grid",
                        label {
                            "Type"
                            select {
                                value: "{form.kind}",
                                onchange: update(|ed, v| ed.form.kind = SensorType::from(v.as_str())),
                                if !form.kind.is_selectable() {
                                    option { value: "{form.kind}", selected: true, "{form.kind}" }
                                }
                                for kind in SensorType::SELECTABLE {
                                    option {
                                        value: "{kind}",
                                        selected: kind == form.kind,
                                        {kind.label()}
                                    }
                                }
                            }
                        }
                        label {
                            "Status"
                            select {
                                value: "{form.status}",
                                onchange: update(|ed, v| ed.form.status = SensorStatus::from(v.as_str())),
                                if !form.status.is_known() {
                                    option { value: "{form.status}", selected: true, "{form.status}" }
                                }
                                for status in SensorStatus::ALL {
                                    option {
                                        value: "{status}",
                                        selected: status == form.status,
                                        {status.label()}
                                    }
                                }
                            }
                        }
                    }
                    label {
                        "Location"
                        input {
                            r#type: "text",
                            value: "{form.location}",
                            oninput: update(|ed, v| ed.form.location = v),
                        }
                    }
                    label {
                        "Description"
                        textarea {
                            rows: "3",
                            value: "{form.description}",
                            oninput: update(|ed, v| ed.form.description = v),
                        }
                    }
                    footer {
                        button {
                            r#type: "button",
                            class: "secondary",
                            onclick: move |_| on_close.call(()),
                            "Cancel"
                        }
                        button {
                            r#type: "submit",
                            disabled: saving,
                            aria_busy: if saving { "true" } else { "false" },
                            "{submit_label}"
                        }
                    }
                }
            }
        }
    }
}
