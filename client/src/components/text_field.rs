//! Outlined text fields: the shared base plus username and password variants.

#[cfg(test)]
#[path = "text_field_test.rs"]
mod text_field_test;

use leptos::prelude::*;

/// Labelled outlined input with optional leading/trailing adornments.
///
/// Extra attributes and `on:` listeners passed to this component (or to a
/// wrapper around it) are applied to the root `<div>`; `input` events from the
/// inner `<input>` bubble there.
#[component]
pub fn CommonTextField(
    #[prop(into)] name: String,
    #[prop(into)] label: String,
    #[prop(into)] input_type: Signal<&'static str>,
    #[prop(optional)] required: bool,
    #[prop(optional)] autofocus: bool,
    #[prop(optional, into)] start_adornment: Option<ViewFn>,
    #[prop(optional, into)] end_adornment: Option<ViewFn>,
) -> impl IntoView {
    let input_id = field_input_id(&name);

    view! {
        <div class="text-field">
            <label class="text-field__label" for=input_id.clone()>
                {label}
                {required.then_some(" *")}
            </label>
            <div class="text-field__outline">
                {start_adornment.map(|adornment| view! {
                    <span class="text-field__adornment text-field__adornment--start">{adornment.run()}</span>
                })}
                <input
                    id=input_id
                    name=name.clone()
                    class="text-field__input"
                    type=move || input_type.get()
                    required=required
                    autofocus=autofocus
                    aria-label=name
                />
                {end_adornment.map(|adornment| view! {
                    <span class="text-field__adornment text-field__adornment--end">{adornment.run()}</span>
                })}
            </div>
        </div>
    }
}

/// Username input with an account icon.
#[component]
pub fn UsernameField() -> impl IntoView {
    view! {
        <CommonTextField
            name="user-name"
            label="Username"
            input_type=Signal::derive(|| "text")
            required=true
            autofocus=true
            start_adornment=|| view! { <span class="icon" aria-hidden="true">"👤"</span> }
        />
    }
}

/// Password input with a lock icon and a show/hide toggle.
///
/// Visibility is local to this field and resets when it unmounts.
#[component]
pub fn PasswordField() -> impl IntoView {
    let visible = RwSignal::new(false);

    view! {
        <CommonTextField
            name="password"
            label="Password"
            input_type=Signal::derive(move || password_input_type(visible.get()))
            required=true
            start_adornment=|| view! { <span class="icon" aria-hidden="true">"🔒"</span> }
            end_adornment=move || view! {
                <button
                    type="button"
                    class="icon-button"
                    aria-label=move || visibility_toggle_label(visible.get())
                    on:click=move |_| visible.update(|v| *v = !*v)
                    on:mousedown=|ev| ev.prevent_default()
                    on:mouseup=|ev| ev.prevent_default()
                >
                    {move || visibility_icon(visible.get())}
                </button>
            }
        />
    }
}

fn field_input_id(name: &str) -> String {
    format!("field-{name}")
}

fn password_input_type(visible: bool) -> &'static str {
    if visible { "text" } else { "password" }
}

fn visibility_toggle_label(visible: bool) -> &'static str {
    if visible { "hide the password" } else { "display the password" }
}

// Shows the action the button will take.
fn visibility_icon(visible: bool) -> &'static str {
    if visible { "🙈" } else { "👁" }
}
