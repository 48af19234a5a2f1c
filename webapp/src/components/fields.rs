use dioxus::prelude::*;

// labelled text inputs
//
// the only validation anywhere in the app is what these hand to the browser: required and
// type=email. values flow straight back up through oninput

#[derive(Clone, PartialEq, Props)]
pub struct TextFieldProps {
    label: String,
    value: String,
    oninput: EventHandler<String>,
    #[props(default)]
    placeholder: String,
    #[props(default = "text")]
    input_type: &'static str,
    #[props(default)]
    required: bool,
    #[props(default)]
    id: Option<String>,
}

#[component]
pub fn TextField(props: TextFieldProps) -> Element {
    let id = props.id.unwrap_or_else(|| field_id(&props.label));

    rsx! {
        div { class: "form-group",
            label { class: "form-label", r#for: "{id}", "{props.label}" }
            input {
                id: "{id}",
                class: "form-input",
                r#type: props.input_type,
                placeholder: "{props.placeholder}",
                value: "{props.value}",
                required: props.required,
                oninput: move |evt| props.oninput.call(evt.value()),
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct PasswordFieldProps {
    value: String,
    oninput: EventHandler<String>,
    #[props(default = String::from("Password"))]
    label: String,
    #[props(default = String::from("Enter your password"))]
    placeholder: String,
}

// password input with a local show/hide toggle
#[component]
pub fn PasswordField(props: PasswordFieldProps) -> Element {
    let mut visible = use_signal(|| false);

    rsx! {
        div { class: "form-group",
            label { class: "form-label", r#for: "password", "{props.label}" }
            div { class: "password-wrapper",
                input {
                    id: "password",
                    class: "form-input",
                    r#type: if visible() { "text" } else { "password" },
                    placeholder: "{props.placeholder}",
                    value: "{props.value}",
                    required: true,
                    oninput: move |evt| props.oninput.call(evt.value()),
                }
                button {
                    class: "password-toggle",
                    r#type: "button",
                    title: if visible() { "Hide password" } else { "Show password" },
                    onclick: move |_| visible.toggle(),
                    if visible() { "◡" } else { "◉" }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    label: String,
    value: String,
    oninput: EventHandler<String>,
    #[props(default)]
    placeholder: String,
    #[props(default = 5)]
    rows: u32,
    #[props(default)]
    id: Option<String>,
}

#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let id = props.id.unwrap_or_else(|| field_id(&props.label));

    rsx! {
        div { class: "form-group",
            label { class: "form-label", r#for: "{id}", "{props.label}" }
            textarea {
                id: "{id}",
                class: "form-textarea",
                rows: "{props.rows}",
                placeholder: "{props.placeholder}",
                value: "{props.value}",
                oninput: move |evt| props.oninput.call(evt.value()),
            }
        }
    }
}

// "Full Name" -> "full-name"
fn field_id(label: &str) -> String {
    label
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}
