use dioxus::prelude::*;
use tracing::error;

use api::media_kit::{Field, MediaKitData};

use crate::components::fields::{TextArea, TextField};

#[derive(Clone, PartialEq, Props)]
pub struct KitFieldProps {
    data: Signal<MediaKitData>,
    field: Field,
    label: String,
    #[props(default)]
    placeholder: String,
    #[props(default = "text")]
    input_type: &'static str,
    #[props(default)]
    multiline: bool,
}

// one input bound to one leaf of the draft
//
// nested leaves ("instagram.handle" and friends) are written section-wise through
// update_nested_field, top-level ones through the lens directly
#[component]
pub fn KitField(props: KitFieldProps) -> Element {
    let mut data = props.data;
    let field = props.field;

    let value = data.read().get(field).to_owned();

    let oninput = move |value: String| {
        let mut record = data.write();

        let result = match field.path().split_once('.') {
            Some((section, name)) => record.update_nested_field(section, name, value),
            None => {
                record.set(field, value);
                Ok(())
            }
        };

        if let Err(err) = result {
            error!("failed to update {field}: {err}");
        }
    };

    if props.multiline {
        rsx! {
            TextArea {
                label: props.label,
                placeholder: props.placeholder,
                value,
                oninput,
            }
        }
    } else {
        rsx! {
            TextField {
                label: props.label,
                placeholder: props.placeholder,
                input_type: props.input_type,
                value,
                oninput,
            }
        }
    }
}
