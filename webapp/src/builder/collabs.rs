use dioxus::prelude::*;
use tracing::error;

use api::media_kit::{CollabField, MediaKitData};

use crate::components::{
    button::{Button, ButtonVariant},
    card::{Card, CardHeader},
    fields::{TextArea, TextField},
};

#[derive(Clone, PartialEq, Props)]
pub struct CollaborationsTabProps {
    data: Signal<MediaKitData>,
}

#[component]
pub fn CollaborationsTab(props: CollaborationsTabProps) -> Element {
    let mut data = props.data;
    let count = data.read().collaborations.len();

    rsx! {
        Card { class: "card-glass",
            div { class: "row",
                CardHeader {
                    title: "Brand Collaborations",
                    description: "Showcase the brands you've worked with",
                }
                Button {
                    variant: ButtonVariant::Gradient,
                    onclick: move |_| {
                        data.write().add_collaboration();
                    },
                    "+ Add Collaboration"
                }
            }
            if count == 0 {
                p { class: "muted", "No collaborations yet. Add your first brand partnership." }
            }
            div { class: "stack",
                for index in 0..count {
                    CollaborationEntry { key: "{index}", data, index }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct CollaborationEntryProps {
    data: Signal<MediaKitData>,
    index: usize,
}

// entries are never removed, so the index is a stable identity
#[component]
fn CollaborationEntry(props: CollaborationEntryProps) -> Element {
    let mut data = props.data;
    let index = props.index;

    let Some(collab) = data.read().collaborations.get(index).cloned() else {
        return rsx! {};
    };

    let mut edit = move |field: CollabField, value: String| {
        if let Err(err) = data.write().update_collaboration(index, field, value) {
            error!("failed to edit collaboration: {err}");
        }
    };

    rsx! {
        Card { class: "platform-card",
            div { class: "stack",
                TextField {
                    label: "Brand",
                    id: "{input_id(index, CollabField::Brand)}",
                    placeholder: "Brand name",
                    value: collab.brand,
                    oninput: move |value| edit(CollabField::Brand, value),
                }
                TextArea {
                    label: "Description",
                    id: "{input_id(index, CollabField::Description)}",
                    rows: 3,
                    placeholder: "What did you create together?",
                    value: collab.description,
                    oninput: move |value| edit(CollabField::Description, value),
                }
            }
        }
    }
}

// labels must point at their own entry's inputs, not the first entry's
fn input_id(index: usize, field: CollabField) -> String {
    let name = match field {
        CollabField::Brand => "brand",
        CollabField::Description => "description",
    };

    format!("collab-{name}-{index}")
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn every_entry_input_gets_its_own_id() {
        let ids: HashSet<_> = (0..4)
            .flat_map(|index| {
                [CollabField::Brand, CollabField::Description]
                    .map(|field| input_id(index, field))
            })
            .collect();

        assert_eq!(ids.len(), 8);
        assert!(ids.contains("collab-description-1"));
    }
}
