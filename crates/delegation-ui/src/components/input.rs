//! Labelled input for owner action forms.

use dioxus::prelude::*;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Used for the element id and label association
    pub id: String,
    pub value: String,
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub label: Option<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    /// Unit shown after the field, e.g. `%` or `EGLD`
    #[props(default)]
    pub suffix: Option<String>,
    /// Validation message shown under the field
    #[props(default)]
    pub error: Option<String>,
    #[props(default = "text".to_string())]
    pub input_type: String,
    #[props(default = false)]
    pub disabled: bool,
}

/// Text input with optional unit suffix and inline validation message.
///
/// # Example
///
/// ```rust,ignore
/// let mut fee = use_signal(String::new);
///
/// rsx! {
///     Input {
///         id: "service-fee",
///         value: fee(),
///         oninput: move |s| fee.set(s),
///         label: "Service fee".to_string(),
///         suffix: "%".to_string(),
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let field_class = if props.error.is_some() {
        "input-field invalid"
    } else {
        "input-field"
    };

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label { class: "input-label", r#for: "{props.id}", "{label}" }
            }
            div { class: "input-group",
                input {
                    id: "{props.id}",
                    class: "{field_class}",
                    r#type: "{props.input_type}",
                    value: "{props.value}",
                    placeholder: props.placeholder.as_deref().unwrap_or(""),
                    disabled: props.disabled,
                    oninput: move |e| props.oninput.call(e.value()),
                }
                if let Some(suffix) = &props.suffix {
                    span { class: "input-suffix", "{suffix}" }
                }
            }
            if let Some(error) = &props.error {
                p { class: "input-error", role: "alert", "{error}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_shows_suffix_and_error() {
        fn harness() -> Element {
            rsx! {
                Input {
                    id: "service-fee".to_string(),
                    value: "101".to_string(),
                    oninput: move |_| {},
                    label: "Service fee".to_string(),
                    suffix: "%".to_string(),
                    error: "service fee must be between 0 and 100".to_string(),
                }
            }
        }

        let mut dom = VirtualDom::new(harness);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains("input-field invalid"));
        assert!(html.contains("Service fee"));
        assert!(html.contains("input-suffix"));
        assert!(html.contains("between 0 and 100"));
    }
}
