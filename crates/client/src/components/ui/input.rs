use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum InputType {
    #[default]
    Text,
    Password,
    Email,
    Tel,
    Number,
    Date,
}

impl InputType {
    fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Password => "password",
            Self::Email => "email",
            Self::Tel => "tel",
            Self::Number => "number",
            Self::Date => "date",
        }
    }
}

const FIELD_CLASS: &str = "w-full rounded-xl bg-white text-gray-900 px-4 py-3 text-sm border border-gray-200 placeholder-gray-400 transition-colors focus:outline-none focus:ring-2 focus:ring-rose-500/40 focus:border-rose-500";

#[derive(Props, Clone, PartialEq)]
pub struct TextInputProps {
    #[props(optional)]
    pub class: Option<String>,
    pub value: String,
    pub oninput: EventHandler<FormEvent>,
    #[props(optional)]
    pub placeholder: Option<String>,
    #[props(optional)]
    pub input_type: Option<InputType>,
}

#[component]
pub fn TextInput(props: TextInputProps) -> Element {
    let class = match props.class {
        Some(extra) if !extra.is_empty() => format!("{FIELD_CLASS} {extra}"),
        _ => FIELD_CLASS.to_string(),
    };

    rsx! {
        input {
            class,
            r#type: props.input_type.unwrap_or_default().as_str(),
            value: "{props.value}",
            placeholder: props.placeholder.unwrap_or_default(),
            oninput: move |e| props.oninput.call(e),
        }
    }
}

/// A labelled text input.
#[component]
pub fn Field(
    label: String,
    value: String,
    oninput: EventHandler<FormEvent>,
    #[props(optional)] placeholder: Option<String>,
    #[props(optional)] input_type: Option<InputType>,
) -> Element {
    rsx! {
        div {
            label { class: "block text-sm font-medium text-gray-700 mb-1.5", "{label}" }
            TextInput { value, oninput, placeholder, input_type }
        }
    }
}

/// A `<select>` over `(value, label)` pairs, optionally preceded by an
/// empty "any" option.
#[component]
pub fn Select(
    label: String,
    value: String,
    options: Vec<(String, String)>,
    onchange: EventHandler<FormEvent>,
    #[props(optional)] empty_label: Option<String>,
) -> Element {
    rsx! {
        div {
            label { class: "block text-sm font-medium text-gray-700 mb-1.5", "{label}" }
            select {
                class: FIELD_CLASS,
                value: "{value}",
                onchange: move |e| onchange.call(e),
                if let Some(empty) = &empty_label {
                    option { value: "", "{empty}" }
                }
                for (opt_value, opt_label) in options {
                    option {
                        key: "{opt_value}",
                        value: "{opt_value}",
                        selected: opt_value == value,
                        "{opt_label}"
                    }
                }
            }
        }
    }
}

#[component]
pub fn Checkbox(label: String, checked: bool, onchange: EventHandler<bool>) -> Element {
    rsx! {
        label { class: "inline-flex items-center gap-2 text-sm text-gray-700 cursor-pointer",
            input {
                r#type: "checkbox",
                class: "rounded border-gray-300 text-rose-500 focus:ring-rose-500",
                checked,
                onchange: move |e: FormEvent| onchange.call(e.checked()),
            }
            "{label}"
        }
    }
}
