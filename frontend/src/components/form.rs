use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::colors;

const LABEL_STYLE: &str = "font-size: 0.9rem; padding-left: 0.5rem;";

fn field_style(extra: &str) -> String {
    format!(
        "border: none; background: {}; padding: 0.7rem 0.5rem; font-size: 1.2rem; color: #333; width: 100%; box-sizing: border-box; {}",
        colors::FIELD_BACKGROUND,
        extra
    )
}

#[derive(Properties, PartialEq)]
pub struct InputProps {
    pub name: String,
    pub title: String,
    #[prop_or_default]
    pub placeholder: String,
    #[prop_or("text".to_string())]
    pub input_type: String,
    #[prop_or("text".to_string())]
    pub inputmode: String,
    #[prop_or(true)]
    pub required: bool,
    #[prop_or_default]
    pub style: String,
    #[prop_or_default]
    pub container_style: String,
    pub oninput: Callback<String>,
}

/// Labeled single line input. Reports its value on every keystroke.
#[function_component(Input)]
pub fn input(props: &InputProps) -> Html {
    let oninput = {
        let on_value = props.oninput.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_value.emit(input.value());
        })
    };

    html! {
        <label style={format!("display: flex; flex-direction: column; {}", props.container_style)}>
            <div style={LABEL_STYLE}>{&props.title}</div>
            <input
                name={props.name.clone()}
                type={props.input_type.clone()}
                inputmode={props.inputmode.clone()}
                required={props.required}
                placeholder={props.placeholder.clone()}
                style={field_style(&props.style)}
                {oninput}
            />
        </label>
    }
}

#[derive(Properties, PartialEq)]
pub struct TextAreaProps {
    pub name: String,
    pub title: String,
    #[prop_or_default]
    pub placeholder: String,
    #[prop_or(true)]
    pub required: bool,
    #[prop_or_default]
    pub style: String,
    pub oninput: Callback<String>,
}

#[function_component(TextArea)]
pub fn text_area(props: &TextAreaProps) -> Html {
    let oninput = {
        let on_value = props.oninput.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            on_value.emit(area.value());
        })
    };

    html! {
        <label style="display: flex; flex-direction: column;">
            <div style={LABEL_STYLE}>{&props.title}</div>
            <textarea
                name={props.name.clone()}
                required={props.required}
                placeholder={props.placeholder.clone()}
                style={field_style(&props.style)}
                {oninput}
            />
        </label>
    }
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_default]
    pub style: String,
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub children: Children,
}

/// Submit button; `onclick` runs before the form's submit handler.
#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    html! {
        <button
            type="submit"
            onclick={props.onclick.clone()}
            style={format!(
                "border: none; padding: 0.7rem 0.5rem; font-size: 1.2rem; color: #fff; width: 100%; background-color: {}; {}",
                colors::SECOND,
                props.style
            )}
        >
            { for props.children.iter() }
        </button>
    }
}
