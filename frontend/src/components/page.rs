use stylist::Style;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::colors;

pub const MOBILE_BREAKPOINT: f64 = 650.0;

pub fn is_mobile(viewport_width: f64) -> bool {
    viewport_width < MOBILE_BREAKPOINT
}

/// A stuck heading sits lower inside its parent than where it was laid out.
pub fn is_heading_pinned(heading_top: i32, parent_top: i32) -> bool {
    heading_top - parent_top > 0
}

pub fn heading_style(mobile: bool, sticky: bool, pinned: bool) -> String {
    let mut style = format!(
        "font-family: 'Sacramento', cursive; margin: 0; color: {};",
        colors::SECOND
    );

    if mobile {
        style.push_str(" font-size: 2rem; padding: 0.5rem 1rem; text-align: center;");
        if sticky {
            style.push_str(" position: sticky; top: 0;");
        }
    } else {
        style.push_str(" font-size: 3rem; padding: 1rem 3rem; text-align: left;");
    }

    if pinned {
        style.push_str(&format!(
            " backdrop-filter: blur(5px); background-color: {}; border-bottom: 1px solid {};",
            colors::PINNED_BACKGROUND,
            colors::PRIMARY
        ));
    } else {
        style.push_str(" backdrop-filter: blur(0px); background-color: unset; border-bottom: unset;");
    }

    style
}

pub fn content_style(mobile: bool) -> &'static str {
    if mobile {
        "padding: 0rem 1rem 1rem 1rem; letter-spacing: 0rem; font-family: 'Fira Sans Condensed', sans-serif;"
    } else {
        "padding: 0rem 3rem 3rem 3rem; letter-spacing: 0rem; font-family: 'Fira Sans Condensed', sans-serif;"
    }
}

fn container_class() -> Classes {
    let css = format!(
        r#"display: flex;
        flex-direction: column;
        background: linear-gradient(180deg, rgba(128,188,106,0.2) 0%, rgba(255,255,255,0.5) 100%);
        color: {};
        border-top: 1px solid {};
        padding-top: 2.5rem;"#,
        colors::SECOND,
        colors::PRIMARY
    );
    match Style::new(css) {
        Ok(style) => classes!(style.get_class_name().to_string()),
        Err(e) => {
            log::error!("Failed to build page stylesheet: {}", e);
            Classes::new()
        }
    }
}

// Offsets of the heading and its parent, if both are mounted.
fn measure_offsets(heading_ref: &NodeRef) -> Option<(i32, i32)> {
    let heading = heading_ref.cast::<HtmlElement>()?;
    let parent = heading.parent_element()?.dyn_into::<HtmlElement>().ok()?;
    Some((heading.offset_top(), parent.offset_top()))
}

#[derive(Properties, PartialEq)]
pub struct PageProps {
    pub title: String,
    /// Element id, so sections can be linked with `#path`.
    #[prop_or_default]
    pub path: String,
    #[prop_or(true)]
    pub sticky_header: bool,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Page)]
pub fn page(props: &PageProps) -> Html {
    let (viewport_width, _) = use_window_size();
    let mobile = is_mobile(viewport_width);
    let pinned = use_state_eq(|| false);
    let heading_ref = use_node_ref();

    {
        let heading_ref = heading_ref.clone();
        let pinned = pinned.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();

            let check_scroll = Closure::wrap(Box::new(move || {
                if let Some((heading_top, parent_top)) = measure_offsets(&heading_ref) {
                    pinned.set(is_heading_pinned(heading_top, parent_top));
                }
            }) as Box<dyn FnMut()>);

            if let Some(window) = &window {
                for event in ["scroll", "resize"] {
                    if let Err(e) = window.add_event_listener_with_callback(event, check_scroll.as_ref().unchecked_ref()) {
                        log::warn!("Could not listen for {}: {:?}", event, e);
                    }
                }
            }

            move || {
                if let Some(window) = window {
                    for event in ["scroll", "resize"] {
                        if let Err(e) = window.remove_event_listener_with_callback(event, check_scroll.as_ref().unchecked_ref()) {
                            log::warn!("Could not stop listening for {}: {:?}", event, e);
                        }
                    }
                }
            }
        }, ());
    }

    html! {
        <div class={container_class()} id={props.path.clone()}>
            <article>
                <h2 ref={heading_ref} style={heading_style(mobile, props.sticky_header, *pinned)}>
                    {&props.title}
                </h2>
                <div style={content_style(mobile)}>
                    { for props.children.iter() }
                </div>
            </article>
        </div>
    }
}
