use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{window, HtmlAnchorElement};

#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    #[error("no browser window available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("DOM call failed: {0}")]
    Dom(String),
}

impl From<wasm_bindgen::JsValue> for LaunchError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        LaunchError::Dom(format!("{:?}", value))
    }
}

/// Hands a `mailto:`, `sms:` or `https://` link to whatever the platform
/// has registered for it.
pub trait UriOpener {
    fn open(&self, uri: &str) -> Result<(), LaunchError>;
}

/// Opens links by clicking a throwaway anchor, which lets the browser pick
/// the mail client, messaging app or WhatsApp.
#[derive(Debug, Default)]
pub struct AnchorOpener;

impl UriOpener for AnchorOpener {
    fn open(&self, uri: &str) -> Result<(), LaunchError> {
        let window = window().ok_or(LaunchError::NoWindow)?;
        let document = window.document().ok_or(LaunchError::NoDocument)?;
        let body = document.body().ok_or(LaunchError::NoBody)?;

        let anchor: HtmlAnchorElement = document
            .create_element("a")?
            .dyn_into()
            .map_err(|el| LaunchError::Dom(format!("not an anchor: {:?}", el)))?;
        anchor.set_href(uri);
        if uri.starts_with("https://") {
            anchor.set_target("_blank");
            anchor.set_rel("noopener");
        }

        body.append_child(&anchor)?;
        anchor.click();
        anchor.remove();
        Ok(())
    }
}

/// Shared handle so the opener can travel through component props.
#[derive(Clone)]
pub struct Launcher(Rc<dyn UriOpener>);

impl Launcher {
    pub fn new(opener: impl UriOpener + 'static) -> Self {
        Self(Rc::new(opener))
    }
}

impl UriOpener for Launcher {
    fn open(&self, uri: &str) -> Result<(), LaunchError> {
        self.0.open(uri)
    }
}

impl Default for Launcher {
    fn default() -> Self {
        Self::new(AnchorOpener)
    }
}

impl PartialEq for Launcher {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
