use blogkit_core::{ToastHandle, ToastHost};
use std::cell::RefCell;
use web_sys::{Document, Element};
use yew::AppHandle;
use yew::prelude::*;

const TOAST_STYLE: &str = "position: fixed; bottom: 20px; right: 20px; \
    background: var(--color-success); color: white; \
    padding: var(--spacing-md) var(--spacing-lg); border-radius: var(--radius-lg); \
    box-shadow: var(--shadow-lg); z-index: 10000;";

const ENTER_ANIMATION: &str = "slideIn 0.3s ease";
const EXIT_ANIMATION: &str = "slideOut 0.3s ease";

#[derive(Properties, PartialEq, Clone)]
pub struct ToastProps {
    pub message: AttrValue,
    #[prop_or_default]
    pub leaving: bool,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    let animation = if props.leaving {
        EXIT_ANIMATION
    } else {
        ENTER_ANIMATION
    };
    let style = format!("{TOAST_STYLE} animation: {animation};");
    html! {
        <div class="blogkit-toast" role="status" aria-live="polite" style={style}>
            { props.message.clone() }
        </div>
    }
}

/// Mounts each toast into its own host `<div>` at the end of `<body>`.
pub struct DomToastHost(pub Document);

pub struct MountedToast {
    host: Element,
    app: RefCell<AppHandle<Toast>>,
    message: AttrValue,
}

impl ToastHost for DomToastHost {
    type Toast = MountedToast;

    fn show(&self, message: &str) -> Option<Self::Toast> {
        let body = self.0.body()?;
        let host = self.0.create_element("div").ok()?;
        body.append_child(&host).ok()?;
        let message = AttrValue::from(message.to_string());
        let app = yew::Renderer::<Toast>::with_root_and_props(
            host.clone(),
            ToastProps {
                message: message.clone(),
                leaving: false,
            },
        )
        .render();
        Some(MountedToast {
            host,
            app: RefCell::new(app),
            message,
        })
    }
}

impl ToastHandle for MountedToast {
    fn begin_exit(&self) {
        self.app.borrow_mut().update(ToastProps {
            message: self.message.clone(),
            leaving: true,
        });
    }

    fn remove(self) {
        self.app.into_inner().destroy();
        self.host.remove();
    }
}
