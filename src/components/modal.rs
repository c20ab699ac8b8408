use yew::prelude::*;

#[derive(Clone, Copy, PartialEq)]
pub enum ModalSize {
    /// Forms
    Sm,
    /// Mid-size content
    Lg,
    /// Large video
    Xl,
}

impl ModalSize {
    fn max_width(self) -> &'static str {
        match self {
            ModalSize::Sm => "32rem",
            ModalSize::Lg => "56rem",
            ModalSize::Xl => "72rem",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub is_open: bool,
    pub on_close: Callback<MouseEvent>,
    #[prop_or(ModalSize::Sm)]
    pub size: ModalSize,
    pub children: Children,
}

/// Centered modal with a dimmed backdrop. Renders nothing while closed;
/// closing is left entirely to `on_close`.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    if !props.is_open {
        return html! {};
    }

    html! {
        <div class="modal-backdrop">
            <style>
            {r#".modal-backdrop {
                position: fixed;
                inset: 0;
                z-index: 50;
                display: flex;
                align-items: center;
                justify-content: center;
                padding: 0 1rem;
                background: rgba(0, 0, 0, 0.5);
                backdrop-filter: blur(4px);
            }
            .modal-panel {
                position: relative;
                width: 100%;
                background: #fff;
                border-radius: 16px;
                box-shadow: 0 8px 32px rgba(0, 0, 0, 0.3);
                padding: 1.5rem;
                max-height: 90vh;
                overflow-y: auto;
            }
            .modal-close {
                position: absolute;
                top: 1rem;
                right: 1rem;
                z-index: 1;
                width: 2.5rem;
                height: 2.5rem;
                display: flex;
                align-items: center;
                justify-content: center;
                color: #fff;
                background: rgba(139, 94, 60, 0.8);
                border: none;
                border-radius: 50%;
                cursor: pointer;
                transition: background 0.2s ease;
            }
            .modal-close:hover {
                background: rgba(139, 94, 60, 0.6);
            }"#}
            </style>
            <div class="modal-panel" style={format!("max-width: {};", props.size.max_width())}>
                <button
                    class="modal-close"
                    onclick={props.on_close.clone()}
                    aria-label="Close modal"
                >
                    {"✕"}
                </button>
                { for props.children.iter() }
            </div>
        </div>
    }
}
