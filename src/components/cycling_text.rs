use gloo_timers::callback::Interval;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CyclingTextProps {
    /// Lead line, shown before the rotating word.
    pub text: String,
    pub suffixes: Vec<String>,
    #[prop_or(3000)]
    pub interval_ms: u32,
    #[prop_or_default]
    pub bottom_text: String,
    #[prop_or_default]
    pub class: Classes,
}

/// Headline with a suffix that rotates on a fixed interval, fading in on
/// every cycle.
#[function_component(CyclingText)]
pub fn cycling_text(props: &CyclingTextProps) -> Html {
    let index = use_state(|| 0usize);

    {
        let index = index.clone();
        let len = props.suffixes.len();
        let interval_ms = props.interval_ms;
        use_effect_with_deps(
            move |_| {
                let mut tick = 0usize;
                let interval = Interval::new(interval_ms, move || {
                    if len > 0 {
                        tick = (tick + 1) % len;
                        index.set(tick);
                    }
                });
                move || drop(interval)
            },
            (),
        );
    }

    let suffix = props.suffixes.get(*index).cloned().unwrap_or_default();

    html! {
        <div class={classes!("cycling-text", props.class.clone())}>
            <style>
            {r#".cycling-text .cycling-suffix {
                display: inline-block;
                animation: cycling-fade 0.6s ease;
            }
            @keyframes cycling-fade {
                from {
                    opacity: 0;
                    transform: translateY(-0.4em);
                }
                to {
                    opacity: 1;
                    transform: translateY(0);
                }
            }"#}
            </style>
            <h1>
                {&props.text}
                {" "}
                <span class="cycling-suffix" key={*index}>{suffix}</span>
            </h1>
            {
                if props.bottom_text.is_empty() {
                    html! {}
                } else {
                    html! { <h1 class="cycling-bottom">{&props.bottom_text}</h1> }
                }
            }
        </div>
    }
}
