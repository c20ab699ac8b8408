use web_sys::js_sys;
use yew::prelude::*;

const COLORS: [&str; 6] = [
    "#8B5E3C", "#F2C14E", "#F78154", "#5FAD56", "#4D9DE0", "#E15554",
];

#[derive(Clone, PartialEq)]
struct Piece {
    left: f64,
    delay: f64,
    duration: f64,
    size: f64,
    spin: f64,
    color: &'static str,
}

fn scatter(count: usize) -> Vec<Piece> {
    (0..count)
        .map(|i| Piece {
            left: js_sys::Math::random() * 100.0,
            delay: js_sys::Math::random() * 0.8,
            duration: 2.5 + js_sys::Math::random() * 2.0,
            size: 6.0 + js_sys::Math::random() * 6.0,
            spin: 360.0 + js_sys::Math::random() * 720.0,
            color: COLORS[i % COLORS.len()],
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct ConfettiProps {
    pub width: f64,
    pub height: f64,
    #[prop_or(160)]
    pub piece_count: usize,
}

/// Full-viewport confetti burst shown after a successful submission.
/// Pieces fall once (no recycling) and the overlay swallows no input.
#[function_component(ConfettiOverlay)]
pub fn confetti_overlay(props: &ConfettiProps) -> Html {
    // Geometry is rolled once per mount; resizes only change the
    // clipping area, not the pieces.
    let pieces = use_state(|| scatter(props.piece_count));

    html! {
        <div
            class="confetti-overlay"
            style={format!("width: {}px; height: {}px;", props.width, props.height)}
        >
            <style>
            {r#".confetti-overlay {
                position: fixed;
                top: 0;
                left: 0;
                z-index: 9999;
                pointer-events: none;
                overflow: hidden;
            }
            .confetti-piece {
                position: absolute;
                top: -20px;
                border-radius: 2px;
                animation-name: confetti-fall;
                animation-timing-function: linear;
                animation-fill-mode: forwards;
            }
            @keyframes confetti-fall {
                to {
                    transform: translateY(110vh) rotate(var(--spin));
                    opacity: 0.9;
                }
            }"#}
            </style>
            {
                for pieces.iter().map(|piece| html! {
                    <div
                        class="confetti-piece"
                        style={format!(
                            "left: {:.2}%; width: {:.1}px; height: {:.1}px; background: {}; \
                             animation-delay: {:.2}s; animation-duration: {:.2}s; --spin: {:.0}deg;",
                            piece.left,
                            piece.size,
                            piece.size * 0.45,
                            piece.color,
                            piece.delay,
                            piece.duration,
                            piece.spin,
                        )}
                    ></div>
                })
            }
        </div>
    }
}
