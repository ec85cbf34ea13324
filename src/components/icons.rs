use crate::presentation::arrow_style;
use crate::styles::SPINNER_CLASS;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SpinnerProps {
    pub color: AttrValue,
}

/// Half-circle ring; spins via the shared `ptr-spinner` keyframes.
#[function_component(MaterialSpinner)]
pub fn material_spinner(props: &SpinnerProps) -> Html {
    html! {
        <svg viewBox="0 0 24 24" class={SPINNER_CLASS} style="width:24px; height:24px;">
            <circle
                cx="12"
                cy="12"
                r="10"
                fill="none"
                stroke={props.color.clone()}
                stroke-width="2.5"
                stroke-linecap="round"
                stroke-dasharray="31.4 31.4"
                transform="rotate(-90 12 12)"
            />
        </svg>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ArrowProps {
    pub color: AttrValue,
    pub rotation_deg: f64,
    pub opacity: f64,
}

#[function_component(AndroidArrow)]
pub fn android_arrow(props: &ArrowProps) -> Html {
    html! {
        <svg viewBox="0 0 24 24" fill={props.color.clone()} style={arrow_style(props.rotation_deg, props.opacity)}>
            <path d="M17.65 6.35C16.2 4.9 14.21 4 12 4c-4.42 0-7.99 3.58-7.99 8s3.57 8 7.99 8c3.73 0 6.84-2.55 7.73-6h-2.08c-.82 2.33-3.04 4-5.65 4-3.31 0-6-2.69-6-6s2.69-6 6-6c1.66 0 3.14.69 4.22 1.78L13 11h7V4l-2.35 2.35z" />
        </svg>
    }
}
