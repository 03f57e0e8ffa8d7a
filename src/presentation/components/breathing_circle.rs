use leptos::*;
use strum::{AsRefStr, Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum CircleColor {
    Red,
    Yellow,
    Green,
}

impl CircleColor {
    pub fn class_name(self) -> String {
        format!("breathing-circle breathing-circle--{self}")
    }
}

/// Pulsing status dot, animated by the `breathing` keyframes in the app styles.
#[component]
pub fn BreathingCircle(color: CircleColor) -> impl IntoView {
    view! { <span class=color.class_name()></span> }
}

#[component]
pub fn RedBreathingCircle() -> impl IntoView {
    view! { <BreathingCircle color=CircleColor::Red/> }
}

#[component]
pub fn YellowBreathingCircle() -> impl IntoView {
    view! { <BreathingCircle color=CircleColor::Yellow/> }
}

#[component]
pub fn GreenBreathingCircle() -> impl IntoView {
    view! { <BreathingCircle color=CircleColor::Green/> }
}
