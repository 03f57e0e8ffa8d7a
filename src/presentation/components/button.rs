use leptos::*;
use strum::{AsRefStr, Display, EnumIter};

use crate::domain::logging::{LogComponent, get_logger};

/// Base class every button carries
pub const BUTTON_CLASS: &str = "kp-button";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum ButtonVisual {
    Normal,
    Pressed,
    Locked,
}

/// Click/visual state machine behind [`Button`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonState {
    pub lock: bool,
    pub toggle: bool,
    pub pressed: bool,
}

impl ButtonState {
    pub fn new(lock: bool, toggle: bool) -> Self {
        Self { lock, toggle, pressed: false }
    }

    /// Locked buttons ignore clicks; only toggle buttons latch.
    pub fn click(&mut self) {
        if self.lock {
            return;
        }
        if self.toggle {
            self.pressed = !self.pressed;
        }
    }

    pub fn visual(&self) -> ButtonVisual {
        if self.lock {
            ButtonVisual::Locked
        } else if self.toggle && self.pressed {
            ButtonVisual::Pressed
        } else {
            ButtonVisual::Normal
        }
    }

    pub fn class_name(&self) -> String {
        format!("{BUTTON_CLASS} {BUTTON_CLASS}--{}", self.visual())
    }
}

/// Fixed-size action button.
///
/// `lock` greys it out and disables it, `toggle` makes it latch on click.
#[component]
pub fn Button(
    #[prop(into)] title: String,
    #[prop(optional)] lock: bool,
    #[prop(optional)] toggle: bool,
) -> impl IntoView {
    let state = create_rw_signal(ButtonState::new(lock, toggle));
    let label = title.clone();

    let on_click = move |_| {
        state.update(ButtonState::click);
        if toggle && !lock {
            get_logger().debug(
                LogComponent::Presentation("Button"),
                &format!("🔘 {} pressed: {}", label, state.get_untracked().pressed),
            );
        }
    };

    view! {
        <button class=move || state.get().class_name() disabled=lock on:click=on_click>
            {title}
        </button>
    }
}
