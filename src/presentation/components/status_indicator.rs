use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use strum::{AsRefStr, Display, EnumIter, EnumString};

use super::breathing_circle::{CircleColor, GreenBreathingCircle, RedBreathingCircle, YellowBreathingCircle};
use crate::domain::logging::{LogComponent, get_logger};

/// Length of the refresh icon spin
pub const BURST_DURATION: Duration = Duration::from_millis(600);
pub const REFRESH_ICON_CLASS: &str = "refresh-icon";
pub const BURST_CLASS: &str = "burst-spin";

/// Feed health shown by [`StatusIndicator`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, AsRefStr, EnumIter, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Status {
    Error,
    /// Also used while loading
    #[default]
    Warning,
    Ok,
}

impl Status {
    pub fn circle_color(self) -> CircleColor {
        match self {
            Status::Error => CircleColor::Red,
            Status::Warning => CircleColor::Yellow,
            Status::Ok => CircleColor::Green,
        }
    }
}

pub fn refresh_icon_class(bursting: bool) -> String {
    if bursting {
        format!("{REFRESH_ICON_CLASS} {BURST_CLASS}")
    } else {
        REFRESH_ICON_CLASS.to_string()
    }
}

/// Spin state of the refresh icon together with its pending reset.
#[derive(Clone, Copy)]
pub struct Burst {
    active: RwSignal<bool>,
    timer: StoredValue<Option<TimeoutHandle>>,
}

impl Burst {
    pub fn new() -> Self {
        Self { active: create_rw_signal(false), timer: store_value(None) }
    }

    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    /// Starts a burst ending [`BURST_DURATION`] from now. An ongoing burst keeps its first deadline.
    pub fn trigger(&self) {
        if self.active.get_untracked() {
            return;
        }
        self.active.set(true);
        let this = *self;
        let reset = move || {
            this.active.set(false);
            this.timer.set_value(None);
        };
        match set_timeout_with_handle(reset, BURST_DURATION) {
            Ok(handle) => self.timer.set_value(Some(handle)),
            Err(e) => {
                get_logger().warn(
                    LogComponent::Presentation("StatusIndicator"),
                    &format!("⚠️ Failed to schedule burst reset: {e:?}"),
                );
                self.active.set(false);
            }
        }
    }

    /// Drops the pending reset, if any.
    pub fn cancel(&self) {
        if let Some(Some(handle)) = self.timer.try_update_value(Option::take) {
            handle.clear();
        }
    }
}

impl Default for Burst {
    fn default() -> Self {
        Self::new()
    }
}

/// Breathing status dot plus a refresh icon that spins once per click.
#[component]
pub fn StatusIndicator(#[prop(into)] status: MaybeSignal<Status>) -> impl IntoView {
    let burst = Burst::new();
    on_cleanup(move || burst.cancel());

    let circle = move || match status.get().circle_color() {
        CircleColor::Red => view! { <RedBreathingCircle/> }.into_view(),
        CircleColor::Yellow => view! { <YellowBreathingCircle/> }.into_view(),
        CircleColor::Green => view! { <GreenBreathingCircle/> }.into_view(),
    };

    view! {
        <div class="status-indicator" title=move || status.get().to_string()>
            {circle}
            <span class=move || refresh_icon_class(burst.is_active()) on:click=move |_| burst.trigger()>
                "⟳"
            </span>
        </div>
    }
}
