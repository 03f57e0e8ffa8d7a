use leptos::*;

use crate::{
    config::AppConfig,
    global_state::globals,
    presentation::components::{Button, Kline, StatusIndicator},
};

/// 🦀 Root component: toolbar with feed status over the kline chart
#[component]
pub fn App(#[prop(optional)] config: AppConfig) -> impl IntoView {
    view! {
        <style>
            {r#"
            .kline-panel-app {
                font-family: 'SF Pro Display', -apple-system, BlinkMacSystemFont, sans-serif;
                background: #161a25;
                min-height: 100vh;
                padding: 16px;
                color: #d1d4dc;
                box-sizing: border-box;
            }

            .toolbar {
                display: flex;
                align-items: center;
                gap: 12px;
                margin-bottom: 12px;
            }

            .toolbar .spacer {
                flex: 1;
            }

            .feed-info {
                font-size: 12px;
                color: #a0a0a0;
            }

            .feed-error {
                font-size: 12px;
                color: #e05b6b;
            }

            .kp-button {
                box-sizing: border-box;
                width: 7rem;
                height: 3rem;
                text-align: center;
                font-weight: 700;
                font-size: 14px;
                transition: all 0.2s;
                border: 2px solid;
                cursor: pointer;
            }

            .kp-button--normal {
                color: white;
                background: #2962ff;
                border-color: #2962ff;
            }

            .kp-button--normal:hover {
                background: transparent;
                color: #2962ff;
            }

            .kp-button--normal:active,
            .kp-button--pressed {
                color: #26a69a;
                background: transparent;
                border-color: #26a69a;
            }

            .kp-button--locked {
                color: white;
                border-color: #9ca3af;
                cursor: not-allowed;
                background: repeating-linear-gradient(45deg, #ccc 0, #ccc 10px, #bbb 10px, #bbb 20px);
                opacity: 0.6;
            }

            .status-indicator {
                display: flex;
                align-items: center;
                gap: 8px;
            }

            .breathing-circle {
                display: inline-block;
                width: 10px;
                height: 10px;
                border-radius: 50%;
                animation: breathing 2s ease-in-out infinite;
            }

            .breathing-circle--red { background: #ef4444; }
            .breathing-circle--yellow { background: #eab308; }
            .breathing-circle--green { background: #22c55e; }

            @keyframes breathing {
                0%, 100% { transform: scale(0.9); opacity: 0.6; }
                50% { transform: scale(1.15); opacity: 1; }
            }

            .refresh-icon {
                display: inline-block;
                cursor: pointer;
                transition: transform 0.2s;
            }

            .burst-spin {
                animation: burst-spin 0.6s cubic-bezier(0.4, 0, 0.2, 1);
            }

            @keyframes burst-spin {
                0% { transform: scale(1) rotate(0deg); opacity: 1; }
                50% { transform: scale(1) rotate(540deg); opacity: 1; }
                100% { transform: scale(1) rotate(1080deg); opacity: 1; }
            }

            .kline-chart {
                width: 100%;
                height: calc(100vh - 110px);
                min-height: 360px;
            }
            "#}
        </style>
        <div class="kline-panel-app">
            <Toolbar />
            <Kline config=config />
        </div>
    }
}

/// 📊 Панель управления со статусом потока данных
#[component]
fn Toolbar() -> impl IntoView {
    let g = globals();
    let status = g.feed_status;
    let record_count = g.record_count;
    let last_error = g.last_error;
    let loading = g.loading;

    view! {
        <div class="toolbar">
            <Button title="1m" toggle=true />
            <Button title="Indicators" toggle=true />
            <Button title="Replay" lock=true />
            <div class="spacer"></div>
            <span class="feed-info">
                {move || {
                    if loading.get() {
                        "Loading...".to_string()
                    } else {
                        format!("{} bars", record_count.get())
                    }
                }}
            </span>
            {move || last_error.get().map(|message| view! { <span class="feed-error">{message}</span> })}
            <StatusIndicator status=Signal::from(status) />
        </div>
    }
}
