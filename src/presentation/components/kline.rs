use leptos::html::Div;
use leptos::*;
use std::rc::Rc;

use crate::{
    application::KlineService,
    config::AppConfig,
    domain::{
        logging::{LogComponent, get_logger},
        market_data::MarketRecord,
    },
    event_utils::on_window_resize,
    global_state::{mark_failed, mark_loaded, mark_loading},
    infrastructure::rendering::EchartsRenderer,
};

/// 📈 Candlestick + volume chart fed by the configured market data source
#[component]
pub fn Kline(#[prop(optional)] config: AppConfig) -> impl IntoView {
    let container = create_node_ref::<Div>();
    let renderer = create_rw_signal(None::<EchartsRenderer>);
    let records = create_rw_signal(Vec::<MarketRecord>::new());
    let service = Rc::new(KlineService::from_config(&config));

    // Инициализация ECharts после монтирования, затем загрузка данных
    let loader = Rc::clone(&service);
    create_effect(move |_| {
        let Some(element) = container.get() else {
            return;
        };
        if renderer.with_untracked(Option::is_some) {
            return;
        }

        match EchartsRenderer::init(&element) {
            Ok(chart) => renderer.set(Some(chart)),
            Err(e) => {
                get_logger().error(LogComponent::Presentation("Kline"), &format!("❌ {e}"));
                mark_failed(e.to_string());
                return;
            }
        }

        let loader = Rc::clone(&loader);
        spawn_local(async move {
            mark_loading();
            match loader.load().await {
                Ok(loaded) => {
                    mark_loaded(loaded.records.len());
                    records.set(loaded.records);
                }
                Err(e) => {
                    get_logger().error(LogComponent::Presentation("Kline"), &format!("❌ Load failed: {e}"));
                    mark_failed(e.to_string());
                }
            }
        });
    });

    // Перерисовка при новых данных
    let painter = Rc::clone(&service);
    create_effect(move |_| {
        records.with(|records| {
            if records.is_empty() {
                return;
            }
            let option = painter.chart_option(records);
            renderer.with(|chart| {
                let Some(chart) = chart else {
                    return;
                };
                match chart.render(&option) {
                    Ok(()) => {
                        crate::log_debug!(LogComponent::Presentation("Kline"), "🎨 Rendered {} bars", records.len());
                    }
                    Err(e) => {
                        get_logger().error(LogComponent::Presentation("Kline"), &format!("❌ {e}"));
                        mark_failed(e.to_string());
                    }
                }
            });
        });
    });

    let resize_listener = on_window_resize(move || {
        renderer.with_untracked(|chart| {
            if let Some(chart) = chart {
                chart.resize();
            }
        });
    });

    on_cleanup(move || {
        resize_listener.remove();
        let _ = renderer.try_with_untracked(|chart| {
            if let Some(chart) = chart {
                chart.dispose();
            }
        });
    });

    view! { <div class="kline-chart" node_ref=container></div> }
}
