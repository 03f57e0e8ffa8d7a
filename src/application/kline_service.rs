use crate::{
    config::AppConfig,
    domain::{
        chart::{ChartData, ChartTheme, split_data},
        errors::AppResult,
        logging::{LogComponent, get_logger},
        market_data::{MarketDataSource, MarketRecord, RecordPolicy, RecordValidationService, SanitizedRecords},
    },
    infrastructure::{
        data_source::{FetchPolicy, fetch_with_policy, source_from_config},
        rendering::EchartsOption,
    },
};

/// Сервис приложения: загрузка свечей и подготовка опций графика
pub struct KlineService {
    source: Box<dyn MarketDataSource>,
    fetch_policy: FetchPolicy,
    record_policy: RecordPolicy,
    theme: ChartTheme,
}

impl KlineService {
    pub fn new(
        source: Box<dyn MarketDataSource>,
        fetch_policy: FetchPolicy,
        record_policy: RecordPolicy,
        theme: ChartTheme,
    ) -> Self {
        Self { source, fetch_policy, record_policy, theme }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            source_from_config(&config.feed),
            FetchPolicy::from(&config.feed),
            config.feed.record_policy,
            config.chart.clone(),
        )
    }

    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }

    /// Fetch under the configured policy, then run the record checks.
    pub async fn load(&self) -> AppResult<SanitizedRecords> {
        get_logger().info(
            LogComponent::Application("KlineService"),
            &format!("📡 Loading klines from {} source...", self.source.name()),
        );

        let records = fetch_with_policy(self.source.as_ref(), &self.fetch_policy).await?;
        let sanitized = RecordValidationService::sanitize(records, self.record_policy);

        for issue in &sanitized.issues {
            crate::log_warn!(LogComponent::Application("KlineService"), "⚠️ {issue}");
        }
        get_logger().info(
            LogComponent::Application("KlineService"),
            &format!(
                "✅ Loaded {} records ({} flagged, {} dropped)",
                sanitized.records.len(),
                sanitized.issues.len(),
                sanitized.dropped
            ),
        );
        Ok(sanitized)
    }

    pub fn chart_data(records: &[MarketRecord]) -> ChartData {
        split_data(records)
    }

    /// Full ECharts option for `records`.
    pub fn chart_option(&self, records: &[MarketRecord]) -> EchartsOption {
        EchartsOption::kline(&Self::chart_data(records), &self.theme)
    }
}
