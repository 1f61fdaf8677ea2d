//! Demo configuration, read from the environment once at startup.

/// Environment variable selecting the report format.
pub const REPORT_ENV: &str = "STOCKROOM_REPORT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default)]
pub struct DemoConfig {
    pub report: ReportFormat,
}

impl DemoConfig {
    pub fn from_env() -> Self {
        let report = match std::env::var(REPORT_ENV) {
            Ok(value) => Self::parse_report(&value).unwrap_or_else(|| {
                tracing::warn!(value = %value, "unrecognised {REPORT_ENV}; using text");
                ReportFormat::Text
            }),
            Err(_) => ReportFormat::Text,
        };
        Self { report }
    }

    fn parse_report(value: &str) -> Option<ReportFormat> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Some(ReportFormat::Text),
            "json" => Some(ReportFormat::Json),
            _ => None,
        }
    }
}
