use anyhow::Context;
use scanner_engine::AnalysisSettings;

/// The deployment credential for the completion endpoint.
pub const API_KEY_ENV: &str = "ANTHROPIC_API_KEY";

/// Builds the analyzer settings from the environment plus CLI overrides.
///
/// The credential is checked here so a missing key is a startup error
/// rather than an error banner on the first analysis.
pub fn analysis_settings(model: Option<String>) -> anyhow::Result<AnalysisSettings> {
    let api_key = std::env::var(API_KEY_ENV)
        .with_context(|| format!("{API_KEY_ENV} must be set to the API credential"))?;

    let mut settings = AnalysisSettings {
        api_key,
        ..AnalysisSettings::default()
    };
    if let Some(model) = model {
        settings.model = model;
    }
    Ok(settings)
}
