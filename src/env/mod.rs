pub const ENVIRONMENT: &str = "ENVIRONMENT";
pub const DEFAULT_ENVIRONMENT: &str = "development";

pub fn init() {
    if std::env::var_os(ENVIRONMENT).is_none() {
        tracing::warn!(
            variable = ENVIRONMENT,
            fallback = DEFAULT_ENVIRONMENT,
            "Deployment environment isn't set, health checks will report the fallback."
        );
    }
}

/// Read on every call so a changed deployment environment shows up without a restart.
pub fn current_environment() -> String {
    std::env::var(ENVIRONMENT).unwrap_or_else(|_| DEFAULT_ENVIRONMENT.to_string())
}
