use std::time::Duration;

/// Storefront configuration
///
/// # Environment variables
///
/// Every field can be overridden through the environment:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WHATSAPP_NUMBER | 9779851234567 | Order destination number (no `+`) |
/// | API_BASE_URL | http://localhost:8080/api | Future backend; unused by the mock paths |
/// | MOCK_DELAY_MS | 300 | Simulated data-access latency |
/// | WORK_DIR | . | Directory holding the cart database |
#[derive(Debug, Clone)]
pub struct Config {
    /// WhatsApp destination for order messages
    pub whatsapp_number: String,
    /// Base URL of the future real backend (unused while mocked)
    pub api_base_url: String,
    /// Simulated latency applied by the mock data-access layer
    pub mock_delay: Duration,
    /// Directory holding local-device state (cart database)
    pub work_dir: String,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        Self {
            whatsapp_number: std::env::var("WHATSAPP_NUMBER")
                .unwrap_or_else(|_| "9779851234567".into()),
            api_base_url: std::env::var("API_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8080/api".into()),
            mock_delay: Duration::from_millis(
                std::env::var("MOCK_DELAY_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(300),
            ),
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| ".".into()),
        }
    }

    /// Path of the cart database inside the work directory
    pub fn cart_db_path(&self) -> std::path::PathBuf {
        std::path::Path::new(&self.work_dir).join("cart.redb")
    }
}
