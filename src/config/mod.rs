use serde::Deserialize;
use config::{Config, ConfigError, Environment, File};

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub feed: FeedConfig,
    pub listing: ListingConfig,
    pub render: RenderConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FeedConfig {
    /// HTTP(S) URL or filesystem path of the announcements document.
    pub source: String,
    pub request_timeout_secs: u64,
    #[serde(default = "default_true")]
    pub cache_bust: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ListingConfig {
    pub page_size: usize,
    pub max_visible_buttons: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RenderConfig {
    pub static_prefix: String,
    pub default_image: String,
    pub home_url: String,
    pub description_preview_chars: usize,
    pub carousel_preview_chars: usize,
    pub section_preview_items: usize,
}

fn default_true() -> bool {
    true
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let config = Config::builder()
            // Start with default values
            .set_default("feed.source", "static/data/data.json")?
            .set_default("feed.request_timeout_secs", 10)?
            .set_default("feed.cache_bust", true)?
            .set_default("listing.page_size", 10)?
            .set_default("listing.max_visible_buttons", 3)?
            .set_default("render.static_prefix", "/static")?
            .set_default("render.default_image", "/static/images/default.png")?
            .set_default("render.home_url", "/homepage")?
            .set_default("render.description_preview_chars", 72)?
            .set_default("render.carousel_preview_chars", 20)?
            .set_default("render.section_preview_items", 5)?

            // Add config file if it exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))

            // Add environment variables (with NOTICEBOARD__ prefix, double underscore separates levels)
            .add_source(Environment::with_prefix("NOTICEBOARD").separator("__"))

            .build()?;

        config.try_deserialize()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            feed: FeedConfig {
                source: "static/data/data.json".to_string(),
                request_timeout_secs: 10,
                cache_bust: true,
            },
            listing: ListingConfig {
                page_size: 10,
                max_visible_buttons: 3,
            },
            render: RenderConfig::default(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            static_prefix: "/static".to_string(),
            default_image: "/static/images/default.png".to_string(),
            home_url: "/homepage".to_string(),
            description_preview_chars: 72,
            carousel_preview_chars: 20,
            section_preview_items: 5,
        }
    }
}
