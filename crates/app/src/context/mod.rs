//! Application context - dependency injection container

use std::path::PathBuf;
use std::sync::Arc;

use creatorhub_core::DataUpdateService;
use creatorhub_domain::{Result, SiteConfig};
use creatorhub_infra::config::{self, load_credentials_from_env, Credentials};
use creatorhub_infra::{
    HttpClient, InstagramClient, JsonHistoryStore, JsonSiteDataStore, TelegramClient, TikTokClient,
    TwitchClient, VkClient, XClient, YouTubeClient,
};
use tracing::{debug, info};

/// Application context - holds configuration, credentials and the shared
/// infrastructure every command uses.
pub struct AppContext {
    pub config: SiteConfig,
    pub credentials: Credentials,
    pub http_client: HttpClient,
    pub data_store: Arc<JsonSiteDataStore>,
    pub history_store: Arc<JsonHistoryStore>,
}

impl AppContext {
    /// Load the site config (see [`config::load`]) and credentials from the
    /// environment.
    pub fn new(config_path: Option<PathBuf>) -> Result<Self> {
        let config = config::load(config_path)?;
        Self::with_parts(config, load_credentials_from_env())
    }

    pub fn with_parts(config: SiteConfig, credentials: Credentials) -> Result<Self> {
        let http_client = HttpClient::new()?;
        let data_store = Arc::new(JsonSiteDataStore::new(&config.site.data_path));
        let history_store = Arc::new(JsonHistoryStore::new(&config.site.history_path));

        info!(
            data_path = %config.site.data_path,
            history_path = %config.site.history_path,
            "Application context ready"
        );

        Ok(Self { config, credentials, http_client, data_store, history_store })
    }

    /// Update service wired with a client for every configured platform.
    ///
    /// Unconfigured platforms are skipped and reported as setup warnings.
    pub fn update_service(&self) -> DataUpdateService {
        let http = &self.http_client;
        let creds = &self.credentials;
        let mut service = DataUpdateService::new(self.data_store.clone(), self.history_store.clone());

        for (platform, message) in creds.setup_warnings() {
            service = service.with_setup_warning(platform, message);
        }

        if let Some(youtube) = &creds.youtube {
            let client = Arc::new(YouTubeClient::new(youtube.clone(), http.clone()));
            service = service
                .with_follower_source(client.clone())
                .with_video_feed(client.clone())
                .with_youtube_live(client);
        }
        if let Some(telegram) = &creds.telegram {
            service = service.with_follower_source(Arc::new(TelegramClient::new(telegram.clone(), http.clone())));
        }
        if let Some(instagram) = &creds.instagram {
            service = service.with_follower_source(Arc::new(InstagramClient::new(instagram.clone(), http.clone())));
        }
        if let Some(x) = &creds.x {
            service = service.with_follower_source(Arc::new(XClient::new(x.clone(), http.clone())));
        }
        if let Some(twitch) = &creds.twitch {
            let client = Arc::new(TwitchClient::new(twitch.clone(), http.clone()));
            service = service.with_follower_source(client.clone()).with_twitch_live(client);
        }
        if let Some(tiktok) = &creds.tiktok {
            service = service.with_follower_source(Arc::new(TikTokClient::new(tiktok.clone(), http.clone())));
        }
        if let Some(vk) = &creds.vk_group {
            service = service.with_follower_source(Arc::new(VkClient::group(vk.clone(), http.clone())));
        }
        if let Some(vk) = &creds.vk_personal {
            service = service.with_follower_source(Arc::new(VkClient::personal(vk.clone(), http.clone())));
        }

        debug!(warnings = creds.setup_warnings().len(), "Update service wired");
        service
    }
}
