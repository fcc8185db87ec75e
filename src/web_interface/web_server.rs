use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use log::{info, warn};
use tokio::sync::Notify;
use warp::filters::BoxedFilter;
use warp::reply::Response;
use warp::{Filter, Reply};

use super::assets::web_ui_route;
use super::routes::*;
use crate::configuration::Config;
use crate::error_handling::types::WebError;
use crate::story_management::StoryManager;

/// Ports tried in order: `first`, `first + 1`, ... at most `attempts` of them.
pub fn candidate_ports(first: u16, attempts: u16) -> impl Iterator<Item = u16> {
    (0..attempts).map_while(move |offset| first.checked_add(offset))
}

/// Web server for the story API and the embedded front-end
pub struct WebServer {
    story_manager: Arc<StoryManager>,
    config: Config,
}

impl WebServer {
    /// Create a new WebServer instance
    pub fn new(story_manager: Arc<StoryManager>, config: Config) -> Self {
        Self {
            story_manager,
            config,
        }
    }

    /// Every route, with rejections turned into JSON errors and CORS applied when enabled.
    pub fn routes(&self) -> BoxedFilter<(Response,)> {
        let manager = self.story_manager.clone();
        let limit = self.config.max_body_bytes;

        let api = start_story_route(manager.clone(), limit)
            .or(continue_story_route(manager.clone(), limit))
            .or(mock_story_route(manager.clone(), limit))
            .or(mock_continue_route(manager.clone(), limit))
            .or(get_story_route(manager));

        let routes = if self.config.web_ui_enabled {
            api.or(web_ui_route())
                .map(|reply| Reply::into_response(reply))
                .boxed()
        } else {
            api.map(|reply| Reply::into_response(reply)).boxed()
        };
        let routes = routes.recover(handle_rejection).unify();

        if self.config.cors_enabled {
            let cors = warp::cors()
                .allow_any_origin()
                .allow_methods(vec!["GET", "POST", "OPTIONS"])
                .allow_headers(vec!["content-type"]);
            routes
                .with(cors)
                .map(|reply| Reply::into_response(reply))
                .boxed()
        } else {
            routes.boxed()
        }
    }

    /// Binds the first free port among the candidates.
    ///
    /// Returns the bound address and the server future; the server stops once `shutdown` is
    /// notified.
    pub fn bind(
        &self,
        shutdown: Arc<Notify>,
    ) -> Result<(SocketAddr, impl Future<Output = ()>), WebError> {
        let ip = self
            .config
            .bind_ip()
            .map_err(|e| WebError::BindFailed(e.to_string()))?;
        let routes = self.routes();

        for port in candidate_ports(self.config.port, self.config.port_fallback_attempts) {
            let signal = shutdown.clone();
            match warp::serve(routes.clone())
                .try_bind_with_graceful_shutdown((ip, port), async move {
                    signal.notified().await
                }) {
                Ok((addr, server)) => return Ok((addr, server)),
                Err(e) => warn!("Port {} is busy ({}), trying the next one", port, e),
            }
        }

        Err(WebError::NoAvailablePort {
            first: self.config.port,
            attempts: self.config.port_fallback_attempts,
        })
    }

    /// Start the web server and run it until Ctrl-C
    pub async fn start(&self) -> Result<(), WebError> {
        let shutdown = Arc::new(Notify::new());
        let (addr, server) = self.bind(shutdown.clone())?;
        info!("Server running on {}", addr);

        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("Shutdown signal received");
                shutdown.notify_one();
            }
        });

        server.await;
        info!("Server stopped");
        Ok(())
    }
}
