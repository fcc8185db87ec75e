use log::{debug, info};
use std::sync::Arc;

use crate::configuration::config::Config;
use crate::error_handling::types::*;
use crate::generation::TemplateEngine;
use crate::storage::MemoryStorage;
use crate::story_management::StoryManager;
use crate::web_interface::WebServer;

/// Owns every subsystem of the story server.
pub struct Controller {
    story_manager: Arc<StoryManager>,
    web_server: WebServer,
}

impl Controller {
    /// Validates `config` and wires the template engine, the in-memory store and the web server.
    pub fn new(config: Config) -> Result<Self, ControllerError> {
        info!("Creating controller");
        config.validate()?;

        let templates = Arc::new(TemplateEngine::new(config.seed));
        if let Some(seed) = config.seed {
            debug!("Template selection seeded with {}", seed);
        }
        let story_manager = Arc::new(StoryManager::new(
            templates.clone(),
            templates,
            Arc::new(MemoryStorage::new()),
        ));
        let web_server = WebServer::new(story_manager.clone(), config);

        Ok(Self {
            story_manager,
            web_server,
        })
    }

    pub fn story_manager(&self) -> Arc<StoryManager> {
        self.story_manager.clone()
    }

    /// Serves requests until Ctrl-C.
    pub async fn run(&self) -> Result<(), ControllerError> {
        info!("Starting web server");
        self.web_server.start().await?;
        info!("Controller stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::StoryPrompt;

    #[test]
    fn rejects_invalid_configuration() {
        let config = Config {
            bind_address: String::from("not-an-ip"),
            ..Config::default()
        };
        match Controller::new(config) {
            Err(ControllerError::ConfigurationError(ConfigError::BadIPFormatting(_))) => {}
            Err(e) => panic!("unexpected error {}", e),
            Ok(_) => panic!("controller accepted a bad bind address"),
        }
    }

    #[test]
    fn seeded_controllers_tell_the_same_story() {
        let config = Config {
            seed: Some(11),
            ..Config::default()
        };
        let prompt = StoryPrompt::new(Some("the sea"), Some("poem"), None);

        let first = Controller::new(config.clone()).unwrap();
        let second = Controller::new(config).unwrap();
        let a = first.story_manager().start_story(&prompt).unwrap();
        let b = second.story_manager().start_story(&prompt).unwrap();
        assert_eq!(a.content, b.content);
        assert_eq!(first.story_manager().story_count().unwrap(), 1);
    }
}
