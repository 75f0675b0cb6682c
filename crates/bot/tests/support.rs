//! Shared fixtures for bot integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use guildmeet_bot::{BotContext, MeetupCommands};
use guildmeet_core::{ChannelGateway, Interaction};
use guildmeet_domain::{
    ChannelId, Config, DatabaseConfig, GroupId, GuildMeetError, MeetupConfig, ModalForm,
    RelayConfig, Result, UserId,
};
use guildmeet_infra::MeetupOAuthClient;
use tempfile::TempDir;
use wiremock::MockServer;

pub const RELAY_CHANNEL: u64 = 555;

/// Interaction double capturing private replies and presented modals.
pub struct RecordingInteraction {
    group_id: Option<GroupId>,
    replies: Mutex<Vec<String>>,
    modals: Mutex<Vec<ModalForm>>,
}

impl RecordingInteraction {
    pub fn in_group(group_id: u64) -> Self {
        Self {
            group_id: Some(GroupId::new(group_id)),
            replies: Mutex::new(Vec::new()),
            modals: Mutex::new(Vec::new()),
        }
    }

    pub fn replies(&self) -> Vec<String> {
        self.replies.lock().unwrap().clone()
    }

    pub fn modals(&self) -> Vec<ModalForm> {
        self.modals.lock().unwrap().clone()
    }
}

#[async_trait]
impl Interaction for RecordingInteraction {
    fn user_id(&self) -> UserId {
        UserId::new(7)
    }

    fn group_id(&self) -> Option<GroupId> {
        self.group_id
    }

    async fn reply_ephemeral(&self, content: &str) -> Result<()> {
        self.replies.lock().unwrap().push(content.to_string());
        Ok(())
    }

    async fn present_modal(&self, form: &ModalForm) -> Result<()> {
        self.modals.lock().unwrap().push(form.clone());
        Ok(())
    }
}

/// Channel gateway that knows a single channel.
pub struct RecordingChannelGateway {
    known: ChannelId,
    sent: Mutex<Vec<(ChannelId, String)>>,
}

impl RecordingChannelGateway {
    pub fn knowing(channel: u64) -> Arc<Self> {
        Arc::new(Self { known: ChannelId::new(channel), sent: Mutex::new(Vec::new()) })
    }

    pub fn sent(&self) -> Vec<(ChannelId, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChannelGateway for RecordingChannelGateway {
    async fn send_message(&self, channel_id: ChannelId, content: &str) -> Result<()> {
        if channel_id != self.known {
            return Err(GuildMeetError::NotFound(format!("channel {channel_id}")));
        }
        self.sent.lock().unwrap().push((channel_id, content.to_string()));
        Ok(())
    }
}

/// Fully wired bot against a mock token endpoint and a temporary database.
pub struct TestBot {
    pub commands: MeetupCommands,
    pub channels: Arc<RecordingChannelGateway>,
    pub server: MockServer,
    _temp_dir: TempDir,
}

pub fn test_config(temp_dir: &TempDir) -> Config {
    Config {
        meetup: MeetupConfig::new("id1", "sec1", "https://x/cb"),
        relay: RelayConfig { channel_id: ChannelId::new(RELAY_CHANNEL) },
        database: DatabaseConfig {
            path: temp_dir.path().join("guildmeet.db").to_string_lossy().to_string(),
            pool_size: 2,
        },
    }
}

pub async fn setup_test_bot() -> TestBot {
    let temp_dir = TempDir::new().expect("failed to create temporary database directory");
    let server = MockServer::start().await;
    let config = test_config(&temp_dir);

    let oauth = MeetupOAuthClient::new(config.meetup.clone())
        .expect("client builds")
        .with_endpoints(
            format!("{}/oauth2/authorize", server.uri()),
            format!("{}/oauth2/access", server.uri()),
        );

    let channels = RecordingChannelGateway::knowing(RELAY_CHANNEL);
    let context = BotContext::with_oauth(config, Arc::new(oauth), channels.clone())
        .expect("context builds");

    TestBot {
        commands: MeetupCommands::new(Arc::new(context)),
        channels,
        server,
        _temp_dir: temp_dir,
    }
}
