use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use guildmeet_core::{ChannelGateway, Interaction, MeetupOAuthPort, TokenRepository};
use guildmeet_domain::{
    ChannelId, GroupId, GuildMeetError, ModalForm, Result as DomainResult,
    ScheduledEventNotification, TokenExchange, TokenRecord, UserId,
};
use serde_json::Value;

/// OAuth double answering every exchange with a canned body or failure.
pub struct MockOAuth {
    client_id: String,
    redirect_uri: String,
    response: DomainResult<Value>,
    codes: Mutex<Vec<String>>,
}

impl MockOAuth {
    pub fn responding(body: Value) -> Arc<Self> {
        Arc::new(Self::build(Ok(body)))
    }

    pub fn failing(error: GuildMeetError) -> Arc<Self> {
        Arc::new(Self::build(Err(error)))
    }

    pub fn with_credentials(client_id: &str, redirect_uri: &str) -> Arc<Self> {
        let mut mock = Self::build(Ok(Value::Null));
        mock.client_id = client_id.to_string();
        mock.redirect_uri = redirect_uri.to_string();
        Arc::new(mock)
    }

    fn build(response: DomainResult<Value>) -> Self {
        Self {
            client_id: "client".to_string(),
            redirect_uri: "https://bot.example/callback".to_string(),
            response,
            codes: Mutex::new(Vec::new()),
        }
    }

    pub fn codes(&self) -> Vec<String> {
        self.codes.lock().unwrap().clone()
    }

    fn answer(&self) -> DomainResult<TokenExchange> {
        self.response.clone().and_then(TokenExchange::from_json)
    }
}

#[async_trait]
impl MeetupOAuthPort for MockOAuth {
    fn authorization_url(&self) -> String {
        format!(
            "https://secure.meetup.com/oauth2/authorize?client_id={}&response_type=code&redirect_uri={}",
            self.client_id, self.redirect_uri
        )
    }

    async fn exchange_code(&self, code: &str) -> DomainResult<TokenExchange> {
        self.codes.lock().unwrap().push(code.to_string());
        self.answer()
    }

    async fn exchange_refresh_token(&self, _refresh_token: &str) -> DomainResult<TokenExchange> {
        self.answer()
    }
}

/// Token store keeping every save in order.
#[derive(Default)]
pub struct InMemoryTokenRepository {
    saved: Mutex<Vec<TokenRecord>>,
    fail_with: Option<GuildMeetError>,
}

impl InMemoryTokenRepository {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing(error: GuildMeetError) -> Arc<Self> {
        Arc::new(Self { saved: Mutex::new(Vec::new()), fail_with: Some(error) })
    }

    pub fn saved(&self) -> Vec<TokenRecord> {
        self.saved.lock().unwrap().clone()
    }

    pub fn find_latest(&self, group_id: GroupId) -> Option<TokenRecord> {
        self.saved.lock().unwrap().iter().rev().find(|r| r.group_id == group_id).cloned()
    }
}

#[async_trait]
impl TokenRepository for InMemoryTokenRepository {
    async fn save_token(&self, record: &TokenRecord) -> DomainResult<()> {
        if let Some(err) = &self.fail_with {
            return Err(err.clone());
        }
        self.saved.lock().unwrap().push(record.clone());
        Ok(())
    }

    async fn find_token(&self, group_id: GroupId) -> DomainResult<Option<TokenRecord>> {
        Ok(self.find_latest(group_id))
    }
}

/// Interaction double capturing private replies and presented modals.
pub struct RecordingInteraction {
    user_id: UserId,
    group_id: Option<GroupId>,
    replies: Mutex<Vec<String>>,
    modals: Mutex<Vec<ModalForm>>,
    fail_replies: bool,
}

impl RecordingInteraction {
    pub fn in_group(group_id: u64) -> Self {
        Self {
            user_id: UserId::new(7),
            group_id: Some(GroupId::new(group_id)),
            replies: Mutex::new(Vec::new()),
            modals: Mutex::new(Vec::new()),
            fail_replies: false,
        }
    }

    pub fn direct_message() -> Self {
        Self { group_id: None, ..Self::in_group(0) }
    }

    pub fn with_failing_replies(mut self) -> Self {
        self.fail_replies = true;
        self
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
        self.user_id
    }

    fn group_id(&self) -> Option<GroupId> {
        self.group_id
    }

    async fn reply_ephemeral(&self, content: &str) -> DomainResult<()> {
        if self.fail_replies {
            return Err(GuildMeetError::Platform("interaction already acknowledged".into()));
        }
        self.replies.lock().unwrap().push(content.to_string());
        Ok(())
    }

    async fn present_modal(&self, form: &ModalForm) -> DomainResult<()> {
        self.modals.lock().unwrap().push(form.clone());
        Ok(())
    }
}

/// Channel double capturing every message sent.
#[derive(Default)]
pub struct RecordingChannelGateway {
    sent: Mutex<Vec<(ChannelId, String)>>,
    fail: bool,
}

impl RecordingChannelGateway {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self { sent: Mutex::new(Vec::new()), fail: true })
    }

    pub fn sent(&self) -> Vec<(ChannelId, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChannelGateway for RecordingChannelGateway {
    async fn send_message(&self, channel_id: ChannelId, content: &str) -> DomainResult<()> {
        if self.fail {
            return Err(GuildMeetError::NotFound(format!("channel {channel_id}")));
        }
        self.sent.lock().unwrap().push((channel_id, content.to_string()));
        Ok(())
    }
}

/// Notification with guild "G", creator "C" and event name "E".
pub fn sample_event() -> ScheduledEventNotification {
    ScheduledEventNotification {
        guild_name: "G".into(),
        guild_id: GroupId::new(100),
        creator: Some("C".into()),
        creator_id: Some(UserId::new(200)),
        name: "E".into(),
        description: Some("Monthly meetup".into()),
        start_time: Utc.with_ymd_and_hms(2024, 5, 2, 17, 0, 0).unwrap(),
        end_time: Some(Utc.with_ymd_and_hms(2024, 5, 2, 19, 0, 0).unwrap()),
        cover_image_url: Some("https://cdn.example/e.png".into()),
    }
}
