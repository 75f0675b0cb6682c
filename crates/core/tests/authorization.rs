//! Integration tests for the `authenticate` command.

mod support;

use guildmeet_core::AuthorizationService;
use support::meetup::{MockOAuth, RecordingInteraction};

#[tokio::test]
async fn replies_privately_with_authorization_url() {
    let service = AuthorizationService::new(MockOAuth::with_credentials("id1", "https://x/cb"));
    let interaction = RecordingInteraction::in_group(42);

    service.authenticate(&interaction).await.unwrap();

    assert_eq!(
        interaction.replies(),
        vec![
            "Authenticate with meetup.com:\n \
             https://secure.meetup.com/oauth2/authorize?client_id=id1&response_type=code&redirect_uri=https://x/cb"
                .to_string()
        ]
    );
    assert!(interaction.modals().is_empty());
}

#[tokio::test]
async fn repeated_invocations_produce_identical_replies() {
    let service = AuthorizationService::new(MockOAuth::with_credentials("id1", "https://x/cb"));
    let first = RecordingInteraction::in_group(1);
    let second = RecordingInteraction::direct_message();

    service.authenticate(&first).await.unwrap();
    service.authenticate(&second).await.unwrap();

    assert_eq!(first.replies(), second.replies());
}

#[tokio::test]
async fn reply_failure_is_returned() {
    let service = AuthorizationService::new(MockOAuth::with_credentials("id1", "https://x/cb"));
    let interaction = RecordingInteraction::in_group(1).with_failing_replies();

    assert!(service.authenticate(&interaction).await.is_err());
}
