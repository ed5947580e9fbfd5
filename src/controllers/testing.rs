//! Recording mock gateway for controller tests

use crate::gateway::Gateway;
use crate::models::{FormField, Profile, TopicsSnapshot, VoteChoice, VoteReceipt};
use crate::upload::SelectedFile;
use anyhow::{anyhow, Result};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
pub enum GatewayCall {
    FetchProfile,
    UploadAvatar { file_name: String },
    FetchTopics,
    CreateTopic { fields: Vec<(&'static str, FormField)> },
    Vote { topic_id: String, choice: VoteChoice },
}

#[derive(Default)]
struct Inner {
    calls: RefCell<Vec<GatewayCall>>,
    profile: RefCell<Option<Result<Profile>>>,
    avatar: RefCell<Option<Result<Profile>>>,
    topics: RefCell<Option<Result<TopicsSnapshot>>>,
    create: RefCell<Option<Result<()>>>,
    vote: RefCell<Option<Result<VoteReceipt>>>,
}

/// Clone-shared mock: hand one clone to the controller, keep another to
/// program responses and inspect the recorded calls. Any method with no
/// programmed response fails, which doubles as the error-path fixture.
#[derive(Clone, Default)]
pub struct MockGateway {
    inner: Rc<Inner>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond_profile(&self, response: Result<Profile>) {
        *self.inner.profile.borrow_mut() = Some(response);
    }

    pub fn respond_avatar(&self, response: Result<Profile>) {
        *self.inner.avatar.borrow_mut() = Some(response);
    }

    pub fn respond_topics(&self, response: Result<TopicsSnapshot>) {
        *self.inner.topics.borrow_mut() = Some(response);
    }

    pub fn respond_create(&self, response: Result<()>) {
        *self.inner.create.borrow_mut() = Some(response);
    }

    pub fn respond_vote(&self, response: Result<VoteReceipt>) {
        *self.inner.vote.borrow_mut() = Some(response);
    }

    pub fn calls(&self) -> Vec<GatewayCall> {
        self.inner.calls.borrow().clone()
    }

    fn record(&self, call: GatewayCall) {
        self.inner.calls.borrow_mut().push(call);
    }
}

impl Gateway for MockGateway {
    async fn fetch_profile(&self) -> Result<Profile> {
        self.record(GatewayCall::FetchProfile);
        self.inner
            .profile
            .borrow_mut()
            .take()
            .unwrap_or_else(|| Err(anyhow!("request failed")))
    }

    async fn upload_avatar(&self, file: &SelectedFile) -> Result<Profile> {
        self.record(GatewayCall::UploadAvatar {
            file_name: file.name.clone(),
        });
        self.inner
            .avatar
            .borrow_mut()
            .take()
            .unwrap_or_else(|| Err(anyhow!("request failed")))
    }

    async fn fetch_topics(&self) -> Result<TopicsSnapshot> {
        self.record(GatewayCall::FetchTopics);
        self.inner
            .topics
            .borrow_mut()
            .take()
            .unwrap_or_else(|| Err(anyhow!("request failed")))
    }

    async fn create_topic(&self, fields: Vec<(&'static str, FormField)>) -> Result<()> {
        self.record(GatewayCall::CreateTopic { fields });
        self.inner
            .create
            .borrow_mut()
            .take()
            .unwrap_or_else(|| Err(anyhow!("request failed")))
    }

    async fn vote(&self, topic_id: &str, choice: VoteChoice) -> Result<VoteReceipt> {
        self.record(GatewayCall::Vote {
            topic_id: topic_id.to_string(),
            choice,
        });
        self.inner
            .vote
            .borrow_mut()
            .take()
            .unwrap_or_else(|| Err(anyhow!("request failed")))
    }
}

/// Build a listed topic from raw JSON, panicking on bad fixtures.
pub fn topic_fixture(json: &str) -> crate::models::Topic {
    serde_json::from_str(json).expect("invalid topic fixture")
}

/// A selected file with the given declared media type.
pub fn file_fixture(name: &str, media_type: &str) -> SelectedFile {
    SelectedFile {
        name: name.to_string(),
        media_type: media_type.to_string(),
        bytes: vec![0xAB; 8],
    }
}
