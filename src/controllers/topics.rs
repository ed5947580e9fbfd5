//! Topic list, vote eligibility, and vote actions

use crate::alert::{AlertKind, AlertQueue};
use crate::gateway::Gateway;
use crate::loading::LoadingState;
use crate::models::{Topic, VoteChoice};
use serde_json::Value;
use std::collections::HashMap;

pub struct TopicsController<G: Gateway> {
    gateway: G,
    pub topics: Vec<Topic>,
    pub can_vote: bool,
    /// Ids of topics the current user authored.
    pub my_topics: HashMap<String, Value>,
    /// Topic id to the user's vote record.
    pub my_votes: HashMap<String, Value>,
    pub alerts: AlertQueue,
    pub loading: LoadingState,
}

impl<G: Gateway> TopicsController<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            topics: Vec::new(),
            can_vote: false,
            my_topics: HashMap::new(),
            my_votes: HashMap::new(),
            alerts: AlertQueue::new(),
            loading: LoadingState::new(),
        }
    }

    /// Fetch the topic list and the caller's voting state; all four pieces
    /// are replaced together from the response.
    pub async fn load(&mut self) {
        let _busy = self.loading.begin("Retrieving latest topics...");
        match self.gateway.fetch_topics().await {
            Ok(snapshot) => {
                self.topics = snapshot.topics;
                self.can_vote = snapshot.can_vote;
                self.my_topics = snapshot.my_topics;
                self.my_votes = snapshot.my_votes;
            }
            Err(err) => {
                tracing::warn!("topics fetch failed: {:#}", err);
                self.alerts
                    .push(AlertKind::Danger, "Unable to load topics data.");
            }
        }
    }

    /// True when the user may not vote at all, authored the topic, or has
    /// already voted on it. Recomputed from current state on every call.
    pub fn ineligible_for_vote(&self, topic_id: &str) -> bool {
        !self.can_vote
            || self.my_topics.contains_key(topic_id)
            || self.my_votes.contains_key(topic_id)
    }

    /// Vote on the topic at `index`. An out-of-range index is a no-op with
    /// no request. On success only that list entry is replaced; the vote
    /// set is replaced wholesale from the server. Vote actions show no
    /// loading indicator.
    pub async fn vote(&mut self, index: usize, choice: VoteChoice) {
        let topic_id = match self.topics.get(index) {
            Some(topic) => topic.id.clone(),
            None => return,
        };

        match self.gateway.vote(&topic_id, choice).await {
            Ok(receipt) => {
                self.topics[index] = receipt.topic;
                self.my_votes = receipt.my_votes;
            }
            Err(err) => {
                tracing::warn!("vote on {} failed: {:#}", topic_id, err);
                self.alerts.push(
                    AlertKind::Danger,
                    format!("Unable to record vote for {}", topic_id),
                );
            }
        }
    }
}
