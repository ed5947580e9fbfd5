//! New-topic form state and submission

use crate::alert::{AlertKind, AlertQueue};
use crate::gateway::Gateway;
use crate::loading::LoadingState;
use crate::models::TopicDraft;
use crate::upload::{self, ImageSelection, SelectedFile};

pub struct NewTopicController<G: Gateway> {
    gateway: G,
    pub draft: TopicDraft,
    pub alerts: AlertQueue,
    pub loading: LoadingState,
}

impl<G: Gateway> NewTopicController<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            draft: TopicDraft::default(),
            alerts: AlertQueue::new(),
            loading: LoadingState::new(),
        }
    }

    /// Submit the draft as multipart form data, sending only its non-empty
    /// fields. The draft is reset to empty values only after a successful
    /// submission, so the user can retry a failed one unchanged.
    pub async fn submit(&mut self) {
        let _busy = self.loading.begin("Creating new topic...");
        let fields = self.draft.form_fields();
        match self.gateway.create_topic(fields).await {
            Ok(()) => {
                self.alerts.push(AlertKind::Success, "New topic created");
                self.draft = TopicDraft::default();
            }
            Err(err) => {
                tracing::warn!("topic creation failed: {:#}", err);
                self.alerts.push(AlertKind::Danger, "Unable to create topic");
            }
        }
    }

    /// Store a selected image into the draft; it travels with the next
    /// `submit` call rather than uploading immediately. Same selection
    /// rules as the avatar upload.
    pub fn attach_image(&mut self, files: &[SelectedFile]) {
        match upload::select_image(files) {
            ImageSelection::Image(file) => self.draft.image = Some(file),
            ImageSelection::NotAnImage => {
                self.alerts
                    .push(AlertKind::Danger, "You must provide an image file.");
            }
            ImageSelection::Ignored => {}
        }
    }
}
