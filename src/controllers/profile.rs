//! Profile fetching and avatar upload

use crate::alert::{AlertKind, AlertQueue};
use crate::gateway::Gateway;
use crate::loading::LoadingState;
use crate::models::Profile;
use crate::upload::{self, ImageSelection, SelectedFile};
use chrono::Utc;

pub struct ProfileController<G: Gateway> {
    gateway: G,
    pub profile: Profile,
    pub alerts: AlertQueue,
    pub loading: LoadingState,
}

impl<G: Gateway> ProfileController<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            profile: Profile::default(),
            alerts: AlertQueue::new(),
            loading: LoadingState::new(),
        }
    }

    /// Fetch the profile; call once when the profile view is entered.
    /// Failure surfaces one alert and leaves the current profile in place.
    pub async fn load(&mut self) {
        let _busy = self.loading.begin("Retrieving profile...");
        match self.gateway.fetch_profile().await {
            Ok(profile) => self.profile = profile,
            Err(err) => {
                tracing::warn!("profile fetch failed: {:#}", err);
                self.alerts
                    .push(AlertKind::Danger, "Unable to load profile data.");
            }
        }
    }

    /// Validate the selection and submit the file as the `avatar` multipart
    /// field. Multi-file selections are dropped without feedback; a single
    /// non-image file gets an alert and no request.
    pub async fn upload_avatar(&mut self, files: &[SelectedFile]) {
        let file = match upload::select_image(files) {
            ImageSelection::Image(file) => file,
            ImageSelection::NotAnImage => {
                self.alerts
                    .push(AlertKind::Danger, "You must provide an image file.");
                return;
            }
            ImageSelection::Ignored => return,
        };

        let _busy = self.loading.begin("Uploading avatar...");
        match self.gateway.upload_avatar(&file).await {
            Ok(mut profile) => {
                // The avatar path is stable across uploads, so a renderer
                // would keep showing its cached image; the timestamp query
                // forces a refetch.
                if let Some(avatar) = profile.avatar.as_mut() {
                    avatar.push_str(&format!("?ts={}", Utc::now().timestamp_millis()));
                }
                self.profile = profile;
                self.alerts.push(AlertKind::Success, "Avatar uploaded.");
            }
            Err(err) => {
                tracing::warn!("avatar upload failed: {:#}", err);
                self.alerts.push(AlertKind::Danger, "Unable to upload avatar");
            }
        }
    }
}
