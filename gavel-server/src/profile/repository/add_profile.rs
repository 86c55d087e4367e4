use {
    super::Repository,
    crate::{
        api::RestError,
        profile::entities,
    },
};

impl Repository {
    /// The existence check and the insert happen under one write guard, so
    /// two registrations racing on the same username admit exactly one.
    pub async fn add_profile(
        &self,
        profile: entities::Profile,
    ) -> Result<entities::Profile, RestError> {
        let mut profiles = self.in_memory_store.profiles.write().await;
        if profiles.contains_key(&profile.username) {
            return Err(RestError::DuplicateUser);
        }
        profiles.insert(profile.username.clone(), profile.clone());
        Ok(profile)
    }
}
