use {
    crate::kernel::entities::Username,
    time::OffsetDateTime,
};

/// An opaque bearer credential proving a prior successful login.
pub type SessionToken = String;

#[derive(Clone, Debug)]
pub struct Session {
    pub token:      SessionToken,
    pub username:   Username,
    pub issued_at:  OffsetDateTime,
    pub expires_at: OffsetDateTime,
}

impl Session {
    pub fn is_expired(&self, now: OffsetDateTime) -> bool {
        now >= self.expires_at
    }
}
