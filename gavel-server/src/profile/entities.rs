use {
    crate::kernel::entities::Username,
    time::OffsetDateTime,
};

/// A registered user. The password hash is an Argon2id PHC string, so the
/// salt and hashing parameters travel inside it.
#[derive(Clone, Debug)]
pub struct Profile {
    pub username:      Username,
    pub password_hash: String,
    pub created_at:    OffsetDateTime,
}
