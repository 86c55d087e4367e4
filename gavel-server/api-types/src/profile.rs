use {
    crate::{
        AccessLevel,
        Routable,
        Username,
    },
    serde::{
        Deserialize,
        Serialize,
    },
    strum::AsRefStr,
    time::OffsetDateTime,
    utoipa::{
        ToResponse,
        ToSchema,
    },
};

#[derive(Serialize, Deserialize, ToSchema, Clone, ToResponse, Debug)]
pub struct CreateProfile {
    /// The username to register. Must be unique.
    #[schema(example = "alice")]
    pub username: Username,
    /// The password for the new account. Minimum length is configured server side.
    #[schema(example = "correct-horse-battery-staple")]
    pub password: String,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, ToResponse)]
pub struct Profile {
    /// The registered username.
    #[schema(example = "alice")]
    pub username:   Username,
    /// When the profile was created.
    #[schema(example = "2026-08-06T17:00:00Z", value_type = String)]
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(AsRefStr, Clone)]
#[strum(prefix = "/")]
pub enum Route {
    #[strum(serialize = "register")]
    PostRegister,
}

impl Routable for Route {
    fn properties(&self) -> crate::RouteProperties {
        let full_path = self.as_ref().to_string();
        match self {
            Route::PostRegister => crate::RouteProperties {
                access_level: AccessLevel::Public,
                method: http::Method::POST,
                full_path,
            },
        }
    }
}
