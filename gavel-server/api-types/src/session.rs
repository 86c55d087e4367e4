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
    utoipa::{
        ToResponse,
        ToSchema,
    },
};

#[derive(Serialize, Deserialize, ToSchema, Clone, ToResponse, Debug)]
pub struct Login {
    /// The username to log in as.
    #[schema(example = "alice")]
    pub username: Username,
    /// The password for the account.
    #[schema(example = "correct-horse-battery-staple")]
    pub password: String,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, ToResponse)]
pub struct AccessToken {
    /// The session token. Pass it as a bearer token on authenticated requests.
    #[schema(example = "_q9zUYP-tQg8F7kQi2Rfl5c6sSy7xcc2yWh2H-nI-iI", value_type = String)]
    pub token: String,
}

#[derive(AsRefStr, Clone)]
#[strum(prefix = "/")]
pub enum Route {
    #[strum(serialize = "login")]
    PostLogin,
    #[strum(serialize = "logout")]
    PostLogout,
}

impl Routable for Route {
    fn properties(&self) -> crate::RouteProperties {
        let full_path = self.as_ref().to_string();
        match self {
            Route::PostLogin => crate::RouteProperties {
                access_level: AccessLevel::Public,
                method: http::Method::POST,
                full_path,
            },
            Route::PostLogout => crate::RouteProperties {
                access_level: AccessLevel::LoggedIn,
                method: http::Method::POST,
                full_path,
            },
        }
    }
}
