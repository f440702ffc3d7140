use rocket::{
    self,
    http::Status,
    outcome::try_outcome,
    request::{FromRequest, Outcome, Request},
};

use tripbook_core::usecases::Error as ParameterError;

// Identity headers injected by the external identity provider's edge.
// Authentication itself happens outside of this service.
pub const HEADER_USER_ID: &str = "X-User-Id";
pub const HEADER_USER_EMAIL: &str = "X-User-Email";
pub const HEADER_USER_NAME: &str = "X-User-Name";

type Result<T> = std::result::Result<T, ParameterError>;

/// The identity attached to a request, if any.
#[derive(Debug)]
pub struct Auth {
    user_id: Option<String>,
    email: Option<String>,
    name: Option<String>,
}

impl Auth {
    pub fn user_id(&self) -> Result<&str> {
        self.user_id
            .as_deref()
            .ok_or(ParameterError::Unauthorized)
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn from_headers(request: &Request) -> Self {
        let header = |name: &str| {
            request
                .headers()
                .get_one(name)
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(ToOwned::to_owned)
        };
        Self {
            user_id: header(HEADER_USER_ID),
            email: header(HEADER_USER_EMAIL),
            name: header(HEADER_USER_NAME),
        }
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Auth {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        Outcome::Success(Self::from_headers(request))
    }
}

/// An authenticated account. Requests without an identity are rejected
/// with 401 before the route body runs.
#[derive(Debug)]
pub struct Account {
    id: String,
    email: Option<String>,
    name: Option<String>,
}

impl Account {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Account {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let auth = try_outcome!(Auth::from_request(request).await);
        match auth.user_id {
            Some(id) => Outcome::Success(Account {
                id,
                email: auth.email,
                name: auth.name,
            }),
            None => Outcome::Error((Status::Unauthorized, ())),
        }
    }
}
