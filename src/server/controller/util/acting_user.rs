use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::server::model::app::AppState;

/// ID of the user a request is served on behalf of
///
/// Resolved from the `ACTING_USER_ID` configured in [`AppState`]. Handlers pass the inner ID
/// to every service call that reads or writes favorites.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActingUser(pub i32);

impl FromRequestParts<AppState> for ActingUser {
    type Rejection = Infallible;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Self(state.acting_user_id))
    }
}
