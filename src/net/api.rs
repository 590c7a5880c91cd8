//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/empty/error since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so fetch
//! failures degrade UI behavior without crashing hydration. Accept and
//! decline surface the server's structured `{ message }` body so the UI
//! can show it verbatim.

#![allow(clippy::unused_async)]

use super::types::{ActionError, OrgJoinRequest, OrganizationsPayload, User};

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout")
            .send()
            .await;
    }
}

/// Fetch the current org and the user's org list from `/api/orgs`.
pub async fn fetch_organizations() -> Option<OrganizationsPayload> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/orgs").send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<OrganizationsPayload>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch the pending join requests for an organization, in the order the
/// server returns them. Fetch failures render as an empty list rather
/// than a crash.
pub async fn fetch_org_requests(org_id: &str) -> Vec<OrgJoinRequest> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/orgs/{org_id}/requests");
        let Ok(resp) = gloo_net::http::Request::get(&url).send().await else {
            return Vec::new();
        };
        if !resp.ok() {
            return Vec::new();
        }
        resp.json::<Vec<OrgJoinRequest>>().await.unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = org_id;
        Vec::new()
    }
}

/// Accept a pending join request, granting organization access.
///
/// # Errors
///
/// Returns the server's structured failure; `message` may be absent.
pub async fn accept_org_request(request_id: &str) -> Result<(), ActionError> {
    post_request_action(request_id, "accept").await
}

/// Decline a pending join request.
///
/// # Errors
///
/// Returns the server's structured failure; `message` may be absent.
pub async fn decline_org_request(request_id: &str) -> Result<(), ActionError> {
    post_request_action(request_id, "decline").await
}

async fn post_request_action(request_id: &str, verb: &str) -> Result<(), ActionError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/org-requests/{request_id}/{verb}");
        let resp = gloo_net::http::Request::post(&url)
            .send()
            .await
            .map_err(|e| ActionError {
                message: Some(e.to_string()),
            })?;
        if resp.ok() {
            return Ok(());
        }
        // Error bodies are `{ "message": ... }`; an unparseable body
        // becomes a message-less failure and the UI uses its fallback.
        Err(resp.json::<ActionError>().await.unwrap_or_default())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (request_id, verb);
        Err(ActionError::default())
    }
}
