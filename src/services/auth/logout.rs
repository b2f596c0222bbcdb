use crate::metrics::AppMetrics;
use crate::session::SessionStore;

/// Destroy the session behind `token`, if any. Returns whether one existed.
#[::tracing::instrument(skip(sessions, metrics, token))]
pub fn logout(sessions: &SessionStore, metrics: &AppMetrics, token: Option<&str>) -> bool {
    let Some(token) = token else {
        ::tracing::debug!("Logout without session cookie");
        return false;
    };

    let removed = sessions.invalidate(token);

    if removed {
        metrics.record_logout();
        metrics.set_sessions_active(sessions.len());
        ::tracing::info!("User logged out");
    }

    removed
}
