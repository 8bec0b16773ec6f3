/// Cloudflare dashboard origin.
pub const DASHBOARD_BASE_URL: &str = "https://dash.cloudflare.com";

/// Build a dashboard deep link for `path`.
///
/// Without an account the dashboard's `?to=/:account/...` redirect is used so
/// the user lands on the page after picking an account. `path` is embedded
/// as-is.
pub fn build_dashboard_url(account_id: &str, path: &str, has_account: bool) -> String {
    if !has_account {
        return format!("{DASHBOARD_BASE_URL}/?to=/:account/{path}");
    }
    format!("{DASHBOARD_BASE_URL}/{account_id}/{path}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_is_inserted_before_path() {
        assert_eq!(
            build_dashboard_url("abc123", "workers/services/view/my-worker/production", true),
            "https://dash.cloudflare.com/abc123/workers/services/view/my-worker/production"
        );
    }

    #[test]
    fn missing_account_uses_redirect_form() {
        assert_eq!(
            build_dashboard_url("", "workers/services/view/my-worker/production", false),
            "https://dash.cloudflare.com/?to=/:account/workers/services/view/my-worker/production"
        );
        // The flag decides, not the id.
        assert_eq!(
            build_dashboard_url("ignored", "images", false),
            "https://dash.cloudflare.com/?to=/:account/images"
        );
    }
}
