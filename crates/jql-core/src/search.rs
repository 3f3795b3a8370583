//! URLs that carry a rendered JQL query to Jira.

/// REST API v2 search endpoint for a query.
///
/// ```
/// use jql_core::search::search_url;
///
/// assert_eq!(
///     search_url("https://jira.example.com/", "type = Bug"),
///     "https://jira.example.com/rest/api/2/search?jql=type%20%3D%20Bug"
/// );
/// ```
#[must_use]
pub fn search_url(base: &str, jql: &str) -> String {
    format!(
        "{}/rest/api/2/search?jql={}",
        base.trim_end_matches('/'),
        urlencoding::encode(jql)
    )
}

/// Issue navigator page in the Jira web UI for a query.
#[must_use]
pub fn browse_url(base: &str, jql: &str) -> String {
    format!(
        "{}/issues/?jql={}",
        base.trim_end_matches('/'),
        urlencoding::encode(jql)
    )
}
