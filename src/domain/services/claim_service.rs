/// Reads the identity claim out of a bearer token.
///
/// This is not an authorization check; the gateway only needs the identity
/// to address the profile-creation call. An unreadable token yields `None`,
/// which is a recoverable condition.
pub trait ClaimReader: Send + Sync {
    fn extract_identity(&self, token: &str) -> Option<String>;
}
