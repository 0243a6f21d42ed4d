/// Stable string identifier for catalog entries, challenges, rewards and
/// invite requests.
pub type EntryId = String;
