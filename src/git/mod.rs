pub mod pull_request;
pub mod reference;
pub mod remote;
pub mod tag;

pub use pull_request::{PullRequest, PullRequestAuthor, PullRequestState};
pub use reference::{GitReference, RefType, Reference};
pub use remote::RemoteProviderReference;
pub use tag::{GitTag, TagSortOptions};
