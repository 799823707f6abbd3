//! Test support for consumers of the SDK.

pub mod mock;

pub use mock::{MockBitbucketClient, MockCall, MockReviewersClient, MockVariablesClient};
