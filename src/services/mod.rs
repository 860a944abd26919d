pub mod domain_authorizer;

pub use domain_authorizer::{AuthorizeError, DomainAuthorizer, EnsureOutcome, ProjectConfigApi};
