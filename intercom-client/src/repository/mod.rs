//! Repository layer
//!
//! One repository per resource. Each is a thin, stateless wrapper over the
//! shared [`HttpClient`](crate::HttpClient): it resolves identifiers or list
//! parameters into a request, sends it and decodes the reply. There is no
//! caching and no retrying.
//!
//! All repositories are trait-based to enable testing and mocking.

mod admins;
mod companies;
mod contacts;
mod segments;
mod tags;
mod users;

// Re-export traits
pub use admins::AdminRepository;
pub use companies::CompanyRepository;
pub use contacts::ContactRepository;
pub use segments::SegmentRepository;
pub use tags::TagRepository;
pub use users::UserRepository;

// Re-export implementations
pub use admins::HttpAdminRepository;
pub use companies::HttpCompanyRepository;
pub use contacts::HttpContactRepository;
pub use segments::HttpSegmentRepository;
pub use tags::HttpTagRepository;
pub use users::HttpUserRepository;
