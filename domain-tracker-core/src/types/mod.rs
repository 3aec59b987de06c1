//! Type definition module

mod domain;
mod session;

pub use domain::{Domain, DomainDraft, KNOWN_COMPANIES, MAX_EXTEND_YEARS};
pub use session::{PERMISSION_DOMAINS, Session, User, UserGroup};
