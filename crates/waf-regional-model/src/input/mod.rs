//! Auto-generated from the AWS WAF Regional Smithy model. DO NOT EDIT.

mod acl;
mod change_token;
mod logging;
mod match_set;
mod rule;
mod sampling;

pub use acl::*;
pub use change_token::*;
pub use logging::*;
pub use match_set::*;
pub use rule::*;
pub use sampling::*;
