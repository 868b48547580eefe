pub mod auth;
pub mod topic_detail;
pub mod topics;
