pub(crate) mod bank;
pub(crate) mod error;
pub(crate) mod question;
pub(crate) mod session;
