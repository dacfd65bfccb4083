//! Session handling and access guards for the dashboard API.

pub mod auth;
pub mod session;

#[cfg(test)]
mod test;
