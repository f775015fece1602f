pub mod constants;
pub mod group_users;
pub mod logging;
