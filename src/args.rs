use clap::{ArgAction, Parser};

use crate::utils::constants::{DEFAULT_ACCT_BASE, DEFAULT_TIMEOUT_SECS};

#[derive(Parser, Debug)]
#[command(name = "acct-group-users")]
#[command(about = "Print the users of an ACCT group")]
pub struct Args {
    #[arg(long, env = "ACCT_BASE", default_value = DEFAULT_ACCT_BASE)]
    pub base: String,

    #[arg(long, env = "ACCT_USER", default_value = "")]
    pub user: String,

    #[arg(long, env = "ACCT_PASS", default_value = "", hide_env_values = true)]
    pub pass: String,

    #[arg(long, env = "GROUP_ID", default_value = "")]
    pub group_id: String,

    #[arg(long, env = "ACCT_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS, help = "Request timeout in seconds")]
    pub timeout: u64,

    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
