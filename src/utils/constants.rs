
pub const DEFAULT_ACCT_BASE: &str = "https://test.acct.dk/rest/current";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

pub const ACCEPT_XML: &str = "application/xml";

/// Upper bound, in characters, of the body shown for a rejected request.
pub const ERROR_EXCERPT_CHARS: usize = 500;

pub const SUCCESS_LABEL: &str = "Response:";
pub const TRANSPORT_FAILURE_LABEL: &str = "Request failed:";
