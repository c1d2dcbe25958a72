pub const DEFAULT_CLIENT_IP: &str = "127.0.0.1";
pub const FORWARDED_FOR_HEADER: &str = "x-forwarded-for";
