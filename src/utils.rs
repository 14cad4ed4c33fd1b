use chrono::{DateTime, Utc};

/// Source of the current time, so that expiry can be driven from tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Value of the `year` parameter of a query string, if any and non-empty.
pub fn year_parameter(query: Option<&str>) -> Option<String> {
    url::form_urlencoded::parse(query?.as_bytes())
        .find(|(key, _)| key == "year")
        .map(|(_, value)| value.trim().to_string())
        .filter(|year| !year.is_empty())
}
