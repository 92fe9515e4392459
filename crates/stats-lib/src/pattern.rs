//! Stat counter names
//!
//! Traffic counters are named `<scope>>>><entity>>>>traffic>>>><direction>`.

use std::fmt;

/// Separator between the segments of a counter name.
pub const SEPARATOR: &str = ">>>";

/// Category of entity a counter belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    User,
    Inbound,
    Outbound,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::User => "user",
            Scope::Inbound => "inbound",
            Scope::Outbound => "outbound",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Traffic direction: uplink is client to server, downlink the reverse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Uplink,
    Downlink,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Uplink => "uplink",
            Direction::Downlink => "downlink",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build the name of a traffic counter.
///
/// An empty `entity` is accepted and yields a degenerate name such as
/// `user>>>>>>traffic>>>uplink`.
pub fn traffic_pattern(scope: Scope, entity: &str, direction: Direction) -> String {
    format!("{scope}{SEPARATOR}{entity}{SEPARATOR}traffic{SEPARATOR}{direction}")
}

/// Order in which traffic counters are queried and written.
pub const TRAFFIC_ORDER: [(Scope, Direction); 6] = [
    (Scope::User, Direction::Uplink),
    (Scope::User, Direction::Downlink),
    (Scope::Inbound, Direction::Uplink),
    (Scope::Inbound, Direction::Downlink),
    (Scope::Outbound, Direction::Uplink),
    (Scope::Outbound, Direction::Downlink),
];

/// The user, inbound and outbound entities whose traffic is queried
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrafficTarget {
    pub user_email: String,
    pub inbound_tag: String,
    pub outbound_tag: String,
}

impl TrafficTarget {
    pub fn new(
        user_email: impl Into<String>,
        inbound_tag: impl Into<String>,
        outbound_tag: impl Into<String>,
    ) -> Self {
        Self {
            user_email: user_email.into(),
            inbound_tag: inbound_tag.into(),
            outbound_tag: outbound_tag.into(),
        }
    }

    fn entity(&self, scope: Scope) -> &str {
        match scope {
            Scope::User => &self.user_email,
            Scope::Inbound => &self.inbound_tag,
            Scope::Outbound => &self.outbound_tag,
        }
    }

    /// The six counter patterns in [`TRAFFIC_ORDER`].
    pub fn patterns(&self) -> Vec<String> {
        TRAFFIC_ORDER
            .iter()
            .map(|&(scope, direction)| traffic_pattern(scope, self.entity(scope), direction))
            .collect()
    }
}
