use serde::Serialize;

use crate::cli::flags::FlagValues;

pub mod route;
pub mod tunnel;

pub use route::RouteParams;
pub use tunnel::TunnelParams;

/// A named string flag, spelled `-name <value>` on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flag {
    pub name: &'static str,
    pub help: &'static str,
}

pub const REMOTE_IP: Flag = Flag {
    name: "ip",
    help: "Remote ip",
};

pub const REMOTE_PORT: Flag = Flag {
    name: "port",
    help: "Remote port",
};

pub const DESCRIPTION: Flag = Flag {
    name: "desc",
    help: "Brief description",
};

/// A record managed under `/restvpn/{PATH}`.
///
/// Serializing the record itself produces the body of an `add`. Every
/// instance is addressed by the pair `(identity, remote_ip)`.
pub trait Resource: Serialize {
    /// Path segment after `/restvpn/`.
    const PATH: &'static str;
    /// Flag carrying the primary identity.
    const IDENTITY: Flag;
    /// Flags accepted by `add` and `update` besides identity, ip and port.
    const OPTIONAL: &'static [Flag];

    fn from_flags(flags: &FlagValues) -> Self;

    fn identity(&self) -> &str;

    fn remote_ip(&self) -> &str;

    /// Body of an `update`: only the mutable fields, identity stays in the path.
    fn update_body(&self) -> impl Serialize + '_;
}
