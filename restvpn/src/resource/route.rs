use serde::Serialize;

use super::{Flag, Resource, DESCRIPTION, REMOTE_IP, REMOTE_PORT};
use crate::cli::flags::FlagValues;

const COMMON_NAME: Flag = Flag {
    name: "cname",
    help: "Common name",
};

const NETMASK: Flag = Flag {
    name: "mask",
    help: "Route netmask",
};

/// Maps a client certificate common name to a remote endpoint.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct RouteParams {
    pub common_name: String,
    pub remote_ip: String,
    pub remote_port: String,
    pub description: String,
    pub netmask: String,
}

#[derive(Serialize)]
struct RouteUpdate<'a> {
    remote_port: &'a str,
    description: &'a str,
    netmask: &'a str,
}

impl Resource for RouteParams {
    const PATH: &'static str = "routes";
    const IDENTITY: Flag = COMMON_NAME;
    const OPTIONAL: &'static [Flag] = &[DESCRIPTION, NETMASK];

    fn from_flags(flags: &FlagValues) -> Self {
        RouteParams {
            common_name: flags.get(COMMON_NAME.name),
            remote_ip: flags.get(REMOTE_IP.name),
            remote_port: flags.get(REMOTE_PORT.name),
            description: flags.get(DESCRIPTION.name),
            netmask: flags.get(NETMASK.name),
        }
    }

    fn identity(&self) -> &str {
        &self.common_name
    }

    fn remote_ip(&self) -> &str {
        &self.remote_ip
    }

    fn update_body(&self) -> impl Serialize + '_ {
        RouteUpdate {
            remote_port: &self.remote_port,
            description: &self.description,
            netmask: &self.netmask,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route() -> RouteParams {
        RouteParams {
            common_name: "alice".into(),
            remote_ip: "10.8.0.2".into(),
            remote_port: "1194".into(),
            description: "laptop".into(),
            netmask: "255.255.255.0".into(),
        }
    }

    #[test]
    fn create_body_has_every_field() {
        let body = serde_json::to_string(&route()).unwrap();

        assert_eq!(
            body,
            r#"{"common_name":"alice","remote_ip":"10.8.0.2","remote_port":"1194","description":"laptop","netmask":"255.255.255.0"}"#
        );
    }

    #[test]
    fn update_body_leaves_out_identity() {
        let route = route();
        let body = serde_json::to_string(&route.update_body()).unwrap();

        assert_eq!(
            body,
            r#"{"remote_port":"1194","description":"laptop","netmask":"255.255.255.0"}"#
        );
    }
}
