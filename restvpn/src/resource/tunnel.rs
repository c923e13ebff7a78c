use serde::Serialize;

use super::{Flag, Resource, DESCRIPTION, REMOTE_IP, REMOTE_PORT};
use crate::cli::flags::FlagValues;

const CUSTOMER: Flag = Flag {
    name: "customer",
    help: "Customer",
};

const MASK: Flag = Flag {
    name: "mask",
    help: "Tunnel netmask",
};

const GATEWAY: Flag = Flag {
    name: "gw",
    help: "Tunnel gateway",
};

/// Maps a customer to the remote end of its tunnel.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct TunnelParams {
    pub customer: String,
    pub remote_ip: String,
    pub remote_port: String,
    pub description: String,
    pub mask: String,
    pub gateway: String,
}

#[derive(Serialize)]
struct TunnelUpdate<'a> {
    remote_port: &'a str,
    description: &'a str,
    mask: &'a str,
    gateway: &'a str,
}

impl Resource for TunnelParams {
    const PATH: &'static str = "tunnels";
    const IDENTITY: Flag = CUSTOMER;
    const OPTIONAL: &'static [Flag] = &[DESCRIPTION, MASK, GATEWAY];

    fn from_flags(flags: &FlagValues) -> Self {
        TunnelParams {
            customer: flags.get(CUSTOMER.name),
            remote_ip: flags.get(REMOTE_IP.name),
            remote_port: flags.get(REMOTE_PORT.name),
            description: flags.get(DESCRIPTION.name),
            mask: flags.get(MASK.name),
            gateway: flags.get(GATEWAY.name),
        }
    }

    fn identity(&self) -> &str {
        &self.customer
    }

    fn remote_ip(&self) -> &str {
        &self.remote_ip
    }

    fn update_body(&self) -> impl Serialize + '_ {
        TunnelUpdate {
            remote_port: &self.remote_port,
            description: &self.description,
            mask: &self.mask,
            gateway: &self.gateway,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_fields_serialize_as_empty_strings() {
        let tunnel = TunnelParams {
            customer: "bob".into(),
            remote_ip: "10.0.0.5".into(),
            remote_port: "1194".into(),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_string(&tunnel).unwrap(),
            r#"{"customer":"bob","remote_ip":"10.0.0.5","remote_port":"1194","description":"","mask":"","gateway":""}"#
        );
    }

    #[test]
    fn update_body_carries_gateway_but_not_customer() {
        let tunnel = TunnelParams {
            customer: "bob".into(),
            remote_ip: "10.0.0.5".into(),
            gateway: "10.0.0.1".into(),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_string(&tunnel.update_body()).unwrap(),
            r#"{"remote_port":"","description":"","mask":"","gateway":"10.0.0.1"}"#
        );
    }
}
