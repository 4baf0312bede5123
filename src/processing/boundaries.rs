//! Network, host range and broadcast boundaries.

use crate::models::{Network, SubnetInfo};
use std::net::Ipv4Addr;

/// Compute the boundaries of `network`.
///
/// /31 and /32 networks have no usable host range.
pub fn boundaries(network: &Network) -> SubnetInfo {
    let network_address = network.addr();
    let broadcast_address = network.broadcast();

    let usable_host_count = network.num_usable_hosts();
    let (first_host, last_host) = if usable_host_count == 0 {
        (None, None)
    } else {
        (
            Some(Ipv4Addr::from(u32::from(network_address) + 1)),
            Some(Ipv4Addr::from(u32::from(broadcast_address) - 1)),
        )
    };

    SubnetInfo {
        network_address,
        first_host,
        last_host,
        broadcast_address,
        usable_host_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn net(cidr: &str) -> Network {
        cidr.parse().unwrap()
    }

    #[test]
    fn test_boundaries_24() {
        let info = boundaries(&net("192.168.10.5/24"));
        assert_eq!(info.network_address, Ipv4Addr::new(192, 168, 10, 0));
        assert_eq!(info.first_host, Some(Ipv4Addr::new(192, 168, 10, 1)));
        assert_eq!(info.last_host, Some(Ipv4Addr::new(192, 168, 10, 254)));
        assert_eq!(info.broadcast_address, Ipv4Addr::new(192, 168, 10, 255));
        assert_eq!(info.usable_host_count, 254);
    }

    #[test]
    fn test_boundaries_30() {
        let info = boundaries(&net("10.0.0.4/30"));
        assert_eq!(info.first_host, Some(Ipv4Addr::new(10, 0, 0, 5)));
        assert_eq!(info.last_host, Some(Ipv4Addr::new(10, 0, 0, 6)));
        assert_eq!(info.usable_host_count, 2);
    }

    #[test]
    fn test_boundaries_point_to_point() {
        let info = boundaries(&net("10.0.0.0/31"));
        assert_eq!(info.network_address, Ipv4Addr::new(10, 0, 0, 0));
        assert_eq!(info.broadcast_address, Ipv4Addr::new(10, 0, 0, 1));
        assert_eq!(info.first_host, None);
        assert_eq!(info.last_host, None);
        assert_eq!(info.usable_host_count, 0);
    }

    #[test]
    fn test_boundaries_single_host() {
        let info = boundaries(&net("0.0.0.0/32"));
        assert_eq!(info.network_address, Ipv4Addr::UNSPECIFIED);
        assert_eq!(info.broadcast_address, Ipv4Addr::UNSPECIFIED);
        assert_eq!(info.first_host, None);
        assert_eq!(info.usable_host_count, 0);
    }

    #[test]
    fn test_boundaries_whole_space() {
        let info = boundaries(&net("10.20.30.40/0"));
        assert_eq!(info.network_address, Ipv4Addr::UNSPECIFIED);
        assert_eq!(info.first_host, Some(Ipv4Addr::new(0, 0, 0, 1)));
        assert_eq!(info.last_host, Some(Ipv4Addr::new(255, 255, 255, 254)));
        assert_eq!(info.broadcast_address, Ipv4Addr::BROADCAST);
        assert_eq!(info.usable_host_count, 4294967294);
    }

    #[test]
    fn test_host_bits_masks() {
        for cidr in ["1.2.3.4/0", "172.16.5.10/20", "10.0.0.9/29", "8.8.8.8/32"] {
            let network = net(cidr);
            let info = boundaries(&network);
            let hostmask = u32::from(network.hostmask());
            assert_eq!(u32::from(info.network_address) & hostmask, 0);
            assert_eq!(
                u32::from(info.network_address) | hostmask,
                u32::from(info.broadcast_address)
            );
        }
    }

    #[test]
    fn test_host_range_follows_usable_count() {
        for prefix in 0..=32u8 {
            let network = Network::new(Ipv4Addr::BROADCAST, prefix).unwrap();
            let info = boundaries(&network);
            assert_eq!(info.usable_host_count, network.num_usable_hosts(), "/{prefix}");
            assert_eq!(info.first_host.is_some(), prefix <= 30, "/{prefix}");
            assert_eq!(info.last_host.is_some(), prefix <= 30, "/{prefix}");
            if let (Some(first), Some(last)) = (info.first_host, info.last_host) {
                assert_eq!(
                    u64::from(u32::from(last) - u32::from(first)) + 1,
                    info.usable_host_count,
                    "/{prefix}"
                );
            }
        }
    }
}
