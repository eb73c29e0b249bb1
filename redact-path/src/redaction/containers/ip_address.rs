//! Leaf implementations for std net types. The zero value is the unspecified
//! address with port 0.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, SocketAddrV4, SocketAddrV6};

use super::impl_redactable_leaf;

impl_redactable_leaf!(Ipv4Addr => Ipv4Addr::UNSPECIFIED);
impl_redactable_leaf!(Ipv6Addr => Ipv6Addr::UNSPECIFIED);
impl_redactable_leaf!(IpAddr => IpAddr::V4(Ipv4Addr::UNSPECIFIED));
impl_redactable_leaf!(SocketAddrV4 => SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 0));
impl_redactable_leaf!(SocketAddrV6 => SocketAddrV6::new(Ipv6Addr::UNSPECIFIED, 0, 0, 0));
impl_redactable_leaf!(SocketAddr => SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 0)));

#[cfg(test)]
mod tests {
    use std::net::{IpAddr, Ipv4Addr, SocketAddr};

    use crate::redaction::traits::Redactable;

    #[test]
    fn addresses_reset_to_unspecified() {
        let mut ip: IpAddr = "10.1.2.3".parse().unwrap();
        ip.reset();
        assert_eq!(ip, IpAddr::V4(Ipv4Addr::UNSPECIFIED));

        let mut socket: SocketAddr = "10.1.2.3:8080".parse().unwrap();
        socket.reset();
        assert_eq!(socket.to_string(), "0.0.0.0:0");
    }
}
