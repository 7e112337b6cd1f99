//! Reference test vectors pinning the exact bits of the bit-cascade
//! transform, shared with the canonical Crypto-PAn reference
//! implementation and independent IPv6 generalisations.

use super::super::Anonymiser;
use std::net::IpAddr;
use std::str::FromStr;

const KEY: [u8; 32] = [
    21, 34, 23, 141, 51, 164, 207, 128, 19, 10, 91, 22, 73, 144, 125, 16, 216, 152, 143, 131, 121,
    121, 101, 39, 98, 87, 76, 45, 42, 132, 34, 2,
];

fn check_ipv4(input: &str, expected: &str) {
    let anonymiser = Anonymiser::new(&KEY).expect("valid key");
    let addr = IpAddr::from_str(input).unwrap();
    let got = anonymiser.anonymise_ip(addr).unwrap();
    assert_eq!(got.to_string(), expected, "anonymising {input}");
}

fn check_ipv6(input: &str, expected: &str) {
    let anonymiser = Anonymiser::new(&KEY).expect("valid key");
    let addr = IpAddr::from_str(input).unwrap();
    let got = anonymiser.anonymise_ip(addr).unwrap();
    assert_eq!(got.to_string(), expected, "anonymising {input}");
}

#[test]
fn test_ipv4_reference_vectors() {
    check_ipv4("128.11.68.132", "135.242.180.132");
    check_ipv4("129.118.74.4", "134.136.186.123");
    check_ipv4("192.41.57.43", "252.222.221.184");
    check_ipv4("24.0.250.221", "100.15.198.226");
    check_ipv4("127.0.0.1", "33.0.243.129");
    check_ipv4("129.69.205.36", "134.182.53.212");
}

#[test]
fn test_ipv4_reference_vectors_additional() {
    // Additional points on the same permutation, for extra confidence
    // beyond the six pinned in the primary vector table.
    check_ipv4("130.132.252.244", "133.68.164.234");
    check_ipv4("141.223.7.43", "141.167.8.160");
    check_ipv4("156.29.3.236", "147.225.12.42");
    check_ipv4("192.102.249.13", "252.138.62.131");
    check_ipv4("205.188.147.153", "242.96.16.101");
}

#[test]
fn test_ipv6_reference_vectors() {
    check_ipv6("::1", "78ff:f001:9fc0:20df:8380:b1f1:704:ed");
    check_ipv6("::2", "78ff:f001:9fc0:20df:8380:b1f1:704:ef");
    check_ipv6("::ffff", "78ff:f001:9fc0:20df:8380:b1f1:704:f838");
    check_ipv6("2001:db8::1", "4401:2bc:603f:d91d:27f:ff8e:e6f1:dc1e");
    check_ipv6("2001:db8::2", "4401:2bc:603f:d91d:27f:ff8e:e6f1:dc1c");
}

#[test]
fn test_ascii_secret_matches_byte_secret_semantics() {
    let anonymiser =
        Anonymiser::from_ascii("n1dn5emfcakghfo13nbsjfdk3mbuk83h").expect("valid ascii secret");
    let addr = IpAddr::from_str("129.69.205.36").unwrap();
    let got = anonymiser.anonymise_ip(addr).unwrap();
    assert_eq!(got.to_string(), "97.2.50.215");
}

#[test]
fn test_ipv4_path_agrees_with_generic_byte_path() {
    // The dispatch convenience always calls the generic byte path, even
    // for IPv4; this only produces the right answer because the byte
    // path and the 4-byte path agree on 4-byte inputs.
    let anonymiser = Anonymiser::new(&KEY).expect("valid key");
    let octets = [128u8, 11, 68, 132];

    let via_generic = anonymiser.anonymise(&octets).unwrap();
    let via_family = anonymiser
        .anonymise_family(&octets, super::super::AddressFamily::V4)
        .unwrap();
    let via_ip = anonymiser
        .anonymise_ip(IpAddr::V4(std::net::Ipv4Addr::from(octets)))
        .unwrap();

    assert_eq!(via_generic, via_family);
    match via_ip {
        IpAddr::V4(v4) => assert_eq!(via_generic, v4.octets()),
        IpAddr::V6(_) => panic!("expected IPv4 result"),
    }
}

#[test]
fn test_legacy_host_order_entry_point_matches_byte_path() {
    let anonymiser = Anonymiser::new(&KEY).expect("valid key");
    let addr = std::net::Ipv4Addr::new(128, 11, 68, 132);

    let host_order = u32::from_be_bytes(addr.octets());
    let via_legacy = anonymiser.anonymise_v4_host_order(host_order).unwrap();
    let via_bytes = anonymiser.anonymise(&addr.octets()).unwrap();

    assert_eq!(via_legacy.to_be_bytes().to_vec(), via_bytes);
}
