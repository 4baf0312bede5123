//! Integration tests for subnet-calculator
//!
//! These tests exercise the public `calculate` / `format_summary` contract.

use std::net::Ipv4Addr;
use subnet_calculator::models::host_mask;
use subnet_calculator::processing::{parse, subdivide, subnets};
use subnet_calculator::{calculate, format_summary, CalcConfig, CalculationError, Network};

#[test]
fn test_normalizes_host_bits() {
    let report = calculate("192.168.10.5", "/24").expect("Failed to calculate");

    assert_eq!(report.network_address, Ipv4Addr::new(192, 168, 10, 0));
    assert_eq!(report.first_host, Some(Ipv4Addr::new(192, 168, 10, 1)));
    assert_eq!(report.last_host, Some(Ipv4Addr::new(192, 168, 10, 254)));
    assert_eq!(report.broadcast_address, Ipv4Addr::new(192, 168, 10, 255));
    assert_eq!(report.usable_host_count, 254);
}

#[test]
fn test_point_to_point() {
    let report = calculate("10.0.0.0", "/31").expect("Failed to calculate");

    assert_eq!(report.usable_host_count, 0);
    assert_eq!(report.first_host, None);
    assert_eq!(report.last_host, None);
}

#[test]
fn test_subdivision_of_24() {
    let report = calculate("192.168.0.0", "/24").expect("Failed to calculate");

    let expected: Vec<Network> = [
        "192.168.0.0/26",
        "192.168.0.64/26",
        "192.168.0.128/26",
        "192.168.0.192/26",
    ]
    .iter()
    .map(|s| s.parse().unwrap())
    .collect();
    assert_eq!(report.subnet_prefix, 26);
    assert_eq!(report.subpartitions, expected);
    assert_eq!(report.subpartitions[0].addr(), report.network_address);
    assert_eq!(report.subpartitions[3].broadcast(), report.broadcast_address);
}

#[test]
fn test_maximal_prefix_subdivision() {
    let report = calculate("10.0.0.0", "/30").expect("Failed to calculate");

    assert_eq!(report.subnet_prefix, 30);
    assert_eq!(report.subpartitions, vec![report.network]);
    assert_eq!(report.usable_host_count, 2);
}

#[test]
fn test_errors() {
    assert_eq!(calculate("", "/24"), Err(CalculationError::EmptyInput));
    assert!(matches!(
        calculate("999.1.1.1", "/24"),
        Err(CalculationError::InvalidFormat { ref field, .. }) if field == "address"
    ));
    assert!(matches!(
        calculate("10.0.0.0", "/33"),
        Err(CalculationError::InvalidFormat { ref field, .. }) if field == "mask"
    ));
}

#[test]
fn test_idempotent() {
    let first = calculate("172.20.7.9", "/19").expect("Failed to calculate");
    let second = calculate("172.20.7.9", "/19").expect("Failed to calculate");
    assert_eq!(first, second);
    assert_eq!(format_summary(&first), format_summary(&second));
}

#[test]
fn test_network_and_broadcast_masks_all_prefixes() {
    let addresses = [
        Ipv4Addr::new(0, 0, 0, 0),
        Ipv4Addr::new(10, 20, 30, 40),
        Ipv4Addr::new(192, 168, 255, 1),
        Ipv4Addr::new(255, 255, 255, 255),
    ];
    for addr in addresses {
        for prefix in 0..=32u8 {
            let report = calculate(&addr.to_string(), &format!("/{prefix}"))
                .unwrap_or_else(|e| panic!("{addr}/{prefix}: {e}"));
            let hostmask = host_mask(prefix).unwrap();
            let network = u32::from(report.network_address);
            assert_eq!(network & hostmask, 0, "{addr}/{prefix}");
            assert_eq!(
                network | hostmask,
                u32::from(report.broadcast_address),
                "{addr}/{prefix}"
            );
        }
    }
}

#[test]
fn test_summary_field_order() {
    let report = calculate("10.1.2.3", "255.255.255.0").expect("Failed to calculate");
    let summary = format_summary(&report);
    let labels: Vec<&str> = summary
        .lines()
        .map(|l| l.split(':').next().unwrap_or_default())
        .collect();
    assert_eq!(
        labels,
        vec![
            "Network Address",
            "First Usable Address",
            "Last Usable Address",
            "Broadcast Address",
            "Usable Hosts"
        ]
    );
}

#[test]
fn test_lazy_subnets_match_report() {
    let network = parse("10.64.0.0", "/12").expect("Failed to parse");
    let lazy: Vec<Network> = subdivide(&network, &CalcConfig::default())
        .expect("Failed to subdivide")
        .collect();
    let report = calculate("10.64.0.0", "/12").expect("Failed to calculate");
    assert_eq!(lazy, report.subpartitions);

    assert!(matches!(
        subnets(&network, 30, 4096),
        Err(CalculationError::TooManySubnets { count: 262144, limit: 4096 })
    ));
}
