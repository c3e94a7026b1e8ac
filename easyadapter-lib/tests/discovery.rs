//! Tests for adapter discovery and mode control

mod common;

use common::*;
use easyadapter_lib::{AdapterError, Session};

#[test]
fn test_binds_second_of_three_endpoints() {
    let transport = SimTransport::new()
        .with_port("ttyS0", Behavior::Silent)
        .with_port("ttyACM0", Behavior::Adapter(SimAdapter::new(0)))
        .with_port("ttyACM1", Behavior::Adapter(SimAdapter::new(0)));
    let mut session = Session::with_transport(transport.clone(), fast_config());

    let endpoint = session.discover(0).expect("adapter should be found");
    assert_eq!(endpoint, "ttyACM0");
    assert_eq!(session.endpoint(), Some("ttyACM0"));

    // First probed and closed, third never touched, nothing left open
    assert_eq!(transport.opens("ttyS0"), 1);
    assert_eq!(transport.opens("ttyACM1"), 0);
    assert!(!transport.is_open("ttyS0"));
    assert!(!transport.is_open("ttyACM0"));
    assert!(!transport.is_open("ttyACM1"));
    assert_eq!(transport.overlapping_opens(), 0);
}

#[test]
fn test_probe_is_framed_by_terminators() {
    let transport = SimTransport::new().with_port("ttyACM0", Behavior::Adapter(SimAdapter::new(2)));
    let mut session = Session::with_transport(transport.clone(), fast_config());
    session.discover(2).unwrap();
    assert_eq!(transport.lines("ttyACM0"), vec!["".to_string(), "device?".to_string()]);
}

#[test]
fn test_selects_matching_board_number() {
    let transport = SimTransport::new()
        .with_port("ttyACM0", Behavior::Adapter(SimAdapter::new(0)))
        .with_port("ttyACM1", Behavior::Adapter(SimAdapter::new(5)));
    let mut session = Session::with_transport(transport, fast_config());
    assert_eq!(session.discover(5).unwrap(), "ttyACM1");
}

#[test]
fn test_not_found_without_busy_ports() {
    let transport = SimTransport::new()
        .with_port("ttyS0", Behavior::Silent)
        .with_port("ttyS1", Behavior::Broken)
        .with_port("ttyACM0", Behavior::Adapter(SimAdapter::new(1)));
    let mut session = Session::with_transport(transport, fast_config());

    match session.discover(0) {
        Err(err @ AdapterError::DeviceNotFound { .. }) => {
            assert!(matches!(err, AdapterError::DeviceNotFound { board: 0 }));
            assert!(err.is_adapter_unreachable());
        }
        other => panic!("Expected DeviceNotFound, got: {:?}", other),
    }
    assert_eq!(session.endpoint(), None);
}

#[test]
fn test_busy_port_reported_as_permission_denied() {
    let transport = SimTransport::new()
        .with_port("ttyS0", Behavior::Silent)
        .with_port("ttyACM0", Behavior::Busy);
    let mut session = Session::with_transport(transport, fast_config());

    match session.discover(0) {
        Err(AdapterError::PermissionDenied { endpoints }) => assert_eq!(endpoints, vec!["ttyACM0".to_string()]),
        other => panic!("Expected PermissionDenied, got: {:?}", other),
    }
}

#[test]
fn test_busy_port_does_not_hide_a_later_match() {
    let transport = SimTransport::new()
        .with_port("ttyACM0", Behavior::Busy)
        .with_port("ttyACM1", Behavior::Adapter(SimAdapter::new(0)));
    let mut session = Session::with_transport(transport, fast_config());
    assert_eq!(session.discover(0).unwrap(), "ttyACM1");
}

#[test]
fn test_board_out_of_range() {
    let mut session = Session::with_transport(SimTransport::new(), fast_config());
    assert!(matches!(session.discover(8), Err(AdapterError::InvalidArgument(_))));
}

#[test]
fn test_init_enters_m2m_mode() {
    let transport = SimTransport::new().with_port("ttyACM0", Behavior::Adapter(SimAdapter::new(0)));
    let mut session = Session::with_transport(transport.clone(), fast_config());

    session.init(0).unwrap();
    assert!(transport.with_adapter("ttyACM0", |a| a.m2m));

    session.exit_m2m().unwrap();
    assert!(!transport.with_adapter("ttyACM0", |a| a.m2m));
}

#[test]
fn test_mode_control_rejects_unexpected_reply() {
    let transport = SimTransport::new().with_port("ttyS0", Behavior::Scripted(vec![("m2m_resp", b"?")]));
    let mut session = Session::with_transport(transport, fast_config());
    session.bind("ttyS0");

    assert!(matches!(session.enter_m2m(), Err(AdapterError::InvalidResponse { .. })));
    assert!(matches!(session.exit_m2m(), Err(AdapterError::InvalidResponse { .. })));
}
