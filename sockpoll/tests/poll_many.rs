use sockpoll::{AsDescriptor, Descriptor, Events, Interest, Timeout, poll_many, wait_timeout};
use std::io::Write;
use std::net::{TcpListener, TcpStream};
use std::time::{Duration, Instant};

fn connected_pairs(n: usize) -> (Vec<TcpStream>, Vec<TcpStream>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind listener");
    let addr = listener.local_addr().expect("Failed to get local address");

    (0..n)
        .map(|_| {
            let client = TcpStream::connect(addr).expect("Failed to connect to listener");
            let (server, _) = listener.accept().expect("Failed to accept connection");
            (client, server)
        })
        .unzip()
}

/// Blocks until `client` has data, so later zero-timeout polls see it.
fn settle(client: &TcpStream) {
    let ready = wait_timeout(client, Events::READABLE, 5000).expect("Poll failed");
    assert!(ready, "Data never arrived");
}

#[test]
fn test_poll_many_empty_returns_immediately() {
    let sources: Vec<TcpStream> = Vec::new();

    let start = Instant::now();
    let found = poll_many(&sources, Events::READABLE, 5000).expect("Poll failed");

    assert_eq!(found, None);
    assert!(start.elapsed() < Duration::from_secs(1));
}

#[test]
fn test_poll_many_returns_only_ready_index() {
    for k in 0..4 {
        let (clients, mut servers) = connected_pairs(4);
        servers[k].write_all(b"x").expect("Failed to write to stream");

        let found = poll_many(&clients, Events::READABLE, 5000).expect("Poll failed");

        assert_eq!(found, Some(k));
    }
}

#[test]
fn test_poll_many_lowest_ready_index_wins() {
    let (clients, mut servers) = connected_pairs(5);

    for &i in &[3, 1, 4] {
        servers[i].write_all(b"x").expect("Failed to write to stream");
    }
    for &i in &[3, 1, 4] {
        settle(&clients[i]);
    }

    let found = poll_many(&clients, Events::READABLE, 0).expect("Poll failed");

    assert_eq!(found, Some(1));
}

#[test]
fn test_poll_many_times_out_with_none() {
    let (clients, _servers) = connected_pairs(3);

    let start = Instant::now();
    let found = poll_many(&clients, Events::READABLE, 150).expect("Poll failed");
    let elapsed = start.elapsed();

    assert_eq!(found, None);
    assert!(
        elapsed >= Duration::from_millis(140),
        "Returned too early: {:?}",
        elapsed
    );
}

#[test]
fn test_poll_many_infinite_timeout_returns_on_readiness() {
    let (clients, mut servers) = connected_pairs(3);
    servers[2].write_all(b"x").expect("Failed to write to stream");

    let start = Instant::now();
    let found = poll_many(&clients, Events::READABLE, -1).expect("Poll failed");

    assert_eq!(found, Some(2));
    assert!(start.elapsed() < Duration::from_secs(5));
}

#[test]
fn test_poll_many_is_idempotent() {
    let (clients, mut servers) = connected_pairs(3);
    servers[0].write_all(b"x").expect("Failed to write to stream");
    servers[2].write_all(b"x").expect("Failed to write to stream");
    settle(&clients[0]);
    settle(&clients[2]);

    let first = poll_many(&clients, Events::READABLE, Timeout::IMMEDIATE).expect("Poll failed");
    let second = poll_many(&clients, Events::READABLE, Timeout::IMMEDIATE).expect("Poll failed");

    assert_eq!(first, Some(0));
    assert_eq!(first, second);
}

#[test]
fn test_poll_many_writable_picks_first() {
    let (clients, _servers) = connected_pairs(3);

    let found = poll_many(&clients, Interest::WRITABLE, 0).expect("Poll failed");

    assert_eq!(found, Some(0));
}

#[test]
fn test_poll_many_combined_mask_matches_any_bit() {
    let (clients, mut servers) = connected_pairs(2);
    servers[1].write_all(b"x").expect("Failed to write to stream");
    settle(&clients[1]);

    let mask = Events::READABLE | Events::WRITABLE;
    let found = poll_many(&clients, mask, 0).expect("Poll failed");

    // Both are writable, so the first one wins even though only the
    // second is readable.
    assert_eq!(found, Some(0));
}

#[test]
fn test_poll_many_over_raw_descriptors() {
    let (clients, mut servers) = connected_pairs(3);
    servers[1].write_all(b"x").expect("Failed to write to stream");

    let descriptors: Vec<Descriptor> = clients.iter().map(|c| c.as_descriptor()).collect();
    let found = poll_many(&descriptors, Events::READABLE, 5000).expect("Poll failed");

    assert_eq!(found, Some(1));
}

#[test]
fn test_poll_many_rotation_gives_fairness() {
    let (clients, mut servers) = connected_pairs(3);
    for server in servers.iter_mut() {
        server.write_all(b"x").expect("Failed to write to stream");
    }
    for client in &clients {
        settle(client);
    }

    let mut descriptors: Vec<Descriptor> = clients.iter().map(|c| c.as_descriptor()).collect();
    let mut served = Vec::new();

    for _ in 0..3 {
        let found = poll_many(&descriptors, Events::READABLE, 0)
            .expect("Poll failed")
            .expect("Expected a ready descriptor");
        served.push(descriptors[found]);
        descriptors.rotate_left(1);
    }

    let expected: Vec<Descriptor> = clients.iter().map(|c| c.as_descriptor()).collect();
    assert_eq!(served, expected);
}
