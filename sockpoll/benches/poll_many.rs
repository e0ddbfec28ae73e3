use std::io::Write;
use std::net::{TcpListener, TcpStream};

use divan::Bencher;
use sockpoll::{Events, Timeout, poll_many, poll_one, wait};

fn main() {
    divan::main();
}

fn connected_clients(n: usize) -> (Vec<TcpStream>, Vec<TcpStream>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    (0..n)
        .map(|_| {
            let client = TcpStream::connect(addr).unwrap();
            let (server, _) = listener.accept().unwrap();
            (client, server)
        })
        .unzip()
}

#[divan::bench(sample_count = 1000)]
fn bench_poll_one_writable(bencher: Bencher) {
    let (clients, _servers) = connected_clients(1);

    bencher.bench_local(|| poll_one(&clients[0], Events::WRITABLE, Timeout::IMMEDIATE).unwrap());
}

/// Only the last socket is ready, so the whole result set is scanned.
#[divan::bench(args = [1, 16, 64, 256], sample_count = 1000)]
fn bench_poll_many_last_ready(bencher: Bencher, n: usize) {
    let (clients, mut servers) = connected_clients(n);
    servers[n - 1].write_all(b"x").unwrap();
    assert!(wait(&clients[n - 1], Events::READABLE).unwrap());

    bencher.bench_local(|| poll_many(&clients, Events::READABLE, Timeout::IMMEDIATE).unwrap());
}

#[divan::bench(args = [1, 16, 64, 256], sample_count = 1000)]
fn bench_poll_many_none_ready(bencher: Bencher, n: usize) {
    let (clients, _servers) = connected_clients(n);

    bencher.bench_local(|| poll_many(&clients, Events::READABLE, Timeout::IMMEDIATE).unwrap());
}
