use outlink_core::conf::GatewayConfig;
use outlink_core::server::build_pingora_server;
use std::net::TcpStream;
use std::sync::Once;
use std::thread;
use std::time::{Duration, Instant};

/// Start a gateway once per test binary and wait until it accepts
/// connections. Each test binary gets its own process, so fixed ports only
/// need to be unique per test file.
pub fn start_gateway(handle: &'static Once, listen: &'static str, allowed_hosts: &[&str]) {
    let allowed_hosts: Vec<String> = allowed_hosts.iter().map(|host| host.to_string()).collect();

    handle.call_once(move || {
        let config = GatewayConfig::new(listen, allowed_hosts);
        let server = build_pingora_server(&config).expect("failed to build gateway server");

        thread::spawn(move || {
            server.run_forever();
        });

        wait_for_server(listen, Duration::from_secs(2));
    });
}

pub fn wait_for_server(addr: &str, timeout: Duration) {
    let deadline = Instant::now() + timeout;

    while Instant::now() < deadline {
        if TcpStream::connect(addr).is_ok() {
            return;
        }
        thread::sleep(Duration::from_millis(20));
    }

    panic!("server at {addr} did not start within {timeout:?}");
}
