/// Addresses that mark a hosts-file line as a sinkhole entry.
const HOSTS_SINK_ADDRS: [&str; 4] = ["0.0.0.0", "127.0.0.1", "::", "::1"];

/// Hostnames that hosts files map to loopback and that must never be blocked.
const HOSTS_LOCAL_NAMES: [&str; 5] = [
    "localhost",
    "0.0.0.0",
    "broadcasthost",
    "ip6-localhost",
    "ip6-loopback",
];

/// Extracts the blocked domain from one blocklist line.
///
/// Blank lines and `#` comments yield `None`. A hosts-style line
/// (`0.0.0.0 ads.example.com`) yields its hostname unless it is a loopback
/// alias. Any other line is the domain itself, trimmed. Case is preserved;
/// matching is exact.
pub fn parse_list_line(line: &str) -> Option<String> {
    let line = line.trim();

    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let mut parts = line.split_whitespace();
    if let (Some(addr), Some(host)) = (parts.next(), parts.next()) {
        if HOSTS_SINK_ADDRS.contains(&addr) {
            if HOSTS_LOCAL_NAMES.contains(&host) || host.starts_with('#') {
                return None;
            }
            return Some(host.to_string());
        }
    }

    Some(line.to_string())
}

pub fn parse_list_text(text: &str) -> Vec<String> {
    text.lines().filter_map(parse_list_line).collect()
}
