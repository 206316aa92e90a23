use url::Url;

/// Query keys consumed by the gateway itself. Every occurrence of these is
/// stripped from the forwarded query, duplicates included.
pub(crate) const CONTROL_QUERY_KEYS: [&str; 4] = ["target", "status", "head_redirect", "await_params"];

pub(crate) fn is_control_key(key: &str) -> bool {
    CONTROL_QUERY_KEYS.contains(&key)
}

/// First value of a key in decoded inbound pairs, `None` when absent.
pub(crate) fn first_value<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// Append every non-control inbound pair to the target URL's query.
///
/// The target's own query pairs keep their original order and are never
/// replaced; passthrough pairs follow in inbound order, duplicate keys
/// accumulating. Returns whether any passthrough pair was present.
pub(crate) fn append_passthrough(target_url: &mut Url, pairs: &[(String, String)]) -> bool {
    let passthrough: Vec<&(String, String)> = pairs
        .iter()
        .filter(|(key, _)| !is_control_key(key))
        .collect();

    if passthrough.is_empty() {
        // Leave the target untouched so a query-less URL stays query-less.
        return false;
    }

    let mut serializer = target_url.query_pairs_mut();
    for (key, value) in passthrough {
        serializer.append_pair(key, value);
    }
    serializer.finish();

    true
}
