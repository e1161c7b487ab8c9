pub fn format_rate(per_sec: f64) -> String {
    const K: f64 = 1_000.0;
    const M: f64 = K * 1_000.0;
    const G: f64 = M * 1_000.0;

    if per_sec >= G {
        format!("{:.2}G/s", per_sec / G)
    } else if per_sec >= M {
        format!("{:.2}M/s", per_sec / M)
    } else if per_sec >= K {
        format!("{:.2}K/s", per_sec / K)
    } else {
        format!("{:.0}/s", per_sec)
    }
}
