/// SHA-1 digest of a rendered report, for diffing reports across runs.
pub fn report_fingerprint(report: &str) -> String {
    use sha1::{Digest, Sha1};

    let mut hasher = Sha1::new();
    hasher.update(report.as_bytes());
    format!("{:x}", hasher.finalize())
}
