//! Backend health check models

/// Health check result and round-trip time
#[derive(Debug)]
pub struct PingMetrics {
    pub message: String,
    pub roundtrip_ms: u64,
    pub uptime: String,
}
