use common::{ServiceName, Status};

/// Counts one RPC outcome in `rpc_requests_total`.
pub(crate) fn record<T>(service: ServiceName, method: &'static str, result: &Result<T, Status>) {
    let outcome = match result {
        Ok(_) => "ok",
        Err(status) => status.code().as_str(),
    };

    metrics::counter!(
        "rpc_requests_total",
        "service" => service.as_str(),
        "method" => method,
        "outcome" => outcome
    )
    .increment(1);
}
