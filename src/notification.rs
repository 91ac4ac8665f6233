/// Fire-and-forget desktop notification announcing a board reset.
pub fn send(body: impl Into<String>) {
    let body = body.into();
    tracing::debug!(message = body.as_str(), "announcing board reset");
    if let Err(err) = notify_rust::Notification::new()
        .appname("shapetap")
        .summary("Board reset")
        .body(&body)
        .show()
    {
        tracing::warn!("desktop notification failed: {err}");
    }
}
