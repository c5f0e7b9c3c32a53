use campus_bridge::notification::Notification;
use campus_net::RequestOptions;

/// Seeded feed served while no API endpoint is configured.
fn seed_notifications() -> Vec<Notification> {
    vec![
        Notification::unread(1, "New student registration"),
        Notification::unread(2, "Fee payment reminder"),
        Notification::read(3, "Staff meeting at 3:00 PM"),
    ]
}

/// Handles an incoming notification feed request (see
/// [`campus_bridge::MessageToBackend::NotificationsRequest`]).
///
/// With a configured API endpoint the feed is fetched from
/// `<base_url>/notifications` and decoded in insertion order; without one,
/// the seeded feed is served. A failed fetch degrades to an empty feed so
/// the shell keeps rendering.
pub async fn handle_notifications_request(context: super::AppContextHandle) {
    let (config, request_client) = {
        let state = context.state.read().await;
        (state.config.clone(), state.request_client.clone())
    };

    let notifications = match config.api_config.base_url {
        Some(base_url) => {
            let url = format!("{base_url}/notifications");
            match request_client
                .execute::<Vec<Notification>>(&url, RequestOptions::default())
                .await
            {
                Ok(feed) => feed,
                Err(error) => {
                    log::warn!("Serving an empty notification feed: {error}");
                    Vec::new()
                }
            }
        }
        None => seed_notifications(),
    };

    context
        .send(campus_bridge::MessageFromBackend::NotificationsSnapshot(
            notifications,
        ))
        .await;
}
