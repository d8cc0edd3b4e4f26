//! Notification commands

use agendaia_domain::NotificationMethod;
use chrono::NaiveDate;

use crate::context::AppContext;
use crate::utils::command_helpers::execute_logged;

/// Tell a user how many events are on `date`; `false` when delivery failed
pub async fn send_daily_digest(
    ctx: &AppContext,
    user_id: &str,
    date: NaiveDate,
) -> Result<bool, String> {
    execute_logged("notifications::daily_digest", async move {
        let user = ctx.agendas.user(user_id).await?;
        Ok(ctx.notifications.notify_daily_digest(&user, date).await)
    })
    .await
}

/// Free-form message to a user over `method` (configured default if `None`)
pub async fn send_notification(
    ctx: &AppContext,
    user_id: &str,
    message: &str,
    method: Option<NotificationMethod>,
) -> Result<bool, String> {
    execute_logged("notifications::send", async move {
        let user = ctx.agendas.user(user_id).await?;
        Ok(ctx.notifications.notify(&user, message, method).await)
    })
    .await
}
