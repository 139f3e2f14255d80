use crate::{
    config::PitchSchedule,
    content::{bovonto, random_line_embed},
};
use bot_traits::TraceErr;
use futures::StreamExt;
use poise::serenity_prelude::{ChannelId, CreateMessage, Http};
use std::sync::Arc;
use tokio::time::{Instant, interval_at};
use tokio_stream::wrappers::IntervalStream;

/// Posts a Bovonto pitch to the scheduled channel forever.
///
/// The first pitch goes out one interval after start up.
pub async fn pitch_interval(http: Arc<Http>, schedule: PitchSchedule, icon: Option<String>) {
    if schedule.channel_id == 0 || schedule.interval.is_zero() {
        tracing::error!("Bovonto schedule needs a channel and a non zero interval, not pitching");
        return;
    }

    let channel_id = ChannelId::new(schedule.channel_id);
    let start = Instant::now() + schedule.interval;

    tracing::info!(
        "Pitching Bovonto in {} every {:?}",
        channel_id,
        schedule.interval
    );

    IntervalStream::new(interval_at(start, schedule.interval))
        .for_each(|_| {
            let http = Arc::clone(&http);
            let icon = icon.clone();

            async move {
                let embed = random_line_embed(bovonto::AUTHOR, icon.as_deref(), bovonto::PITCHES);

                channel_id
                    .send_message(&*http, CreateMessage::new().embed(embed))
                    .await
                    .trace_err_ok();

                tracing::trace!("Pitched Bovonto in {}", channel_id);
            }
        })
        .await
}
