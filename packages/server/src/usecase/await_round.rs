//! UseCase: ラウンド完了待ち（Round Coordinator）
//!
//! 投票したクライアントを、Room の全メンバーが投票し終えるまで待たせます。
//!
//! - 完了判定は Room のシグナル（投票・参加・退出・リセット）ごとに行い、
//!   シグナルを取りこぼした場合に備えて一定間隔のポーリングも併用する
//! - 待機中は別タスクが一定間隔で未投票者を通知する
//! - 通知タスクはラウンド完了と同時にキャンセルされ、このユースケースが返る前に終了する

use std::{sync::Arc, time::Duration};

use huddle_shared::protocol::Message;
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::{
    config::RoundTiming,
    domain::{Nickname, PusherChannel, RoundOutcome, SharedRoom},
};

/// ラウンド完了待ちのユースケース
pub struct AwaitRoundUseCase {
    timing: RoundTiming,
}

impl AwaitRoundUseCase {
    /// 新しい AwaitRoundUseCase を作成
    pub fn new(timing: RoundTiming) -> Self {
        Self { timing }
    }

    /// `round` が完了するまで待ち、その結果を返す
    ///
    /// 待機中の未投票者通知は `outbox` に送られます。
    /// 完了するまでタイムアウトはありません（退出したメンバーは判定から外れる）。
    pub async fn execute(
        &self,
        room: Arc<SharedRoom>,
        round: u64,
        outbox: PusherChannel,
    ) -> RoundOutcome {
        let cancel = CancellationToken::new();
        // 呼び出し元のタスクが中断された場合も通知タスクを止める
        let guard = cancel.clone().drop_guard();

        let notifier = tokio::spawn(notify_stragglers(
            room.clone(),
            round,
            outbox,
            self.timing.straggler_interval,
            cancel.child_token(),
        ));

        let outcome = wait_for_completion(&room, round, self.timing.poll_interval).await;

        drop(guard);
        if let Err(e) = notifier.await {
            tracing::warn!("Stragglers notifier for room {} failed: {}", room.id(), e);
        }

        tracing::info!(
            "Round {} of room {} completed ({} ballots)",
            outcome.round,
            room.id(),
            outcome.ballots.len()
        );
        outcome
    }
}

async fn wait_for_completion(
    room: &SharedRoom,
    round: u64,
    poll_interval: Duration,
) -> RoundOutcome {
    let mut signal = room.subscribe();
    let mut poll = time::interval(poll_interval);
    poll.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        signal.borrow_and_update();
        if let Some(outcome) = room.try_complete_round(round).await {
            return outcome;
        }

        tokio::select! {
            Ok(()) = signal.changed() => {}
            _ = poll.tick() => {}
        }
    }
}

/// 一定間隔で未投票者を通知するタスク
///
/// ラウンドが閉じていた場合やキャンセルされた場合は何も送らずに終了します。
async fn notify_stragglers(
    room: Arc<SharedRoom>,
    round: u64,
    outbox: PusherChannel,
    period: Duration,
    cancel: CancellationToken,
) {
    let mut ticker = time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            _ = ticker.tick() => {
                let Some(stragglers) = room.stragglers_in(round).await else {
                    break;
                };
                if stragglers.is_empty() || cancel.is_cancelled() {
                    continue;
                }

                let names: Vec<&str> = stragglers.iter().map(Nickname::as_str).collect();
                let message = Message::warning(format!("Missing voters: {}", names.join(",")));
                if outbox.send(message).is_err() {
                    tracing::debug!("Outbox closed, stopping stragglers notifier");
                    break;
                }
            }
        }
    }
}
