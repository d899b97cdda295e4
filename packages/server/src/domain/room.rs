//! Room エンティティ
//!
//! `Room` はメンバーとラウンド状態を保持する純粋なデータで、全ての判定ロジックを持ちます。
//! `SharedRoom` は `Room` をロックで包み、ラウンドの進行に影響する変更があるたびに
//! watch チャンネルでシグナルを送ります。
//!
//! ## ラウンドの完了
//!
//! 完了判定・結果の取得・投票済みフラグのリセットは `Room::try_complete_round` の中で
//! 1 回のロック区間として行われます。同じラウンドを待っている他の参加者は、
//! 保存された `last_outcome` を受け取ります。

use std::collections::HashMap;

use tokio::sync::{Mutex, watch};

use super::{
    entity::{Ballot, ClientSession, RoundOutcome},
    error::RoomError,
    value_object::{ConnectionId, Nickname, RoomId, Timestamp, Vote},
};

/// 投票ルーム
#[derive(Debug, Clone)]
pub struct Room {
    pub id: RoomId,
    pub created_at: Timestamp,
    members: HashMap<ConnectionId, ClientSession>,
    /// 現在受付中のラウンド番号
    round: u64,
    last_outcome: Option<RoundOutcome>,
}

impl Room {
    pub fn new(id: RoomId, created_at: Timestamp) -> Self {
        Self {
            id,
            created_at,
            members: HashMap::new(),
            round: 0,
            last_outcome: None,
        }
    }

    pub fn round(&self) -> u64 {
        self.round
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    pub fn is_member(&self, connection_id: &ConnectionId) -> bool {
        self.members.contains_key(connection_id)
    }

    /// 参加順（同時刻ならニックネーム順）のメンバー一覧
    pub fn members(&self) -> Vec<&ClientSession> {
        let mut members: Vec<&ClientSession> = self.members.values().collect();
        members.sort_by(|a, b| {
            a.joined_at
                .cmp(&b.joined_at)
                .then_with(|| a.nickname.cmp(&b.nickname))
        });
        members
    }

    pub fn register(&mut self, session: ClientSession) -> Result<(), RoomError> {
        if self.members.contains_key(&session.connection_id) {
            return Err(RoomError::AlreadyRegistered(
                session.connection_id.to_string(),
            ));
        }
        self.members.insert(session.connection_id, session);
        Ok(())
    }

    /// 参加者を削除する。既に存在しない場合は何もしない（冪等）。
    pub fn unregister(&mut self, connection_id: &ConnectionId) -> Option<ClientSession> {
        self.members.remove(connection_id)
    }

    /// 投票を記録し、その投票が属するラウンド番号を返す
    pub fn cast_vote(
        &mut self,
        connection_id: &ConnectionId,
        vote: Vote,
    ) -> Result<u64, RoomError> {
        let session = self
            .members
            .get_mut(connection_id)
            .ok_or_else(|| RoomError::ParticipantNotFound(connection_id.to_string()))?;
        session.cast(vote);
        Ok(self.round)
    }

    /// 全員が投票済みか（メンバーがいない場合も true）
    pub fn all_voted(&self) -> bool {
        self.members.values().all(|session| session.has_voted)
    }

    /// まだ投票していないメンバーのニックネーム（ニックネーム順）
    pub fn stragglers(&self) -> Vec<Nickname> {
        let mut missing: Vec<Nickname> = self
            .members
            .values()
            .filter(|session| !session.has_voted)
            .map(|session| session.nickname.clone())
            .collect();
        missing.sort();
        missing
    }

    /// 指定ラウンドの完了を試みる
    ///
    /// - 既に閉じられたラウンドなら、最後に完了したラウンドの結果を返す
    /// - 受付中のラウンドで全員が投票済みなら、結果を確定して投票済みフラグをリセットし、
    ///   次のラウンドへ進める
    /// - それ以外は `None`
    pub fn try_complete_round(&mut self, round: u64) -> Option<RoundOutcome> {
        if round < self.round {
            return self.last_outcome.clone();
        }
        if round > self.round || !self.all_voted() {
            return None;
        }

        let mut ballots: Vec<Ballot> = self
            .members
            .values()
            .map(|session| Ballot {
                nickname: session.nickname.clone(),
                vote: session.current_vote,
            })
            .collect();
        ballots.sort_by(|a, b| a.nickname.cmp(&b.nickname));

        for session in self.members.values_mut() {
            session.has_voted = false;
        }

        let outcome = RoundOutcome { round, ballots };
        self.round += 1;
        self.last_outcome = Some(outcome.clone());
        Some(outcome)
    }
}

/// ロックとラウンド通知を備えた共有 Room
///
/// メンバーや投票状態の読み書きは必ず内部のロックを通して行われます。
/// ロックは操作の間だけ保持し、I/O をまたいで保持することはありません。
#[derive(Debug)]
pub struct SharedRoom {
    id: RoomId,
    created_at: Timestamp,
    state: Mutex<Room>,
    /// 変更のたびにインクリメントされる世代番号
    round_signal: watch::Sender<u64>,
}

impl SharedRoom {
    pub fn new(room: Room) -> Self {
        let (round_signal, _) = watch::channel(0);
        Self {
            id: room.id.clone(),
            created_at: room.created_at,
            state: Mutex::new(room),
            round_signal,
        }
    }

    pub fn id(&self) -> &RoomId {
        &self.id
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// ラウンドの進行に関わる変更を購読する
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.round_signal.subscribe()
    }

    fn signal(&self) {
        // send_modify は受信者がいなくても値を更新する
        self.round_signal.send_modify(|generation| *generation += 1);
    }

    pub async fn register(&self, session: ClientSession) -> Result<(), RoomError> {
        self.state.lock().await.register(session)?;
        self.signal();
        Ok(())
    }

    pub async fn unregister(&self, connection_id: &ConnectionId) -> Option<ClientSession> {
        let removed = self.state.lock().await.unregister(connection_id);
        if removed.is_some() {
            self.signal();
        }
        removed
    }

    pub async fn cast_vote(
        &self,
        connection_id: &ConnectionId,
        vote: Vote,
    ) -> Result<u64, RoomError> {
        let round = self.state.lock().await.cast_vote(connection_id, vote)?;
        self.signal();
        Ok(round)
    }

    pub async fn all_voted(&self) -> bool {
        self.state.lock().await.all_voted()
    }

    pub async fn stragglers(&self) -> Vec<Nickname> {
        self.state.lock().await.stragglers()
    }

    /// 指定ラウンドがまだ受付中ならその未投票者、閉じていれば `None`
    pub async fn stragglers_in(&self, round: u64) -> Option<Vec<Nickname>> {
        let state = self.state.lock().await;
        (state.round() == round).then(|| state.stragglers())
    }

    pub async fn try_complete_round(&self, round: u64) -> Option<RoundOutcome> {
        let outcome = self.state.lock().await.try_complete_round(round);
        if outcome.as_ref().is_some_and(|o| o.round == round) {
            self.signal();
        }
        outcome
    }

    pub async fn member_count(&self) -> usize {
        self.state.lock().await.member_count()
    }

    /// 現在の Room の複製（HTTP API やテスト用）
    pub async fn snapshot(&self) -> Room {
        self.state.lock().await.clone()
    }
}
