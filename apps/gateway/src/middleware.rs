//! # ミドルウェア
//!
//! ルーター全体に適用される横断的関心事を集約する。
//! 現在は Request ID の task-local 伝播のみ。

pub mod request_id;
