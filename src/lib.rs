//! REST API for a news discussion site: articles, comments, users and topics
//! over PostgreSQL.
//!
//! Client-supplied identifiers, sort/filter parameters and request bodies are
//! validated before any of them reach a query, and every failure is reported
//! as a single `{ "msg": ... }` body with a status matching its kind.
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
