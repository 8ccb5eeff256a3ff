// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query analytics: what people search for, what fails, what's trending.
//!
//! Three views of the same stream of queries:
//!
//! - **Counters**: lifetime frequency and failure count per normalized query.
//! - **Log**: a ring buffer of timestamped queries for time-windowed reads.
//! - **Sessions**: per-session query and selection traces.
//!
//! Everything lives in memory and dies with the engine. Reads that depend on
//! the clock have `_at` variants taking an explicit `now`.

use std::collections::{HashMap, VecDeque};
use std::time::{Duration, SystemTime};

use serde::Serialize;

use crate::types::QueryCount;
use crate::utils::{char_len, normalize};

/// Session every engine starts in.
pub const DEFAULT_SESSION: &str = "default";

/// Shortest normalized query that gets recorded.
pub const MIN_QUERY_LEN: usize = 2;

const INSIGHT_LIMIT: usize = 5;
const TRENDING_HOURS: u64 = 24;

/// One line of the query log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub query: String,
    pub timestamp: SystemTime,
    pub result_count: usize,
}

/// Queries and selections made in one session, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub queries: Vec<String>,
    /// Ids of selected documents.
    pub selections: Vec<String>,
}

/// Summary of everything recorded so far.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsInsights {
    pub total_searches: u64,
    pub unique_queries: usize,
    pub failed_searches: u64,
    /// Share of searches with at least one result; 0 before any search.
    pub success_rate: f64,
    pub popular: Vec<QueryCount>,
    pub failed: Vec<QueryCount>,
    pub trending: Vec<QueryCount>,
    pub session_count: usize,
}

#[derive(Debug, Clone)]
pub struct SearchAnalytics {
    query_counts: HashMap<String, u64>,
    failed_counts: HashMap<String, u64>,
    log: VecDeque<LogEntry>,
    log_capacity: usize,
    sessions: HashMap<String, Session>,
    active: String,
}

impl SearchAnalytics {
    pub fn new(log_capacity: usize) -> Self {
        let mut sessions = HashMap::new();
        sessions.insert(DEFAULT_SESSION.to_string(), Session::default());
        Self {
            query_counts: HashMap::new(),
            failed_counts: HashMap::new(),
            log: VecDeque::with_capacity(log_capacity.min(1024)),
            log_capacity: log_capacity.max(1),
            sessions,
            active: DEFAULT_SESSION.to_string(),
        }
    }

    pub fn record_query(&mut self, query: &str, result_count: usize) {
        self.record_query_at(query, result_count, SystemTime::now());
    }

    /// Record a query as if it ran at `at`. Queries under two characters are ignored.
    pub fn record_query_at(&mut self, query: &str, result_count: usize, at: SystemTime) {
        let query = normalize(query);
        if char_len(&query) < MIN_QUERY_LEN {
            return;
        }

        *self.query_counts.entry(query.clone()).or_default() += 1;
        if result_count == 0 {
            *self.failed_counts.entry(query.clone()).or_default() += 1;
        }

        if self.log.len() >= self.log_capacity {
            self.log.pop_front();
        }
        self.log.push_back(LogEntry {
            query: query.clone(),
            timestamp: at,
            result_count,
        });

        self.active_session().queries.push(query);
    }

    /// Note that `document_id` was picked from the results of `query`.
    pub fn record_selection(&mut self, query: &str, document_id: &str) {
        tracing::trace!(query, document_id, session = %self.active, "selection");
        self.active_session().selections.push(document_id.to_string());
    }

    /// Make `id` the active session, creating it if needed.
    pub fn start_session(&mut self, id: &str) {
        self.sessions.entry(id.to_string()).or_default();
        self.active = id.to_string();
    }

    pub fn active_session_id(&self) -> &str {
        &self.active
    }

    pub fn session(&self, id: &str) -> Option<&Session> {
        self.sessions.get(id)
    }

    fn active_session(&mut self) -> &mut Session {
        self.sessions.entry(self.active.clone()).or_default()
    }

    /// Most frequent queries, count descending then alphabetical.
    pub fn popular_queries(&self, limit: usize) -> Vec<QueryCount> {
        top_counts(self.query_counts.iter().map(|(q, n)| (q.as_str(), *n)), limit)
    }

    /// Most frequent queries that returned nothing.
    pub fn failed_queries(&self, limit: usize) -> Vec<QueryCount> {
        top_counts(self.failed_counts.iter().map(|(q, n)| (q.as_str(), *n)), limit)
    }

    /// Up to `limit` logged queries, newest first.
    pub fn recent_queries(&self, limit: usize) -> Vec<LogEntry> {
        self.log.iter().rev().take(limit).cloned().collect()
    }

    pub fn trending_queries(&self, hours_back: u64) -> Vec<QueryCount> {
        self.trending_queries_at(hours_back, SystemTime::now())
    }

    /// Query counts over the logged queries from the last `hours_back` hours.
    ///
    /// Entries stamped after `now` count as current.
    pub fn trending_queries_at(&self, hours_back: u64, now: SystemTime) -> Vec<QueryCount> {
        let window = Duration::from_secs(hours_back.saturating_mul(3600));
        let mut counts: HashMap<&str, u64> = HashMap::new();
        for entry in &self.log {
            let age = now.duration_since(entry.timestamp).unwrap_or(Duration::ZERO);
            if age <= window {
                *counts.entry(entry.query.as_str()).or_default() += 1;
            }
        }
        top_counts(counts.into_iter(), usize::MAX)
    }

    pub fn insights(&self) -> AnalyticsInsights {
        self.insights_at(SystemTime::now())
    }

    pub fn insights_at(&self, now: SystemTime) -> AnalyticsInsights {
        let total_searches: u64 = self.query_counts.values().sum();
        let failed_searches: u64 = self.failed_counts.values().sum();
        let success_rate = if total_searches == 0 {
            0.0
        } else {
            (total_searches - failed_searches) as f64 / total_searches as f64
        };
        let mut trending = self.trending_queries_at(TRENDING_HOURS, now);
        trending.truncate(INSIGHT_LIMIT);

        AnalyticsInsights {
            total_searches,
            unique_queries: self.query_counts.len(),
            failed_searches,
            success_rate,
            popular: self.popular_queries(INSIGHT_LIMIT),
            failed: self.failed_queries(INSIGHT_LIMIT),
            trending,
            session_count: self.sessions.len(),
        }
    }
}

fn top_counts<'a>(counts: impl Iterator<Item = (&'a str, u64)>, limit: usize) -> Vec<QueryCount> {
    let mut counts: Vec<(&str, u64)> = counts.collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    counts
        .into_iter()
        .take(limit)
        .map(|(query, count)| QueryCount {
            query: query.to_string(),
            count,
        })
        .collect()
}
