#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Mutex;

use shaduler::db::models::{DayData, NewTask, StoredTask, StoredTaskId, TaskStatus};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// Variables are restored on unwind, and access to the process environment
/// is serialized across tests.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

pub fn new_task(name: &str, start: &str, end: &str) -> NewTask {
    NewTask {
        name: name.to_string(),
        start_time: start.to_string(),
        end_time: end.to_string(),
        status: TaskStatus::Pending,
    }
}

/// Two days; the first has an overlapping pair on work place 1.
pub fn sample_days() -> Vec<DayData> {
    let mut first = DayData::with_default_work_places("2025-06-01");
    first.work_places[0].tasks = vec![
        StoredTask {
            id: StoredTaskId::new(1),
            name: "Unload".to_string(),
            start_time: "08:00".to_string(),
            end_time: "10:00".to_string(),
            status: TaskStatus::Approved,
        },
        StoredTask {
            id: StoredTaskId::new(2),
            name: "Inspect".to_string(),
            start_time: "09:00".to_string(),
            end_time: "11:00".to_string(),
            status: TaskStatus::Rejected,
        },
    ];
    let second = DayData::with_default_work_places("2025-06-02");
    vec![first, second]
}
