//! Example tasks shown on first use.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use super::{PersistedTaskData, Priority, Task, TaskId};

struct SeedTask {
    id: u64,
    title: &'static str,
    description: &'static str,
    priority: Priority,
    completed: bool,
    due: (i32, u32, u32),
    created: (i32, u32, u32, u32, u32),
}

const SEED: [SeedTask; 4] = [
    SeedTask {
        id: 1,
        title: "Complete React assignment",
        description: "Build a task tracker application",
        priority: Priority::Medium,
        completed: false,
        due: (2024, 1, 20),
        created: (2024, 1, 15, 10, 0),
    },
    SeedTask {
        id: 2,
        title: "Review JavaScript concepts",
        description: "Go through ES6+ features",
        priority: Priority::Low,
        completed: true,
        due: (2024, 1, 18),
        created: (2024, 1, 14, 15, 30),
    },
    SeedTask {
        id: 3,
        title: "Testing completed tasks",
        description: "Ensure completed tasks show correctly in the UI",
        priority: Priority::High,
        completed: true,
        due: (2025, 7, 7),
        created: (2025, 7, 1, 12, 0),
    },
    SeedTask {
        id: 4,
        title: "Testing pending tasks",
        description: "Ensure pending tasks are displayed separately",
        priority: Priority::High,
        completed: false,
        due: (2025, 7, 7),
        created: (2025, 6, 16, 9, 0),
    },
];

fn timestamp((year, month, day, hour, minute): (i32, u32, u32, u32, u32)) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

/// Returns the fixed example collection used when nothing usable is stored.
#[must_use]
pub fn seed_tasks() -> Vec<Task> {
    SEED.iter()
        .map(|seed| {
            let (year, month, day) = seed.due;
            Task::from_persisted(PersistedTaskData {
                id: TaskId::new(seed.id),
                title: seed.title.to_owned(),
                description: seed.description.to_owned(),
                priority: seed.priority,
                completed: seed.completed,
                due_date: NaiveDate::from_ymd_opt(year, month, day),
                created_at: timestamp(seed.created),
            })
        })
        .collect()
}
