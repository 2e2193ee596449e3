//! Task registry and the `tasks` listing.

use std::collections::BTreeMap;

/// Name of the diagnostic task that prints the project version.
pub const VERSION_TASK_NAME: &str = "version";

/// Name of the task that writes the project version file.
pub const VERSION_FILE_TASK_NAME: &str = "projectVersionFile";

/// Name of the task that removes build outputs.
pub const CLEAN_TASK_NAME: &str = "clean";

/// Name of the task that prints this listing.
pub const TASKS_TASK_NAME: &str = "tasks";

/// A registered task: name, listing group, and description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskDef {
    pub name: &'static str,
    pub group: &'static str,
    pub description: &'static str,
}

/// All tasks registered by vergo.
pub const TASKS: &[TaskDef] = &[
    TaskDef {
        name: CLEAN_TASK_NAME,
        group: "Build",
        description: "Remove build outputs and fingerprints",
    },
    TaskDef {
        name: VERSION_FILE_TASK_NAME,
        group: "Build",
        description: "Write the project version to build/projectversion.txt",
    },
    TaskDef {
        name: TASKS_TASK_NAME,
        group: "Help",
        description: "Display the tasks runnable from this build",
    },
    TaskDef {
        name: VERSION_TASK_NAME,
        group: "Help",
        description: "Display project version number",
    },
];

/// Look up a registered task by name.
pub fn find_task(name: &str) -> Option<&'static TaskDef> {
    TASKS.iter().find(|t| t.name == name)
}

/// Print the task listing, grouped by task group.
pub fn print_task_listing() {
    let mut groups: BTreeMap<&str, Vec<&TaskDef>> = BTreeMap::new();
    for task in TASKS {
        groups.entry(task.group).or_default().push(task);
    }

    for (i, (group, tasks)) in groups.iter().enumerate() {
        if i > 0 {
            println!();
        }
        let heading = format!("{group} tasks");
        println!("{heading}");
        println!("{}", "-".repeat(heading.len()));
        for task in tasks {
            println!("{} - {}", task.name, task.description);
        }
    }
}
