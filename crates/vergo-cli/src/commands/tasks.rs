//! `tasks` task handler.

pub fn exec() {
    vergo_ops::ops_tasks::print_task_listing();
}
