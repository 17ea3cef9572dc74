pub mod task_progress;
