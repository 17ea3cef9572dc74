mod task_progress_repo;

pub use task_progress_repo::TaskProgressRepo;
