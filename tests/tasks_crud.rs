#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use todostat::db::tasks::Tasks;
    use todostat::libs::task::{Task, TaskFilter};
    use tokio::sync::{Mutex, MutexGuard};

    // Every test points HOME at its own directory, so they must not overlap
    static HOME_LOCK: Mutex<()> = Mutex::const_new(());

    struct TaskTestContext {
        _temp_dir: TempDir,
        _home: MutexGuard<'static, ()>,
    }

    impl TestContext for TaskTestContext {
        fn setup() -> Self {
            let home = HOME_LOCK.blocking_lock();
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            TaskTestContext {
                _temp_dir: temp_dir,
                _home: home,
            }
        }
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_insert_and_fetch(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let id = tasks.insert(&Task::new("Title1", "Description1")).unwrap();
        let stored = tasks.get_by_id(id).unwrap().unwrap();

        assert_eq!(stored.title, "Title1");
        assert_eq!(stored.description, "Description1");
        assert!(!stored.completed);
        assert!(stored.timestamp.is_some());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_fetch_by_filter(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();
        tasks.insert(&Task::new("Title1", "Description1")).unwrap();
        tasks.insert(&Task::new("Title2", "Description2").completed()).unwrap();
        tasks.insert(&Task::new("Title3", "Description3").completed()).unwrap();

        assert_eq!(tasks.fetch(TaskFilter::All).unwrap().len(), 3);
        assert_eq!(tasks.fetch(TaskFilter::Active).unwrap().len(), 1);
        assert_eq!(tasks.fetch(TaskFilter::Completed).unwrap().len(), 2);

        let titles: Vec<String> = tasks.fetch(TaskFilter::All).unwrap().into_iter().map(|task| task.title).collect();
        assert_eq!(titles, vec!["Title1", "Title2", "Title3"]);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_complete_and_activate(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();
        let id = tasks.insert(&Task::new("Title1", "Description1")).unwrap();

        assert_eq!(tasks.complete(id).unwrap(), 1);
        assert!(tasks.get_by_id(id).unwrap().unwrap().completed);

        assert_eq!(tasks.activate(id).unwrap(), 1);
        assert!(!tasks.get_by_id(id).unwrap().unwrap().completed);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_missing_id(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        assert!(tasks.get_by_id(42).unwrap().is_none());
        assert_eq!(tasks.complete(42).unwrap(), 0);
        assert_eq!(tasks.delete(42).unwrap(), 0);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_delete_and_clear_completed(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();
        let keep = tasks.insert(&Task::new("Keep", "")).unwrap();
        let remove = tasks.insert(&Task::new("Remove", "")).unwrap();
        tasks.insert(&Task::new("Done 1", "").completed()).unwrap();
        tasks.insert(&Task::new("Done 2", "").completed()).unwrap();

        assert_eq!(tasks.delete(remove).unwrap(), 1);
        assert_eq!(tasks.clear_completed().unwrap(), 2);

        let remaining = tasks.fetch(TaskFilter::All).unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, Some(keep));

        assert_eq!(tasks.delete_all().unwrap(), 1);
        assert!(tasks.fetch(TaskFilter::All).unwrap().is_empty());
    }
}
