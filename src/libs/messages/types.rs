#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(i32), // id
    TaskCompleted(i32),
    TaskActivated(i32),
    TaskDeleted(i32),
    TaskNotFoundWithId(i32),
    CompletedTasksCleared(usize), // count
    TasksHeader,
    TasksNotFound,

    // === STATISTICS MESSAGES ===
    StatisticsHeader,
    StatisticsLoading,
    StatisticsNoTasks,
    StatisticsNothingActive,
    StatisticsLoadError,
    StatisticsChanged { field: &'static str, value: String },

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigFileNotFound,
    ConfigModuleStorage,
    ConfigModuleStats,

    // === PROMPTS ===
    PromptSelectModules,
    PromptDbFileName,
    PromptShowPercentages,
    PromptShowTasks,
}
