/// Every user-facing text of the application.
///
/// Variants carry the values interpolated into the text; the wording itself
/// lives in the `Display` impl in `display.rs`.
#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(u64, String), // id, title
    TaskUpdated(u64),
    TaskDeleted(u64),
    TaskCompleted(u64),
    TaskReopened(u64),
    TaskNotFound(u64),
    TasksHeader,
    NoTasksFound,
    NoTaskChanges,
    InvalidDueDate(String),
    InvalidStatusFilter(String),

    // === PROJECT MESSAGES ===
    ProjectCreated(String),
    ProjectAlreadyExists(String),
    ProjectDeleted(String, usize), // name, reassigned tasks
    ProjectNotFound(String),
    ProjectUnknown(String),
    ProjectsHeader,
    NoProjectsFound,
    ConfirmDeleteProject(String),

    // === VIEW MESSAGES ===
    TodayHeader,
    NoTasksForToday,
    UpcomingHeader,
    NoUpcomingTasks,
    DashboardHeader,
    RecentTasksHeader,
    NoRecentTasks,
    SampleDataInitialized,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigFileNotFound,
    ConfigWizardHeader,
    PromptRecentLimit,
    PromptUpcomingWeekday,
    PromptSeedSampleData,
    PromptDatabasePath,

    // === GENERAL MESSAGES ===
    OperationCancelled,
    StorageWriteFailed(String),
}
