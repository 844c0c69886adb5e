// ============================================================================
// LocSync - English Translation Table
// ============================================================================
//
// 文件: src/i18n/en_us.rs
// 职责: English translation content definition
// 边界:
//   - ✅ English translation strings definition
//   - ✅ Translation key-value pairs maintenance
//   - ❌ Should not contain translation logic
//   - ❌ Should not contain business logic
//   - ❌ Should not contain other language translations
//
// ============================================================================

/// English translation table
pub const TRANSLATIONS: &[(&str, &str)] = &[
    // Settings related
    ("settings.loaded", "Loaded settings file: {}"),
    (
        "error.settings_not_found",
        "Settings file not found. Please create a settings.toml file in the root directory.",
    ),
    ("error.settings_parse", "Failed to parse settings file: {}"),
    (
        "error.unknown_language",
        "No folder mapping configured for language: {}",
    ),
    // Backup related
    ("backup.creating", "Creating temp backup..."),
    ("backup.created", "Temp backup created successfully."),
    ("backup.deleting", "Deleting temp backup..."),
    ("backup.deleted", "Temp backup deleted successfully."),
    (
        "backup.no_dest_prompt",
        "Temp backup destination not specified in settings.toml. Do you want to continue without temp backup? (yes/no): ",
    ),
    ("backup.continue_without", "Continuing without temp backup."),
    ("backup.aborted", "Exiting the program."),
    // Sync flow related
    ("sync.base_path", "Base path: {}"),
    ("sync.source_language", "Source language: {}"),
    ("sync.target_languages", "Target languages: {}"),
    (
        "sync.all_in_sync",
        "All your files are in sync. You're good to go!",
    ),
    (
        "sync.out_of_sync",
        "There are some files not in sync with the source files. Beginning translation...",
    ),
    (
        "sync.completed",
        "Translations completed successfully. You're good to go!",
    ),
    // Planner related
    ("planner.file_missing", "File {} does not exist in {} folder."),
    (
        "planner.creating_file",
        "Creating {} file in {} folder...",
    ),
    // Translation related
    (
        "translate.unit_start",
        "Translating {} keys in {} to {}...",
    ),
    (
        "translate.rate_limited",
        "Too many requests made to the translation API while translating {} to {}. Skipping this file.",
    ),
    ("translate.unit_failed", "Failed to translate {} to {}: {}"),
    // Write related
    ("write.start", "Writing translations to the target files..."),
    ("write.file_start", "Writing translations to {} in {}..."),
    ("write.file_done", "Translations written to {} in {}."),
    // Scheduler related
    ("scheduler.task_start", "Starting task: {}"),
    ("scheduler.task_success", "Task {} completed in {}s"),
    ("scheduler.task_failed", "Task {} failed after {}s: {}"),
    ("scheduler.task_cancelled", "Task {} was cancelled"),
    ("scheduler.batch_start", "Executing {} tasks concurrently..."),
    (
        "scheduler.batch_complete",
        "{} of {} tasks completed successfully",
    ),
    ("scheduler.task_join_error", "Failed to join task: {}"),
    // Summary related
    ("summary.title", "Sync Summary"),
    ("summary.total_units", "Total units: {}"),
    ("summary.translated_units", "Translated: {}"),
    ("summary.rate_limited_units", "Rate limited: {}"),
    ("summary.failed_units", "Failed: {}"),
    ("summary.duration", "Duration: {}s"),
    (
        "summary.unit_rate_limited",
        "{} {} was skipped due to rate limiting",
    ),
    ("summary.unit_failed", "{} {} failed: {}"),
];
