use super::constants::*;

pub(crate) fn log_level() -> Option<String> {
    Some("info".to_string())
}

pub(crate) fn log_file_path() -> String {
    LOG_FILE_PATH.to_string()
}

pub(crate) fn database_path() -> Option<String> {
    Some(DATABASE_PATH.to_string())
}
